//! Pass-ordered pointer dispatch.
//!
//! Every event visits all `Initial` handlers, then `Main`, then `Final`.
//! Within a pass, handlers run in registration order.

use super::types::{PointerEvent, PointerEventPass};
use smallvec::SmallVec;
use std::rc::Rc;

pub type PointerHandlerId = u64;

type PointerHandler = Rc<dyn Fn(&PointerEvent, PointerEventPass)>;

#[derive(Default)]
pub struct PointerDispatcher {
    handlers: SmallVec<[(PointerHandlerId, PointerEventPass, PointerHandler); 4]>,
    next_id: PointerHandlerId,
}

impl PointerDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_handler(
        &mut self,
        pass: PointerEventPass,
        handler: impl Fn(&PointerEvent, PointerEventPass) + 'static,
    ) -> PointerHandlerId {
        self.next_id += 1;
        let id = self.next_id;
        self.handlers.push((id, pass, Rc::new(handler)));
        id
    }

    pub fn remove_handler(&mut self, id: PointerHandlerId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(handler_id, _, _)| *handler_id != id);
        self.handlers.len() != before
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    pub fn dispatch(&self, event: &PointerEvent) {
        if self.handlers.is_empty() {
            log::trace!("pointer {:?} dropped: no handlers", event.kind);
            return;
        }
        for pass in PointerEventPass::ORDER {
            for (_, handler_pass, handler) in &self.handlers {
                if *handler_pass == pass {
                    handler(event, pass);
                }
            }
        }
    }
}
