//! Scroll position of a fixed-extent list.
//!
//! The header only needs two things from the list: whether it rests at its
//! top, and a place to send the scroll delta it did not claim. This model
//! keeps the position as first visible item index plus the offset into that
//! item, the same shape a lazy list reports after measuring.

use crate::nested_scroll::{NestedScrollConnection, NestedScrollSource};
use foldhead_core::MutableState;
use foldhead_ui_graphics::Offset;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ListGeometry {
    pub item_count: usize,
    pub item_extent: f32,
    pub viewport_extent: f32,
}

impl ListGeometry {
    pub fn content_extent(&self) -> f32 {
        self.item_count as f32 * self.item_extent
    }

    /// Largest reachable absolute offset.
    pub fn max_offset(&self) -> f32 {
        (self.content_extent() - self.viewport_extent).max(0.0)
    }
}

/// First visible item and the offset scrolled into it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ListPosition {
    pub index: usize,
    pub offset: f32,
}

/// Observable list position. Index and offset live in one state so
/// observers never see one half updated without the other.
#[derive(Clone, Debug)]
pub struct ListScrollState {
    position: MutableState<ListPosition>,
    geometry: ListGeometry,
}

impl ListScrollState {
    pub fn new(item_count: usize, item_extent: f32, viewport_extent: f32) -> Self {
        let item_extent = if item_extent.is_finite() && item_extent > 0.0 {
            item_extent
        } else {
            log::warn!("list item extent {item_extent} is not positive; using 1.0");
            1.0
        };
        Self {
            position: MutableState::new(ListPosition::default()),
            geometry: ListGeometry {
                item_count,
                item_extent,
                viewport_extent: viewport_extent.max(0.0),
            },
        }
    }

    pub fn geometry(&self) -> ListGeometry {
        self.geometry
    }

    pub fn first_visible_index(&self) -> usize {
        self.position.get().index
    }

    pub fn first_visible_offset(&self) -> f32 {
        self.position.get().offset
    }

    pub fn position(&self) -> ListPosition {
        self.position.get()
    }

    pub fn position_state(&self) -> MutableState<ListPosition> {
        self.position.clone()
    }

    /// True when the first item is fully in view at its top edge.
    pub fn is_at_top(&self) -> bool {
        self.position
            .with(|position| position.index == 0 && position.offset == 0.0)
    }

    /// Distance scrolled from the top of the content.
    pub fn absolute_offset(&self) -> f32 {
        let extent = self.geometry.item_extent;
        self.position
            .with(|position| position.index as f32 * extent + position.offset)
    }

    /// Scrolls by `delta` (positive moves toward later items), clamped to the
    /// content. Returns the distance actually scrolled.
    pub fn scroll_by(&self, delta: f32) -> f32 {
        let current = self.absolute_offset();
        let target = (current + delta).clamp(0.0, self.geometry.max_offset());
        self.set_absolute_offset(target);
        target - current
    }

    pub fn scroll_to_item(&self, index: usize, offset: f32) {
        let absolute = index as f32 * self.geometry.item_extent + offset;
        self.set_absolute_offset(absolute.clamp(0.0, self.geometry.max_offset()));
    }

    /// Runs one finger-drag delta through the nested scroll protocol.
    ///
    /// `drag_delta_y` is in pointer coordinates: dragging down (positive)
    /// scrolls back toward the top. The connection is offered the delta first;
    /// the list applies what is left. Returns the part the list applied, in
    /// pointer coordinates.
    pub fn dispatch_drag(&self, drag_delta_y: f32, connection: &dyn NestedScrollConnection) -> f32 {
        let available = Offset::vertical(drag_delta_y);
        let parent_consumed = connection.on_pre_scroll(available, NestedScrollSource::UserInput);
        let remaining = available - parent_consumed;

        let list_consumed = if remaining.y != 0.0 {
            -self.scroll_by(-remaining.y)
        } else {
            0.0
        };

        connection.on_post_scroll(
            Offset::vertical(list_consumed),
            Offset::vertical(remaining.y - list_consumed),
            NestedScrollSource::UserInput,
        );
        list_consumed
    }

    fn set_absolute_offset(&self, absolute: f32) {
        let extent = self.geometry.item_extent;
        let index = (absolute / extent).floor() as usize;
        let offset = absolute - index as f32 * extent;
        self.position.set(ListPosition { index, offset });
    }
}
