//! Drag Reorder
//!
//! HTML5 drag-and-drop plumbing for the right game column. Only the visual
//! arrangement moves; pair data is never touched. The dragged item is
//! identified by its pair-index tag.

use leptos::prelude::*;
use web_sys::DragEvent;

/// Where the dragged item lands relative to the hovered one
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropPosition {
    Before,
    After,
}

/// Drag state signals
#[derive(Clone, Copy)]
pub struct DragSignals {
    pub dragging: ReadSignal<Option<usize>>,
    pub set_dragging: WriteSignal<Option<usize>>,
}

pub fn create_drag_signals() -> DragSignals {
    let (dragging, set_dragging) = signal(None::<usize>);
    DragSignals {
        dragging,
        set_dragging,
    }
}

/// Classify the pointer against the hovered element's vertical midpoint:
/// above it the dragged item goes before the hovered one, below it after.
pub fn drop_position(pointer_y: f64, rect_top: f64, rect_height: f64) -> DropPosition {
    if pointer_y - rect_top - rect_height / 2.0 < 0.0 {
        DropPosition::Before
    } else {
        DropPosition::After
    }
}

/// Dragstart handler for a right-column item: marks it as dragged. Some
/// browsers require data to be set before they start the drag gesture.
pub fn make_on_dragstart(
    drag: DragSignals,
    pair_index: usize,
) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        if let Some(transfer) = ev.data_transfer() {
            let _ = transfer.set_data("text/plain", "");
        }
        drag.set_dragging.set(Some(pair_index));
    }
}

/// Dragend handler: clears the dragged-item marker.
pub fn make_on_dragend(drag: DragSignals) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| {
        drag.set_dragging.set(None);
    }
}

/// Drop handler: reordering already happened during dragover, so dropping
/// only needs to suppress the default browser behavior.
pub fn on_drop(ev: DragEvent) {
    ev.prevent_default();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_above_midpoint_goes_before() {
        assert_eq!(drop_position(104.0, 100.0, 40.0), DropPosition::Before);
        assert_eq!(drop_position(119.9, 100.0, 40.0), DropPosition::Before);
    }

    #[test]
    fn pointer_below_midpoint_goes_after() {
        assert_eq!(drop_position(120.0, 100.0, 40.0), DropPosition::After);
        assert_eq!(drop_position(139.0, 100.0, 40.0), DropPosition::After);
    }
}
