//! Drag State
//!
//! Pure state machine for one reorder gesture over a flat list.
//! Insertion indices are positions in the list *before* the dragged node
//! is removed, in `0..=len`.

/// A committed move, ready for `move_node_by_index(from_index, to_index)`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reorder {
    pub from_index: usize,
    pub to_index: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DragState {
    pub is_dragging: bool,
    pub dragged_id: Option<String>,
    /// Position of the dragged node when the gesture started
    pub dragged_index: Option<usize>,
    /// Where the node would land if dropped now
    pub insertion_index: Option<usize>,
}

impl DragState {
    pub fn start(&mut self, id: impl Into<String>, index: usize) {
        *self = DragState {
            is_dragging: true,
            dragged_id: Some(id.into()),
            dragged_index: Some(index),
            insertion_index: None,
        };
    }

    /// Returns false when the value did not change
    pub fn update_insertion_index(&mut self, index: usize) -> bool {
        if self.insertion_index == Some(index) {
            return false;
        }
        self.insertion_index = Some(index);
        true
    }

    pub fn end(&mut self) {
        *self = DragState::default();
    }

    /// Resolve the gesture into a move, if it would change anything
    ///
    /// The insertion index counts the dragged node itself, the final list
    /// does not, so targets past the original slot shift down by one.
    pub fn commit(&self) -> Option<Reorder> {
        let dragged = self.dragged_index?;
        let insertion = self.insertion_index?;
        let to_index = if insertion > dragged {
            insertion - 1
        } else {
            insertion
        };
        if to_index == dragged {
            return None;
        }
        Some(Reorder {
            from_index: dragged,
            to_index,
        })
    }

    pub fn is_dragged(&self, id: &str) -> bool {
        self.dragged_id.as_deref() == Some(id)
    }

    /// Whether the "insert before" marker shows above the node at `index`
    ///
    /// Hidden next to the dragged node's own slot, where dropping is a no-op.
    pub fn shows_marker_before(&self, index: usize) -> bool {
        if !self.is_dragging || self.insertion_index != Some(index) {
            return false;
        }
        match self.dragged_index {
            Some(dragged) => dragged != index && dragged + 1 != index,
            None => true,
        }
    }

    /// Whether the "insert after" marker shows below the node at `index`
    ///
    /// Only the last node carries it, when the insertion point is the end.
    pub fn shows_marker_after(&self, index: usize, len: usize) -> bool {
        if !self.is_dragging || len == 0 || index + 1 != len || self.insertion_index != Some(len) {
            return false;
        }
        self.dragged_index != Some(len - 1)
    }
}

/// Candidate insertion index while hovering the node at `index`
///
/// Above the node's vertical midpoint → before it, otherwise after it.
pub fn insertion_index_for_pointer(index: usize, pointer_y: f64, rect_top: f64, rect_height: f64) -> usize {
    let offset = pointer_y - rect_top;
    if offset < rect_height / 2.0 {
        index
    } else {
        index + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dragging(from: usize, insertion: Option<usize>) -> DragState {
        let mut state = DragState::default();
        state.start("n", from);
        if let Some(i) = insertion {
            state.update_insertion_index(i);
        }
        state
    }

    #[test]
    fn test_start_and_end() {
        let mut state = DragState::default();
        state.start("b", 1);
        assert!(state.is_dragging);
        assert_eq!(state.dragged_id.as_deref(), Some("b"));
        assert_eq!(state.dragged_index, Some(1));
        assert_eq!(state.insertion_index, None);

        state.end();
        assert_eq!(state, DragState::default());
    }

    #[test]
    fn test_update_insertion_reports_change() {
        let mut state = dragging(0, None);
        assert!(state.update_insertion_index(2));
        assert!(!state.update_insertion_index(2));
        assert!(state.update_insertion_index(3));
    }

    #[test]
    fn test_commit_needs_both_indices() {
        assert_eq!(DragState::default().commit(), None);
        assert_eq!(dragging(1, None).commit(), None);
    }

    #[test]
    fn test_commit_corrects_for_removal() {
        assert_eq!(
            dragging(0, Some(3)).commit(),
            Some(Reorder { from_index: 0, to_index: 2 })
        );
        assert_eq!(
            dragging(2, Some(0)).commit(),
            Some(Reorder { from_index: 2, to_index: 0 })
        );
    }

    #[test]
    fn test_commit_own_slot_is_noop() {
        assert_eq!(dragging(1, Some(1)).commit(), None);
        assert_eq!(dragging(1, Some(2)).commit(), None);
    }

    #[test]
    fn test_pointer_midpoint() {
        assert_eq!(insertion_index_for_pointer(2, 105.0, 100.0, 40.0), 2);
        assert_eq!(insertion_index_for_pointer(2, 125.0, 100.0, 40.0), 3);
        assert_eq!(insertion_index_for_pointer(2, 120.0, 100.0, 40.0), 3);
    }

    #[test]
    fn test_drag_b_over_c() {
        // [A, B, C], dragging B (index 1) over C (index 2, top 80, height 40)
        let mut state = dragging(1, None);

        state.update_insertion_index(insertion_index_for_pointer(2, 90.0, 80.0, 40.0));
        assert_eq!(state.insertion_index, Some(2));
        assert_eq!(state.commit(), None);

        state.update_insertion_index(insertion_index_for_pointer(2, 110.0, 80.0, 40.0));
        assert_eq!(state.insertion_index, Some(3));
        assert_eq!(state.commit(), Some(Reorder { from_index: 1, to_index: 2 }));
    }

    #[test]
    fn test_marker_before_suppressed_around_own_slot() {
        let state = dragging(1, Some(1));
        assert!(!state.shows_marker_before(1));
        let state = dragging(1, Some(2));
        assert!(!state.shows_marker_before(2));
        let state = dragging(1, Some(0));
        assert!(state.shows_marker_before(0));
        assert!(!state.shows_marker_before(1));
        let state = dragging(0, Some(2));
        assert!(state.shows_marker_before(2));
    }

    #[test]
    fn test_marker_after_only_on_last() {
        let state = dragging(0, Some(3));
        assert!(state.shows_marker_after(2, 3));
        assert!(!state.shows_marker_after(1, 3));

        let state = dragging(2, Some(3));
        assert!(!state.shows_marker_after(2, 3));

        assert!(!DragState::default().shows_marker_after(2, 3));
    }
}
