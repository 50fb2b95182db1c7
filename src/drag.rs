/// One reorder per completed gesture: the dragged slot and where it landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ReorderCommand {
    pub(crate) src: usize,
    pub(crate) dst: usize,
}

/// Tracks a single HTML5 drag gesture over the color list. Hover updates
/// arriving without an active source are stale events and are dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct DragTracker {
    source: Option<usize>,
    hover: Option<usize>,
}

impl DragTracker {
    pub(crate) fn begin(&mut self, index: usize) {
        self.source = Some(index);
        self.hover = None;
    }

    pub(crate) fn hover(&mut self, index: usize) {
        if self.source.is_some() {
            self.hover = Some(index);
        }
    }

    pub(crate) fn leave(&mut self, index: usize) {
        if self.hover == Some(index) {
            self.hover = None;
        }
    }

    pub(crate) fn source(&self) -> Option<usize> {
        self.source
    }

    pub(crate) fn hover_target(&self) -> Option<usize> {
        self.hover
    }

    pub(crate) fn is_dragging(&self) -> bool {
        self.source.is_some()
    }

    /// Resolves the gesture on drop or dragend. Degenerate gestures (no
    /// source, no hover, or source == hover) produce no command.
    pub(crate) fn finish(&mut self) -> Option<ReorderCommand> {
        let source = self.source.take();
        let hover = self.hover.take();
        match (source, hover) {
            (Some(src), Some(dst)) if src != dst => Some(ReorderCommand { src, dst }),
            _ => None,
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn full_gesture_produces_one_command() {
        let mut tracker = DragTracker::default();
        tracker.begin(2);
        tracker.hover(4);
        tracker.hover(5);
        assert_eq!(
            tracker.finish(),
            Some(ReorderCommand { src: 2, dst: 5 })
        );
        // gesture is consumed
        assert_eq!(tracker.finish(), None);
        assert!(!tracker.is_dragging());
    }

    #[wasm_bindgen_test]
    fn hover_without_source_is_ignored() {
        let mut tracker = DragTracker::default();
        tracker.hover(3);
        assert_eq!(tracker.finish(), None);
    }

    #[wasm_bindgen_test]
    fn dropping_on_the_source_slot_is_a_no_op() {
        let mut tracker = DragTracker::default();
        tracker.begin(1);
        tracker.hover(1);
        assert_eq!(tracker.finish(), None);
    }

    #[wasm_bindgen_test]
    fn leave_clears_only_the_matching_hover() {
        let mut tracker = DragTracker::default();
        tracker.begin(0);
        tracker.hover(6);
        tracker.leave(5);
        assert_eq!(tracker.hover_target(), Some(6));
        tracker.leave(6);
        assert_eq!(tracker.hover_target(), None);
        assert_eq!(tracker.finish(), None);
    }

}
