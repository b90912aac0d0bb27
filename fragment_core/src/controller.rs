//! Highlight index and text-box synchronization

use crate::store::FragmentStore;
use crate::text_box::CursorTextBox;

/// Tracks which fragment is highlighted and keeps the text box bound to it
///
/// Navigation only moves the index. Rebinding happens in [`on_tick`], once per
/// host tick, so that a highlight change and the render pass that depends on
/// it stay ordered. Deletion is the exception and rebinds immediately, since
/// the fragment at the highlighted index changes identity.
///
/// [`on_tick`]: EditorController::on_tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorController {
    highlight: usize,
    previous_highlight: usize,
}

impl EditorController {
    pub fn new(highlight: usize) -> Self {
        Self {
            highlight,
            previous_highlight: highlight,
        }
    }

    pub fn highlight(&self) -> usize {
        self.highlight
    }

    pub fn previous_highlight(&self) -> usize {
        self.previous_highlight
    }

    /// Move the highlight by `delta`, wrapping over the store length.
    pub fn move_highlight(&mut self, store: &FragmentStore, delta: isize) {
        let len = store.len() as isize;
        self.highlight = (self.highlight as isize + delta).rem_euclid(len) as usize;
    }

    /// Rebind the text box if the highlight moved since the last tick.
    ///
    /// Returns whether a rebind happened.
    pub fn on_tick(&mut self, store: &FragmentStore, text_box: &mut CursorTextBox) -> bool {
        if self.highlight == self.previous_highlight {
            return false;
        }
        log::debug!(
            "highlight {} -> {}, rebinding text box",
            self.previous_highlight,
            self.highlight
        );
        text_box.bind(store, self.highlight);
        self.previous_highlight = self.highlight;
        true
    }

    /// Delete the highlighted fragment and rebind to its predecessor.
    ///
    /// Returns `false` when the store refused (one fragment left).
    pub fn delete_highlighted(
        &mut self,
        store: &mut FragmentStore,
        text_box: &mut CursorTextBox,
    ) -> bool {
        if !store.delete(self.highlight) {
            return false;
        }
        self.highlight = self.highlight.saturating_sub(1);
        text_box.bind(store, self.highlight);
        self.previous_highlight = self.highlight;
        true
    }
}
