//! Editor session: the one context object handed to hosts

use alloc::string::String;
use alloc::vec::Vec;

use crate::{
    command::{CommandOutcome, EditorCommand},
    controller::EditorController,
    fragment::Fragment,
    snapshot::EditorSnapshot,
    store::FragmentStore,
    text_box::{BoxRect, CursorTextBox, VisibleSlice, DEFAULT_VISIBLE_WINDOW},
};

/// Session construction parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    /// Characters shown in the edit box
    pub visible_window: usize,
    /// Where the host draws the edit box
    pub text_box_rect: BoxRect,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            visible_window: DEFAULT_VISIBLE_WINDOW,
            text_box_rect: BoxRect::default(),
        }
    }
}

/// Owns the store, the text box and the controller
pub struct EditorSession {
    store: FragmentStore,
    text_box: CursorTextBox,
    controller: EditorController,
}

impl EditorSession {
    /// Start a session highlighting the first fragment.
    ///
    /// Returns `None` when there is nothing to edit.
    pub fn new(fragments: Vec<Fragment>, config: SessionConfig) -> Option<Self> {
        let store = FragmentStore::new(fragments)?;
        let text_box = CursorTextBox::new(&store, 0, config.text_box_rect, config.visible_window);
        Some(Self {
            store,
            text_box,
            controller: EditorController::new(0),
        })
    }

    /// Apply one command
    pub fn apply(&mut self, command: EditorCommand) -> CommandOutcome {
        match command {
            EditorCommand::MoveHighlight(delta) => {
                let before = self.controller.highlight();
                self.controller.move_highlight(&self.store, delta);
                CommandOutcome::from_changed(before != self.controller.highlight())
            }
            EditorCommand::MoveCursor(delta) => {
                let before = self.text_box.cursor();
                self.text_box.move_cursor(&self.store, delta);
                CommandOutcome::from_changed(before != self.text_box.cursor())
            }
            EditorCommand::Insert(text) => {
                self.text_box.insert(&mut self.store, &text);
                CommandOutcome::from_changed(!text.is_empty())
            }
            EditorCommand::DeleteChar => {
                CommandOutcome::from_changed(self.text_box.delete_char(&mut self.store))
            }
            EditorCommand::DeleteFragment => CommandOutcome::from_changed(
                self.controller
                    .delete_highlighted(&mut self.store, &mut self.text_box),
            ),
        }
    }

    /// Per-tick synchronization; returns whether the text box was rebound
    pub fn tick(&mut self) -> bool {
        self.controller.on_tick(&self.store, &mut self.text_box)
    }

    /// Fragments after the highlighted one, at most `limit`, each cut to
    /// `width` characters
    pub fn upcoming(&self, limit: usize, width: usize) -> Vec<String> {
        self.store
            .iter()
            .skip(self.controller.highlight() + 1)
            .take(limit)
            .map(|fragment| fragment.text().chars().take(width).collect())
            .collect()
    }

    /// Get a complete snapshot of session state (for parity testing)
    pub fn snapshot(&self) -> EditorSnapshot {
        EditorSnapshot {
            highlight: self.controller.highlight(),
            bound_index: self.text_box.bound_index(),
            cursor: self.text_box.cursor(),
            texts: self.store.iter().map(|f| String::from(f.text())).collect(),
            visible: self.visible_slice(),
        }
    }

    // Public accessors for rendering/testing
    pub fn store(&self) -> &FragmentStore {
        &self.store
    }

    pub fn text_box(&self) -> &CursorTextBox {
        &self.text_box
    }

    pub fn highlight(&self) -> usize {
        self.controller.highlight()
    }

    pub fn cursor(&self) -> usize {
        self.text_box.cursor()
    }

    /// Text of the fragment the box is bound to
    pub fn edited_text(&self) -> &str {
        self.text_box.text(&self.store)
    }

    pub fn visible_slice(&self) -> VisibleSlice {
        self.text_box.visible_slice(&self.store)
    }

    pub fn display_column(&self) -> usize {
        self.text_box.display_column(&self.store)
    }

    /// End the session, handing back the edited fragments
    pub fn into_store(self) -> FragmentStore {
        self.store
    }
}
