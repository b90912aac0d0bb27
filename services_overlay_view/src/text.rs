//! Plain-text frame rendering for console hosts

use fragment_core::EditorSession;

/// Renders a session as plain text
///
/// Provides a simple text-based representation of the review state
/// suitable for display in a console or test output.
pub struct TextFrameRenderer {
    /// Number of fragment rows to show around the highlight
    viewport_rows: usize,
}

impl TextFrameRenderer {
    pub fn new(viewport_rows: usize) -> Self {
        Self { viewport_rows }
    }

    /// Render the session state to a string
    pub fn render(&self, session: &EditorSession) -> String {
        let mut output = String::new();
        let store = session.store();
        let highlight = session.highlight();

        // Keep the highlight inside the viewport
        let first = highlight.saturating_sub(self.viewport_rows.saturating_sub(1));
        for (index, fragment) in store.iter().enumerate().skip(first).take(self.viewport_rows) {
            let marker = if index == highlight { '>' } else { ' ' };
            let bbox = fragment.bounding_box();
            output.push_str(&format!(
                "{} [{}] {} ({:.2},{:.2} {:.2}x{:.2})\n",
                marker, index, fragment.text(), bbox.left, bbox.top, bbox.width, bbox.height
            ));
        }

        output.push_str(&self.render_edit_line(session));
        output.push('\n');
        output.push_str(&self.render_status_line(session));
        output
    }

    fn render_edit_line(&self, session: &EditorSession) -> String {
        let slice = session.visible_slice();
        let column = session.display_column();
        let total = session.edited_text().chars().count();

        let mut line = String::from(if slice.start > 0 { "<|" } else { " |" });
        for (i, ch) in slice.text.chars().enumerate() {
            if i == column {
                line.push_str(&format!("[{}]", ch));
            } else {
                line.push(ch);
            }
        }
        // Cursor at end of shown text
        if column == slice.text.chars().count() {
            line.push_str("[ ]");
        }
        line.push_str(if slice.end < total { "|>" } else { "| " });
        line
    }

    fn render_status_line(&self, session: &EditorSession) -> String {
        let slice = session.visible_slice();
        format!(
            "fragment {}/{} | cursor {} | window {}..{}",
            session.highlight() + 1,
            session.store().len(),
            session.cursor(),
            slice.start,
            slice.end
        )
    }

    /// Render just the status line
    pub fn render_status(&self, session: &EditorSession) -> String {
        self.render_status_line(session)
    }
}

impl Default for TextFrameRenderer {
    fn default() -> Self {
        Self::new(10)
    }
}
