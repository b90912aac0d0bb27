//! Cursor text box over one fragment
//!
//! The box never owns text. It remembers which fragment it is bound to (by
//! index) and routes every edit through [`FragmentStore::set_text`]. Cursor
//! positions count characters, and the cursor may sit one past the last
//! character (the append position).

use alloc::string::String;

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

use crate::store::FragmentStore;

/// Number of characters shown in the edit box
pub const DEFAULT_VISIBLE_WINDOW: usize = 20;

/// Position and size of the edit box, in host pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct BoxRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl BoxRect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// The slice of text that fits in the edit box
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct VisibleSlice {
    /// First shown character index (inclusive)
    pub start: usize,
    /// Last shown character index (exclusive)
    pub end: usize,
    pub text: String,
}

/// Edit box bound to one fragment of a [`FragmentStore`]
#[derive(Debug, Clone, PartialEq)]
pub struct CursorTextBox {
    cursor: usize,
    bound: usize,
    rect: BoxRect,
    window: usize,
}

impl CursorTextBox {
    /// Create a box bound to fragment `index`, cursor at end of text
    pub fn new(store: &FragmentStore, index: usize, rect: BoxRect, window: usize) -> Self {
        Self {
            cursor: store.get(index).char_len(),
            bound: index,
            rect,
            window,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn bound_index(&self) -> usize {
        self.bound
    }

    pub fn rect(&self) -> BoxRect {
        self.rect
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// Text of the bound fragment
    pub fn text<'a>(&self, store: &'a FragmentStore) -> &'a str {
        store.get(self.bound).text()
    }

    /// Rebind to fragment `index`, resetting the cursor to end of text.
    pub(crate) fn bind(&mut self, store: &FragmentStore, index: usize) {
        self.bound = index;
        self.cursor = store.get(index).char_len();
        log::trace!(
            "text box bound to fragment {}, cursor {}",
            index,
            self.cursor
        );
    }

    /// Move the cursor by `delta`, wrapping over `0..=len`.
    pub fn move_cursor(&mut self, store: &FragmentStore, delta: isize) {
        let span = (store.get(self.bound).char_len() + 1) as isize;
        self.cursor = (self.cursor as isize + delta).rem_euclid(span) as usize;
    }

    /// Insert `text` before the cursor and advance past it.
    ///
    /// Empty input inserts nothing and leaves the cursor in place.
    pub fn insert(&mut self, store: &mut FragmentStore, text: &str) {
        if text.is_empty() {
            return;
        }
        let current = store.get(self.bound).text();
        let at = byte_offset(current, self.cursor);

        let mut updated = String::with_capacity(current.len() + text.len());
        updated.push_str(&current[..at]);
        updated.push_str(text);
        updated.push_str(&current[at..]);

        store.set_text(self.bound, updated);
        self.cursor += text.chars().count();
    }

    /// Remove the character before the cursor (backspace).
    ///
    /// Returns `false` at position 0, where there is nothing to remove.
    pub fn delete_char(&mut self, store: &mut FragmentStore) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let current = store.get(self.bound).text();
        let from = byte_offset(current, self.cursor - 1);
        let to = byte_offset(current, self.cursor);

        let mut updated = String::with_capacity(current.len());
        updated.push_str(&current[..from]);
        updated.push_str(&current[to..]);

        store.set_text(self.bound, updated);
        self.cursor -= 1;
        true
    }

    /// Window of at most `window` characters that always contains the cursor.
    ///
    /// Right-aligned to the cursor once the text before it fills the window,
    /// otherwise anchored at the start of the text.
    pub fn visible_slice(&self, store: &FragmentStore) -> VisibleSlice {
        let text = store.get(self.bound).text();
        let (start, end) = if self.cursor >= self.window {
            (self.cursor - self.window, self.cursor)
        } else {
            (0, self.window.min(store.get(self.bound).char_len()))
        };

        VisibleSlice {
            start,
            end,
            text: text.chars().skip(start).take(end - start).collect(),
        }
    }

    /// Cursor column relative to the visible window
    pub fn display_column(&self, store: &FragmentStore) -> usize {
        self.cursor - self.visible_slice(store).start
    }
}

/// Byte offset of character `index`, or the text length past the end
fn byte_offset(text: &str, index: usize) -> usize {
    text.char_indices()
        .nth(index)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragment::{BoundingBox, Fragment, FragmentId};
    use alloc::vec;

    fn single(text: &str) -> (FragmentStore, CursorTextBox) {
        let store = FragmentStore::new(vec![Fragment::new(
            FragmentId::new(0),
            text,
            BoundingBox::default(),
        )])
        .unwrap();
        let text_box = CursorTextBox::new(&store, 0, BoxRect::default(), DEFAULT_VISIBLE_WINDOW);
        (store, text_box)
    }

    fn text_of_len(n: usize) -> String {
        (0..n).map(|i| (b'a' + (i % 26) as u8) as char).collect()
    }

    #[test]
    fn test_new_cursor_at_end() {
        let (_, text_box) = single("hello");
        assert_eq!(text_box.cursor(), 5);
        assert_eq!(text_box.bound_index(), 0);
    }

    #[test]
    fn test_move_cursor_wraps_backward() {
        let (store, mut text_box) = single("hello");
        text_box.cursor = 0;
        text_box.move_cursor(&store, -1);
        assert_eq!(text_box.cursor(), 5);
    }

    #[test]
    fn test_move_cursor_wraps_forward() {
        let (store, mut text_box) = single("hello");
        text_box.move_cursor(&store, 1);
        assert_eq!(text_box.cursor(), 0);
    }

    #[test]
    fn test_move_cursor_empty_text() {
        let (store, mut text_box) = single("");
        text_box.move_cursor(&store, 1);
        assert_eq!(text_box.cursor(), 0);
        text_box.move_cursor(&store, -3);
        assert_eq!(text_box.cursor(), 0);
    }

    #[test]
    fn test_insert_at_end() {
        let (mut store, mut text_box) = single("dog");
        text_box.insert(&mut store, "!");
        assert_eq!(store.get(0).text(), "dog!");
        assert_eq!(text_box.cursor(), 4);
    }

    #[test]
    fn test_insert_in_middle() {
        let (mut store, mut text_box) = single("ac");
        text_box.move_cursor(&store, -1);
        text_box.insert(&mut store, "b");
        assert_eq!(store.get(0).text(), "abc");
        assert_eq!(text_box.cursor(), 2);
    }

    #[test]
    fn test_insert_multi_char_advances_by_run() {
        let (mut store, mut text_box) = single("ad");
        text_box.move_cursor(&store, -1);
        text_box.insert(&mut store, "bc");
        assert_eq!(store.get(0).text(), "abcd");
        assert_eq!(text_box.cursor(), 3);
    }

    #[test]
    fn test_insert_empty_is_noop() {
        let (mut store, mut text_box) = single("same");
        text_box.move_cursor(&store, -2);
        text_box.insert(&mut store, "");
        assert_eq!(store.get(0).text(), "same");
        assert_eq!(text_box.cursor(), 2);
    }

    #[test]
    fn test_insert_counts_chars_not_bytes() {
        let (mut store, mut text_box) = single("née");
        text_box.move_cursor(&store, -1);
        text_box.insert(&mut store, "ü");
        assert_eq!(store.get(0).text(), "néüe");
        assert_eq!(text_box.cursor(), 3);
    }

    #[test]
    fn test_delete_char_before_cursor() {
        let (mut store, mut text_box) = single("hello");
        text_box.move_cursor(&store, -2);
        assert!(text_box.delete_char(&mut store));
        assert_eq!(store.get(0).text(), "helo");
        assert_eq!(text_box.cursor(), 2);
    }

    #[test]
    fn test_delete_char_at_zero_is_noop() {
        let (mut store, mut text_box) = single("hello");
        text_box.cursor = 0;
        assert!(!text_box.delete_char(&mut store));
        assert_eq!(store.get(0).text(), "hello");
        assert_eq!(text_box.cursor(), 0);
    }

    #[test]
    fn test_delete_char_multibyte() {
        let (mut store, mut text_box) = single("añb");
        text_box.move_cursor(&store, -1);
        assert!(text_box.delete_char(&mut store));
        assert_eq!(store.get(0).text(), "ab");
        assert_eq!(text_box.cursor(), 1);
    }

    #[test]
    fn test_insert_then_delete_restores() {
        let (mut store, mut text_box) = single("abcdef");
        text_box.move_cursor(&store, -4);
        let before = (String::from(store.get(0).text()), text_box.cursor());

        text_box.insert(&mut store, "Z");
        assert!(text_box.delete_char(&mut store));

        assert_eq!(store.get(0).text(), before.0);
        assert_eq!(text_box.cursor(), before.1);
    }

    #[test]
    fn test_visible_slice_scrolls_with_cursor() {
        let text = text_of_len(30);
        let (store, mut text_box) = single(&text);
        text_box.cursor = 25;

        let slice = text_box.visible_slice(&store);
        assert_eq!(slice.start, 5);
        assert_eq!(slice.end, 25);
        assert_eq!(slice.text, &text[5..25]);
        assert_eq!(text_box.display_column(&store), 20);
    }

    #[test]
    fn test_visible_slice_short_text() {
        let (store, mut text_box) = single("0123456789");
        text_box.cursor = 3;

        let slice = text_box.visible_slice(&store);
        assert_eq!(slice.start, 0);
        assert_eq!(slice.end, 10);
        assert_eq!(slice.text, "0123456789");
        assert_eq!(text_box.display_column(&store), 3);
    }

    #[test]
    fn test_visible_slice_long_text_cursor_near_start() {
        let text = text_of_len(30);
        let (store, mut text_box) = single(&text);
        text_box.cursor = 7;

        let slice = text_box.visible_slice(&store);
        assert_eq!((slice.start, slice.end), (0, 20));
        assert_eq!(slice.text, &text[..20]);
    }

    #[test]
    fn test_visible_slice_cursor_exactly_at_window() {
        let text = text_of_len(25);
        let (store, mut text_box) = single(&text);
        text_box.cursor = 20;

        let slice = text_box.visible_slice(&store);
        assert_eq!((slice.start, slice.end), (0, 20));
        assert_eq!(text_box.display_column(&store), 20);
    }

    #[test]
    fn test_visible_slice_empty_text() {
        let (store, text_box) = single("");
        let slice = text_box.visible_slice(&store);
        assert_eq!((slice.start, slice.end), (0, 0));
        assert!(slice.text.is_empty());
    }

    #[test]
    fn test_custom_window() {
        let store = FragmentStore::new(vec![Fragment::new(
            FragmentId::new(0),
            "abcdefgh",
            BoundingBox::default(),
        )])
        .unwrap();
        let text_box = CursorTextBox::new(&store, 0, BoxRect::default(), 4);

        let slice = text_box.visible_slice(&store);
        assert_eq!(slice.text, "efgh");
        assert_eq!(text_box.window(), 4);
    }
}
