//! Ordered, never-empty fragment storage

use alloc::string::String;
use alloc::vec::Vec;
use core::slice;

use crate::fragment::Fragment;

/// Ordered sequence of editable fragments
///
/// Never empty: construction rejects an empty collection and deletion of the
/// last remaining fragment is refused.
#[derive(Debug, Clone, PartialEq)]
pub struct FragmentStore {
    fragments: Vec<Fragment>,
}

impl FragmentStore {
    /// Returns `None` for an empty collection.
    pub fn new(fragments: Vec<Fragment>) -> Option<Self> {
        if fragments.is_empty() {
            return None;
        }
        Some(Self { fragments })
    }

    /// Fragment at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`. Callers keep their indices in range.
    pub fn get(&self, index: usize) -> &Fragment {
        &self.fragments[index]
    }

    /// Replace the text of fragment `index` verbatim.
    pub fn set_text(&mut self, index: usize, text: impl Into<String>) {
        self.fragments[index].set_text(text.into());
    }

    /// Remove fragment `index`, shifting later fragments down.
    ///
    /// Returns `false` and leaves the store untouched when only one fragment
    /// remains.
    pub fn delete(&mut self, index: usize) -> bool {
        if self.fragments.len() == 1 {
            log::debug!("refusing to delete the last remaining fragment");
            return false;
        }
        let removed = self.fragments.remove(index);
        log::debug!("deleted fragment {} (id {})", index, removed.id().index());
        true
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Fragment> {
        self.fragments.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragment::{BoundingBox, FragmentId};
    use alloc::vec;

    fn store_of(texts: &[&str]) -> FragmentStore {
        let fragments = texts
            .iter()
            .enumerate()
            .map(|(i, t)| Fragment::new(FragmentId::new(i), *t, BoundingBox::default()))
            .collect();
        FragmentStore::new(fragments).unwrap()
    }

    #[test]
    fn test_empty_store_rejected() {
        assert!(FragmentStore::new(vec![]).is_none());
    }

    #[test]
    fn test_get_and_len() {
        let store = store_of(&["cat", "dog"]);
        assert_eq!(store.len(), 2);
        assert!(!store.is_empty());
        assert_eq!(store.get(1).text(), "dog");
    }

    #[test]
    fn test_set_text_verbatim() {
        let mut store = store_of(&["cat"]);
        store.set_text(0, "");
        assert_eq!(store.get(0).text(), "");
        store.set_text(0, "  spaced\tout ");
        assert_eq!(store.get(0).text(), "  spaced\tout ");
    }

    #[test]
    fn test_delete_shifts_down() {
        let mut store = store_of(&["a", "b", "c"]);
        assert!(store.delete(0));
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(0).text(), "b");
        assert_eq!(store.get(0).id(), FragmentId(1));
        assert_eq!(store.get(1).text(), "c");
    }

    #[test]
    fn test_delete_refused_at_floor() {
        let mut store = store_of(&["only"]);
        assert!(!store.delete(0));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(0).text(), "only");
    }

    #[test]
    #[should_panic]
    fn test_get_out_of_range_panics() {
        let store = store_of(&["a"]);
        let _ = store.get(1);
    }

    #[test]
    fn test_iteration_order() {
        let store = store_of(&["x", "y", "z"]);
        let texts: Vec<&str> = store.iter().map(|f| f.text()).collect();
        assert_eq!(texts, vec!["x", "y", "z"]);
        assert_eq!(store.iter().count(), 3);
    }
}
