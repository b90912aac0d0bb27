//! Session snapshot for deterministic parity testing

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

use crate::text_box::VisibleSlice;

/// Complete session state snapshot for parity testing
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct EditorSnapshot {
    pub highlight: usize,
    pub bound_index: usize,
    pub cursor: usize,
    pub texts: Vec<String>,
    pub visible: VisibleSlice,
}

impl EditorSnapshot {
    /// Compute a deterministic hash of the snapshot state
    /// This is used for fast comparison in parity tests
    #[cfg(test)]
    pub fn hash(&self) -> u64 {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();

        hasher.update(self.highlight.to_le_bytes());
        hasher.update(self.bound_index.to_le_bytes());
        hasher.update(self.cursor.to_le_bytes());

        hasher.update(self.texts.len().to_le_bytes());
        for text in &self.texts {
            hasher.update(text.len().to_le_bytes());
            hasher.update(text.as_bytes());
        }

        hasher.update(self.visible.start.to_le_bytes());
        hasher.update(self.visible.end.to_le_bytes());
        hasher.update(self.visible.text.len().to_le_bytes());
        hasher.update(self.visible.text.as_bytes());

        let result = hasher.finalize();
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&result[..8]);
        u64::from_le_bytes(bytes)
    }
}
