//! Detected fragment and bounding box types

use alloc::string::String;

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

/// Position of a fragment in the record it was loaded from
///
/// Stable across deletions, so hosts can match surviving fragments back to
/// their source entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct FragmentId(pub usize);

impl FragmentId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(&self) -> usize {
        self.0
    }
}

/// Bounding box in relative image coordinates (each component in `[0, 1]`)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct BoundingBox {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl BoundingBox {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Scales the box into a pixel-space rectangle `(x, y, width, height)`
    /// for an image drawn at `origin` with the given size.
    pub fn to_pixels(&self, origin: (f32, f32), size: (f32, f32)) -> (f32, f32, f32, f32) {
        (
            origin.0 + self.left * size.0,
            origin.1 + self.top * size.1,
            self.width * size.0,
            self.height * size.1,
        )
    }
}

/// One detected text item
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct Fragment {
    id: FragmentId,
    text: String,
    bounding_box: BoundingBox,
}

impl Fragment {
    pub fn new(id: FragmentId, text: impl Into<String>, bounding_box: BoundingBox) -> Self {
        Self {
            id,
            text: text.into(),
            bounding_box,
        }
    }

    pub fn id(&self) -> FragmentId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the text in characters (cursor units)
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.bounding_box
    }

    /// Only the store mutates fragment text.
    pub(crate) fn set_text(&mut self, text: String) {
        self.text = text;
    }
}
