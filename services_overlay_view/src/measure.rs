//! Text measurement seam

use fragment_core::VisibleSlice;

/// Font metrics provider
pub trait TextMeasure {
    /// Rendered width of `text` in pixels
    fn width(&self, text: &str) -> f32;

    /// Line height in pixels
    fn line_height(&self) -> f32;
}

/// Fixed-advance font metrics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasure {
    pub advance: f32,
    pub line_height: f32,
}

impl MonospaceMeasure {
    pub const fn new(advance: f32, line_height: f32) -> Self {
        Self {
            advance,
            line_height,
        }
    }
}

impl Default for MonospaceMeasure {
    /// Metrics of a 15px monospace face
    fn default() -> Self {
        Self::new(9.0, 17.0)
    }
}

impl TextMeasure for MonospaceMeasure {
    fn width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.advance
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }
}

/// Horizontal cursor offset inside the edit box.
///
/// The character width is averaged over the shown text, so an empty slice
/// puts the cursor at the inset.
pub fn cursor_x(slice: &VisibleSlice, column: usize, inset: f32, measure: &dyn TextMeasure) -> f32 {
    let chars = slice.text.chars().count();
    let char_width = if chars == 0 {
        0.0
    } else {
        measure.width(&slice.text) / chars as f32
    };
    char_width * column as f32 + inset
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slice(text: &str) -> VisibleSlice {
        VisibleSlice {
            start: 0,
            end: text.chars().count(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_monospace_width_counts_chars() {
        let measure = MonospaceMeasure::new(10.0, 20.0);
        assert_eq!(measure.width("abc"), 30.0);
        assert_eq!(measure.width("ééé"), 30.0);
        assert_eq!(measure.line_height(), 20.0);
    }

    #[test]
    fn test_cursor_x() {
        let measure = MonospaceMeasure::new(10.0, 20.0);
        assert_eq!(cursor_x(&slice("hello"), 3, 5.0, &measure), 35.0);
        assert_eq!(cursor_x(&slice("hello"), 0, 5.0, &measure), 5.0);
    }

    #[test]
    fn test_cursor_x_empty_slice() {
        let measure = MonospaceMeasure::new(10.0, 20.0);
        assert_eq!(cursor_x(&slice(""), 0, 5.0, &measure), 5.0);
    }

    struct Proportional;

    impl TextMeasure for Proportional {
        fn width(&self, text: &str) -> f32 {
            text.chars().map(|c| if c == 'm' { 12.0 } else { 4.0 }).sum()
        }

        fn line_height(&self) -> f32 {
            16.0
        }
    }

    #[test]
    fn test_cursor_x_averages_proportional_widths() {
        // (12 + 4) / 2 = 8 per char
        assert_eq!(cursor_x(&slice("mi"), 1, 0.0, &Proportional), 8.0);
    }
}
