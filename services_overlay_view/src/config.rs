//! View configuration
//!
//! Fractions are of the window size; other lengths are pixels.

use fragment_core::DEFAULT_VISIBLE_WINDOW;
use serde::{Deserialize, Serialize};

/// Window and panel geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub window_width: f32,
    pub window_height: f32,
    /// Image area, as fractions of the window
    pub image_max_width: f32,
    pub image_max_height: f32,
    pub image_origin_x: f32,
    pub image_origin_y: f32,
    /// Editor panel, as fractions of the window
    pub panel_x: f32,
    pub panel_y: f32,
    pub panel_width: f32,
    pub panel_height: f32,
    pub edit_box_inset: f32,
    pub edit_box_height: f32,
    pub text_inset: f32,
    pub upcoming_offset: f32,
    pub row_pitch: f32,
    /// Fragments listed after the highlighted one
    pub upcoming_limit: usize,
    /// Characters shown in the edit box and in each upcoming row
    pub visible_window: usize,
    pub title: String,
    /// Title position, as fractions of the window
    pub title_x: f32,
    pub title_y: f32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            window_width: 1200.0,
            window_height: 800.0,
            image_max_width: 0.6,
            image_max_height: 0.7,
            image_origin_x: 0.05,
            image_origin_y: 0.2,
            panel_x: 0.75,
            panel_y: 0.05,
            panel_width: 0.2,
            panel_height: 0.9,
            edit_box_inset: 10.0,
            edit_box_height: 30.0,
            text_inset: 5.0,
            upcoming_offset: 50.0,
            row_pitch: 30.0,
            upcoming_limit: 20,
            visible_window: DEFAULT_VISIBLE_WINDOW,
            title: "Post Processing Editor".to_string(),
            title_x: 0.05,
            title_y: 0.05,
        }
    }
}
