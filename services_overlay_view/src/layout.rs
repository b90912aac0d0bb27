//! Window layout arithmetic

use fragment_core::{BoundingBox, BoxRect};

use crate::config::ViewConfig;

/// Pixel rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

impl From<BoxRect> for Rect {
    fn from(rect: BoxRect) -> Self {
        Rect::new(rect.x, rect.y, rect.width, rect.height)
    }
}

impl From<Rect> for BoxRect {
    fn from(rect: Rect) -> Self {
        BoxRect::new(rect.x, rect.y, rect.width, rect.height)
    }
}

/// Where and how large the image is drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageLayout {
    pub rect: Rect,
    pub scale: f32,
}

/// Scale an image uniformly so it fits the configured image area.
///
/// The dominating axis fills its limit; small images are scaled up.
pub fn fit_image(image_width: u32, image_height: u32, config: &ViewConfig) -> ImageLayout {
    let max_width = (config.image_max_width * config.window_width).trunc();
    let max_height = (config.image_max_height * config.window_height).trunc();
    let origin_x = config.image_origin_x * config.window_width;
    let origin_y = config.image_origin_y * config.window_height;

    let width_factor = image_width as f32 / max_width;
    let height_factor = image_height as f32 / max_height;
    let dominating = width_factor.max(height_factor);

    let scale = if dominating > 0.0 { 1.0 / dominating } else { 1.0 };
    log::debug!(
        "fitting {}x{} image at scale {:.3}",
        image_width,
        image_height,
        scale
    );

    ImageLayout {
        rect: Rect::new(
            origin_x,
            origin_y,
            image_width as f32 * scale,
            image_height as f32 * scale,
        ),
        scale,
    }
}

/// Pixel rectangle of a detection drawn over the image
pub fn overlay_rect(bounding_box: &BoundingBox, image: &ImageLayout) -> Rect {
    let (x, y, width, height) = bounding_box.to_pixels(
        (image.rect.x, image.rect.y),
        (image.rect.width, image.rect.height),
    );
    Rect::new(x, y, width, height)
}

/// Editor panel geometry
#[derive(Debug, Clone, PartialEq)]
pub struct PanelLayout {
    pub background: Rect,
    pub edit_box: Rect,
    /// Top-left of the first upcoming row
    pub upcoming_origin: (f32, f32),
    pub row_pitch: f32,
}

impl PanelLayout {
    pub fn from_config(config: &ViewConfig) -> Self {
        let background = Rect::new(
            config.panel_x * config.window_width,
            config.panel_y * config.window_height,
            config.panel_width * config.window_width,
            config.panel_height * config.window_height,
        );
        let inset = config.edit_box_inset;
        let edit_box = Rect::new(
            background.x + inset,
            background.y + inset,
            background.width - 2.0 * inset,
            config.edit_box_height,
        );

        Self {
            upcoming_origin: (background.x + inset, background.y + config.upcoming_offset),
            row_pitch: config.row_pitch,
            background,
            edit_box,
        }
    }

    /// Top-left of upcoming row `row`
    pub fn upcoming_row(&self, row: usize) -> (f32, f32) {
        (
            self.upcoming_origin.0,
            self.upcoming_origin.1 + row as f32 * self.row_pitch,
        )
    }
}
