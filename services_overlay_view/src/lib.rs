//! # Overlay View
//!
//! Presentation for the detection review editor.
//!
//! ## Philosophy
//!
//! - **Rendering is a host concern**: The session never draws
//! - **Frames, not surfaces**: Output is an immutable display list that any
//!   backend can replay
//! - **Measurement is injected**: Font metrics come through [`TextMeasure`]
//!
//! ## Responsibilities
//!
//! - Fit the image into its area and place detection overlays on it
//! - Lay out the editor panel (edit box, upcoming fragments)
//! - Place the cursor line from the visible slice and text metrics
//! - Render a plain-text frame for console hosts

pub mod config;
pub mod frame;
pub mod layout;
pub mod measure;
pub mod text;

pub use config::ViewConfig;
pub use frame::{Color, DrawCommand, Frame, FrameBuilder};
pub use layout::{fit_image, overlay_rect, ImageLayout, PanelLayout, Rect};
pub use measure::{cursor_x, MonospaceMeasure, TextMeasure};
pub use text::TextFrameRenderer;
