//! Display-list frames
//!
//! A frame is the full picture for one tick, in paint order. Backends replay
//! the commands; nothing here talks to a window.

use fragment_core::EditorSession;

use crate::config::ViewConfig;
use crate::layout::{overlay_rect, ImageLayout, PanelLayout, Rect};
use crate::measure::{cursor_x, TextMeasure};

/// RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const BACKGROUND: Color = Color(0x21, 0x63, 0x67);
    pub const BLACK: Color = Color(0, 0, 0);
    pub const OVERLAY: Color = Color(255, 0, 0);
    pub const OVERLAY_HIGHLIGHT: Color = Color(0, 255, 0);
    pub const PANEL_FILL: Color = Color(200, 200, 200);
    pub const PANEL_BORDER: Color = Color(50, 50, 50);
    pub const EDIT_BOX_FILL: Color = Color(200, 200, 255);
    pub const CURSOR: Color = Color(255, 50, 50);
}

/// One paint operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Image(Rect),
    FillRect { rect: Rect, color: Color },
    StrokeRect { rect: Rect, color: Color, width: u32 },
    Text { x: f32, y: f32, text: String, color: Color },
    Line { from: (f32, f32), to: (f32, f32), color: Color },
}

/// Paint commands for one tick
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Overlay rectangles with their stroke widths
    pub fn overlays(&self) -> impl Iterator<Item = (&Rect, &Color, u32)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::StrokeRect { rect, color, width }
                if *color == Color::OVERLAY || *color == Color::OVERLAY_HIGHLIGHT =>
            {
                Some((rect, color, *width))
            }
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// Builds frames from session state
pub struct FrameBuilder<'a> {
    config: &'a ViewConfig,
    panel: PanelLayout,
    measure: &'a dyn TextMeasure,
}

impl<'a> FrameBuilder<'a> {
    pub fn new(config: &'a ViewConfig, measure: &'a dyn TextMeasure) -> Self {
        Self {
            config,
            panel: PanelLayout::from_config(config),
            measure,
        }
    }

    /// Paint the whole window for the current session state
    pub fn build(&self, session: &EditorSession, image: &ImageLayout) -> Frame {
        let mut frame = Frame::default();
        frame.push(DrawCommand::Clear(Color::BACKGROUND));
        frame.push(DrawCommand::Image(image.rect));
        frame.push(DrawCommand::Text {
            x: self.config.title_x * self.config.window_width,
            y: self.config.title_y * self.config.window_height,
            text: self.config.title.clone(),
            color: Color::BLACK,
        });

        self.push_overlays(&mut frame, session, image);
        self.push_panel(&mut frame, session);
        frame
    }

    fn push_overlays(&self, frame: &mut Frame, session: &EditorSession, image: &ImageLayout) {
        let highlight = session.highlight();
        for (index, fragment) in session.store().iter().enumerate() {
            let highlighted = index == highlight;
            frame.push(DrawCommand::StrokeRect {
                rect: overlay_rect(&fragment.bounding_box(), image),
                color: if highlighted {
                    Color::OVERLAY_HIGHLIGHT
                } else {
                    Color::OVERLAY
                },
                width: if highlighted { 2 } else { 1 },
            });
        }
    }

    fn push_panel(&self, frame: &mut Frame, session: &EditorSession) {
        frame.push(DrawCommand::FillRect {
            rect: self.panel.background,
            color: Color::PANEL_FILL,
        });
        frame.push(DrawCommand::StrokeRect {
            rect: self.panel.background,
            color: Color::PANEL_BORDER,
            width: 2,
        });

        self.push_edit_box(frame, session);

        let upcoming = session.upcoming(self.config.upcoming_limit, self.config.visible_window);
        for (row, text) in upcoming.into_iter().enumerate() {
            let (x, y) = self.panel.upcoming_row(row);
            frame.push(DrawCommand::Text {
                x,
                y,
                text,
                color: Color::BLACK,
            });
        }
    }

    fn push_edit_box(&self, frame: &mut Frame, session: &EditorSession) {
        let rect: Rect = session.text_box().rect().into();
        let inset = self.config.text_inset;

        frame.push(DrawCommand::FillRect {
            rect,
            color: Color::EDIT_BOX_FILL,
        });
        frame.push(DrawCommand::StrokeRect {
            rect,
            color: Color::BLACK,
            width: 2,
        });

        let slice = session.visible_slice();
        let x = rect.x + cursor_x(&slice, session.display_column(), inset, self.measure);
        let top = rect.y + inset;
        // One text line tall, kept inside the box
        let bottom = (top + self.measure.line_height()).min(rect.bottom() - inset);
        frame.push(DrawCommand::Text {
            x: rect.x + inset,
            y: top,
            text: slice.text,
            color: Color::BLACK,
        });
        frame.push(DrawCommand::Line {
            from: (x, top),
            to: (x, bottom),
            color: Color::CURSOR,
        });
    }
}
