//! Render surfaces.
//!
//! [`RenderSurface`] is the small 2D drawing API the loader needs. The
//! [`DisplayList`] implementation records draw calls into a [`Frame`] that a
//! UI layer can replay however it likes (the Dioxus loader emits SVG).

use crate::color::Rgba;

/// 2D drawing primitives used by the loader.
pub trait RenderSurface {
    /// Erase the given rectangle.
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Color used by subsequent fills.
    fn set_fill_color(&mut self, color: Rgba);

    /// Fill a circle centered at `(cx, cy)` with the current fill color.
    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64);
}

/// A single recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Partial clear; a clear covering the whole surface drops earlier
    /// commands instead of being recorded.
    ClearRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    FillCircle {
        cx: f64,
        cy: f64,
        radius: f64,
        color: Rgba,
    },
}

/// One rendered animation frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    /// Frame counter, starting at 1 for the first published frame
    pub sequence: u64,
    /// Square surface size in pixels
    pub size: u32,
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    /// Filled circles in paint order.
    pub fn circles(&self) -> impl Iterator<Item = (f64, f64, f64, Rgba)> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::FillCircle {
                cx,
                cy,
                radius,
                color,
            } => Some((*cx, *cy, *radius, *color)),
            DrawCommand::ClearRect { .. } => None,
        })
    }
}

/// A [`RenderSurface`] that records draw calls.
#[derive(Debug)]
pub struct DisplayList {
    size: u32,
    fill: Rgba,
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new(size: u32) -> Self {
        Self {
            size,
            fill: Rgba::default(),
            commands: Vec::new(),
        }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Finish recording and stamp the frame with `sequence`.
    pub fn into_frame(self, sequence: u64) -> Frame {
        Frame {
            sequence,
            size: self.size,
            commands: self.commands,
        }
    }
}

impl RenderSurface for DisplayList {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let size = f64::from(self.size);
        if x <= 0.0 && y <= 0.0 && x + width >= size && y + height >= size {
            self.commands.clear();
        } else {
            self.commands.push(DrawCommand::ClearRect {
                x,
                y,
                width,
                height,
            });
        }
    }

    fn set_fill_color(&mut self, color: Rgba) {
        self.fill = color;
    }

    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64) {
        self.commands.push(DrawCommand::FillCircle {
            cx,
            cy,
            radius,
            color: self.fill,
        });
    }
}
