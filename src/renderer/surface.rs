//! Drawing surface abstraction
//!
//! The renderer only needs five primitives. The browser build implements
//! them on `CanvasRenderingContext2d`; `DrawList` records them instead, for
//! tests and headless runs.

/// The 2D drawing primitives a frame is built from
pub trait Surface {
    /// Clear the rectangle `(0, 0)..(width, height)`
    fn clear(&mut self, width: f64, height: f64);
    /// Set the fill colour used by the following draws
    fn set_fill(&mut self, color: &str);
    /// Set the CSS font used by following text draws
    fn set_font(&mut self, font: &str);
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
}

/// One recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear { width: f64, height: f64 },
    Fill(String),
    Font(String),
    Circle { x: f64, y: f64, radius: f64 },
    Rect { x: f64, y: f64, width: f64, height: f64 },
    Text { text: String, x: f64, y: f64 },
}

/// A surface that records calls instead of drawing
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub calls: Vec<DrawCall>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// All text drawn, in order
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Number of filled circles drawn
    pub fn circle_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Circle { .. }))
            .count()
    }

    /// Number of filled rectangles drawn
    pub fn rect_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Rect { .. }))
            .count()
    }
}

impl Surface for DrawList {
    fn clear(&mut self, width: f64, height: f64) {
        self.calls.push(DrawCall::Clear { width, height });
    }

    fn set_fill(&mut self, color: &str) {
        self.calls.push(DrawCall::Fill(color.to_string()));
    }

    fn set_font(&mut self, font: &str) {
        self.calls.push(DrawCall::Font(font.to_string()));
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64) {
        self.calls.push(DrawCall::Circle { x, y, radius });
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.calls.push(DrawCall::Rect {
            x,
            y,
            width,
            height,
        });
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            x,
            y,
        });
    }
}

#[cfg(target_arch = "wasm32")]
impl Surface for web_sys::CanvasRenderingContext2d {
    fn clear(&mut self, width: f64, height: f64) {
        self.clear_rect(0.0, 0.0, width, height);
    }

    fn set_fill(&mut self, color: &str) {
        self.set_fill_style_str(color);
    }

    fn set_font(&mut self, font: &str) {
        web_sys::CanvasRenderingContext2d::set_font(self, font);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64) {
        self.begin_path();
        self.arc(x, y, radius, 0.0, std::f64::consts::PI * 2.0).ok();
        self.close_path();
        self.fill();
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        web_sys::CanvasRenderingContext2d::fill_rect(self, x, y, width, height);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        web_sys::CanvasRenderingContext2d::fill_text(self, text, x, y).ok();
    }
}
