use super::Drawable;
use crate::canvas::Canvas;
use crate::color::Color;

/// Axis-aligned rectangle: a one-pixel border ring around a filled interior.
#[derive(Debug, Clone)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub background_color: Color,
    pub border_color: Color,
    /// Accepted for forward compatibility; the border test only ever draws a
    /// one-pixel ring regardless of this value.
    pub border_width: u32,
    layer: i32,
}

impl Rectangle {
    /// Rectangle with a transparent fill and an opaque black border on layer 0.
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            background_color: Color::transparent(),
            border_color: Color::rgb(0, 0, 0),
            border_width: 1,
            layer: 0,
        }
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    pub fn with_border(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }

    pub fn with_border_width(mut self, width: u32) -> Self {
        self.border_width = width;
        self
    }

    pub fn with_layer(mut self, layer: i32) -> Self {
        self.layer = layer;
        self
    }
}

impl Drawable for Rectangle {
    fn layer(&self) -> i32 {
        self.layer
    }

    fn draw(&self, canvas: &mut Canvas) {
        if self.width == 0 || self.height == 0 {
            return;
        }

        let right = self.x + self.width as i32 - 1;
        let bottom = self.y + self.height as i32 - 1;

        for y in self.y..=bottom {
            for x in self.x..=right {
                let on_ring = y == self.y || y == bottom || x == self.x || x == right;
                let color = if on_ring {
                    self.border_color
                } else {
                    self.background_color
                };
                canvas.blend_pixel(x, y, color);
            }
        }
    }
}
