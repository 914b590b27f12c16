use crate::color::Color;
use crate::shapes::Drawable;
use crate::telemetry::Telemetry;
use log::debug;

/// Telemetry name for the whole compositing pass.
pub const DRAW_PASS: &str = "Canvas.draw";
/// Telemetry name shared by every per-object draw; all objects aggregate
/// into one log.
pub const DRAW_OBJECT: &str = "Object";

/// Owns the pixel grid and an ordered list of drawables, and composites the
/// drawables into the grid in layer order.
///
/// Every canvas allocates its own grid, object list, and telemetry; nothing
/// is shared between instances.
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
    objects: Vec<Box<dyn Drawable>>,
    telemetry: Telemetry,
}

impl Canvas {
    /// Create a canvas filled with opaque white.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::default(); (width as usize) * (height as usize)],
            objects: Vec::new(),
            telemetry: Telemetry::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Append a drawable; no dedup, no capacity limit. Insertion order only
    /// matters as the tie-break between equal layers.
    pub fn add(&mut self, object: Box<dyn Drawable>) {
        self.objects.push(object);
    }

    pub fn telemetry(&self) -> &Telemetry {
        &self.telemetry
    }

    /// The pixel at `(x, y)`, or `None` outside the grid.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Blend `color` over the existing pixel at `(x, y)`.
    ///
    /// Coordinates outside the grid are clipped silently; shapes may extend
    /// past the canvas edge without error.
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color.blend(self.pixels[i]);
        }
    }

    /// Composite every drawable into the grid, lowest layer first; equal
    /// layers keep insertion order. Each object draw is measured under
    /// [`DRAW_OBJECT`], the whole pass under [`DRAW_PASS`].
    pub fn draw(&mut self) {
        let telemetry = std::mem::take(&mut self.telemetry);
        let mut objects = std::mem::take(&mut self.objects);

        debug!("compositing {} objects", objects.len());
        telemetry.measure(DRAW_PASS, || {
            objects.sort_by_key(|object| object.layer());
            for object in &objects {
                telemetry.measure(DRAW_OBJECT, || object.draw(self));
            }
        });

        self.objects = objects;
        self.telemetry = telemetry;
    }

    /// The finished frame as row-major RGB triples, top-to-bottom and
    /// left-to-right, for a presentation sink to display or encode.
    pub fn rgb_buffer(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(self.pixels.len() * 3);
        for pixel in &self.pixels {
            let (red, green, blue) = pixel.channels();
            buffer.extend_from_slice(&[red, green, blue]);
        }
        buffer
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_canvas_is_white() {
        let canvas = Canvas::new(2, 3);
        assert_eq!(canvas.pixel(1, 2), Some(Color::default()));
        assert_eq!(canvas.rgb_buffer().len(), 2 * 3 * 3);
    }

    #[test]
    fn blend_pixel_clips_out_of_bounds() {
        let mut canvas = Canvas::new(2, 2);
        canvas.blend_pixel(-1, 0, Color::rgb(1, 2, 3));
        canvas.blend_pixel(0, 5, Color::rgb(1, 2, 3));
        canvas.blend_pixel(2, 0, Color::rgb(1, 2, 3));

        assert_eq!(canvas.pixel(0, 0), Some(Color::default()));
        assert_eq!(canvas.pixel(-1, 0), None);
    }

    #[test]
    fn blend_pixel_composites_over_existing() {
        let mut canvas = Canvas::new(1, 1);
        canvas.blend_pixel(0, 0, Color::new(0, 0, 0, 0.5).unwrap());
        assert_eq!(canvas.pixel(0, 0).unwrap().channels(), (127, 127, 127));
    }
}
