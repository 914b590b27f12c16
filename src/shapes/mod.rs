mod rectangle;

pub use rectangle::Rectangle;

use crate::canvas::Canvas;

/// Capability shared by everything the compositor can draw.
///
/// New shapes are added by implementing this trait; the canvas stores them
/// behind `Box<dyn Drawable>` and never assumes anything beyond this contract.
pub trait Drawable {
    /// Draw-order key; lower layers draw first and are overdrawn by later ones.
    fn layer(&self) -> i32 {
        0
    }

    /// Composite this shape into the canvas pixel grid.
    fn draw(&self, canvas: &mut Canvas);
}
