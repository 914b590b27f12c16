pub mod canvas;
pub mod color;
pub mod error;
pub mod shapes;
pub mod telemetry;

// Re-export the core surface at the crate root
pub use canvas::Canvas;
pub use color::Color;
pub use error::CompositorError;
pub use shapes::{Drawable, Rectangle};
pub use telemetry::{Log, Telemetry};
