//! Drawing surface abstraction.
//!
//! The renderer only speaks this small set of 2D primitives, which map
//! one-to-one onto `CanvasRenderingContext2d` calls. Keeping them behind a
//! trait lets the draw order be tested without a browser.

use super::theme::Color;

/// Radial gradient between two circles, like the canvas API's.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
	/// Start circle as `(x, y, radius)`.
	pub inner: (f64, f64, f64),
	/// End circle as `(x, y, radius)`.
	pub outer: (f64, f64, f64),
	/// `(offset, color)` pairs with offsets in [0, 1].
	pub stops: Vec<(f64, Color)>,
}

/// How a shape is filled or stroked.
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
	/// One flat color.
	Solid(Color),
	/// Radial gradient.
	Radial(RadialGradient),
}

impl From<Color> for Paint {
	fn from(color: Color) -> Self {
		Paint::Solid(color)
	}
}

/// A 2D raster target that can be cleared and painted on.
///
/// State setters (`set_alpha`, `set_shadow`, `set_blur`, transforms) persist
/// until the matching `restore`.
pub trait Surface {
	/// Clears the full `width × height` area to transparent.
	fn clear(&mut self, width: f64, height: f64);
	/// Pushes the current drawing state.
	fn save(&mut self);
	/// Pops the state pushed by the matching `save`.
	fn restore(&mut self);
	/// Global alpha for subsequent drawing; callers pass values in [0, 1].
	fn set_alpha(&mut self, alpha: f64);
	/// Glow around subsequent shapes. A zero blur disables it.
	fn set_shadow(&mut self, color: Color, blur: f64);
	/// Gaussian blur filter in pixels. A zero radius disables it.
	fn set_blur(&mut self, radius: f64);
	/// Moves the origin.
	fn translate(&mut self, x: f64, y: f64);
	/// Scales subsequent drawing.
	fn scale(&mut self, sx: f64, sy: f64);
	/// Fills an axis-aligned rectangle.
	fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, paint: &Paint);
	/// Fills a disc.
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, paint: &Paint);
	/// Strokes a circle outline `width` pixels wide.
	fn stroke_circle(&mut self, x: f64, y: f64, radius: f64, paint: &Paint, width: f64);
	/// Strokes an open polyline through `points`.
	fn stroke_path(&mut self, points: &[(f64, f64)], paint: &Paint, width: f64);
}
