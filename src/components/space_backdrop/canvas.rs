//! [`Surface`] implementation for the browser's 2D canvas context.

use std::f64::consts::PI;

use web_sys::{CanvasGradient, CanvasRenderingContext2d};

use super::surface::{Paint, RadialGradient, Surface};
use super::theme::Color;

fn gradient(ctx: &CanvasRenderingContext2d, desc: &RadialGradient) -> Option<CanvasGradient> {
	let (x0, y0, r0) = desc.inner;
	let (x1, y1, r1) = desc.outer;
	let gradient = ctx
		.create_radial_gradient(x0, y0, r0.max(0.0), x1, y1, r1.max(0.0))
		.ok()?;
	for (offset, color) in &desc.stops {
		gradient
			.add_color_stop(offset.clamp(0.0, 1.0) as f32, &color.to_css())
			.ok()?;
	}
	Some(gradient)
}

/// Applies `paint` as the fill style. Returns false if the gradient could not be built.
fn set_fill(ctx: &CanvasRenderingContext2d, paint: &Paint) -> bool {
	match paint {
		Paint::Solid(color) => ctx.set_fill_style_str(&color.to_css()),
		Paint::Radial(desc) => {
			let Some(gradient) = gradient(ctx, desc) else {
				return false;
			};
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
		}
	}
	true
}

fn set_stroke(ctx: &CanvasRenderingContext2d, paint: &Paint) -> bool {
	match paint {
		Paint::Solid(color) => ctx.set_stroke_style_str(&color.to_css()),
		Paint::Radial(desc) => {
			let Some(gradient) = gradient(ctx, desc) else {
				return false;
			};
			#[allow(deprecated)]
			ctx.set_stroke_style(&gradient);
		}
	}
	true
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&mut self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn save(&mut self) {
		CanvasRenderingContext2d::save(self);
	}

	fn restore(&mut self) {
		CanvasRenderingContext2d::restore(self);
	}

	fn set_alpha(&mut self, alpha: f64) {
		self.set_global_alpha(alpha.clamp(0.0, 1.0));
	}

	fn set_shadow(&mut self, color: Color, blur: f64) {
		self.set_shadow_color(&color.to_css());
		self.set_shadow_blur(blur.max(0.0));
	}

	fn set_blur(&mut self, radius: f64) {
		if radius > 0.0 {
			self.set_filter(&format!("blur({radius}px)"));
		} else {
			self.set_filter("none");
		}
	}

	fn translate(&mut self, x: f64, y: f64) {
		let _ = CanvasRenderingContext2d::translate(self, x, y);
	}

	fn scale(&mut self, sx: f64, sy: f64) {
		let _ = CanvasRenderingContext2d::scale(self, sx, sy);
	}

	fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, paint: &Paint) {
		if set_fill(self, paint) {
			CanvasRenderingContext2d::fill_rect(self, x, y, width, height);
		}
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, paint: &Paint) {
		if !set_fill(self, paint) {
			return;
		}
		self.begin_path();
		let _ = self.arc(x, y, radius.max(0.0), 0.0, 2.0 * PI);
		self.fill();
	}

	fn stroke_circle(&mut self, x: f64, y: f64, radius: f64, paint: &Paint, width: f64) {
		if !set_stroke(self, paint) {
			return;
		}
		self.set_line_width(width);
		self.begin_path();
		let _ = self.arc(x, y, radius.max(0.0), 0.0, 2.0 * PI);
		self.stroke();
	}

	fn stroke_path(&mut self, points: &[(f64, f64)], paint: &Paint, width: f64) {
		let Some((&(x0, y0), rest)) = points.split_first() else {
			return;
		};
		if !set_stroke(self, paint) {
			return;
		}
		self.set_line_width(width);
		self.begin_path();
		self.move_to(x0, y0);
		for &(x, y) in rest {
			self.line_to(x, y);
		}
		self.stroke();
	}
}
