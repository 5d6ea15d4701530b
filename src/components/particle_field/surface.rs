//! The 2D drawing surface the renderer paints onto.
//!
//! The renderer only needs a handful of immediate-mode primitives, so it is
//! written against [`Surface`] rather than the browser canvas directly. The
//! canvas implementation lives here; tests use a recording double.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::theme::Color;

/// Immediate-mode 2D drawing operations used by the particle renderer.
///
/// Coordinates are logical (CSS) pixels. Transform calls compose with the
/// current transform and are undone by the matching `restore`.
pub trait Surface {
	/// Pushes the current transform.
	fn save(&mut self);
	/// Pops the transform pushed by the matching `save`.
	fn restore(&mut self);
	/// Moves the origin to `(x, y)`.
	fn translate(&mut self, x: f64, y: f64);
	/// Rotates by `angle` radians about the current origin.
	fn rotate(&mut self, angle: f64);
	/// Fills an axis-aligned rectangle.
	fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color);
	/// Fills a solid disc.
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color);
	/// Fills a disc whose color fades radially from `inner` at the center to
	/// `outer` at `radius`.
	fn fill_glow(&mut self, x: f64, y: f64, radius: f64, inner: Color, outer: Color);
	/// Strokes a straight segment.
	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Color);
}

impl Surface for CanvasRenderingContext2d {
	fn save(&mut self) {
		CanvasRenderingContext2d::save(self);
	}

	fn restore(&mut self) {
		CanvasRenderingContext2d::restore(self);
	}

	fn translate(&mut self, x: f64, y: f64) {
		let _ = CanvasRenderingContext2d::translate(self, x, y);
	}

	fn rotate(&mut self, angle: f64) {
		let _ = CanvasRenderingContext2d::rotate(self, angle);
	}

	fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) {
		self.set_fill_style_str(&color.to_css());
		CanvasRenderingContext2d::fill_rect(self, x, y, width, height);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.set_fill_style_str(&color.to_css());
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, PI * 2.0);
		self.fill();
	}

	fn fill_glow(&mut self, x: f64, y: f64, radius: f64, inner: Color, outer: Color) {
		let Ok(gradient) = self.create_radial_gradient(x, y, 0.0, x, y, radius) else {
			return;
		};
		let _ = gradient.add_color_stop(0.0, &inner.to_css());
		let _ = gradient.add_color_stop(1.0, &outer.to_css());

		#[allow(deprecated)]
		self.set_fill_style(&gradient);
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, PI * 2.0);
		self.fill();
	}

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Color) {
		self.set_stroke_style_str(&color.to_css());
		self.set_line_width(width);
		self.begin_path();
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.stroke();
	}
}

/// Recording surface for tests.
#[cfg(test)]
pub(crate) mod recording {
	use super::{Color, Surface};

	#[derive(Clone, Debug, PartialEq)]
	pub enum Op {
		Save,
		Restore,
		Translate(f64, f64),
		Rotate(f64),
		FillRect { x: f64, y: f64, width: f64, height: f64, color: Color },
		FillCircle { x: f64, y: f64, radius: f64, color: Color },
		FillGlow { radius: f64, inner: Color, outer: Color },
		StrokeLine { from: (f64, f64), to: (f64, f64), width: f64, color: Color },
	}

	#[derive(Default)]
	pub struct RecordingSurface {
		pub ops: Vec<Op>,
	}

	impl RecordingSurface {
		pub fn lines(&self) -> Vec<&Op> {
			self.ops
				.iter()
				.filter(|op| matches!(op, Op::StrokeLine { .. }))
				.collect()
		}
	}

	impl Surface for RecordingSurface {
		fn save(&mut self) {
			self.ops.push(Op::Save);
		}

		fn restore(&mut self) {
			self.ops.push(Op::Restore);
		}

		fn translate(&mut self, x: f64, y: f64) {
			self.ops.push(Op::Translate(x, y));
		}

		fn rotate(&mut self, angle: f64) {
			self.ops.push(Op::Rotate(angle));
		}

		fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) {
			self.ops.push(Op::FillRect { x, y, width, height, color });
		}

		fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
			self.ops.push(Op::FillCircle { x, y, radius, color });
		}

		fn fill_glow(&mut self, _x: f64, _y: f64, radius: f64, inner: Color, outer: Color) {
			self.ops.push(Op::FillGlow { radius, inner, outer });
		}

		fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Color) {
			self.ops.push(Op::StrokeLine { from, to, width, color });
		}
	}
}
