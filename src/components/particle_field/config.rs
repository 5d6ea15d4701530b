//! Tunable parameters for the particle field.
//!
//! Every constant the simulation and renderer depend on lives here so a page
//! can adjust the effect from its JSON config without touching code. Missing
//! keys take the defaults, which reproduce the stock look.

use serde::Deserialize;

/// Hard ceiling on the particle count. The connection pass is O(n²) per frame.
pub const MAX_PARTICLES: usize = 40;

/// Simulation and drawing parameters.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct FieldConfig {
	/// Viewports narrower than this (logical px) get `compact_count` particles.
	pub compact_breakpoint: f64,
	/// Particle count below the breakpoint.
	pub compact_count: usize,
	/// Particle count at or above the breakpoint.
	pub full_count: usize,
	/// How far past an edge a particle may drift before wrapping.
	pub wrap_margin: f64,
	/// Position-to-noise-space scale.
	pub noise_scale: f64,
	/// Field time advanced per rendered frame.
	pub time_step: f64,
	/// Lower bound of per-particle speed, in px per frame.
	pub speed_min: f64,
	/// Upper bound (exclusive) of per-particle speed.
	pub speed_max: f64,
	/// Lower bound of particle radius.
	pub size_min: f64,
	/// Upper bound (exclusive) of particle radius.
	pub size_max: f64,
	/// Rotation speed is drawn from `[-max, max)` radians per frame.
	pub rotation_speed_max: f64,
	/// Glow radius as a multiple of particle size.
	pub glow_factor: f64,
	/// Half-side of a square particle as a multiple of its size.
	pub square_factor: f64,
	/// Particles closer than this are linked.
	pub link_distance: f64,
	/// Opacity of a link between two coincident particles.
	pub link_max_opacity: f64,
	/// Stroke width of a link.
	pub link_width: f64,
	/// Particles within this distance of the pointer are pulled towards it.
	pub pointer_radius: f64,
	/// Pull per unit of distance inside `pointer_radius`.
	pub pointer_strength: f64,
	/// Offset each particle's noise sample by its `noise_offset`.
	/// Off by default, which keeps every particle on the same shared field.
	pub decorrelate: bool,
	/// Fixed RNG seed. `None` seeds from the clock.
	pub seed: Option<u64>,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			compact_breakpoint: 768.0,
			compact_count: 20,
			full_count: 40,
			wrap_margin: 50.0,
			noise_scale: 0.005,
			time_step: 0.005,
			speed_min: 0.2,
			speed_max: 0.7,
			size_min: 1.0,
			size_max: 5.0,
			rotation_speed_max: 0.01,
			glow_factor: 3.0,
			square_factor: 0.8,
			link_distance: 120.0,
			link_max_opacity: 0.4,
			link_width: 0.8,
			pointer_radius: 200.0,
			pointer_strength: 0.0005,
			decorrelate: false,
			seed: None,
		}
	}
}

impl FieldConfig {
	/// Number of particles for a viewport of the given logical width.
	pub fn particle_count(&self, width: f64) -> usize {
		let count = if width < self.compact_breakpoint {
			self.compact_count
		} else {
			self.full_count
		};
		count.min(MAX_PARTICLES)
	}

	/// Opacity of a connection line at distance `dist`, or `None` when the
	/// pair is too far apart to be linked.
	pub fn link_opacity(&self, dist: f64) -> Option<f64> {
		if dist < self.link_distance {
			Some(self.link_max_opacity * (1.0 - dist / self.link_distance))
		} else {
			None
		}
	}

	/// Repairs ranges that would make `gen_range` panic or the effect vanish.
	///
	/// Inverted ranges are swapped. Ranges with a non-finite bound or spread
	/// fall back to the defaults.
	pub fn sanitized(mut self) -> Self {
		let defaults = Self::default();

		(self.speed_min, self.speed_max) = ordered_range(
			self.speed_min,
			self.speed_max,
			(defaults.speed_min, defaults.speed_max),
		);
		(self.size_min, self.size_max) = ordered_range(
			self.size_min,
			self.size_max,
			(defaults.size_min, defaults.size_max),
		);
		self.size_min = self.size_min.max(0.1);
		self.size_max = self.size_max.max(self.size_min);

		let rotation = self.rotation_speed_max.abs();
		self.rotation_speed_max = if (rotation * 2.0).is_finite() {
			rotation
		} else {
			defaults.rotation_speed_max
		};
		self.link_distance = self.link_distance.max(0.0);
		self.pointer_radius = self.pointer_radius.max(0.0);
		self.wrap_margin = self.wrap_margin.max(0.0);
		self
	}
}

/// `(min, max)` in ascending order, or `fallback` when either bound or the
/// spread between them is not finite.
fn ordered_range(a: f64, b: f64, fallback: (f64, f64)) -> (f64, f64) {
	if !(b - a).is_finite() {
		return fallback;
	}
	if b < a { (b, a) } else { (a, b) }
}

/// Top-level config read from the page: field parameters plus theme overrides.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct BackdropConfig {
	/// Simulation and drawing parameters.
	pub field: FieldConfig,
	/// Palette and color overrides.
	pub theme: super::theme::ThemeOverrides,
}
