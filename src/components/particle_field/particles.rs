//! Particle records and spawning.

use std::f64::consts::TAU;

use rand::Rng;

use super::config::FieldConfig;
use super::theme::Color;

/// Drawn shape of a particle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
	/// Filled disc.
	Circle,
	/// Axis-aligned square in the particle's rotated frame.
	Square,
}

/// A single floating particle.
///
/// Only `x`, `y`, `angle` and `rotation` change after spawn.
#[derive(Clone, Debug)]
pub struct Particle {
	/// Unique within the owning field, never reused.
	pub id: u64,
	/// Position in logical px.
	pub x: f64,
	/// Position in logical px.
	pub y: f64,
	/// Radius chosen at spawn.
	pub base_size: f64,
	/// Currently always `base_size`.
	pub size: f64,
	/// Fill color, picked from the theme palette.
	pub color: Color,
	/// Distance travelled per frame, in px.
	pub speed: f64,
	/// Heading in radians, resampled from the noise field every frame.
	pub angle: f64,
	/// Orientation of the drawn shape, in radians.
	pub rotation: f64,
	/// Added to `rotation` every frame.
	pub rotation_speed: f64,
	/// Per-particle noise seed. Only read when the field is decorrelated.
	pub noise_offset: f64,
	/// Drawn shape.
	pub shape: Shape,
}

impl Particle {
	/// Spawns a particle at a uniform random spot inside `width` x `height`.
	pub fn spawn<R: Rng>(
		rng: &mut R,
		id: u64,
		config: &FieldConfig,
		palette: &[Color],
		width: f64,
		height: f64,
	) -> Self {
		let color = if palette.is_empty() {
			Color::rgba(255, 255, 255, 0.8)
		} else {
			palette[rng.gen_range(0..palette.len())]
		};
		let base_size = uniform(rng, config.size_min, config.size_max);

		Self {
			id,
			x: uniform(rng, 0.0, width),
			y: uniform(rng, 0.0, height),
			base_size,
			size: base_size,
			color,
			speed: uniform(rng, config.speed_min, config.speed_max),
			angle: rng.gen_range(0.0..TAU),
			rotation: rng.gen_range(0.0..TAU),
			rotation_speed: uniform(rng, -config.rotation_speed_max, config.rotation_speed_max),
			noise_offset: rng.gen_range(0.0..1000.0),
			shape: if rng.gen_bool(0.5) {
				Shape::Circle
			} else {
				Shape::Square
			},
		}
	}

	/// Euclidean distance to `(x, y)`.
	pub fn distance_to(&self, x: f64, y: f64) -> f64 {
		let (dx, dy) = (self.x - x, self.y - y);
		(dx * dx + dy * dy).sqrt()
	}

	/// Wraps the particle to the opposite side once it is more than `margin`
	/// past an edge.
	pub fn wrap(&mut self, width: f64, height: f64, margin: f64) {
		if self.x < -margin {
			self.x = width + margin;
		}
		if self.x > width + margin {
			self.x = -margin;
		}
		if self.y < -margin {
			self.y = height + margin;
		}
		if self.y > height + margin {
			self.y = -margin;
		}
	}
}

/// Uniform sample from `[min, max)`, or `min` for an empty or unbounded range.
fn uniform<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
	if max > min && (max - min).is_finite() {
		rng.gen_range(min..max)
	} else {
		min
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use crate::components::particle_field::theme::FieldTheme;

	fn still_particle(x: f64, y: f64) -> Particle {
		Particle {
			id: 0,
			x,
			y,
			base_size: 2.0,
			size: 2.0,
			color: Color::rgb(255, 255, 255),
			speed: 0.0,
			angle: 0.0,
			rotation: 0.0,
			rotation_speed: 0.0,
			noise_offset: 0.0,
			shape: Shape::Circle,
		}
	}

	#[test]
	fn spawned_values_fall_in_configured_ranges() {
		let mut rng = SmallRng::seed_from_u64(11);
		let config = FieldConfig::default();
		let palette = FieldTheme::neon().palette;
		for id in 0..200 {
			let p = Particle::spawn(&mut rng, id, &config, &palette, 800.0, 600.0);
			assert!((0.0..800.0).contains(&p.x));
			assert!((0.0..600.0).contains(&p.y));
			assert!((1.0..5.0).contains(&p.base_size));
			assert_eq!(p.size, p.base_size);
			assert!((0.2..0.7).contains(&p.speed));
			assert!((-0.01..0.01).contains(&p.rotation_speed));
			assert!((0.0..1000.0).contains(&p.noise_offset));
			assert!(palette.contains(&p.color));
		}
	}

	#[test]
	fn spawn_produces_both_shapes() {
		let mut rng = SmallRng::seed_from_u64(3);
		let config = FieldConfig::default();
		let palette = FieldTheme::neon().palette;
		let shapes: Vec<Shape> = (0..50)
			.map(|id| Particle::spawn(&mut rng, id, &config, &palette, 100.0, 100.0).shape)
			.collect();
		assert!(shapes.contains(&Shape::Circle));
		assert!(shapes.contains(&Shape::Square));
	}

	#[test]
	fn degenerate_ranges_do_not_panic() {
		let mut rng = SmallRng::seed_from_u64(5);
		let config = FieldConfig {
			speed_min: 0.3,
			speed_max: 0.3,
			rotation_speed_max: 0.0,
			..FieldConfig::default()
		};
		let p = Particle::spawn(&mut rng, 1, &config, &[], 0.0, 0.0);
		assert_eq!(p.speed, 0.3);
		assert_eq!(p.rotation_speed, 0.0);
		assert_eq!((p.x, p.y), (0.0, 0.0));
	}

	#[test]
	fn wraps_every_edge() {
		let (w, h) = (800.0, 600.0);

		let mut p = still_particle(w + 60.0, 10.0);
		p.wrap(w, h, 50.0);
		assert_eq!(p.x, -50.0);

		let mut p = still_particle(-60.0, 10.0);
		p.wrap(w, h, 50.0);
		assert_eq!(p.x, w + 50.0);

		let mut p = still_particle(10.0, h + 60.0);
		p.wrap(w, h, 50.0);
		assert_eq!(p.y, -50.0);

		let mut p = still_particle(10.0, -60.0);
		p.wrap(w, h, 50.0);
		assert_eq!(p.y, h + 50.0);
	}

	#[test]
	fn margin_band_does_not_wrap() {
		let mut p = still_particle(840.0, -40.0);
		p.wrap(800.0, 600.0, 50.0);
		assert_eq!((p.x, p.y), (840.0, -40.0));
	}
}
