//! Drawing for the particle field.
//!
//! Each frame starts with a translucent wash instead of a clear, which leaves
//! fading trails behind moving particles. Particles are then drawn one at a
//! time, each followed by its links to the particles after it.

use super::config::FieldConfig;
use super::particles::{Particle, Shape};
use super::surface::Surface;
use super::theme::{Color, FieldTheme};

/// Paints the translucent trail wash over the whole logical surface.
pub fn draw_trail<S: Surface>(surface: &mut S, width: f64, height: f64, theme: &FieldTheme) {
	surface.fill_rect(0.0, 0.0, width, height, theme.trail);
}

/// Draws one particle in its own rotated frame: glow first, then the shape.
pub fn draw_particle<S: Surface>(surface: &mut S, particle: &Particle, config: &FieldConfig, theme: &FieldTheme) {
	surface.save();
	surface.translate(particle.x, particle.y);
	surface.rotate(particle.rotation);

	surface.fill_glow(
		0.0,
		0.0,
		particle.size * config.glow_factor,
		particle.color.with_alpha(theme.glow_alpha),
		Color::TRANSPARENT,
	);

	match particle.shape {
		Shape::Circle => surface.fill_circle(0.0, 0.0, particle.size, particle.color),
		Shape::Square => {
			let half = particle.size * config.square_factor;
			surface.fill_rect(-half, -half, half * 2.0, half * 2.0, particle.color);
		}
	}

	surface.restore();
}

/// Links `particle` to every particle in `later` closer than the link distance.
///
/// Callers pass only the particles after this one, so each pair is drawn once.
/// Returns the number of lines drawn.
pub fn draw_links<S: Surface>(
	surface: &mut S,
	particle: &Particle,
	later: &[Particle],
	config: &FieldConfig,
	theme: &FieldTheme,
) -> usize {
	let mut drawn = 0;
	for other in later {
		let dist = particle.distance_to(other.x, other.y);
		let Some(opacity) = config.link_opacity(dist) else {
			continue;
		};
		surface.stroke_line(
			(particle.x, particle.y),
			(other.x, other.y),
			config.link_width,
			theme.link.with_alpha(opacity),
		);
		drawn += 1;
	}
	drawn
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::particle_field::surface::recording::{Op, RecordingSurface};

	fn particle_at(id: u64, x: f64, y: f64, shape: Shape) -> Particle {
		Particle {
			id,
			x,
			y,
			base_size: 2.0,
			size: 2.0,
			color: Color::rgba(0, 231, 255, 0.8),
			speed: 0.0,
			angle: 0.0,
			rotation: 0.5,
			rotation_speed: 0.0,
			noise_offset: 0.0,
			shape,
		}
	}

	#[test]
	fn trail_covers_the_viewport() {
		let mut surface = RecordingSurface::default();
		draw_trail(&mut surface, 640.0, 480.0, &FieldTheme::neon());
		assert_eq!(
			surface.ops,
			vec![Op::FillRect {
				x: 0.0,
				y: 0.0,
				width: 640.0,
				height: 480.0,
				color: Color::rgba(8, 10, 20, 0.2),
			}]
		);
	}

	#[test]
	fn circle_is_drawn_in_a_rotated_frame_with_glow() {
		let mut surface = RecordingSurface::default();
		let p = particle_at(0, 10.0, 20.0, Shape::Circle);
		draw_particle(&mut surface, &p, &FieldConfig::default(), &FieldTheme::neon());

		assert_eq!(
			surface.ops,
			vec![
				Op::Save,
				Op::Translate(10.0, 20.0),
				Op::Rotate(0.5),
				Op::FillGlow {
					radius: 6.0,
					inner: Color::rgba(0, 231, 255, 0.3),
					outer: Color::TRANSPARENT,
				},
				Op::FillCircle {
					x: 0.0,
					y: 0.0,
					radius: 2.0,
					color: Color::rgba(0, 231, 255, 0.8),
				},
				Op::Restore,
			]
		);
	}

	#[test]
	fn square_is_centered_on_the_particle() {
		let mut surface = RecordingSurface::default();
		let p = particle_at(0, 0.0, 0.0, Shape::Square);
		draw_particle(&mut surface, &p, &FieldConfig::default(), &FieldTheme::neon());

		let rect = surface
			.ops
			.iter()
			.find_map(|op| match op {
				Op::FillRect { x, y, width, height, .. } => Some((*x, *y, *width, *height)),
				_ => None,
			})
			.unwrap();
		assert!((rect.0 + 1.6).abs() < 1e-12);
		assert!((rect.1 + 1.6).abs() < 1e-12);
		assert!((rect.2 - 3.2).abs() < 1e-12);
		assert!((rect.3 - 3.2).abs() < 1e-12);
	}

	#[test]
	fn links_fade_with_distance_and_skip_far_pairs() {
		let mut surface = RecordingSurface::default();
		let a = particle_at(0, 0.0, 0.0, Shape::Circle);
		let later = vec![
			particle_at(1, 30.0, 40.0, Shape::Circle),
			particle_at(2, 500.0, 0.0, Shape::Circle),
		];
		let drawn = draw_links(&mut surface, &a, &later, &FieldConfig::default(), &FieldTheme::neon());
		assert_eq!(drawn, 1);

		let Op::StrokeLine { from, to, width, color } = &surface.ops[0] else {
			panic!("expected a line, got {:?}", surface.ops[0]);
		};
		assert_eq!(*from, (0.0, 0.0));
		assert_eq!(*to, (30.0, 40.0));
		assert_eq!(*width, 0.8);
		assert_eq!((color.r, color.g, color.b), (100, 150, 255));
		assert!((color.a - 0.4 * (1.0 - 50.0 / 120.0)).abs() < 1e-12);
	}
}
