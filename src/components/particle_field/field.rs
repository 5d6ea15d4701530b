//! Particle field simulation state.
//!
//! [`ParticleField`] owns everything that changes while the backdrop runs:
//! the particle set, the field clock, the viewport and the RNG. Browser glue
//! feeds it resize and pointer events and calls [`ParticleField::tick`] once
//! per animation frame.

use std::f64::consts::TAU;

use log::{debug, trace};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::config::FieldConfig;
use super::noise::noise3;
use super::particles::Particle;
use super::render;
use super::surface::Surface;
use super::theme::FieldTheme;

/// Logical viewport size plus the device pixel ratio used for the backing store.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	/// Logical width in CSS px.
	pub width: f64,
	/// Logical height in CSS px.
	pub height: f64,
	/// Backing-store pixels per CSS px. Always finite and positive.
	pub device_pixel_ratio: f64,
}

impl Viewport {
	/// Negative sizes clamp to zero; a bad pixel ratio becomes 1.
	pub fn new(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
		let device_pixel_ratio = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
			device_pixel_ratio
		} else {
			1.0
		};
		Self {
			width: width.max(0.0),
			height: height.max(0.0),
			device_pixel_ratio,
		}
	}

	/// Canvas pixel dimensions for this viewport.
	pub fn backing_size(&self) -> (u32, u32) {
		(
			(self.width * self.device_pixel_ratio) as u32,
			(self.height * self.device_pixel_ratio) as u32,
		)
	}
}

/// The running particle simulation.
pub struct ParticleField {
	particles: Vec<Particle>,
	viewport: Viewport,
	time: f64,
	next_id: u64,
	config: FieldConfig,
	theme: FieldTheme,
	rng: SmallRng,
}

impl ParticleField {
	/// Creates a field for `viewport`, seeding from `config.seed` or `fallback_seed`.
	pub fn new(config: FieldConfig, theme: FieldTheme, viewport: Viewport, fallback_seed: u64) -> Self {
		let config = config.sanitized();
		let rng = SmallRng::seed_from_u64(config.seed.unwrap_or(fallback_seed));
		let mut field = Self {
			particles: Vec::new(),
			viewport,
			time: 0.0,
			next_id: 0,
			config,
			theme,
			rng,
		};
		field.populate();
		field
	}

	/// Discards every particle and spawns a fresh set sized for the viewport.
	fn populate(&mut self) {
		let count = self.config.particle_count(self.viewport.width);
		self.particles.clear();
		self.particles.reserve(count);
		for _ in 0..count {
			let particle = Particle::spawn(
				&mut self.rng,
				self.next_id,
				&self.config,
				&self.theme.palette,
				self.viewport.width,
				self.viewport.height,
			);
			self.next_id += 1;
			self.particles.push(particle);
		}
	}

	/// Adopts a new viewport and regenerates the particle set from scratch.
	pub fn resize(&mut self, viewport: Viewport) {
		self.viewport = viewport;
		self.populate();
		debug!(
			"particle-backdrop: resized to {}x{} @{}x, {} particles",
			viewport.width,
			viewport.height,
			viewport.device_pixel_ratio,
			self.particles.len()
		);
	}

	/// Pulls particles near the pointer towards it. Returns how many moved.
	pub fn on_pointer_move(&mut self, x: f64, y: f64) -> usize {
		let radius = self.config.pointer_radius;
		let strength = self.config.pointer_strength;
		let mut moved = 0;
		for p in &mut self.particles {
			let (dx, dy) = (x - p.x, y - p.y);
			let distance = (dx * dx + dy * dy).sqrt();
			if distance < radius {
				let force = (radius - distance) * strength;
				p.x += dx * force;
				p.y += dy * force;
				moved += 1;
			}
		}
		trace!("particle-backdrop: pointer at ({x}, {y}) nudged {moved} particles");
		moved
	}

	/// Advances the simulation one frame and draws it.
	///
	/// Update and draw are interleaved per particle, so links from particle
	/// `i` reach particles `j > i` at their positions from the previous frame.
	pub fn tick<S: Surface>(&mut self, surface: &mut S) {
		render::draw_trail(surface, self.viewport.width, self.viewport.height, &self.theme);
		self.time += self.config.time_step;

		for i in 0..self.particles.len() {
			let (head, later) = self.particles.split_at_mut(i + 1);
			let particle = &mut head[i];
			advance(particle, self.time, &self.config, &self.viewport);
			render::draw_particle(surface, particle, &self.config, &self.theme);
			render::draw_links(surface, particle, later, &self.config, &self.theme);
		}
	}

	/// Advances the simulation one frame without drawing.
	pub fn step(&mut self) {
		self.time += self.config.time_step;
		for particle in &mut self.particles {
			advance(particle, self.time, &self.config, &self.viewport);
		}
	}

	/// Current particles in draw order.
	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// Mutable access for embedders that reposition particles.
	pub fn particles_mut(&mut self) -> &mut [Particle] {
		&mut self.particles
	}

	/// Viewport the current particle set was spawned for.
	pub fn viewport(&self) -> Viewport {
		self.viewport
	}

	/// Field clock, the noise z coordinate.
	pub fn time(&self) -> f64 {
		self.time
	}

	/// Effective config after sanitizing.
	pub fn config(&self) -> &FieldConfig {
		&self.config
	}
}

/// Steers one particle along the noise field, then spins and wraps it.
fn advance(particle: &mut Particle, time: f64, config: &FieldConfig, viewport: &Viewport) {
	let z = if config.decorrelate {
		time + particle.noise_offset
	} else {
		time
	};
	let noise = noise3(
		particle.x * config.noise_scale,
		particle.y * config.noise_scale,
		z,
	);
	particle.angle = noise * TAU * 0.5;
	particle.x += particle.angle.cos() * particle.speed;
	particle.y += particle.angle.sin() * particle.speed;
	particle.rotation += particle.rotation_speed;
	particle.wrap(viewport.width, viewport.height, config.wrap_margin);
}
