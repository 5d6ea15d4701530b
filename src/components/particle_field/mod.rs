//! Ambient particle background.
//!
//! Renders a full-viewport canvas behind the page with:
//! - Particles steered by a 3D gradient-noise field
//! - Soft radial glows and proximity links between particles
//! - Gentle attraction towards the pointer
//! - Translucent per-frame wash for motion trails
//!
//! The simulation ([`ParticleField`]) is plain Rust and draws through the
//! [`Surface`] trait; [`BackdropHost`] binds it to the browser.
//!
//! # Example
//!
//! ```ignore
//! use particle_backdrop::{BackdropConfig, ParticleBackground};
//!
//! view! { <ParticleBackground config=BackdropConfig::default() /> }
//! ```

mod component;
pub mod config;
mod error;
mod field;
mod host;
mod noise;
mod particles;
mod render;
mod surface;
pub mod theme;

pub use component::ParticleBackground;
pub use config::{BackdropConfig, FieldConfig};
pub use error::MountError;
pub use field::{ParticleField, Viewport};
pub use host::BackdropHost;
pub use particles::{Particle, Shape};
pub use surface::Surface;
pub use theme::{Color, FieldTheme};
