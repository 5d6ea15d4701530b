//! particle-backdrop: Noise-driven ambient particle background.
//!
//! This crate provides a WASM canvas backdrop for a portfolio landing page:
//! a small set of glowing particles drifting along a gradient-noise field,
//! linked by faint lines when close, and drawn towards the pointer.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::particle_field::{
	BackdropConfig, BackdropHost, FieldConfig, FieldTheme, ParticleBackground, ParticleField,
	Viewport,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("particle-backdrop: logging initialized");
}

/// Load backdrop settings from a script element with id="particle-config".
/// Expected format: JSON with optional { field: {...}, theme: {...} }
fn load_backdrop_config() -> Option<BackdropConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("particle-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	parse_backdrop_config(&json_text)
}

fn parse_backdrop_config(json_text: &str) -> Option<BackdropConfig> {
	match serde_json::from_str::<BackdropConfig>(json_text) {
		Ok(config) => {
			info!(
				"particle-backdrop: loaded config (theme {:?}, {} particles max)",
				config.theme.preset.as_deref().unwrap_or("neon"),
				config.field.full_count
			);
			Some(config)
		}
		Err(e) => {
			warn!("particle-backdrop: failed to parse config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Loads backdrop settings from the DOM and lays the hero content over the canvas.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_backdrop_config().unwrap_or_default();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Portfolio" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<ParticleBackground config=config />
		<section class="hero">
			<div class="hero-content" style="position: relative; z-index: 2;">
				<h1>"Hello, I build things."</h1>
				<p class="subtitle">"Move your cursor around. The particles notice."</p>
			</div>
		</section>
	}
}
