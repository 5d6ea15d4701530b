//! Browser host for the particle field.
//!
//! Creates the backdrop canvas as the first child of `<body>`, keeps its
//! backing store matched to the device pixel ratio, forwards `resize` and
//! `mousemove` to the [`ParticleField`], and drives it from
//! `requestAnimationFrame` until [`BackdropHost::stop`] is called.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::info;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::config::BackdropConfig;
use super::error::MountError;
use super::field::{ParticleField, Viewport};
use super::theme::FieldTheme;

/// Inline styles that pin the canvas behind all page content.
const CANVAS_STYLE: [(&str, &str); 9] = [
	("position", "fixed"),
	("top", "0"),
	("left", "0"),
	("width", "100%"),
	("height", "100%"),
	("z-index", "0"),
	("opacity", "0.9"),
	("mix-blend-mode", "screen"),
	("pointer-events", "none"),
];

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A running backdrop attached to the current document.
///
/// Dropping the host stops it.
pub struct BackdropHost {
	canvas: HtmlCanvasElement,
	field: Rc<RefCell<ParticleField>>,
	running: Rc<Cell<bool>>,
	frame_id: Rc<Cell<Option<i32>>>,
	animate: FrameCallback,
	on_resize: Closure<dyn FnMut()>,
	on_mouse_move: Closure<dyn FnMut(MouseEvent)>,
}

impl BackdropHost {
	/// Inserts the canvas, populates the field and starts the frame loop.
	pub fn attach(config: BackdropConfig) -> Result<Self, MountError> {
		let window = web_sys::window().ok_or(MountError::NoWindow)?;
		let document = window.document().ok_or(MountError::NoDocument)?;
		let body = document.body().ok_or(MountError::NoBody)?;

		let canvas: HtmlCanvasElement = document
			.create_element("canvas")?
			.dyn_into()
			.map_err(|_| MountError::Js("created element is not a canvas".into()))?;
		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")?
			.ok_or(MountError::ContextUnavailable)?
			.dyn_into()
			.map_err(|_| MountError::ContextUnavailable)?;

		let style = canvas.style();
		for (property, value) in CANVAS_STYLE {
			style.set_property(property, value)?;
		}
		body.insert_before(&canvas, body.first_child().as_ref())?;

		let viewport = read_viewport(&window);
		apply_viewport(&canvas, &ctx, viewport);

		let theme = FieldTheme::from_overrides(&config.theme);
		let seed = js_sys::Date::now() as u64;
		let field = Rc::new(RefCell::new(ParticleField::new(
			config.field,
			theme,
			viewport,
			seed,
		)));
		info!(
			"particle-backdrop: attached {}x{} @{}x with {} particles",
			viewport.width,
			viewport.height,
			viewport.device_pixel_ratio,
			field.borrow().particles().len()
		);

		let (field_resize, canvas_resize, ctx_resize) = (field.clone(), canvas.clone(), ctx.clone());
		let on_resize = Closure::<dyn FnMut()>::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let viewport = read_viewport(&win);
			apply_viewport(&canvas_resize, &ctx_resize, viewport);
			field_resize.borrow_mut().resize(viewport);
		});
		window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;

		let field_mm = field.clone();
		let on_mouse_move = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
			field_mm
				.borrow_mut()
				.on_pointer_move(ev.client_x() as f64, ev.client_y() as f64);
		});
		document
			.add_event_listener_with_callback("mousemove", on_mouse_move.as_ref().unchecked_ref())?;

		let running = Rc::new(Cell::new(true));
		let frame_id = Rc::new(Cell::new(None));
		let animate: FrameCallback = Rc::new(RefCell::new(None));

		let (field_anim, running_anim, frame_anim, animate_inner) =
			(field.clone(), running.clone(), frame_id.clone(), animate.clone());
		let mut ctx_anim = ctx;
		*animate.borrow_mut() = Some(Closure::new(move || {
			if !running_anim.get() {
				return;
			}
			field_anim.borrow_mut().tick(&mut ctx_anim);
			if let Some(ref cb) = *animate_inner.borrow() {
				frame_anim.set(request_frame(cb));
			}
		}));
		if let Some(ref cb) = *animate.borrow() {
			frame_id.set(request_frame(cb));
		}

		Ok(Self {
			canvas,
			field,
			running,
			frame_id,
			animate,
			on_resize,
			on_mouse_move,
		})
	}

	/// Cancels the frame loop, unregisters listeners and removes the canvas.
	/// Safe to call more than once.
	pub fn stop(&self) {
		if !self.running.replace(false) {
			return;
		}
		if let Some(window) = web_sys::window() {
			if let Some(id) = self.frame_id.take() {
				let _ = window.cancel_animation_frame(id);
			}
			let _ = window.remove_event_listener_with_callback(
				"resize",
				self.on_resize.as_ref().unchecked_ref(),
			);
			if let Some(document) = window.document() {
				let _ = document.remove_event_listener_with_callback(
					"mousemove",
					self.on_mouse_move.as_ref().unchecked_ref(),
				);
			}
		}
		// Breaks the frame callback's reference to itself.
		self.animate.borrow_mut().take();
		self.canvas.remove();
		info!("particle-backdrop: stopped");
	}

	/// `false` once `stop` has run.
	pub fn is_running(&self) -> bool {
		self.running.get()
	}

	/// Shared handle to the simulation, for pages that want to poke at it.
	pub fn field(&self) -> Rc<RefCell<ParticleField>> {
		self.field.clone()
	}
}

impl Drop for BackdropHost {
	fn drop(&mut self) {
		self.stop();
	}
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Option<i32> {
	web_sys::window()?
		.request_animation_frame(cb.as_ref().unchecked_ref())
		.ok()
}

fn read_viewport(window: &Window) -> Viewport {
	let dimension = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
	Viewport::new(
		dimension(window.inner_width()),
		dimension(window.inner_height()),
		window.device_pixel_ratio(),
	)
}

/// Sizes the backing store for `viewport` and resets the context to draw in
/// logical pixels. Resizing a canvas clears its transform, so this sets it
/// outright rather than scaling.
fn apply_viewport(canvas: &HtmlCanvasElement, ctx: &CanvasRenderingContext2d, viewport: Viewport) {
	let (width, height) = viewport.backing_size();
	canvas.set_width(width);
	canvas.set_height(height);
	let dpr = viewport.device_pixel_ratio;
	let _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
}
