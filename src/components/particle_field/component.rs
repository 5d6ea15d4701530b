//! Leptos component wrapping the particle backdrop.
//!
//! The component renders nothing in place: on mount it attaches a
//! [`BackdropHost`], which inserts its own canvas as the first child of
//! `<body>` so it sits beneath everything else on the page. The host is
//! stopped when the component's owner is cleaned up.

use leptos::prelude::*;
use log::warn;

use super::config::BackdropConfig;
use super::host::BackdropHost;

/// Full-viewport animated particle background.
///
/// Foreground content must establish its own stacking context above z-index
/// 0 (e.g. `position: relative; z-index: 2`) to stay visible over the canvas.
#[component]
pub fn ParticleBackground(
	/// Field parameters and theme overrides. Defaults to the stock look.
	#[prop(optional)]
	config: BackdropConfig,
) -> impl IntoView {
	let host = StoredValue::new_local(None::<BackdropHost>);

	Effect::new(move |_| {
		if host.with_value(Option::is_some) {
			return;
		}
		match BackdropHost::attach(config.clone()) {
			Ok(attached) => host.set_value(Some(attached)),
			Err(e) => warn!("particle-backdrop: not rendering: {}", e),
		}
	});

	on_cleanup(move || {
		host.try_update_value(|slot| {
			if let Some(attached) = slot.take() {
				attached.stop();
			}
		});
	});
}
