//! Client entrypoint for the CSR build.

// Bin target reuses lib deps, silence noisy lint.
#![allow(unused_crate_dependencies)]

use leptos::prelude::*;
use particle_backdrop::{init_logging, App};

fn main() {
	init_logging();

	mount_to_body(|| {
		view! { <App /> }
	})
}
