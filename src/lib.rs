//! space-backdrop: procedural animated space backgrounds for the web.
//!
//! This crate provides a WASM canvas component that paints a full-viewport
//! starfield or gravity-well animation behind page content.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::space_backdrop::{BackdropConfig, SceneConfig, SpaceBackdropCanvas, Variant};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("space-backdrop: logging initialized");
}

/// Load backdrop settings from a script element with id="backdrop-config".
/// Expected format: JSON like { "variant": "gravity_well", "seed": 42, "dust": 30 }
fn load_backdrop_config() -> Option<BackdropConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("backdrop-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<BackdropConfig>(&json_text) {
		Ok(config) => {
			info!("space-backdrop: loaded {:?} configuration", config.variant);
			Some(config)
		}
		Err(e) => {
			warn!("space-backdrop: failed to parse backdrop config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Reads backdrop settings from the DOM and mounts the animated background.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_backdrop_config().unwrap_or_default();
	let variant = config.variant;
	let seed = config.seed;
	let scene = config.scene();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Space Backdrop" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<SpaceBackdropCanvas variant=variant seed=seed config=Some(scene) />
		<main class="backdrop-content">
			<h1>"Space Backdrop"</h1>
			<p class="subtitle">"Resize the window to watch the scene adapt."</p>
		</main>
	}
}
