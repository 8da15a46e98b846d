//! Leptos component hosting the space backdrop canvas.
//!
//! The canvas is fixed to the viewport behind page content and ignores pointer
//! input. On mount it builds the scene, registers a window `resize` listener,
//! and starts a `requestAnimationFrame` loop through the [`Driver`]. On unmount
//! the pending frame is cancelled and the listener removed.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::config::{SceneConfig, Variant};
use super::driver::{Driver, FrameScheduler};
use super::entities::Viewport;
use super::error::MountError;
use super::scene::Scene;
use super::theme::Palette;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Schedules frames with `window.requestAnimationFrame`.
struct RafScheduler {
	window: Window,
	callback: FrameCallback,
}

impl FrameScheduler for RafScheduler {
	type Handle = i32;

	fn request_frame(&mut self) -> Option<i32> {
		let callback = self.callback.borrow();
		let cb = callback.as_ref()?;
		self.window
			.request_animation_frame(cb.as_ref().unchecked_ref())
			.ok()
	}

	fn cancel_frame(&mut self, handle: i32) {
		let _ = self.window.cancel_animation_frame(handle);
	}
}

/// Everything a live backdrop holds on to.
struct Mounted {
	window: Window,
	driver: Rc<RefCell<Driver<RafScheduler>>>,
	frame_cb: FrameCallback,
	resize_cb: Closure<dyn FnMut()>,
}

impl Mounted {
	fn unmount(self) {
		if let Ok(mut driver) = self.driver.try_borrow_mut() {
			driver.stop();
		}
		let _ = self
			.window
			.remove_event_listener_with_callback("resize", self.resize_cb.as_ref().unchecked_ref());
		// Breaks the driver -> scheduler -> closure -> driver cycle.
		self.frame_cb.borrow_mut().take();
	}
}

fn read_viewport(window: &Window) -> Option<Viewport> {
	let view = Viewport::new(
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	);
	view.is_valid().then_some(view)
}

fn mount(canvas: HtmlCanvasElement, config: SceneConfig, seed: u64) -> Result<Mounted, MountError> {
	let window = web_sys::window().ok_or(MountError::NoWindow)?;
	let view = read_viewport(&window).ok_or(MountError::ViewportUnavailable)?;
	canvas.set_width(view.width as u32);
	canvas.set_height(view.height as u32);

	let ctx: CanvasRenderingContext2d = canvas
		.get_context("2d")
		.ok()
		.flatten()
		.ok_or(MountError::ContextUnavailable)?
		.dyn_into()
		.map_err(|_| MountError::ContextUnavailable)?;

	let frame_cb: FrameCallback = Rc::new(RefCell::new(None));
	let scheduler = RafScheduler {
		window: window.clone(),
		callback: frame_cb.clone(),
	};
	let scene = Scene::new(config, view, seed);
	let driver = Rc::new(RefCell::new(Driver::new(scene, Palette::cosmic(), scheduler)));

	let driver_frame = driver.clone();
	let mut surface = ctx;
	*frame_cb.borrow_mut() = Some(Closure::new(move || {
		if let Ok(mut d) = driver_frame.try_borrow_mut() {
			d.on_frame(&mut surface);
		}
	}));

	let (driver_resize, canvas_resize) = (driver.clone(), canvas);
	let resize_cb: Closure<dyn FnMut()> = Closure::new(move || {
		let Some(win) = web_sys::window() else {
			return;
		};
		let Some(view) = read_viewport(&win) else {
			return;
		};
		if let Ok(mut d) = driver_resize.try_borrow_mut() {
			if d.resize(view.width, view.height) {
				canvas_resize.set_width(view.width as u32);
				canvas_resize.set_height(view.height as u32);
			}
		}
	});
	if window
		.add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
		.is_err()
	{
		frame_cb.borrow_mut().take();
		return Err(MountError::ResizeListener);
	}

	let mounted = Mounted {
		window,
		driver,
		frame_cb,
		resize_cb,
	};
	let started = mounted.driver.borrow_mut().start();
	if !started {
		mounted.unmount();
		return Err(MountError::SchedulerUnavailable);
	}
	Ok(mounted)
}

/// Full-viewport animated space background.
///
/// Pick a preset with `variant`, or pass a complete `config` to override it.
/// `seed` makes the scene reproducible; by default it is taken from the clock.
/// If the canvas cannot be set up the component renders an empty canvas and
/// logs a warning.
#[component]
pub fn SpaceBackdropCanvas(
	#[prop(default = Variant::Starfield)] variant: Variant,
	#[prop(default = None)] seed: Option<u64>,
	#[prop(default = None)] config: Option<SceneConfig>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let mounted: Rc<RefCell<Option<Mounted>>> = Rc::new(RefCell::new(None));
	let mounted_init = mounted.clone();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if mounted_init.borrow().is_some() {
			return;
		}

		let config = config
			.clone()
			.unwrap_or_else(|| SceneConfig::for_variant(variant))
			.sanitized();
		let seed = seed.unwrap_or_else(|| js_sys::Date::now() as u64);

		match mount(canvas.into(), config, seed) {
			Ok(m) => *mounted_init.borrow_mut() = Some(m),
			Err(e) => warn!("space-backdrop: {}; background disabled", e),
		}
	});

	let mounted_cleanup = SendWrapper::new(mounted);
	on_cleanup(move || {
		let taken = mounted_cleanup.borrow_mut().take();
		if let Some(m) = taken {
			m.unmount();
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="space-backdrop"
			aria-hidden="true"
			style="position: fixed; top: 0; left: 0; width: 100vw; height: 100vh; z-index: 0; pointer-events: none;"
		/>
	}
}
