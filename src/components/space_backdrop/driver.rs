//! Frame loop lifecycle: start, per-frame step and draw, resize, stop.
//!
//! The driver never touches the browser directly. It asks a [`FrameScheduler`]
//! for the next frame and keeps the returned handle so `stop` can cancel it.

use log::{debug, info};

use super::entities::Viewport;
use super::render;
use super::scene::Scene;
use super::surface::Surface;
use super::theme::Palette;

/// Source of display-refresh callbacks.
pub trait FrameScheduler {
	/// Token identifying a pending frame request.
	type Handle;

	/// Requests one callback at the next display refresh. `None` means the
	/// request could not be made and no callback will arrive.
	fn request_frame(&mut self) -> Option<Self::Handle>;

	/// Cancels a pending request.
	fn cancel_frame(&mut self, handle: Self::Handle);
}

/// Owns the scene for the lifetime of a mounted backdrop.
pub struct Driver<F: FrameScheduler> {
	scene: Scene,
	palette: Palette,
	scheduler: F,
	pending: Option<F::Handle>,
	running: bool,
}

impl<F: FrameScheduler> Driver<F> {
	/// Idle driver; nothing is scheduled until [`Driver::start`].
	pub fn new(scene: Scene, palette: Palette, scheduler: F) -> Self {
		Self {
			scene,
			palette,
			scheduler,
			pending: None,
			running: false,
		}
	}

	/// Current scene state.
	pub fn scene(&self) -> &Scene {
		&self.scene
	}

	/// True between a successful `start` and `stop`.
	pub fn is_running(&self) -> bool {
		self.running
	}

	/// Starts the loop by requesting the first frame. Returns false if the
	/// scheduler refused; calling it while running is a no-op.
	pub fn start(&mut self) -> bool {
		if self.running {
			return true;
		}
		self.pending = self.scheduler.request_frame();
		self.running = self.pending.is_some();
		if self.running {
			info!(
				"space-backdrop: started {}x{}",
				self.scene.viewport.width, self.scene.viewport.height
			);
		}
		self.running
	}

	/// Handles one frame callback: steps the scene, redraws it, and schedules
	/// the next frame. Returns false once the driver is stopped.
	pub fn on_frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> bool {
		self.pending = None;
		if !self.running {
			return false;
		}

		self.scene.step();
		render::render(&self.scene, surface, &self.palette);

		self.pending = self.scheduler.request_frame();
		if self.pending.is_none() {
			self.running = false;
		}
		self.running
	}

	/// Applies a new viewport size; ignored for degenerate sizes.
	pub fn resize(&mut self, width: f64, height: f64) -> bool {
		let applied = self.scene.resize(Viewport::new(width, height));
		if applied {
			debug!("space-backdrop: resized to {width}x{height}");
		}
		applied
	}

	/// Stops the loop and cancels the outstanding frame request, if any.
	pub fn stop(&mut self) {
		if let Some(handle) = self.pending.take() {
			self.scheduler.cancel_frame(handle);
		}
		if self.running {
			info!("space-backdrop: stopped after {} ticks", self.scene.ticks);
		}
		self.running = false;
	}
}
