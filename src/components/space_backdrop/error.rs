//! Mount-time failures.
//!
//! None of these are fatal to the host page: the component logs the error and
//! leaves the canvas blank.

use thiserror::Error;

/// Why a backdrop could not start.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MountError {
	/// Not running in a browser window.
	#[error("no browser window available")]
	NoWindow,
	/// The window reported no usable inner size.
	#[error("viewport size unavailable")]
	ViewportUnavailable,
	/// The canvas refused a 2D context.
	#[error("2d canvas context unavailable")]
	ContextUnavailable,
	/// `addEventListener("resize")` failed.
	#[error("could not register resize listener")]
	ResizeListener,
	/// `requestAnimationFrame` failed for the first frame.
	#[error("animation frames unavailable")]
	SchedulerUnavailable,
}
