//! Procedural space backgrounds rendered on a fixed canvas.
//!
//! Two variants share one engine:
//! - **Starfield**: parallax star layers, a meteor shower, rare shooting stars,
//!   drifting dust, pulsing nebulae, planets, spiral galaxies, and a satellite
//! - **Gravity well**: twinkling stars and particles pulled into a black hole
//!   that absorbs them inside its event horizon
//!
//! The pieces are layered so each can be used on its own:
//! [`Scene`] holds entity state and advances it with [`Scene::step`],
//! [`render`] paints a scene onto any [`Surface`], and [`Driver`] ties the two
//! to a [`FrameScheduler`]. [`SpaceBackdropCanvas`] wires all of it to the
//! browser.
//!
//! # Example
//!
//! ```ignore
//! use space_backdrop::{SpaceBackdropCanvas, Variant};
//!
//! view! { <SpaceBackdropCanvas variant=Variant::GravityWell /> }
//! ```

mod canvas;
mod component;
pub mod config;
mod driver;
pub mod entities;
mod error;
mod render;
pub mod rng;
mod scene;
mod spawn;
mod step;
mod surface;
pub mod theme;

pub use component::SpaceBackdropCanvas;
pub use config::{BackdropConfig, SceneConfig, Variant};
pub use driver::{Driver, FrameScheduler};
pub use error::MountError;
pub use render::render;
pub use scene::{FRAME_MS, Scene};
pub use surface::{Paint, RadialGradient, Surface};
pub use theme::Palette;
