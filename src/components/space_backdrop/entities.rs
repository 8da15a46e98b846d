//! Plain entity records for the space scene.
//!
//! Entities carry no behavior of their own beyond small derived queries; the
//! stepper and renderer match on the kind and phase enums below.

/// Current drawable area in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	/// Width in CSS pixels.
	pub width: f64,
	/// Height in CSS pixels.
	pub height: f64,
}

impl Viewport {
	/// Viewport of the given size; see [`Viewport::is_valid`].
	pub fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	/// Shorter of the two sides, which sizes the attractor.
	pub fn min_side(&self) -> f64 {
		self.width.min(self.height)
	}

	/// Whether this is a usable drawing area.
	pub fn is_valid(&self) -> bool {
		self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
	}
}

/// Lifecycle of entities that sleep between appearances.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
	/// Invisible; becomes active once the countdown (in ticks) runs out.
	Dormant {
		/// Ticks left before activation; always positive while dormant.
		timer: u32,
	},
	/// Moving and visible.
	Active,
}

impl Phase {
	/// True when the entity is moving and drawn.
	pub fn is_active(&self) -> bool {
		matches!(self, Phase::Active)
	}
}

/// A point of light in a parallax layer.
#[derive(Clone, Debug)]
pub struct Star {
	/// Horizontal position, wrapped into the viewport width.
	pub x: f64,
	/// Vertical position; never changes.
	pub y: f64,
	/// Radius in pixels.
	pub radius: f64,
	/// Current brightness, kept inside the layer's alpha bounds.
	pub alpha: f64,
	/// Maximum alpha change per tick.
	pub twinkle: f64,
	/// Horizontal velocity in px/tick.
	pub drift: f64,
}

/// A parallax layer. Index 0 is the nearest, brightest layer.
#[derive(Clone, Debug)]
pub struct StarLayer {
	/// Depth of the layer, which also picks its palette style.
	pub index: usize,
	/// Stars of this layer; the count never changes.
	pub stars: Vec<Star>,
	/// Largest drift any star in the layer may have; 0 means a static layer.
	pub drift_speed: f64,
	/// Lower twinkle bound.
	pub min_alpha: f64,
	/// Upper twinkle bound.
	pub max_alpha: f64,
}

/// Distinguishes the two looks a falling particle can have.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleKind {
	/// Bright head with a long trail.
	Meteor,
	/// Small pale dot.
	Ambient,
}

/// A meteor or ambient particle falling across the screen.
#[derive(Clone, Debug)]
pub struct Particle {
	/// Horizontal position in pixels.
	pub x: f64,
	/// Vertical position in pixels.
	pub y: f64,
	/// Horizontal velocity in px/tick.
	pub vx: f64,
	/// Vertical velocity in px/tick.
	pub vy: f64,
	/// Head radius.
	pub size: f64,
	/// Opacity; absorbed particles fade toward 0.
	pub alpha: f64,
	/// Meteor or ambient look.
	pub kind: ParticleKind,
}

/// A rare, fast streak that sleeps between appearances.
#[derive(Clone, Debug)]
pub struct ShootingStar {
	/// Horizontal position in pixels.
	pub x: f64,
	/// Vertical position in pixels.
	pub y: f64,
	/// Horizontal velocity in px/tick.
	pub vx: f64,
	/// Vertical velocity in px/tick.
	pub vy: f64,
	/// Tail length in pixels.
	pub length: f64,
	/// Opacity; 1 at launch, fading every tick.
	pub alpha: f64,
	/// Dormant countdown or active flight.
	pub phase: Phase,
}

/// A faint mote drifting slowly and wrapping on both axes.
#[derive(Clone, Debug)]
pub struct Dust {
	/// Horizontal position in pixels.
	pub x: f64,
	/// Vertical position in pixels.
	pub y: f64,
	/// Radius in pixels.
	pub radius: f64,
	/// Fixed opacity.
	pub alpha: f64,
	/// Horizontal drift in px/tick.
	pub dx: f64,
	/// Vertical drift in px/tick.
	pub dy: f64,
}

/// Soft colored cloud that drifts and bounces inside the viewport.
#[derive(Clone, Debug)]
pub struct Nebula {
	/// Horizontal position in pixels.
	pub x: f64,
	/// Vertical position in pixels.
	pub y: f64,
	/// Outer radius of the gradient.
	pub radius: f64,
	/// Index into the palette's nebula colors.
	pub color: usize,
	/// Horizontal drift in px/tick; the sign flips at the bounce band.
	pub dx: f64,
	/// Vertical drift in px/tick.
	pub dy: f64,
	/// Base opacity the pulse oscillates around.
	pub alpha: f64,
	/// Pulse frequency factor.
	pub pulse: f64,
}

impl Nebula {
	/// Pulsing alpha at a point in time, clamped to [0, 1].
	pub fn alpha_at(&self, elapsed_ms: f64) -> f64 {
		(self.alpha + 0.08 * (elapsed_ms * self.pulse * 0.7).sin()).clamp(0.0, 1.0)
	}
}

/// A static glowing disc anchored at mount time.
#[derive(Clone, Debug)]
pub struct Planet {
	/// Horizontal position in pixels.
	pub x: f64,
	/// Vertical position in pixels.
	pub y: f64,
	/// Disc radius.
	pub radius: f64,
	/// Index into the palette's planet styles.
	pub style: usize,
	/// Fixed opacity.
	pub alpha: f64,
}

/// A static spiral anchored at mount time.
#[derive(Clone, Debug)]
pub struct Galaxy {
	/// Horizontal position in pixels.
	pub x: f64,
	/// Vertical position in pixels.
	pub y: f64,
	/// Reach of the outermost arm point.
	pub radius: f64,
	/// Number of spiral arms.
	pub arms: u32,
	/// Index into the palette's galaxy colors.
	pub color: usize,
	/// Fixed opacity.
	pub alpha: f64,
}

/// A dark silhouette that crosses the screen left to right now and then.
#[derive(Clone, Debug)]
pub struct Satellite {
	/// Horizontal position in pixels.
	pub x: f64,
	/// Vertical position in pixels.
	pub y: f64,
	/// Horizontal speed in px/tick.
	pub vx: f64,
	/// Scale of the silhouette.
	pub size: f64,
	/// Opacity while crossing.
	pub alpha: f64,
	/// Dormant countdown or active crossing.
	pub phase: Phase,
}

/// The black hole of the gravity well variant.
#[derive(Clone, Debug, PartialEq)]
pub struct Attractor {
	/// Horizontal position in pixels.
	pub x: f64,
	/// Vertical position in pixels.
	pub y: f64,
	/// Radius of the solid body particles cannot enter.
	pub radius: f64,
	/// Particles inside this radius fade out.
	pub event_horizon: f64,
	/// Outer radius of the pull, `capture_factor × event_horizon`.
	pub capture_radius: f64,
}

impl Attractor {
	/// Distance from the attractor center to a point.
	pub fn distance_to(&self, x: f64, y: f64) -> f64 {
		(x - self.x).hypot(y - self.y)
	}
}
