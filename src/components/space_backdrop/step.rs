//! Per-tick entity updates.
//!
//! One call advances an entity by exactly one tick at the fixed 60 Hz cadence,
//! so velocities and fade rates are expressed per tick. Functions here mutate
//! a single entity (or slot) and never look at the rest of the scene.

use super::config::GravityConfig;
use super::entities::{
	Attractor, Dust, Nebula, Particle, Phase, Satellite, ShootingStar, StarLayer, Viewport,
};
use super::rng::Rng;
use super::spawn;

/// Particles this far past the bottom or right edge are recycled.
const PARTICLE_MARGIN: f64 = 40.0;
/// Shooting stars this far past the bottom or right edge are recycled.
const SHOOTING_STAR_MARGIN: f64 = 100.0;
/// Alpha lost per tick by an active shooting star.
const SHOOTING_STAR_FADE: f64 = 0.012;

/// Wraps `value` into `[0, extent)`.
pub fn wrap(value: f64, extent: f64) -> f64 {
	if extent.is_nan() || extent <= 0.0 || !value.is_finite() {
		return 0.0;
	}
	let wrapped = value.rem_euclid(extent);
	// rem_euclid can round up to `extent` for tiny negative inputs
	if wrapped >= extent { 0.0 } else { wrapped }
}

/// Twinkles and drifts every star in a layer. Only the x axis wraps, and a
/// layer with no drift speed never moves.
pub fn star_layer(layer: &mut StarLayer, rng: &mut Rng, view: Viewport) {
	let drifting = layer.drift_speed > 0.0;
	for star in &mut layer.stars {
		star.alpha =
			(star.alpha + rng.jitter(1.0) * star.twinkle).clamp(layer.min_alpha, layer.max_alpha);
		if drifting {
			star.x = wrap(star.x + star.drift, view.width);
		}
	}
}

/// Drifts a dust mote, wrapping on both axes.
pub fn dust(mote: &mut Dust, view: Viewport) {
	mote.x = wrap(mote.x + mote.dx, view.width);
	mote.y = wrap(mote.y + mote.dy, view.height);
}

/// Moves a nebula and reflects its velocity off the viewport edges.
///
/// Reflection sets the sign from the side that was crossed instead of negating,
/// so a nebula still outside the band on the next tick does not flip back.
pub fn nebula(cloud: &mut Nebula, view: Viewport) {
	cloud.x += cloud.dx;
	cloud.y += cloud.dy;

	let (left, right) = bounce_band(cloud.radius, view.width);
	if cloud.x < left {
		cloud.dx = cloud.dx.abs();
	} else if cloud.x > right {
		cloud.dx = -cloud.dx.abs();
	}

	let (top, bottom) = bounce_band(cloud.radius * 0.3, view.height);
	if cloud.y < top {
		cloud.dy = cloud.dy.abs();
	} else if cloud.y > bottom {
		cloud.dy = -cloud.dy.abs();
	}
}

/// Interval the entity center must stay in; collapses to the midline when the
/// entity is wider than the viewport.
fn bounce_band(inset: f64, extent: f64) -> (f64, f64) {
	let mid = extent / 2.0;
	(inset.min(mid), (extent - inset).max(mid))
}

fn out_of_bounds(x: f64, y: f64, view: Viewport, margin: f64) -> bool {
	y > view.height + margin || x > view.width + margin
}

/// Moves a ballistic particle and recycles it in place once it leaves the screen.
pub fn particle(p: &mut Particle, rng: &mut Rng, view: Viewport, meteor_ratio: f64) {
	p.x += p.vx;
	p.y += p.vy;
	if out_of_bounds(p.x, p.y, view, PARTICLE_MARGIN) {
		*p = spawn::particle(rng, view, meteor_ratio);
	}
}

/// Pulls a particle toward the attractor, fades it inside the event horizon,
/// and recycles it once fully absorbed or gone from the screen.
///
/// Distance, force, and fade all use the position at the start of the tick.
/// Outside the capture radius a particle keeps its velocity.
pub fn gravity_particle(
	p: &mut Particle,
	hole: &Attractor,
	gravity: &GravityConfig,
	rng: &mut Rng,
	view: Viewport,
	meteor_ratio: f64,
) {
	let (dx, dy) = (hole.x - p.x, hole.y - p.y);
	let dist = dx.hypot(dy);

	if dist < hole.capture_radius && dist > f64::EPSILON {
		let strength =
			gravity.base_force * (1.0 + gravity.falloff * (1.0 - dist / hole.capture_radius));
		p.vx += dx / dist * strength;
		p.vy += dy / dist * strength;
	}

	if dist < hole.event_horizon {
		p.alpha -= gravity.absorb_decay;
	} else if p.alpha < 1.0 {
		p.alpha = (p.alpha + gravity.recover_rate).min(1.0);
	}

	if p.alpha <= 0.0 {
		*p = spawn::particle(rng, view, meteor_ratio);
		return;
	}

	p.x += p.vx;
	p.y += p.vy;
	collide_with_body(p, hole);

	if escaped(p, view) {
		*p = spawn::particle(rng, view, meteor_ratio);
	}
}

/// Keeps a particle out of the attractor body: it is pushed back to the
/// surface and loses the velocity component pointing inward.
fn collide_with_body(p: &mut Particle, hole: &Attractor) {
	let (dx, dy) = (p.x - hole.x, p.y - hole.y);
	let dist = dx.hypot(dy);
	if dist >= hole.radius {
		return;
	}
	let (nx, ny) = if dist > f64::EPSILON {
		(dx / dist, dy / dist)
	} else {
		(0.0, -1.0)
	};
	p.x = hole.x + nx * hole.radius;
	p.y = hole.y + ny * hole.radius;

	let radial = p.vx * nx + p.vy * ny;
	if radial < 0.0 {
		p.vx -= radial * nx;
		p.vy -= radial * ny;
	}
}

/// Gravity can fling particles back up or to the left, so every edge counts.
/// The top edge leaves room for the spawn band above the screen.
fn escaped(p: &Particle, view: Viewport) -> bool {
	out_of_bounds(p.x, p.y, view, PARTICLE_MARGIN)
		|| p.x < -PARTICLE_MARGIN
		|| p.y < -(spawn::ENTRY_DEPTH + PARTICLE_MARGIN)
}

/// Counts down a dormant shooting star, or streaks and fades an active one.
pub fn shooting_star(s: &mut ShootingStar, rng: &mut Rng, view: Viewport) {
	match s.phase {
		Phase::Dormant { timer } => {
			let timer = timer.saturating_sub(1);
			if timer == 0 {
				*s = spawn::launched_shooting_star(rng, view);
			} else {
				s.phase = Phase::Dormant { timer };
			}
		}
		Phase::Active => {
			s.x += s.vx;
			s.y += s.vy;
			s.alpha -= SHOOTING_STAR_FADE;
			if s.alpha <= 0.0 || out_of_bounds(s.x, s.y, view, SHOOTING_STAR_MARGIN) {
				*s = spawn::shooting_star(rng, view);
			}
		}
	}
}

/// Waits out the satellite's countdown, then flies it across once.
pub fn satellite(sat: &mut Satellite, rng: &mut Rng, view: Viewport) {
	match sat.phase {
		Phase::Dormant { timer } => {
			let timer = timer.saturating_sub(1);
			if timer == 0 {
				spawn::launch_satellite(sat, rng, view);
			} else {
				sat.phase = Phase::Dormant { timer };
			}
		}
		Phase::Active => {
			sat.x += sat.vx;
			if sat.x > view.width + sat.size {
				sat.phase = Phase::Dormant {
					timer: spawn::satellite_delay(rng),
				};
			}
		}
	}
}
