//! Entity factory: freshly randomized entities sampled over the viewport.
//!
//! Everything that moves falls inside a narrow cone around 60° below the
//! horizontal, so the whole sky streams diagonally down and to the right.

use std::f64::consts::PI;

use super::config::{GravityConfig, StarLayerConfig};
use super::entities::{
	Attractor, Dust, Galaxy, Nebula, Particle, ParticleKind, Phase, Planet, Satellite,
	ShootingStar, Star, StarLayer, Viewport,
};
use super::rng::Rng;

/// Center of the fall direction cone.
const FALL_ANGLE: f64 = PI / 3.0;
/// Full cone width for meteors and ambient particles.
const PARTICLE_SPREAD: f64 = 0.18;
/// Full cone width for shooting stars.
const SHOOTING_STAR_SPREAD: f64 = 0.2;

/// Particles enter this far above the top edge at most.
pub const ENTRY_DEPTH: f64 = 240.0;

/// Shooting star dormancy, in ticks.
const SHOOTING_STAR_DELAY: (u32, u32) = (200, 600);
/// Satellite dormancy, in ticks.
const SATELLITE_DELAY: (u32, u32) = (800, 2000);

/// Unit direction vector inside the fall cone.
fn fall_direction(rng: &mut Rng, spread: f64) -> (f64, f64) {
	let angle = FALL_ANGLE + rng.jitter(spread);
	(angle.cos(), angle.sin())
}

pub fn star_layer(rng: &mut Rng, view: Viewport, index: usize, config: &StarLayerConfig) -> StarLayer {
	let (min_alpha, max_alpha) = config.alpha_bounds;
	let stars = (0..config.count)
		.map(|_| Star {
			x: rng.range(0.0, view.width),
			y: rng.range(0.0, view.height),
			radius: rng.range(config.size.0, config.size.1),
			alpha: rng
				.range(config.alpha.0, config.alpha.1)
				.clamp(min_alpha, max_alpha),
			twinkle: rng.range(config.twinkle.0, config.twinkle.1),
			drift: rng.jitter(config.speed),
		})
		.collect();

	StarLayer {
		index,
		stars,
		drift_speed: config.speed,
		min_alpha,
		max_alpha,
	}
}

/// A particle entering above the top edge, left of the right 30 % of the screen.
pub fn particle(rng: &mut Rng, view: Viewport, meteor_ratio: f64) -> Particle {
	let kind = if rng.chance(meteor_ratio) {
		ParticleKind::Meteor
	} else {
		ParticleKind::Ambient
	};
	let (dir_x, dir_y) = fall_direction(rng, PARTICLE_SPREAD);
	let (speed, size) = match kind {
		ParticleKind::Meteor => (rng.range(3.0, 7.0), rng.range(2.0, 4.0)),
		ParticleKind::Ambient => (rng.range(0.5, 2.0), rng.range(0.5, 1.7)),
	};

	Particle {
		x: rng.range(0.0, view.width * 0.7),
		y: rng.range(-ENTRY_DEPTH, -40.0),
		vx: dir_x * speed,
		vy: dir_y * speed,
		size,
		alpha: 1.0,
		kind,
	}
}

/// A dormant shooting star with a fresh trajectory and countdown.
pub fn shooting_star(rng: &mut Rng, view: Viewport) -> ShootingStar {
	let (dir_x, dir_y) = fall_direction(rng, SHOOTING_STAR_SPREAD);
	let speed = rng.range(12.0, 28.0);

	ShootingStar {
		x: rng.range(0.0, view.width * 0.7),
		y: rng.range(0.0, view.height * 0.5),
		vx: dir_x * speed,
		vy: dir_y * speed,
		length: rng.range(80.0, 200.0),
		alpha: 0.0,
		phase: Phase::Dormant {
			timer: rng.range_u32(SHOOTING_STAR_DELAY.0, SHOOTING_STAR_DELAY.1),
		},
	}
}

/// A shooting star that starts streaking immediately at full brightness.
pub fn launched_shooting_star(rng: &mut Rng, view: Viewport) -> ShootingStar {
	ShootingStar {
		alpha: 1.0,
		phase: Phase::Active,
		..shooting_star(rng, view)
	}
}

pub fn dust(rng: &mut Rng, view: Viewport) -> Dust {
	Dust {
		x: rng.range(0.0, view.width),
		y: rng.range(0.0, view.height),
		radius: rng.range(0.2, 0.9),
		alpha: rng.range(0.05, 0.23),
		dx: rng.jitter(0.06),
		dy: rng.jitter(0.06),
	}
}

/// Nebula `index` cycles through the palette colors.
pub fn nebula(rng: &mut Rng, view: Viewport, index: usize) -> Nebula {
	Nebula {
		x: rng.range(0.0, view.width),
		y: rng.range(0.0, view.height * 0.8),
		radius: rng.range(220.0, 540.0),
		color: index,
		dx: rng.jitter(0.22),
		dy: rng.jitter(0.16),
		alpha: rng.range(0.22, 0.35),
		pulse: rng.range(0.01, 0.04),
	}
}

/// Three distant planets anchored at fixed viewport fractions.
pub fn planets(view: Viewport) -> Vec<Planet> {
	[
		(0.18, 0.22, 80.0, 0.18),
		(0.82, 0.13, 60.0, 0.13),
		(0.70, 0.80, 48.0, 0.10),
	]
	.into_iter()
	.enumerate()
	.map(|(style, (fx, fy, radius, alpha))| Planet {
		x: view.width * fx,
		y: view.height * fy,
		radius,
		style,
		alpha,
	})
	.collect()
}

/// Two faint spiral galaxies anchored at fixed viewport fractions.
pub fn galaxies(view: Viewport) -> Vec<Galaxy> {
	[(0.35, 0.70, 60.0, 4, 0.10), (0.85, 0.50, 38.0, 3, 0.08)]
		.into_iter()
		.enumerate()
		.map(|(color, (fx, fy, radius, arms, alpha))| Galaxy {
			x: view.width * fx,
			y: view.height * fy,
			radius,
			arms,
			color,
			alpha,
		})
		.collect()
}

/// A satellite parked off the left edge, waiting for its first pass.
pub fn satellite(rng: &mut Rng, view: Viewport) -> Satellite {
	Satellite {
		x: -60.0,
		y: view.height * rng.range(0.2, 0.8),
		vx: rng.range(0.7, 1.2),
		size: rng.range(32.0, 48.0),
		alpha: 0.18,
		phase: Phase::Dormant {
			timer: satellite_delay(rng),
		},
	}
}

/// Puts a satellite just off the left edge on a fresh crossing.
pub fn launch_satellite(sat: &mut Satellite, rng: &mut Rng, view: Viewport) {
	sat.size = rng.range(32.0, 48.0);
	sat.x = -sat.size;
	sat.y = view.height * rng.range(0.2, 0.8);
	sat.vx = rng.range(0.7, 1.2);
	sat.alpha = rng.range(0.18, 0.25);
	sat.phase = Phase::Active;
}

pub fn satellite_delay(rng: &mut Rng) -> u32 {
	rng.range_u32(SATELLITE_DELAY.0, SATELLITE_DELAY.1)
}

/// Attractor geometry for a viewport; the event horizon always exceeds the body radius.
pub fn attractor(view: Viewport, config: &GravityConfig) -> Attractor {
	let side = view.min_side();
	let radius = config.min_radius.max(side * config.radius_fraction);
	let event_horizon = config
		.min_horizon
		.max(side * config.horizon_fraction)
		.max(radius + 1.0);

	Attractor {
		x: view.width * config.center.0,
		y: view.height * config.center.1,
		radius,
		event_horizon,
		capture_radius: event_horizon * config.capture_factor,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::space_backdrop::config::SceneConfig;

	const VIEW: Viewport = Viewport {
		width: 800.0,
		height: 600.0,
	};

	#[test]
	fn particles_fall_down_and_right() {
		let mut rng = Rng::new(11);
		for _ in 0..200 {
			let p = particle(&mut rng, VIEW, 0.5);
			assert!(p.vx > 0.0 && p.vy > 0.0);
			let angle = p.vy.atan2(p.vx);
			assert!((angle - FALL_ANGLE).abs() <= PARTICLE_SPREAD / 2.0 + 1e-9);
			assert!(p.y < -40.0 + 1e-9 && p.x < VIEW.width * 0.7);
			assert_eq!(p.alpha, 1.0);
		}
	}

	#[test]
	fn meteor_ratio_selects_kind() {
		let mut rng = Rng::new(5);
		assert!((0..50).all(|_| particle(&mut rng, VIEW, 1.0).kind == ParticleKind::Meteor));
		assert!((0..50).all(|_| particle(&mut rng, VIEW, 0.0).kind == ParticleKind::Ambient));
	}

	#[test]
	fn star_alpha_starts_inside_bounds() {
		let mut rng = Rng::new(2);
		let config = &SceneConfig::starfield().star_layers[3];
		let layer = star_layer(&mut rng, VIEW, 3, config);
		assert_eq!(layer.stars.len(), config.count);
		for star in &layer.stars {
			assert!(star.alpha >= layer.min_alpha && star.alpha <= layer.max_alpha);
			assert!(star.drift.abs() <= config.speed / 2.0);
		}
	}

	#[test]
	fn new_shooting_stars_are_dormant_with_positive_timer() {
		let mut rng = Rng::new(8);
		let s = shooting_star(&mut rng, VIEW);
		assert!(matches!(s.phase, Phase::Dormant { timer } if timer >= 200));
		let s = launched_shooting_star(&mut rng, VIEW);
		assert_eq!(s.phase, Phase::Active);
		assert_eq!(s.alpha, 1.0);
	}

	#[test]
	fn attractor_scales_with_smaller_side() {
		let config = GravityConfig::default();
		let small = attractor(Viewport::new(400.0, 300.0), &config);
		assert_eq!(small.radius, 60.0);
		assert_eq!(small.event_horizon, 90.0);

		let large = attractor(Viewport::new(2000.0, 1000.0), &config);
		assert!((large.radius - 90.0).abs() < 1e-9);
		assert!((large.event_horizon - 130.0).abs() < 1e-9);
		assert!((large.capture_radius - 195.0).abs() < 1e-9);
		assert!((large.x - 1100.0).abs() < 1e-9 && (large.y - 550.0).abs() < 1e-9);
	}

	#[test]
	fn launched_satellite_starts_off_left_edge() {
		let mut rng = Rng::new(4);
		let mut sat = satellite(&mut rng, VIEW);
		launch_satellite(&mut sat, &mut rng, VIEW);
		assert_eq!(sat.x, -sat.size);
		assert!(sat.y >= 120.0 && sat.y < 480.0);
		assert!(sat.phase.is_active());
	}
}
