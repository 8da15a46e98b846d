//! Scene state: every entity collection plus the viewport they live in.
//!
//! Created once when the backdrop mounts and then mutated once per frame by
//! [`Scene::step`]. The same type serves both variants; which collections are
//! populated is decided entirely by the [`SceneConfig`].

use super::config::SceneConfig;
use super::entities::{
	Attractor, Dust, Galaxy, Nebula, Particle, Planet, Satellite, ShootingStar, StarLayer, Viewport,
};
use super::rng::Rng;
use super::{spawn, step};

/// Duration of one tick at the target frame rate.
pub const FRAME_MS: f64 = 1000.0 / 60.0;

/// Live state of one backdrop.
pub struct Scene {
	/// Area the entities wrap, bounce, and recycle against.
	pub viewport: Viewport,
	/// Index 0 is the nearest, fastest layer and is drawn last.
	pub star_layers: Vec<StarLayer>,
	/// Fixed-size pool of meteors and ambient particles.
	pub particles: Vec<Particle>,
	/// Shooting stars, dormant or streaking.
	pub shooting_stars: Vec<ShootingStar>,
	/// Dust motes.
	pub dust: Vec<Dust>,
	/// Nebulae, painted under everything else.
	pub nebulae: Vec<Nebula>,
	/// Anchored at creation; resizing does not move them.
	pub planets: Vec<Planet>,
	/// Anchored at creation; resizing does not move them.
	pub galaxies: Vec<Galaxy>,
	/// The satellite, when enabled.
	pub satellite: Option<Satellite>,
	/// Present only in the gravity well variant.
	pub attractor: Option<Attractor>,
	/// Ticks advanced since creation.
	pub ticks: u64,
	config: SceneConfig,
	rng: Rng,
}

impl Scene {
	/// Populates every collection the config asks for, sampled from `seed`.
	pub fn new(config: SceneConfig, viewport: Viewport, seed: u64) -> Self {
		let mut rng = Rng::new(seed);

		let star_layers = config
			.star_layers
			.iter()
			.enumerate()
			.map(|(i, layer)| spawn::star_layer(&mut rng, viewport, i, layer))
			.collect();
		let particles = (0..config.particles)
			.map(|_| spawn::particle(&mut rng, viewport, config.meteor_ratio))
			.collect();
		let shooting_stars = (0..config.shooting_stars)
			.map(|_| spawn::shooting_star(&mut rng, viewport))
			.collect();
		let dust = (0..config.dust)
			.map(|_| spawn::dust(&mut rng, viewport))
			.collect();
		let nebulae = (0..config.nebulae)
			.map(|i| spawn::nebula(&mut rng, viewport, i))
			.collect();
		let planets = if config.planets {
			spawn::planets(viewport)
		} else {
			Vec::new()
		};
		let galaxies = if config.galaxies {
			spawn::galaxies(viewport)
		} else {
			Vec::new()
		};
		let satellite = config
			.satellite
			.then(|| spawn::satellite(&mut rng, viewport));
		let attractor = config
			.gravity
			.as_ref()
			.map(|gravity| spawn::attractor(viewport, gravity));

		Self {
			viewport,
			star_layers,
			particles,
			shooting_stars,
			dust,
			nebulae,
			planets,
			galaxies,
			satellite,
			attractor,
			ticks: 0,
			config,
			rng,
		}
	}

	/// Simulated time, used for phase-based effects like nebula pulsing.
	pub fn elapsed_ms(&self) -> f64 {
		self.ticks as f64 * FRAME_MS
	}

	/// Advances every entity by one tick.
	pub fn step(&mut self) {
		let view = self.viewport;
		let ratio = self.config.meteor_ratio;

		for cloud in &mut self.nebulae {
			step::nebula(cloud, view);
		}
		for layer in &mut self.star_layers {
			step::star_layer(layer, &mut self.rng, view);
		}
		for mote in &mut self.dust {
			step::dust(mote, view);
		}

		match (&self.attractor, &self.config.gravity) {
			(Some(hole), Some(gravity)) => {
				for p in &mut self.particles {
					step::gravity_particle(p, hole, gravity, &mut self.rng, view, ratio);
				}
			}
			_ => {
				for p in &mut self.particles {
					step::particle(p, &mut self.rng, view, ratio);
				}
			}
		}

		for s in &mut self.shooting_stars {
			step::shooting_star(s, &mut self.rng, view);
		}
		if let Some(sat) = &mut self.satellite {
			step::satellite(sat, &mut self.rng, view);
		}

		self.ticks += 1;
	}

	/// Replaces the viewport and recomputes the attractor geometry.
	///
	/// Live entities keep their positions; wrapping and bouncing entities adapt
	/// on their next tick. Planets and galaxies stay at their mount-time anchors.
	/// Returns false and changes nothing for a degenerate size.
	pub fn resize(&mut self, viewport: Viewport) -> bool {
		if !viewport.is_valid() {
			return false;
		}
		self.viewport = viewport;
		if let Some(gravity) = &self.config.gravity {
			self.attractor = Some(spawn::attractor(viewport, gravity));
		}
		true
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::space_backdrop::entities::Phase;

	fn view() -> Viewport {
		Viewport::new(800.0, 600.0)
	}

	#[test]
	fn starfield_populates_every_collection() {
		let scene = Scene::new(SceneConfig::starfield(), view(), 1);
		assert_eq!(scene.star_layers.len(), 4);
		assert_eq!(scene.star_layers[0].stars.len(), 120);
		assert_eq!(scene.particles.len(), 18);
		assert_eq!(scene.shooting_stars.len(), 2);
		assert_eq!(scene.dust.len(), 60);
		assert_eq!(scene.nebulae.len(), 6);
		assert_eq!(scene.planets.len(), 3);
		assert_eq!(scene.galaxies.len(), 2);
		assert!(scene.satellite.is_some());
		assert!(scene.attractor.is_none());
	}

	#[test]
	fn gravity_well_has_attractor_and_no_decorations() {
		let scene = Scene::new(SceneConfig::gravity_well(), view(), 1);
		let hole = scene.attractor.as_ref().unwrap();
		assert!(hole.event_horizon > hole.radius);
		assert!(scene.nebulae.is_empty() && scene.planets.is_empty());
		assert!(scene.satellite.is_none());
	}

	#[test]
	fn same_seed_same_scene() {
		let mut a = Scene::new(SceneConfig::starfield(), view(), 77);
		let mut b = Scene::new(SceneConfig::starfield(), view(), 77);
		for _ in 0..100 {
			a.step();
			b.step();
		}
		assert_eq!(a.particles[3].x, b.particles[3].x);
		assert_eq!(a.star_layers[1].stars[9].alpha, b.star_layers[1].stars[9].alpha);
	}

	#[test]
	fn invariants_hold_over_many_ticks() {
		for config in [SceneConfig::starfield(), SceneConfig::gravity_well()] {
			let mut scene = Scene::new(config, view(), 5);
			for _ in 0..2_000 {
				scene.step();
				for layer in &scene.star_layers {
					for star in &layer.stars {
						assert!(star.alpha >= layer.min_alpha && star.alpha <= layer.max_alpha);
						assert!(star.x >= 0.0 && star.x < 800.0);
					}
				}
				for mote in &scene.dust {
					assert!(mote.x >= 0.0 && mote.x < 800.0);
					assert!(mote.y >= 0.0 && mote.y < 600.0);
				}
				for p in &scene.particles {
					assert!(p.alpha > 0.0 && p.alpha <= 1.0);
				}
				for s in &scene.shooting_stars {
					match s.phase {
						Phase::Dormant { timer } => assert!(timer > 0),
						Phase::Active => assert!(s.alpha > 0.0),
					}
				}
			}
			assert_eq!(scene.ticks, 2_000);
		}
	}

	#[test]
	fn gravity_well_particles_never_settle() {
		let mut scene = Scene::new(SceneConfig::gravity_well(), view(), 5);
		for _ in 0..3_000 {
			scene.step();
		}
		for _ in 0..20 {
			let before: Vec<(f64, f64)> = scene.particles.iter().map(|p| (p.x, p.y)).collect();
			for _ in 0..150 {
				scene.step();
			}
			for (slot, (p, (x, y))) in scene.particles.iter().zip(before).enumerate() {
				let moved = (p.x - x).hypot(p.y - y);
				assert!(moved > 1.0, "slot {slot} stuck at ({x:.1}, {y:.1})");
			}
		}
	}

	#[test]
	fn resize_applies_before_next_wrap() {
		let mut scene = Scene::new(SceneConfig::starfield(), view(), 5);
		assert!(scene.resize(Viewport::new(1600.0, 1200.0)));
		assert_eq!(scene.viewport, Viewport::new(1600.0, 1200.0));

		scene.dust[0].x = 1000.0;
		scene.dust[0].y = 900.0;
		scene.dust[0].dx = 0.01;
		scene.dust[0].dy = 0.01;
		scene.step();
		assert!(scene.dust[0].x > 1000.0 && scene.dust[0].y > 900.0);
	}

	#[test]
	fn resize_recomputes_attractor_but_not_planets() {
		let mut scene = Scene::new(SceneConfig::gravity_well(), view(), 5);
		let before = scene.attractor.clone().unwrap();
		scene.resize(Viewport::new(2000.0, 2000.0));
		let after = scene.attractor.clone().unwrap();
		assert!(after.event_horizon > before.event_horizon);
		assert!(after.x > before.x);

		let mut starfield = Scene::new(SceneConfig::starfield(), view(), 5);
		let planet_x = starfield.planets[0].x;
		starfield.resize(Viewport::new(2000.0, 2000.0));
		assert_eq!(starfield.planets[0].x, planet_x);
	}

	#[test]
	fn degenerate_resize_is_ignored() {
		let mut scene = Scene::new(SceneConfig::starfield(), view(), 5);
		assert!(!scene.resize(Viewport::new(0.0, 600.0)));
		assert!(!scene.resize(Viewport::new(f64::NAN, 600.0)));
		assert_eq!(scene.viewport, view());
	}

	#[test]
	fn elapsed_time_follows_ticks() {
		let mut scene = Scene::new(SceneConfig::gravity_well(), view(), 5);
		for _ in 0..60 {
			scene.step();
		}
		assert!((scene.elapsed_ms() - 1000.0).abs() < 1e-9);
	}
}
