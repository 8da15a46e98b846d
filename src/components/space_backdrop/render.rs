//! Scene rendering.
//!
//! Each call clears the surface and repaints everything back to front:
//! 1. Background fill
//! 2. Nebulae, planets, galaxies
//! 3. Star layers (deepest first), then dust
//! 4. Attractor ring and body
//! 5. Meteors and particles, then shooting stars
//! 6. Satellite silhouette
//!
//! The renderer only reads the scene. Dormant entities are skipped.

use super::entities::{Attractor, Galaxy, Particle, ParticleKind, Satellite, ShootingStar};
use super::scene::Scene;
use super::surface::{Paint, RadialGradient, Surface};
use super::theme::Palette;

/// Points along one spiral arm of a galaxy.
const ARM_SEGMENTS: usize = 60;

/// Renders the complete scene to the surface.
pub fn render<S: Surface + ?Sized>(scene: &Scene, surface: &mut S, palette: &Palette) {
	let view = scene.viewport;
	surface.clear(view.width, view.height);
	surface.fill_rect(0.0, 0.0, view.width, view.height, &palette.background.into());

	draw_nebulae(scene, surface, palette);
	draw_planets(scene, surface, palette);
	for galaxy in &scene.galaxies {
		draw_galaxy(galaxy, surface, palette);
	}
	draw_stars(scene, surface, palette);
	draw_dust(scene, surface, palette);

	if let Some(hole) = &scene.attractor {
		draw_attractor(hole, surface, palette);
	}

	for p in &scene.particles {
		draw_particle(p, surface, palette);
	}
	for s in &scene.shooting_stars {
		draw_shooting_star(s, surface, palette);
	}
	if let Some(sat) = &scene.satellite {
		draw_satellite(sat, surface, palette);
	}
}

fn draw_nebulae<S: Surface + ?Sized>(scene: &Scene, surface: &mut S, palette: &Palette) {
	let elapsed = scene.elapsed_ms();
	for cloud in &scene.nebulae {
		let color = palette.nebula_color(cloud.color);
		let paint = Paint::Radial(RadialGradient {
			inner: (cloud.x, cloud.y, cloud.radius * 0.18),
			outer: (cloud.x, cloud.y, cloud.radius),
			stops: vec![
				(0.0, color.with_alpha(palette.nebula_core_alpha)),
				(0.4, color),
				(1.0, palette.nebula_edge),
			],
		});

		surface.save();
		surface.set_alpha(cloud.alpha_at(elapsed));
		surface.set_blur(palette.nebula_blur);
		surface.fill_circle(cloud.x, cloud.y, cloud.radius, &paint);
		surface.restore();
	}
}

fn draw_planets<S: Surface + ?Sized>(scene: &Scene, surface: &mut S, palette: &Palette) {
	for planet in &scene.planets {
		let style = palette.planet_style(planet.style);
		surface.save();
		surface.set_alpha(planet.alpha.clamp(0.0, 1.0));
		surface.set_shadow(style.glow, palette.planet_blur);
		surface.fill_circle(planet.x, planet.y, planet.radius, &style.color.into());
		surface.restore();
	}
}

/// Polyline for one arm of a spiral galaxy, wobbling slightly as it winds out.
pub fn galaxy_arm(galaxy: &Galaxy, arm: u32) -> Vec<(f64, f64)> {
	let arm_offset = arm as f64 * std::f64::consts::TAU / galaxy.arms.max(1) as f64;
	(0..ARM_SEGMENTS)
		.map(|t| {
			let t = t as f64;
			let angle = arm_offset + t * 0.09;
			let radius = galaxy.radius * (t / ARM_SEGMENTS as f64);
			(
				galaxy.x + angle.cos() * radius * (1.0 + 0.2 * (t * 0.2).sin()),
				galaxy.y + angle.sin() * radius * (1.0 + 0.2 * (t * 0.2).cos()),
			)
		})
		.collect()
}

fn draw_galaxy<S: Surface + ?Sized>(galaxy: &Galaxy, surface: &mut S, palette: &Palette) {
	let color = palette.galaxy_color(galaxy.color);
	surface.save();
	surface.set_alpha(galaxy.alpha.clamp(0.0, 1.0));
	surface.set_shadow(color, palette.galaxy_blur);
	for arm in 0..galaxy.arms {
		surface.stroke_path(&galaxy_arm(galaxy, arm), &color.into(), palette.galaxy_line_width);
	}
	surface.restore();
}

fn draw_stars<S: Surface + ?Sized>(scene: &Scene, surface: &mut S, palette: &Palette) {
	for layer in scene.star_layers.iter().rev() {
		let style = palette.star_style(layer.index);
		let fill = Paint::Solid(style.fill);
		for star in &layer.stars {
			surface.save();
			surface.set_alpha(star.alpha.clamp(0.0, 1.0));
			surface.set_shadow(style.glow, style.blur_per_radius * star.radius);
			surface.fill_circle(star.x, star.y, star.radius, &fill);
			surface.restore();
		}
	}
}

fn draw_dust<S: Surface + ?Sized>(scene: &Scene, surface: &mut S, palette: &Palette) {
	let fill = Paint::Solid(palette.dust);
	for mote in &scene.dust {
		surface.save();
		surface.set_alpha(mote.alpha.clamp(0.0, 1.0));
		surface.set_shadow(palette.dust_glow, palette.dust_blur);
		surface.fill_circle(mote.x, mote.y, mote.radius, &fill);
		surface.restore();
	}
}

fn draw_attractor<S: Surface + ?Sized>(hole: &Attractor, surface: &mut S, palette: &Palette) {
	let style = &palette.attractor;
	let ring = Paint::Radial(RadialGradient {
		inner: (hole.x, hole.y, hole.event_horizon * 0.85),
		outer: (hole.x, hole.y, hole.event_horizon),
		stops: vec![
			(0.0, style.ring_inner),
			(0.7, style.ring_mid),
			(1.0, style.ring_outer),
		],
	});

	surface.save();
	surface.set_alpha(style.ring_alpha);
	surface.set_shadow(style.ring_glow, style.ring_blur);
	surface.stroke_circle(hole.x, hole.y, hole.event_horizon, &ring, style.ring_width);
	surface.restore();

	surface.save();
	surface.set_shadow(style.body_shadow, style.body_blur);
	surface.fill_circle(hole.x, hole.y, hole.radius, &style.body.into());
	surface.restore();
}

fn draw_particle<S: Surface + ?Sized>(p: &Particle, surface: &mut S, palette: &Palette) {
	let style = match p.kind {
		ParticleKind::Meteor => &palette.meteor,
		ParticleKind::Ambient => &palette.ambient,
	};

	surface.save();
	surface.set_alpha(p.alpha.clamp(0.0, 1.0));
	if p.kind == ParticleKind::Meteor {
		surface.set_shadow(style.trail, style.trail_blur);
		let tail = (p.x - p.vx * style.trail_factor, p.y - p.vy * style.trail_factor);
		surface.stroke_path(&[(p.x, p.y), tail], &style.trail.into(), p.size);
	}
	surface.set_shadow(style.head_glow, style.head_blur);
	surface.fill_circle(p.x, p.y, p.size, &style.head.into());
	surface.restore();
}

fn draw_shooting_star<S: Surface + ?Sized>(s: &ShootingStar, surface: &mut S, palette: &Palette) {
	if !s.phase.is_active() {
		return;
	}
	let stretch = s.length / 20.0;
	let tail = (s.x - s.vx * stretch, s.y - s.vy * stretch);

	surface.save();
	surface.set_alpha(s.alpha.clamp(0.0, 1.0));
	surface.set_shadow(palette.shooting_star, palette.shooting_star_blur);
	surface.stroke_path(
		&[(s.x, s.y), tail],
		&palette.shooting_star.into(),
		palette.shooting_star_width,
	);
	surface.restore();
}

fn draw_satellite<S: Surface + ?Sized>(sat: &Satellite, surface: &mut S, palette: &Palette) {
	if !sat.phase.is_active() {
		return;
	}
	let paint = Paint::Solid(palette.satellite);
	let scale = sat.size / 32.0;

	surface.save();
	surface.set_alpha(sat.alpha.clamp(0.0, 1.0));
	surface.translate(sat.x, sat.y);
	surface.scale(scale, scale);
	// Body, then left and right solar panels
	surface.fill_rect(-6.0, -4.0, 12.0, 8.0, &paint);
	surface.fill_rect(-18.0, -2.0, 12.0, 4.0, &paint);
	surface.fill_rect(6.0, -2.0, 12.0, 4.0, &paint);
	surface.restore();
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::space_backdrop::config::SceneConfig;
	use crate::components::space_backdrop::entities::{Phase, Viewport};
	use crate::components::space_backdrop::theme::Color;

	#[derive(Clone, Debug, PartialEq)]
	enum Op {
		Clear,
		Save,
		Restore,
		Alpha(f64),
		Rect(f64, f64, f64, f64),
		Circle(f64, f64, f64),
		Ring(f64),
		Path(usize),
		Other,
	}

	#[derive(Default)]
	struct Recorder {
		ops: Vec<Op>,
		strokes: Vec<Paint>,
	}

	impl Surface for Recorder {
		fn clear(&mut self, _: f64, _: f64) {
			self.ops.push(Op::Clear);
		}
		fn save(&mut self) {
			self.ops.push(Op::Save);
		}
		fn restore(&mut self) {
			self.ops.push(Op::Restore);
		}
		fn set_alpha(&mut self, alpha: f64) {
			self.ops.push(Op::Alpha(alpha));
		}
		fn set_shadow(&mut self, _: Color, _: f64) {
			self.ops.push(Op::Other);
		}
		fn set_blur(&mut self, _: f64) {
			self.ops.push(Op::Other);
		}
		fn translate(&mut self, _: f64, _: f64) {
			self.ops.push(Op::Other);
		}
		fn scale(&mut self, _: f64, _: f64) {
			self.ops.push(Op::Other);
		}
		fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, _: &Paint) {
			self.ops.push(Op::Rect(x, y, w, h));
		}
		fn fill_circle(&mut self, x: f64, y: f64, r: f64, _: &Paint) {
			self.ops.push(Op::Circle(x, y, r));
		}
		fn stroke_circle(&mut self, _: f64, _: f64, r: f64, _: &Paint, _: f64) {
			self.ops.push(Op::Ring(r));
		}
		fn stroke_path(&mut self, points: &[(f64, f64)], paint: &Paint, _: f64) {
			self.ops.push(Op::Path(points.len()));
			self.strokes.push(paint.clone());
		}
	}

	fn empty_config() -> SceneConfig {
		SceneConfig {
			star_layers: Vec::new(),
			particles: 0,
			meteor_ratio: 1.0,
			shooting_stars: 0,
			dust: 0,
			nebulae: 0,
			planets: false,
			galaxies: false,
			satellite: false,
			gravity: None,
		}
	}

	fn draw(scene: &Scene) -> Vec<Op> {
		let mut recorder = Recorder::default();
		render(scene, &mut recorder, &Palette::cosmic());
		recorder.ops
	}

	#[test]
	fn frame_starts_with_clear_and_background() {
		let scene = Scene::new(SceneConfig::starfield(), Viewport::new(800.0, 600.0), 1);
		let ops = draw(&scene);
		assert_eq!(ops[0], Op::Clear);
		assert_eq!(ops[1], Op::Rect(0.0, 0.0, 800.0, 600.0));
	}

	#[test]
	fn save_and_restore_balance_and_alpha_is_clamped() {
		for config in [SceneConfig::starfield(), SceneConfig::gravity_well()] {
			let mut scene = Scene::new(config, Viewport::new(800.0, 600.0), 3);
			for _ in 0..300 {
				scene.step();
			}
			let ops = draw(&scene);
			let mut depth = 0i32;
			for op in &ops {
				match op {
					Op::Save => depth += 1,
					Op::Restore => depth -= 1,
					Op::Alpha(a) => assert!((0.0..=1.0).contains(a)),
					_ => {}
				}
				assert!(depth >= 0);
			}
			assert_eq!(depth, 0);
		}
	}

	#[test]
	fn dormant_entities_are_not_drawn() {
		let mut config = empty_config();
		config.shooting_stars = 3;
		config.satellite = true;
		let scene = Scene::new(config, Viewport::new(800.0, 600.0), 1);
		assert_eq!(draw(&scene).len(), 2);
	}

	#[test]
	fn active_satellite_is_painted_last() {
		let mut config = empty_config();
		config.satellite = true;
		config.particles = 4;
		config.shooting_stars = 1;
		let mut scene = Scene::new(config, Viewport::new(800.0, 600.0), 1);
		scene.satellite.as_mut().unwrap().phase = Phase::Active;
		scene.shooting_stars[0].phase = Phase::Active;
		scene.shooting_stars[0].alpha = 1.0;

		let ops = draw(&scene);
		let tail: Vec<_> = ops.iter().rev().skip(1).take(3).collect();
		assert!(tail.iter().all(|op| matches!(op, Op::Rect(..))));
		let last_path = ops.iter().rposition(|op| matches!(op, Op::Path(2))).unwrap();
		let first_panel = ops.len() - 4;
		assert!(last_path < first_panel);
	}

	#[test]
	fn deeper_star_layers_are_drawn_first() {
		let mut config = empty_config();
		config.star_layers = SceneConfig::starfield().star_layers;
		let scene = Scene::new(config, Viewport::new(800.0, 600.0), 1);
		let ops = draw(&scene);

		let near = &scene.star_layers[0].stars[0];
		let far = &scene.star_layers[3].stars[0];
		let find = |x: f64, y: f64, r: f64| ops.iter().position(|op| *op == Op::Circle(x, y, r));
		let near_at = find(near.x, near.y, near.radius).unwrap();
		let far_at = find(far.x, far.y, far.radius).unwrap();
		assert!(far_at < near_at);
	}

	#[test]
	fn attractor_is_drawn_under_particles() {
		let scene = Scene::new(SceneConfig::gravity_well(), Viewport::new(800.0, 600.0), 1);
		let ops = draw(&scene);
		let hole = scene.attractor.as_ref().unwrap();
		let ring = ops.iter().position(|op| *op == Op::Ring(hole.event_horizon)).unwrap();
		let p = &scene.particles[0];
		let particle = ops
			.iter()
			.position(|op| *op == Op::Circle(p.x, p.y, p.size))
			.unwrap();
		assert!(ring < particle);
	}

	#[test]
	fn only_meteors_get_trails() {
		let mut config = empty_config();
		config.particles = 1;
		config.meteor_ratio = 0.0;
		let scene = Scene::new(config, Viewport::new(800.0, 600.0), 1);
		assert!(!draw(&scene).iter().any(|op| matches!(op, Op::Path(_))));

		let mut config = empty_config();
		config.particles = 1;
		let scene = Scene::new(config, Viewport::new(800.0, 600.0), 1);
		assert!(draw(&scene).contains(&Op::Path(2)));
	}

	#[test]
	fn galaxy_is_stroked_in_its_own_color() {
		let config = SceneConfig {
			galaxies: true,
			..empty_config()
		};
		let mut scene = Scene::new(config, Viewport::new(800.0, 600.0), 1);
		scene.galaxies.truncate(1);
		scene.galaxies[0].color = 1;

		let palette = Palette::cosmic();
		let mut recorder = Recorder::default();
		render(&scene, &mut recorder, &palette);
		assert_eq!(recorder.strokes.len(), scene.galaxies[0].arms as usize);
		let expected = Paint::Solid(palette.galaxy_color(1));
		assert!(recorder.strokes.iter().all(|paint| *paint == expected));
	}

	#[test]
	fn galaxy_arm_spirals_out_from_center() {
		let galaxy = Galaxy {
			x: 100.0,
			y: 100.0,
			radius: 60.0,
			arms: 4,
			color: 0,
			alpha: 0.1,
		};
		let arm = galaxy_arm(&galaxy, 1);
		assert_eq!(arm.len(), ARM_SEGMENTS);
		assert_eq!(arm[0], (100.0, 100.0));
		let (x, y) = arm[ARM_SEGMENTS - 1];
		assert!((x - 100.0).hypot(y - 100.0) > 40.0);
	}
}
