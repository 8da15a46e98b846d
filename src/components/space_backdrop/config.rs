//! Scene configuration: entity counts, sampling ranges, and variant switches.
//!
//! Two presets cover the shipped backgrounds. A host page can tweak either one
//! through [`SceneOverrides`], which deserializes from partial JSON so that any
//! field left out keeps the preset's value.

use serde::Deserialize;

/// Which background to animate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
	/// Parallax stars, meteors, shooting stars, nebulae, planets, and a satellite.
	#[default]
	Starfield,
	/// Twinkling stars and particles falling into a black hole.
	GravityWell,
}

/// One parallax star layer.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StarLayerConfig {
	/// Number of stars, fixed for the layer's lifetime.
	pub count: usize,
	/// Maximum horizontal drift per tick; 0 keeps the layer static.
	pub speed: f64,
	/// Radius sampling range.
	pub size: (f64, f64),
	/// Initial alpha sampling range.
	pub alpha: (f64, f64),
	/// Twinkle rate sampling range.
	pub twinkle: (f64, f64),
	/// Bounds alpha is clamped to after each twinkle.
	pub alpha_bounds: (f64, f64),
}

/// Black hole parameters for the gravity well variant.
///
/// Radii scale with `min(width, height)` and never drop below their minimums.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GravityConfig {
	/// Attractor center as a fraction of the viewport.
	pub center: (f64, f64),
	/// Body radius as a fraction of the shorter viewport side.
	pub radius_fraction: f64,
	/// Smallest body radius in pixels.
	pub min_radius: f64,
	/// Event horizon as a fraction of the shorter viewport side.
	pub horizon_fraction: f64,
	/// Smallest event horizon in pixels.
	pub min_horizon: f64,
	/// Capture radius as a multiple of the event horizon.
	pub capture_factor: f64,
	/// Acceleration at the capture boundary, in px/tick².
	pub base_force: f64,
	/// Extra force fraction gained at the center.
	pub falloff: f64,
	/// Alpha lost per tick inside the event horizon.
	pub absorb_decay: f64,
	/// Alpha regained per tick outside the event horizon.
	pub recover_rate: f64,
}

impl Default for GravityConfig {
	fn default() -> Self {
		Self {
			center: (0.55, 0.55),
			radius_fraction: 0.09,
			min_radius: 60.0,
			horizon_fraction: 0.13,
			min_horizon: 90.0,
			capture_factor: 1.5,
			base_force: 0.06,
			falloff: 0.8,
			absorb_decay: 0.04,
			recover_rate: 0.01,
		}
	}
}

/// Complete scene description.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
	/// Parallax layers, nearest first.
	pub star_layers: Vec<StarLayerConfig>,
	/// Meteors (starfield) or mixed meteors/ambient particles (gravity well).
	pub particles: usize,
	/// Probability that a spawned particle is a meteor rather than ambient.
	pub meteor_ratio: f64,
	/// Number of shooting star slots.
	pub shooting_stars: usize,
	/// Number of dust motes.
	pub dust: usize,
	/// Number of nebulae.
	pub nebulae: usize,
	/// Whether the three anchored planets are shown.
	pub planets: bool,
	/// Whether the two anchored galaxies are shown.
	pub galaxies: bool,
	/// Whether a satellite crosses now and then.
	pub satellite: bool,
	/// Black hole settings; `None` means particles fly straight.
	pub gravity: Option<GravityConfig>,
}

impl SceneConfig {
	/// Preset for a given variant.
	pub fn for_variant(variant: Variant) -> Self {
		match variant {
			Variant::Starfield => Self::starfield(),
			Variant::GravityWell => Self::gravity_well(),
		}
	}

	/// Four parallax layers, front to back, plus every decoration.
	pub fn starfield() -> Self {
		let layer = |count, speed, size, alpha| StarLayerConfig {
			count,
			speed,
			size,
			alpha,
			twinkle: (0.01, 0.05),
			alpha_bounds: (0.1, 1.0),
		};
		Self {
			star_layers: vec![
				layer(120, 0.13, (1.2, 2.5), (0.7, 1.0)),
				layer(80, 0.07, (0.7, 1.7), (0.4, 0.9)),
				layer(60, 0.03, (0.4, 1.1), (0.2, 0.7)),
				layer(40, 0.01, (0.2, 0.7), (0.1, 0.5)),
			],
			particles: 18,
			meteor_ratio: 1.0,
			shooting_stars: 2,
			dust: 60,
			nebulae: 6,
			planets: true,
			galaxies: true,
			satellite: true,
			gravity: None,
		}
	}

	/// One static star layer and a black hole swallowing particles.
	pub fn gravity_well() -> Self {
		Self {
			star_layers: vec![StarLayerConfig {
				count: 120,
				speed: 0.0,
				size: (0.3, 1.5),
				alpha: (0.5, 1.0),
				twinkle: (0.01, 0.06),
				alpha_bounds: (0.3, 1.0),
			}],
			particles: 18,
			meteor_ratio: 0.5,
			shooting_stars: 0,
			dust: 0,
			nebulae: 0,
			planets: false,
			galaxies: false,
			satellite: false,
			gravity: Some(GravityConfig::default()),
		}
	}

	/// Orders every range and pulls probabilities and alphas into [0, 1].
	pub fn sanitized(mut self) -> Self {
		for layer in &mut self.star_layers {
			layer.size = ordered(layer.size);
			layer.alpha = unit_range(layer.alpha);
			layer.twinkle = ordered(layer.twinkle);
			layer.alpha_bounds = unit_range(layer.alpha_bounds);
			layer.speed = layer.speed.abs();
		}
		self.meteor_ratio = self.meteor_ratio.clamp(0.0, 1.0);
		if let Some(gravity) = &mut self.gravity {
			gravity.center = (
				gravity.center.0.clamp(0.0, 1.0),
				gravity.center.1.clamp(0.0, 1.0),
			);
			gravity.capture_factor = gravity.capture_factor.max(1.0);
			// Body must stay inside the horizon.
			gravity.min_horizon = gravity.min_horizon.max(gravity.min_radius + 1.0);
			gravity.horizon_fraction = gravity.horizon_fraction.max(gravity.radius_fraction);
		}
		self
	}

	/// Replaces every field the overrides set.
	pub fn apply(mut self, overrides: &SceneOverrides) -> Self {
		if let Some(layers) = &overrides.star_layers {
			self.star_layers = layers.clone();
		}
		if let Some(n) = overrides.particles {
			self.particles = n;
		}
		if let Some(ratio) = overrides.meteor_ratio {
			self.meteor_ratio = ratio;
		}
		if let Some(n) = overrides.shooting_stars {
			self.shooting_stars = n;
		}
		if let Some(n) = overrides.dust {
			self.dust = n;
		}
		if let Some(n) = overrides.nebulae {
			self.nebulae = n;
		}
		if let Some(on) = overrides.planets {
			self.planets = on;
		}
		if let Some(on) = overrides.galaxies {
			self.galaxies = on;
		}
		if let Some(on) = overrides.satellite {
			self.satellite = on;
		}
		if let Some(gravity) = &overrides.gravity {
			self.gravity = Some(gravity.clone());
		}
		self
	}
}

impl Default for SceneConfig {
	fn default() -> Self {
		Self::starfield()
	}
}

/// Partial scene configuration read from the host page.
///
/// Each field replaces the matching [`SceneConfig`] field when present.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct SceneOverrides {
	/// See [`SceneConfig::star_layers`].
	pub star_layers: Option<Vec<StarLayerConfig>>,
	/// See [`SceneConfig::particles`].
	pub particles: Option<usize>,
	/// See [`SceneConfig::meteor_ratio`].
	pub meteor_ratio: Option<f64>,
	/// See [`SceneConfig::shooting_stars`].
	pub shooting_stars: Option<usize>,
	/// See [`SceneConfig::dust`].
	pub dust: Option<usize>,
	/// See [`SceneConfig::nebulae`].
	pub nebulae: Option<usize>,
	/// See [`SceneConfig::planets`].
	pub planets: Option<bool>,
	/// See [`SceneConfig::galaxies`].
	pub galaxies: Option<bool>,
	/// See [`SceneConfig::satellite`].
	pub satellite: Option<bool>,
	/// See [`SceneConfig::gravity`]; missing keys take the defaults.
	pub gravity: Option<GravityConfig>,
}

/// Top-level configuration embedded in the page as JSON.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct BackdropConfig {
	/// Preset to start from.
	pub variant: Variant,
	/// Fixed seed for reproducible scenes; wall-clock seeded when absent.
	pub seed: Option<u64>,
	/// Scene fields given at the top level of the JSON object.
	#[serde(flatten)]
	pub overrides: SceneOverrides,
}

impl BackdropConfig {
	/// Resolves the variant preset with overrides applied.
	pub fn scene(&self) -> SceneConfig {
		SceneConfig::for_variant(self.variant)
			.apply(&self.overrides)
			.sanitized()
	}
}

fn ordered((a, b): (f64, f64)) -> (f64, f64) {
	if a <= b { (a, b) } else { (b, a) }
}

fn unit_range(range: (f64, f64)) -> (f64, f64) {
	let (lo, hi) = ordered(range);
	(lo.clamp(0.0, 1.0), hi.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn presets_differ_in_attractor() {
		assert!(SceneConfig::starfield().gravity.is_none());
		assert!(SceneConfig::gravity_well().gravity.is_some());
	}

	#[test]
	fn empty_json_keeps_starfield_preset() {
		let config: BackdropConfig = serde_json::from_str("{}").unwrap();
		assert_eq!(config.variant, Variant::Starfield);
		assert_eq!(config.scene(), SceneConfig::starfield());
	}

	#[test]
	fn partial_json_overrides_only_named_fields() {
		let config: BackdropConfig =
			serde_json::from_str(r#"{ "variant": "gravity_well", "particles": 30, "seed": 9 }"#)
				.unwrap();
		let scene = config.scene();
		assert_eq!(config.seed, Some(9));
		assert_eq!(scene.particles, 30);
		assert_eq!(scene.meteor_ratio, 0.5);
		assert_eq!(scene.gravity, Some(GravityConfig::default()));
	}

	#[test]
	fn partial_gravity_block_fills_defaults() {
		let config: BackdropConfig = serde_json::from_str(
			r#"{ "variant": "gravity_well", "gravity": { "base_force": 0.1 } }"#,
		)
		.unwrap();
		let gravity = config.scene().gravity.unwrap();
		assert_eq!(gravity.base_force, 0.1);
		assert_eq!(gravity.capture_factor, 1.5);
	}

	#[test]
	fn sanitize_orders_ranges_and_clamps_ratio() {
		let mut config = SceneConfig::starfield();
		config.star_layers[0].size = (3.0, 1.0);
		config.star_layers[0].alpha_bounds = (1.4, -0.2);
		config.meteor_ratio = 2.0;
		let config = config.sanitized();
		assert_eq!(config.star_layers[0].size, (1.0, 3.0));
		assert_eq!(config.star_layers[0].alpha_bounds, (0.0, 1.0));
		assert_eq!(config.meteor_ratio, 1.0);
	}
}
