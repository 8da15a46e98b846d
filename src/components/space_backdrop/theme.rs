//! Visual encoding for every entity kind.
//!
//! The renderer never picks colors on its own; it looks them up here by entity
//! kind (and, for stars, by layer index).

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha in [0, 1].
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with explicit alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same color with a different alpha.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// CSS color string: hex when opaque, `rgba()` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Fill and glow for one parallax star layer.
#[derive(Clone, Copy, Debug)]
pub struct StarStyle {
	/// Star body color.
	pub fill: Color,
	/// Shadow color around the star.
	pub glow: Color,
	/// Shadow blur per unit of star radius.
	pub blur_per_radius: f64,
}

/// Stroke and head styling shared by meteors and ambient particles.
#[derive(Clone, Copy, Debug)]
pub struct StreakStyle {
	/// Trail stroke color; meteors only.
	pub trail: Color,
	/// Shadow blur of the trail.
	pub trail_blur: f64,
	/// Trail length as a multiple of the current velocity.
	pub trail_factor: f64,
	/// Head fill color.
	pub head: Color,
	/// Shadow color around the head.
	pub head_glow: Color,
	/// Shadow blur of the head.
	pub head_blur: f64,
}

/// A planet's body and halo colors.
#[derive(Clone, Copy, Debug)]
pub struct PlanetStyle {
	/// Disc color.
	pub color: Color,
	/// Halo shadow color.
	pub glow: Color,
}

/// Event horizon ring and attractor body.
#[derive(Clone, Copy, Debug)]
pub struct AttractorStyle {
	/// Opacity of the event horizon ring.
	pub ring_alpha: f64,
	/// Stroke width of the ring.
	pub ring_width: f64,
	/// Gradient stop at the inner edge of the ring.
	pub ring_inner: Color,
	/// Gradient stop in the middle of the ring.
	pub ring_mid: Color,
	/// Gradient stop at the outer edge of the ring.
	pub ring_outer: Color,
	/// Shadow color of the ring.
	pub ring_glow: Color,
	/// Shadow blur of the ring.
	pub ring_blur: f64,
	/// Fill of the body disc.
	pub body: Color,
	/// Shadow color of the body.
	pub body_shadow: Color,
	/// Shadow blur of the body.
	pub body_blur: f64,
}

/// Complete color scheme for the space backdrop.
#[derive(Clone, Debug)]
pub struct Palette {
	/// Sky fill painted under everything.
	pub background: Color,
	/// Star styles by layer index; deeper layers reuse the last entry.
	pub stars: Vec<StarStyle>,
	/// Meteor trail and head.
	pub meteor: StreakStyle,
	/// Ambient particle head.
	pub ambient: StreakStyle,
	/// Shooting star streak color.
	pub shooting_star: Color,
	/// Shadow blur of the streak.
	pub shooting_star_blur: f64,
	/// Stroke width of the streak.
	pub shooting_star_width: f64,
	/// Dust mote fill.
	pub dust: Color,
	/// Dust mote shadow color.
	pub dust_glow: Color,
	/// Dust mote shadow blur.
	pub dust_blur: f64,
	/// Nebula colors, cycled by nebula index.
	pub nebulae: Vec<Color>,
	/// Alpha of the bright nebula core.
	pub nebula_core_alpha: f64,
	/// Color the nebula gradient fades to.
	pub nebula_edge: Color,
	/// Filter blur applied to nebulae.
	pub nebula_blur: f64,
	/// Planet styles, cycled by planet index.
	pub planets: Vec<PlanetStyle>,
	/// Shadow blur of the planet halo.
	pub planet_blur: f64,
	/// Galaxy colors, cycled by galaxy index.
	pub galaxies: Vec<Color>,
	/// Stroke width of galaxy arms.
	pub galaxy_line_width: f64,
	/// Shadow blur of galaxy arms.
	pub galaxy_blur: f64,
	/// Satellite silhouette color.
	pub satellite: Color,
	/// Event horizon and body of the black hole.
	pub attractor: AttractorStyle,
}

impl Palette {
	/// Deep navy sky with cold blue starlight and warm accents.
	pub fn cosmic() -> Self {
		const WHITE: Color = Color::rgb(255, 255, 255);
		const PALE_BLUE: Color = Color::rgb(179, 207, 255);
		const SKY_BLUE: Color = Color::rgb(139, 188, 255);
		const DEEP_BLUE: Color = Color::rgb(94, 143, 255);
		const ICE: Color = Color::rgb(179, 224, 255);
		const CREAM: Color = Color::rgb(255, 251, 224);
		const AMBER: Color = Color::rgb(251, 191, 36);

		Self {
			background: Color::rgb(10, 16, 38),
			stars: vec![
				StarStyle {
					fill: WHITE,
					glow: PALE_BLUE,
					blur_per_radius: 8.0,
				},
				StarStyle {
					fill: PALE_BLUE,
					glow: SKY_BLUE,
					blur_per_radius: 8.0,
				},
				StarStyle {
					fill: SKY_BLUE,
					glow: DEEP_BLUE,
					blur_per_radius: 8.0,
				},
			],
			meteor: StreakStyle {
				trail: ICE,
				trail_blur: 16.0,
				trail_factor: 8.0,
				head: WHITE,
				head_glow: ICE,
				head_blur: 12.0,
			},
			ambient: StreakStyle {
				trail: ICE,
				trail_blur: 16.0,
				trail_factor: 8.0,
				head: PALE_BLUE,
				head_glow: PALE_BLUE,
				head_blur: 8.0,
			},
			shooting_star: CREAM,
			shooting_star_blur: 24.0,
			shooting_star_width: 3.5,
			dust: WHITE,
			dust_glow: PALE_BLUE,
			dust_blur: 4.0,
			nebulae: vec![
				Color::rgba(80, 180, 255, 0.22),  // Blue
				Color::rgba(180, 80, 255, 0.22),  // Purple
				Color::rgba(255, 180, 80, 0.22),  // Orange
				Color::rgba(80, 255, 180, 0.18),  // Teal
				Color::rgba(255, 80, 180, 0.18),  // Pink
				Color::rgba(180, 255, 80, 0.18),  // Green
			],
			nebula_core_alpha: 0.38,
			nebula_edge: Color::rgba(10, 16, 38, 0.01),
			nebula_blur: 18.0,
			planets: vec![
				PlanetStyle {
					color: Color::rgb(139, 92, 246),
					glow: PALE_BLUE,
				},
				PlanetStyle {
					color: Color::rgb(0, 245, 255),
					glow: ICE,
				},
				PlanetStyle {
					color: AMBER,
					glow: CREAM,
				},
			],
			planet_blur: 60.0,
			galaxies: vec![PALE_BLUE, AMBER],
			galaxy_line_width: 2.0,
			galaxy_blur: 12.0,
			satellite: Color::rgb(34, 34, 34),
			attractor: AttractorStyle {
				ring_alpha: 0.7,
				ring_width: 18.0,
				ring_inner: Color::rgba(80, 180, 255, 0.08),
				ring_mid: Color::rgba(80, 180, 255, 0.18),
				ring_outer: Color::rgba(255, 255, 255, 0.12),
				ring_glow: Color::rgb(94, 203, 255),
				ring_blur: 32.0,
				body: Color::rgba(10, 16, 38, 0.98),
				body_shadow: Color::rgb(0, 0, 0),
				body_blur: 24.0,
			},
		}
	}

	/// Style for the star layer at `index`, clamped to the deepest defined layer.
	pub fn star_style(&self, index: usize) -> StarStyle {
		self.stars
			.get(index)
			.or(self.stars.last())
			.copied()
			.unwrap_or(StarStyle {
				fill: FALLBACK,
				glow: FALLBACK,
				blur_per_radius: 0.0,
			})
	}

	/// Color for nebula `index`; fades straight to the edge color when none are set.
	pub fn nebula_color(&self, index: usize) -> Color {
		cycled(&self.nebulae, index).unwrap_or(self.nebula_edge)
	}

	/// Style for planet `index`.
	pub fn planet_style(&self, index: usize) -> PlanetStyle {
		cycled(&self.planets, index).unwrap_or(PlanetStyle {
			color: FALLBACK,
			glow: FALLBACK,
		})
	}

	/// Color for galaxy `index`.
	pub fn galaxy_color(&self, index: usize) -> Color {
		cycled(&self.galaxies, index).unwrap_or(FALLBACK)
	}
}

/// Used when a palette list is left empty.
const FALLBACK: Color = Color::rgb(255, 255, 255);

fn cycled<T: Copy>(items: &[T], index: usize) -> Option<T> {
	items.get(index.checked_rem(items.len())?).copied()
}

impl Default for Palette {
	fn default() -> Self {
		Self::cosmic()
	}
}
