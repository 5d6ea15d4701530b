//! Visual theming for the particle field.
//!
//! Provides colors, the particle palette and the trail/link styling, plus
//! JSON-facing overrides so a host page can restyle the backdrop.

use log::warn;
use serde::Deserialize;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha in `[0, 1]`.
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

	/// Fully transparent black, the outer stop of every glow.
	pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0.0);

	/// Same color with alpha replaced.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// `#rrggbb` when opaque, `rgba(...)` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}

	/// Parses a CSS color string.
	/// Supports hex (`#RRGGBB`) and `rgb()`/`rgba()` functional notation.
	pub fn parse_css(color_str: &str) -> Option<Color> {
		let color_str = color_str.trim();
		if let Some(hex) = color_str.strip_prefix('#') {
			if hex.len() != 6 {
				return None;
			}
			let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
			let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
			let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
			return Some(Color::rgb(r, g, b));
		}

		let inner = color_str
			.strip_prefix("rgba(")
			.or_else(|| color_str.strip_prefix("rgb("))?
			.strip_suffix(')')?;
		let nums: Vec<&str> = inner.split(',').map(str::trim).collect();
		if !(3..=4).contains(&nums.len()) {
			return None;
		}
		let r = nums[0].parse().ok()?;
		let g = nums[1].parse().ok()?;
		let b = nums[2].parse().ok()?;
		let a = match nums.get(3) {
			Some(a) => a.parse::<f64>().ok()?.clamp(0.0, 1.0),
			None => 1.0,
		};
		Some(Color::rgba(r, g, b, a))
	}
}

/// Complete visual theme for the backdrop.
#[derive(Clone, Debug)]
pub struct FieldTheme {
	/// Preset name.
	pub name: &'static str,
	/// Particle fill colors. Each particle picks one at spawn.
	pub palette: Vec<Color>,
	/// Low-alpha wash painted over the canvas every frame, leaving motion trails.
	pub trail: Color,
	/// Connection line color; alpha is replaced per line by distance.
	pub link: Color,
	/// Alpha of the inner glow stop, in the particle's own color.
	pub glow_alpha: f64,
}

impl FieldTheme {
	/// Cyan, purple, teal and pink on a near-black wash (default)
	pub fn neon() -> Self {
		Self {
			name: "neon",
			palette: vec![
				Color::rgba(0, 231, 255, 0.8),  // Cyan
				Color::rgba(142, 68, 255, 0.8), // Purple
				Color::rgba(0, 255, 196, 0.8),  // Teal
				Color::rgba(255, 46, 144, 0.8), // Pink
			],
			trail: Color::rgba(8, 10, 20, 0.2),
			link: Color::rgb(100, 150, 255),
			glow_alpha: 0.3,
		}
	}

	/// Cool greens and violets
	pub fn aurora() -> Self {
		Self {
			name: "aurora",
			palette: vec![
				Color::rgba(100, 220, 170, 0.8), // Mint
				Color::rgba(130, 120, 230, 0.8), // Wisteria
				Color::rgba(80, 190, 210, 0.8),  // Glacier
				Color::rgba(190, 140, 240, 0.8), // Lilac
			],
			trail: Color::rgba(6, 12, 18, 0.2),
			link: Color::rgb(120, 200, 190),
			glow_alpha: 0.3,
		}
	}

	/// Warm oranges and reds
	pub fn ember() -> Self {
		Self {
			name: "ember",
			palette: vec![
				Color::rgba(255, 140, 60, 0.8),  // Amber
				Color::rgba(230, 80, 60, 0.8),   // Vermilion
				Color::rgba(255, 200, 100, 0.8), // Gold
				Color::rgba(200, 90, 120, 0.8),  // Rosewood
			],
			trail: Color::rgba(18, 10, 8, 0.2),
			link: Color::rgb(255, 160, 110),
			glow_alpha: 0.25,
		}
	}

	/// Greyscale, for busy foregrounds
	pub fn mono() -> Self {
		Self {
			name: "mono",
			palette: vec![
				Color::rgba(240, 240, 240, 0.8),
				Color::rgba(200, 200, 205, 0.8),
				Color::rgba(160, 162, 170, 0.8),
				Color::rgba(120, 122, 130, 0.8),
			],
			trail: Color::rgba(10, 10, 12, 0.2),
			link: Color::rgb(180, 180, 190),
			glow_alpha: 0.2,
		}
	}

	/// Looks up a preset by name.
	pub fn by_name(name: &str) -> Option<Self> {
		match name {
			"neon" => Some(Self::neon()),
			"aurora" => Some(Self::aurora()),
			"ember" => Some(Self::ember()),
			"mono" => Some(Self::mono()),
			_ => None,
		}
	}

	/// Builds a theme from a preset plus per-field overrides.
	/// Unknown presets and unparseable colors are logged and skipped.
	pub fn from_overrides(overrides: &ThemeOverrides) -> Self {
		let mut theme = match overrides.preset.as_deref() {
			Some(name) => Self::by_name(name).unwrap_or_else(|| {
				warn!("particle-backdrop: unknown theme preset {name:?}, using neon");
				Self::neon()
			}),
			None => Self::neon(),
		};

		if let Some(palette) = &overrides.palette {
			let parsed: Vec<Color> = palette.iter().filter_map(|c| parse_logged(c)).collect();
			if parsed.is_empty() {
				warn!("particle-backdrop: palette override has no usable colors, keeping preset");
			} else {
				theme.palette = parsed;
			}
		}
		if let Some(trail) = overrides.trail.as_deref().and_then(parse_logged) {
			theme.trail = trail;
		}
		if let Some(link) = overrides.link.as_deref().and_then(parse_logged) {
			theme.link = link;
		}
		theme
	}
}

impl Default for FieldTheme {
	fn default() -> Self {
		Self::neon()
	}
}

fn parse_logged(css: &str) -> Option<Color> {
	let color = Color::parse_css(css);
	if color.is_none() {
		warn!("particle-backdrop: ignoring unparseable color {css:?}");
	}
	color
}

/// Theme overrides as they appear in the page's JSON config. Every key is optional.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ThemeOverrides {
	/// Preset name: `neon`, `aurora`, `ember` or `mono`.
	pub preset: Option<String>,
	/// Replacement palette as CSS color strings.
	pub palette: Option<Vec<String>>,
	/// Trail wash color.
	pub trail: Option<String>,
	/// Link color; its alpha is ignored.
	pub link: Option<String>,
}
