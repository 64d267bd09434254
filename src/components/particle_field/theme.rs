//! Visual tuning for the particle field.
//!
//! Every constant the renderer uses lives here so the whole look can be
//! overridden from a JSON blob embedded in the page.

use serde::Deserialize;
use thiserror::Error;

/// Largest pool a theme may ask for. The connection pass is quadratic.
pub const MAX_PARTICLES: usize = 1_000;

fn opaque() -> f64 {
	1.0
}

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[allow(missing_docs)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	/// Alpha in `0.0..=1.0`, opaque when omitted.
	#[serde(default = "opaque")]
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Same hue with alpha `a`.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// CSS `rgba()` notation.
	pub fn to_css(self) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// Half-open `[min, max)` interval sampled uniformly.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Range {
	/// Inclusive lower bound.
	pub min: f64,
	/// Exclusive upper bound.
	pub max: f64,
}

impl Range {
	/// Interval from `min` to `max`.
	pub const fn new(min: f64, max: f64) -> Self {
		Self { min, max }
	}

	/// Degenerate ranges collapse to `min`. A span too wide to represent
	/// counts as degenerate, since it cannot be sampled.
	#[allow(clippy::neg_cmp_op_on_partial_ord, reason = "NaN bounds are degenerate too")]
	pub fn is_degenerate(&self) -> bool {
		!(self.min < self.max) || !(self.max - self.min).is_finite()
	}

	fn is_finite(&self) -> bool {
		self.min.is_finite() && self.max.is_finite()
	}
}

/// Why a parsed theme was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ThemeError {
	/// More particles than [`MAX_PARTICLES`].
	#[error("particle count {0} exceeds {max}", max = MAX_PARTICLES)]
	TooManyParticles(usize),

	/// A numeric setting that must be finite and non-negative is not.
	#[error("`{field}` must be finite and non-negative, got {value}")]
	OutOfRange {
		/// Offending field name.
		field: &'static str,
		/// Value it was given.
		value: f64,
	},

	/// A range with a non-finite bound.
	#[error("`{0}` bounds must be finite")]
	UnboundedRange(&'static str),
}

/// Complete look of the particle field.
///
/// Fields missing from a JSON override keep their default values.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldTheme {
	/// Number of particles in the pool.
	pub count: usize,
	/// Particle radius in pixels.
	pub radius: Range,
	/// Maximum per-frame speed on each axis. Velocities are drawn from `[-speed, speed)`.
	pub speed: f64,
	/// Per-particle fill opacity.
	pub opacity: Range,
	/// Hue shared by dots and connecting lines.
	pub color: Color,
	/// Pairs closer than this are joined by a line.
	pub link_distance: f64,
	/// Line opacity for two coincident particles; fades linearly to zero at `link_distance`.
	pub link_alpha: f64,
	/// Line width in pixels.
	pub link_width: f64,
	/// CSS opacity of the whole canvas.
	pub surface_opacity: f64,
	/// Fixed seed for reproducible layouts (screenshots, demos).
	pub seed: Option<u64>,
}

impl Default for FieldTheme {
	fn default() -> Self {
		Self {
			count: 50,
			radius: Range::new(0.5, 2.5),
			speed: 0.25,
			opacity: Range::new(0.1, 0.6),
			color: Color::rgb(145, 145, 245),
			link_distance: 150.0,
			link_alpha: 0.15,
			link_width: 0.5,
			surface_opacity: 0.3,
			seed: None,
		}
	}
}

impl FieldTheme {
	/// Parses a (possibly partial) JSON override.
	pub fn from_json(json: &str) -> serde_json::Result<Self> {
		serde_json::from_str(json)
	}

	/// Rejects settings the renderer cannot draw sensibly.
	pub fn validate(&self) -> Result<(), ThemeError> {
		if self.count > MAX_PARTICLES {
			return Err(ThemeError::TooManyParticles(self.count));
		}

		let amounts = [
			("speed", self.speed),
			("link_distance", self.link_distance),
			("link_alpha", self.link_alpha),
			("link_width", self.link_width),
			("surface_opacity", self.surface_opacity),
		];
		for (field, value) in amounts {
			if !value.is_finite() || value < 0.0 {
				return Err(ThemeError::OutOfRange { field, value });
			}
		}
		// Velocities are drawn from `[-speed, speed)`, whose span must stay finite.
		if !(2.0 * self.speed).is_finite() {
			return Err(ThemeError::OutOfRange {
				field: "speed",
				value: self.speed,
			});
		}

		for (field, range) in [("radius", self.radius), ("opacity", self.opacity)] {
			if !range.is_finite() {
				return Err(ThemeError::UnboundedRange(field));
			}
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_matches_reference_look() {
		let theme = FieldTheme::default();
		assert_eq!(theme.count, 50);
		assert_eq!(theme.radius, Range::new(0.5, 2.5));
		assert_eq!(theme.opacity, Range::new(0.1, 0.6));
		assert_eq!(theme.link_distance, 150.0);
		assert_eq!(theme.color.to_css(), "rgba(145, 145, 245, 1)");
	}

	#[test]
	fn partial_json_keeps_other_defaults() {
		let theme = FieldTheme::from_json(r#"{ "count": 12, "color": { "r": 1, "g": 2, "b": 3 } }"#)
			.unwrap();
		assert_eq!(theme.count, 12);
		assert_eq!(theme.color, Color::rgb(1, 2, 3));
		assert_eq!(theme.link_distance, 150.0);
		assert_eq!(theme.seed, None);
	}

	#[test]
	fn malformed_json_is_an_error() {
		assert!(FieldTheme::from_json("{ count: ").is_err());
		assert!(FieldTheme::from_json(r#"{ "count": -3 }"#).is_err());
	}

	#[test]
	fn degenerate_range() {
		assert!(Range::new(1.0, 1.0).is_degenerate());
		assert!(Range::new(2.0, 1.0).is_degenerate());
		assert!(Range::new(f64::NAN, 1.0).is_degenerate());
		assert!(!Range::new(0.5, 2.5).is_degenerate());
	}

	#[test]
	fn overflowing_span_is_degenerate() {
		assert!(Range::new(-1e308, 1e308).is_degenerate());
		assert!(Range::new(-f64::MAX, f64::MAX).is_degenerate());
		assert!(Range::new(0.0, f64::INFINITY).is_degenerate());
		assert!(!Range::new(-1e300, 1e300).is_degenerate());
	}

	#[test]
	fn default_theme_is_valid() {
		assert_eq!(FieldTheme::default().validate(), Ok(()));
	}

	#[test]
	fn validate_rejects_unusable_settings() {
		let cases = [
			r#"{ "count": 1000000 }"#,
			r#"{ "speed": -1.0 }"#,
			r#"{ "speed": 1e308 }"#,
			r#"{ "link_distance": -5.0 }"#,
		];
		for json in cases {
			let theme = FieldTheme::from_json(json).unwrap();
			assert!(theme.validate().is_err(), "accepted {json}");
		}

		let unbounded = FieldTheme {
			radius: Range::new(0.0, f64::INFINITY),
			..FieldTheme::default()
		};
		assert_eq!(unbounded.validate(), Err(ThemeError::UnboundedRange("radius")));

		let err = FieldTheme::from_json(r#"{ "speed": -1.0 }"#)
			.unwrap()
			.validate()
			.unwrap_err();
		assert_eq!(err.to_string(), "`speed` must be finite and non-negative, got -1");
		assert_eq!(
			ThemeError::TooManyParticles(5000).to_string(),
			"particle count 5000 exceeds 1000"
		);
	}

	#[test]
	fn with_alpha_formats_css() {
		let c = Color::rgb(145, 145, 245).with_alpha(0.25);
		assert_eq!(c.to_css(), "rgba(145, 145, 245, 0.25)");
	}
}
