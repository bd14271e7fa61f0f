//! This module defines the `LinearUnit` enum, the closed set of map units a view can be
//! expressed in, together with its meters-per-unit conversion table.
//!
//! # Examples
//!
//! ```
//! use mapindex_core::LinearUnit;
//!
//! assert_eq!(LinearUnit::Meters.meters_per_unit(), Some(1.0));
//! assert_eq!(LinearUnit::Feet.meters_per_unit(), Some(0.3048));
//! assert_eq!(LinearUnit::Pixels.meters_per_unit(), None);
//!
//! assert_eq!(LinearUnit::parse_str("us-ft").unwrap(), LinearUnit::UsFeet);
//! assert!(LinearUnit::parse_str("furlong").is_err());
//! ```

use anyhow::{Result, bail};
use serde::{Deserialize, Deserializer};
use std::{f64::consts::PI, fmt::Display};

/// Mean earth radius of the normal sphere used for degree based projections.
const EARTH_RADIUS: f64 = 6_370_997.0; // meters

/// Enum representing the linear unit of a projection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LinearUnit {
	Degrees,
	Feet,
	#[default]
	Meters,
	UsFeet,
	Pixels,
	TilePixels,
}

impl LinearUnit {
	pub fn as_str(&self) -> &str {
		match self {
			LinearUnit::Degrees => "degrees",
			LinearUnit::Feet => "ft",
			LinearUnit::Meters => "m",
			LinearUnit::UsFeet => "us-ft",
			LinearUnit::Pixels => "pixels",
			LinearUnit::TilePixels => "tile-pixels",
		}
	}

	/// Returns how many meters one unit spans.
	///
	/// Pixel based units have no fixed ground size and return `None`.
	///
	/// # Examples
	///
	/// ```
	/// use mapindex_core::LinearUnit;
	///
	/// let degrees = LinearUnit::Degrees.meters_per_unit().unwrap();
	/// assert!((degrees - 111_194.87).abs() < 0.01);
	/// assert_eq!(LinearUnit::TilePixels.meters_per_unit(), None);
	/// ```
	pub fn meters_per_unit(&self) -> Option<f64> {
		match self {
			LinearUnit::Degrees => Some(2.0 * PI * EARTH_RADIUS / 360.0),
			LinearUnit::Feet => Some(0.3048),
			LinearUnit::Meters => Some(1.0),
			LinearUnit::UsFeet => Some(1200.0 / 3937.0),
			LinearUnit::Pixels | LinearUnit::TilePixels => None,
		}
	}

	pub fn parse_str(value: &str) -> Result<Self> {
		Ok(match value.to_lowercase().trim() {
			"degrees" | "degree" | "deg" => LinearUnit::Degrees,
			"ft" | "feet" | "foot" => LinearUnit::Feet,
			"m" | "meters" | "meter" | "metres" => LinearUnit::Meters,
			"us-ft" | "us-feet" => LinearUnit::UsFeet,
			"pixels" | "px" => LinearUnit::Pixels,
			"tile-pixels" => LinearUnit::TilePixels,
			_ => bail!("Unknown linear unit '{value}'. Expected degrees, ft, m, us-ft, pixels or tile-pixels"),
		})
	}
}

impl Display for LinearUnit {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl<'de> Deserialize<'de> for LinearUnit {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let value = String::deserialize(deserializer)?;
		LinearUnit::parse_str(&value).map_err(serde::de::Error::custom)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("degrees", LinearUnit::Degrees)]
	#[case("ft", LinearUnit::Feet)]
	#[case("m", LinearUnit::Meters)]
	#[case("us-ft", LinearUnit::UsFeet)]
	#[case("pixels", LinearUnit::Pixels)]
	#[case("tile-pixels", LinearUnit::TilePixels)]
	#[case(" Meters ", LinearUnit::Meters)]
	#[case("DEG", LinearUnit::Degrees)]
	fn parse_known_units(#[case] input: &str, #[case] expected: LinearUnit) {
		assert_eq!(LinearUnit::parse_str(input).unwrap(), expected);
	}

	#[test]
	fn parse_unknown_unit() {
		let err = LinearUnit::parse_str("furlong").unwrap_err().to_string();
		assert!(err.starts_with("Unknown linear unit 'furlong'"));
	}

	#[test]
	fn display_round_trips_through_parse() {
		for unit in [
			LinearUnit::Degrees,
			LinearUnit::Feet,
			LinearUnit::Meters,
			LinearUnit::UsFeet,
			LinearUnit::Pixels,
			LinearUnit::TilePixels,
		] {
			assert_eq!(LinearUnit::parse_str(&unit.to_string()).unwrap(), unit);
		}
	}

	#[test]
	fn meters_per_unit_table() {
		assert_eq!(LinearUnit::Meters.meters_per_unit(), Some(1.0));
		assert_eq!(LinearUnit::Feet.meters_per_unit(), Some(0.3048));
		assert_eq!(LinearUnit::UsFeet.meters_per_unit(), Some(1200.0 / 3937.0));
		assert_eq!(LinearUnit::Pixels.meters_per_unit(), None);
	}

	#[test]
	fn deserialize_from_yaml() {
		let unit: LinearUnit = serde_yaml_ng::from_str("degrees").unwrap();
		assert_eq!(unit, LinearUnit::Degrees);
		assert!(serde_yaml_ng::from_str::<LinearUnit>("parsec").is_err());
	}
}
