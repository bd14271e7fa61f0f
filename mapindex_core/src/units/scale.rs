//! Conversion between cartographic scale denominators and map resolutions.
//!
//! A resolution is the number of map units covered by one screen pixel. The conversion assumes
//! the OGC standardized rendering pixel size of 0.28 mm, i.e. roughly 90.71 DPI.
//!
//! # Examples
//!
//! ```
//! use mapindex_core::{LinearUnit, resolution_for_scale, round_scale, scale_for_resolution};
//!
//! let resolution = resolution_for_scale(50_000.0, LinearUnit::Meters);
//! let scale = scale_for_resolution(resolution, LinearUnit::Meters);
//! assert!((scale - 50_000.0).abs() < 1e-6);
//!
//! assert_eq!(round_scale(12_345.0), 12_300.0);
//! ```

use crate::LinearUnit;

/// Inches per meter.
pub const INCHES_PER_METER: f64 = 39.37;

/// Screen resolution derived from the standardized 0.28 mm rendering pixel.
pub const DOTS_PER_INCH: f64 = 25.4 / 0.28;

fn pixels_per_unit(unit: LinearUnit) -> f64 {
	match unit.meters_per_unit() {
		Some(meters) => meters * INCHES_PER_METER * DOTS_PER_INCH,
		None => f64::NAN,
	}
}

/// Returns the map resolution matching the scale denominator `scale`.
///
/// Units without a fixed ground size yield `NaN`.
pub fn resolution_for_scale(scale: f64, unit: LinearUnit) -> f64 {
	scale / pixels_per_unit(unit)
}

/// Returns the scale denominator matching `resolution`. Exact inverse of [`resolution_for_scale`].
///
/// Units without a fixed ground size yield `NaN`.
pub fn scale_for_resolution(resolution: f64, unit: LinearUnit) -> f64 {
	resolution * pixels_per_unit(unit)
}

/// Rounds a scale denominator to a value that reads well in a scale bar or select box.
///
/// | scale                   | rounded to nearest |
/// |-------------------------|--------------------|
/// | `< 100`                 | 1                  |
/// | `100 ..< 10 000`        | 10                 |
/// | `10 000 ..< 1 000 000`  | 100                |
/// | `>= 1 000 000`          | 1000               |
///
/// Negative, infinite and `NaN` scales are not scales at all and return `NaN`.
///
/// # Examples
///
/// ```
/// use mapindex_core::round_scale;
///
/// assert_eq!(round_scale(99.4), 99.0);
/// assert_eq!(round_scale(9_995.0), 10_000.0);
/// assert_eq!(round_scale(1_234_567.0), 1_235_000.0);
/// assert!(round_scale(-5.0).is_nan());
/// ```
pub fn round_scale(scale: f64) -> f64 {
	if !scale.is_finite() || scale < 0.0 {
		return f64::NAN;
	}

	let step = if scale < 100.0 {
		1.0
	} else if scale < 10_000.0 {
		10.0
	} else if scale < 1_000_000.0 {
		100.0
	} else {
		1000.0
	};

	(scale / step).round() * step
}
