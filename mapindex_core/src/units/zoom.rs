//! Picks the zoom level of a resolution ladder that best matches a scale denominator.

use crate::{LinearUnit, resolution_for_scale};
use anyhow::{Result, ensure};

/// Differences closer than this are treated as equal when comparing resolutions.
pub const RESOLUTION_EPSILON: f64 = 1e-10;

/// Finds the zoom level whose resolution matches the scale denominator `scale` best.
///
/// `resolutions` is the zoom ladder of a view, ordered consistently (finest to coarsest or the
/// other way round). The scale is converted to a resolution in `unit` and the index of the ladder
/// entry with the smallest absolute difference is returned. When two entries are equally close,
/// the earlier one wins.
///
/// A scale that is negative or not finite maps to zoom level `0`.
///
/// # Errors
///
/// Returns an error if `resolutions` is empty.
///
/// # Examples
///
/// ```
/// use mapindex_core::{LinearUnit, scale_for_resolution, zoom_for_scale};
///
/// let ladder = [100.0, 50.0, 25.0, 12.5];
/// let scale = scale_for_resolution(50.0, LinearUnit::Meters);
/// assert_eq!(zoom_for_scale(scale, &ladder, LinearUnit::Meters).unwrap(), 1);
/// assert_eq!(zoom_for_scale(-1.0, &ladder, LinearUnit::Meters).unwrap(), 0);
/// assert!(zoom_for_scale(1000.0, &[], LinearUnit::Meters).is_err());
/// ```
pub fn zoom_for_scale(scale: f64, resolutions: &[f64], unit: LinearUnit) -> Result<usize> {
	ensure!(
		!resolutions.is_empty(),
		"invalid argument: resolution ladder must not be empty"
	);

	if !scale.is_finite() || scale < 0.0 {
		log::trace!("scale {scale} is not a valid scale denominator, using zoom 0");
		return Ok(0);
	}

	let target = resolution_for_scale(scale, unit);
	if target.is_nan() {
		log::trace!("unit {unit} has no ground size, using zoom 0");
		return Ok(0);
	}

	let mut best_index = 0;
	let mut best_diff = (resolutions[0] - target).abs();
	for (index, resolution) in resolutions.iter().enumerate().skip(1) {
		let diff = (resolution - target).abs();
		if diff < best_diff - RESOLUTION_EPSILON {
			best_index = index;
			best_diff = diff;
		}
	}

	Ok(best_index)
}
