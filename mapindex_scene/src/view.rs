use anyhow::{Context, Result};
use mapindex_core::{LinearUnit, scale_for_resolution, zoom_for_scale};

/// The view state of a map: its current resolution, the zoom ladder it snaps to and the linear
/// unit of its projection.
///
/// A view that was not initialized yet has no resolution.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct View {
	pub resolution: Option<f64>,
	pub resolutions: Option<Vec<f64>>,
	pub units: LinearUnit,
}

impl View {
	pub fn new(resolution: f64) -> Self {
		Self {
			resolution: Some(resolution),
			..Self::default()
		}
	}

	#[must_use]
	pub fn with_resolutions(mut self, resolutions: Vec<f64>) -> Self {
		self.resolutions = Some(resolutions);
		self
	}

	#[must_use]
	pub fn with_units(mut self, units: LinearUnit) -> Self {
		self.units = units;
		self
	}

	/// Returns the scale denominator of the current resolution.
	pub fn scale(&self) -> Option<f64> {
		self.resolution.map(|r| scale_for_resolution(r, self.units))
	}

	/// Returns the index of the zoom level in this view's ladder that matches `scale` best.
	pub fn zoom_for_scale(&self, scale: f64) -> Result<usize> {
		let resolutions = self
			.resolutions
			.as_deref()
			.context("invalid argument: view has no resolution ladder")?;
		zoom_for_scale(scale, resolutions, self.units)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_relative_eq;

	#[test]
	fn scale_of_current_resolution() {
		let view = View::new(1.0);
		assert_relative_eq!(view.scale().unwrap(), 39.37 * 25.4 / 0.28, epsilon = 1e-9);
		assert_eq!(View::default().scale(), None);
	}

	#[test]
	fn zoom_for_scale_uses_ladder_and_units() {
		let view = View::new(0.01)
			.with_resolutions(vec![0.1, 0.01, 0.001])
			.with_units(LinearUnit::Degrees);
		let scale = view.scale().unwrap();
		assert_eq!(view.zoom_for_scale(scale).unwrap(), 1);
	}

	#[test]
	fn zoom_for_scale_without_ladder() {
		let err = View::new(1.0).zoom_for_scale(1000.0).unwrap_err();
		assert!(err.to_string().starts_with("invalid argument:"));
	}
}
