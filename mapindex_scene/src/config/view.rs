use crate::View;
use anyhow::{Result, ensure};
use mapindex_core::LinearUnit;
use serde::Deserialize;

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ViewConfig {
	/// Current resolution in map units per pixel.
	pub resolution: Option<f64>,

	/// Zoom ladder the view snaps to.
	pub resolutions: Option<Vec<f64>>,

	/// Linear unit of the projection. Defaults to meters.
	#[serde(default)]
	pub units: LinearUnit,
}

impl ViewConfig {
	pub fn build(&self) -> Result<View> {
		if let Some(resolution) = self.resolution {
			ensure!(
				resolution.is_finite() && resolution > 0.0,
				"view resolution must be positive, got {resolution}"
			);
		}
		if let Some(resolutions) = &self.resolutions {
			ensure!(!resolutions.is_empty(), "view resolutions must not be empty");
		}

		Ok(View {
			resolution: self.resolution,
			resolutions: self.resolutions.clone(),
			units: self.units,
		})
	}
}
