use serde::Deserialize;

/// Fixed parameters of a `GetLegendGraphic` request.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct LegendOptions {
	pub version: String,
	pub service: String,
	pub request: String,
	pub format: String,
}

impl Default for LegendOptions {
	fn default() -> Self {
		Self {
			version: "1.3.0".to_string(),
			service: "WMS".to_string(),
			request: "getLegendGraphic".to_string(),
			format: "image/png".to_string(),
		}
	}
}
