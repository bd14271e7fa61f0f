//! Data sources attached to leaf layers.
//!
//! Request-capable sources ([`Source::TileWms`] and [`Source::ImageWms`]) carry a base URL and a
//! mapping of request parameters, such as `LAYERS`, that are sent with every request.

use std::{collections::BTreeMap, fmt::Display};

/// Request parameters of a WMS-style source. Keys are matched exactly.
pub type RequestParams = BTreeMap<String, String>;

/// Name of the request parameter listing the requested layers.
pub const LAYERS_PARAM: &str = "LAYERS";

/// A tiled WMS source: one or more base URLs that tiles are requested from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TileWmsSource {
	pub urls: Vec<String>,
	pub params: RequestParams,
}

/// A single-image WMS source: one base URL that the whole viewport is requested from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImageWmsSource {
	pub url: Option<String>,
	pub params: RequestParams,
}

/// The data source of a leaf layer.
#[derive(Clone, Debug, PartialEq)]
pub enum Source {
	TileWms(TileWmsSource),
	ImageWms(ImageWmsSource),
	/// A plain `{z}/{x}/{y}` tile template.
	Xyz { url: String },
	/// Vector data loaded from an optional URL.
	Vector { url: Option<String> },
}

impl Source {
	pub fn tile_wms(urls: &[&str], params: &[(&str, &str)]) -> Source {
		Source::TileWms(TileWmsSource {
			urls: urls.iter().map(|u| (*u).to_string()).collect(),
			params: to_params(params),
		})
	}

	pub fn image_wms(url: &str, params: &[(&str, &str)]) -> Source {
		Source::ImageWms(ImageWmsSource {
			url: Some(url.to_string()),
			params: to_params(params),
		})
	}

	/// Returns the request parameters, if this source sends any.
	pub fn params(&self) -> Option<&RequestParams> {
		match self {
			Source::TileWms(s) => Some(&s.params),
			Source::ImageWms(s) => Some(&s.params),
			Source::Xyz { .. } | Source::Vector { .. } => None,
		}
	}

	/// Returns the value of the `LAYERS` request parameter.
	pub fn layers_param(&self) -> Option<&str> {
		self.params()?.get(LAYERS_PARAM).map(String::as_str)
	}

	pub fn kind(&self) -> &str {
		match self {
			Source::TileWms(_) => "tile_wms",
			Source::ImageWms(_) => "image_wms",
			Source::Xyz { .. } => "xyz",
			Source::Vector { .. } => "vector",
		}
	}
}

impl Display for Source {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.kind())
	}
}

fn to_params(params: &[(&str, &str)]) -> RequestParams {
	params.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
}
