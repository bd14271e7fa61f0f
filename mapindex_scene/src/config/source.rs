use crate::{ImageWmsSource, RequestParams, Source, TileWmsSource};
use anyhow::{Result, ensure};
use serde::Deserialize;

/// Source of a leaf layer, selected by its `type` field.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum SourceConfig {
	TileWms {
		/// Single base URL; merged in front of `urls`.
		url: Option<String>,
		#[serde(default)]
		urls: Vec<String>,
		#[serde(default)]
		params: RequestParams,
	},
	ImageWms {
		url: Option<String>,
		#[serde(default)]
		params: RequestParams,
	},
	Xyz {
		url: String,
	},
	Vector {
		url: Option<String>,
	},
}

impl SourceConfig {
	pub fn build(&self) -> Result<Source> {
		Ok(match self {
			SourceConfig::TileWms { url, urls, params } => Source::TileWms(TileWmsSource {
				urls: url.iter().chain(urls.iter()).cloned().collect(),
				params: params.clone(),
			}),
			SourceConfig::ImageWms { url, params } => Source::ImageWms(ImageWmsSource {
				url: url.clone(),
				params: params.clone(),
			}),
			SourceConfig::Xyz { url } => {
				ensure!(!url.is_empty(), "xyz source needs a url template");
				Source::Xyz { url: url.clone() }
			}
			SourceConfig::Vector { url } => Source::Vector { url: url.clone() },
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	fn parse(yaml: &str) -> Result<Source> {
		serde_yaml_ng::from_str::<SourceConfig>(yaml)?.build()
	}

	#[test]
	fn tile_wms_merges_url_and_urls() -> Result<()> {
		let source = parse("type: tile_wms\nurl: http://a/wms\nurls: [\"http://b/wms\"]\nparams:\n  LAYERS: ns:roads")?;
		assert_eq!(
			source,
			Source::tile_wms(&["http://a/wms", "http://b/wms"], &[("LAYERS", "ns:roads")])
		);
		Ok(())
	}

	#[test]
	fn image_wms() -> Result<()> {
		let source = parse("type: image_wms\nurl: http://a/wms?map=x\nparams: {LAYERS: rivers}")?;
		assert_eq!(source, Source::image_wms("http://a/wms?map=x", &[("LAYERS", "rivers")]));
		Ok(())
	}

	#[test]
	fn other_kinds() -> Result<()> {
		assert_eq!(parse("type: vector")?, Source::Vector { url: None });
		assert!(parse("type: xyz\nurl: ''").is_err());
		Ok(())
	}

	#[test]
	fn rejects_unknown_type_and_fields() {
		assert!(parse("type: wmts\nurl: http://a").is_err());
		assert!(parse("type: image_wms\nlayers: x").is_err());
	}
}
