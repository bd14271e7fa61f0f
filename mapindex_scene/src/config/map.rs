use super::{LayerConfig, ViewConfig};
use crate::{Interaction, Map};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
	fs::File,
	io::{BufReader, Read},
	path::Path,
};

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct InteractionConfig {
	pub name: Option<String>,
	pub kind: String,
	#[serde(default = "default_true")]
	pub active: bool,
}

fn default_true() -> bool {
	true
}

/// A complete scene: view, layer tree and interactions.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MapConfig {
	/// View state; a map without a view has not been initialized yet.
	pub view: Option<ViewConfig>,

	/// Top-level layers and groups, bottom-most first.
	#[serde(default)]
	pub layers: Vec<LayerConfig>,

	#[serde(default)]
	pub interactions: Vec<InteractionConfig>,
}

impl MapConfig {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Ok(serde_yaml_ng::from_reader(reader)?)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		Ok(serde_yaml_ng::from_str(text)?)
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("opening scene file {path:?}"))?;
		MapConfig::from_reader(BufReader::new(file)).with_context(|| format!("parsing scene file {path:?}"))
	}

	/// Builds the scene. Every layer and group gets a fresh unique identifier.
	pub fn build(&self) -> Result<Map> {
		let layers = self
			.layers
			.iter()
			.map(LayerConfig::build)
			.collect::<Result<Vec<_>>>()?;

		let mut map = Map::new(layers);
		if let Some(view) = &self.view {
			map.view = Some(view.build().context("in view")?);
		}
		map.interactions = self
			.interactions
			.iter()
			.map(|i| Interaction {
				name: i.name.clone(),
				kind: i.kind.clone(),
				active: i.active,
			})
			.collect();

		log::debug!(
			"built scene with {} top-level layers and {} interactions",
			map.layers().len(),
			map.interactions.len()
		);
		Ok(map)
	}
}
