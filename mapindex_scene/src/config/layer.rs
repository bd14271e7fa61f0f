use super::SourceConfig;
use crate::{Layer, LayerGroup, LayerNode, NAME_PROPERTY};
use anyhow::{Context, Result, ensure};
use mapindex_core::Properties;
use serde::Deserialize;

/// A node of the layer tree. A node with a `layers` list is a group, any other node a leaf.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LayerConfig {
	pub name: Option<String>,

	/// Child nodes; turns this node into a group.
	pub layers: Option<Vec<LayerConfig>>,

	pub source: Option<SourceConfig>,

	pub min_resolution: Option<f64>,

	pub max_resolution: Option<f64>,

	pub visible: Option<bool>,

	/// Further named properties, e.g. `title` or `queryable`.
	#[serde(default)]
	pub properties: Properties,
}

impl LayerConfig {
	pub fn build(&self) -> Result<LayerNode> {
		let label = self.name.as_deref().unwrap_or("<unnamed>");

		let mut properties = self.properties.clone();
		if let Some(name) = &self.name {
			properties.insert(NAME_PROPERTY, name);
		}

		if let Some(children) = &self.layers {
			ensure!(self.source.is_none(), "group '{label}' can not have a source");
			ensure!(
				self.min_resolution.is_none() && self.max_resolution.is_none(),
				"group '{label}' can not have a resolution range"
			);

			let layers = children
				.iter()
				.map(LayerConfig::build)
				.collect::<Result<Vec<_>>>()
				.with_context(|| format!("in group '{label}'"))?;

			let mut group = LayerGroup::unnamed(layers);
			group.properties = properties;
			group.visible = self.visible.unwrap_or(true);
			return Ok(LayerNode::Group(group));
		}

		let mut layer = Layer::unnamed();
		layer.properties = properties;
		layer.visible = self.visible.unwrap_or(true);
		layer.min_resolution = self.min_resolution.unwrap_or(layer.min_resolution);
		layer.max_resolution = self.max_resolution.unwrap_or(layer.max_resolution);
		ensure!(
			layer.min_resolution <= layer.max_resolution,
			"layer '{label}': min_resolution ({}) must not exceed max_resolution ({})",
			layer.min_resolution,
			layer.max_resolution
		);

		if let Some(source) = &self.source {
			layer.source = Some(source.build().with_context(|| format!("in source of layer '{label}'"))?);
		}

		Ok(LayerNode::Leaf(layer))
	}
}
