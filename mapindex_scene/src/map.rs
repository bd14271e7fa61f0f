use crate::{Interaction, LayerCollection, LayerGroup, LayerNode, View};

/// The top-level scene: a root layer group, an optional view and the registered interactions.
#[derive(Clone, Debug, PartialEq)]
pub struct Map {
	layer_group: LayerGroup,
	pub view: Option<View>,
	pub interactions: Vec<Interaction>,
}

impl Map {
	pub fn new(layers: Vec<LayerNode>) -> Self {
		Self {
			layer_group: LayerGroup::unnamed(layers),
			view: None,
			interactions: Vec::new(),
		}
	}

	#[must_use]
	pub fn with_view(mut self, view: View) -> Self {
		self.view = Some(view);
		self
	}

	#[must_use]
	pub fn with_interaction(mut self, interaction: Interaction) -> Self {
		self.interactions.push(interaction);
		self
	}

	pub fn layers(&self) -> &[LayerNode] {
		self.layer_group.layers()
	}
}

impl Default for Map {
	fn default() -> Self {
		Self::new(Vec::new())
	}
}

impl LayerCollection for Map {
	fn layer_group(&self) -> &LayerGroup {
		&self.layer_group
	}
}
