use crate::{LayerNode, NAME_PROPERTY, Uid};
use mapindex_core::{Properties, PropertyValue};

/// A container of further layers and groups.
///
/// Cloning a group copies the whole subtree; every copied node gets a fresh [`Uid`].
#[derive(Debug, PartialEq)]
pub struct LayerGroup {
	uid: Uid,
	pub properties: Properties,
	pub layers: Vec<LayerNode>,
	pub visible: bool,
}

impl Clone for LayerGroup {
	fn clone(&self) -> Self {
		Self {
			uid: Uid::next(),
			properties: self.properties.clone(),
			layers: self.layers.clone(),
			visible: self.visible,
		}
	}
}

impl LayerGroup {
	pub fn new(name: &str, layers: Vec<LayerNode>) -> Self {
		let mut group = Self::unnamed(layers);
		group.properties.insert(NAME_PROPERTY, name);
		group
	}

	pub fn unnamed(layers: Vec<LayerNode>) -> Self {
		Self {
			uid: Uid::next(),
			properties: Properties::new(),
			layers,
			visible: true,
		}
	}

	#[must_use]
	pub fn with_property<T>(mut self, key: &str, value: T) -> Self
	where
		PropertyValue: From<T>,
	{
		self.properties.insert(key, value);
		self
	}

	pub fn uid(&self) -> Uid {
		self.uid
	}

	pub fn name(&self) -> Option<&str> {
		self.properties.get_str(NAME_PROPERTY)
	}

	/// Returns the immediate children.
	pub fn layers(&self) -> &[LayerNode] {
		&self.layers
	}
}

/// Anything that owns a root [`LayerGroup`]: a map or a group itself.
pub trait LayerCollection {
	fn layer_group(&self) -> &LayerGroup;
}

impl LayerCollection for LayerGroup {
	fn layer_group(&self) -> &LayerGroup {
		self
	}
}
