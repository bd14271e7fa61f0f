use crate::{Layer, LayerGroup, Uid};
use mapindex_core::Properties;

/// A node of the layer tree: either a renderable leaf or a group of further nodes.
#[derive(Clone, Debug, PartialEq)]
pub enum LayerNode {
	Leaf(Layer),
	Group(LayerGroup),
}

impl LayerNode {
	pub fn uid(&self) -> Uid {
		match self {
			LayerNode::Leaf(l) => l.uid(),
			LayerNode::Group(g) => g.uid(),
		}
	}

	pub fn properties(&self) -> &Properties {
		match self {
			LayerNode::Leaf(l) => &l.properties,
			LayerNode::Group(g) => &g.properties,
		}
	}

	pub fn name(&self) -> Option<&str> {
		match self {
			LayerNode::Leaf(l) => l.name(),
			LayerNode::Group(g) => g.name(),
		}
	}

	pub fn as_leaf(&self) -> Option<&Layer> {
		match self {
			LayerNode::Leaf(l) => Some(l),
			LayerNode::Group(_) => None,
		}
	}

	pub fn as_group(&self) -> Option<&LayerGroup> {
		match self {
			LayerNode::Leaf(_) => None,
			LayerNode::Group(g) => Some(g),
		}
	}

	pub fn is_group(&self) -> bool {
		matches!(self, LayerNode::Group(_))
	}
}

impl From<Layer> for LayerNode {
	fn from(layer: Layer) -> Self {
		LayerNode::Leaf(layer)
	}
}

impl From<LayerGroup> for LayerNode {
	fn from(group: LayerGroup) -> Self {
		LayerNode::Group(group)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn accessors() {
		let leaf = LayerNode::from(Layer::new("a"));
		let group = LayerNode::from(LayerGroup::new("g", vec![]));

		assert_eq!(leaf.name(), Some("a"));
		assert_eq!(group.name(), Some("g"));
		assert!(!leaf.is_group());
		assert!(group.is_group());
		assert_eq!(leaf.uid(), leaf.as_leaf().unwrap().uid());
		assert_eq!(group.uid(), group.as_group().unwrap().uid());
		assert!(leaf.as_group().is_none());
		assert!(group.as_leaf().is_none());
		assert_eq!(group.properties().get_str("name"), Some("g"));
	}
}
