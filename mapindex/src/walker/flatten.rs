//! Flattening of a layer tree into a linear list.
//!
//! Two traversal modes exist:
//! - [`flatten`] / [`leaf_layers`] walk the tree depth-first in pre-order and return only leaf
//!   layers; groups are expanded but never returned.
//! - [`all_layers`] also returns the groups: each group follows its own flattened descendants.
//!
//! The root group of the collection itself is never part of the result. Results are snapshots;
//! after the tree changes they have to be recomputed.

use mapindex_scene::{Layer, LayerCollection, LayerGroup, LayerNode};

/// Trees nested deeper than this are not descended into any further.
pub const MAX_TREE_DEPTH: usize = 256;

/// Returns all leaf layers below `root` that match `filter`, in depth-first pre-order.
///
/// # Examples
///
/// ```
/// use mapindex::{flatten, scene::{Layer, LayerGroup}};
///
/// let tree = LayerGroup::new("g1", vec![
///     Layer::new("a").into(),
///     LayerGroup::new("g2", vec![Layer::new("b").into(), Layer::new("c").into()]).into(),
/// ]);
/// let names: Vec<_> = flatten(&tree, |l| l.name() != Some("b")).iter().map(|l| l.name()).collect();
/// assert_eq!(names, vec![Some("a"), Some("c")]);
/// ```
pub fn flatten<'a, C, F>(root: &'a C, filter: F) -> Vec<&'a Layer>
where
	C: LayerCollection + ?Sized,
	F: Fn(&Layer) -> bool,
{
	let mut result = Vec::new();
	collect_leaves(root.layer_group(), &filter, 0, &mut result);
	result
}

/// Returns all leaf layers below `root`, in depth-first pre-order.
pub fn leaf_layers<C>(root: &C) -> Vec<&Layer>
where
	C: LayerCollection + ?Sized,
{
	flatten(root, |_| true)
}

/// Returns all layers and groups below `root` that match `filter`.
///
/// Every group is listed after its flattened descendants, so for
/// `[a, g2[b, c]]` the order is `a, b, c, g2`.
pub fn all_layers<'a, C, F>(root: &'a C, filter: F) -> Vec<&'a LayerNode>
where
	C: LayerCollection + ?Sized,
	F: Fn(&LayerNode) -> bool,
{
	let mut result = Vec::new();
	collect_nodes(root.layer_group(), &filter, 0, &mut result);
	result
}

fn collect_leaves<'a>(group: &'a LayerGroup, filter: &dyn Fn(&Layer) -> bool, depth: usize, result: &mut Vec<&'a Layer>) {
	if depth >= MAX_TREE_DEPTH {
		log::warn!("layer tree is nested deeper than {MAX_TREE_DEPTH} levels, skipping group {}", group.uid());
		return;
	}

	for node in group.layers() {
		match node {
			LayerNode::Leaf(layer) => {
				if filter(layer) {
					result.push(layer);
				}
			}
			LayerNode::Group(child) => collect_leaves(child, filter, depth + 1, result),
		}
	}
}

fn collect_nodes<'a>(
	group: &'a LayerGroup,
	filter: &dyn Fn(&LayerNode) -> bool,
	depth: usize,
	result: &mut Vec<&'a LayerNode>,
) {
	if depth >= MAX_TREE_DEPTH {
		log::warn!("layer tree is nested deeper than {MAX_TREE_DEPTH} levels, skipping group {}", group.uid());
		return;
	}

	for node in group.layers() {
		if let LayerNode::Group(child) = node {
			collect_nodes(child, filter, depth + 1, result);
		}
		if filter(node) {
			result.push(node);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use mapindex_scene::Map;
	use pretty_assertions::assert_eq;

	fn example_tree() -> LayerGroup {
		LayerGroup::new(
			"g1",
			vec![
				Layer::new("a").into(),
				LayerGroup::new("g2", vec![Layer::new("b").into(), Layer::new("c").into()]).into(),
			],
		)
	}

	fn leaf_names<'a>(layers: &[&'a Layer]) -> Vec<&'a str> {
		layers.iter().filter_map(|l| l.name()).collect()
	}

	#[test]
	fn leaves_in_pre_order() {
		let tree = example_tree();
		assert_eq!(leaf_names(&leaf_layers(&tree)), vec!["a", "b", "c"]);
	}

	#[test]
	fn leaves_are_counted_and_stable() {
		let map = Map::new(vec![
			example_tree().into(),
			Layer::new("d").into(),
			LayerGroup::new("empty", vec![]).into(),
		]);
		let first = leaf_layers(&map);
		assert_eq!(first.len(), 4);
		assert_eq!(leaf_names(&first), leaf_names(&leaf_layers(&map)));
	}

	#[test]
	fn leaves_with_filter() {
		let tree = example_tree();
		assert_eq!(leaf_names(&flatten(&tree, |l| l.name() == Some("c"))), vec!["c"]);
		assert!(flatten(&tree, |_| false).is_empty());
	}

	#[test]
	fn all_layers_lists_groups_after_descendants() {
		let map = Map::new(vec![example_tree().into()]);
		let names: Vec<_> = all_layers(&map, |_| true).iter().filter_map(|n| n.name()).collect();
		assert_eq!(names, vec!["a", "b", "c", "g2", "g1"]);
	}

	#[test]
	fn all_layers_with_filter_on_groups() {
		let tree = example_tree();
		let groups: Vec<_> = all_layers(&tree, LayerNode::is_group).iter().filter_map(|n| n.name()).collect();
		assert_eq!(groups, vec!["g2"]);
	}

	#[test]
	fn empty_collection() {
		assert!(leaf_layers(&Map::default()).is_empty());
		assert!(all_layers(&Map::default(), |_| true).is_empty());
	}

	#[test]
	fn depth_guard_stops_descending() {
		let mut tree = LayerGroup::new("deepest", vec![Layer::new("hidden").into()]);
		for _ in 0..MAX_TREE_DEPTH {
			tree = LayerGroup::unnamed(vec![tree.into()]);
		}
		let root = LayerGroup::new("root", vec![Layer::new("top").into(), tree.into()]);
		assert_eq!(leaf_names(&leaf_layers(&root)), vec!["top"]);

		let names: Vec<_> = all_layers(&root, |_| true).iter().filter_map(|n| n.name()).collect();
		assert_eq!(names, vec!["top"]);
		assert_eq!(all_layers(&root, LayerNode::is_group).len(), MAX_TREE_DEPTH);
	}
}
