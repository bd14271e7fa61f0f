use super::MAX_TREE_DEPTH;
use mapindex_scene::{LayerCollection, LayerGroup, LayerNode, Uid};

/// Where a node sits among its siblings: the group owning it and its index in that group.
#[derive(Clone, Copy, Debug)]
pub struct PositionInfo<'a> {
	pub group: &'a LayerGroup,
	pub index: usize,
}

impl PartialEq for PositionInfo<'_> {
	fn eq(&self, other: &Self) -> bool {
		self.group.uid() == other.group.uid() && self.index == other.index
	}
}

/// Finds the group that directly contains the node with identifier `uid`, searching the whole
/// subtree of `root`.
///
/// Immediate children of a group are checked before its subgroups are searched, and subgroups
/// are searched in order; the first match wins. Returns `None` if the node is not part of the
/// subtree.
///
/// # Examples
///
/// ```
/// use mapindex::{position_info, scene::{Layer, LayerGroup}};
///
/// let c = Layer::new("c");
/// let uid = c.uid();
/// let tree = LayerGroup::new("g1", vec![
///     Layer::new("a").into(),
///     LayerGroup::new("g2", vec![Layer::new("b").into(), c.into()]).into(),
/// ]);
///
/// let info = position_info(&tree, uid).unwrap();
/// assert_eq!(info.group.name(), Some("g2"));
/// assert_eq!(info.index, 1);
/// ```
pub fn position_info<C>(root: &C, uid: Uid) -> Option<PositionInfo<'_>>
where
	C: LayerCollection + ?Sized,
{
	find_position(root.layer_group(), uid, 0)
}

fn find_position(group: &LayerGroup, uid: Uid, depth: usize) -> Option<PositionInfo<'_>> {
	if depth >= MAX_TREE_DEPTH {
		log::warn!("layer tree is nested deeper than {MAX_TREE_DEPTH} levels, skipping group {}", group.uid());
		return None;
	}

	if let Some(index) = group.layers().iter().position(|node| node.uid() == uid) {
		return Some(PositionInfo { group, index });
	}

	group
		.layers()
		.iter()
		.filter_map(LayerNode::as_group)
		.find_map(|child| find_position(child, uid, depth + 1))
}
