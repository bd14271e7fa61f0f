use crate::{Source, Uid};
use mapindex_core::{Properties, PropertyValue};

/// Name of the property holding the display name of a layer or group.
pub const NAME_PROPERTY: &str = "name";

/// A renderable leaf layer.
///
/// The layer is rendered while the view resolution lies in
/// `[min_resolution, max_resolution)`. Unset bounds default to `0` and infinity.
///
/// Cloning a layer yields a new node with a fresh [`Uid`].
#[derive(Debug, PartialEq)]
pub struct Layer {
	uid: Uid,
	pub properties: Properties,
	pub source: Option<Source>,
	pub min_resolution: f64,
	pub max_resolution: f64,
	pub visible: bool,
}

impl Clone for Layer {
	fn clone(&self) -> Self {
		Self {
			uid: Uid::next(),
			properties: self.properties.clone(),
			source: self.source.clone(),
			min_resolution: self.min_resolution,
			max_resolution: self.max_resolution,
			visible: self.visible,
		}
	}
}

impl Layer {
	pub fn new(name: &str) -> Self {
		let mut layer = Self::unnamed();
		layer.properties.insert(NAME_PROPERTY, name);
		layer
	}

	pub fn unnamed() -> Self {
		Self {
			uid: Uid::next(),
			properties: Properties::new(),
			source: None,
			min_resolution: 0.0,
			max_resolution: f64::INFINITY,
			visible: true,
		}
	}

	#[must_use]
	pub fn with_source(mut self, source: Source) -> Self {
		self.source = Some(source);
		self
	}

	#[must_use]
	pub fn with_resolution_range(mut self, min_resolution: f64, max_resolution: f64) -> Self {
		self.min_resolution = min_resolution;
		self.max_resolution = max_resolution;
		self
	}

	#[must_use]
	pub fn with_property<T>(mut self, key: &str, value: T) -> Self
	where
		PropertyValue: From<T>,
	{
		self.properties.insert(key, value);
		self
	}

	#[must_use]
	pub fn with_visible(mut self, visible: bool) -> Self {
		self.visible = visible;
		self
	}

	pub fn uid(&self) -> Uid {
		self.uid
	}

	pub fn name(&self) -> Option<&str> {
		self.properties.get_str(NAME_PROPERTY)
	}

	pub fn get(&self, key: &str) -> Option<&PropertyValue> {
		self.properties.get(key)
	}
}
