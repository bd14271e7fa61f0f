use crate::Geometry;
use mapindex_core::{Properties, PropertyValue};

/// A vector feature, typically returned by a feature info or WFS request.
///
/// Feature ids follow the `{type name}.{number}` convention of OGC services, e.g. `roads.17`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Feature {
	pub id: Option<String>,
	pub geometry: Option<Geometry>,
	pub properties: Properties,
}

impl Feature {
	pub fn new(geometry: Geometry) -> Self {
		Self {
			id: None,
			geometry: Some(geometry),
			properties: Properties::new(),
		}
	}

	pub fn set_id(&mut self, id: &str) {
		self.id = Some(id.to_string());
	}

	pub fn set_property<T>(&mut self, key: &str, value: T)
	where
		PropertyValue: From<T>,
	{
		self.properties.insert(key, value);
	}
}

/// Resolves the unqualified feature type name a feature belongs to.
pub trait FeatureTypeName {
	fn feature_type_name(&self) -> Option<String>;
}

impl FeatureTypeName for Feature {
	/// Takes the part of the id before the first `.`.
	fn feature_type_name(&self) -> Option<String> {
		let id = self.id.as_deref()?;
		let name = id.split('.').next()?;
		if name.is_empty() { None } else { Some(name.to_string()) }
	}
}
