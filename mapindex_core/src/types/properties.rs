use super::PropertyValue;
use serde::Deserialize;
use std::{collections::BTreeMap, fmt::Debug};

/// Named properties of a layer, group or feature.
#[derive(Clone, Default, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Properties {
	properties: BTreeMap<String, PropertyValue>,
}

impl Properties {
	pub fn new() -> Properties {
		Properties {
			properties: BTreeMap::new(),
		}
	}
	pub fn insert<T>(&mut self, key: &str, value: T)
	where
		PropertyValue: From<T>,
	{
		self.properties.insert(key.to_string(), PropertyValue::from(value));
	}
	pub fn get(&self, key: &str) -> Option<&PropertyValue> {
		self.properties.get(key)
	}
	/// Returns the value of `key` if it is a string.
	pub fn get_str(&self, key: &str) -> Option<&str> {
		self.get(key).and_then(PropertyValue::as_str)
	}
}

impl Debug for Properties {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(self.properties.iter()).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn insert_and_get() {
		let mut properties = Properties::new();
		properties.insert("name", "roads");
		properties.insert("opacity", 0.5);
		properties.insert("name", "rivers");

		assert_eq!(properties.get_str("name"), Some("rivers"));
		assert_eq!(properties.get("opacity"), Some(&PropertyValue::Number(0.5)));
		assert_eq!(properties.get_str("opacity"), None);
		assert_eq!(properties.get("missing"), None);
	}

	#[test]
	fn debug_lists_entries() {
		let mut properties = Properties::new();
		properties.insert("z", 1);
		properties.insert("name", "x");
		assert_eq!(format!("{properties:?}"), r#"{"name": String("x"), "z": Number(1.0)}"#);
	}

	#[test]
	fn deserialize_mapping() {
		let properties: Properties = serde_yaml_ng::from_str("title: Roads\nqueryable: true\nzindex: 3").unwrap();
		assert_eq!(properties.get_str("title"), Some("Roads"));
		assert_eq!(properties.get("queryable"), Some(&PropertyValue::Bool(true)));
		assert_eq!(properties.get("zindex"), Some(&PropertyValue::from(3i64)));
	}
}
