use serde::{Deserialize, Deserializer, de};
use std::fmt::Debug;

/// A scalar value stored in the named properties of a layer, group or feature.
///
/// All numbers share one variant, so `3`, `3u64` and `3.0` compare equal no matter
/// whether they were written in a scene file or passed in by the caller.
#[derive(Clone, PartialEq)]
pub enum PropertyValue {
	Bool(bool),
	Null,
	Number(f64),
	String(String),
}

impl Debug for PropertyValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
			Self::Null => f.write_str("Null"),
			Self::Number(v) => f.debug_tuple("Number").field(v).finish(),
			Self::String(v) => f.debug_tuple("String").field(v).finish(),
		}
	}
}

impl From<&str> for PropertyValue {
	fn from(value: &str) -> Self {
		PropertyValue::String(value.to_string())
	}
}

impl From<&String> for PropertyValue {
	fn from(value: &String) -> Self {
		PropertyValue::String(value.clone())
	}
}

impl From<String> for PropertyValue {
	fn from(value: String) -> Self {
		PropertyValue::String(value)
	}
}

impl From<bool> for PropertyValue {
	fn from(value: bool) -> Self {
		PropertyValue::Bool(value)
	}
}

macro_rules! number_from {
	($($t:ty),*) => {$(
		impl From<$t> for PropertyValue {
			fn from(value: $t) -> Self {
				PropertyValue::Number(value as f64)
			}
		}
	)*};
}

number_from!(i32, u32, i64, u64, f32);

impl From<f64> for PropertyValue {
	fn from(value: f64) -> Self {
		PropertyValue::Number(value)
	}
}

impl PropertyValue {
	pub fn as_str(&self) -> Option<&str> {
		match self {
			PropertyValue::String(v) => Some(v),
			_ => None,
		}
	}
}

impl<'de> Deserialize<'de> for PropertyValue {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		struct ValueVisitor;

		impl de::Visitor<'_> for ValueVisitor {
			type Value = PropertyValue;

			fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
				f.write_str("a scalar property value")
			}
			fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
				Ok(PropertyValue::Bool(v))
			}
			fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
				Ok(PropertyValue::from(v))
			}
			fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
				Ok(PropertyValue::from(v))
			}
			fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
				Ok(PropertyValue::Number(v))
			}
			fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
				Ok(PropertyValue::from(v))
			}
			fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
				Ok(PropertyValue::String(v))
			}
			fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
				Ok(PropertyValue::Null)
			}
			fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
				Ok(PropertyValue::Null)
			}
		}

		deserializer.deserialize_any(ValueVisitor)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	#[rstest]
	#[case(PropertyValue::from(3i32))]
	#[case(PropertyValue::from(3u32))]
	#[case(PropertyValue::from(3i64))]
	#[case(PropertyValue::from(3u64))]
	#[case(PropertyValue::from(3.0))]
	fn integers_and_floats_compare_equal(#[case] value: PropertyValue) {
		assert_eq!(value, PropertyValue::Number(3.0));
	}

	#[test]
	fn nan_never_matches() {
		assert_ne!(PropertyValue::from(f64::NAN), PropertyValue::from(f64::NAN));
	}

	#[test]
	fn variants_do_not_coerce() {
		assert_ne!(PropertyValue::from("1"), PropertyValue::from(1));
		assert_ne!(PropertyValue::from(true), PropertyValue::from(1));
		assert_eq!(PropertyValue::from("x").as_str(), Some("x"));
		assert_eq!(PropertyValue::from(3).as_str(), None);
	}

	#[test]
	fn deserialize_scalars() {
		let values: Vec<PropertyValue> = serde_yaml_ng::from_str("[true, 12, -4, 0.5, text, ~]").unwrap();
		assert_eq!(
			values,
			vec![
				PropertyValue::Bool(true),
				PropertyValue::Number(12.0),
				PropertyValue::Number(-4.0),
				PropertyValue::Number(0.5),
				PropertyValue::from("text"),
				PropertyValue::Null,
			]
		);
	}
}
