// self
use crate::_prelude::*;

/// Plain key/value pair used for service, client, and scope attributes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pair {
	/// Attribute key.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub key: Option<String>,
	/// Attribute value.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub value: Option<String>,
}
impl Pair {
	/// Creates a pair from a key and a value.
	pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
		Self { key: Some(key.into()), value: Some(value.into()) }
	}
}

/// String value qualified by a language tag (BCP 47), used for localized client names and
/// scope descriptions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaggedValue {
	/// Language tag, e.g. `ja` or `fr-CA`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tag: Option<String>,
	/// Value for the tagged language.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub value: Option<String>,
}
impl TaggedValue {
	/// Creates a tagged value.
	pub fn new(tag: impl Into<String>, value: impl Into<String>) -> Self {
		Self { tag: Some(tag.into()), value: Some(value.into()) }
	}
}
