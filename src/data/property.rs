// self
use crate::_prelude::*;

/// Arbitrary key/value pair attached to an access token when it is issued.
///
/// Hidden properties are stored with the token but never exposed to the client application
/// through introspection or the token response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Property {
	/// Property key.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub key: Option<String>,
	/// Property value.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub value: Option<String>,
	/// Whether the property is kept server-side only.
	pub hidden: bool,
}
impl Property {
	/// Creates a visible property from a key and a value.
	pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
		Self { key: Some(key.into()), value: Some(value.into()), hidden: false }
	}

	/// Marks the property as hidden from the client application.
	pub fn hidden(mut self) -> Self {
		self.hidden = true;

		self
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn hidden_flag_defaults_to_false_on_the_wire() {
		let property: Property = serde_json::from_str(r#"{"key":"k","value":"v"}"#)
			.expect("Property without hidden flag should deserialize.");

		assert!(!property.hidden);
		assert_eq!(property, Property::new("k", "v"));
	}

	#[test]
	fn hidden_builder_chains() {
		let property = Property::new("internal", "yes").hidden();

		assert!(property.hidden);
	}
}
