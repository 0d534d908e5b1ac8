// self
use crate::_prelude::*;
use crate::error::parse_stored_map;

/// Collection of RFC 9396 authorization detail elements.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthzDetails {
	/// Elements of the `authorization_details` array.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub elements: Vec<AuthzDetailsElement>,
}
impl AuthzDetails {
	/// Wraps a list of elements.
	pub fn new(elements: Vec<AuthzDetailsElement>) -> Self {
		Self { elements }
	}
}

/// Single element of an RFC 9396 `authorization_details` array.
///
/// The common fields defined by the RFC are typed; any additional type-specific fields the
/// client sent are preserved verbatim in [`other_fields`](Self::other_fields) as a JSON
/// object serialized into a string.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthzDetailsElement {
	/// Authorization detail type. RFC 9396 requires this field.
	#[serde(rename = "type", skip_serializing_if = "Option::is_none")]
	pub kind: Option<String>,
	/// Resource locations.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub locations: Vec<String>,
	/// Actions the client requests at the resource.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub actions: Vec<String>,
	/// Data types the client requests access to.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub datatypes: Vec<String>,
	/// Identifier of the targeted resource.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub identifier: Option<String>,
	/// Privilege levels requested.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub privileges: Vec<String>,
	/// Type-specific fields not covered above, as a JSON object serialized into a string.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub other_fields: Option<String>,
}
impl AuthzDetailsElement {
	/// Parses [`other_fields`](Self::other_fields) into a structured map.
	///
	/// Returns `Ok(None)` when the field is unset and [`Error::MalformedMetadata`] when the
	/// stored blob is not a JSON object.
	pub fn other_fields_map(&self) -> Result<Option<JsonMap<String, JsonValue>>> {
		self.other_fields
			.as_deref()
			.map(|raw| parse_stored_map("otherFields", raw))
			.transpose()
	}

	/// Flattens the element into a single JSON object, merging the typed fields with the
	/// contents of [`other_fields`](Self::other_fields).
	///
	/// Unset fields are omitted rather than emitted as `null`.
	pub fn to_map(&self) -> Result<JsonMap<String, JsonValue>> {
		let mut map = match serde_json::to_value(self) {
			Ok(JsonValue::Object(map)) => map,
			// Serializing a plain struct always yields an object.
			_ => JsonMap::new(),
		};

		map.remove("otherFields");

		if let Some(other) = self.other_fields_map()? {
			for (key, value) in other {
				map.entry(key).or_insert(value);
			}
		}

		Ok(map)
	}
}
