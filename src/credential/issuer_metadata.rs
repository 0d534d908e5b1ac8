// self
use crate::_prelude::*;
use crate::error::parse_stored_map;

/// Credential issuer metadata a service publishes at
/// `/.well-known/openid-credential-issuer`.
///
/// Stored as part of the service configuration. The supported-credentials document is kept
/// as a JSON string and only interpreted on demand through
/// [`credentials_supported_map`](Self::credentials_supported_map).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CredentialIssuerMetadata {
	/// Identifier of the credential issuer.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub credential_issuer: Option<Url>,
	/// Authorization servers the issuer relies on; the issuer itself when empty.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub authorization_servers: Vec<String>,
	/// URL of the credential endpoint.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub credential_endpoint: Option<Url>,
	/// URL of the deferred credential endpoint.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub deferred_credential_endpoint: Option<Url>,
	/// URL of the nonce endpoint.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub nonce_endpoint: Option<Url>,
	/// Supported credential configurations, as a JSON object serialized into a string.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub credentials_supported: Option<String>,
}
impl CredentialIssuerMetadata {
	/// Returns `true` when no field is set.
	pub fn is_empty(&self) -> bool {
		*self == Self::default()
	}

	/// Parses [`credentials_supported`](Self::credentials_supported) into a structured map.
	///
	/// Returns `Ok(None)` when the field is unset and [`Error::MalformedMetadata`] when the
	/// stored blob is not a JSON object; no partial output is ever produced.
	pub fn credentials_supported_map(&self) -> Result<Option<JsonMap<String, JsonValue>>> {
		self.credentials_supported
			.as_deref()
			.map(|raw| parse_stored_map("credentialsSupported", raw))
			.transpose()
	}

	/// Assembles the full metadata document as a JSON object, expanding
	/// [`credentials_supported`](Self::credentials_supported) into
	/// `credential_configurations_supported` and omitting unset fields.
	pub fn to_map(&self) -> Result<JsonMap<String, JsonValue>> {
		let mut map = JsonMap::new();

		if let Some(issuer) = &self.credential_issuer {
			map.insert("credential_issuer".into(), JsonValue::String(issuer.to_string()));
		}
		if !self.authorization_servers.is_empty() {
			map.insert(
				"authorization_servers".into(),
				JsonValue::Array(
					self.authorization_servers.iter().cloned().map(JsonValue::String).collect(),
				),
			);
		}
		if let Some(endpoint) = &self.credential_endpoint {
			map.insert("credential_endpoint".into(), JsonValue::String(endpoint.to_string()));
		}
		if let Some(endpoint) = &self.deferred_credential_endpoint {
			map.insert(
				"deferred_credential_endpoint".into(),
				JsonValue::String(endpoint.to_string()),
			);
		}
		if let Some(endpoint) = &self.nonce_endpoint {
			map.insert("nonce_endpoint".into(), JsonValue::String(endpoint.to_string()));
		}
		if let Some(supported) = self.credentials_supported_map()? {
			map.insert(
				"credential_configurations_supported".into(),
				JsonValue::Object(supported),
			);
		}

		Ok(map)
	}
}

/// Request to the credential issuer metadata API.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CredentialIssuerMetadataRequest {
	/// Whether to pretty-print the rendered metadata document.
	pub pretty: bool,
}

/// Next step after calling the credential issuer metadata API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CredentialIssuerMetadataAction {
	/// Respond `200 OK` with `response_content` as `application/json`.
	Ok,
	/// Respond `404 Not Found`; the service does not act as a credential issuer.
	NotFound,
	/// Respond `500 Internal Server Error` with `response_content` as `application/json`.
	InternalServerError,
}

/// Response from the credential issuer metadata API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CredentialIssuerMetadataResponse {
	/// Common result envelope.
	#[serde(flatten)]
	pub result: ApiResult,
	/// Next step for the metadata endpoint.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub action: Option<CredentialIssuerMetadataAction>,
	/// Pre-rendered metadata document; opaque pass-through.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub response_content: Option<String>,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn metadata() -> CredentialIssuerMetadata {
		CredentialIssuerMetadata {
			credential_issuer: Some(
				Url::parse("https://issuer.example.com").expect("Fixture URL should parse."),
			),
			credential_endpoint: Some(
				Url::parse("https://issuer.example.com/credential")
					.expect("Fixture URL should parse."),
			),
			credentials_supported: Some(
				r#"{"UniversityDegree":{"format":"jwt_vc_json"}}"#.into(),
			),
			..Default::default()
		}
	}

	#[test]
	fn to_map_expands_supported_credentials() {
		let map = metadata().to_map().expect("Assembling well-formed metadata should succeed.");

		assert_eq!(map["credential_issuer"], "https://issuer.example.com/");
		assert_eq!(
			map["credential_configurations_supported"]["UniversityDegree"]["format"],
			"jwt_vc_json"
		);
		assert!(!map.contains_key("nonce_endpoint"), "Unset fields are omitted, not null.");
	}

	#[test]
	fn malformed_supported_credentials_fail_without_partial_output() {
		let broken = CredentialIssuerMetadata {
			credentials_supported: Some("{\"UniversityDegree\":".into()),
			..metadata()
		};

		assert!(broken.credentials_supported_map().is_err());
		assert!(broken.to_map().is_err());
	}

	#[test]
	fn clone_is_field_wise_equal_and_independent() {
		let original = metadata();
		let mut copy = original.clone();

		assert_eq!(copy, original);

		copy.credentials_supported = None;

		assert_ne!(copy, original, "Mutating the copy must not affect the original.");
		assert!(original.credentials_supported.is_some());
	}

	#[test]
	fn default_metadata_is_empty() {
		assert!(CredentialIssuerMetadata::default().is_empty());
		assert!(!metadata().is_empty());
	}
}
