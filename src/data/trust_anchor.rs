// self
use crate::_prelude::*;

/// OpenID Federation trust anchor configured for a service.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrustAnchor {
	/// Entity identifier of the trust anchor.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub entity_id: Option<Url>,
	/// JWK Set the anchor signs entity statements with, serialized as a string.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub jwks: Option<String>,
}
impl TrustAnchor {
	/// Creates a trust anchor for an entity identifier.
	pub fn new(entity_id: Url) -> Self {
		Self { entity_id: Some(entity_id), jwks: None }
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn entity_id_round_trips_as_url() {
		let anchor = TrustAnchor::new(
			Url::parse("https://trust.example.com").expect("Fixture URL should parse."),
		);
		let json = serde_json::to_string(&anchor).expect("Trust anchor should serialize.");

		assert!(json.contains("\"entityId\":\"https://trust.example.com/\""));
	}
}
