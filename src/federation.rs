//! Models for the OpenID Federation surface: entity configuration publication and explicit
//! client registration.

// self
use crate::_prelude::*;

/// Request to the federation configuration API, which renders the service's entity
/// configuration as a signed JWT.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FederationConfigurationRequest {
	/// Entity types to include in the configuration; all configured types when empty.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub entity_types: Vec<String>,
}

/// Next step after calling the federation configuration API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FederationConfigurationAction {
	/// Respond `200 OK` with `response_content` as `application/entity-statement+jwt`.
	Ok,
	/// Respond `404 Not Found`; the service does not participate in a federation.
	NotFound,
	/// Respond `500 Internal Server Error` with `response_content` as `application/json`.
	InternalServerError,
}

/// Response from the federation configuration API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FederationConfigurationResponse {
	/// Common result envelope.
	#[serde(flatten)]
	pub result: ApiResult,
	/// Next step for the federation endpoint.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub action: Option<FederationConfigurationAction>,
	/// The entity configuration JWT; opaque pass-through, never parsed locally.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub response_content: Option<String>,
}

/// Request to the federation registration API (explicit client registration).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FederationRegistrationRequest {
	/// Entity configuration of the registering relying party, as a signed JWT.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub entity_configuration: Option<String>,
	/// Trust chain from the relying party to a configured trust anchor, as a list of
	/// entity statement JWTs.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub trust_chain: Vec<String>,
}

/// Next step after calling the federation registration API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FederationRegistrationAction {
	/// Respond `200 OK` with `response_content` as `application/jose`.
	Ok,
	/// Respond `400 Bad Request` with `response_content` as `application/json`.
	BadRequest,
	/// Respond `500 Internal Server Error` with `response_content` as `application/json`.
	InternalServerError,
}

/// Response from the federation registration API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FederationRegistrationResponse {
	/// Common result envelope.
	#[serde(flatten)]
	pub result: ApiResult,
	/// Next step for the federation endpoint.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub action: Option<FederationRegistrationAction>,
	/// Pre-rendered response body; opaque pass-through.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub response_content: Option<String>,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn entity_configuration_jwt_is_opaque() {
		let jwt = "eyJhbGciOiJSUzI1NiJ9.eyJpc3MiOiJodHRwczovL2FzLmV4YW1wbGUuY29tIn0.sig";
		let response = FederationConfigurationResponse {
			action: Some(FederationConfigurationAction::Ok),
			response_content: Some(jwt.into()),
			..Default::default()
		};
		let json =
			serde_json::to_string(&response).expect("Federation response should serialize.");
		let back: FederationConfigurationResponse =
			serde_json::from_str(&json).expect("Federation response should deserialize.");

		assert_eq!(back.response_content.as_deref(), Some(jwt));
	}
}
