//! Models for the pushed authorization request endpoint (RFC 9126).

// self
use crate::_prelude::*;

/// Request to the service's PAR API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PushedAuthReqRequest {
	/// Raw form parameters of the client's pushed authorization request,
	/// `application/x-www-form-urlencoded`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub parameters: Option<String>,
	/// Client ID extracted from the `Authorization` header, when Basic auth was used.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub client_id: Option<String>,
	/// Client secret extracted from the `Authorization` header.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub client_secret: Option<String>,
	/// PEM client certificate used for mutual TLS, when presented.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub client_certificate: Option<String>,
	/// Certificate path presented alongside the client certificate.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub client_certificate_path: Vec<String>,
	/// Value of the `DPoP` header, passed through for proof validation by the service.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub dpop: Option<String>,
	/// HTTP method of the PAR request, for DPoP validation.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub htm: Option<String>,
	/// URL of the PAR endpoint, for DPoP validation.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub htu: Option<String>,
}
impl PushedAuthReqRequest {
	/// Creates a request carrying the client's raw pushed parameters.
	pub fn with_parameters(parameters: impl Into<String>) -> Self {
		Self { parameters: Some(parameters.into()), ..Self::default() }
	}
}

/// Next step the PAR endpoint implementation must take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PushedAuthReqAction {
	/// Respond `201 Created` with `response_content` as `application/json`.
	Created,
	/// Respond `400 Bad Request` with `response_content` as `application/json`.
	BadRequest,
	/// Respond `401 Unauthorized` with `response_content` as `application/json` and a
	/// `WWW-Authenticate` challenge.
	Unauthorized,
	/// Respond `403 Forbidden` with `response_content` as `application/json`.
	Forbidden,
	/// Respond `413 Payload Too Large` with `response_content` as `application/json`.
	PayloadTooLarge,
	/// Respond `500 Internal Server Error` with `response_content` as `application/json`.
	InternalServerError,
}

/// Response from the service's PAR API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PushedAuthReqResponse {
	/// Common result envelope.
	#[serde(flatten)]
	pub result: ApiResult,
	/// Next step for the PAR endpoint.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub action: Option<PushedAuthReqAction>,
	/// Pre-rendered response body; opaque pass-through.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub response_content: Option<String>,
	/// Request URI registered for the pushed parameters, quoted by the subsequent
	/// authorization request.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub request_uri: Option<Url>,
	/// Nonce the client must use in its next DPoP proof, when the service demands one.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub dpop_nonce: Option<String>,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn created_response_carries_urn_request_uri() {
		let json = r#"{
			"action": "CREATED",
			"requestUri": "urn:ietf:params:oauth:request_uri:abc123",
			"responseContent": "{\"request_uri\":\"urn:ietf:params:oauth:request_uri:abc123\",\"expires_in\":600}"
		}"#;
		let response: PushedAuthReqResponse =
			serde_json::from_str(json).expect("PAR response should deserialize.");

		assert_eq!(response.action, Some(PushedAuthReqAction::Created));
		assert_eq!(
			response.request_uri.as_ref().map(Url::as_str),
			Some("urn:ietf:params:oauth:request_uri:abc123")
		);
	}

	#[test]
	fn payload_too_large_is_a_distinct_action() {
		assert_eq!(
			serde_json::to_string(&PushedAuthReqAction::PayloadTooLarge)
				.expect("Action should serialize."),
			"\"PAYLOAD_TOO_LARGE\""
		);
	}
}
