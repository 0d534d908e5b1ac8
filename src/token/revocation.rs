// self
use crate::_prelude::*;

/// Request to the token revocation API (RFC 7009).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RevocationRequest {
	/// Raw form parameters of the client's revocation request,
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
}
impl RevocationRequest {
	/// Creates a request carrying the client's raw revocation parameters.
	pub fn with_parameters(parameters: impl Into<String>) -> Self {
		Self { parameters: Some(parameters.into()), ..Self::default() }
	}
}

/// Next step the revocation endpoint implementation must take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RevocationAction {
	/// Respond `500 Internal Server Error` with `response_content` as `application/json`.
	InternalServerError,
	/// Respond `401 Unauthorized` with `response_content` as `application/json` and a
	/// `WWW-Authenticate` challenge; client authentication failed.
	InvalidClient,
	/// Respond `400 Bad Request` with `response_content` as `application/json`.
	BadRequest,
	/// Respond `200 OK` with an empty body; the token is gone (RFC 7009 §2.2).
	Ok,
}

/// Response from the token revocation API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RevocationResponse {
	/// Common result envelope.
	#[serde(flatten)]
	pub result: ApiResult,
	/// Next step for the revocation endpoint.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub action: Option<RevocationAction>,
	/// Pre-rendered error response; opaque pass-through. Unset for `OK`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub response_content: Option<String>,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn ok_response_has_no_content() {
		let response: RevocationResponse = serde_json::from_str(r#"{"action":"OK"}"#)
			.expect("Revocation response should deserialize.");

		assert_eq!(response.action, Some(RevocationAction::Ok));
		assert!(response.response_content.is_none());
	}
}
