//! Models for the userinfo endpoint's backing API calls.

// self
use crate::_prelude::*;

/// Request to the service's userinfo API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserInfoRequest {
	/// Access token presented at the userinfo endpoint.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub token: Option<String>,
	/// PEM client certificate, for certificate-bound access tokens.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub client_certificate: Option<String>,
	/// Value of the `DPoP` header presented at the endpoint.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub dpop: Option<String>,
	/// HTTP method of the userinfo request, for DPoP validation.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub htm: Option<String>,
	/// URL of the userinfo endpoint, for DPoP validation.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub htu: Option<String>,
}
impl UserInfoRequest {
	/// Creates a request for the given access token.
	pub fn with_token(token: impl Into<String>) -> Self {
		Self { token: Some(token.into()), ..Self::default() }
	}
}

/// Next step the userinfo endpoint must take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserInfoAction {
	/// Respond `500 Internal Server Error`; `response_content` is a `WWW-Authenticate`
	/// header value.
	InternalServerError,
	/// Respond `400 Bad Request`; `response_content` is a `WWW-Authenticate` header value.
	BadRequest,
	/// Respond `401 Unauthorized`; `response_content` is a `WWW-Authenticate` header
	/// value.
	Unauthorized,
	/// Respond `403 Forbidden`; `response_content` is a `WWW-Authenticate` header value.
	Forbidden,
	/// The token is valid: gather the requested claims and call the userinfo issue API.
	Ok,
}

/// Response from the service's userinfo API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserInfoResponse {
	/// Common result envelope.
	#[serde(flatten)]
	pub result: ApiResult,
	/// Next step for the userinfo endpoint.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub action: Option<UserInfoAction>,
	/// `WWW-Authenticate` header value to emit on error actions; opaque pass-through.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub response_content: Option<String>,

	/// Numeric identifier of the client the token was issued to.
	pub client_id: i64,
	/// Subject the token is bound to.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub subject: Option<String>,
	/// Scopes covered by the token.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub scopes: Vec<String>,
	/// Names of claims the client requested at authorization time.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub claims: Vec<String>,
	/// The access token, echoed back.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub token: Option<String>,
	/// Properties attached to the token at issue time.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub properties: Vec<Property>,
}

/// Request to the userinfo issue API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserInfoIssueRequest {
	/// Access token presented at the userinfo endpoint.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub token: Option<String>,
	/// Claim values of the end user, as a JSON object serialized into a string.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub claims: Option<String>,
	/// Value used as the `sub` claim when it should differ from the token's subject.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub sub: Option<String>,
}

/// Next step after calling the userinfo issue API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserInfoIssueAction {
	/// Respond `500 Internal Server Error`; `response_content` is a `WWW-Authenticate`
	/// header value.
	InternalServerError,
	/// Respond `400 Bad Request`; `response_content` is a `WWW-Authenticate` header value.
	BadRequest,
	/// Respond `401 Unauthorized`; `response_content` is a `WWW-Authenticate` header
	/// value.
	Unauthorized,
	/// Respond `403 Forbidden`; `response_content` is a `WWW-Authenticate` header value.
	Forbidden,
	/// Respond `200 OK` with `response_content` as `application/json` (plain claims).
	Json,
	/// Respond `200 OK` with `response_content` as `application/jwt` (signed and/or
	/// encrypted claims).
	Jwt,
}

/// Response from the userinfo issue API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserInfoIssueResponse {
	/// Common result envelope.
	#[serde(flatten)]
	pub result: ApiResult,
	/// Next step for the userinfo endpoint.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub action: Option<UserInfoIssueAction>,
	/// Pre-rendered userinfo response, JSON or JWT; opaque pass-through.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub response_content: Option<String>,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn jwt_action_marks_signed_responses() {
		let response = UserInfoIssueResponse {
			action: Some(UserInfoIssueAction::Jwt),
			response_content: Some("eyJhbGciOiJFUzI1NiJ9.e30.sig".into()),
			..Default::default()
		};
		let json = serde_json::to_string(&response).expect("Issue response should serialize.");

		assert!(json.contains("\"action\":\"JWT\""));

		let back: UserInfoIssueResponse =
			serde_json::from_str(&json).expect("Issue response should deserialize.");

		assert_eq!(back, response, "The JWT must pass through byte-for-byte.");
	}
}
