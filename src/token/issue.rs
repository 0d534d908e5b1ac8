// self
use crate::_prelude::*;

/// Request to the token issue API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenIssueRequest {
	/// Ticket issued by the preceding token call.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub ticket: Option<String>,
	/// Subject of the authenticated resource owner.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub subject: Option<String>,
	/// Extra properties to attach to the issued access token.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub properties: Vec<Property>,
	/// Claims to merge into the payload of issued JWT access tokens, as a JSON object
	/// serialized into a string.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub jwt_at_claims: Option<String>,
	/// Representation to use for the new access token instead of a random one.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub access_token: Option<String>,
}
impl TokenIssueRequest {
	/// Creates an issue request from a ticket and the authenticated subject.
	pub fn new(ticket: impl Into<String>, subject: impl Into<String>) -> Self {
		Self { ticket: Some(ticket.into()), subject: Some(subject.into()), ..Self::default() }
	}
}

/// Next step after calling the token issue API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenIssueAction {
	/// Respond `500 Internal Server Error` with `response_content` as `application/json`.
	InternalServerError,
	/// Respond `200 OK` with `response_content` as `application/json`.
	Ok,
}

/// Response from the token issue API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenIssueResponse {
	/// Common result envelope.
	#[serde(flatten)]
	pub result: ApiResult,
	/// Next step for the token endpoint.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub action: Option<TokenIssueAction>,
	/// Pre-rendered success response; opaque pass-through.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub response_content: Option<String>,
	/// Newly issued access token.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub access_token: Option<String>,
	/// Expiry of the access token, in milliseconds since the Unix epoch.
	pub access_token_expires_at: i64,
	/// Lifetime of the access token, in seconds.
	pub access_token_duration: i64,
	/// Refresh token returned alongside, when refresh-token continuity applies.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub refresh_token: Option<String>,
	/// Expiry of the refresh token, in milliseconds since the Unix epoch.
	pub refresh_token_expires_at: i64,
	/// Lifetime of the refresh token, in seconds.
	pub refresh_token_duration: i64,
	/// The access token in JWT form, when the service is configured to issue one.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub jwt_access_token: Option<String>,
}
impl TokenIssueResponse {
	/// Access token expiry as an [`OffsetDateTime`], when one was issued.
	pub fn access_token_expiry(&self) -> Option<OffsetDateTime> {
		crate::_prelude::epoch_millis_to_datetime(self.access_token_expires_at)
	}
}
