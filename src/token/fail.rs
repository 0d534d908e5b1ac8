// self
use crate::_prelude::*;

/// Reason a token request handed back to the endpoint could not be approved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenFailReason {
	/// Unknown reason; rendered as `server_error`.
	Unknown,
	/// The `username`/`password` pair was invalid; rendered as `invalid_request`.
	InvalidResourceOwnerCredentials,
	/// The request targeted a resource the service does not serve; `invalid_target`.
	InvalidTarget,
}

/// Request to the token fail API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenFailRequest {
	/// Ticket issued by the preceding token call.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub ticket: Option<String>,
	/// Why the request was not approved.
	pub reason: TokenFailReason,
}
impl TokenFailRequest {
	/// Creates a fail request from a ticket and a reason.
	pub fn new(ticket: impl Into<String>, reason: TokenFailReason) -> Self {
		Self { ticket: Some(ticket.into()), reason }
	}
}

/// Next step after calling the token fail API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenFailAction {
	/// Respond `500 Internal Server Error` with `response_content` as `application/json`.
	InternalServerError,
	/// Respond `400 Bad Request` with `response_content` as `application/json`.
	BadRequest,
}

/// Response from the token fail API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenFailResponse {
	/// Common result envelope.
	#[serde(flatten)]
	pub result: ApiResult,
	/// Next step for the token endpoint.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub action: Option<TokenFailAction>,
	/// Pre-rendered error response; opaque pass-through.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub response_content: Option<String>,
}
