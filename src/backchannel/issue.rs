// self
use crate::_prelude::*;

/// Request to the backchannel authentication issue API, acknowledging a valid request by
/// returning an `auth_req_id` to the client.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BackchannelAuthenticationIssueRequest {
	/// Ticket issued by the preceding backchannel authentication call.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub ticket: Option<String>,
}
impl BackchannelAuthenticationIssueRequest {
	/// Creates an issue request for a ticket.
	pub fn new(ticket: impl Into<String>) -> Self {
		Self { ticket: Some(ticket.into()) }
	}
}

/// Next step after calling the backchannel authentication issue API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BackchannelAuthenticationIssueAction {
	/// Respond `200 OK` with `response_content` as `application/json`; it carries the
	/// `auth_req_id`, `expires_in`, and (for poll/ping) `interval`.
	Ok,
	/// Respond `500 Internal Server Error` with `response_content` as `application/json`.
	InternalServerError,
	/// The ticket was expired or already consumed; respond `500 Internal Server Error`.
	InvalidTicket,
}

/// Response from the backchannel authentication issue API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BackchannelAuthenticationIssueResponse {
	/// Common result envelope.
	#[serde(flatten)]
	pub result: ApiResult,
	/// Next step for the backchannel authentication endpoint.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub action: Option<BackchannelAuthenticationIssueAction>,
	/// Pre-rendered response body; opaque pass-through.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub response_content: Option<String>,
	/// Issued authentication request ID.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub auth_req_id: Option<String>,
	/// Lifetime of the `auth_req_id`, in seconds.
	pub expires_in: i32,
	/// Minimum polling interval for the token endpoint, in seconds.
	pub interval: i32,
}
