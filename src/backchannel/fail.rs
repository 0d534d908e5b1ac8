// self
use crate::_prelude::*;

/// Reason a backchannel authentication request could not proceed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BackchannelAuthenticationFailReason {
	/// The `login_hint_token` has expired; rendered as `expired_login_hint_token`.
	ExpiredLoginHintToken,
	/// The hint identified no user; rendered as `unknown_user_id`.
	UnknownUserId,
	/// The client may not use the CIBA flow; rendered as `unauthorized_client`.
	UnauthorizedClient,
	/// A required user code is missing; rendered as `missing_user_code`.
	MissingUserCode,
	/// The supplied user code is wrong; rendered as `invalid_user_code`.
	InvalidUserCode,
	/// The supplied binding message is unacceptable; rendered as
	/// `invalid_binding_message`.
	InvalidBindingMessage,
	/// The request targeted a resource the service does not serve; `invalid_target`.
	InvalidTarget,
	/// The end user denied the request; rendered as `access_denied`.
	AccessDenied,
	/// A server-side error occurred; rendered as `server_error`.
	ServerError,
}

/// Request to the backchannel authentication fail API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackchannelAuthenticationFailRequest {
	/// Ticket issued by the preceding backchannel authentication call.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub ticket: Option<String>,
	/// Why the request could not proceed.
	pub reason: BackchannelAuthenticationFailReason,
	/// Custom description embedded as `error_description`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub error_description: Option<String>,
	/// URI embedded as `error_uri`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub error_uri: Option<Url>,
}
impl BackchannelAuthenticationFailRequest {
	/// Creates a fail request from a ticket and a reason.
	pub fn new(ticket: impl Into<String>, reason: BackchannelAuthenticationFailReason) -> Self {
		Self { ticket: Some(ticket.into()), reason, error_description: None, error_uri: None }
	}
}

/// Next step after calling the backchannel authentication fail API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BackchannelAuthenticationFailAction {
	/// Respond `400 Bad Request` with `response_content` as `application/json`.
	BadRequest,
	/// Respond `403 Forbidden` with `response_content` as `application/json`.
	Forbidden,
	/// Respond `500 Internal Server Error` with `response_content` as `application/json`.
	InternalServerError,
}

/// Response from the backchannel authentication fail API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BackchannelAuthenticationFailResponse {
	/// Common result envelope.
	#[serde(flatten)]
	pub result: ApiResult,
	/// Next step for the backchannel authentication endpoint.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub action: Option<BackchannelAuthenticationFailAction>,
	/// Pre-rendered error response; opaque pass-through.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub response_content: Option<String>,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn fail_reasons_serialize_by_name() {
		assert_eq!(
			serde_json::to_string(&BackchannelAuthenticationFailReason::ExpiredLoginHintToken)
				.expect("Reason should serialize."),
			"\"EXPIRED_LOGIN_HINT_TOKEN\""
		);
		assert_eq!(
			serde_json::from_str::<BackchannelAuthenticationFailReason>("\"ACCESS_DENIED\"")
				.expect("Reason should deserialize by name."),
			BackchannelAuthenticationFailReason::AccessDenied
		);
	}
}
