// self
use crate::_prelude::*;

/// Reason an authorization request could not be approved.
///
/// The reason decides the `error` code embedded in the response the service renders, e.g.
/// [`Denied`](Self::Denied) maps to `access_denied` and
/// [`NotLoggedIn`](Self::NotLoggedIn) to `login_required`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthorizationFailReason {
	/// Unknown reason; rendered as `server_error`.
	Unknown,
	/// `prompt=none` but the end user has no active session; `login_required`.
	NotLoggedIn,
	/// `prompt=none` but the session is older than `max_age`; `login_required`.
	MaxAgeNotSatisfied,
	/// The authenticated user differs from the subject the request requires;
	/// `login_required`.
	DifferentSubject,
	/// None of the required ACRs could be satisfied; `login_required`.
	AcrNotSatisfied,
	/// The end user denied the request; `access_denied`.
	Denied,
	/// A server-side error occurred; `server_error`.
	ServerError,
	/// The end user was not authenticated; `login_required`.
	NotAuthenticated,
	/// `prompt=select_account` could not be honored; `account_selection_required`.
	AccountSelectionRequired,
	/// `prompt=none` but consent is missing; `consent_required`.
	ConsentRequired,
	/// `prompt=none` but interaction is needed; `interaction_required`.
	InteractionRequired,
	/// The request targeted a resource the service does not serve; `invalid_target`.
	InvalidTarget,
}

/// Request to the authorization fail API, ending a flow with an error response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationFailRequest {
	/// Ticket issued by the preceding authorization call.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub ticket: Option<String>,
	/// Why the request was not approved.
	pub reason: AuthorizationFailReason,
	/// Custom description embedded as `error_description`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
}
impl AuthorizationFailRequest {
	/// Creates a fail request from a ticket and a reason.
	pub fn new(ticket: impl Into<String>, reason: AuthorizationFailReason) -> Self {
		Self { ticket: Some(ticket.into()), reason, description: None }
	}

	/// Attaches a human-readable description.
	pub fn description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());

		self
	}
}

/// Next step after calling the authorization fail API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthorizationFailAction {
	/// Respond `500 Internal Server Error` with `response_content` as `application/json`.
	InternalServerError,
	/// Respond `400 Bad Request` with `response_content` as `application/json`.
	BadRequest,
	/// Respond `302 Found` with `response_content` as the `Location` header value.
	Location,
	/// Respond `200 OK` with `response_content` as `text/html` (`form_post`).
	Form,
}

/// Response from the authorization fail API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthorizationFailResponse {
	/// Common result envelope.
	#[serde(flatten)]
	pub result: ApiResult,
	/// Next step for the authorization endpoint.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub action: Option<AuthorizationFailAction>,
	/// Pre-rendered error response; opaque pass-through.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub response_content: Option<String>,
}
