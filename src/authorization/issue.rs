// self
use crate::{_prelude::*, data::AuthzDetails};

/// Request to the authorization issue API, ending a flow with a successful response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthorizationIssueRequest {
	/// Ticket issued by the preceding authorization call.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub ticket: Option<String>,
	/// Subject (unique identifier) of the authenticated end user.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub subject: Option<String>,
	/// Value used as the `sub` claim when it should differ from
	/// [`subject`](Self::subject), e.g. a pairwise identifier.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub sub: Option<String>,
	/// Time of the end-user authentication, in seconds since the Unix epoch.
	pub auth_time: i64,
	/// ACR actually satisfied during authentication.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub acr: Option<String>,
	/// Claim values of the end user, as a JSON object serialized into a string.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub claims: Option<String>,
	/// Extra properties to attach to the issued artifacts.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub properties: Vec<Property>,
	/// Scopes to grant, replacing the requested ones when set.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub scopes: Vec<String>,
	/// Authorization details to grant, replacing the requested ones when set.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub authorization_details: Option<AuthzDetails>,
	/// Claims the user consented to, when they differ from the requested set.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub consented_claims: Vec<String>,
	/// Header parameters to merge into the issued ID token's JWS header, as a JSON
	/// object serialized into a string.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub idt_header_params: Option<String>,
	/// Claims to merge into the payload of issued JWT access tokens, as a JSON object
	/// serialized into a string.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub jwt_at_claims: Option<String>,
}
impl AuthorizationIssueRequest {
	/// Creates an issue request from a ticket and the authenticated subject.
	pub fn new(ticket: impl Into<String>, subject: impl Into<String>) -> Self {
		Self { ticket: Some(ticket.into()), subject: Some(subject.into()), ..Self::default() }
	}
}

/// Next step after calling the authorization issue API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthorizationIssueAction {
	/// Respond `500 Internal Server Error` with `response_content` as `application/json`.
	InternalServerError,
	/// Respond `400 Bad Request` with `response_content` as `application/json`.
	BadRequest,
	/// Respond `302 Found` with `response_content` as the `Location` header value.
	Location,
	/// Respond `200 OK` with `response_content` as `text/html` (`form_post`).
	Form,
}

/// Response from the authorization issue API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthorizationIssueResponse {
	/// Common result envelope.
	#[serde(flatten)]
	pub result: ApiResult,
	/// Next step for the authorization endpoint.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub action: Option<AuthorizationIssueAction>,
	/// Pre-rendered success response; opaque pass-through.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub response_content: Option<String>,
	/// Access token, present when the response type included `token`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub access_token: Option<String>,
	/// Expiry of the access token, in milliseconds since the Unix epoch.
	pub access_token_expires_at: i64,
	/// Lifetime of the access token, in seconds.
	pub access_token_duration: i64,
	/// ID token, present when the response type included `id_token`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id_token: Option<String>,
	/// Authorization code, present when the response type included `code`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub authorization_code: Option<String>,
	/// The access token in JWT form, when the service is configured to issue one.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub jwt_access_token: Option<String>,
}
impl AuthorizationIssueResponse {
	/// Access token expiry as an [`OffsetDateTime`], when one was issued.
	pub fn access_token_expiry(&self) -> Option<OffsetDateTime> {
		crate::_prelude::epoch_millis_to_datetime(self.access_token_expires_at)
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros;
	// self
	use super::*;

	#[test]
	fn expiry_helper_converts_epoch_millis() {
		let response = AuthorizationIssueResponse {
			access_token_expires_at: 1_735_689_600_000,
			..Default::default()
		};

		assert_eq!(
			response.access_token_expiry(),
			Some(macros::datetime!(2025-01-01 00:00 UTC))
		);

		let unset = AuthorizationIssueResponse::default();

		assert_eq!(unset.access_token_expiry(), None, "Zero means the field is unset.");
	}

	#[test]
	fn issue_request_round_trips_with_properties() {
		let request = AuthorizationIssueRequest {
			auth_time: 1_700_000_000,
			properties: vec![Property::new("department", "sales").hidden()],
			..AuthorizationIssueRequest::new("ticket-3", "user-1")
		};
		let json = serde_json::to_string(&request).expect("Issue request should serialize.");
		let back: AuthorizationIssueRequest =
			serde_json::from_str(&json).expect("Issue request should deserialize.");

		assert_eq!(back, request);
		assert!(json.contains("\"authTime\":1700000000"));
	}
}
