//! Models for the authorization endpoint's backing API calls.
//!
//! An authorization server forwards the query/form parameters of each incoming
//! authorization request to the service's `/auth/authorization` API, shows UI as instructed
//! by the response, and then finishes the flow with either the
//! [fail](crate::authorization::fail) or [issue](crate::authorization::issue) call, quoting
//! the `ticket` issued here.

/// Models for `/auth/authorization/fail`.
pub mod fail;
/// Models for `/auth/authorization/issue`.
pub mod issue;

pub use fail::*;
pub use issue::*;

// self
use crate::{
	_prelude::*,
	data::{AuthzDetails, DynamicScope, Grant, Scope},
};

/// Request to the service's authorization API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthorizationRequest {
	/// Raw query or form parameters of the client's authorization request,
	/// `application/x-www-form-urlencoded`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub parameters: Option<String>,
	/// Arbitrary context string echoed back in the response.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub context: Option<String>,
}
impl AuthorizationRequest {
	/// Creates a request carrying the client's raw authorization parameters.
	pub fn with_parameters(parameters: impl Into<String>) -> Self {
		Self { parameters: Some(parameters.into()), context: None }
	}
}

/// Next step the authorization endpoint implementation must take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthorizationAction {
	/// Respond `500 Internal Server Error` with `response_content` as
	/// `application/json`.
	InternalServerError,
	/// Respond `400 Bad Request` with `response_content` as `application/json`.
	BadRequest,
	/// Respond `302 Found` with `response_content` as the `Location` header value.
	Location,
	/// Respond `200 OK` with `response_content` as `text/html`; the body is a
	/// self-submitting form implementing the `form_post` response mode.
	Form,
	/// No user interaction is allowed (`prompt=none`); decide locally whether the
	/// request can be approved and call the issue or fail API.
	NoInteraction,
	/// Interact with the end user: authenticate, gather consent, then call the
	/// issue or fail API.
	Interaction,
}

/// Response from the service's authorization API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthorizationResponse {
	/// Common result envelope.
	#[serde(flatten)]
	pub result: ApiResult,
	/// Next step for the authorization endpoint.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub action: Option<AuthorizationAction>,
	/// Ticket quoted by the subsequent fail/issue call.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub ticket: Option<String>,
	/// Pre-rendered response body or `Location` value; opaque pass-through.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub response_content: Option<String>,

	/// Numeric client identifier assigned by the service.
	pub client_id: i64,
	/// Client-chosen alias for the numeric identifier.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub client_id_alias: Option<String>,
	/// Whether the client used its alias in this request.
	pub client_id_alias_used: bool,
	/// Display name of the client.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub client_name: Option<String>,

	/// Scopes named by the request, resolved against the service's registry.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub scopes: Vec<Scope>,
	/// Dynamic scopes matched by the request.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub dynamic_scopes: Vec<DynamicScope>,
	/// Claims requested for the ID token or userinfo response.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub claims: Vec<String>,
	/// Requested claim locales.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub claims_locales: Vec<String>,
	/// ACR values the request requires, in preference order.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub acrs: Vec<String>,
	/// Whether one of [`acrs`](Self::acrs) must be satisfied (`acr` as essential claim).
	pub acr_essential: bool,
	/// Maximum allowed elapsed time since the last authentication, in seconds.
	/// `0` means no constraint.
	pub max_age: i64,
	/// Subject the request requires (`id_token_hint`/`claims` constraint).
	#[serde(skip_serializing_if = "Option::is_none")]
	pub subject: Option<String>,
	/// Login hint contained in the request.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub login_hint: Option<String>,
	/// Values of the `prompt` parameter.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub prompts: Vec<Prompt>,
	/// Resource indicators contained in the request.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub resources: Vec<Url>,
	/// RFC 9396 authorization details contained in the request.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub authorization_details: Option<AuthzDetails>,
	/// Stated purpose of the request (OpenID Connect for Identity Assurance).
	#[serde(skip_serializing_if = "Option::is_none")]
	pub purpose: Option<String>,
	/// Grant ID named by the `grant_id` request parameter.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub grant_id: Option<String>,
	/// Contents of the grant named by `grant_id`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub grant: Option<Grant>,
	/// Payload of the request object, when one was used, as a JSON string.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub request_object_payload: Option<String>,
}
impl AuthorizationResponse {
	/// String form of the client identifier: the alias when the client used one, otherwise
	/// the decimal form of the numeric identifier.
	pub fn client_identifier(&self) -> String {
		match (&self.client_id_alias, self.client_id_alias_used) {
			(Some(alias), true) => alias.clone(),
			_ => self.client_id.to_string(),
		}
	}
}

/// Values of the OpenID Connect `prompt` request parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Prompt {
	/// No UI may be shown.
	None,
	/// Re-authenticate the end user.
	Login,
	/// Re-obtain consent.
	Consent,
	/// Offer account selection.
	SelectAccount,
	/// Prompt account creation (OpenID Connect Prompt Create).
	Create,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn client_identifier_prefers_alias_only_when_used() {
		let mut response = AuthorizationResponse {
			client_id: 26478243745571,
			client_id_alias: Some("my-app".into()),
			client_id_alias_used: true,
			..Default::default()
		};

		assert_eq!(response.client_identifier(), "my-app");

		response.client_id_alias_used = false;

		assert_eq!(response.client_identifier(), "26478243745571");
	}

	#[test]
	fn action_names_are_wire_contract() {
		assert_eq!(
			serde_json::to_string(&AuthorizationAction::NoInteraction)
				.expect("Action should serialize."),
			"\"NO_INTERACTION\""
		);
		assert_eq!(
			serde_json::from_str::<AuthorizationAction>("\"INTERNAL_SERVER_ERROR\"")
				.expect("Action should deserialize by name."),
			AuthorizationAction::InternalServerError
		);
	}

	#[test]
	fn envelope_flattens_into_the_payload() {
		let json = r#"{
			"resultCode": "A004001",
			"resultMessage": "ok",
			"action": "INTERACTION",
			"ticket": "ticket-1",
			"clientId": 42,
			"maxAge": 86400,
			"prompts": ["LOGIN", "CONSENT"]
		}"#;
		let response: AuthorizationResponse =
			serde_json::from_str(json).expect("Authorization response should deserialize.");

		assert_eq!(response.result.result_code.as_deref(), Some("A004001"));
		assert_eq!(response.action, Some(AuthorizationAction::Interaction));
		assert_eq!(response.max_age, 86400);
		assert_eq!(response.prompts, vec![Prompt::Login, Prompt::Consent]);
	}
}
