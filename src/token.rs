//! Models for the token endpoint's backing API calls.
//!
//! The token endpoint forwards the client's form parameters (plus any client
//! authentication material) to the service's `/auth/token` API. Most grants finish in that
//! single call; the Resource Owner Password Credentials grant returns
//! [`Password`](TokenAction::Password) and hands validation back to the endpoint, which
//! then calls the [issue](crate::token::issue) or [fail](crate::token::fail) API with the
//! `ticket`.

/// Models for `/auth/token/fail`.
pub mod fail;
/// Models for `/auth/token/issue`.
pub mod issue;
/// Models for `/auth/revocation`.
pub mod revocation;

pub use fail::*;
pub use issue::*;
pub use revocation::*;

// self
use crate::{_prelude::*, data::AuthzDetails};

/// Request to the service's token API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenRequest {
	/// Raw form parameters of the client's token request,
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
	/// Extra properties to attach to any token issued by this call.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub properties: Vec<Property>,
	/// Value of the `DPoP` header, passed through for proof validation by the service.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub dpop: Option<String>,
	/// HTTP method of the token request, for DPoP validation.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub htm: Option<String>,
	/// URL of the token endpoint, for DPoP validation.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub htu: Option<String>,
	/// Claims to merge into the payload of issued JWT access tokens, as a JSON object
	/// serialized into a string.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub jwt_at_claims: Option<String>,
}
impl TokenRequest {
	/// Creates a request carrying the client's raw token-request parameters.
	pub fn with_parameters(parameters: impl Into<String>) -> Self {
		Self { parameters: Some(parameters.into()), ..Self::default() }
	}
}

/// Next step the token endpoint implementation must take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenAction {
	/// Respond `401 Unauthorized` with `response_content` as `application/json` and a
	/// `WWW-Authenticate` challenge; client authentication failed.
	InvalidClient,
	/// Respond `500 Internal Server Error` with `response_content` as `application/json`.
	InternalServerError,
	/// Respond `400 Bad Request` with `response_content` as `application/json`.
	BadRequest,
	/// Resource Owner Password Credentials grant: validate the `username`/`password`
	/// pair, then call the token issue or token fail API with the `ticket`.
	Password,
	/// Respond `200 OK` with `response_content` as `application/json`.
	Ok,
	/// RFC 8693 Token Exchange: process the exchange locally, then act on the ticket.
	TokenExchange,
	/// RFC 7523 JWT Bearer grant: verify the assertion locally, then act on the ticket.
	JwtBearer,
}

/// Response from the service's token API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenResponse {
	/// Common result envelope.
	#[serde(flatten)]
	pub result: ApiResult,
	/// Next step for the token endpoint.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub action: Option<TokenAction>,
	/// Pre-rendered response body; opaque pass-through.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub response_content: Option<String>,
	/// Ticket for the follow-up issue/fail call (`PASSWORD`, `TOKEN_EXCHANGE`,
	/// `JWT_BEARER`).
	#[serde(skip_serializing_if = "Option::is_none")]
	pub ticket: Option<String>,
	/// `username` request parameter (Resource Owner Password Credentials).
	#[serde(skip_serializing_if = "Option::is_none")]
	pub username: Option<String>,
	/// `password` request parameter (Resource Owner Password Credentials).
	#[serde(skip_serializing_if = "Option::is_none")]
	pub password: Option<String>,

	/// Newly issued access token.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub access_token: Option<String>,
	/// Expiry of the access token, in milliseconds since the Unix epoch.
	pub access_token_expires_at: i64,
	/// Lifetime of the access token, in seconds.
	pub access_token_duration: i64,
	/// Newly issued or re-used refresh token.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub refresh_token: Option<String>,
	/// Expiry of the refresh token, in milliseconds since the Unix epoch.
	pub refresh_token_expires_at: i64,
	/// Lifetime of the refresh token, in seconds.
	pub refresh_token_duration: i64,
	/// Newly issued ID token, when the grant produced one.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id_token: Option<String>,
	/// The access token in JWT form, when the service is configured to issue one.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub jwt_access_token: Option<String>,

	/// Grant type of the processed request, e.g. `authorization_code`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub grant_type: Option<String>,
	/// Numeric client identifier.
	pub client_id: i64,
	/// Client-chosen alias for the numeric identifier.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub client_id_alias: Option<String>,
	/// Whether the client used its alias in this request.
	pub client_id_alias_used: bool,
	/// Subject of the end user the tokens are bound to; absent for Client Credentials.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub subject: Option<String>,
	/// Scopes covered by the issued tokens.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub scopes: Vec<String>,
	/// Properties attached to the access token.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub properties: Vec<Property>,
	/// Resources bound by an RFC 8707 `resource` parameter at authorization time.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub resources: Vec<Url>,
	/// Resources the issued access token is actually usable at.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub access_token_resources: Vec<Url>,
	/// Authorization details attached to the access token.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub authorization_details: Option<AuthzDetails>,
}
impl TokenResponse {
	/// String form of the client identifier: the alias when the client used one, otherwise
	/// the decimal form of the numeric identifier.
	pub fn client_identifier(&self) -> String {
		match (&self.client_id_alias, self.client_id_alias_used) {
			(Some(alias), true) => alias.clone(),
			_ => self.client_id.to_string(),
		}
	}

	/// Access token expiry as an [`OffsetDateTime`], when one was issued.
	pub fn access_token_expiry(&self) -> Option<OffsetDateTime> {
		crate::_prelude::epoch_millis_to_datetime(self.access_token_expires_at)
	}

	/// Refresh token expiry as an [`OffsetDateTime`], when one was issued.
	pub fn refresh_token_expiry(&self) -> Option<OffsetDateTime> {
		crate::_prelude::epoch_millis_to_datetime(self.refresh_token_expires_at)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn ok_action_with_content_round_trips() {
		let response = TokenResponse {
			action: Some(TokenAction::Ok),
			response_content: Some(r#"{"access_token":"at","token_type":"Bearer"}"#.into()),
			..Default::default()
		};
		let json = serde_json::to_string(&response).expect("Token response should serialize.");
		let back: TokenResponse =
			serde_json::from_str(&json).expect("Token response should deserialize.");

		assert_eq!(back, response);
		assert_eq!(
			back.response_content, response.response_content,
			"Pre-rendered content must pass through untouched."
		);
	}

	#[test]
	fn password_action_carries_credentials_and_ticket() {
		let json = r#"{
			"action": "PASSWORD",
			"ticket": "ticket-7",
			"username": "john",
			"password": "secret"
		}"#;
		let response: TokenResponse =
			serde_json::from_str(json).expect("Password-grant response should deserialize.");

		assert_eq!(response.action, Some(TokenAction::Password));
		assert_eq!(response.ticket.as_deref(), Some("ticket-7"));
		assert_eq!(response.username.as_deref(), Some("john"));
	}

	#[test]
	fn client_identifier_falls_back_to_numeric_id() {
		let response = TokenResponse { client_id: 57297408867, ..Default::default() };

		assert_eq!(response.client_identifier(), "57297408867");
	}
}
