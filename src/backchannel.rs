//! Models for the Client-Initiated Backchannel Authentication (CIBA) endpoint's backing
//! API calls.
//!
//! The backchannel authentication endpoint forwards each client request to the service,
//! identifies the end user from the returned hint, and starts out-of-band authentication.
//! The flow then finishes asynchronously through the [fail](crate::backchannel::fail),
//! [issue](crate::backchannel::issue), and [complete](crate::backchannel::complete) calls.

/// Models for `/backchannel/authentication/fail`.
pub mod fail;
/// Models for `/backchannel/authentication/issue`.
pub mod issue;
/// Models for `/backchannel/authentication/complete`.
pub mod complete;

pub use complete::*;
pub use fail::*;
pub use issue::*;

// self
use crate::{
	_prelude::*,
	data::{DynamicScope, Scope},
};

/// CIBA token delivery modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryMode {
	/// Client polls the token endpoint with the `auth_req_id`.
	Poll,
	/// Like poll, but the client is pinged at its notification endpoint first.
	Ping,
	/// Tokens are pushed to the client's notification endpoint.
	Push,
}

/// Kind of hint the client supplied to identify the end user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserIdentificationHintType {
	/// `id_token_hint` request parameter.
	IdTokenHint,
	/// `login_hint` request parameter.
	LoginHint,
	/// `login_hint_token` request parameter.
	LoginHintToken,
}

/// Request to the service's backchannel authentication API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BackchannelAuthenticationRequest {
	/// Raw form parameters of the client's backchannel authentication request,
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
impl BackchannelAuthenticationRequest {
	/// Creates a request carrying the client's raw parameters.
	pub fn with_parameters(parameters: impl Into<String>) -> Self {
		Self { parameters: Some(parameters.into()), ..Self::default() }
	}
}

/// Next step the backchannel authentication endpoint must take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BackchannelAuthenticationAction {
	/// Respond `400 Bad Request` with `response_content` as `application/json`.
	BadRequest,
	/// Respond `401 Unauthorized` with `response_content` as `application/json` and a
	/// `WWW-Authenticate` challenge.
	Unauthorized,
	/// Respond `500 Internal Server Error` with `response_content` as `application/json`.
	InternalServerError,
	/// The request is valid: identify the end user from the hint, start the
	/// authentication/consent ceremony, and call the issue API with the `ticket`.
	UserIdentification,
}

/// Response from the service's backchannel authentication API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BackchannelAuthenticationResponse {
	/// Common result envelope.
	#[serde(flatten)]
	pub result: ApiResult,
	/// Next step for the backchannel authentication endpoint.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub action: Option<BackchannelAuthenticationAction>,
	/// Pre-rendered response body; opaque pass-through.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub response_content: Option<String>,
	/// Ticket quoted by the subsequent fail/issue call.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub ticket: Option<String>,

	/// Numeric client identifier.
	pub client_id: i64,
	/// Client-chosen alias for the numeric identifier.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub client_id_alias: Option<String>,
	/// Whether the client used its alias in this request.
	pub client_id_alias_used: bool,
	/// Display name of the client.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub client_name: Option<String>,
	/// Token delivery mode registered by the client.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub delivery_mode: Option<DeliveryMode>,

	/// Requested scopes, resolved against the service's registry.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub scopes: Vec<Scope>,
	/// Dynamic scopes matched by the request.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub dynamic_scopes: Vec<DynamicScope>,
	/// Names of claims requested for the ID token.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub claim_names: Vec<String>,
	/// Client notification token supplied with the request (ping/push modes).
	#[serde(skip_serializing_if = "Option::is_none")]
	pub client_notification_token: Option<String>,
	/// ACR values the request requires, in preference order.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub acrs: Vec<String>,
	/// Kind of hint identifying the end user.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub hint_type: Option<UserIdentificationHintType>,
	/// The hint value itself.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub hint: Option<String>,
	/// `sub` claim of the `id_token_hint`, when that hint type was used.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub sub: Option<String>,
	/// Binding message to show on both consumption and authentication devices.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub binding_message: Option<String>,
	/// User code contained in the request.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub user_code: Option<String>,
	/// Whether the service/client configuration requires a user code.
	pub user_code_required: bool,
	/// Requested expiry for the `auth_req_id`, in seconds. `0` means not requested.
	pub requested_expiry: i32,
	/// Resource indicators contained in the request.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub resources: Vec<Url>,
	/// Warnings raised while processing the request.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub warnings: Vec<String>,
}
impl BackchannelAuthenticationResponse {
	/// String form of the client identifier: the alias when the client used one, otherwise
	/// the decimal form of the numeric identifier.
	pub fn client_identifier(&self) -> String {
		match (&self.client_id_alias, self.client_id_alias_used) {
			(Some(alias), true) => alias.clone(),
			_ => self.client_id.to_string(),
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn user_identification_response_round_trips() {
		let json = r#"{
			"action": "USER_IDENTIFICATION",
			"ticket": "bc-ticket-1",
			"clientId": 7,
			"deliveryMode": "PING",
			"hintType": "LOGIN_HINT",
			"hint": "john@example.com",
			"bindingMessage": "W4SCT",
			"userCodeRequired": true
		}"#;
		let response: BackchannelAuthenticationResponse =
			serde_json::from_str(json).expect("CIBA response should deserialize.");

		assert_eq!(response.action, Some(BackchannelAuthenticationAction::UserIdentification));
		assert_eq!(response.delivery_mode, Some(DeliveryMode::Ping));
		assert_eq!(response.hint_type, Some(UserIdentificationHintType::LoginHint));
		assert!(response.user_code_required);

		let back = serde_json::to_string(&response).expect("CIBA response should serialize.");

		assert_eq!(
			serde_json::from_str::<BackchannelAuthenticationResponse>(&back)
				.expect("Round-tripped CIBA response should deserialize."),
			response
		);
	}
}
