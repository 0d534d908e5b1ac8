//! Models for the device authorization grant's (RFC 8628) backing API calls.
//!
//! The device authorization endpoint forwards each request to the service and returns the
//! issued device/user code pair. The verification endpoint on the interaction device uses
//! [verification](crate::device::verification) to look the user code up and
//! [complete](crate::device::complete) to report how the ceremony ended.

/// Models for `/device/complete`.
pub mod complete;
/// Models for `/device/verification`.
pub mod verification;

pub use complete::*;
pub use verification::*;

// self
use crate::{
	_prelude::*,
	data::{DynamicScope, Scope},
};

/// Request to the service's device authorization API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeviceAuthorizationRequest {
	/// Raw form parameters of the client's device authorization request,
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
impl DeviceAuthorizationRequest {
	/// Creates a request carrying the client's raw parameters.
	pub fn with_parameters(parameters: impl Into<String>) -> Self {
		Self { parameters: Some(parameters.into()), ..Self::default() }
	}
}

/// Next step the device authorization endpoint must take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeviceAuthorizationAction {
	/// Respond `200 OK` with `response_content` as `application/json`.
	Ok,
	/// Respond `400 Bad Request` with `response_content` as `application/json`.
	BadRequest,
	/// Respond `401 Unauthorized` with `response_content` as `application/json` and a
	/// `WWW-Authenticate` challenge.
	Unauthorized,
	/// Respond `500 Internal Server Error` with `response_content` as `application/json`.
	InternalServerError,
}

/// Response from the service's device authorization API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeviceAuthorizationResponse {
	/// Common result envelope.
	#[serde(flatten)]
	pub result: ApiResult,
	/// Next step for the device authorization endpoint.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub action: Option<DeviceAuthorizationAction>,
	/// Pre-rendered response body; opaque pass-through.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub response_content: Option<String>,

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

	/// Requested scopes, resolved against the service's registry.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub scopes: Vec<Scope>,
	/// Dynamic scopes matched by the request.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub dynamic_scopes: Vec<DynamicScope>,
	/// Names of claims requested for the ID token.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub claim_names: Vec<String>,
	/// ACR values the request requires, in preference order.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub acrs: Vec<String>,

	/// Issued device verification code.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub device_code: Option<String>,
	/// Issued end-user verification code.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub user_code: Option<String>,
	/// End-user verification URI.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub verification_uri: Option<Url>,
	/// Verification URI with the user code embedded.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub verification_uri_complete: Option<Url>,
	/// Lifetime of the device/user code pair, in seconds.
	pub expires_in: i32,
	/// Minimum polling interval for the token endpoint, in seconds.
	pub interval: i32,
	/// Resource indicators contained in the request.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub resources: Vec<Url>,
	/// Warnings raised while processing the request.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub warnings: Vec<String>,
}
impl DeviceAuthorizationResponse {
	/// String form of the client identifier: the alias when the client used one, otherwise
	/// the decimal form of the numeric identifier.
	pub fn client_identifier(&self) -> String {
		match (&self.client_id_alias, self.client_id_alias_used) {
			(Some(alias), true) => alias.clone(),
			_ => self.client_id.to_string(),
		}
	}
}
