//! Models for the Native SSO for Mobile Apps surface: device-secret validation during
//! token exchange and session logout.

// self
use crate::_prelude::*;

/// Request to the native SSO API, called while processing a token exchange that presents a
/// device secret.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NativeSsoRequest {
	/// Access token being exchanged.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub access_token: Option<String>,
	/// Refresh token being exchanged, when one was presented instead.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub refresh_token: Option<String>,
	/// Device secret presented by the native app.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub device_secret: Option<String>,
	/// Hash of the device secret from the ID token's `ds_hash` claim.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub device_secret_hash: Option<String>,
	/// Session ID the device secret is bound to.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub session_id: Option<String>,
	/// Subject of the session's end user.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub subject: Option<String>,
}

/// Next step after calling the native SSO API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NativeSsoAction {
	/// Respond `200 OK` with `response_content` as `application/json`.
	Ok,
	/// The API call itself was wrong; fix the calling code before retrying.
	CallerError,
	/// A server-side error occurred on the service.
	ServerError,
}

/// Response from the native SSO API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NativeSsoResponse {
	/// Common result envelope.
	#[serde(flatten)]
	pub result: ApiResult,
	/// Next step for the token endpoint.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub action: Option<NativeSsoAction>,
	/// Pre-rendered response body; opaque pass-through.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub response_content: Option<String>,
	/// ID token issued for the session, bound to the new device secret.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id_token: Option<String>,
	/// Newly issued device secret, when the service rotated it.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub device_secret: Option<String>,
}

/// Request to the native SSO logout API, ending a session and invalidating every artifact
/// bound to it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NativeSsoLogoutRequest {
	/// Session ID to terminate.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub session_id: Option<String>,
	/// Subject the session must belong to, as a safety check.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub subject: Option<String>,
	/// Numeric client identifier to restrict the logout to, when set.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub client_id: Option<i64>,
}
impl NativeSsoLogoutRequest {
	/// Creates a logout request for a session.
	pub fn new(session_id: impl Into<String>) -> Self {
		Self { session_id: Some(session_id.into()), ..Self::default() }
	}
}

/// Response from the native SSO logout API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NativeSsoLogoutResponse {
	/// Common result envelope.
	#[serde(flatten)]
	pub result: ApiResult,
	/// Outcome of the logout.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub action: Option<NativeSsoAction>,
	/// Number of tokens and device secrets invalidated by the logout.
	pub count: i32,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn logout_response_counts_invalidated_artifacts() {
		let json = r#"{"action":"OK","count":3}"#;
		let response: NativeSsoLogoutResponse =
			serde_json::from_str(json).expect("Logout response should deserialize.");

		assert_eq!(response.action, Some(NativeSsoAction::Ok));
		assert_eq!(response.count, 3);
	}
}
