// self
use crate::_prelude::*;

/// Outcome of the consent ceremony on the interaction device.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeviceCompleteResult {
	/// The end user authorized the request.
	Authorized,
	/// The end user denied the request.
	AccessDenied,
	/// The ceremony failed for another reason.
	TransactionFailed,
}

/// Request to the device complete API, reporting how the consent ceremony ended.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeviceCompleteRequest {
	/// User code the ceremony was about.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub user_code: Option<String>,
	/// Outcome of the ceremony.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub result: Option<DeviceCompleteResult>,
	/// Subject of the authenticated end user; required for `AUTHORIZED`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub subject: Option<String>,
	/// Value used as the `sub` claim when it should differ from
	/// [`subject`](Self::subject).
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
	/// Claims the user consented to, when they differ from the requested set.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub consented_claims: Vec<String>,
	/// Header parameters to merge into the issued ID token's JWS header, as a JSON
	/// object serialized into a string.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub idt_header_params: Option<String>,
	/// Description of the error when the ceremony failed.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error_description: Option<String>,
}
impl DeviceCompleteRequest {
	/// Creates a complete request reporting an authorized ceremony for a subject.
	pub fn authorized(user_code: impl Into<String>, subject: impl Into<String>) -> Self {
		Self {
			user_code: Some(user_code.into()),
			result: Some(DeviceCompleteResult::Authorized),
			subject: Some(subject.into()),
			..Self::default()
		}
	}
}

/// Result of calling the device complete API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeviceCompleteAction {
	/// The ceremony outcome was recorded; tell the end user they can return to the
	/// device.
	Success,
	/// The request was invalid, e.g. `AUTHORIZED` without a subject.
	InvalidRequest,
	/// The user code expired while the ceremony was running.
	UserCodeExpired,
	/// The user code does not exist.
	UserCodeNotExist,
	/// A server-side error occurred.
	ServerError,
}

/// Response from the device complete API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeviceCompleteResponse {
	/// Common result envelope.
	#[serde(flatten)]
	pub result: ApiResult,
	/// Outcome of recording the ceremony.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub action: Option<DeviceCompleteAction>,
}
