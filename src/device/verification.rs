// self
use crate::{
	_prelude::*,
	data::{AuthzDetails, DynamicScope, Grant, Scope},
};

/// Request to the device verification API, looking up the user code an end user typed at
/// the verification endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeviceVerificationRequest {
	/// User code entered by the end user.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub user_code: Option<String>,
}
impl DeviceVerificationRequest {
	/// Creates a verification request for a user code.
	pub fn new(user_code: impl Into<String>) -> Self {
		Self { user_code: Some(user_code.into()) }
	}
}

/// Result of looking up a user code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeviceVerificationAction {
	/// The user code exists and has not expired: show the consent UI, then call the
	/// device complete API.
	Valid,
	/// The user code has expired; ask the end user to restart the flow on the device.
	Expired,
	/// The user code does not exist.
	NotExist,
	/// A server-side error occurred.
	ServerError,
}

/// Response from the device verification API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeviceVerificationResponse {
	/// Common result envelope.
	#[serde(flatten)]
	pub result: ApiResult,
	/// Lookup result.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub action: Option<DeviceVerificationAction>,

	/// Numeric identifier of the client that started the flow.
	pub client_id: i64,
	/// Client-chosen alias for the numeric identifier.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub client_id_alias: Option<String>,
	/// Whether the client used its alias in the device authorization request.
	pub client_id_alias_used: bool,
	/// Display name of the client, for the consent UI.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub client_name: Option<String>,

	/// Scopes the device authorization request asked for.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub scopes: Vec<Scope>,
	/// Dynamic scopes the request asked for.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub dynamic_scopes: Vec<DynamicScope>,
	/// Names of claims requested for the ID token.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub claim_names: Vec<String>,
	/// ACR values the request requires.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub acrs: Vec<String>,
	/// Expiry of the user code, in milliseconds since the Unix epoch.
	pub expires_at: i64,
	/// Resource indicators contained in the request.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub resources: Vec<Url>,
	/// Authorization details contained in the request.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub authorization_details: Option<AuthzDetails>,
	/// Grant ID named by the request.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub grant_id: Option<String>,
	/// Contents of the grant named by the request.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub grant: Option<Grant>,
	/// Subject the grant belongs to.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub grant_subject: Option<String>,
}
impl DeviceVerificationResponse {
	/// User code expiry as an [`OffsetDateTime`], when set.
	pub fn expiry(&self) -> Option<OffsetDateTime> {
		crate::_prelude::epoch_millis_to_datetime(self.expires_at)
	}
}
