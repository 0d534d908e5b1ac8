// self
use crate::{_prelude::*, backchannel::DeliveryMode};

/// Outcome of the out-of-band end-user authentication/consent ceremony.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BackchannelAuthenticationCompleteResult {
	/// The end user authorized the request; tokens are issued.
	Authorized,
	/// The end user denied the request; `access_denied` is delivered.
	AccessDenied,
	/// The ceremony failed for another reason; `transaction_failed` is delivered.
	TransactionFailed,
}

/// Request to the backchannel authentication complete API, reporting how the ceremony on
/// the authentication device ended.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BackchannelAuthenticationCompleteRequest {
	/// Ticket issued by the preceding backchannel authentication call.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub ticket: Option<String>,
	/// Outcome of the ceremony.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub result: Option<BackchannelAuthenticationCompleteResult>,
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
impl BackchannelAuthenticationCompleteRequest {
	/// Creates a complete request reporting an authorized ceremony for a subject.
	pub fn authorized(ticket: impl Into<String>, subject: impl Into<String>) -> Self {
		Self {
			ticket: Some(ticket.into()),
			result: Some(BackchannelAuthenticationCompleteResult::Authorized),
			subject: Some(subject.into()),
			..Self::default()
		}
	}
}

/// Next step after calling the backchannel authentication complete API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BackchannelAuthenticationCompleteAction {
	/// Ping or push mode: deliver the notification in `response_content` to the client's
	/// notification endpoint.
	Notification,
	/// Poll mode: nothing to deliver; the client will collect tokens at the token
	/// endpoint.
	NoAction,
	/// A server-side error occurred while completing the ceremony.
	ServerError,
}

/// Response from the backchannel authentication complete API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BackchannelAuthenticationCompleteResponse {
	/// Common result envelope.
	#[serde(flatten)]
	pub result: ApiResult,
	/// Next step for the backchannel authentication endpoint.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub action: Option<BackchannelAuthenticationCompleteAction>,
	/// Notification payload to deliver (ping/push); opaque pass-through.
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
	/// Token delivery mode registered by the client.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub delivery_mode: Option<DeliveryMode>,
	/// Client notification endpoint (ping/push modes).
	#[serde(skip_serializing_if = "Option::is_none")]
	pub client_notification_endpoint: Option<Url>,
	/// Client notification token to present at the endpoint.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub client_notification_token: Option<String>,
	/// Authentication request ID the ceremony belonged to.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub auth_req_id: Option<String>,

	/// Issued access token (push mode).
	#[serde(skip_serializing_if = "Option::is_none")]
	pub access_token: Option<String>,
	/// Issued refresh token (push mode).
	#[serde(skip_serializing_if = "Option::is_none")]
	pub refresh_token: Option<String>,
	/// Issued ID token (push mode).
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id_token: Option<String>,
	/// Lifetime of the access token, in seconds.
	pub access_token_duration: i64,
	/// Lifetime of the refresh token, in seconds.
	pub refresh_token_duration: i64,
	/// Lifetime of the ID token, in seconds.
	pub id_token_duration: i64,
	/// The access token in JWT form, when the service is configured to issue one.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub jwt_access_token: Option<String>,
}
