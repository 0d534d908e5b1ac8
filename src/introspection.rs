//! Models for the introspection API a protected resource's endpoint calls to validate an
//! access token before serving a request.

// self
use crate::{
	_prelude::*,
	data::{AuthzDetails, Grant},
};

/// Request to the service's introspection API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IntrospectionRequest {
	/// Access token presented by the client application.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub token: Option<String>,
	/// Scopes the protected resource requires; unset means no scope check.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub scopes: Vec<String>,
	/// Subject the protected resource requires the token to be bound to.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub subject: Option<String>,
	/// PEM client certificate, for certificate-bound access tokens (RFC 8705).
	#[serde(skip_serializing_if = "Option::is_none")]
	pub client_certificate: Option<String>,
	/// Value of the `DPoP` header presented at the resource (RFC 9449).
	#[serde(skip_serializing_if = "Option::is_none")]
	pub dpop: Option<String>,
	/// HTTP method of the resource request, for DPoP validation.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub htm: Option<String>,
	/// URL of the resource, for DPoP validation.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub htu: Option<String>,
	/// Resource indicators the access must cover (RFC 8707).
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub resources: Vec<Url>,
	/// ACR values the protected resource requires.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub acr_values: Vec<String>,
	/// Maximum allowed elapsed time since authentication, in seconds.
	pub max_age: i64,
}
impl IntrospectionRequest {
	/// Creates a request introspecting the given access token.
	pub fn with_token(token: impl Into<String>) -> Self {
		Self { token: Some(token.into()), ..Self::default() }
	}
}

/// Next step the protected resource endpoint must take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IntrospectionAction {
	/// Respond `500 Internal Server Error`; `response_content` is a `WWW-Authenticate`
	/// header value.
	InternalServerError,
	/// Respond `400 Bad Request`; `response_content` is a `WWW-Authenticate` header value.
	BadRequest,
	/// Respond `401 Unauthorized`; the token is missing, expired, or revoked.
	Unauthorized,
	/// Respond `403 Forbidden`; the token lacks required scopes or subject binding.
	Forbidden,
	/// The token is valid; serve the resource request.
	Ok,
}

/// Response from the service's introspection API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IntrospectionResponse {
	/// Common result envelope.
	#[serde(flatten)]
	pub result: ApiResult,
	/// Next step for the protected resource endpoint.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub action: Option<IntrospectionAction>,
	/// `WWW-Authenticate` header value to emit on error actions; opaque pass-through.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub response_content: Option<String>,

	/// Whether the token exists at all.
	pub existent: bool,
	/// Whether the token exists and has not expired or been revoked.
	pub usable: bool,
	/// Whether the token covers the requested scopes.
	pub sufficient: bool,
	/// Whether the token can be refreshed.
	pub refreshable: bool,

	/// Numeric identifier of the client the token was issued to.
	pub client_id: i64,
	/// Client-chosen alias for the numeric identifier.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub client_id_alias: Option<String>,
	/// Whether the client used its alias when the token was issued.
	pub client_id_alias_used: bool,
	/// Subject the token is bound to; absent for Client Credentials tokens.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub subject: Option<String>,
	/// Scopes covered by the token.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub scopes: Vec<String>,
	/// Expiry of the token, in milliseconds since the Unix epoch.
	pub expires_at: i64,
	/// Properties attached to the token at issue time.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub properties: Vec<Property>,
	/// SHA-256 thumbprint of the certificate the token is bound to, when any.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub certificate_thumbprint: Option<String>,
	/// Resources bound at authorization time.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub resources: Vec<Url>,
	/// Resources the token is actually usable at.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub access_token_resources: Vec<Url>,
	/// Authorization details attached to the token.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub authorization_details: Option<AuthzDetails>,
	/// Grant ID the token belongs to.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub grant_id: Option<String>,
	/// Contents of the grant the token belongs to.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub grant: Option<Grant>,
}
impl IntrospectionResponse {
	/// String form of the client identifier: the alias when the client used one, otherwise
	/// the decimal form of the numeric identifier.
	pub fn client_identifier(&self) -> String {
		match (&self.client_id_alias, self.client_id_alias_used) {
			(Some(alias), true) => alias.clone(),
			_ => self.client_id.to_string(),
		}
	}

	/// Token expiry as an [`OffsetDateTime`], when set.
	pub fn expiry(&self) -> Option<OffsetDateTime> {
		crate::_prelude::epoch_millis_to_datetime(self.expires_at)
	}
}
