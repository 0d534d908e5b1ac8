//! Models for registered client applications and the client management APIs.

/// Models for the client list API.
pub mod list;

pub use list::*;

// self
use crate::{
	_prelude::*,
	data::{Pair, TaggedValue},
};

/// Client types defined by RFC 6749.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClientType {
	/// Cannot keep its credentials confidential (native apps, SPAs).
	Public,
	/// Can authenticate itself to the token endpoint.
	Confidential,
}

/// OpenID Connect application types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationType {
	/// Web application with `https` redirect URIs.
	Web,
	/// Native application with custom-scheme or loopback redirect URIs.
	Native,
}

/// Client authentication methods at the token endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClientAuthMethod {
	/// No client authentication (public clients).
	None,
	/// `client_secret` via HTTP Basic authentication.
	ClientSecretBasic,
	/// `client_secret` in the request body.
	ClientSecretPost,
	/// HMAC-signed JWT assertion using the client secret.
	ClientSecretJwt,
	/// Asymmetrically signed JWT assertion.
	PrivateKeyJwt,
	/// Mutual TLS with a PKI certificate (RFC 8705).
	TlsClientAuth,
	/// Mutual TLS with a self-signed certificate (RFC 8705).
	SelfSignedTlsClientAuth,
}

/// Registered client application.
///
/// The numeric [`client_id`](Self::client_id) is assigned by the service;
/// [`client_id_alias`](Self::client_id_alias) is a developer-chosen name clients may use in
/// its place once the alias feature is enabled for both the service and the client.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Client {
	/// Numeric client identifier assigned by the service.
	pub client_id: i64,
	/// Developer-chosen alias for the numeric identifier.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub client_id_alias: Option<String>,
	/// Whether the alias is enabled for this client.
	pub client_id_alias_enabled: bool,
	/// Client secret; present only for confidential clients.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub client_secret: Option<String>,
	/// Client type.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub client_type: Option<ClientType>,
	/// Application type.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub application_type: Option<ApplicationType>,
	/// Display name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub client_name: Option<String>,
	/// Localized display names.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub client_names: Vec<TaggedValue>,
	/// Description.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	/// Localized descriptions.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub descriptions: Vec<TaggedValue>,
	/// Developer the client belongs to.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub developer: Option<String>,

	/// Registered redirect URIs. Kept as strings since native clients register
	/// custom-scheme and loopback values.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub redirect_uris: Vec<String>,
	/// Registered response types, e.g. `code` or `code id_token`.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub response_types: Vec<String>,
	/// Registered grant types, e.g. `authorization_code`.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub grant_types: Vec<String>,
	/// Contact addresses.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub contacts: Vec<String>,
	/// Logo URL.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub logo_uri: Option<Url>,
	/// Home page URL.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub client_uri: Option<Url>,
	/// Privacy policy URL.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub policy_uri: Option<Url>,
	/// Terms of service URL.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tos_uri: Option<Url>,

	/// URL of the client's JWK Set document.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub jwks_uri: Option<Url>,
	/// JWK Set document, serialized as a string; mutually exclusive with
	/// [`jwks_uri`](Self::jwks_uri).
	#[serde(skip_serializing_if = "Option::is_none")]
	pub jwks: Option<String>,
	/// Client authentication method at the token endpoint.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub token_auth_method: Option<ClientAuthMethod>,
	/// Expected subject DN for `TLS_CLIENT_AUTH`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tls_client_auth_subject_dn: Option<String>,
	/// Whether issued access tokens are DPoP-bound.
	pub dpop_required: bool,
	/// Authorization detail types the client may request.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub authorization_details_types: Vec<String>,

	/// Software identifier from dynamic registration.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub software_id: Option<String>,
	/// Software version from dynamic registration.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub software_version: Option<String>,
	/// Arbitrary client attributes.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub attributes: Vec<Pair>,
	/// Creation time, in milliseconds since the Unix epoch.
	pub created_at: i64,
	/// Last modification time, in milliseconds since the Unix epoch.
	pub modified_at: i64,
}
impl Client {
	/// String form of the client identifier: the alias when one is registered and enabled,
	/// otherwise the decimal form of the numeric identifier.
	pub fn client_identifier(&self) -> String {
		match (&self.client_id_alias, self.client_id_alias_enabled) {
			(Some(alias), true) => alias.clone(),
			_ => self.client_id.to_string(),
		}
	}

	/// Creation time as an [`OffsetDateTime`], when set.
	pub fn created(&self) -> Option<OffsetDateTime> {
		crate::_prelude::epoch_millis_to_datetime(self.created_at)
	}

	/// Last modification time as an [`OffsetDateTime`], when set.
	pub fn modified(&self) -> Option<OffsetDateTime> {
		crate::_prelude::epoch_millis_to_datetime(self.modified_at)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn auth_method_names_are_wire_contract() {
		assert_eq!(
			serde_json::to_string(&ClientAuthMethod::SelfSignedTlsClientAuth)
				.expect("Auth method should serialize."),
			"\"SELF_SIGNED_TLS_CLIENT_AUTH\""
		);
	}

	#[test]
	fn client_identifier_requires_enabled_alias() {
		let mut client = Client {
			client_id: 12345,
			client_id_alias: Some("my-app".into()),
			client_id_alias_enabled: false,
			..Default::default()
		};

		assert_eq!(client.client_identifier(), "12345");

		client.client_id_alias_enabled = true;

		assert_eq!(client.client_identifier(), "my-app");
	}

	#[test]
	fn clone_produces_an_independent_copy() {
		let original = Client {
			client_id: 1,
			client_names: vec![TaggedValue::new("ja", "アプリ")],
			..Default::default()
		};
		let mut copy = original.clone();

		assert_eq!(copy, original);

		copy.client_names.clear();

		assert_eq!(original.client_names.len(), 1);
	}
}
