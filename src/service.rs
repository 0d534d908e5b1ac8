//! The service configuration record.
//!
//! A service is one authorization server instance hosted by the remote API: its issuer
//! identifier, endpoints, supported capabilities, token lifetimes, and the feature toggles
//! for the protocol extensions modeled elsewhere in this crate.

// self
use crate::{
	_prelude::*,
	credential::CredentialIssuerMetadata,
	data::{Hsk, Pair, Scope, TrustAnchor},
	tsl::TslPublishConfig,
};

/// Service (authorization server instance) configuration.
///
/// `Clone` produces a field-wise equal, fully independent copy; `Default` yields the
/// documented defaults for a freshly created service.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Service {
	/// Service name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub service_name: Option<String>,
	/// API key identifying the service on the remote API.
	pub api_key: i64,
	/// Issuer identifier (the `iss` claim value).
	#[serde(skip_serializing_if = "Option::is_none")]
	pub issuer: Option<Url>,

	/// Authorization endpoint URL.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub authorization_endpoint: Option<Url>,
	/// Token endpoint URL.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub token_endpoint: Option<Url>,
	/// Revocation endpoint URL.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub revocation_endpoint: Option<Url>,
	/// Userinfo endpoint URL.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub user_info_endpoint: Option<Url>,
	/// JWK Set document URL.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub jwks_uri: Option<Url>,
	/// JWK Set document, serialized as a string; mutually exclusive with
	/// [`jwks_uri`](Self::jwks_uri).
	#[serde(skip_serializing_if = "Option::is_none")]
	pub jwks: Option<String>,
	/// Dynamic registration endpoint URL.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub registration_endpoint: Option<Url>,
	/// Pushed authorization request endpoint URL.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub pushed_auth_req_endpoint: Option<Url>,
	/// Device authorization endpoint URL.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub device_authorization_endpoint: Option<Url>,
	/// Backchannel authentication endpoint URL.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub backchannel_authentication_endpoint: Option<Url>,
	/// Grant management endpoint URL.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub grant_management_endpoint: Option<Url>,

	/// Scopes the service supports.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub supported_scopes: Vec<Scope>,
	/// Response types the service supports, e.g. `code`.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub supported_response_types: Vec<String>,
	/// Grant types the service supports, e.g. `authorization_code`.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub supported_grant_types: Vec<String>,
	/// Claim names the service can supply.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub supported_claims: Vec<String>,
	/// ACRs the service supports.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub supported_acrs: Vec<String>,

	/// Lifetime of access tokens, in seconds.
	pub access_token_duration: i64,
	/// Lifetime of refresh tokens, in seconds.
	pub refresh_token_duration: i64,
	/// Lifetime of ID tokens, in seconds.
	pub id_token_duration: i64,
	/// Lifetime of pushed authorization requests, in seconds.
	pub pushed_auth_req_duration: i64,

	/// Lifetime of device/user code pairs, in seconds.
	pub device_flow_code_duration: i32,
	/// Polling interval for the device flow, in seconds.
	pub device_flow_polling_interval: i32,
	/// Verification URI advertised by the device authorization endpoint.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub device_verification_uri: Option<Url>,
	/// Length of generated user codes.
	pub user_code_length: i32,

	/// Lifetime of CIBA `auth_req_id` values, in seconds.
	pub backchannel_auth_req_id_duration: i32,
	/// Polling interval for CIBA poll/ping modes, in seconds.
	pub backchannel_polling_interval: i32,
	/// Whether the CIBA `user_code` parameter is supported.
	pub backchannel_user_code_parameter_supported: bool,

	/// Whether `grant_management_action=create` is required on every authorization
	/// request.
	pub grant_management_action_required: bool,
	/// Whether issued access tokens must be DPoP-bound.
	pub dpop_required: bool,
	/// Lifetime of issued DPoP nonces, in seconds.
	pub dpop_nonce_duration: i64,

	/// Trust anchors for OpenID Federation; participation is off when empty.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub trust_anchors: Vec<TrustAnchor>,
	/// Whether OpenID Federation support is enabled.
	pub federation_enabled: bool,
	/// Keys managed in HSMs on behalf of this service.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub hsks: Vec<Hsk>,
	/// Whether HSM-backed keys are used for signing/decryption.
	pub hsm_enabled: bool,
	/// Token status list publication settings; publication is off when unset.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tsl_publish_config: Option<TslPublishConfig>,
	/// Credential issuer metadata; the service is no issuer when unset.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub credential_issuer_metadata: Option<CredentialIssuerMetadata>,
	/// Whether Native SSO for Mobile Apps is supported.
	pub native_sso_supported: bool,

	/// Arbitrary service attributes.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub attributes: Vec<Pair>,
	/// Creation time, in milliseconds since the Unix epoch.
	pub created_at: i64,
	/// Last modification time, in milliseconds since the Unix epoch.
	pub modified_at: i64,
}
impl Service {
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
	use crate::data::TaggedValue;

	fn service() -> Service {
		Service {
			service_name: Some("example".into()),
			api_key: 5,
			issuer: Some(Url::parse("https://as.example.com").expect("Fixture URL should parse.")),
			supported_scopes: vec![Scope {
				default_entry: true,
				descriptions: vec![TaggedValue::new("en", "Sign in")],
				..Scope::named("openid")
			}],
			access_token_duration: 3600,
			tsl_publish_config: Some(TslPublishConfig::default()),
			..Default::default()
		}
	}

	#[test]
	fn clone_is_field_wise_equal_and_reference_distinct() {
		let original = service();
		let mut copy = original.clone();

		assert_eq!(copy, original);

		copy.supported_scopes[0].default_entry = false;
		copy.tsl_publish_config = None;

		assert_ne!(copy, original);
		assert!(original.supported_scopes[0].default_entry);
		assert!(original.tsl_publish_config.is_some());
	}

	#[test]
	fn nested_configuration_round_trips() {
		let original = service();
		let json = serde_json::to_string(&original).expect("Service should serialize.");
		let back: Service = serde_json::from_str(&json).expect("Service should deserialize.");

		assert_eq!(back, original);
	}

	#[test]
	fn unset_timestamps_do_not_pretend_to_be_the_epoch() {
		let fresh = Service::default();

		assert_eq!(fresh.created(), None);
		assert_eq!(fresh.modified(), None);
	}
}
