// self
use crate::_prelude::*;

/// Request to the credential offer create API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CredentialOfferCreateRequest {
	/// Credential configuration IDs the offer covers.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub credential_configuration_ids: Vec<String>,
	/// Whether the offer includes an `authorization_code` grant.
	pub authorization_code_grant_included: bool,
	/// Whether the `authorization_code` grant carries an `issuer_state`.
	pub issuer_state_included: bool,
	/// Whether the offer includes a pre-authorized code grant.
	pub pre_authorized_code_grant_included: bool,
	/// Subject the offer is created for.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub subject: Option<String>,
	/// Lifetime of the offer, in seconds. `0` selects the service default.
	pub duration: i64,
	/// Transaction code the end user must present with a pre-authorized code, when any.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tx_code: Option<String>,
	/// Extra properties to attach to artifacts issued from the offer.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub properties: Vec<Property>,
}

/// Issued credential offer, embedded in the create response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CredentialOfferInfo {
	/// Identifier of the offer.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub identifier: Option<String>,
	/// The offer itself, as a JSON object serialized into a string; opaque pass-through.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub credential_offer: Option<String>,
	/// Credential configuration IDs the offer covers.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub credential_configuration_ids: Vec<String>,
	/// Subject the offer was created for.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub subject: Option<String>,
	/// Expiry of the offer, in milliseconds since the Unix epoch.
	pub expires_at: i64,
	/// Pre-authorized code contained in the offer, when any.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub pre_authorized_code: Option<String>,
	/// Issuer state contained in the offer, when any.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub issuer_state: Option<String>,
}
impl CredentialOfferInfo {
	/// Offer expiry as an [`OffsetDateTime`], when set.
	pub fn expiry(&self) -> Option<OffsetDateTime> {
		crate::_prelude::epoch_millis_to_datetime(self.expires_at)
	}
}

/// Next step after calling the credential offer create API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CredentialOfferCreateAction {
	/// The offer was created; deliver it to the end user.
	Created,
	/// The request was malformed.
	BadRequest,
	/// The service or client does not permit credential offers.
	Forbidden,
	/// A server-side error occurred.
	InternalServerError,
}

/// Response from the credential offer create API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CredentialOfferCreateResponse {
	/// Common result envelope.
	#[serde(flatten)]
	pub result: ApiResult,
	/// Outcome of the creation.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub action: Option<CredentialOfferCreateAction>,
	/// The created offer.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub info: Option<CredentialOfferInfo>,
}
