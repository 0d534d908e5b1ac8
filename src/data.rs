//! Shared value types embedded inside request and response models.
//!
//! These are the small, flat structures the larger payloads are composed of: the common
//! result envelope, extra token properties, tagged strings, scope descriptors,
//! authorization details (RFC 9396), HSM-backed keys, and federation trust anchors.

/// RFC 9396 authorization details.
pub mod authz_details;
/// Grant snapshots used by grant management and device verification.
pub mod grant;
/// HSM-backed key descriptors.
pub mod hsk;
/// Key/value and tagged-value pairs.
pub mod pair;
/// Extra token properties.
pub mod property;
/// Scope descriptors and dynamic scopes.
pub mod scope;
/// OpenID Federation trust anchors.
pub mod trust_anchor;

pub use authz_details::*;
pub use grant::*;
pub use hsk::*;
pub use pair::*;
pub use property::*;
pub use scope::*;
pub use trust_anchor::*;

// self
use crate::_prelude::*;

/// Common result envelope present in every response payload.
///
/// The service reports a result code such as `A004001` together with a short human-readable
/// message. Both are diagnostic only; callers branch on the response's `action` field, never
/// on the code.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiResult {
	/// Code assigned to the API call outcome.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub result_code: Option<String>,
	/// Short message describing the outcome.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub result_message: Option<String>,
}
