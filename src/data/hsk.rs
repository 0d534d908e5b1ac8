// self
use crate::_prelude::*;

/// Key managed inside a hardware security module on behalf of a service.
///
/// The private key never leaves the HSM; this record only carries the handle the service
/// uses to address it and the public half in JWK format.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Hsk {
	/// Key type, `EC` or `RSA`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub kty: Option<String>,
	/// Key use, `sig` or `enc`.
	#[serde(rename = "use", skip_serializing_if = "Option::is_none")]
	pub key_use: Option<String>,
	/// Algorithm the key is intended for, e.g. `ES256`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub alg: Option<String>,
	/// Key ID surfaced in JWS/JWE headers.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub kid: Option<String>,
	/// Name of the HSM holding the key.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub hsm_name: Option<String>,
	/// Opaque handle the service uses to address the key inside the HSM.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub handle: Option<String>,
	/// Public key in JWK format, serialized as a string.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub public_key: Option<String>,
}
