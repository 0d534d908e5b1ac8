// self
use crate::{_prelude::*, data::AuthzDetails};

/// Scope granted within a grant, optionally narrowed to specific resources.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrantScope {
	/// Space-delimited scope string.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub scope: Option<String>,
	/// Resource indicators the scopes apply to.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub resource: Vec<String>,
}

/// Snapshot of what a user previously granted to a client, as managed through the grant
/// management endpoint and replayed during device verification.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Grant {
	/// Granted scopes, grouped per resource set.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub scopes: Vec<GrantScope>,
	/// Names of granted claims.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub claims: Vec<String>,
	/// Granted authorization details.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub authorization_details: Option<AuthzDetails>,
}
