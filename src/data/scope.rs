// std
use std::cmp::Ordering;
// self
use crate::{
	_prelude::*,
	data::{Pair, TaggedValue},
};

/// Scope supported by a service, as advertised through discovery and echoed back in
/// authorization responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Scope {
	/// Scope name, e.g. `openid`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// Whether the scope is granted when an authorization request names no scopes.
	pub default_entry: bool,
	/// Description shown on consent screens.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	/// Localized descriptions.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub descriptions: Vec<TaggedValue>,
	/// Arbitrary scope attributes.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub attributes: Vec<Pair>,
}
impl Scope {
	/// Creates a named scope with every other field unset.
	pub fn named(name: impl Into<String>) -> Self {
		Self { name: Some(name.into()), ..Self::default() }
	}
}

/// Parameterized scope carried by an authorization request, e.g. `consent:urn:example:tx`.
///
/// The `name` part identifies the registered dynamic-scope template and `value` is the full
/// string the client actually sent. Ordering, equality, and hashing are all defined over the
/// `(name, value)` tuple so instances can live in sorted collections.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DynamicScope {
	/// Registered scope name the value matched.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// Scope value as requested by the client.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub value: Option<String>,
}
impl DynamicScope {
	/// Creates a dynamic scope from its registered name and requested value.
	pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
		Self { name: Some(name.into()), value: Some(value.into()) }
	}
}
impl PartialOrd for DynamicScope {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}
impl Ord for DynamicScope {
	fn cmp(&self, other: &Self) -> Ordering {
		self.name.cmp(&other.name).then_with(|| self.value.cmp(&other.value))
	}
}
impl Display for DynamicScope {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "{}:{}", self.name.as_deref().unwrap_or(""), self.value.as_deref().unwrap_or(""))
	}
}

#[cfg(test)]
mod tests {
	// std
	use std::collections::hash_map::DefaultHasher;
	use std::hash::{Hash, Hasher};
	// self
	use super::*;

	fn hash_of(scope: &DynamicScope) -> u64 {
		let mut hasher = DefaultHasher::new();

		scope.hash(&mut hasher);

		hasher.finish()
	}

	#[test]
	fn equal_dynamic_scopes_agree_on_hash_and_ordering() {
		let lhs = DynamicScope::new("consent", "consent:urn:example:tx");
		let rhs = DynamicScope::new("consent", "consent:urn:example:tx");

		assert_eq!(lhs, rhs);
		assert_eq!(hash_of(&lhs), hash_of(&rhs));
		assert_eq!(lhs.cmp(&rhs), Ordering::Equal);
		assert_eq!(lhs.cmp(&lhs), Ordering::Equal, "Comparison must be reflexive.");
	}

	#[test]
	fn ordering_is_name_major() {
		let a = DynamicScope::new("a", "z");
		let b = DynamicScope::new("b", "a");

		assert!(a < b);
		assert!(b > a, "Ordering must be symmetric.");

		let a2 = DynamicScope::new("a", "a");

		assert!(a2 < a, "Value breaks ties within the same name.");
	}

	#[test]
	fn display_joins_name_and_value() {
		assert_eq!(DynamicScope::new("consent", "consent:tx1").to_string(), "consent:consent:tx1");
	}

	#[test]
	fn default_scope_entry_flag_survives_round_trip() {
		let scope = Scope { default_entry: true, ..Scope::named("openid") };
		let json = serde_json::to_string(&scope).expect("Scope should serialize.");

		assert!(json.contains("\"defaultEntry\":true"));

		let back: Scope = serde_json::from_str(&json).expect("Scope should deserialize.");

		assert_eq!(back, scope);
	}
}
