// self
use crate::{_prelude::*, client::Client};

/// Request to the client list API.
///
/// The window defaults to the first five clients (`start=0`, `end=5`) across all
/// developers (`developer=None`); these defaults are part of the API contract.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientListRequest {
	/// Developer to restrict the listing to; all developers when unset.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub developer: Option<String>,
	/// Start index of the requested window, inclusive.
	pub start: i32,
	/// End index of the requested window, exclusive.
	pub end: i32,
}
impl Default for ClientListRequest {
	fn default() -> Self {
		Self { developer: None, start: 0, end: 5 }
	}
}
impl ClientListRequest {
	/// Creates a request for one developer's clients, keeping the default window.
	pub fn for_developer(developer: impl Into<String>) -> Self {
		Self { developer: Some(developer.into()), ..Self::default() }
	}

	/// Creates a request for an explicit window across all developers.
	pub fn window(start: i32, end: i32) -> Self {
		Self { developer: None, start, end }
	}
}

/// Response from the client list API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientListResponse {
	/// Start index of the returned window, inclusive.
	pub start: i32,
	/// End index of the returned window, exclusive.
	pub end: i32,
	/// Developer the listing was restricted to, when any.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub developer: Option<String>,
	/// Total number of matching clients, independent of the window.
	pub total_count: i32,
	/// Clients within the requested window.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub clients: Vec<Client>,
}
