//! Models for the token status list (TSL) surface: the publication settings stored on a
//! service and the entries API used to render a status list.

// self
use crate::_prelude::*;

/// Settings controlling how a service publishes token status lists.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TslPublishConfig {
	/// Bits allocated per status entry; 1, 2, 4, or 8.
	pub bits: i32,
	/// Lifetime of a published list, in seconds.
	pub duration: i64,
	/// URI of the aggregation endpoint referenced from published lists, when any.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub aggregation_uri: Option<Url>,
}
impl Default for TslPublishConfig {
	fn default() -> Self {
		// One bit per entry (valid/invalid) and daily republication.
		Self { bits: 1, duration: 86_400, aggregation_uri: None }
	}
}

/// Status entry of a single token or credential within a status list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TslEntry {
	/// Index of the entry within the status list.
	pub index: i64,
	/// Status value; `0` means valid, `1` revoked, further values per the configured
	/// bit width.
	pub status: i32,
	/// Expiry of the referenced token, in milliseconds since the Unix epoch.
	pub expires_at: i64,
}
impl TslEntry {
	/// Referenced token's expiry as an [`OffsetDateTime`], when set.
	pub fn expiry(&self) -> Option<OffsetDateTime> {
		crate::_prelude::epoch_millis_to_datetime(self.expires_at)
	}
}

/// Request to the TSL entries API.
///
/// Entries are paginated; the defaults select the first five (`start=0`, `end=5`), matching
/// the other list APIs of the service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TslEntriesRequest {
	/// Start index of the requested window, inclusive.
	pub start: i32,
	/// End index of the requested window, exclusive.
	pub end: i32,
}
impl Default for TslEntriesRequest {
	fn default() -> Self {
		Self { start: 0, end: 5 }
	}
}

/// Next step after calling the TSL entries API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TslEntriesAction {
	/// The window was retrieved.
	Ok,
	/// The service publishes no status list.
	NotFound,
	/// The API call itself was wrong; fix the calling code before retrying.
	CallerError,
	/// A server-side error occurred on the service.
	ServerError,
}

/// Response from the TSL entries API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TslEntriesResponse {
	/// Common result envelope.
	#[serde(flatten)]
	pub result: ApiResult,
	/// Outcome of the lookup.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub action: Option<TslEntriesAction>,
	/// Start index of the returned window, inclusive.
	pub start: i32,
	/// End index of the returned window, exclusive.
	pub end: i32,
	/// Total number of entries in the status list.
	pub total_count: i32,
	/// Entries within the requested window.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub entries: Vec<TslEntry>,
}
