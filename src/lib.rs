//! Typed request/response models for a hosted OAuth 2.0 / OpenID Connect / Verifiable
//! Credentials authorization service API.
//!
//! Every type in this crate mirrors a documented wire payload: requests are populated right
//! before calling the service, responses are deserialized from its JSON replies, and the
//! `Action` enumerations carried by responses tell the calling endpoint which HTTP status and
//! body to produce. The crate holds no protocol engine, no transport, and no cryptography;
//! pre-rendered bodies such as `response_content` travel through it as opaque strings.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod authorization;
pub mod backchannel;
pub mod client;
pub mod credential;
pub mod data;
pub mod device;
pub mod error;
pub mod federation;
pub mod grant_management;
pub mod introspection;
pub mod native_sso;
pub mod par;
pub mod service;
pub mod token;
pub mod tsl;
pub mod userinfo;

mod _prelude {
	pub use std::fmt::{Display, Formatter, Result as FmtResult};

	pub use serde::{Deserialize, Serialize};
	pub use serde_json::{Map as JsonMap, Value as JsonValue};
	pub use thiserror::Error as ThisError;
	pub use time::OffsetDateTime;
	pub use url::Url;

	pub use crate::{
		data::{ApiResult, Property},
		error::{Error, Result},
	};

	/// Converts an epoch-millisecond wire value into an [`OffsetDateTime`].
	///
	/// Zero and negative values are treated as "unset" since the remote service never issues
	/// artifacts dated at or before the Unix epoch.
	pub fn epoch_millis_to_datetime(millis: i64) -> Option<OffsetDateTime> {
		if millis <= 0 {
			return None;
		}

		OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000).ok()
	}
}

pub use url;
