//! Crate-level error types.
//!
//! The models themselves cannot fail; the only local failure mode is parsing a stored JSON
//! blob (issuer metadata, authorization-detail extension fields) into a structured map.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised while interpreting stored payloads.
#[derive(Debug, ThisError)]
pub enum Error {
	/// A field that is documented to hold a JSON object serialized as a string contains
	/// malformed data.
	#[error("Stored {field} data is malformed.")]
	MalformedMetadata {
		/// Wire name of the offending field.
		field: &'static str,
		/// Structured parsing failure with the path that failed.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}

/// Parses a JSON-object blob stored in a string field into a structured map.
///
/// Fails with [`Error::MalformedMetadata`] instead of producing partial output when the blob
/// is not a JSON object.
pub(crate) fn parse_stored_map(field: &'static str, raw: &str) -> Result<JsonMap<String, JsonValue>> {
	let mut deserializer = serde_json::Deserializer::from_str(raw);

	serde_path_to_error::deserialize(&mut deserializer).map_err(|source| {
		#[cfg(feature = "tracing")]
		tracing::debug!(field, path = %source.path(), "Stored metadata blob failed to parse.");

		Error::MalformedMetadata { field, source }
	})
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn valid_blob_parses_into_map() {
		let map = parse_stored_map("credentialsSupported", r#"{"a":{"b":1}}"#)
			.expect("Well-formed JSON object blob should parse.");

		assert_eq!(map["a"]["b"], 1);
	}

	#[test]
	fn malformed_blob_reports_field_name() {
		let err = parse_stored_map("otherFields", "{\"a\":")
			.expect_err("Truncated JSON blob must be rejected.");

		assert!(matches!(err, Error::MalformedMetadata { field: "otherFields", .. }));
		assert!(err.to_string().contains("otherFields"));
	}

	#[test]
	fn non_object_blob_is_rejected() {
		assert!(parse_stored_map("credentialsSupported", "[1,2,3]").is_err());
	}
}
