//! Models for the grant management endpoint's backing API (Grant Management for OAuth 2.0).

// self
use crate::_prelude::*;

/// Grant management actions a client can request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GrantManagementAction {
	/// Retrieve the current contents of a grant.
	Query,
	/// Revoke a grant and everything issued under it.
	Revoke,
}

/// Request to the service's grant management API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GMRequest {
	/// Requested action.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub gm_action: Option<GrantManagementAction>,
	/// Grant ID from the request path.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub grant_id: Option<String>,
	/// Access token presented at the grant management endpoint.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub access_token: Option<String>,
	/// Subject the caller expects the grant to belong to.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub subject: Option<String>,
	/// Value of the `DPoP` header, passed through for proof validation by the service.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub dpop: Option<String>,
	/// HTTP method of the grant management request, for DPoP validation.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub htm: Option<String>,
	/// URL of the grant management endpoint, for DPoP validation.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub htu: Option<String>,
}

/// Next step the grant management endpoint must take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GMAction {
	/// Respond `200 OK` with `response_content` as `application/json`; the grant
	/// contents for a query.
	Ok,
	/// Respond `204 No Content`; the grant was revoked.
	NoContent,
	/// Respond `401 Unauthorized` with `response_content` as `application/json` and a
	/// `WWW-Authenticate` challenge.
	Unauthorized,
	/// Respond `403 Forbidden` with `response_content` as `application/json`.
	Forbidden,
	/// Respond `404 Not Found` with `response_content` as `application/json`.
	NotFound,
	/// The API call itself was wrong; fix the calling code before retrying.
	CallerError,
	/// A server-side error occurred on the service.
	ServerError,
}

/// Response from the service's grant management API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GMResponse {
	/// Common result envelope.
	#[serde(flatten)]
	pub result: ApiResult,
	/// Next step for the grant management endpoint.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub action: Option<GMAction>,
	/// Pre-rendered response body; opaque pass-through.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub response_content: Option<String>,
	/// Nonce the client must use in its next DPoP proof, when the service demands one.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub dpop_nonce: Option<String>,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn gm_query_round_trips() {
		let request = GMRequest {
			gm_action: Some(GrantManagementAction::Query),
			grant_id: Some("grant-1".into()),
			access_token: Some("at".into()),
			..Default::default()
		};
		let json = serde_json::to_string(&request).expect("GM request should serialize.");

		assert!(json.contains("\"gmAction\":\"QUERY\""));

		let back: GMRequest = serde_json::from_str(&json).expect("GM request should deserialize.");

		assert_eq!(back, request);
	}

	#[test]
	fn caller_error_is_distinct_from_server_error() {
		assert_ne!(
			serde_json::to_string(&GMAction::CallerError).expect("Action should serialize."),
			serde_json::to_string(&GMAction::ServerError).expect("Action should serialize.")
		);
	}
}
