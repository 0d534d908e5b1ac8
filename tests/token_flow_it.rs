//! Wire-level walkthrough of the token endpoint's backing calls: the single-call grants,
//! the Resource Owner Password Credentials detour through issue/fail, revocation, and the
//! introspection call a protected resource makes afterwards.

// self
use authz_api_types::{
	introspection::{IntrospectionAction, IntrospectionRequest, IntrospectionResponse},
	token::{
		RevocationAction, RevocationRequest, RevocationResponse, TokenAction, TokenFailReason,
		TokenFailRequest, TokenIssueAction, TokenIssueRequest, TokenIssueResponse, TokenRequest,
		TokenResponse,
	},
};

#[test]
fn authorization_code_grant_finishes_in_one_call() {
	let request = TokenRequest {
		client_id: Some("26478243745571".into()),
		client_secret: Some("gXz9...".into()),
		..TokenRequest::with_parameters("grant_type=authorization_code&code=Xv_code_1")
	};
	let json = serde_json::to_string(&request).expect("Token request should serialize.");

	assert!(json.contains("\"clientId\":\"26478243745571\""));

	let response: TokenResponse = serde_json::from_str(
		r#"{
			"resultCode": "A050001",
			"resultMessage": "[A050001] The token request was processed successfully.",
			"action": "OK",
			"responseContent": "{\"access_token\":\"at-1\",\"token_type\":\"Bearer\",\"expires_in\":3600}",
			"accessToken": "at-1",
			"accessTokenExpiresAt": 1735689600000,
			"accessTokenDuration": 3600,
			"refreshToken": "rt-1",
			"refreshTokenExpiresAt": 1738368000000,
			"grantType": "authorization_code",
			"clientId": 26478243745571,
			"subject": "user-123",
			"scopes": ["openid", "profile"]
		}"#,
	)
	.expect("Token response should deserialize.");

	assert_eq!(response.action, Some(TokenAction::Ok));
	assert_eq!(response.grant_type.as_deref(), Some("authorization_code"));
	assert!(response.access_token_expiry().is_some());
	assert!(
		response.refresh_token_expiry().expect("Refresh expiry should be set.")
			> response.access_token_expiry().expect("Access expiry should be set."),
		"The refresh token outlives the access token in this fixture."
	);
	assert_eq!(
		response.response_content.as_deref().expect("OK carries a pre-rendered body."),
		r#"{"access_token":"at-1","token_type":"Bearer","expires_in":3600}"#,
		"The rendered body must pass through untouched."
	);
}

#[test]
fn password_grant_detours_through_the_issue_call() {
	let response: TokenResponse = serde_json::from_str(
		r#"{
			"action": "PASSWORD",
			"ticket": "tok-ticket-1",
			"username": "john",
			"password": "correct horse battery staple"
		}"#,
	)
	.expect("Password-grant token response should deserialize.");

	assert_eq!(response.action, Some(TokenAction::Password));

	// The endpoint validated the credentials; now it trades the ticket for tokens.
	let issue = TokenIssueRequest::new(
		response.ticket.clone().expect("PASSWORD always carries a ticket."),
		"user-123",
	);

	assert_eq!(issue.ticket, response.ticket);

	let issued: TokenIssueResponse = serde_json::from_str(
		r#"{
			"action": "OK",
			"responseContent": "{\"access_token\":\"at-2\",\"token_type\":\"Bearer\"}",
			"accessToken": "at-2",
			"accessTokenExpiresAt": 1735689600000
		}"#,
	)
	.expect("Token issue response should deserialize.");

	assert_eq!(issued.action, Some(TokenIssueAction::Ok));
	assert!(issued.access_token_expiry().is_some());
}

#[test]
fn password_grant_failure_names_the_reason_on_the_wire() {
	let request = TokenFailRequest::new(
		"tok-ticket-2",
		TokenFailReason::InvalidResourceOwnerCredentials,
	);
	let json = serde_json::to_string(&request).expect("Token fail request should serialize.");

	assert!(json.contains("\"reason\":\"INVALID_RESOURCE_OWNER_CREDENTIALS\""));
	assert!(json.contains("\"ticket\":\"tok-ticket-2\""));
}

#[test]
fn revocation_succeeds_with_an_empty_body() {
	let request = RevocationRequest::with_parameters("token=at-1&token_type_hint=access_token");

	assert!(request.parameters.is_some());

	let response: RevocationResponse = serde_json::from_str(r#"{"action":"OK"}"#)
		.expect("Revocation response should deserialize.");

	assert_eq!(response.action, Some(RevocationAction::Ok));
	assert!(response.response_content.is_none(), "A revoked token yields an empty 200 body.");
}

#[test]
fn introspection_classifies_an_insufficient_token() {
	let request = IntrospectionRequest {
		scopes: vec!["write".into()],
		..IntrospectionRequest::with_token("at-1")
	};
	let json = serde_json::to_string(&request).expect("Introspection request should serialize.");

	assert!(json.contains("\"token\":\"at-1\""));
	assert!(json.contains("\"maxAge\":0"), "Numeric fields serialize even when unset.");

	let response: IntrospectionResponse = serde_json::from_str(
		r#"{
			"action": "FORBIDDEN",
			"responseContent": "Bearer error=\"insufficient_scope\"",
			"existent": true,
			"usable": true,
			"sufficient": false,
			"clientId": 26478243745571,
			"subject": "user-123",
			"scopes": ["read"]
		}"#,
	)
	.expect("Introspection response should deserialize.");

	assert_eq!(response.action, Some(IntrospectionAction::Forbidden));
	assert!(response.existent && response.usable);
	assert!(!response.sufficient, "The token lacks the `write` scope.");
	assert!(
		response
			.response_content
			.as_deref()
			.expect("Error actions carry a WWW-Authenticate value.")
			.starts_with("Bearer "),
	);
}
