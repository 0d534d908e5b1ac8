//! Wire-level walkthrough of the authorization code flow: the authorization endpoint calls
//! the authorization API, interacts with the end user, and finishes with the issue or fail
//! API.

// crates.io
use time::macros;
// self
use authz_api_types::{
	authorization::{
		AuthorizationAction, AuthorizationFailAction, AuthorizationFailReason,
		AuthorizationFailRequest, AuthorizationFailResponse, AuthorizationIssueAction,
		AuthorizationIssueRequest, AuthorizationIssueResponse, AuthorizationRequest,
		AuthorizationResponse, Prompt,
	},
	data::{DynamicScope, Property},
};

const TICKET: &str = "c4iy3TWGn74UMO7ihRl0ZS8OEUzV9axBlBbJbqxH-9Q";

fn interaction_response_json() -> String {
	format!(
		r#"{{
			"resultCode": "A004001",
			"resultMessage": "[A004001] The request was processed successfully.",
			"action": "INTERACTION",
			"ticket": "{TICKET}",
			"clientId": 26478243745571,
			"clientIdAlias": "my-app",
			"clientIdAliasUsed": true,
			"clientName": "My App",
			"scopes": [{{"name": "openid", "defaultEntry": false}}, {{"name": "profile"}}],
			"dynamicScopes": [{{"name": "consent", "value": "consent:urn:example:tx-1"}}],
			"claims": ["name", "email"],
			"acrs": ["urn:mace:incommon:iap:silver"],
			"acrEssential": true,
			"maxAge": 86400,
			"prompts": ["LOGIN", "CONSENT"],
			"resources": ["https://rs.example.com/api"]
		}}"#
	)
}

#[test]
fn authorization_response_drives_the_interaction_path() {
	let request = AuthorizationRequest::with_parameters(
		"response_type=code&client_id=my-app&scope=openid%20profile",
	);
	let request_json =
		serde_json::to_string(&request).expect("Authorization request should serialize.");

	assert!(request_json.contains("\"parameters\""));
	assert!(!request_json.contains("\"context\""), "Unset fields must be omitted.");

	let response: AuthorizationResponse = serde_json::from_str(&interaction_response_json())
		.expect("Authorization response should deserialize.");

	assert_eq!(response.action, Some(AuthorizationAction::Interaction));
	assert_eq!(response.ticket.as_deref(), Some(TICKET));
	assert_eq!(response.client_identifier(), "my-app", "The alias was used by the client.");
	assert_eq!(response.scopes.len(), 2);
	assert_eq!(response.scopes[1].name.as_deref(), Some("profile"));
	assert_eq!(
		response.dynamic_scopes,
		vec![DynamicScope::new("consent", "consent:urn:example:tx-1")]
	);
	assert!(response.acr_essential);
	assert_eq!(response.max_age, 86400);
	assert_eq!(response.prompts, vec![Prompt::Login, Prompt::Consent]);
	assert_eq!(response.resources[0].as_str(), "https://rs.example.com/api");
}

#[test]
fn issue_call_finishes_the_flow_with_a_redirect() {
	let request = AuthorizationIssueRequest {
		auth_time: 1_735_686_000,
		acr: Some("urn:mace:incommon:iap:silver".into()),
		claims: Some(r#"{"name":"John Doe","email":"john@example.com"}"#.into()),
		properties: vec![Property::new("department", "sales").hidden()],
		..AuthorizationIssueRequest::new(TICKET, "user-123")
	};
	let json = serde_json::to_string(&request).expect("Issue request should serialize.");

	assert!(json.contains(&format!("\"ticket\":\"{TICKET}\"")));
	assert!(json.contains("\"authTime\":1735686000"));

	let response: AuthorizationIssueResponse = serde_json::from_str(
		r#"{
			"resultCode": "A040001",
			"resultMessage": "[A040001] The authorization code was issued.",
			"action": "LOCATION",
			"responseContent": "https://app.example.com/cb?code=Xv_code_1&state=xyz",
			"authorizationCode": "Xv_code_1",
			"accessTokenExpiresAt": 1735689600000
		}"#,
	)
	.expect("Issue response should deserialize.");

	assert_eq!(response.action, Some(AuthorizationIssueAction::Location));
	assert_eq!(response.authorization_code.as_deref(), Some("Xv_code_1"));
	assert_eq!(
		response.response_content.as_deref(),
		Some("https://app.example.com/cb?code=Xv_code_1&state=xyz"),
		"The Location value must pass through untouched."
	);
	assert_eq!(response.access_token_expiry(), Some(macros::datetime!(2025-01-01 00:00 UTC)));
}

#[test]
fn fail_call_finishes_the_flow_with_an_error_redirect() {
	let request = AuthorizationFailRequest::new(TICKET, AuthorizationFailReason::Denied)
		.description("The end user pressed the deny button.");
	let json = serde_json::to_string(&request).expect("Fail request should serialize.");

	assert!(json.contains("\"reason\":\"DENIED\""));

	let response: AuthorizationFailResponse = serde_json::from_str(
		r#"{
			"action": "LOCATION",
			"responseContent": "https://app.example.com/cb?error=access_denied&state=xyz"
		}"#,
	)
	.expect("Fail response should deserialize.");

	assert_eq!(response.action, Some(AuthorizationFailAction::Location));
	assert!(
		response
			.response_content
			.as_deref()
			.expect("An error redirect must carry a Location value.")
			.contains("error=access_denied")
	);
}

#[test]
fn every_fail_reason_round_trips_by_name() {
	let reasons = [
		(AuthorizationFailReason::Unknown, "\"UNKNOWN\""),
		(AuthorizationFailReason::NotLoggedIn, "\"NOT_LOGGED_IN\""),
		(AuthorizationFailReason::MaxAgeNotSatisfied, "\"MAX_AGE_NOT_SATISFIED\""),
		(AuthorizationFailReason::DifferentSubject, "\"DIFFERENT_SUBJECT\""),
		(AuthorizationFailReason::AcrNotSatisfied, "\"ACR_NOT_SATISFIED\""),
		(AuthorizationFailReason::Denied, "\"DENIED\""),
		(AuthorizationFailReason::ServerError, "\"SERVER_ERROR\""),
		(AuthorizationFailReason::NotAuthenticated, "\"NOT_AUTHENTICATED\""),
		(AuthorizationFailReason::AccountSelectionRequired, "\"ACCOUNT_SELECTION_REQUIRED\""),
		(AuthorizationFailReason::ConsentRequired, "\"CONSENT_REQUIRED\""),
		(AuthorizationFailReason::InteractionRequired, "\"INTERACTION_REQUIRED\""),
		(AuthorizationFailReason::InvalidTarget, "\"INVALID_TARGET\""),
	];

	for (reason, wire) in reasons {
		assert_eq!(
			serde_json::to_string(&reason).expect("Fail reason should serialize."),
			wire,
			"Wire names are a compatibility contract."
		);
		assert_eq!(
			serde_json::from_str::<AuthorizationFailReason>(wire)
				.expect("Fail reason should deserialize by name."),
			reason
		);
	}
}
