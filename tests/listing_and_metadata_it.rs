//! Management-surface coverage: list pagination contracts, the service configuration
//! record, and the stored JSON blobs that only parse on demand.

// crates.io
use url::Url;
// self
use authz_api_types::{
	client::{Client, ClientListRequest, ClientListResponse},
	credential::CredentialIssuerMetadata,
	data::{AuthzDetailsElement, Pair, Scope},
	error::Error,
	service::Service,
	tsl::{TslEntriesRequest, TslEntriesResponse, TslEntry, TslPublishConfig},
};

#[test]
fn list_requests_share_the_first_five_window_default() {
	let clients = ClientListRequest::default();
	let tsl = TslEntriesRequest::default();

	assert_eq!((clients.start, clients.end), (0, 5));
	assert_eq!((tsl.start, tsl.end), (0, 5));
	assert_eq!(clients.developer, None, "All developers are listed by default.");
}

#[test]
fn client_list_response_window_is_independent_of_total() {
	let response: ClientListResponse = serde_json::from_str(
		r#"{
			"start": 0,
			"end": 5,
			"developer": "jane",
			"totalCount": 12,
			"clients": [{"clientId": 1, "clientName": "App One"}, {"clientId": 2}]
		}"#,
	)
	.expect("Client list response should deserialize.");

	assert_eq!(response.total_count, 12);
	assert_eq!(response.clients.len(), 2, "The window holds fewer entries than the total.");
	assert_eq!(response.clients[0].client_name.as_deref(), Some("App One"));
	assert_eq!(response.clients[1].client_identifier(), "2");
}

#[test]
fn tsl_entries_window_mirrors_the_request_shape() {
	let response = TslEntriesResponse {
		start: 5,
		end: 10,
		total_count: 7,
		entries: vec![
			TslEntry { index: 5, status: 0, expires_at: 1_735_689_600_000 },
			TslEntry { index: 6, status: 1, expires_at: 1_735_689_600_000 },
		],
		..Default::default()
	};
	let json = serde_json::to_string(&response).expect("Entries response should serialize.");
	let back: TslEntriesResponse =
		serde_json::from_str(&json).expect("Entries response should deserialize.");

	assert_eq!(back, response);
	assert_eq!(back.entries[1].status, 1, "Status 1 marks a revoked token.");
}

#[test]
fn service_record_nests_the_feature_configurations() {
	let service = Service {
		service_name: Some("prod".into()),
		issuer: Some(
			Url::parse("https://as.example.com").expect("Issuer URL should parse."),
		),
		supported_scopes: vec![Scope::named("openid"), Scope::named("profile")],
		supported_grant_types: vec![
			"authorization_code".into(),
			"urn:openid:params:grant-type:ciba".into(),
		],
		access_token_duration: 3600,
		tsl_publish_config: Some(TslPublishConfig::default()),
		credential_issuer_metadata: Some(CredentialIssuerMetadata {
			credential_issuer: Some(
				Url::parse("https://as.example.com").expect("Issuer URL should parse."),
			),
			..Default::default()
		}),
		attributes: vec![Pair::new("tier", "gold")],
		..Default::default()
	};
	let json = serde_json::to_string(&service).expect("Service should serialize.");

	assert!(json.contains("\"tslPublishConfig\":{\"bits\":1,\"duration\":86400}"));

	let back: Service = serde_json::from_str(&json).expect("Service should deserialize.");

	assert_eq!(back, service);
	assert!(
		!back
			.credential_issuer_metadata
			.as_ref()
			.expect("The metadata block should survive the round trip.")
			.is_empty()
	);
}

#[test]
fn malformed_stored_blob_is_the_only_local_failure() {
	let metadata = CredentialIssuerMetadata {
		credentials_supported: Some("{\"UniversityDegree\":".into()),
		..Default::default()
	};
	let err = metadata
		.credentials_supported_map()
		.expect_err("A truncated blob must be rejected, not partially parsed.");

	assert!(matches!(err, Error::MalformedMetadata { field: "credentialsSupported", .. }));
	assert!(
		err.to_string().contains("credentialsSupported"),
		"The error message names the offending field."
	);

	let element = AuthzDetailsElement {
		kind: Some("payment_initiation".into()),
		other_fields: Some(r#"{"instructedAmount":{"currency":"EUR","amount":"123.50"}}"#.into()),
		..Default::default()
	};
	let map = element.to_map().expect("A well-formed blob merges cleanly.");

	assert_eq!(map["type"], "payment_initiation");
	assert_eq!(map["instructedAmount"]["currency"], "EUR");
}

#[test]
fn partial_client_json_keeps_wire_defaults() {
	// A response from an older service revision that predates most fields.
	let client: Client = serde_json::from_str(r#"{"clientId": 42}"#)
		.expect("Sparse client JSON should deserialize.");

	assert_eq!(client.client_id, 42);
	assert!(!client.client_id_alias_enabled);
	assert!(client.redirect_uris.is_empty());
	assert_eq!(client.created(), None, "A missing timestamp is unset, not the epoch.");
}
