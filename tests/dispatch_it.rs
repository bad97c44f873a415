#![cfg(feature = "reqwest")]

// crates.io
use httpmock::prelude::*;
use url::Url;
// self
use geocode_signer::{
	auth::{Credentials, ServiceId},
	error::Error,
	ext::{SignedUrlDispatchExt, dispatch_reqwest},
	reqwest::Client,
	signer::{RequestSigner, SignerConfig},
};

fn build_signer(base_url: &str) -> RequestSigner {
	let config = SignerConfig::builder(
		ServiceId::new("intiendols.basic.geocode.address")
			.expect("Service identifier fixture should be valid."),
	)
	.base_url(Url::parse(base_url).expect("Mock server URL should parse."))
	.build()
	.expect("Signer config fixture should build successfully.");

	RequestSigner::new(
		config,
		Credentials::parse("ABC123", "s3cr3t").expect("Credentials fixture should parse."),
	)
}

#[tokio::test]
async fn signed_url_reaches_service_path() {
	let server = MockServer::start_async().await;
	let signed = build_signer(&server.url("/rest/2/"))
		.build_url("Hatfield, Pretoria")
		.expect("Signing against the mock server should succeed.");
	let path = signed.as_url().path().to_owned();
	let geocode_mock = server
		.mock_async(|when, then| {
			when.method(GET).path(path.as_str()).query_param("ils_result_count", "1");
			then.status(200).header("content-type", "application/json").body("{\"code\":200}");
		})
		.await;
	let response = dispatch_reqwest(&Client::new(), &signed)
		.await
		.expect("Dispatching the signed URL should succeed.");

	assert_eq!(response.status().as_u16(), 200);
	assert!(path.starts_with("/rest/2/intiendols.basic.geocode.address/ABC123/"));

	geocode_mock.assert_async().await;
}

#[test]
fn prepared_request_preserves_signed_url() {
	let signed = build_signer("https://saas.afrigis.co.za/rest/2/")
		.build_url("Hatfield, Pretoria")
		.expect("Signing should succeed.");
	let request = Client::new().prepare_get(&signed).expect("GET request should build.");

	assert_eq!(request.url().as_str(), signed.as_url().as_str());
}

#[tokio::test]
async fn transport_failures_are_collaborator_errors() {
	// Port 9 (discard) is not expected to accept HTTP connections locally.
	let signed = build_signer("http://127.0.0.1:9/rest/2/")
		.build_url("Hatfield, Pretoria")
		.expect("Signing should succeed.");
	let err = dispatch_reqwest(&Client::new(), &signed)
		.await
		.expect_err("Dispatch to a closed port must fail.");

	assert!(matches!(err, Error::Collaborator { context: "HTTP dispatch", .. }));
}
