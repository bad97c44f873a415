// crates.io
use time::{OffsetDateTime, macros};
use url::{Url, form_urlencoded};
// self
use geocode_signer::{
	auth::{Credentials, IdentifierError, ServiceId},
	clock::FixedClock,
	error::{ConfigError, Error},
	signature::{self, KeyFallback, SignatureAlgorithm},
	signer::{RequestSigner, SignedUrl, SignerConfig, SigningRequest},
};

const SERVICE: &str = "intiendols.basic.geocode.address";
const SEARCH_TEXT: &str = "Hatfield, Pretoria";
const MESSAGE: &str = "ils_result_count=1&ils_location=Hatfield%2C+Pretoria/intiendols.basic.geocode.address/ABC123";

fn build_signer(secret: &str, use_trial: bool, use_timestamp: bool) -> RequestSigner {
	let config = SignerConfig::builder(
		ServiceId::new(SERVICE).expect("Service identifier fixture should be valid."),
	)
	.use_trial(use_trial)
	.use_timestamp(use_timestamp)
	.build()
	.expect("Signer config fixture should build successfully.");
	let credentials =
		Credentials::parse("ABC123", secret).expect("Credentials fixture should parse.");

	RequestSigner::new(config, credentials)
}

fn sign(signer: &RequestSigner, search_text: &str) -> SignedUrl {
	signer.build_url(search_text).expect("Signing fixture input should succeed.")
}

#[test]
fn known_vector_message_and_auth_code() {
	let signer = build_signer("s3cr3t", false, false);
	let request = signer.signing_request(SEARCH_TEXT, OffsetDateTime::now_utc());

	assert_eq!(request.canonical_message().as_str(), MESSAGE);

	let expected = signature::encode_url_safe(
		&signature::hmac_sha1(b"s3cr3t", MESSAGE.as_bytes())
			.expect("HMAC-SHA1 should accept any key length."),
	);
	let signed = sign(&signer, SEARCH_TEXT);

	assert_eq!(expected, "AW9mvkrGmUZMjPCLFN2bJHR6xds");
	assert_eq!(signed.auth_code().as_str(), expected);
}

#[test]
fn signing_is_deterministic_without_timestamps() {
	let signer = build_signer("s3cr3t", false, false);
	let first = sign(&signer, "12 Church Street, Cape Town");
	let second = sign(&signer, "12 Church Street, Cape Town");

	assert_eq!(first, second);
	assert_eq!(first.timestamp(), None);
}

#[test]
fn trial_mode_ignores_credentials() {
	for secret in ["", "s3cr3t", "other"] {
		let signed = sign(&build_signer(secret, true, false), SEARCH_TEXT);

		assert_eq!(signed.auth_code().as_str(), "trial");
		assert!(signed.as_str().contains("/ABC123/trial/?"));
	}
}

#[test]
fn signed_auth_codes_are_url_safe() {
	let signer = build_signer("s3cr3t", false, false);

	for idx in 0..256 {
		let signed = sign(&signer, &format!("Erf {idx}, Pretoria"));
		let code = signed.auth_code().as_str();

		assert!(!code.contains(['/', '+', '=']), "Auth code {code} must be URL-safe.");
		assert_eq!(code.len(), 27);
	}

	let fallback = RequestSigner::new(
		SignerConfig::builder(ServiceId::new(SERVICE).expect("Service fixture should be valid."))
			.use_timestamp(false)
			.key_fallback(KeyFallback::ApiKey)
			.build()
			.expect("Fallback config should build."),
		Credentials::parse("ABC123", "").expect("Credentials fixture should parse."),
	);

	// Standard Base64 of this digest contains `/` and `=`.
	assert_eq!(sign(&fallback, SEARCH_TEXT).auth_code().as_str(), "durka01wE5hhvVji2_Q8jwwdWgA");
}

#[test]
fn location_round_trips_through_percent_decoding() {
	let signer = build_signer("s3cr3t", false, true);

	for text in [
		SEARCH_TEXT,
		"",
		"  leading and trailing  ",
		"Straße 5, Zürich / Bahnhof",
		"a+b=c&d?e#f%g",
		"Ōsaka 大阪 🗾",
	] {
		let signed = sign(&signer, text);

		assert_eq!(signed.location().as_deref(), Some(text));

		let query = signed.as_str().split_once("/?").map(|(_, query)| query).unwrap_or_default();
		let decoded = form_urlencoded::parse(query.as_bytes())
			.find(|(name, _)| name == "ils_location")
			.map(|(_, value)| value.into_owned());

		assert_eq!(decoded.as_deref(), Some(text));
	}
}

#[test]
fn wall_clock_timestamp_is_within_tolerance() {
	let before = OffsetDateTime::now_utc().unix_timestamp();
	let signed = sign(&build_signer("s3cr3t", false, true), SEARCH_TEXT);
	let after = OffsetDateTime::now_utc().unix_timestamp();
	let timestamp = signed.timestamp().expect("Timestamped config must embed a timestamp.");

	assert!((before - 2..=after + 2).contains(&timestamp));

	let (path, _) = signed.as_str().split_once("/?").expect("Signed URL must carry a query.");
	let segments = path.rsplit('/').take(2).collect::<Vec<_>>();

	assert_eq!(segments[0], timestamp.to_string());
	assert_eq!(segments[1], signed.auth_code().as_str());
}

#[test]
fn injected_clock_pins_timestamp() {
	let instant = macros::datetime!(2023-11-14 22:13:20.999 UTC);
	let signer = build_signer("s3cr3t", false, true).with_clock(FixedClock::new(instant));
	let signed = signer.build_url(SEARCH_TEXT).expect("Signing with a fixed clock should succeed.");

	assert_eq!(signed.timestamp(), Some(1_700_000_000));
	assert_eq!(signed.auth_code().as_str(), "EIJqVOCxsNFvG3RBB4b6YoMy6OA");
	assert_eq!(
		signed.as_str(),
		"https://saas.afrigis.co.za/rest/2/intiendols.basic.geocode.address/ABC123/EIJqVOCxsNFvG3RBB4b6YoMy6OA/1700000000/?ils_result_count=1&ils_location=Hatfield%2C+Pretoria"
	);
}

#[test]
fn empty_secret_signs_with_service_identifier() {
	let signed = sign(&build_signer("", false, false), SEARCH_TEXT);
	let expected = SignatureAlgorithm::HmacSha1
		.sign(SERVICE.as_bytes(), MESSAGE)
		.expect("Signing with the service identifier should succeed.");

	assert_eq!(signed.auth_code(), &expected);
	assert_eq!(expected.as_str(), "ttE0PHzasK8ysG2bbJrfz1s5ofQ");
}

#[test]
fn explicit_signing_request_matches_signer_output() {
	let signer = build_signer("s3cr3t", false, false);
	let request = SigningRequest::new(
		SEARCH_TEXT,
		ServiceId::new(SERVICE).expect("Service fixture should be valid."),
		signer.credentials().key.clone(),
	);

	assert_eq!(
		signer.sign(&request).expect("Explicit request should sign."),
		sign(&signer, SEARCH_TEXT)
	);
}

#[test]
fn invalid_inputs_surface_typed_errors() {
	assert!(matches!(
		Credentials::parse("ABC/123", "s3cr3t"),
		Err(Error::Config(ConfigError::InvalidIdentifier(_)))
	));

	let base = Url::parse("file:///tmp/").expect("Fixture URL should parse.");

	assert!(matches!(
		SignerConfig::builder(ServiceId::new(SERVICE).expect("Service fixture should be valid."))
			.base_url(base)
			.build(),
		Err(ConfigError::UnsupportedScheme { .. })
	));
}

#[test]
fn identifiers_that_would_change_the_request_path_are_rejected() {
	for key in ["AB#C", "AB?C", "AB%2FC"] {
		assert!(
			matches!(
				Credentials::parse(key, "s3cr3t"),
				Err(Error::Config(ConfigError::InvalidIdentifier(
					IdentifierError::ContainsDelimiter { kind: "ApiKey", .. }
				)))
			),
			"Key {key:?} must be rejected before signing."
		);
	}

	assert_eq!(ServiceId::new("..").unwrap_err(), IdentifierError::DotSegment { kind: "Service" });

	let signed = sign(&build_signer("s3cr3t", false, false), SEARCH_TEXT);

	assert_eq!(signed.as_url().as_str(), signed.as_str());
	assert_eq!(signed.location().as_deref(), Some(SEARCH_TEXT));
}

#[test]
fn signer_is_shareable_across_threads() {
	let signer = std::sync::Arc::new(build_signer("s3cr3t", false, false));
	let handles = (0..4)
		.map(|_| {
			let signer = signer.clone();

			std::thread::spawn(move || sign(&signer, SEARCH_TEXT).auth_code().to_string())
		})
		.collect::<Vec<_>>();

	for handle in handles {
		assert_eq!(
			handle.join().expect("Signing thread should not panic."),
			"AW9mvkrGmUZMjPCLFN2bJHR6xds"
		);
	}
}
