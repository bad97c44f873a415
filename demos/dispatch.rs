//! Signs a request and sends it through reqwest to a local mock of the geocoding service.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use url::Url;
// self
use geocode_signer::{
	auth::{Credentials, ServiceId},
	ext::dispatch_reqwest,
	reqwest::Client,
	signer::{RequestSigner, SignerConfig},
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let config = SignerConfig::builder(ServiceId::new("intiendols.basic.geocode.address")?)
		.base_url(Url::parse(&server.url("/rest/2/"))?)
		.build()?;
	let signer = RequestSigner::new(config, Credentials::parse("demo-key", "demo-secret")?);
	let signed = signer.build_url("Hatfield, Pretoria")?;
	let geocode_mock = server
		.mock_async(|when, then| {
			when.method(GET).path(signed.as_url().path()).query_param("ils_result_count", "1");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"code\":200,\"result\":[]}");
		})
		.await;
	let response = dispatch_reqwest(&Client::new(), &signed).await?;

	println!("{signed} -> {}", response.status());

	geocode_mock.assert_async().await;

	Ok(())
}
