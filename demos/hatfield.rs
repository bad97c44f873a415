//! Prints a signed geocode URL for "Hatfield, Pretoria".
//!
//! Credentials come from `GEOCODE_KEY` and `GEOCODE_SECRET`; without a key the demo falls back to
//! the trial auth code.

// std
use std::env;
// crates.io
use color_eyre::Result;
// self
use geocode_signer::{
	auth::{Credentials, ServiceId},
	ext::{CredentialsSource, StaticCredentials},
	signer::{RequestSigner, SignerConfig},
};

fn main() -> Result<()> {
	color_eyre::install()?;

	let key = env::var("GEOCODE_KEY").ok();
	let secret = env::var("GEOCODE_SECRET").unwrap_or_default();
	let config = SignerConfig::builder(ServiceId::new("intiendols.basic.geocode.address")?)
		.use_trial(key.is_none())
		.build()?;
	let source = StaticCredentials::new(Credentials::parse(
		key.as_deref().unwrap_or("demo-key"),
		secret,
	)?);
	let signer = RequestSigner::new(config, source.credentials()?);
	let signed = signer.build_url("Hatfield, Pretoria")?;

	println!("Full URL:\n{signed}");

	Ok(())
}
