//! Dispatch contracts that hand signed URLs to arbitrary HTTP clients.

// self
use crate::{_prelude::*, signer::SignedUrl};

/// Describes how to turn a [`SignedUrl`] into an outbound GET request without constraining the
/// HTTP client type.
///
/// The trait is generic over both the request and error types so implementers can integrate
/// with any client builder while the core stays free of transport concerns.
pub trait SignedUrlDispatchExt<Request, Error>
where
	Self: Send + Sync,
{
	/// Builds (but does not send) a GET request targeting `url`.
	fn prepare_get(&self, url: &SignedUrl) -> Result<Request, Error>;
}

#[cfg(feature = "reqwest")]
impl SignedUrlDispatchExt<reqwest::Request, reqwest::Error> for reqwest::Client {
	fn prepare_get(&self, url: &SignedUrl) -> Result<reqwest::Request, reqwest::Error> {
		self.get(url.as_url().clone()).build()
	}
}

/// Prepares and sends a signed GET request through `client`, returning the raw response.
///
/// Response handling stays with the caller.
#[cfg(feature = "reqwest")]
pub async fn dispatch_reqwest(
	client: &reqwest::Client,
	url: &SignedUrl,
) -> Result<reqwest::Response> {
	let request = client.prepare_get(url).map_err(|e| Error::collaborator("HTTP dispatch", e))?;

	client.execute(request).await.map_err(|e| Error::collaborator("HTTP dispatch", e))
}
