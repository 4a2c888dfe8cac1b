use anyhow::{Context, Result};
use reqwest::Url;
use tracing::debug;

use crate::{
    config::{Config, DEFAULT_API_KEY, DEFAULT_ENDPOINT},
    fetch::{Fetch, FetchResponse},
    model::{PageData, RouteParams},
};

/// Loads the APOD page data through an injected [`Fetch`] capability.
///
/// Built once from configuration; each [`ApodLoader::load`] call is
/// independent and issues exactly one request.
#[derive(Debug, Clone)]
pub struct ApodLoader {
    request_url: String,
    /// Request URL with the key redacted, for logs.
    log_url: String,
}

impl Default for ApodLoader {
    fn default() -> Self {
        Self {
            request_url: format!("{DEFAULT_ENDPOINT}?api_key={DEFAULT_API_KEY}"),
            log_url: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl ApodLoader {
    pub fn from_config(config: &Config) -> Result<Self> {
        let endpoint = config.endpoint();
        let url = Url::parse_with_params(endpoint, &[("api_key", config.api_key())])
            .with_context(|| format!("Invalid APOD endpoint URL: {endpoint}"))?;

        Ok(Self { request_url: url.into(), log_url: endpoint.to_string() })
    }

    pub fn request_url(&self) -> &str {
        &self.request_url
    }

    /// Fetch the APOD resource and turn the response into [`PageData`].
    ///
    /// - 2xx: body decoded as JSON into [`PageData::Loaded`].
    /// - any other status: [`PageData::Failed`] with the fixed message.
    ///
    /// Errors raised by `fetch` itself, or by decoding a 2xx body, are
    /// returned as-is. Route parameters are ignored.
    pub async fn load<F>(&self, fetch: &F, _params: &RouteParams) -> Result<PageData, F::Error>
    where
        F: Fetch + ?Sized,
    {
        debug!(url = %self.log_url, "requesting APOD");

        let response = fetch.fetch(&self.request_url).await?;
        let status = response.status();

        if status.is_success() {
            let apod = response.json().await?;
            debug!(status = status.as_u16(), "APOD loaded");
            return Ok(PageData::Loaded { apod });
        }

        // Body is discarded unread; only the status is surfaced.
        debug!(status = status.as_u16(), "APOD request failed");

        Ok(PageData::failed(status.as_u16()))
    }
}

/// Load with the default endpoint and credential.
pub async fn load<F>(fetch: &F, params: &RouteParams) -> Result<PageData, F::Error>
where
    F: Fetch + ?Sized,
{
    ApodLoader::default().load(fetch, params).await
}
