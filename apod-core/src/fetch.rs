use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use std::fmt::Debug;

pub mod http;

pub use self::http::HttpFetch;

/// Capability that performs one HTTP GET. Injected into the loader so the
/// caller decides how requests actually go out.
#[async_trait]
pub trait Fetch: Send + Sync + Debug {
    type Response: FetchResponse<Error = Self::Error>;
    type Error: std::error::Error + Send + Sync + 'static;

    async fn fetch(&self, url: &str) -> Result<Self::Response, Self::Error>;
}

/// Response handed back by a [`Fetch`] capability. The body is decoded
/// asynchronously, at most once.
#[async_trait]
pub trait FetchResponse: Send + Sized {
    type Error: std::error::Error + Send + Sync + 'static;

    fn status(&self) -> StatusCode;

    async fn json(self) -> Result<Value, Self::Error>;
}

