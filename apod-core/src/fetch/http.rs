use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde_json::Value;
use std::time::Duration;

use super::{Fetch, FetchResponse};

const USER_AGENT: &str = concat!("apod-loader/", env!("CARGO_PKG_VERSION"));

/// [`Fetch`] backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpFetch {
    http: Client,
}

impl HttpFetch {
    pub fn new() -> anyhow::Result<Self> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http })
    }

    /// Client whose requests fail with a timeout error once `timeout`
    /// elapses, covering connect, headers and body.
    pub fn with_timeout(timeout: Duration) -> anyhow::Result<Self> {
        let http = Client::builder().user_agent(USER_AGENT).timeout(timeout).build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl Fetch for HttpFetch {
    type Response = Response;
    type Error = reqwest::Error;

    async fn fetch(&self, url: &str) -> Result<Response, reqwest::Error> {
        self.http.get(url).send().await
    }
}

#[async_trait]
impl FetchResponse for Response {
    type Error = reqwest::Error;

    fn status(&self) -> StatusCode {
        Response::status(self)
    }

    async fn json(self) -> Result<Value, reqwest::Error> {
        Response::json::<Value>(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::{io::AsyncReadExt, net::TcpListener};

    #[test]
    fn user_agent_carries_crate_version() {
        assert!(USER_AGENT.starts_with("apod-loader/"));
        assert!(USER_AGENT.len() > "apod-loader/".len());
    }

    #[test]
    fn builds_with_default_client() {
        assert!(HttpFetch::new().is_ok());
    }

    #[tokio::test]
    async fn unparsable_url_is_a_transport_error() {
        let fetch = HttpFetch::new().unwrap();
        let err = fetch.fetch("not a url").await.unwrap_err();
        assert!(err.is_builder());
    }

    #[tokio::test]
    async fn silent_upstream_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        // Accept and read the request, never answer.
        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            tokio::time::sleep(Duration::from_secs(10)).await;
        });

        let fetch = HttpFetch::with_timeout(Duration::from_millis(200)).unwrap();
        let err = fetch.fetch(&format!("http://{addr}/apod")).await.unwrap_err();

        assert!(err.is_timeout());
        server.abort();
    }
}
