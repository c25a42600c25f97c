//! HTTP implementation of the aggregation client.
//!
//! Status handling lives here only; callers never interpret status codes.

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;
use traggr_core::{AggrClient, ResultRecord};
use url::Url;

use crate::error::{ClientError, ClientResult};
use crate::wire::wire_record;

/// Client for one aggregation endpoint.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpClient {
    /// Build a client for `base_url`, e.g. `http://traggr.local/api`.
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let parsed = Url::parse(base_url).map_err(|err| ClientError::InvalidUrl {
            url: base_url.to_string(),
            reason: err.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::InvalidUrl {
                url: base_url.to_string(),
                reason: format!("unsupported scheme {}", parsed.scheme()),
            });
        }

        Ok(Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn check(response: reqwest::Response) -> ClientResult<()> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_else(|_| status.to_string());
        Err(ClientError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl AggrClient for HttpClient {
    async fn ping(&self) -> anyhow::Result<()> {
        let url = format!("{}/ping", self.base_url);
        debug!(%url, "ping");
        let response = self.client.get(&url).send().await.map_err(ClientError::from)?;
        Self::check(response).await?;
        Ok(())
    }

    async fn post_results(
        &self,
        project: &str,
        sprint: &str,
        results: &[ResultRecord],
    ) -> anyhow::Result<()> {
        let url = format!("{}/results", self.base_url);
        let body = json!({
            "project": project,
            "sprint": sprint,
            "results": results.iter().map(wire_record).collect::<Vec<_>>(),
        });
        debug!(%url, count = results.len(), "posting results");
        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(ClientError::from)?;
        Self::check(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::HttpClient;
    use crate::error::ClientError;

    #[test]
    fn rejects_unparseable_url() {
        assert!(matches!(
            HttpClient::new("not a url"),
            Err(ClientError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn rejects_non_http_scheme() {
        assert!(matches!(
            HttpClient::new("ftp://traggr.local/api"),
            Err(ClientError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn trailing_slash_is_normalized() {
        let client = HttpClient::new("http://traggr.local/api/").expect("client");
        assert_eq!(client.base_url, "http://traggr.local/api");
    }
}
