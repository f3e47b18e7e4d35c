use std::time::Instant;

use async_trait::async_trait;
use reqwest::Url;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use super::{Query, Upstream};
use crate::errors::ProviderError;

/// Authenticated GET client bound to one upstream base URL.
///
/// Holds nothing but immutable configuration, so one instance can serve
/// any number of concurrent requests.
pub struct RestClient {
    name: &'static str,
    base_url: Url,
    client: reqwest::Client,
}

impl RestClient {
    /// Validates the base URL and prepares the auth header. Performs no I/O.
    pub fn new(
        name: &'static str,
        auth_header: &str,
        token: &str,
        base_url: &str,
    ) -> Result<Self, ProviderError> {
        let base_url = Url::parse(base_url).map_err(|e| ProviderError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(ProviderError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "expected an http(s) base URL".to_string(),
            });
        }

        let mut token = HeaderValue::from_str(token)?;
        token.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert("accept", HeaderValue::from_static("application/json"));
        headers.insert(HeaderName::from_bytes(auth_header.as_bytes())?, token);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            name,
            base_url,
            client,
        })
    }

    /// Appends `path` to the base URL's own path and merges `query` over the
    /// base URL's query pairs.
    pub fn endpoint_url(&self, path: &str, query: &Query) -> Result<Url, ProviderError> {
        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|_| ProviderError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: "URL cannot be a base".to_string(),
            })?
            .pop_if_empty()
            .extend(path.split('/').filter(|segment| !segment.is_empty()));

        let mut pairs: Query = url.query_pairs().into_owned().collect();
        pairs.extend(query.iter().map(|(k, v)| (k.clone(), v.clone())));

        if pairs.is_empty() {
            url.set_query(None);
        } else {
            url.query_pairs_mut().clear().extend_pairs(&pairs);
        }

        Ok(url)
    }
}

#[async_trait]
impl Upstream for RestClient {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn fetch(&self, path: &str, query: &Query) -> Result<Vec<u8>, ProviderError> {
        let url = self.endpoint_url(path, query)?;
        tracing::debug!("[{}] GET {}", self.name, url);

        let started = Instant::now();
        let response = self.client.get(url).send().await.inspect_err(|e| {
            metrics::counter!("upstream_requests_total", "provider" => self.name, "status" => "transport_error")
                .increment(1);
            tracing::warn!("[{}] request to {} failed: {}", self.name, path, e);
        })?;

        let status = response.status();
        metrics::counter!(
            "upstream_requests_total",
            "provider" => self.name,
            "status" => status.as_str().to_owned()
        )
        .increment(1);
        metrics::histogram!("upstream_request_duration_seconds", "provider" => self.name)
            .record(started.elapsed().as_secs_f64());

        if !status.is_success() {
            tracing::warn!("[{}] {} answered {}", self.name, path, status);
            return Err(ProviderError::Status(status));
        }

        Ok(response.bytes().await?.to_vec())
    }
}
