use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::errors::ProviderError;

pub mod api_football;
pub mod football_data;
pub mod rest;

pub use api_football::ApiFootball;
pub use football_data::FootballData;

/// Query string parameters. Inserting an existing key replaces its value.
pub type Query = BTreeMap<String, String>;

/// Anything that can answer a GET for `path` + `query` with a raw body.
#[async_trait]
pub trait Upstream: Send + Sync {
    fn name(&self) -> &'static str;

    async fn fetch(&self, path: &str, query: &Query) -> Result<Vec<u8>, ProviderError>;
}

/// Decodes a raw upstream body. Kept apart from fetching so callers that
/// only relay bytes never pay for (or fail on) decoding.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ProviderError> {
    Ok(serde_json::from_slice(body)?)
}

/// Builds a [`Query`] from literal pairs.
pub(crate) fn query<const N: usize>(pairs: [(&str, String); N]) -> Query {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}
