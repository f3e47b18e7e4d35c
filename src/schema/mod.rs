//! Decode targets for every upstream payload the proxy relays.
//!
//! API-Football wraps each payload in the same [`Envelope`]; football-data.org
//! shapes live in [`football_data`]. Upstream fields that are sometimes null
//! are `Option`s. Every struct falls back to defaults for missing keys, and
//! ids and names that arrive as `null` decode to their defaults too, so schema
//! drift upstream degrades to empty values instead of failures.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod fixtures;
pub mod football_data;
pub mod leagues;
pub mod players;
pub mod predictions;
pub mod teams;

/// Anything the local surface can answer with: it knows how many results it
/// carries and whether upstream complained.
pub trait ResultCount {
    fn result_count(&self) -> usize;

    fn upstream_errors(&self) -> &[String] {
        &[]
    }
}

/// The wrapper API-Football puts around every response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct Envelope<T> {
    pub get: String,
    #[serde(deserialize_with = "parameters_from_map_or_list")]
    pub parameters: BTreeMap<String, String>,
    #[serde(deserialize_with = "errors_from_map_or_list")]
    pub errors: Vec<String>,
    pub results: usize,
    pub paging: Paging,
    pub response: T,
}

impl<T> Envelope<T> {
    /// The payload, or `None` when upstream reported zero results.
    pub fn payload(&self) -> Option<&T> {
        (self.results > 0).then_some(&self.response)
    }
}

impl<T> ResultCount for Envelope<T> {
    fn result_count(&self) -> usize {
        self.results
    }

    fn upstream_errors(&self) -> &[String] {
        &self.errors
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Paging {
    pub current: u32,
    pub total: u32,
}

impl Default for Paging {
    fn default() -> Self {
        Self {
            current: 1,
            total: 1,
        }
    }
}

/// Upstream echoes parameters as an object, or as `[]` when there are none.
fn parameters_from_map_or_list<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Object(map) => Ok(map
            .into_iter()
            .map(|(key, value)| (key, scalar_to_string(value)))
            .collect()),
        Value::Array(items) if items.is_empty() => Ok(BTreeMap::new()),
        Value::Null => Ok(BTreeMap::new()),
        other => Err(de::Error::custom(format!(
            "expected parameters object, got {other}"
        ))),
    }
}

/// Errors come as `[]`, a list of messages, or an object of `field: message`.
fn errors_from_map_or_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items.into_iter().map(scalar_to_string).collect()),
        Value::Object(map) => Ok(map
            .into_iter()
            .map(|(key, value)| format!("{key}: {}", scalar_to_string(value)))
            .collect()),
        Value::Null => Ok(Vec::new()),
        other => Ok(vec![scalar_to_string(other)]),
    }
}

/// Decodes `null` the way a missing key decodes: to the field's default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn scalar_to_string(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// A payload that is a single object when found. Upstream sends `[]` (or
/// nothing) instead when the lookup is empty.
#[derive(Clone, Debug, PartialEq)]
pub struct Single<T>(pub Option<T>);

impl<T> Default for Single<T> {
    fn default() -> Self {
        Self(None)
    }
}

impl<T> Single<T> {
    pub fn as_ref(&self) -> Option<&T> {
        self.0.as_ref()
    }
}

impl<'de, T> Deserialize<'de> for Single<T>
where
    T: de::DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(Self(None)),
            Value::Array(items) if items.is_empty() => Ok(Self(None)),
            value => serde_json::from_value(value)
                .map(|inner| Self(Some(inner)))
                .map_err(de::Error::custom),
        }
    }
}

impl<T: Serialize> Serialize for Single<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.as_ref() {
            Some(inner) => inner.serialize(serializer),
            None => Vec::<()>::new().serialize(serializer),
        }
    }
}

/// A statistic that upstream reports either as a count or as text such as
/// `"55%"`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Count(i64),
    Ratio(f64),
    Text(String),
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Count(n) => write!(f, "{n}"),
            StatValue::Ratio(r) => write!(f, "{r}"),
            StatValue::Text(s) => f.write_str(s),
        }
    }
}

/// Any `{home, away}` pair.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct HomeAway<T> {
    pub home: T,
    pub away: T,
}

/// A `{home, away, total}` split where any side may be null or missing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Split<T> {
    pub home: Option<T>,
    pub away: Option<T>,
    pub total: Option<T>,
}

impl<T> Default for Split<T> {
    fn default() -> Self {
        Self {
            home: None,
            away: None,
            total: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamRef {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub logo: Option<String>,
}

/// A person reference where both fields may be null (assists, transfers).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonRef {
    pub id: Option<u32>,
    pub name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeagueRef {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub country: Option<String>,
    pub logo: Option<String>,
    pub flag: Option<String>,
    pub season: Option<u32>,
    pub round: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Birth {
    pub date: Option<String>,
    pub place: Option<String>,
    pub country: Option<String>,
}

/// `{total, percentage}` for one slice of minutes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinuteBucket {
    pub total: Option<u32>,
    pub percentage: Option<String>,
}

/// Counts broken down by 15-minute slices of play.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Minutes {
    #[serde(rename = "0-15")]
    pub m0_15: MinuteBucket,
    #[serde(rename = "16-30")]
    pub m16_30: MinuteBucket,
    #[serde(rename = "31-45")]
    pub m31_45: MinuteBucket,
    #[serde(rename = "46-60")]
    pub m46_60: MinuteBucket,
    #[serde(rename = "61-75")]
    pub m61_75: MinuteBucket,
    #[serde(rename = "76-90")]
    pub m76_90: MinuteBucket,
    #[serde(rename = "91-105")]
    pub m91_105: MinuteBucket,
    #[serde(rename = "106-120")]
    pub m106_120: MinuteBucket,
}
