/// Serializable record types written to stdout.
///
/// `ProfileRecord` is the pass-through shape produced by the external fetch
/// routine; `ErrorOutput` is the envelope written in its place on failure.
use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A string → string mapping, as used for links, songs and theme entries.
pub type StringMap = BTreeMap<String, String>;

/// A user's public profile, as emitted by the fetch routine.
///
/// Unknown fields are ignored. Scalars fall back to their zero value when
/// missing or `null`; collections stay `None` so they re-encode as `null`.
/// A `null` inside a collection takes the element's zero value, except a
/// `null` link entry, which is kept as `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub views: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Rank labels, in the order the routine reported them.
    #[serde(default, deserialize_with = "null_items")]
    pub ranks: Option<Vec<String>>,
    /// Open-ended presence metadata (status, activity, ...).
    #[serde(default)]
    pub presence: Option<BTreeMap<String, Value>>,
    /// Open-ended profile metadata.
    #[serde(default)]
    pub profile: Option<BTreeMap<String, Value>>,
    #[serde(default, deserialize_with = "link_list")]
    pub socials: Option<Vec<Option<StringMap>>>,
    #[serde(default, deserialize_with = "link_list")]
    pub custom_links: Option<Vec<Option<StringMap>>>,
    #[serde(default, deserialize_with = "link_list")]
    pub songs: Option<Vec<Option<StringMap>>>,
    #[serde(default, deserialize_with = "null_values")]
    pub theme: Option<StringMap>,
    /// Feature flags keyed by name.
    #[serde(default, deserialize_with = "null_values")]
    pub features: Option<BTreeMap<String, bool>>,
}

/// A value that decodes `null` as `T::default()`.
struct OrZero<T>(T);

impl<'de, T> Deserialize<'de> for OrZero<T>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(|v| OrZero(v.unwrap_or_default()))
    }
}

fn unwrap_values<V>(map: BTreeMap<String, OrZero<V>>) -> BTreeMap<String, V> {
    map.into_iter().map(|(k, OrZero(v))| (k, v)).collect()
}

/// Treat an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    OrZero::<T>::deserialize(deserializer).map(|OrZero(v)| v)
}

/// An optional list whose `null` items become `T::default()`.
fn null_items<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let items = Option::<Vec<OrZero<T>>>::deserialize(deserializer)?;
    Ok(items.map(|items| items.into_iter().map(|OrZero(v)| v).collect()))
}

/// An optional map whose `null` values become `V::default()`.
fn null_values<'de, D, V>(deserializer: D) -> Result<Option<BTreeMap<String, V>>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de> + Default,
{
    Ok(Option::<BTreeMap<String, OrZero<V>>>::deserialize(deserializer)?.map(unwrap_values))
}

/// An optional list of optional string maps with `null` values read as `""`.
fn link_list<'de, D>(deserializer: D) -> Result<Option<Vec<Option<StringMap>>>, D::Error>
where
    D: Deserializer<'de>,
{
    let links = Option::<Vec<Option<BTreeMap<String, OrZero<String>>>>>::deserialize(deserializer)?;
    Ok(links.map(|links| {
        links
            .into_iter()
            .map(|link| link.map(unwrap_values))
            .collect()
    }))
}

/// The error envelope: a single `error` key holding a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorOutput {
    pub error: String,
}

impl ErrorOutput {
    /// Construct from a `FetchError`. Every variant collapses to the same shape.
    #[must_use]
    pub fn from_fetch_error(err: &crate::fetch::FetchError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}
