//! Wire schema of the ratings, status and eSports APIs.
//!
//! # Design
//! These structs mirror the JSON byte for byte and carry no derived data; the
//! records in `types` are built from them by the converters. Two kinds of
//! optional data show up in the payloads and are kept apart here:
//!
//! - keys that are always sent but may be `null` (article images, the four
//!   leaderboards inside a rating, `parent_id`) use [`nullable`], so a
//!   *missing* key is still a malformed payload;
//! - keys the API leaves out entirely on some endpoints (`categories`,
//!   `comments`) are plain `Option` and become `None` when omitted.

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize a key that must be present but may hold `null`.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}

/// Deserialize a JSON object into its entries, keeping payload order.
pub fn entries<'de, D, T>(deserializer: D) -> Result<Vec<(String, T)>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    struct EntriesVisitor<T>(PhantomData<T>);

    impl<'de, T: Deserialize<'de>> Visitor<'de> for EntriesVisitor<T> {
        type Value = Vec<(String, T)>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of named nodes")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut out = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry()? {
                out.push(entry);
            }
            Ok(out)
        }
    }

    deserializer.deserialize_map(EntriesVisitor(PhantomData))
}

// ---------------------------------------------------------------------------
// Envelopes
// ---------------------------------------------------------------------------

/// `{"responseType": "...", "response": {...}}` from the ratings API.
#[derive(Debug, Clone, Deserialize)]
pub struct RatingsEnvelope {
    #[serde(rename = "responseType")]
    pub response_type: String,
    #[serde(default)]
    pub response: Value,
}

/// `{"success": true, "data": ..., "meta": {...}}` from the eSports API.
/// A missing or `null` `success` counts as a failure.
#[derive(Debug, Clone, Deserialize)]
pub struct EsportEnvelope {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub meta: Value,
}

// ---------------------------------------------------------------------------
// Ratings API
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct TopLists {
    pub crystals: Vec<TopEntry>,
    pub efficiency: Vec<TopEntry>,
    pub golds: Vec<TopEntry>,
    pub score: Vec<TopEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopEntry {
    pub uid: String,
    pub rank: u32,
    pub has_premium: bool,
    pub value: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub rank: u32,
    pub has_premium: bool,
    pub kills: i64,
    pub deaths: i64,
    pub caught_golds: i64,
    pub earned_crystals: i64,
    pub gear_score: i64,
    pub score: i64,
    pub score_base: i64,
    pub score_next: i64,
    pub drones_played: Vec<GameObject>,
    pub hulls_played: Vec<GameObject>,
    pub paints_played: Vec<GameObject>,
    pub turrets_played: Vec<GameObject>,
    pub resistance_modules: Vec<GameObject>,
    pub modes_played: Vec<Mode>,
    pub supplies_usage: Vec<Supply>,
    pub mounted: BTreeMap<String, String>,
    pub presents: Vec<Value>,
    /// Absent or null for players without a rating snapshot.
    #[serde(default)]
    pub rating: Option<Ratings>,
    #[serde(default)]
    pub previous_rating: Option<Ratings>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameObject {
    pub id: i64,
    pub name: String,
    pub image_url: String,
    pub grade: i32,
    #[serde(deserialize_with = "nullable")]
    pub properties: Option<Vec<String>>,
    pub score_earned: i64,
    pub time_played: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supply {
    pub id: i64,
    pub name: String,
    pub image_url: String,
    pub usages: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mode {
    pub name: String,
    pub score_earned: i64,
    pub time_played: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ratings {
    #[serde(deserialize_with = "nullable")]
    pub crystals: Option<Rating>,
    #[serde(deserialize_with = "nullable")]
    pub efficiency: Option<Rating>,
    #[serde(deserialize_with = "nullable")]
    pub golds: Option<Rating>,
    #[serde(deserialize_with = "nullable")]
    pub score: Option<Rating>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Rating {
    pub position: i64,
    pub value: i64,
}

// ---------------------------------------------------------------------------
// Server status
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StableStatus {
    #[serde(rename = "linkForDownloadAPK", deserialize_with = "nullable")]
    pub apk_link: Option<String>,
    pub min_supported_android_version: i64,
    pub max_supported_android_version: i64,
    #[serde(deserialize_with = "entries")]
    pub nodes: Vec<(String, Node)>,
}

/// One entry of the public test server registry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TestServer {
    pub release: String,
    pub domain: String,
    pub user_count: i64,
}

/// Body of a test server's `/balancer` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Balancer {
    #[serde(deserialize_with = "entries")]
    pub nodes: Vec<(String, Node)>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Node {
    pub endpoint: NodeEndpoint,
    pub inbattles: i64,
    pub online: i64,
    pub partners: Value,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeEndpoint {
    pub host: String,
    pub status: String,
    pub tcp_ports: Vec<u16>,
    pub ws_ports: Vec<u16>,
}

// ---------------------------------------------------------------------------
// eSports API
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct ArticleList {
    pub articles: Vec<Article>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageMeta {
    pub last_page: u32,
    pub total: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Article {
    pub id: u64,
    pub author_id: u64,
    pub author_username: String,
    pub views: i64,
    pub category: Vec<Category>,
    #[serde(default)]
    pub categories: Option<Vec<Category>>,
    pub title: String,
    pub short_desc: String,
    #[serde(deserialize_with = "nullable")]
    pub image: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub wide_image: Option<String>,
    pub status: i64,
    #[serde(rename = "type")]
    pub kind: i64,
    pub date: String,
    pub list_order: i64,
    #[serde(deserialize_with = "nullable")]
    pub content: Option<String>,
    #[serde(default)]
    pub comments: Option<Vec<Comment>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
    pub lang: String,
    #[serde(default)]
    pub sort_order: Option<i64>,
    #[serde(default)]
    pub status: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Comment {
    pub id: u64,
    pub commentable_type: String,
    pub commentable_id: u64,
    #[serde(deserialize_with = "nullable")]
    pub parent_id: Option<u64>,
    pub comment: String,
    pub is_approved: Flag,
    pub user_id: u64,
    pub created_at: String,
    pub updated_at: String,
}

/// A yes/no value the eSports API sends either as `0`/`1` or as a boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Flag {
    Bool(bool),
    Int(i64),
}

impl Flag {
    /// Only `true` and `1` are set.
    pub fn is_set(self) -> bool {
        matches!(self, Flag::Bool(true) | Flag::Int(1))
    }
}
