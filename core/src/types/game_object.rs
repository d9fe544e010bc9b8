use std::time::Duration;

use crate::error::ApiError;
use crate::schema;
use crate::types::seconds;

/// A hull, turret, drone, paint or protection module the player has used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameObject {
    pub id: i64,
    pub name: String,
    pub image: String,
    /// Wire grade plus one. The API counts modifications from zero (and
    /// sends -1 for items without them), so the stored value is 1-based and
    /// an ungraded item ends up as 0. Wider than the wire type so the
    /// offset holds for every grade the API can send.
    pub grade: i64,
    pub properties: Option<Vec<String>>,
    pub score_earned: i64,
    pub time_played: Duration,
}

impl GameObject {
    pub fn from_schema(raw: schema::GameObject) -> Result<Self, ApiError> {
        Ok(Self {
            time_played: seconds("timePlayed", raw.time_played)?,
            id: raw.id,
            name: raw.name,
            image: raw.image_url,
            grade: i64::from(raw.grade) + 1,
            properties: raw.properties,
            score_earned: raw.score_earned,
        })
    }

    pub fn from_list(raw: Vec<schema::GameObject>) -> Result<Vec<Self>, ApiError> {
        raw.into_iter().map(Self::from_schema).collect()
    }
}

/// A consumable and how many times it has been used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuppliesObject {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub usages: i64,
}

impl From<schema::Supply> for SuppliesObject {
    fn from(raw: schema::Supply) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            image: raw.image_url,
            usages: raw.usages,
        }
    }
}

/// A battle mode the player has played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameMode {
    /// Display name with surrounding whitespace removed.
    pub name: String,
    pub score_earned: i64,
    pub time_played: Duration,
    /// Short code such as `DM` or `CTF`.
    pub kind: String,
}

impl GameMode {
    pub fn from_schema(raw: schema::Mode) -> Result<Self, ApiError> {
        Ok(Self {
            time_played: seconds("timePlayed", raw.time_played)?,
            name: raw.name.trim().to_string(),
            score_earned: raw.score_earned,
            kind: raw.kind,
        })
    }
}
