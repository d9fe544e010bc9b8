use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde_json::Value;

use crate::error::ApiError;
use crate::schema;
use crate::types::{GameMode, GameObject, Rank, Ratings, SuppliesObject, TopKind};

/// The part of a player every endpoint agrees on. Two values are equal when
/// the names match.
#[derive(Debug, Clone)]
pub struct PartialUser {
    pub name: String,
    pub rank: Rank,
    pub premium: bool,
}

impl PartialEq for PartialUser {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for PartialUser {}

impl Hash for PartialUser {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for PartialUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A player's entry in one leaderboard.
#[derive(Debug, Clone)]
pub struct TopListUser {
    pub user: PartialUser,
    pub top: TopKind,
    /// The player's value of the leaderboard's metric.
    pub value: i64,
}

impl TopListUser {
    pub fn from_schema(raw: schema::TopEntry, top: TopKind) -> Self {
        Self {
            user: PartialUser {
                name: raw.uid,
                rank: Rank::new(raw.rank),
                premium: raw.has_premium,
            },
            top,
            value: raw.value,
        }
    }
}

/// A full player profile.
#[derive(Debug, Clone)]
pub struct User {
    pub user: PartialUser,
    pub kills: i64,
    pub deaths: i64,
    pub caught_golds: i64,
    pub crystals: i64,
    pub gear_score: i64,
    pub score: i64,
    pub score_base: i64,
    pub score_next: i64,
    pub drones: Vec<GameObject>,
    pub hulls: Vec<GameObject>,
    pub paints: Vec<GameObject>,
    pub turrets: Vec<GameObject>,
    pub resistance_modules: Vec<GameObject>,
    pub modes: Vec<GameMode>,
    pub supplies: Vec<SuppliesObject>,
    /// Equipped slot to image URL.
    pub mounted: BTreeMap<String, String>,
    pub presents: Vec<Value>,
    pub rating: Option<Ratings>,
    pub previous_rating: Option<Ratings>,
}

impl User {
    pub fn from_schema(raw: schema::Profile) -> Result<Self, ApiError> {
        Ok(Self {
            drones: GameObject::from_list(raw.drones_played)?,
            hulls: GameObject::from_list(raw.hulls_played)?,
            paints: GameObject::from_list(raw.paints_played)?,
            turrets: GameObject::from_list(raw.turrets_played)?,
            resistance_modules: GameObject::from_list(raw.resistance_modules)?,
            modes: raw
                .modes_played
                .into_iter()
                .map(GameMode::from_schema)
                .collect::<Result<_, _>>()?,
            supplies: raw.supplies_usage.into_iter().map(SuppliesObject::from).collect(),
            user: PartialUser {
                name: raw.name,
                rank: Rank::new(raw.rank),
                premium: raw.has_premium,
            },
            kills: raw.kills,
            deaths: raw.deaths,
            caught_golds: raw.caught_golds,
            crystals: raw.earned_crystals,
            gear_score: raw.gear_score,
            score: raw.score,
            score_base: raw.score_base,
            score_next: raw.score_next,
            mounted: raw.mounted,
            presents: raw.presents,
            rating: raw.rating.map(Ratings::from),
            previous_rating: raw.previous_rating.map(Ratings::from),
        })
    }

    pub fn name(&self) -> &str {
        &self.user.name
    }

    pub fn rank(&self) -> Rank {
        self.user.rank
    }

    /// Kills per death rounded to two decimals. A player who never died has
    /// no ratio, so this is `None` when `deaths` is zero.
    pub fn kd_ratio(&self) -> Option<f64> {
        ratio(self.kills, self.deaths)
    }

    /// Share of the way to the next rank's score threshold, `None` when the
    /// threshold is zero.
    pub fn score_progress(&self) -> Option<f64> {
        ratio(self.score, self.score_next)
    }
}

fn ratio(numerator: i64, denominator: i64) -> Option<f64> {
    if denominator == 0 {
        return None;
    }
    Some((numerator as f64 / denominator as f64 * 100.0).round() / 100.0)
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.user == other.user
    }
}

impl Eq for User {}

impl Hash for User {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.user.hash(state);
    }
}
