use std::fmt;

use crate::schema;

/// A player's place and metric value in one leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rating {
    pub position: i64,
    pub value: i64,
}

/// Positions in the four leaderboards at one point in time. A category is
/// `None` when the player is not placed in it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ratings {
    pub crystals: Option<Rating>,
    pub efficiency: Option<Rating>,
    pub golds: Option<Rating>,
    pub score: Option<Rating>,
}

impl From<schema::Rating> for Rating {
    fn from(raw: schema::Rating) -> Self {
        Self {
            position: raw.position,
            value: raw.value,
        }
    }
}

impl From<schema::Ratings> for Ratings {
    fn from(raw: schema::Ratings) -> Self {
        Self {
            crystals: raw.crystals.map(Rating::from),
            efficiency: raw.efficiency.map(Rating::from),
            golds: raw.golds.map(Rating::from),
            score: raw.score.map(Rating::from),
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.position)
    }
}
