use std::fmt;

use crate::schema;
use crate::types::TopListUser;

/// The metric a leaderboard ranks players by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TopKind {
    Crystals,
    Efficiency,
    Golds,
    Score,
}

impl TopKind {
    pub const ALL: [TopKind; 4] = [TopKind::Crystals, TopKind::Efficiency, TopKind::Golds, TopKind::Score];

    /// Key of this leaderboard in API payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            TopKind::Crystals => "crystals",
            TopKind::Efficiency => "efficiency",
            TopKind::Golds => "golds",
            TopKind::Score => "score",
        }
    }
}

impl fmt::Display for TopKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One leaderboard, best player first.
#[derive(Debug, Clone)]
pub struct Top {
    pub kind: TopKind,
    pub users: Vec<TopListUser>,
}

impl Top {
    pub fn from_schema(kind: TopKind, raw: Vec<schema::TopEntry>) -> Self {
        Self {
            kind,
            users: raw.into_iter().map(|entry| TopListUser::from_schema(entry, kind)).collect(),
        }
    }
}

/// All four leaderboards.
#[derive(Debug, Clone)]
pub struct TopLists {
    pub crystals: Top,
    pub efficiency: Top,
    pub golds: Top,
    pub score: Top,
}

impl TopLists {
    pub fn from_schema(raw: schema::TopLists) -> Self {
        Self {
            crystals: Top::from_schema(TopKind::Crystals, raw.crystals),
            efficiency: Top::from_schema(TopKind::Efficiency, raw.efficiency),
            golds: Top::from_schema(TopKind::Golds, raw.golds),
            score: Top::from_schema(TopKind::Score, raw.score),
        }
    }

    pub fn get(&self, kind: TopKind) -> &Top {
        match kind {
            TopKind::Crystals => &self.crystals,
            TopKind::Efficiency => &self.efficiency,
            TopKind::Golds => &self.golds,
            TopKind::Score => &self.score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn entries_remember_their_leaderboard() {
        let raw: schema::TopLists = serde_json::from_value(json!({
            "crystals": [],
            "efficiency": [
                {"uid": "a", "rank": 5, "hasPremium": false, "value": 10},
                {"uid": "b", "rank": 7, "hasPremium": true, "value": 8}
            ],
            "golds": [],
            "score": []
        }))
        .unwrap();
        let tops = TopLists::from_schema(raw);

        let efficiency = tops.get(TopKind::Efficiency);
        assert_eq!(efficiency.kind, TopKind::Efficiency);
        let names: Vec<&str> = efficiency.users.iter().map(|u| u.user.name.as_str()).collect();
        assert_eq!(names, ["a", "b"]);
        assert!(efficiency.users.iter().all(|u| u.top == TopKind::Efficiency));
        assert!(tops.crystals.users.is_empty());
    }

    #[test]
    fn kinds_use_payload_keys() {
        let keys: Vec<&str> = TopKind::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(keys, ["crystals", "efficiency", "golds", "score"]);
    }
}
