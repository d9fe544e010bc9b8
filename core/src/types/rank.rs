use std::fmt;

use crate::locale::{Locale, RANK_CAP};

/// A player's progression level, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rank(u32);

impl Rank {
    pub fn new(number: u32) -> Self {
        Self(number)
    }

    pub fn number(self) -> u32 {
        self.0
    }

    /// Display name in `locale`, e.g. "generalissimo" or "legend 4".
    pub fn name(self, locale: Locale) -> String {
        locale.rank_name(self.0)
    }

    /// How far past the last named rank this is; `None` below "legend".
    pub fn legend_number(self) -> Option<u32> {
        self.0.checked_sub(RANK_CAP).filter(|n| *n > 0)
    }
}

impl From<u32> for Rank {
    fn from(number: u32) -> Self {
        Self(number)
    }
}

impl PartialEq<u32> for Rank {
    fn eq(&self, other: &u32) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rank #{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legend_number_starts_after_the_cap() {
        assert_eq!(Rank::new(1).legend_number(), None);
        assert_eq!(Rank::new(30).legend_number(), None);
        assert_eq!(Rank::new(31).legend_number(), Some(1));
        assert_eq!(Rank::new(58).legend_number(), Some(28));
    }

    #[test]
    fn name_follows_the_given_locale() {
        let rank = Rank::new(31);
        assert_eq!(rank.name(Locale::English), "legend 1");
        assert_eq!(rank.name(Locale::Russian), "легенда 1");
    }

    #[test]
    fn compares_with_plain_numbers() {
        assert_eq!(Rank::from(12), 12);
        assert_eq!(Rank::new(12).to_string(), "Rank #12");
    }
}
