//! Rank display names in the two languages the game ships.

use std::fmt;

static RANKS_EN: [&str; 31] = [
    "recruit",
    "private",
    "gefreiter",
    "corporal",
    "master corporal",
    "sergeant",
    "staff sergeant",
    "master sergeant",
    "first sergeant",
    "sergeant-major",
    "warrant officer 1",
    "warrant officer 2",
    "warrant officer 3",
    "warrant officer 4",
    "warrant officer 5",
    "third lieutenant",
    "second lieutenant",
    "first lieutenant",
    "captain",
    "major",
    "lieutenant colonel",
    "colonel",
    "brigadier",
    "major general",
    "lieutenant general",
    "general",
    "marshal",
    "field marshal",
    "commander",
    "generalissimo",
    "legend",
];

static RANKS_RU: [&str; 31] = [
    "новобранец",
    "рядовой",
    "ефрейтор",
    "капрал",
    "мастер-капрал",
    "сержант",
    "штаб-сержант",
    "мастер-сержант",
    "первый сержант",
    "сержант-майор",
    "уорэнт-офицер 1",
    "уорэнт-офицер 2",
    "уорэнт-офицер 3",
    "уорэнт-офицер 4",
    "уорэнт-офицер 5",
    "младший лейтенант",
    "лейтенант",
    "старший лейтенант",
    "капитан",
    "майор",
    "подполковник",
    "полковник",
    "бригадир",
    "генерал-майор",
    "генерал-лейтенант",
    "генерал",
    "маршал",
    "фельдмаршал",
    "командор",
    "генералиссимус",
    "легенда",
];

/// Highest rank that has a name of its own. Everything above is a
/// numbered "legend".
pub const RANK_CAP: u32 = 30;

/// Display language for derived names and URLs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    English,
    Russian,
}

impl Locale {
    /// Resolve a locale tag such as `ru`, `ru_RU`, `ru-RU.UTF-8` or
    /// `Russian_Russia`. Anything that is not Russian is English.
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim().to_ascii_lowercase();
        let russian = tag == "ru"
            || tag.starts_with("russian")
            || ["ru_", "ru-", "ru."].iter().any(|prefix| tag.starts_with(prefix));
        if russian {
            Locale::Russian
        } else {
            Locale::English
        }
    }

    /// Two-letter code the web APIs expect in `lang` parameters.
    pub fn code(self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Russian => "ru",
        }
    }

    fn ranks(self) -> &'static [&'static str; 31] {
        match self {
            Locale::English => &RANKS_EN,
            Locale::Russian => &RANKS_RU,
        }
    }

    /// Name of rank `number` (1-based). Ranks past the cap reuse the last
    /// entry with the overflow appended, so 31 is "legend 1".
    pub fn rank_name(self, number: u32) -> String {
        let table = self.ranks();
        let index = number.saturating_sub(1).min(RANK_CAP) as usize;
        if number > RANK_CAP {
            format!("{} {}", table[index], number - RANK_CAP)
        } else {
            table[index].to_string()
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_ranks_have_no_suffix() {
        for (locale, table) in [(Locale::English, &RANKS_EN), (Locale::Russian, &RANKS_RU)] {
            for number in 1..=RANK_CAP {
                assert_eq!(locale.rank_name(number), table[number as usize - 1], "{locale} rank {number}");
            }
        }
        assert_eq!(Locale::English.rank_name(1), "recruit");
        assert_eq!(Locale::English.rank_name(30), "generalissimo");
    }

    #[test]
    fn ranks_past_the_cap_are_numbered_legends() {
        for (locale, legend) in [(Locale::English, "legend"), (Locale::Russian, "легенда")] {
            for number in RANK_CAP + 1..=RANK_CAP + 100 {
                let expected = format!("{legend} {}", number - RANK_CAP);
                assert_eq!(locale.rank_name(number), expected);
            }
        }
        assert_eq!(Locale::English.rank_name(31), "legend 1");
        assert_eq!(Locale::Russian.rank_name(u32::MAX), format!("легенда {}", u32::MAX - RANK_CAP));
    }

    #[test]
    fn russian_table_is_selected_explicitly() {
        assert_eq!(Locale::Russian.rank_name(1), "новобранец");
        assert_eq!(Locale::Russian.rank_name(30), "генералиссимус");
    }

    #[test]
    fn zero_is_clamped_to_the_first_entry() {
        assert_eq!(Locale::English.rank_name(0), "recruit");
    }

    #[test]
    fn tags_resolve_to_russian_or_fall_back() {
        assert_eq!(Locale::from_tag("ru"), Locale::Russian);
        assert_eq!(Locale::from_tag("ru_RU"), Locale::Russian);
        assert_eq!(Locale::from_tag("ru-RU"), Locale::Russian);
        assert_eq!(Locale::from_tag("Russian_Russia"), Locale::Russian);
        assert_eq!(Locale::from_tag("en_US"), Locale::English);
        assert_eq!(Locale::from_tag("de"), Locale::English);
        assert_eq!(Locale::from_tag("rust"), Locale::English);
        assert_eq!(Locale::from_tag(""), Locale::English);
    }

    #[test]
    fn codes_match_the_api_lang_parameter() {
        assert_eq!(Locale::English.code(), "en");
        assert_eq!(Locale::Russian.to_string(), "ru");
    }
}
