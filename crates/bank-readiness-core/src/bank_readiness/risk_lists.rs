//! Compiled-in risk lists and the matchers used across the engine.
//!
//! Nationality and country lists use exact membership after trimming and
//! lowercasing. Activity keyword lists use case-insensitive substring
//! containment. No regular expressions.

// ---------------------------------------------------------------------------
// Nationalities
// ---------------------------------------------------------------------------

const HIGH_RISK_NATIONALITIES: &[&str] = &[
    "afghanistan",
    "iran",
    "iraq",
    "north korea",
    "dprk",
    "syria",
    "yemen",
    "somalia",
    "sudan",
    "south sudan",
    "libya",
    "myanmar",
];

const MEDIUM_RISK_NATIONALITIES: &[&str] = &[
    "pakistan",
    "nigeria",
    "russia",
    "belarus",
    "lebanon",
    "bangladesh",
    "cameroon",
    "haiti",
    "mali",
    "mozambique",
    "venezuela",
    "ukraine",
    "kenya",
    "tanzania",
    "uganda",
];

// ---------------------------------------------------------------------------
// Licence activities
// ---------------------------------------------------------------------------

pub(crate) const HIGH_RISK_ACTIVITY_KEYWORDS: &[&str] = &[
    "crypto",
    "bitcoin",
    "virtual asset",
    "forex",
    "binary option",
    "gambling",
    "casino",
    "betting",
    "weapon",
    "firearm",
    "ammunition",
    "adult",
    "money exchange",
    "hawala",
    "money transfer",
];

pub(crate) const MEDIUM_RISK_ACTIVITY_KEYWORDS: &[&str] = &[
    "real estate",
    "gold",
    "precious metal",
    "jewel",
    "diamond",
    "used car",
    "general trading",
    "tobacco",
    "scrap",
    "charity",
    "remittance",
];

/// Activity terms an Islamic bank cannot finance.
pub(crate) const SHARIA_DISALLOWED_TERMS: &[&str] = &[
    "alcohol",
    "pork",
    "gambling",
    "entertainment",
    "conventional finance",
];

// ---------------------------------------------------------------------------
// Payment countries
// ---------------------------------------------------------------------------

const SANCTIONED_PAYMENT_COUNTRIES: &[&str] = &[
    "iran",
    "north korea",
    "dprk",
    "syria",
    "cuba",
    "crimea",
    "russia",
    "belarus",
    "myanmar",
    "afghanistan",
    "venezuela",
    "yemen",
];

const ELEVATED_PAYMENT_COUNTRIES: &[&str] = &[
    "iraq",
    "lebanon",
    "libya",
    "nigeria",
    "pakistan",
    "somalia",
    "sudan",
    "south sudan",
    "haiti",
    "mali",
    "panama",
    "cayman islands",
];

// ---------------------------------------------------------------------------
// Matchers
// ---------------------------------------------------------------------------

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

fn is_listed(value: &str, list: &[&str]) -> bool {
    let v = normalize(value);
    !v.is_empty() && list.iter().any(|&entry| entry == v)
}

pub fn is_high_risk_nationality(nationality: &str) -> bool {
    is_listed(nationality, HIGH_RISK_NATIONALITIES)
}

pub fn is_medium_risk_nationality(nationality: &str) -> bool {
    is_listed(nationality, MEDIUM_RISK_NATIONALITIES)
}

pub fn is_sanctioned_country(country: &str) -> bool {
    is_listed(country, SANCTIONED_PAYMENT_COUNTRIES)
}

pub fn is_elevated_risk_country(country: &str) -> bool {
    is_listed(country, ELEVATED_PAYMENT_COUNTRIES)
}

/// First payment country on the sanctioned list, in input order.
pub fn first_sanctioned_country(countries: &[String]) -> Option<&str> {
    countries
        .iter()
        .map(|c| c.trim())
        .find(|c| is_sanctioned_country(c))
}

/// First payment country on the elevated-risk list, in input order.
pub fn first_elevated_country(countries: &[String]) -> Option<&str> {
    countries
        .iter()
        .map(|c| c.trim())
        .find(|c| is_elevated_risk_country(c))
}

/// True when any payment country is on either country list.
pub fn has_payment_country_risk(countries: &[String]) -> bool {
    first_sanctioned_country(countries).is_some() || first_elevated_country(countries).is_some()
}

/// First keyword contained in `text`, compared case-insensitively.
/// Blank keywords never match.
pub fn find_keyword<'a, S: AsRef<str>>(text: &str, keywords: &'a [S]) -> Option<&'a str> {
    let haystack = text.to_lowercase();
    keywords.iter().map(|k| k.as_ref()).find(|k| {
        let needle = k.trim().to_lowercase();
        !needle.is_empty() && haystack.contains(&needle)
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nationality_exact_membership() {
        assert!(is_high_risk_nationality("Iran"));
        assert!(is_high_risk_nationality("  SYRIA "));
        // substring of a listed entry is not membership
        assert!(!is_high_risk_nationality("Sudanese"));
        assert!(!is_high_risk_nationality(""));
    }

    #[test]
    fn test_nationality_tiers_disjoint() {
        for n in HIGH_RISK_NATIONALITIES {
            assert!(!is_medium_risk_nationality(n), "{} in both lists", n);
        }
    }

    #[test]
    fn test_keyword_case_insensitive_substring() {
        assert_eq!(
            find_keyword("Cryptocurrency Consulting", HIGH_RISK_ACTIVITY_KEYWORDS),
            Some("crypto")
        );
        assert_eq!(find_keyword("IT services", HIGH_RISK_ACTIVITY_KEYWORDS), None);
        assert_eq!(find_keyword("IT services", MEDIUM_RISK_ACTIVITY_KEYWORDS), None);
    }

    #[test]
    fn test_blank_keywords_never_match() {
        let keywords = vec!["".to_string(), "   ".to_string()];
        assert_eq!(find_keyword("anything", &keywords), None);
    }

    #[test]
    fn test_first_country_in_input_order() {
        let countries = vec![
            "Germany".to_string(),
            "pakistan".to_string(),
            " Iran ".to_string(),
        ];
        assert_eq!(first_sanctioned_country(&countries), Some("Iran"));
        assert_eq!(first_elevated_country(&countries), Some("pakistan"));
        assert!(has_payment_country_risk(&countries));
    }

    #[test]
    fn test_no_payment_country_risk() {
        let countries = vec!["United Kingdom".to_string(), "India".to_string()];
        assert!(!has_payment_country_risk(&countries));
        assert!(!has_payment_country_risk(&[]));
    }
}
