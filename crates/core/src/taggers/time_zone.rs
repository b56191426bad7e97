//! Scanner for time zone designators.
//!
//! Zones are recognized so dated forms like `mon apr 02 17:00:00 pst 2007`
//! match; the zone itself does not move the result, which stays in the
//! reference clock's calendar.

use std::sync::OnceLock;

use regex::Regex;

use super::Tagger;
use crate::token::Tag;

pub struct TimeZoneTagger;

const ZONES: &[&str] = &[
    "utc", "gmt", "est", "edt", "cst", "cdt", "mst", "mdt", "pst", "pdt", "akst", "akdt", "hst",
    "bst", "cet", "cest",
];

/// `tzminus0500` / `tzplus0930`, produced by the normalizer from literal
/// UTC offsets.
fn offset() -> &'static Regex {
    static OFFSET: OnceLock<Regex> = OnceLock::new();
    OFFSET.get_or_init(|| Regex::new(r"^tz(?:minus|plus)\d{4}$").unwrap())
}

impl Tagger for TimeZoneTagger {
    fn scan(&self, word: &str) -> Vec<Tag> {
        if ZONES.contains(&word) || offset().is_match(word) {
            return vec![Tag::TimeZone(word.to_string())];
        }
        vec![]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_zone_codes() {
        assert_eq!(TimeZoneTagger.scan("pst").len(), 1);
        assert_eq!(TimeZoneTagger.scan("utc").len(), 1);
        assert!(TimeZoneTagger.scan("xyz").is_empty());
    }

    #[test]
    fn literal_offsets() {
        assert_eq!(TimeZoneTagger.scan("tzminus0500").len(), 1);
        assert_eq!(TimeZoneTagger.scan("tzplus0930").len(), 1);
        assert!(TimeZoneTagger.scan("tzminus05").is_empty());
    }
}
