//! Scanner for `1st`, `2nd`, `3rd`, `21st`.

use super::Tagger;
use crate::token::Tag;

pub struct OrdinalTagger;

impl Tagger for OrdinalTagger {
    fn scan(&self, word: &str) -> Vec<Tag> {
        let digits = word
            .strip_suffix("st")
            .or_else(|| word.strip_suffix("nd"))
            .or_else(|| word.strip_suffix("rd"))
            .or_else(|| word.strip_suffix("th"));
        let Some(digits) = digits else {
            return vec![];
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return vec![];
        }
        let Ok(value) = digits.parse::<u32>() else {
            return vec![];
        };

        let mut tags = vec![Tag::Ordinal(value)];
        if (1..=31).contains(&value) {
            tags.push(Tag::OrdinalDay(value));
        }
        tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TagKind;

    #[test]
    fn ordinals_in_day_range_get_both_tags() {
        let tags = OrdinalTagger.scan("3rd");
        assert!(tags.iter().any(|t| t.kind_matches(TagKind::Ordinal)));
        assert!(tags.iter().any(|t| t.kind_matches(TagKind::OrdinalDay)));
    }

    #[test]
    fn large_ordinals_are_not_days() {
        let tags = OrdinalTagger.scan("45th");
        assert!(tags.iter().any(|t| t.kind_matches(TagKind::Ordinal)));
        assert!(!tags.iter().any(|t| t.kind_matches(TagKind::OrdinalDay)));
    }

    #[test]
    fn words_without_suffix_are_ignored() {
        assert!(OrdinalTagger.scan("3").is_empty());
        assert!(OrdinalTagger.scan("rd").is_empty());
    }
}
