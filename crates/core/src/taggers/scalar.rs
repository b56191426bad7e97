//! Scanner for bare integers.
//!
//! A number gets every subtype reading its magnitude allows; the grammar
//! patterns pick the one that fits the surrounding tokens.

use super::Tagger;
use crate::token::Tag;

pub struct ScalarTagger;

impl Tagger for ScalarTagger {
    fn scan(&self, word: &str) -> Vec<Tag> {
        if word.is_empty() || !word.bytes().all(|b| b.is_ascii_digit()) {
            return vec![];
        }
        let Ok(value) = word.parse::<u32>() else {
            return vec![];
        };

        let mut tags = vec![Tag::Scalar(value)];
        if (1..=31).contains(&value) {
            tags.push(Tag::ScalarDay(value));
        }
        if (1..=12).contains(&value) {
            tags.push(Tag::ScalarMonth(value));
        }
        if value >= 13 {
            tags.push(Tag::ScalarYear(value as i32));
        }
        tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TagKind;

    fn kinds(word: &str) -> Vec<TagKind> {
        let tags = ScalarTagger.scan(word);
        let mut kinds = Vec::new();
        for kind in [
            TagKind::Scalar,
            TagKind::ScalarDay,
            TagKind::ScalarMonth,
            TagKind::ScalarYear,
        ] {
            if tags.iter().any(|t| t.kind_matches(kind)) {
                kinds.push(kind);
            }
        }
        kinds
    }

    #[test]
    fn subtype_by_magnitude() {
        assert_eq!(
            kinds("5"),
            vec![TagKind::Scalar, TagKind::ScalarDay, TagKind::ScalarMonth]
        );
        assert_eq!(kinds("28"), vec![TagKind::Scalar, TagKind::ScalarDay, TagKind::ScalarYear]);
        assert_eq!(kinds("99"), vec![TagKind::Scalar, TagKind::ScalarYear]);
        assert_eq!(kinds("2011"), vec![TagKind::Scalar, TagKind::ScalarYear]);
    }

    #[test]
    fn non_numbers_are_ignored() {
        assert!(ScalarTagger.scan("5th").is_empty());
        assert!(ScalarTagger.scan("-5").is_empty());
        assert!(ScalarTagger.scan("").is_empty());
    }
}
