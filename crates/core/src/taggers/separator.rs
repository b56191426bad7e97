//! Scanner for separators: punctuation the normalizer spaced out, plus
//! the filler words `at`, `in`, `on`.

use super::Tagger;
use crate::token::{Separator, Tag};

pub struct SeparatorTagger;

impl Tagger for SeparatorTagger {
    fn scan(&self, word: &str) -> Vec<Tag> {
        let separator = match word {
            "," => Separator::Comma,
            "/" | "-" => Separator::SlashOrDash,
            "@" | "at" => Separator::At,
            "in" => Separator::In,
            "on" => Separator::On,
            _ => return vec![],
        };
        vec![Tag::Separator(separator)]
    }
}
