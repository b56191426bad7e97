//! Scanner for the direction words the normalizer produces: `past` from
//! "ago"/"before", `future` from "hence"/"from".

use super::Tagger;
use crate::token::{Pointer, Tag};

pub struct PointerTagger;

impl Tagger for PointerTagger {
    fn scan(&self, word: &str) -> Vec<Tag> {
        let pointer = match word {
            "past" => Pointer::Past,
            "future" => Pointer::Future,
            _ => return vec![],
        };
        vec![Tag::Pointer(pointer)]
    }
}
