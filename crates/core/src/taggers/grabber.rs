//! Scanner for `this`, `next`, `last`.

use super::Tagger;
use crate::token::{Grabber, Tag};

pub struct GrabberTagger;

impl Tagger for GrabberTagger {
    fn scan(&self, word: &str) -> Vec<Tag> {
        let grabber = match word {
            "last" => Grabber::Last,
            "this" => Grabber::This,
            "next" => Grabber::Next,
            _ => return vec![],
        };
        vec![Tag::Grabber(grabber)]
    }
}
