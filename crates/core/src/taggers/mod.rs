//! The token scanners.
//!
//! Each scanner inspects one word of the normalized input and attaches
//! zero or more tags. Scanners are independent and all run, in a fixed
//! order; a word can pick up tags from several of them. Tokens left
//! untagged by every scanner are dropped before grammar matching.

mod grabber;
mod ordinal;
mod pointer;
mod repeater;
mod scalar;
mod separator;
mod time_zone;

pub use grabber::GrabberTagger;
pub use ordinal::OrdinalTagger;
pub use pointer::PointerTagger;
pub use repeater::RepeaterTagger;
pub use scalar::ScalarTagger;
pub use separator::SeparatorTagger;
pub use time_zone::TimeZoneTagger;

use crate::token::{Tag, Token};

/// A scanner that recognizes one family of words.
pub trait Tagger: Send + Sync {
    /// Tags for `word`, possibly none.
    fn scan(&self, word: &str) -> Vec<Tag>;
}

/// All scanners in their fixed running order.
#[must_use]
pub fn all() -> Vec<Box<dyn Tagger>> {
    vec![
        Box::new(RepeaterTagger),
        Box::new(GrabberTagger),
        Box::new(PointerTagger),
        Box::new(ScalarTagger),
        Box::new(OrdinalTagger),
        Box::new(SeparatorTagger),
        Box::new(TimeZoneTagger),
    ]
}

/// Run every scanner over every token, then drop the untagged ones.
pub fn tag_tokens(taggers: &[Box<dyn Tagger>], tokens: &mut Vec<Token>) {
    for token in tokens.iter_mut() {
        for tagger in taggers {
            for tag in tagger.scan(token.word()) {
                token.tag(tag);
            }
        }
    }
    tokens.retain(Token::is_tagged);
}
