//! Saywhen Core
//!
//! Natural-language English date and time parsing. Feed it a short
//! expression ("tomorrow at 7pm", "3 weeks from now", "03/04/2011",
//! "3rd wednesday in november") and get back an absolute instant or a
//! half-open interval, relative to a reference instant you supply.
//!
//! # Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use saywhen_core::{Options, Saywhen};
//!
//! let options = Options {
//!     now: NaiveDate::from_ymd_opt(2006, 8, 16)
//!         .unwrap()
//!         .and_hms_opt(14, 0, 0),
//!     ..Options::default()
//! };
//! let parser = Saywhen::with_options(options).unwrap();
//!
//! // A wide span collapses to its midpoint.
//! let instant = parser.parse_instant("tomorrow").unwrap();
//! assert_eq!(instant.to_string(), "2006-08-17 12:00:00");
//!
//! // Or keep the interval itself.
//! let span = parser.parse_span("tomorrow").unwrap();
//! assert_eq!(span.begin().to_string(), "2006-08-17 00:00:00");
//! assert_eq!(span.end().to_string(), "2006-08-18 00:00:00");
//! ```
//!
//! # Unparseable Input
//!
//! Input that matches no pattern, or that names an impossible date
//! (February 30th), is not an error: the parse methods return `None`.
//! Errors are reserved for invalid options, checked once in
//! [`Saywhen::with_options`].
//!
//! # Reference Instant
//!
//! Every relative expression is resolved against [`Options::now`]; when
//! that is unset the local clock is read at parse time. Instants are
//! naive local datetimes at one-second resolution.

pub mod error;
mod grammar;
mod handlers;
pub mod normalize;
pub mod numerize;
pub mod options;
pub mod repeaters;
pub mod span;
pub mod taggers;
pub mod token;

pub use error::OptionsError;
pub use options::{Context, Endian, Options};
pub use span::Span;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

use taggers::Tagger;
use token::Token;

/// What a parse produced, shaped by [`Options::guess`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Parsed {
    Instant(NaiveDateTime),
    Span(Span),
}

impl Parsed {
    /// The single instant, collapsing a span to its guess point.
    #[must_use]
    pub fn instant(&self) -> NaiveDateTime {
        match self {
            Self::Instant(instant) => *instant,
            Self::Span(span) => span.guess(),
        }
    }
}

/// Main entry point - a configured parser instance.
pub struct Saywhen {
    options: Options,
    taggers: Vec<Box<dyn Tagger>>,
}

impl Saywhen {
    /// A parser with default options.
    #[must_use]
    pub fn new() -> Self {
        Self {
            options: Options::default(),
            taggers: taggers::all(),
        }
    }

    /// A parser with the given options. Fails on option values the type
    /// system cannot rule out (an empty endian precedence, an
    /// out-of-range ambiguous-time window).
    pub fn with_options(options: Options) -> Result<Self, OptionsError> {
        options.validate()?;
        Ok(Self {
            options,
            taggers: taggers::all(),
        })
    }

    /// The options this parser runs with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Parse to an instant or a span per [`Options::guess`]; `None` when
    /// nothing matched.
    #[must_use]
    pub fn parse(&self, text: &str) -> Option<Parsed> {
        let span = self.parse_span(text)?;
        Some(if self.options.guess {
            Parsed::Instant(span.guess())
        } else {
            Parsed::Span(span)
        })
    }

    /// Parse to a single instant regardless of the guess option.
    #[must_use]
    pub fn parse_instant(&self, text: &str) -> Option<NaiveDateTime> {
        self.parse_span(text).map(|span| span.guess())
    }

    /// Parse to the underlying span regardless of the guess option.
    #[must_use]
    pub fn parse_span(&self, text: &str) -> Option<Span> {
        let now = self.options.reference();

        let normalized = normalize::normalize(text);
        debug!(input = text, normalized = %normalized, "normalized");

        let mut tokens: Vec<Token> = normalized.split_whitespace().map(Token::new).collect();
        taggers::tag_tokens(&self.taggers, &mut tokens);
        debug!(
            tagged = ?tokens.iter().map(Token::word).collect::<Vec<_>>(),
            "tokenized"
        );

        let span = grammar::tokens_to_span(&tokens, &self.options, now);
        match &span {
            Some(span) => debug!(begin = %span.begin(), end = %span.end(), "resolved"),
            None => debug!("no pattern matched"),
        }
        span
    }
}

impl Default for Saywhen {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot parse with default options against the local clock.
///
/// ```no_run
/// let when = saywhen_core::parse("next friday at noon");
/// ```
#[must_use]
pub fn parse(text: &str) -> Option<NaiveDateTime> {
    Saywhen::new().parse_instant(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn parser() -> Saywhen {
        let options = Options {
            now: NaiveDate::from_ymd_opt(2006, 8, 16)
                .unwrap()
                .and_hms_opt(14, 0, 0),
            ..Options::default()
        };
        Saywhen::with_options(options).unwrap()
    }

    #[test]
    fn now_is_the_reference_instant() {
        let instant = parser().parse_instant("now").unwrap();
        assert_eq!(instant.to_string(), "2006-08-16 14:00:00");
    }

    #[test]
    fn guess_option_shapes_the_result() {
        let base = parser();
        assert!(matches!(base.parse("tomorrow"), Some(Parsed::Instant(_))));

        let spans = Saywhen::with_options(Options {
            guess: false,
            ..base.options().clone()
        })
        .unwrap();
        assert!(matches!(spans.parse("tomorrow"), Some(Parsed::Span(_))));
    }

    #[test]
    fn gibberish_is_not_an_error() {
        assert_eq!(parser().parse("completely unparseable"), None);
    }

    #[test]
    fn bad_options_are_rejected_up_front() {
        let result = Saywhen::with_options(Options {
            endian_precedence: vec![],
            ..Options::default()
        });
        assert!(result.is_err());
    }
}
