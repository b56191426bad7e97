//! Parser configuration.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::OptionsError;

/// Disambiguation direction for expressions that could refer to either
/// side of the reference instant ("monday", "4:00").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Context {
    Past,
    #[default]
    Future,
    /// No bias: ties fall to the earlier candidate.
    None,
}

/// Which way to read an ambiguous numeric date such as `03/04/2011`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endian {
    /// Month first: `M/D/Y` (the US convention).
    Middle,
    /// Day first: `D/M/Y`.
    Little,
}

/// Everything that influences a parse.
///
/// Build with struct-update syntax off [`Options::default`]:
///
/// ```
/// use saywhen_core::{Context, Options};
///
/// let options = Options {
///     context: Context::Past,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Direction bias for bare relative expressions.
    pub context: Context,
    /// Reference instant. `None` means "read the local clock at parse
    /// time".
    pub now: Option<NaiveDateTime>,
    /// Collapse the resulting span to a single instant.
    pub guess: bool,
    /// Upper bound of the plausible-hours window for a clock time with no
    /// meridian: a bare time resolves within `[n, n+12)` hours of the day.
    /// `None` disables the window and reads bare times as 24-hour clock,
    /// taking the first occurrence at or after the reference instant.
    pub ambiguous_time_range: Option<u32>,
    /// The date orders to try, most preferred first.
    pub endian_precedence: Vec<Endian>,
    /// Pivot offset for expanding two-digit years. A two-digit year lands
    /// in the century starting at `reference_year - bias`.
    pub ambiguous_year_future_bias: i32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            context: Context::Future,
            now: None,
            guess: true,
            ambiguous_time_range: Some(6),
            endian_precedence: vec![Endian::Middle, Endian::Little],
            ambiguous_year_future_bias: 50,
        }
    }
}

impl Options {
    /// Check the dynamic constraints the type system cannot express.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.endian_precedence.is_empty() {
            return Err(OptionsError::EmptyEndianPrecedence);
        }
        if let Some(range) = self.ambiguous_time_range {
            if range > 12 {
                return Err(OptionsError::AmbiguousTimeRangeOutOfRange(range));
            }
        }
        Ok(())
    }

    /// The reference instant: `now` if supplied, else the local clock.
    #[must_use]
    pub fn reference(&self) -> NaiveDateTime {
        self.now.unwrap_or_else(|| Local::now().naive_local())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let options = Options::default();
        assert_eq!(options.context, Context::Future);
        assert!(options.guess);
        assert_eq!(options.ambiguous_time_range, Some(6));
        assert_eq!(options.endian_precedence, vec![Endian::Middle, Endian::Little]);
        assert_eq!(options.ambiguous_year_future_bias, 50);
    }

    #[test]
    fn rejects_empty_endian_precedence() {
        let options = Options {
            endian_precedence: vec![],
            ..Options::default()
        };
        assert!(matches!(
            options.validate(),
            Err(crate::OptionsError::EmptyEndianPrecedence)
        ));
    }

    #[test]
    fn rejects_oversized_time_range() {
        let options = Options {
            ambiguous_time_range: Some(13),
            ..Options::default()
        };
        assert!(options.validate().is_err());
        let options = Options {
            ambiguous_time_range: Some(12),
            ..Options::default()
        };
        assert!(options.validate().is_ok());
    }
}
