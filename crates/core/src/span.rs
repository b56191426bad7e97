//! The temporal interval type all handlers produce.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A half-open interval of instants `[begin, end)`.
///
/// A span of width one second represents a single point in time. Wider
/// spans represent a unit of the calendar (a day, a month, a season) and
/// are collapsed to their midpoint when the caller asks for an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    begin: NaiveDateTime,
    end: NaiveDateTime,
}

impl Span {
    /// Create a span. Returns `None` unless `end > begin`.
    #[must_use]
    pub fn new(begin: NaiveDateTime, end: NaiveDateTime) -> Option<Self> {
        (end > begin).then_some(Self { begin, end })
    }

    /// The instant at `seconds` past `begin`, as a width-1 span.
    #[must_use]
    pub fn instant(begin: NaiveDateTime) -> Self {
        Self {
            begin,
            end: begin + Duration::seconds(1),
        }
    }

    #[must_use]
    pub fn begin(&self) -> NaiveDateTime {
        self.begin
    }

    #[must_use]
    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Width in whole seconds. Always positive.
    #[must_use]
    pub fn width(&self) -> i64 {
        (self.end - self.begin).num_seconds()
    }

    /// Whether `t` falls inside the interval, endpoints included.
    ///
    /// Inner repeaters are accepted when either endpoint of their span
    /// touches the outer one, so this check is deliberately inclusive on
    /// both ends rather than half-open.
    #[must_use]
    pub fn covers(&self, t: NaiveDateTime) -> bool {
        self.begin <= t && t <= self.end
    }

    /// Collapse to a single instant: the begin for point spans, the
    /// midpoint (rounded toward begin) for wider ones.
    #[must_use]
    pub fn guess(&self) -> NaiveDateTime {
        if self.width() == 1 {
            self.begin
        } else {
            self.begin + Duration::seconds(self.width() / 2)
        }
    }

    /// Both endpoints shifted by `seconds`.
    #[must_use]
    pub fn shift(&self, seconds: i64) -> Self {
        Self {
            begin: self.begin + Duration::seconds(seconds),
            end: self.end + Duration::seconds(seconds),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2006, 8, 16)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn rejects_backwards_interval() {
        assert!(Span::new(at(14, 0), at(13, 0)).is_none());
        assert!(Span::new(at(14, 0), at(14, 0)).is_none());
    }

    #[test]
    fn guess_of_point_span_is_begin() {
        let span = Span::instant(at(14, 0));
        assert_eq!(span.width(), 1);
        assert_eq!(span.guess(), at(14, 0));
    }

    #[test]
    fn guess_of_wide_span_is_midpoint() {
        let span = Span::new(at(12, 0), at(14, 0)).unwrap();
        assert_eq!(span.guess(), at(13, 0));
    }

    #[test]
    fn covers_is_inclusive_of_both_endpoints() {
        let span = Span::new(at(12, 0), at(14, 0)).unwrap();
        assert!(span.covers(at(12, 0)));
        assert!(span.covers(at(14, 0)));
        assert!(!span.covers(at(14, 1)));
    }

    #[test]
    fn serializes_round_trip() {
        let span = Span::new(at(12, 0), at(14, 0)).unwrap();
        let json = serde_json::to_string(&span).unwrap();
        assert_eq!(serde_json::from_str::<Span>(&json).unwrap(), span);
    }
}
