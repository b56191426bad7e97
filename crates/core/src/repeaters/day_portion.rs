//! Portions of a day: am/pm, the named stretches, and the synthetic
//! plausible-hours window used to pin down ambiguous clock times.

use chrono::{Duration, NaiveDateTime};

use serde::{Deserialize, Serialize};

use super::start_of_day;
use crate::options::Context;
use crate::span::Span;
use crate::token::Pointer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayPortion {
    Am,
    Pm,
    Morning,
    Afternoon,
    Evening,
    Night,
    /// A 12-hour window starting at the given hour; `Hours(6)` covers
    /// 06:00 through 18:00. Inserted after a bare ambiguous time to
    /// express the `ambiguous_time_range` option.
    Hours(u32),
}

impl DayPortion {
    /// Window as seconds past midnight, half-open.
    fn window(self) -> (i64, i64) {
        match self {
            Self::Am => (0, 12 * 3600),
            Self::Pm => (12 * 3600, 24 * 3600),
            Self::Morning => (6 * 3600, 12 * 3600),
            Self::Afternoon => (13 * 3600, 17 * 3600),
            Self::Evening => (17 * 3600, 20 * 3600),
            Self::Night => (20 * 3600, 24 * 3600),
            Self::Hours(h) => (i64::from(h) * 3600, (i64::from(h) + 12) * 3600),
        }
    }

    #[must_use]
    pub fn width(self) -> i64 {
        let (begin, end) = self.window();
        end - begin
    }
}

fn span_on(portion: DayPortion, day: NaiveDateTime) -> Option<Span> {
    let (begin, end) = portion.window();
    let base = start_of_day(day);
    Span::new(base + Duration::seconds(begin), base + Duration::seconds(end))
}

pub(super) fn this(portion: &DayPortion, now: NaiveDateTime, context: Context) -> Option<Span> {
    let today = span_on(*portion, now)?;
    match context {
        Context::None => Some(today),
        Context::Future => {
            if now < today.end() {
                Some(today)
            } else {
                span_on(*portion, now + Duration::days(1))
            }
        }
        Context::Past => {
            if now > today.begin() {
                Some(today)
            } else {
                span_on(*portion, now - Duration::days(1))
            }
        }
    }
}

pub(super) fn first(portion: &DayPortion, now: NaiveDateTime, pointer: Pointer) -> Option<Span> {
    let today = span_on(*portion, now)?;
    match pointer {
        Pointer::Future => {
            if now < today.begin() {
                Some(today)
            } else {
                span_on(*portion, now + Duration::days(1))
            }
        }
        Pointer::Past => {
            if now >= today.end() {
                Some(today)
            } else {
                span_on(*portion, now - Duration::days(1))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2006, 8, 16).unwrap().and_hms_opt(h, 0, 0).unwrap()
    }

    #[test]
    fn windows() {
        assert_eq!(DayPortion::Am.window(), (0, 43_200));
        assert_eq!(DayPortion::Hours(6).window(), (21_600, 64_800));
        assert_eq!(DayPortion::Evening.width(), 3 * 3600);
    }

    #[test]
    fn this_none_is_todays_window() {
        let span = this(&DayPortion::Morning, at(14), Context::None).unwrap();
        assert_eq!(span.begin(), at(6));
        assert_eq!(span.end(), at(12));
    }

    #[test]
    fn future_rolls_an_elapsed_portion_to_tomorrow() {
        let span = this(&DayPortion::Morning, at(14), Context::Future).unwrap();
        assert_eq!(span.begin().date(), NaiveDate::from_ymd_opt(2006, 8, 17).unwrap());
    }

    #[test]
    fn pm_runs_to_midnight() {
        let span = this(&DayPortion::Pm, at(14), Context::None).unwrap();
        assert_eq!(span.end(), at(0) + Duration::days(1));
    }
}
