//! Seasons, generic ("next season") and named ("summer").
//!
//! Boundaries are the fixed northern-hemisphere dates the parser has
//! always used: spring starts Mar 20, summer Jun 21, autumn Sep 23,
//! winter Dec 22. A season's span runs to the start of the following one.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use serde::{Deserialize, Serialize};

use super::{midnight, signed, SEASON_SECONDS};
use crate::options::Context;
use crate::span::Span;
use crate::token::Pointer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    fn start_month_day(self) -> (u32, u32) {
        match self {
            Self::Spring => (3, 20),
            Self::Summer => (6, 21),
            Self::Autumn => (9, 23),
            Self::Winter => (12, 22),
        }
    }

    fn following(self) -> Self {
        match self {
            Self::Spring => Self::Summer,
            Self::Summer => Self::Autumn,
            Self::Autumn => Self::Winter,
            Self::Winter => Self::Spring,
        }
    }
}

fn start_in(season: Season, year: i32) -> Option<NaiveDateTime> {
    let (month, day) = season.start_month_day();
    NaiveDate::from_ymd_opt(year, month, day).map(midnight)
}

/// Span of `season` whose start falls in `year`. Winter runs into the
/// next calendar year.
fn span_starting(season: Season, year: i32) -> Option<Span> {
    let begin = start_in(season, year)?;
    let next = season.following();
    let end_year = if season == Season::Winter { year + 1 } else { year };
    Span::new(begin, start_in(next, end_year)?)
}

/// The season span containing `now`, with the year its start falls in.
fn containing(now: NaiveDateTime) -> Option<(Season, i32)> {
    let year = now.year();
    let candidates = [
        (Season::Winter, year - 1),
        (Season::Spring, year),
        (Season::Summer, year),
        (Season::Autumn, year),
        (Season::Winter, year),
    ];
    for (season, start_year) in candidates {
        if span_starting(season, start_year)?.covers(now) {
            return Some((season, start_year));
        }
    }
    None
}

pub(super) fn this(now: NaiveDateTime, context: Context) -> Option<Span> {
    let (season, year) = containing(now)?;
    let whole = span_starting(season, year)?;
    match context {
        Context::Future => Span::new(now, whole.end()),
        Context::Past => Span::new(whole.begin(), now),
        Context::None => Some(whole),
    }
}

pub(super) fn first(now: NaiveDateTime, pointer: Pointer) -> Option<Span> {
    let (season, year) = containing(now)?;
    let current = span_starting(season, year)?;
    succ(current, pointer)
}

pub(super) fn succ(current: Span, pointer: Pointer) -> Option<Span> {
    let (season, year) = containing(current.begin())?;
    match pointer {
        Pointer::Future => {
            let next = season.following();
            let next_year = if season == Season::Winter { year + 1 } else { year };
            span_starting(next, next_year)
        }
        Pointer::Past => {
            let (prev, prev_year) = match season {
                Season::Spring => (Season::Winter, year - 1),
                Season::Summer => (Season::Spring, year),
                Season::Autumn => (Season::Summer, year),
                Season::Winter => (Season::Autumn, year),
            };
            span_starting(prev, prev_year)
        }
    }
}

pub(super) fn this_named(name: Season, now: NaiveDateTime, context: Context) -> Option<Span> {
    let year = now.year();
    match context {
        Context::Future => {
            // The first occurrence still under way or upcoming.
            for y in [year - 1, year, year + 1] {
                let span = span_starting(name, y)?;
                if span.end() > now {
                    return Some(span);
                }
            }
            None
        }
        Context::Past => first_named(name, now, Pointer::Past),
        Context::None => span_starting(name, year),
    }
}

pub(super) fn first_named(name: Season, now: NaiveDateTime, pointer: Pointer) -> Option<Span> {
    match pointer {
        Pointer::Future => {
            for y in [now.year(), now.year() + 1] {
                let span = span_starting(name, y)?;
                if span.begin() > now {
                    return Some(span);
                }
            }
            None
        }
        Pointer::Past => {
            for y in [now.year(), now.year() - 1, now.year() - 2] {
                let span = span_starting(name, y)?;
                if span.end() <= now {
                    return Some(span);
                }
            }
            None
        }
    }
}

pub(super) fn succ_named(current: Span, pointer: Pointer) -> Option<Span> {
    Some(current.shift(signed(4 * SEASON_SECONDS, pointer)))
}
