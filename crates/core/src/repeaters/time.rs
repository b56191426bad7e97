//! Clock times.
//!
//! A tick is an offset into a day. Ticks from meridianless forms with an
//! hour of 1 through 12 are ambiguous: "4:00" may mean 04:00 or 16:00.
//! Stepping an ambiguous tick tries both readings, twelve hours apart;
//! an exact tick steps a full day at a time. The end-of-day sentinel
//! `24:00` is a valid tick one day past midnight.

use chrono::{Duration, NaiveDateTime};

use serde::{Deserialize, Serialize};

use super::start_of_day;
use crate::options::Context;
use crate::span::Span;
use crate::token::Pointer;

/// A normalized clock offset within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tick {
    seconds: u32,
    ambiguous: bool,
}

impl Tick {
    /// A tick that means exactly what it says, 24-hour clock.
    #[must_use]
    pub fn exact(seconds: u32) -> Self {
        Self {
            seconds,
            ambiguous: false,
        }
    }

    /// A meridianless tick that may be off by twelve hours.
    #[must_use]
    pub fn ambiguous(seconds: u32) -> Self {
        Self {
            seconds,
            ambiguous: true,
        }
    }

    #[must_use]
    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    #[must_use]
    pub fn is_ambiguous(&self) -> bool {
        self.ambiguous
    }

    /// The same tick read as 24-hour clock.
    #[must_use]
    pub fn disambiguated(self) -> Self {
        Self::exact(self.seconds)
    }

    /// Resolve against an explicit meridian: `4:00` + pm = 16:00,
    /// `12:00` + am = 00:00.
    #[must_use]
    pub fn with_meridian(self, pm: bool) -> Self {
        let half_day = 12 * 3600;
        // 12am is midnight and 12pm is noon, which the wraparound below
        // yields without a special case.
        let seconds = match (pm, self.seconds >= half_day) {
            (true, true) | (false, false) => self.seconds,
            (true, false) => self.seconds + half_day,
            (false, true) => self.seconds - half_day,
        };
        Self::exact(seconds)
    }
}

pub(super) fn this(tick: Tick, now: NaiveDateTime, context: Context) -> Option<Span> {
    let pointer = match context {
        Context::Past => Pointer::Past,
        Context::Future | Context::None => Pointer::Future,
    };
    first(tick, now, pointer)
}

pub(super) fn first(tick: Tick, now: NaiveDateTime, pointer: Pointer) -> Option<Span> {
    let base = start_of_day(now);
    let t = Duration::seconds(i64::from(tick.seconds));
    let half = Duration::hours(12);
    let day = Duration::days(1);

    let candidates: Vec<NaiveDateTime> = match (pointer, tick.ambiguous) {
        (Pointer::Future, true) => vec![base + t, base + half + t, base + day + t],
        (Pointer::Future, false) => vec![base + t, base + day + t],
        (Pointer::Past, true) => vec![base + half + t, base + t, base - day + half + t, base - day + t],
        (Pointer::Past, false) => vec![base + t, base - day + t],
    };

    let hit = match pointer {
        Pointer::Future => candidates.into_iter().find(|c| *c >= now),
        Pointer::Past => candidates.into_iter().find(|c| *c <= now),
    }?;
    Some(Span::instant(hit))
}

pub(super) fn succ(tick: Tick, current: Span, pointer: Pointer) -> Option<Span> {
    let step = if tick.ambiguous { 12 * 3600 } else { 86_400 };
    Some(current.shift(super::signed(step, pointer)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(d: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2006, 8, d).unwrap().and_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn exact_time_later_today() {
        let span = first(Tick::exact(16 * 3600), at(16, 14, 0), Pointer::Future).unwrap();
        assert_eq!(span.begin(), at(16, 16, 0));
    }

    #[test]
    fn exact_time_already_past_rolls_to_tomorrow() {
        let span = first(Tick::exact(9 * 3600), at(16, 14, 0), Pointer::Future).unwrap();
        assert_eq!(span.begin(), at(17, 9, 0));
    }

    #[test]
    fn ambiguous_time_tries_the_afternoon_reading() {
        // 4:00 at 14:00 is next satisfied by 16:00.
        let span = first(Tick::ambiguous(4 * 3600), at(16, 14, 0), Pointer::Future).unwrap();
        assert_eq!(span.begin(), at(16, 16, 0));
    }

    #[test]
    fn end_of_day_sentinel_is_the_next_midnight() {
        let span = first(Tick::exact(24 * 3600), at(16, 14, 0), Pointer::Future).unwrap();
        assert_eq!(span.begin(), at(17, 0, 0));
    }

    #[test]
    fn meridian_resolution() {
        assert_eq!(Tick::ambiguous(4 * 3600).with_meridian(true).seconds(), 16 * 3600);
        assert_eq!(Tick::ambiguous(12 * 3600).with_meridian(false).seconds(), 0);
        assert_eq!(Tick::ambiguous(12 * 3600).with_meridian(true).seconds(), 12 * 3600);
        assert_eq!(Tick::ambiguous(9 * 3600).with_meridian(false).seconds(), 9 * 3600);
    }

    #[test]
    fn past_pointer_finds_the_most_recent_occurrence() {
        let span = first(Tick::ambiguous(4 * 3600), at(16, 14, 0), Pointer::Past).unwrap();
        assert_eq!(span.begin(), at(16, 4, 0));
    }
}
