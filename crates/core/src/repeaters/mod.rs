//! The repeater family: every calendar unit the grammar can name.
//!
//! A repeater answers three questions relative to a reference instant:
//! which span of its unit is "this" one (biased by context), which is the
//! adjacent one in a direction (`next`, stateful so callers can step
//! through occurrences), and how wide the unit nominally is in seconds.
//! The nominal widths rank repeaters from outermost to innermost when a
//! phrase stacks several ("next week monday at 7").

mod day;
mod day_name;
mod day_portion;
mod fortnight;
mod hour;
mod minute;
mod month;
mod month_name;
mod season;
mod second;
mod time;
mod week;
mod weekday;
mod weekend;
mod year;

pub use day_portion::DayPortion;
pub use season::Season;
pub use time::Tick;

use chrono::{Datelike, Duration, Month, NaiveDate, NaiveDateTime, Timelike, Weekday};

use crate::options::Context;
use crate::span::Span;
use crate::token::Pointer;

pub(crate) const YEAR_SECONDS: i64 = 31_536_000; // 365 days
pub(crate) const SEASON_SECONDS: i64 = 7_862_400; // 91 days
pub(crate) const MONTH_SECONDS: i64 = 2_592_000; // 30 days
pub(crate) const FORTNIGHT_SECONDS: i64 = 1_209_600;
pub(crate) const WEEK_SECONDS: i64 = 604_800;
pub(crate) const WEEKEND_SECONDS: i64 = 172_800;
pub(crate) const DAY_SECONDS: i64 = 86_400;
pub(crate) const HOUR_SECONDS: i64 = 3_600;

/// A calendar unit, possibly carrying which one ("november", "monday",
/// "afternoon", "2:30").
#[derive(Debug, Clone, PartialEq)]
pub enum RepeaterKind {
    Year,
    /// The generic unit, as in "next season".
    Season,
    SeasonName(Season),
    Month,
    MonthName(Month),
    Fortnight,
    Week,
    Weekend,
    /// Any of Monday through Friday.
    Weekday,
    Day,
    DayName(Weekday),
    DayPortion(DayPortion),
    Hour,
    Minute,
    Second,
    Time(Tick),
}

impl RepeaterKind {
    /// Nominal width in seconds, used to rank stacked repeaters.
    #[must_use]
    pub fn width(&self) -> i64 {
        match self {
            Self::Year => YEAR_SECONDS,
            Self::Season | Self::SeasonName(_) => SEASON_SECONDS,
            Self::Month | Self::MonthName(_) => MONTH_SECONDS,
            Self::Fortnight => FORTNIGHT_SECONDS,
            Self::Week => WEEK_SECONDS,
            Self::Weekend => WEEKEND_SECONDS,
            Self::Weekday | Self::Day | Self::DayName(_) => DAY_SECONDS,
            Self::DayPortion(portion) => portion.width(),
            Self::Hour => HOUR_SECONDS,
            Self::Minute => 60,
            Self::Second | Self::Time(_) => 1,
        }
    }
}

/// Stateful stepping through occurrences of one repeater.
///
/// The first `next` is computed from the reference instant; later calls
/// step from the previous result, which is how the ordinal handlers walk
/// to "the 3rd wednesday".
#[derive(Debug, Clone)]
pub struct Cursor {
    kind: RepeaterKind,
    reference: NaiveDateTime,
    current: Option<Span>,
}

impl Cursor {
    #[must_use]
    pub fn new(kind: RepeaterKind, reference: NaiveDateTime) -> Self {
        Self {
            kind,
            reference,
            current: None,
        }
    }

    #[must_use]
    pub fn kind(&self) -> &RepeaterKind {
        &self.kind
    }

    /// The span of this unit containing (or adjoining) the reference,
    /// biased by context.
    pub fn this(&mut self, context: Context) -> Option<Span> {
        let now = self.reference;
        let span = match &self.kind {
            RepeaterKind::Year => year::this(now, context),
            RepeaterKind::Season => season::this(now, context),
            RepeaterKind::SeasonName(name) => season::this_named(*name, now, context),
            RepeaterKind::Month => month::this(now, context),
            RepeaterKind::MonthName(name) => month_name::this(*name, now, context),
            RepeaterKind::Fortnight => fortnight::this(now, context),
            RepeaterKind::Week => week::this(now, context),
            RepeaterKind::Weekend => weekend::this(now, context),
            RepeaterKind::Weekday => weekday::this(now, context),
            RepeaterKind::Day => day::this(now, context),
            RepeaterKind::DayName(name) => day_name::this(*name, now, context),
            RepeaterKind::DayPortion(portion) => day_portion::this(portion, now, context),
            RepeaterKind::Hour => hour::this(now, context),
            RepeaterKind::Minute => minute::this(now, context),
            RepeaterKind::Second => second::this(now, context),
            RepeaterKind::Time(tick) => time::this(*tick, now, context),
        };
        self.current = span;
        span
    }

    /// The neutral occurrence used when placing this repeater inside an
    /// enclosing span: the unit containing the reference, or for
    /// point-like units the first occurrence at or after it. Unlike
    /// [`Cursor::this`] with [`Context::None`], a day name scans forward
    /// here instead of favoring the earlier occurrence.
    pub fn within(&mut self) -> Option<Span> {
        let span = match &self.kind {
            RepeaterKind::DayName(name) => day_name::first(*name, self.reference, Pointer::Future),
            _ => return self.this(Context::None),
        };
        self.current = span;
        span
    }

    /// Step to the adjacent occurrence in the pointer's direction.
    pub fn next(&mut self, pointer: Pointer) -> Option<Span> {
        let span = match self.current {
            None => self.first(pointer),
            Some(current) => self.succ(current, pointer),
        };
        self.current = span;
        span
    }

    fn first(&self, pointer: Pointer) -> Option<Span> {
        let now = self.reference;
        match &self.kind {
            RepeaterKind::Year => year::first(now, pointer),
            RepeaterKind::Season => season::first(now, pointer),
            RepeaterKind::SeasonName(name) => season::first_named(*name, now, pointer),
            RepeaterKind::Month => month::first(now, pointer),
            RepeaterKind::MonthName(name) => month_name::first(*name, now, pointer),
            RepeaterKind::Fortnight => fortnight::first(now, pointer),
            RepeaterKind::Week => week::first(now, pointer),
            RepeaterKind::Weekend => weekend::first(now, pointer),
            RepeaterKind::Weekday => weekday::first(now, pointer),
            RepeaterKind::Day => day::first(now, pointer),
            RepeaterKind::DayName(name) => day_name::first(*name, now, pointer),
            RepeaterKind::DayPortion(portion) => day_portion::first(portion, now, pointer),
            RepeaterKind::Hour => hour::first(now, pointer),
            RepeaterKind::Minute => minute::first(now, pointer),
            RepeaterKind::Second => second::first(now, pointer),
            RepeaterKind::Time(tick) => time::first(*tick, now, pointer),
        }
    }

    fn succ(&self, current: Span, pointer: Pointer) -> Option<Span> {
        match &self.kind {
            RepeaterKind::Year => year::succ(current, pointer),
            RepeaterKind::Season => season::succ(current, pointer),
            RepeaterKind::SeasonName(_) => season::succ_named(current, pointer),
            RepeaterKind::Month => month::succ(current, pointer),
            RepeaterKind::MonthName(_) => month_name::succ(current, pointer),
            RepeaterKind::Fortnight => Some(current.shift(signed(FORTNIGHT_SECONDS, pointer))),
            RepeaterKind::Week => Some(current.shift(signed(WEEK_SECONDS, pointer))),
            RepeaterKind::Weekend => Some(current.shift(signed(WEEK_SECONDS, pointer))),
            RepeaterKind::Weekday => weekday::succ(current, pointer),
            RepeaterKind::Day => Some(current.shift(signed(DAY_SECONDS, pointer))),
            RepeaterKind::DayName(_) => Some(current.shift(signed(7 * DAY_SECONDS, pointer))),
            RepeaterKind::DayPortion(_) => Some(current.shift(signed(DAY_SECONDS, pointer))),
            RepeaterKind::Hour => Some(current.shift(signed(HOUR_SECONDS, pointer))),
            RepeaterKind::Minute => Some(current.shift(signed(60, pointer))),
            RepeaterKind::Second => Some(current.shift(signed(1, pointer))),
            RepeaterKind::Time(tick) => time::succ(*tick, current, pointer),
        }
    }
}

/// Shift a span by `amount` units of `kind` in the pointer's direction.
///
/// Year, month, and season shift calendar-wise so that "in 2 months" lands
/// on the same day-of-month; everything else shifts by nominal width.
pub(crate) fn offset(kind: &RepeaterKind, span: Span, amount: i64, pointer: Pointer) -> Option<Span> {
    match kind {
        RepeaterKind::Year => year::offset(span, amount, pointer),
        RepeaterKind::Month => month::offset(span, amount, pointer),
        RepeaterKind::MonthName(_) => year::offset(span, amount, pointer),
        RepeaterKind::Weekday => weekday::offset(span, amount, pointer),
        RepeaterKind::DayName(_) => Some(span.shift(signed(7 * DAY_SECONDS * amount, pointer))),
        _ => Some(span.shift(signed(kind.width() * amount, pointer))),
    }
}

pub(super) fn signed(seconds: i64, pointer: Pointer) -> i64 {
    match pointer {
        Pointer::Future => seconds,
        Pointer::Past => -seconds,
    }
}

// Calendar helpers shared by the unit implementations.

pub(crate) fn start_of_day(t: NaiveDateTime) -> NaiveDateTime {
    t.date().and_hms_opt(0, 0, 0).unwrap_or(t)
}

pub(super) fn floor_hour(t: NaiveDateTime) -> NaiveDateTime {
    t.date().and_hms_opt(t.hour(), 0, 0).unwrap_or(t)
}

pub(super) fn floor_minute(t: NaiveDateTime) -> NaiveDateTime {
    t.date().and_hms_opt(t.hour(), t.minute(), 0).unwrap_or(t)
}

pub(crate) fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(chrono::NaiveTime::MIN)
}

pub(super) fn first_of_month(year: i32, month: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, 1).map(midnight)
}

/// The most recent Sunday at or before `t`. Weeks begin on Sunday.
pub(super) fn week_start(t: NaiveDateTime) -> NaiveDateTime {
    let days_back = t.date().weekday().num_days_from_sunday();
    midnight(t.date() - Duration::days(i64::from(days_back)))
}

/// First `target` strictly after `date`.
pub(super) fn next_weekday_after(date: NaiveDate, target: Weekday) -> NaiveDate {
    let mut d = date + Duration::days(1);
    while d.weekday() != target {
        d += Duration::days(1);
    }
    d
}

/// Last `target` strictly before `date`.
pub(super) fn prev_weekday_before(date: NaiveDate, target: Weekday) -> NaiveDate {
    let mut d = date - Duration::days(1);
    while d.weekday() != target {
        d -= Duration::days(1);
    }
    d
}

/// Shift a datetime by whole months, clamping the day to the target
/// month's length (Jan 31 + 1 month = Feb 28/29).
pub(crate) fn shift_months(t: NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
    let shifted = if months >= 0 {
        t.date().checked_add_months(chrono::Months::new(months.unsigned_abs() as u32))?
    } else {
        t.date().checked_sub_months(chrono::Months::new(months.unsigned_abs() as u32))?
    };
    Some(NaiveDateTime::new(shifted, t.time()))
}

pub(super) fn shift_years(t: NaiveDateTime, years: i64) -> Option<NaiveDateTime> {
    shift_months(t, years * 12)
}
