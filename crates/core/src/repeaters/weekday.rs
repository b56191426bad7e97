//! The weekday unit: any of Monday through Friday.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};

use super::midnight;
use crate::options::Context;
use crate::span::Span;
use crate::token::Pointer;

fn is_weekday(day: Weekday) -> bool {
    !matches!(day, Weekday::Sat | Weekday::Sun)
}

fn day_span(date: NaiveDate) -> Option<Span> {
    Span::new(midnight(date), midnight(date) + Duration::days(1))
}

fn scan(mut date: NaiveDate, step: i64) -> NaiveDate {
    while !is_weekday(date.weekday()) {
        date += Duration::days(step);
    }
    date
}

pub(super) fn this(now: NaiveDateTime, context: Context) -> Option<Span> {
    match context {
        Context::Future => first(now, Pointer::Future),
        Context::Past => first(now, Pointer::Past),
        Context::None => {
            if is_weekday(now.date().weekday()) {
                day_span(now.date())
            } else {
                first(now, Pointer::Future)
            }
        }
    }
}

pub(super) fn first(now: NaiveDateTime, pointer: Pointer) -> Option<Span> {
    let date = match pointer {
        Pointer::Future => scan(now.date() + Duration::days(1), 1),
        Pointer::Past => scan(now.date() - Duration::days(1), -1),
    };
    day_span(date)
}

pub(super) fn succ(current: Span, pointer: Pointer) -> Option<Span> {
    let step = match pointer {
        Pointer::Future => 1,
        Pointer::Past => -1,
    };
    let date = scan(current.begin().date() + Duration::days(step), step);
    day_span(date)
}

/// Walk `amount` weekdays from each endpoint, skipping weekends.
pub(super) fn offset(span: Span, amount: i64, pointer: Pointer) -> Option<Span> {
    let step = match pointer {
        Pointer::Future => 1,
        Pointer::Past => -1,
    };
    let mut date = span.begin().date();
    for _ in 0..amount {
        date = scan(date + Duration::days(step), step);
    }
    let begin = chrono::NaiveDateTime::new(date, span.begin().time());
    Span::new(begin, begin + (span.end() - span.begin()))
}
