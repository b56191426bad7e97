//! The year unit.

use chrono::{Datelike, Duration, NaiveDateTime};

use super::{first_of_month, shift_years, signed, start_of_day};
use crate::options::Context;
use crate::span::Span;
use crate::token::Pointer;

fn span_of(year: i32) -> Option<Span> {
    Span::new(first_of_month(year, 1)?, first_of_month(year + 1, 1)?)
}

pub(super) fn this(now: NaiveDateTime, context: Context) -> Option<Span> {
    let year = now.year();
    match context {
        Context::Future => Span::new(
            start_of_day(now) + Duration::days(1),
            first_of_month(year + 1, 1)?,
        ),
        Context::Past => Span::new(first_of_month(year, 1)?, start_of_day(now)),
        Context::None => span_of(year),
    }
}

pub(super) fn first(now: NaiveDateTime, pointer: Pointer) -> Option<Span> {
    match pointer {
        Pointer::Future => span_of(now.year() + 1),
        Pointer::Past => span_of(now.year() - 1),
    }
}

pub(super) fn succ(current: Span, pointer: Pointer) -> Option<Span> {
    let step = match pointer {
        Pointer::Future => 1,
        Pointer::Past => -1,
    };
    span_of(current.begin().year() + step)
}

pub(super) fn offset(span: Span, amount: i64, pointer: Pointer) -> Option<Span> {
    let years = signed(amount, pointer);
    Span::new(shift_years(span.begin(), years)?, shift_years(span.end(), years)?)
}
