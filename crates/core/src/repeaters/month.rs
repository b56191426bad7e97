//! The generic month unit.

use chrono::{Datelike, Duration, NaiveDateTime};

use super::{first_of_month, shift_months, signed, start_of_day};
use crate::options::Context;
use crate::span::Span;
use crate::token::Pointer;

fn containing(now: NaiveDateTime) -> Option<Span> {
    let begin = first_of_month(now.year(), now.month())?;
    Span::new(begin, shift_months(begin, 1)?)
}

pub(super) fn this(now: NaiveDateTime, context: Context) -> Option<Span> {
    match context {
        Context::Future => {
            let whole = containing(now)?;
            Span::new(start_of_day(now) + Duration::days(1), whole.end())
        }
        Context::Past => {
            let whole = containing(now)?;
            Span::new(whole.begin(), start_of_day(now))
        }
        Context::None => containing(now),
    }
}

pub(super) fn first(now: NaiveDateTime, pointer: Pointer) -> Option<Span> {
    let current = containing(now)?;
    succ(current, pointer)
}

pub(super) fn succ(current: Span, pointer: Pointer) -> Option<Span> {
    let months = match pointer {
        Pointer::Future => 1,
        Pointer::Past => -1,
    };
    let begin = shift_months(current.begin(), months)?;
    Span::new(begin, shift_months(begin, 1)?)
}

pub(super) fn offset(span: Span, amount: i64, pointer: Pointer) -> Option<Span> {
    let months = signed(amount, pointer);
    Span::new(
        shift_months(span.begin(), months)?,
        shift_months(span.end(), months)?,
    )
}
