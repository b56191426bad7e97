//! The day unit.

use chrono::{Duration, NaiveDateTime};

use super::{floor_hour, start_of_day};
use crate::options::Context;
use crate::span::Span;
use crate::token::Pointer;

pub(super) fn this(now: NaiveDateTime, context: Context) -> Option<Span> {
    let begin = start_of_day(now);
    let end = begin + Duration::days(1);
    match context {
        Context::Future => Span::new(floor_hour(now) + Duration::hours(1), end),
        Context::Past => Span::new(begin, floor_hour(now)),
        Context::None => Span::new(begin, end),
    }
}

pub(super) fn first(now: NaiveDateTime, pointer: Pointer) -> Option<Span> {
    let begin = match pointer {
        Pointer::Future => start_of_day(now) + Duration::days(1),
        Pointer::Past => start_of_day(now) - Duration::days(1),
    };
    Span::new(begin, begin + Duration::days(1))
}
