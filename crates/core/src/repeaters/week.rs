//! The week unit. Weeks begin on Sunday.

use chrono::{Duration, NaiveDateTime};

use super::{floor_hour, week_start};
use crate::options::Context;
use crate::span::Span;
use crate::token::Pointer;

pub(super) fn this(now: NaiveDateTime, context: Context) -> Option<Span> {
    let begin = week_start(now);
    match context {
        Context::Future => Span::new(floor_hour(now) + Duration::hours(1), begin + Duration::days(7)),
        Context::Past => Span::new(begin, floor_hour(now)),
        Context::None => Span::new(begin, begin + Duration::days(7)),
    }
}

pub(super) fn first(now: NaiveDateTime, pointer: Pointer) -> Option<Span> {
    let begin = match pointer {
        Pointer::Future => week_start(now) + Duration::days(7),
        Pointer::Past => week_start(now) - Duration::days(7),
    };
    Span::new(begin, begin + Duration::days(7))
}
