//! The hour unit.

use chrono::{Duration, NaiveDateTime};

use super::{floor_hour, floor_minute};
use crate::options::Context;
use crate::span::Span;
use crate::token::Pointer;

pub(super) fn this(now: NaiveDateTime, context: Context) -> Option<Span> {
    let begin = floor_hour(now);
    match context {
        Context::Future => Span::new(floor_minute(now) + Duration::minutes(1), begin + Duration::hours(1)),
        Context::Past => Span::new(begin, floor_minute(now)),
        Context::None => Span::new(begin, begin + Duration::hours(1)),
    }
}

pub(super) fn first(now: NaiveDateTime, pointer: Pointer) -> Option<Span> {
    let begin = match pointer {
        Pointer::Future => floor_hour(now) + Duration::hours(1),
        Pointer::Past => floor_hour(now) - Duration::hours(1),
    };
    Span::new(begin, begin + Duration::hours(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2006, 8, 16).unwrap().and_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn next_hour_is_whole() {
        let span = first(at(14, 30), Pointer::Future).unwrap();
        assert_eq!(span.begin(), at(15, 0));
        assert_eq!(span.end(), at(16, 0));
    }

    #[test]
    fn this_hour_none_is_the_clock_hour() {
        let span = this(at(14, 30), Context::None).unwrap();
        assert_eq!(span.begin(), at(14, 0));
        assert_eq!(span.end(), at(15, 0));
    }
}
