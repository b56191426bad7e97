//! The minute unit.

use chrono::{Duration, NaiveDateTime};

use super::floor_minute;
use crate::options::Context;
use crate::span::Span;
use crate::token::Pointer;

pub(super) fn this(now: NaiveDateTime, context: Context) -> Option<Span> {
    let begin = floor_minute(now);
    match context {
        Context::Future => Span::new(now + Duration::seconds(1), begin + Duration::minutes(1)),
        Context::Past => Span::new(begin, now),
        Context::None => Span::new(begin, begin + Duration::minutes(1)),
    }
}

pub(super) fn first(now: NaiveDateTime, pointer: Pointer) -> Option<Span> {
    let begin = match pointer {
        Pointer::Future => floor_minute(now) + Duration::minutes(1),
        Pointer::Past => floor_minute(now) - Duration::minutes(1),
    };
    Span::new(begin, begin + Duration::minutes(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2006, 8, 16).unwrap().and_hms_opt(14, m, s).unwrap()
    }

    #[test]
    fn next_minute_is_whole() {
        let span = first(at(30, 15), Pointer::Future).unwrap();
        assert_eq!(span.begin(), at(31, 0));
        assert_eq!(span.end(), at(32, 0));
    }
}
