//! The fortnight unit: two week-aligned weeks.

use chrono::{Duration, NaiveDateTime};

use super::{floor_hour, week_start};
use crate::options::Context;
use crate::span::Span;
use crate::token::Pointer;

pub(super) fn this(now: NaiveDateTime, context: Context) -> Option<Span> {
    let base = week_start(now);
    match context {
        Context::Future => Span::new(
            floor_hour(now) + Duration::hours(1),
            base + Duration::days(14),
        ),
        Context::Past => Span::new(base, floor_hour(now)),
        Context::None => Span::new(base, base + Duration::days(14)),
    }
}

pub(super) fn first(now: NaiveDateTime, pointer: Pointer) -> Option<Span> {
    let begin = match pointer {
        Pointer::Future => week_start(now) + Duration::days(7),
        Pointer::Past => week_start(now) - Duration::days(14),
    };
    Span::new(begin, begin + Duration::days(14))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn aug_16() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2006, 8, 16).unwrap().and_hms_opt(14, 0, 0).unwrap()
    }

    #[test]
    fn next_fortnight_starts_on_the_coming_sunday() {
        let span = first(aug_16(), Pointer::Future).unwrap();
        assert_eq!(span.begin().date(), NaiveDate::from_ymd_opt(2006, 8, 20).unwrap());
        assert_eq!(span.width(), 14 * 86_400);
    }

    #[test]
    fn this_fortnight_none_is_week_aligned() {
        let span = this(aug_16(), Context::None).unwrap();
        assert_eq!(span.begin().date(), NaiveDate::from_ymd_opt(2006, 8, 13).unwrap());
        assert_eq!(span.width(), 14 * 86_400);
    }
}
