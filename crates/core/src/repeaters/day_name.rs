//! Named weekdays: "monday", "fri".

use chrono::{Duration, NaiveDateTime, Weekday};

use super::{midnight, next_weekday_after, prev_weekday_before};
use crate::options::Context;
use crate::span::Span;
use crate::token::Pointer;

pub(super) fn this(name: Weekday, now: NaiveDateTime, context: Context) -> Option<Span> {
    // A bare day name leans on the context; with no bias at all the
    // earlier occurrence wins.
    let pointer = match context {
        Context::Future => Pointer::Future,
        Context::Past | Context::None => Pointer::Past,
    };
    first(name, now, pointer)
}

pub(super) fn first(name: Weekday, now: NaiveDateTime, pointer: Pointer) -> Option<Span> {
    let date = match pointer {
        Pointer::Future => next_weekday_after(now.date(), name),
        Pointer::Past => prev_weekday_before(now.date(), name),
    };
    Span::new(midnight(date), midnight(date) + Duration::days(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn aug_16() -> NaiveDateTime {
        // A Wednesday.
        NaiveDate::from_ymd_opt(2006, 8, 16).unwrap().and_hms_opt(14, 0, 0).unwrap()
    }

    #[test]
    fn upcoming_monday() {
        let span = first(Weekday::Mon, aug_16(), Pointer::Future).unwrap();
        assert_eq!(span.begin().date(), NaiveDate::from_ymd_opt(2006, 8, 21).unwrap());
    }

    #[test]
    fn the_same_day_name_means_a_week_out() {
        // "wednesday" on a Wednesday is the next one, not today.
        let span = first(Weekday::Wed, aug_16(), Pointer::Future).unwrap();
        assert_eq!(span.begin().date(), NaiveDate::from_ymd_opt(2006, 8, 23).unwrap());
    }

    #[test]
    fn previous_tuesday() {
        let span = first(Weekday::Tue, aug_16(), Pointer::Past).unwrap();
        assert_eq!(span.begin().date(), NaiveDate::from_ymd_opt(2006, 8, 15).unwrap());
    }

    #[test]
    fn past_context_biases_a_bare_name_backwards() {
        let span = this(Weekday::Mon, aug_16(), Context::Past).unwrap();
        assert_eq!(span.begin().date(), NaiveDate::from_ymd_opt(2006, 8, 14).unwrap());
    }
}
