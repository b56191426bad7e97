//! The weekend unit: Saturday midnight for two days.

use chrono::{Duration, NaiveDateTime, Weekday};

use super::{midnight, next_weekday_after, prev_weekday_before};
use crate::options::Context;
use crate::span::Span;
use crate::token::Pointer;

fn weekend_starting(begin: NaiveDateTime) -> Option<Span> {
    Span::new(begin, begin + Duration::days(2))
}

pub(super) fn this(now: NaiveDateTime, context: Context) -> Option<Span> {
    match context {
        Context::Future => first(now, Pointer::Future),
        Context::Past => first(now, Pointer::Past),
        Context::None => {
            // The weekend under way, or the upcoming one.
            let last_saturday = midnight(prev_weekday_before(
                now.date() + Duration::days(1),
                Weekday::Sat,
            ));
            let current = weekend_starting(last_saturday)?;
            if current.end() > now {
                Some(current)
            } else {
                weekend_starting(midnight(next_weekday_after(now.date(), Weekday::Sat)))
            }
        }
    }
}

pub(super) fn first(now: NaiveDateTime, pointer: Pointer) -> Option<Span> {
    match pointer {
        Pointer::Future => {
            weekend_starting(midnight(next_weekday_after(now.date(), Weekday::Sat)))
        }
        Pointer::Past => {
            // Walk back to the most recent fully elapsed weekend.
            let mut saturday = prev_weekday_before(now.date() + Duration::days(1), Weekday::Sat);
            loop {
                let span = weekend_starting(midnight(saturday))?;
                if span.end() <= now {
                    return Some(span);
                }
                saturday -= Duration::days(7);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, 0, 0).unwrap()
    }

    #[test]
    fn next_weekend_from_a_wednesday() {
        let span = first(at(2006, 8, 16, 14), Pointer::Future).unwrap();
        assert_eq!(span.begin(), at(2006, 8, 19, 0));
        assert_eq!(span.end(), at(2006, 8, 21, 0));
    }

    #[test]
    fn last_weekend_from_a_sunday_skips_the_current_one() {
        // 2006-08-20 is a Sunday; the weekend under way does not count.
        let span = first(at(2006, 8, 20, 10), Pointer::Past).unwrap();
        assert_eq!(span.begin(), at(2006, 8, 12, 0));
    }

    #[test]
    fn none_context_keeps_the_weekend_under_way() {
        let span = this(at(2006, 8, 20, 10), Context::None).unwrap();
        assert_eq!(span.begin(), at(2006, 8, 19, 0));
    }
}
