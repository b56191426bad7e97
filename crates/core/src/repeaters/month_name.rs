//! Named months: "november", "jan".

use chrono::{Datelike, Month, NaiveDateTime};

use super::{first_of_month, shift_months, shift_years};
use crate::options::Context;
use crate::span::Span;
use crate::token::Pointer;

fn span_in(name: Month, year: i32) -> Option<Span> {
    let begin = first_of_month(year, name.number_from_month())?;
    Span::new(begin, shift_months(begin, 1)?)
}

pub(super) fn this(name: Month, now: NaiveDateTime, context: Context) -> Option<Span> {
    let month = name.number_from_month();
    let year = match context {
        Context::Future => {
            if month >= now.month() {
                now.year()
            } else {
                now.year() + 1
            }
        }
        Context::Past => {
            if month <= now.month() {
                now.year()
            } else {
                now.year() - 1
            }
        }
        Context::None => now.year(),
    };
    span_in(name, year)
}

pub(super) fn first(name: Month, now: NaiveDateTime, pointer: Pointer) -> Option<Span> {
    let month = name.number_from_month();
    let year = match pointer {
        // Strictly after the current month.
        Pointer::Future => {
            if month > now.month() {
                now.year()
            } else {
                now.year() + 1
            }
        }
        Pointer::Past => {
            if month < now.month() {
                now.year()
            } else {
                now.year() - 1
            }
        }
    };
    span_in(name, year)
}

pub(super) fn succ(current: Span, pointer: Pointer) -> Option<Span> {
    let years = match pointer {
        Pointer::Future => 1,
        Pointer::Past => -1,
    };
    Span::new(
        shift_years(current.begin(), years)?,
        shift_years(current.end(), years)?,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn aug_16() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2006, 8, 16).unwrap().and_hms_opt(14, 0, 0).unwrap()
    }

    #[test]
    fn future_context_picks_the_upcoming_november() {
        let span = this(Month::November, aug_16(), Context::Future).unwrap();
        assert_eq!(span.begin().date(), NaiveDate::from_ymd_opt(2006, 11, 1).unwrap());
        assert_eq!(span.end().date(), NaiveDate::from_ymd_opt(2006, 12, 1).unwrap());
    }

    #[test]
    fn future_context_rolls_a_past_month_to_next_year() {
        let span = this(Month::March, aug_16(), Context::Future).unwrap();
        assert_eq!(span.begin().date(), NaiveDate::from_ymd_opt(2007, 3, 1).unwrap());
    }

    #[test]
    fn past_pointer_is_strict() {
        // "last november" in August goes back to the previous year.
        let span = first(Month::November, aug_16(), Pointer::Past).unwrap();
        assert_eq!(span.begin().date(), NaiveDate::from_ymd_opt(2005, 11, 1).unwrap());
        let span = first(Month::May, aug_16(), Pointer::Past).unwrap();
        assert_eq!(span.begin().date(), NaiveDate::from_ymd_opt(2006, 5, 1).unwrap());
    }

    #[test]
    fn none_context_stays_in_the_current_year() {
        let span = this(Month::March, aug_16(), Context::None).unwrap();
        assert_eq!(span.begin().date(), NaiveDate::from_ymd_opt(2006, 3, 1).unwrap());
    }
}
