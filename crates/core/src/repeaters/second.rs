//! The second unit. "now" normalizes to "this second".

use chrono::{Duration, NaiveDateTime};

use crate::options::Context;
use crate::span::Span;
use crate::token::Pointer;

pub(super) fn this(now: NaiveDateTime, _context: Context) -> Option<Span> {
    Some(Span::instant(now))
}

pub(super) fn first(now: NaiveDateTime, pointer: Pointer) -> Option<Span> {
    let begin = match pointer {
        Pointer::Future => now + Duration::seconds(1),
        Pointer::Past => now - Duration::seconds(1),
    };
    Some(Span::instant(begin))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn this_second_is_the_reference_itself() {
        let now = NaiveDate::from_ymd_opt(2006, 8, 16)
            .unwrap()
            .and_hms_opt(14, 0, 0)
            .unwrap();
        let span = this(now, Context::Future).unwrap();
        assert_eq!(span.begin(), now);
        assert_eq!(span.width(), 1);
    }
}
