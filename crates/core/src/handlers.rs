//! Handlers: from matched tokens to a span.
//!
//! Anchor handlers walk grabbers and stacked repeaters ("next week
//! monday"), arrow handlers shift a span by scalar multiples of a unit
//! ("3 weeks from now"), narrow handlers select the Nth occurrence inside
//! an outer span ("3rd wednesday in november"), and the date handlers
//! assemble explicit month/day/year/time components. A handler that finds
//! the combination impossible returns `None` and the matcher moves on.

use chrono::{Datelike, Duration, Month, NaiveDate, NaiveDateTime};

use crate::options::{Context, Options};
use crate::repeaters::{self, Cursor, DayPortion, RepeaterKind};
use crate::span::Span;
use crate::token::{Grabber, Pointer, Tag, TagKind, Token};

/// Identifies which handler a pattern routes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HandlerId {
    DayNameDateWithZone,
    MonthNameDayYear,
    MonthNameDay,
    TimeBeforeMonthNameDay,
    MonthNameOrdinal,
    TimeBeforeMonthNameOrdinal,
    OrdinalMonthNameYear,
    OrdinalMonthName,
    YearMonthNameOrdinal,
    MonthNameYear,
    DayMonthNameYear,
    DayMonthName,
    YearMonthDay,
    MonthYear,
    MonthDayYear,
    MonthDay,
    DayMonthYear,
    DayMonth,
    Anchor,
    AnchorReordered,
    ScalarRepeaterPointer,
    PointerScalarRepeater,
    ScalarRepeaterPointerAnchor,
    NthRepeaterInOuter,
    NthRepeaterAfterGrab,
}

pub(crate) fn dispatch(
    id: &HandlerId,
    tokens: &[Token],
    options: &Options,
    now: NaiveDateTime,
) -> Option<Span> {
    match id {
        HandlerId::DayNameDateWithZone => day_name_date_with_zone(tokens, options, now),
        HandlerId::MonthNameDayYear => month_name_day_year(tokens, options, now),
        HandlerId::MonthNameDay => month_name_day(tokens, options, now),
        HandlerId::TimeBeforeMonthNameDay => time_before_month_name_day(tokens, options, now),
        HandlerId::MonthNameOrdinal => month_name_ordinal(tokens, options, now),
        HandlerId::TimeBeforeMonthNameOrdinal => {
            time_before_month_name_ordinal(tokens, options, now)
        }
        HandlerId::OrdinalMonthNameYear => ordinal_month_name_year(tokens, options, now),
        HandlerId::OrdinalMonthName => ordinal_month_name(tokens, options, now),
        HandlerId::YearMonthNameOrdinal => year_month_name_ordinal(tokens, options, now),
        HandlerId::MonthNameYear => month_name_year(tokens, options, now),
        HandlerId::DayMonthNameYear => day_month_name_year(tokens, options, now),
        HandlerId::DayMonthName => day_month_name(tokens, options, now),
        HandlerId::YearMonthDay => year_month_day(tokens, options, now),
        HandlerId::MonthYear => month_year(tokens, options, now),
        HandlerId::MonthDayYear => month_day_year(tokens, options, now),
        HandlerId::MonthDay => month_day(tokens, options, now),
        HandlerId::DayMonthYear => day_month_year(tokens, options, now),
        HandlerId::DayMonth => day_month(tokens, options, now),
        HandlerId::Anchor => {
            let tokens = dealias_and_disambiguate(tokens, options);
            anchor(&tokens, options, now)
        }
        HandlerId::AnchorReordered => anchor_reordered(tokens, options, now),
        HandlerId::ScalarRepeaterPointer => scalar_repeater_pointer(tokens, Span::instant(now)),
        HandlerId::PointerScalarRepeater => pointer_scalar_repeater(tokens, now),
        HandlerId::ScalarRepeaterPointerAnchor => {
            scalar_repeater_pointer_anchor(tokens, options, now)
        }
        HandlerId::NthRepeaterInOuter => nth_repeater_in_outer(tokens, now),
        HandlerId::NthRepeaterAfterGrab => nth_repeater_after_grab(tokens, options, now),
    }
}

// ---------------------------------------------------------------------------
// Shared machinery

fn context_pointer(options: &Options) -> Pointer {
    match options.context {
        Context::Past => Pointer::Past,
        Context::Future | Context::None => Pointer::Future,
    }
}

fn month_of(token: &Token) -> Option<Month> {
    match token.get(TagKind::RepeaterMonthName) {
        Some(Tag::Repeater(RepeaterKind::MonthName(month))) => Some(*month),
        _ => None,
    }
}

fn time_tick_of(token: &Token) -> Option<repeaters::Tick> {
    match token.get(TagKind::RepeaterTime) {
        Some(Tag::Repeater(RepeaterKind::Time(tick))) => Some(*tick),
        _ => None,
    }
}

fn portion_of(token: &Token) -> Option<DayPortion> {
    match token.get(TagKind::RepeaterDayPortion) {
        Some(Tag::Repeater(RepeaterKind::DayPortion(portion))) => Some(*portion),
        _ => None,
    }
}

fn date_start(year: i32, month: u32, day: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day).map(repeaters::midnight)
}

/// Expand a two-digit year against the reference year: below
/// `(reference_year mod 100) + bias` it lands in the reference instant's
/// century, at or above it in the previous one. With the default bias of
/// 50, "11" read in 2006 is 2011 and "56" (the exact pivot) is 1956.
fn make_year(year: i32, now: NaiveDateTime, bias: i32) -> i32 {
    if year >= 100 {
        return year;
    }
    let century = (now.year() / 100) * 100;
    if year < now.year() % 100 + bias {
        century + year
    } else {
        century - 100 + year
    }
}

/// Repeater tags of the tokens, widest unit first. The sort is stable, so
/// equally wide units keep their written order.
fn repeaters_of(tokens: &[Token]) -> Vec<RepeaterKind> {
    let mut reps: Vec<RepeaterKind> = tokens
        .iter()
        .filter_map(|t| t.repeater().cloned())
        .collect();
    reps.sort_by_key(|r| std::cmp::Reverse(r.width()));
    reps
}

/// Resolve day-portion wording and ambiguous clock times.
///
/// "5:00 morning" reads the portion as am; a time directly followed by an
/// explicit meridian collapses into an exact tick ("12:00 am" is
/// midnight); and a still-ambiguous bare time either gets a synthetic
/// plausible-hours window after it (the `ambiguous_time_range` option) or,
/// with the option off, is read as 24-hour clock.
fn dealias_and_disambiguate(tokens: &[Token], options: &Options) -> Vec<Token> {
    let mut tokens: Vec<Token> = tokens.to_vec();

    let portion_index = tokens.iter().position(|t| t.has(TagKind::RepeaterDayPortion));
    let time_index = tokens.iter().position(|t| t.has(TagKind::RepeaterTime));
    if let (Some(pi), Some(_)) = (portion_index, time_index) {
        let meridian = match portion_of(&tokens[pi]) {
            Some(DayPortion::Morning) => Some(DayPortion::Am),
            Some(DayPortion::Afternoon | DayPortion::Evening | DayPortion::Night) => {
                Some(DayPortion::Pm)
            }
            _ => None,
        };
        if let Some(portion) = meridian {
            tokens[pi].untag(TagKind::RepeaterDayPortion);
            tokens[pi].tag(Tag::Repeater(RepeaterKind::DayPortion(portion)));
        }
    }

    let mut i = 0;
    while i + 1 < tokens.len() {
        let pm = match portion_of(&tokens[i + 1]) {
            Some(DayPortion::Am) => Some(false),
            Some(DayPortion::Pm) => Some(true),
            _ => None,
        };
        if let (Some(tick), Some(pm)) = (time_tick_of(&tokens[i]), pm) {
            tokens[i].untag(TagKind::RepeaterTime);
            tokens[i].tag(Tag::Repeater(RepeaterKind::Time(tick.with_meridian(pm))));
            tokens.remove(i + 1);
        }
        i += 1;
    }

    // A portion somewhere in the phrase already narrows the day, so the
    // synthetic window would only fight it.
    let has_portion = tokens.iter().any(|t| t.has(TagKind::RepeaterDayPortion));
    match options.ambiguous_time_range {
        Some(range) if !has_portion => {
            let mut out: Vec<Token> = Vec::with_capacity(tokens.len() + 1);
            for i in 0..tokens.len() {
                let ambiguous = time_tick_of(&tokens[i]).is_some_and(|t| t.is_ambiguous());
                out.push(tokens[i].clone());
                if ambiguous {
                    let mut window = Token::new("plausible-hours");
                    window.tag(Tag::Repeater(RepeaterKind::DayPortion(DayPortion::Hours(
                        range,
                    ))));
                    out.push(window);
                }
            }
            out
        }
        Some(_) => tokens,
        None => {
            for token in tokens.iter_mut() {
                if let Some(tick) = time_tick_of(token) {
                    if tick.is_ambiguous() {
                        token.untag(TagKind::RepeaterTime);
                        token.tag(Tag::Repeater(RepeaterKind::Time(tick.disambiguated())));
                    }
                }
            }
            tokens
        }
    }
}

/// The anchor walk: pick the outermost repeater, aim it with the grabber,
/// then narrow through the remaining repeaters.
fn anchor(tokens: &[Token], options: &Options, now: NaiveDateTime) -> Option<Span> {
    let grabber = tokens
        .iter()
        .find_map(|t| t.grabber())
        .unwrap_or(Grabber::This);
    let mut reps = repeaters_of(tokens).into_iter();
    let head = reps.next()?;
    let rest: Vec<RepeaterKind> = reps.collect();

    let mut cursor = Cursor::new(head, now);
    let outer = match grabber {
        Grabber::Last => cursor.next(Pointer::Past)?,
        Grabber::Next => cursor.next(Pointer::Future)?,
        Grabber::This => {
            // With inner repeaters still to place, take the whole unit so
            // the narrowing can land anywhere inside it.
            if !rest.is_empty() && options.context != Context::Past {
                cursor.within()?
            } else {
                cursor.this(options.context)?
            }
        }
    };
    find_within(&rest, outer, context_pointer(options))
}

/// Place each remaining repeater inside the previous span. A repeater
/// whose occurrence falls outside kills the match.
fn find_within(reps: &[RepeaterKind], span: Span, pointer: Pointer) -> Option<Span> {
    let Some((head, rest)) = reps.split_first() else {
        return Some(span);
    };
    let seed = match pointer {
        Pointer::Future => span.begin(),
        Pointer::Past => span.end(),
    };
    let mut cursor = Cursor::new(head.clone(), seed);
    let inner = cursor.within()?;
    if span.covers(inner.begin()) || span.covers(inner.end()) {
        find_within(rest, inner, pointer)
    } else {
        None
    }
}

/// A day span, or a time found inside that day when time tokens follow.
fn day_or_time(
    day_start: NaiveDateTime,
    time_tokens: &[Token],
    options: &Options,
) -> Option<Span> {
    let outer = Span::new(day_start, day_start + Duration::days(1))?;
    if !time_tokens.iter().any(|t| t.has(TagKind::Repeater)) {
        return Some(outer);
    }
    let time_tokens = dealias_and_disambiguate(time_tokens, options);
    find_within(&repeaters_of(&time_tokens), outer, context_pointer(options))
}

/// Month-name date with the year unstated: the context decides the
/// nearest year containing the month and day, day-exact.
fn month_day_unknown_year(
    month: Month,
    day: u32,
    time_tokens: &[Token],
    options: &Options,
    now: NaiveDateTime,
) -> Option<Span> {
    let month = month.number_from_month();
    let year = nearest_year(month, day, options, now);
    let start = date_start(year, month, day)?;
    day_or_time(start, time_tokens, options)
}

fn rest(tokens: &[Token], from: usize) -> &[Token] {
    tokens.get(from..).unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Date handlers

fn day_name_date_with_zone(
    tokens: &[Token],
    options: &Options,
    now: NaiveDateTime,
) -> Option<Span> {
    // [day-name, month-name, day, time, zone, year]; the zone is accepted
    // but the result stays in the reference clock's calendar.
    if tokens.len() != 6 {
        return None;
    }
    let month = month_of(&tokens[1])?;
    let day = tokens[2].scalar_day()?;
    let year = make_year(
        tokens[5].scalar_year()?,
        now,
        options.ambiguous_year_future_bias,
    );
    let start = date_start(year, month.number_from_month(), day)?;
    day_or_time(start, &tokens[3..4], options)
}

fn month_name_day_year(tokens: &[Token], options: &Options, now: NaiveDateTime) -> Option<Span> {
    let month = month_of(tokens.first()?)?;
    let day = tokens.get(1)?.scalar_day()?;
    let year = make_year(
        tokens.get(2)?.scalar_year()?,
        now,
        options.ambiguous_year_future_bias,
    );
    let start = date_start(year, month.number_from_month(), day)?;
    day_or_time(start, rest(tokens, 3), options)
}

fn month_name_day(tokens: &[Token], options: &Options, now: NaiveDateTime) -> Option<Span> {
    let month = month_of(tokens.first()?)?;
    let day = tokens.get(1)?.scalar_day()?;
    month_day_unknown_year(month, day, rest(tokens, 2), options, now)
}

fn time_before_month_name_day(
    tokens: &[Token],
    options: &Options,
    now: NaiveDateTime,
) -> Option<Span> {
    let n = tokens.len();
    if n < 3 {
        return None;
    }
    let month = month_of(&tokens[n - 2])?;
    let day = tokens[n - 1].scalar_day()?;
    month_day_unknown_year(month, day, &tokens[..n - 2], options, now)
}

fn month_name_ordinal(tokens: &[Token], options: &Options, now: NaiveDateTime) -> Option<Span> {
    let month = month_of(tokens.first()?)?;
    let day = tokens.get(1)?.ordinal_day()?;
    month_day_unknown_year(month, day, rest(tokens, 2), options, now)
}

fn time_before_month_name_ordinal(
    tokens: &[Token],
    options: &Options,
    now: NaiveDateTime,
) -> Option<Span> {
    let n = tokens.len();
    if n < 3 {
        return None;
    }
    let month = month_of(&tokens[n - 2])?;
    let day = tokens[n - 1].ordinal_day()?;
    month_day_unknown_year(month, day, &tokens[..n - 2], options, now)
}

fn ordinal_month_name_year(
    tokens: &[Token],
    options: &Options,
    now: NaiveDateTime,
) -> Option<Span> {
    let day = tokens.first()?.ordinal_day()?;
    let month = month_of(tokens.get(1)?)?;
    let year = make_year(
        tokens.get(2)?.scalar_year()?,
        now,
        options.ambiguous_year_future_bias,
    );
    let start = date_start(year, month.number_from_month(), day)?;
    day_or_time(start, rest(tokens, 3), options)
}

fn ordinal_month_name(tokens: &[Token], options: &Options, now: NaiveDateTime) -> Option<Span> {
    let day = tokens.first()?.ordinal_day()?;
    let month = month_of(tokens.get(1)?)?;
    month_day_unknown_year(month, day, rest(tokens, 2), options, now)
}

fn year_month_name_ordinal(
    tokens: &[Token],
    options: &Options,
    now: NaiveDateTime,
) -> Option<Span> {
    let year = make_year(
        tokens.first()?.scalar_year()?,
        now,
        options.ambiguous_year_future_bias,
    );
    let month = month_of(tokens.get(1)?)?;
    let day = tokens.get(2)?.ordinal_day()?;
    let start = date_start(year, month.number_from_month(), day)?;
    day_or_time(start, rest(tokens, 3), options)
}

fn month_name_year(tokens: &[Token], options: &Options, now: NaiveDateTime) -> Option<Span> {
    let month = month_of(tokens.first()?)?;
    let year = make_year(
        tokens.get(1)?.scalar_year()?,
        now,
        options.ambiguous_year_future_bias,
    );
    let begin = date_start(year, month.number_from_month(), 1)?;
    Span::new(begin, repeaters::shift_months(begin, 1)?)
}

fn day_month_name_year(tokens: &[Token], options: &Options, now: NaiveDateTime) -> Option<Span> {
    let day = tokens.first()?.scalar_day()?;
    let month = month_of(tokens.get(1)?)?;
    let year = make_year(
        tokens.get(2)?.scalar_year()?,
        now,
        options.ambiguous_year_future_bias,
    );
    let start = date_start(year, month.number_from_month(), day)?;
    day_or_time(start, rest(tokens, 3), options)
}

fn day_month_name(tokens: &[Token], options: &Options, now: NaiveDateTime) -> Option<Span> {
    let day = tokens.first()?.scalar_day()?;
    let month = month_of(tokens.get(1)?)?;
    month_day_unknown_year(month, day, rest(tokens, 2), options, now)
}

fn year_month_day(tokens: &[Token], options: &Options, now: NaiveDateTime) -> Option<Span> {
    let year = make_year(
        tokens.first()?.scalar_year()?,
        now,
        options.ambiguous_year_future_bias,
    );
    let month = tokens.get(1)?.scalar_month()?;
    let day = tokens.get(2)?.scalar_day()?;
    let start = date_start(year, month, day)?;
    day_or_time(start, rest(tokens, 3), options)
}

fn month_year(tokens: &[Token], options: &Options, now: NaiveDateTime) -> Option<Span> {
    let month = tokens.first()?.scalar_month()?;
    let year = make_year(
        tokens.get(1)?.scalar_year()?,
        now,
        options.ambiguous_year_future_bias,
    );
    let begin = date_start(year, month, 1)?;
    Span::new(begin, repeaters::shift_months(begin, 1)?)
}

/// The year a month/day with no year lands in, per context: the nearest
/// one in that direction, day-exact.
fn nearest_year(month: u32, day: u32, options: &Options, now: NaiveDateTime) -> i32 {
    let mut year = now.year();
    match options.context {
        Context::Future => {
            if month < now.month() || (month == now.month() && day < now.day()) {
                year += 1;
            }
        }
        Context::Past => {
            if month > now.month() || (month == now.month() && day > now.day()) {
                year -= 1;
            }
        }
        Context::None => {}
    }
    year
}

fn month_day_year(tokens: &[Token], options: &Options, now: NaiveDateTime) -> Option<Span> {
    let month = tokens.first()?.scalar_month()?;
    let day = tokens.get(1)?.scalar_day()?;
    let year = make_year(
        tokens.get(2)?.scalar_year()?,
        now,
        options.ambiguous_year_future_bias,
    );
    let start = date_start(year, month, day)?;
    day_or_time(start, rest(tokens, 3), options)
}

fn month_day(tokens: &[Token], options: &Options, now: NaiveDateTime) -> Option<Span> {
    let month = tokens.first()?.scalar_month()?;
    let day = tokens.get(1)?.scalar_day()?;
    let year = nearest_year(month, day, options, now);
    let start = date_start(year, month, day)?;
    day_or_time(start, rest(tokens, 2), options)
}

fn day_month_year(tokens: &[Token], options: &Options, now: NaiveDateTime) -> Option<Span> {
    let day = tokens.first()?.scalar_day()?;
    let month = tokens.get(1)?.scalar_month()?;
    let year = make_year(
        tokens.get(2)?.scalar_year()?,
        now,
        options.ambiguous_year_future_bias,
    );
    let start = date_start(year, month, day)?;
    day_or_time(start, rest(tokens, 3), options)
}

fn day_month(tokens: &[Token], options: &Options, now: NaiveDateTime) -> Option<Span> {
    let day = tokens.first()?.scalar_day()?;
    let month = tokens.get(1)?.scalar_month()?;
    let year = nearest_year(month, day, options, now);
    let start = date_start(year, month, day)?;
    day_or_time(start, rest(tokens, 2), options)
}

// ---------------------------------------------------------------------------
// Anchor handlers

fn anchor_reordered(tokens: &[Token], options: &Options, now: NaiveDateTime) -> Option<Span> {
    // [repeater, grabber, repeater] reads as grabber first.
    if tokens.len() != 3 {
        return None;
    }
    let reordered = vec![tokens[1].clone(), tokens[0].clone(), tokens[2].clone()];
    let reordered = dealias_and_disambiguate(&reordered, options);
    anchor(&reordered, options, now)
}

// ---------------------------------------------------------------------------
// Arrow handlers

fn scalar_repeater_pointer(tokens: &[Token], anchor_span: Span) -> Option<Span> {
    let amount = i64::from(tokens.first()?.scalar()?);
    let kind = tokens.get(1)?.repeater()?.clone();
    let pointer = tokens.get(2)?.pointer()?;
    repeaters::offset(&kind, anchor_span, amount, pointer)
}

fn pointer_scalar_repeater(tokens: &[Token], now: NaiveDateTime) -> Option<Span> {
    if tokens.len() != 3 {
        return None;
    }
    let reordered = vec![tokens[1].clone(), tokens[2].clone(), tokens[0].clone()];
    scalar_repeater_pointer(&reordered, Span::instant(now))
}

fn scalar_repeater_pointer_anchor(
    tokens: &[Token],
    options: &Options,
    now: NaiveDateTime,
) -> Option<Span> {
    let anchor_span = anchor(rest(tokens, 3), options, now)?;
    scalar_repeater_pointer(tokens, anchor_span)
}

// ---------------------------------------------------------------------------
// Narrow handlers

/// Walk to the `ordinal`th occurrence of `inner` inside `outer`.
fn nth_in(ordinal: u32, inner: RepeaterKind, outer: Span) -> Option<Span> {
    if ordinal == 0 {
        return None;
    }
    let mut cursor = Cursor::new(inner, outer.begin() - Duration::seconds(1));
    let mut found = None;
    for _ in 0..ordinal {
        let span = cursor.next(Pointer::Future)?;
        if span.begin() > outer.end() {
            return None;
        }
        found = Some(span);
    }
    found
}

fn nth_repeater_in_outer(tokens: &[Token], now: NaiveDateTime) -> Option<Span> {
    // Unfiltered stream: [ordinal, repeater, "in", repeater].
    let ordinal = tokens.first()?.ordinal()?;
    let inner = tokens.get(1)?.repeater()?.clone();
    let mut outer = Cursor::new(tokens.get(3)?.repeater()?.clone(), now);
    let outer_span = outer.within()?;
    nth_in(ordinal, inner, outer_span)
}

fn nth_repeater_after_grab(
    tokens: &[Token],
    options: &Options,
    now: NaiveDateTime,
) -> Option<Span> {
    // [ordinal, repeater, grabber, repeater]: anchor the tail, then walk.
    let ordinal = tokens.first()?.ordinal()?;
    let inner = tokens.get(1)?.repeater()?.clone();
    let outer_span = anchor(rest(tokens, 2), options, now)?;
    nth_in(ordinal, inner, outer_span)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn reference() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2006, 8, 16)
            .unwrap()
            .and_hms_opt(14, 0, 0)
            .unwrap()
    }

    #[test]
    fn make_year_expands_against_the_pivot() {
        let now = reference();
        assert_eq!(make_year(2011, now, 50), 2011);
        assert_eq!(make_year(11, now, 50), 2011);
        assert_eq!(make_year(55, now, 50), 2055);
        // The exact pivot maps to the previous century.
        assert_eq!(make_year(56, now, 50), 1956);
        assert_eq!(make_year(99, now, 50), 1999);
    }

    #[test]
    fn make_year_threshold_tracks_the_bias() {
        let now = reference();
        // Threshold is (reference_year mod 100) + bias = 16 here.
        assert_eq!(make_year(15, now, 10), 2015);
        assert_eq!(make_year(16, now, 10), 1916);
        assert_eq!(make_year(50, now, 10), 1950);
        // A bias past 100 pulls every two-digit year into this century.
        assert_eq!(make_year(99, now, 100), 2099);
        assert_eq!(make_year(10, now, 100), 2010);
    }

    #[test]
    fn make_year_with_zero_bias_pivots_on_the_reference_remainder() {
        let now = reference();
        // Threshold collapses to the remainder, 6: only years below it
        // stay in the reference century.
        assert_eq!(make_year(5, now, 0), 2005);
        assert_eq!(make_year(6, now, 0), 1906);
        assert_eq!(make_year(99, now, 0), 1999);
    }

    #[test]
    fn nearest_year_is_day_exact() {
        let options = Options::default();
        // Aug 15 has passed on Aug 16; Aug 17 has not.
        assert_eq!(nearest_year(8, 15, &options, reference()), 2007);
        assert_eq!(nearest_year(8, 17, &options, reference()), 2006);
        let past = Options {
            context: Context::Past,
            ..Options::default()
        };
        assert_eq!(nearest_year(8, 17, &past, reference()), 2005);
        assert_eq!(nearest_year(8, 15, &past, reference()), 2006);
    }

    #[test]
    fn nth_in_rejects_out_of_range_ordinals() {
        let outer = Span::new(
            date_start(2006, 11, 1).unwrap(),
            date_start(2006, 12, 1).unwrap(),
        )
        .unwrap();
        // November 2006 has five Wednesdays, not six.
        assert!(nth_in(6, RepeaterKind::DayName(chrono::Weekday::Wed), outer).is_none());
        let third = nth_in(3, RepeaterKind::DayName(chrono::Weekday::Wed), outer).unwrap();
        assert_eq!(third.begin().date(), NaiveDate::from_ymd_opt(2006, 11, 15).unwrap());
    }
}
