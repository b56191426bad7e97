//! Scanner for calendar units, named days and months, day portions, and
//! clock forms.

use std::sync::OnceLock;

use chrono::{Month, Weekday};
use regex::Regex;

use super::Tagger;
use crate::repeaters::{DayPortion, RepeaterKind, Season, Tick};
use crate::token::Tag;

pub struct RepeaterTagger;

/// `14:00`, `4:30:20`, `0530`, `7`, `5pm`
fn clock() -> &'static Regex {
    static CLOCK: OnceLock<Regex> = OnceLock::new();
    CLOCK.get_or_init(|| {
        Regex::new(r"^(\d{1,4})(?::(\d{2}))?(?::(\d{2}))?(am|pm)?$").unwrap()
    })
}

fn unit_word(word: &str) -> Option<RepeaterKind> {
    let kind = match word {
        "year" | "years" => RepeaterKind::Year,
        "season" | "seasons" => RepeaterKind::Season,
        "month" | "months" => RepeaterKind::Month,
        "fortnight" | "fortnights" => RepeaterKind::Fortnight,
        "week" | "weeks" => RepeaterKind::Week,
        "weekend" | "weekends" => RepeaterKind::Weekend,
        "weekday" | "weekdays" => RepeaterKind::Weekday,
        "day" | "days" => RepeaterKind::Day,
        "hour" | "hours" => RepeaterKind::Hour,
        "minute" | "minutes" => RepeaterKind::Minute,
        "second" | "seconds" => RepeaterKind::Second,
        _ => return None,
    };
    Some(kind)
}

fn season_name(word: &str) -> Option<Season> {
    let season = match word {
        "spring" => Season::Spring,
        "summer" => Season::Summer,
        "autumn" | "fall" => Season::Autumn,
        "winter" => Season::Winter,
        _ => return None,
    };
    Some(season)
}

fn day_name(word: &str) -> Option<Weekday> {
    let day = match word {
        "monday" | "mon" => Weekday::Mon,
        "tuesday" | "tue" | "tues" => Weekday::Tue,
        "wednesday" | "wed" => Weekday::Wed,
        "thursday" | "thu" | "thur" | "thurs" => Weekday::Thu,
        "friday" | "fri" => Weekday::Fri,
        "saturday" | "sat" => Weekday::Sat,
        "sunday" | "sun" => Weekday::Sun,
        _ => return None,
    };
    Some(day)
}

fn month_name(word: &str) -> Option<Month> {
    let month = match word {
        "january" | "jan" => Month::January,
        "february" | "feb" => Month::February,
        "march" | "mar" => Month::March,
        "april" | "apr" => Month::April,
        "may" => Month::May,
        "june" | "jun" => Month::June,
        "july" | "jul" => Month::July,
        "august" | "aug" => Month::August,
        "september" | "sept" | "sep" => Month::September,
        "october" | "oct" => Month::October,
        "november" | "nov" => Month::November,
        "december" | "dec" => Month::December,
        _ => return None,
    };
    Some(month)
}

fn day_portion(word: &str) -> Option<DayPortion> {
    let portion = match word {
        "am" => DayPortion::Am,
        "pm" => DayPortion::Pm,
        "morning" => DayPortion::Morning,
        "afternoon" => DayPortion::Afternoon,
        "evening" => DayPortion::Evening,
        "night" | "nite" => DayPortion::Night,
        _ => return None,
    };
    Some(portion)
}

fn clock_tick(word: &str) -> Option<Tick> {
    let caps = clock().captures(word)?;
    let digits = caps.get(1)?.as_str();

    // Colonless 3-4 digit forms pack hour and minute together.
    let (hour, packed_minute): (u32, Option<u32>) = match digits.len() {
        1 | 2 => (digits.parse().ok()?, None),
        3 | 4 => {
            let split = digits.len() - 2;
            (digits[..split].parse().ok()?, Some(digits[split..].parse().ok()?))
        }
        _ => return None,
    };
    let minute = match (packed_minute, caps.get(2)) {
        (Some(_), Some(_)) => return None, // "0530:30" is not a time
        (Some(m), None) => m,
        (None, Some(m)) => m.as_str().parse().ok()?,
        (None, None) => 0,
    };
    let second: u32 = match caps.get(3) {
        Some(s) => s.as_str().parse().ok()?,
        None => 0,
    };

    if minute > 59 || second > 59 {
        return None;
    }
    // 24:00 is the end-of-day sentinel; anything past it is not a time.
    if hour > 24 || (hour == 24 && (minute > 0 || second > 0)) {
        return None;
    }

    let total = hour * 3600 + minute * 60 + second;
    match caps.get(4) {
        Some(meridian) => Some(Tick::ambiguous(total).with_meridian(meridian.as_str() == "pm")),
        None if (1..=12).contains(&hour) => Some(Tick::ambiguous(total)),
        None => Some(Tick::exact(total)),
    }
}

impl Tagger for RepeaterTagger {
    fn scan(&self, word: &str) -> Vec<Tag> {
        // "oclock" is recognized but adds no reading of its own; the bare
        // hour before it already carries the time tag.
        if let Some(kind) = unit_word(word) {
            return vec![Tag::Repeater(kind)];
        }
        if let Some(season) = season_name(word) {
            return vec![Tag::Repeater(RepeaterKind::SeasonName(season))];
        }
        if let Some(day) = day_name(word) {
            return vec![Tag::Repeater(RepeaterKind::DayName(day))];
        }
        if let Some(month) = month_name(word) {
            return vec![Tag::Repeater(RepeaterKind::MonthName(month))];
        }
        if let Some(portion) = day_portion(word) {
            return vec![Tag::Repeater(RepeaterKind::DayPortion(portion))];
        }
        if let Some(tick) = clock_tick(word) {
            return vec![Tag::Repeater(RepeaterKind::Time(tick))];
        }
        vec![]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick_of(word: &str) -> Tick {
        match RepeaterTagger.scan(word).first() {
            Some(Tag::Repeater(RepeaterKind::Time(tick))) => *tick,
            other => panic!("expected a time tag for {word:?}, got {other:?}"),
        }
    }

    #[test]
    fn unit_words_and_plurals() {
        assert_eq!(
            RepeaterTagger.scan("weeks"),
            vec![Tag::Repeater(RepeaterKind::Week)]
        );
        assert_eq!(
            RepeaterTagger.scan("second"),
            vec![Tag::Repeater(RepeaterKind::Second)]
        );
    }

    #[test]
    fn day_and_month_abbreviations() {
        assert_eq!(
            RepeaterTagger.scan("thurs"),
            vec![Tag::Repeater(RepeaterKind::DayName(Weekday::Thu))]
        );
        assert_eq!(
            RepeaterTagger.scan("sept"),
            vec![Tag::Repeater(RepeaterKind::MonthName(Month::September))]
        );
    }

    #[test]
    fn clock_forms() {
        assert_eq!(tick_of("14:00"), Tick::exact(14 * 3600));
        assert_eq!(tick_of("4:00"), Tick::ambiguous(4 * 3600));
        assert_eq!(tick_of("4"), Tick::ambiguous(4 * 3600));
        assert_eq!(tick_of("0530"), Tick::ambiguous(5 * 3600 + 30 * 60));
        assert_eq!(tick_of("14:30:15"), Tick::exact(14 * 3600 + 30 * 60 + 15));
        assert_eq!(tick_of("24:00"), Tick::exact(24 * 3600));
    }

    #[test]
    fn in_token_meridians_resolve_immediately() {
        assert_eq!(tick_of("5pm"), Tick::exact(17 * 3600));
        assert_eq!(tick_of("12am"), Tick::exact(0));
    }

    #[test]
    fn invalid_clock_forms_are_rejected() {
        assert!(RepeaterTagger.scan("25:00").is_empty());
        assert!(RepeaterTagger.scan("24:30").is_empty());
        assert!(RepeaterTagger.scan("4:75").is_empty());
        assert!(RepeaterTagger.scan("oclock").is_empty());
    }

    #[test]
    fn four_bare_digits_read_as_packed_time() {
        assert_eq!(tick_of("2011"), Tick::exact(20 * 3600 + 11 * 60));
    }
}
