//! Canonicalizing text rewrites.
//!
//! Turns raw input into the canonical lowercased form the taggers expect:
//! - `Tomorrow at 7pm` -> `next day at 7 pm`
//! - `three weeks ago` -> `3 weeks past`
//! - `03/04/2011` -> `03 / 04 / 2011`
//! - `noon` -> `12:00`, `midnight` -> `24:00`
//!
//! The rewrites are an ordered cascade; later rules rely on earlier ones
//! (the negative-offset rewrite must run before slashes and dashes are
//! spaced out, word substitutions before meridian splitting). The result
//! is stable under a second pass, which the tests pin.

use std::sync::OnceLock;

use regex::Regex;

use crate::numerize;

struct NormalizerPatterns {
    /// Quotes and periods vanish; commas stay, they are separators.
    strip: Regex,
    /// The ordinal reading of the word "second", rewritten before
    /// numerization so the time unit survives it.
    second_ordinal: Regex,
    /// ` -0500` -> ` tzminus0500`, ahead of dash spacing.
    tz_minus: Regex,
    separators: Regex,
    leading_zero: Regex,
    word_subs: Vec<(Regex, &'static str)>,
    /// `5p` / `5:30p` -> `5pm` / `5:30pm`
    compact_meridian: Regex,
    /// `7pm` -> `7 pm`, `6oclock` -> `6 oclock`
    digit_meridian: Regex,
    whitespace: Regex,
}

fn patterns() -> &'static NormalizerPatterns {
    static PATTERNS: OnceLock<NormalizerPatterns> = OnceLock::new();
    PATTERNS.get_or_init(NormalizerPatterns::new)
}

impl NormalizerPatterns {
    fn new() -> Self {
        let subs: &[(&str, &str)] = &[
            (r"\btoday\b", "this day"),
            (r"\btomm?orr?ow\b", "next day"),
            (r"\byesterday\b", "last day"),
            (r"\bnoon\b", "12:00"),
            (r"\bmidnight\b", "24:00"),
            (r"\bbefore now\b", "past"),
            (r"\bnow\b", "this second"),
            (r"\b(?:ago|before)\b", "past"),
            (r"\bthis past\b", "last"),
            (r"\bthis last\b", "last"),
            (r"\b(?:in|during) the morning\b", "morning"),
            (r"\b(?:in the|during the|at) (afternoon|evening|night)\b", "$1"),
            (r"\btonight\b", "this night"),
            (r"\b(?:hence|after|from)\b", "future"),
        ];
        Self {
            strip: Regex::new(r#"['".]"#).unwrap(),
            second_ordinal: Regex::new(r"\bsecond (of|day|month|hour|minute|second)\b").unwrap(),
            tz_minus: Regex::new(r"(\s)-(\d{4})\b").unwrap(),
            separators: Regex::new(r"([/\-,@])").unwrap(),
            leading_zero: Regex::new(r"\b0(\d:\d{2}\s*[ap]m?)\b").unwrap(),
            word_subs: subs
                .iter()
                .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), *replacement))
                .collect(),
            compact_meridian: Regex::new(r"\b(\d{1,4})(:\d{2})?([ap])\b").unwrap(),
            digit_meridian: Regex::new(r"([0-9])(am|pm|oclock)\b").unwrap(),
            whitespace: Regex::new(r"\s+").unwrap(),
        }
    }
}

/// Rewrite `text` into the canonical form the tokenizer splits.
#[must_use]
pub fn normalize(text: &str) -> String {
    let p = patterns();

    let text = text.to_lowercase();
    let text = p.strip.replace_all(&text, "");
    let text = p.second_ordinal.replace_all(&text, "2nd $1");
    let text = numerize::numerize(&text);
    let text = p.tz_minus.replace_all(&text, "${1}tzminus$2");
    let text = p.separators.replace_all(&text, " $1 ");
    let mut text = p.leading_zero.replace_all(&text, "$1").into_owned();
    for (pattern, replacement) in &p.word_subs {
        text = pattern.replace_all(&text, *replacement).into_owned();
    }
    let text = p.compact_meridian.replace_all(&text, "$1${2}${3}m");
    let text = p.digit_meridian.replace_all(&text, "$1 $2");
    p.whitespace.replace_all(&text, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_punctuation() {
        assert_eq!(normalize("Tomorrow"), "next day");
        assert_eq!(normalize("5 p.m."), "5 pm");
    }

    #[test]
    fn relative_day_words() {
        assert_eq!(normalize("today"), "this day");
        assert_eq!(normalize("tommorrow"), "next day");
        assert_eq!(normalize("tomorow"), "next day");
        assert_eq!(normalize("yesterday at 4:00"), "last day at 4:00");
    }

    #[test]
    fn now_becomes_this_second() {
        assert_eq!(normalize("now"), "this second");
        assert_eq!(normalize("3 weeks from now"), "3 weeks future this second");
    }

    #[test]
    fn directional_words() {
        assert_eq!(normalize("three weeks ago"), "3 weeks past");
        assert_eq!(normalize("2 days before now"), "2 days past");
        assert_eq!(normalize("2 months hence"), "2 months future");
        assert_eq!(normalize("this past monday"), "last monday");
    }

    #[test]
    fn clock_idioms() {
        assert_eq!(normalize("noon"), "12:00");
        assert_eq!(normalize("midnight"), "24:00");
        assert_eq!(normalize("6oclock"), "6 oclock");
        assert_eq!(normalize("5p"), "5 pm");
        assert_eq!(normalize("5:30a"), "5:30 am");
        assert_eq!(normalize("07:30pm"), "7:30 pm");
    }

    #[test]
    fn day_portion_phrases() {
        assert_eq!(normalize("5:00 in the morning"), "5:00 morning");
        assert_eq!(normalize("at night"), "night");
        assert_eq!(normalize("tonight"), "this night");
        assert_eq!(normalize("7 in the evening"), "7 evening");
    }

    #[test]
    fn spaces_out_date_separators() {
        assert_eq!(normalize("03/04/2011"), "03 / 04 / 2011");
        assert_eq!(normalize("2006-08-16"), "2006 - 08 - 16");
        assert_eq!(normalize("jan 5, 2011"), "jan 5 , 2011");
    }

    #[test]
    fn negative_offset_is_not_a_dash() {
        assert_eq!(normalize("16:00 -0500"), "16:00 tzminus0500");
    }

    #[test]
    fn the_ordinal_second_is_disambiguated() {
        assert_eq!(normalize("second day of march"), "2nd day of march");
        assert_eq!(normalize("second of may"), "2nd of may");
        // The time unit is untouched.
        assert_eq!(normalize("this second"), "this second");
    }

    #[test]
    fn number_words_are_numerized() {
        assert_eq!(normalize("third wednesday in november"), "3rd wednesday in november");
        assert_eq!(normalize("twenty third of june"), "23rd of june");
    }

    #[test]
    fn normalization_is_idempotent() {
        for input in [
            "Tomorrow at 7pm",
            "03/04/2011",
            "three weeks from now",
            "yesterday at 4:00",
            "jan 5, 2011 at noon",
            "midnight on 2nd of may",
        ] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {input:?}");
        }
    }
}
