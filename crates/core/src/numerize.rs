//! English number words to digits.
//!
//! Rewrites cardinal and ordinal words into digit form ahead of
//! tokenization:
//! - `three` -> `3`, `twenty three` / `twenty-three` -> `23`
//! - `first` -> `1st`, `twenty first` -> `21st`
//! - `two hundred` -> `200`, `a thousand` -> `1000`
//! - `one hundred and seventy five` -> `175`
//!
//! Ordinal suffixes are preserved so the ordinal tagger still sees them.
//! Input is expected to be lowercased already (the normalizer does that
//! before calling in here). The word "second" is deliberately absent from
//! the ordinal table; the normalizer rewrites the unambiguous ordinal uses
//! of it before numerizing.

use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Interim marker for digits produced from words, so later passes can
/// tell them apart from digits that were already in the input.
const MARKER: &str = "<num>";

const DIRECT_NUMS: &[(&str, u64)] = &[
    ("eleven", 11),
    ("twelve", 12),
    ("thirteen", 13),
    ("fourteen", 14),
    ("fifteen", 15),
    ("sixteen", 16),
    ("seventeen", 17),
    ("eighteen", 18),
    ("nineteen", 19),
    ("ninteen", 19), // common misspelling
    ("zero", 0),
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
];

/// Ordinal words with their digit replacements, suffix included.
const ORDINALS: &[(&str, &str)] = &[
    ("first", "1st"),
    ("third", "3rd"),
    ("fourth", "4th"),
    ("fifth", "5th"),
    ("sixth", "6th"),
    ("seventh", "7th"),
    ("eighth", "8th"),
    ("ninth", "9th"),
    ("tenth", "10th"),
    ("eleventh", "11th"),
    ("twelfth", "12th"),
    ("thirteenth", "13th"),
    ("fourteenth", "14th"),
    ("fifteenth", "15th"),
    ("sixteenth", "16th"),
    ("seventeenth", "17th"),
    ("eighteenth", "18th"),
    ("nineteenth", "19th"),
    ("twentieth", "20th"),
    ("thirtieth", "30th"),
];

const TEN_PREFIXES: &[(&str, u64)] = &[
    ("twenty", 20),
    ("thirty", 30),
    ("forty", 40),
    ("fourty", 40), // common misspelling
    ("fifty", 50),
    ("sixty", 60),
    ("seventy", 70),
    ("eighty", 80),
    ("ninety", 90),
];

const BIG_PREFIXES: &[(&str, u64)] = &[
    ("hundred", 100),
    ("thousand", 1_000),
    ("million", 1_000_000),
    ("billion", 1_000_000_000),
    ("trillion", 1_000_000_000_000),
];

struct NumerizerPatterns {
    /// `twenty-three` -> `twenty three`
    hyphenated: Regex,
    direct: Regex,
    ordinal: Regex,
    ten_prefix: Regex,
    /// `<num>20 <num>3` -> `<num>23`, suffix-aware for `<num>1st`
    ten_unit: Regex,
    /// `a hundred` -> `<num>1 hundred`
    a_big: Regex,
    big: Regex,
    /// `<num>100 and <num>75` -> `<num>175`
    andition: Regex,
}

fn patterns() -> &'static NumerizerPatterns {
    static PATTERNS: OnceLock<NumerizerPatterns> = OnceLock::new();
    PATTERNS.get_or_init(NumerizerPatterns::new)
}

/// Alternation of words, longest first so e.g. `sixteen` beats `six`.
fn alternation(words: impl Iterator<Item = &'static str>) -> String {
    let mut words: Vec<&str> = words.collect();
    words.sort_by_key(|w| std::cmp::Reverse(w.len()));
    words.join("|")
}

impl NumerizerPatterns {
    fn new() -> Self {
        let direct = alternation(DIRECT_NUMS.iter().map(|(w, _)| *w));
        let ordinal = alternation(ORDINALS.iter().map(|(w, _)| *w));
        let tens = alternation(TEN_PREFIXES.iter().map(|(w, _)| *w));
        let bigs = alternation(BIG_PREFIXES.iter().map(|(w, _)| *w));
        Self {
            hyphenated: Regex::new(r"([a-z])-([a-z])").unwrap(),
            direct: Regex::new(&format!(r"\b({direct})\b")).unwrap(),
            ordinal: Regex::new(&format!(r"\b({ordinal})\b")).unwrap(),
            ten_prefix: Regex::new(&format!(r"\b({tens})\b")).unwrap(),
            ten_unit: Regex::new(&format!(
                r"{MARKER}([2-9])0\s+{MARKER}([0-9])((?:st|nd|rd|th)?)([^0-9]|$)"
            ))
            .unwrap(),
            a_big: Regex::new(&format!(r"\ban? ({bigs})\b")).unwrap(),
            big: Regex::new(&format!(r"{MARKER}([0-9]+)\s*({bigs})\b")).unwrap(),
            andition: Regex::new(&format!(
                r"{MARKER}([0-9]+)( and |\s+){MARKER}([0-9]+)\b"
            ))
            .unwrap(),
        }
    }
}

fn table_value(table: &[(&str, u64)], word: &str) -> u64 {
    table
        .iter()
        .find(|(w, _)| *w == word)
        .map(|(_, v)| *v)
        .unwrap_or(0)
}

fn ordinal_digits(word: &str) -> &'static str {
    ORDINALS
        .iter()
        .find(|(w, _)| *w == word)
        .map(|(_, d)| *d)
        .unwrap_or("")
}

/// Rewrite English number words in `text` to digits.
#[must_use]
pub fn numerize(text: &str) -> String {
    let p = patterns();

    let text = p.hyphenated.replace_all(text, "$1 $2");
    let text = p.direct.replace_all(&text, |c: &Captures| {
        format!("{MARKER}{}", table_value(DIRECT_NUMS, &c[1]))
    });
    let text = p.ordinal.replace_all(&text, |c: &Captures| {
        format!("{MARKER}{}", ordinal_digits(&c[1]))
    });
    let text = p.ten_prefix.replace_all(&text, |c: &Captures| {
        format!("{MARKER}{}", table_value(TEN_PREFIXES, &c[1]))
    });
    let text = p.ten_unit.replace_all(&text, |c: &Captures| {
        format!("{MARKER}{}{}{}{}", &c[1], &c[2], &c[3], &c[4])
    });
    let text = p.a_big.replace_all(&text, |c: &Captures| {
        format!("{MARKER}1 {}", &c[1])
    });

    let mut text = text.into_owned();
    // "two hundred thousand" needs one multiplication feeding the next.
    for _ in 0..BIG_PREFIXES.len() {
        let replaced = p.big.replace_all(&text, |c: &Captures| {
            let n: u64 = c[1].parse().unwrap_or(0);
            format!("{MARKER}{}", n.saturating_mul(table_value(BIG_PREFIXES, &c[2])))
        });
        if replaced == text {
            break;
        }
        text = replaced.into_owned();
    }
    andite(&mut text, &p.andition);

    text.replace(MARKER, "")
}

/// Merge marked digit groups that read as a sum: joined by "and", or a
/// larger magnitude followed by a smaller one ("100 75" -> 175).
fn andite(text: &mut String, re: &Regex) {
    loop {
        let mut hit = None;
        for c in re.captures_iter(text) {
            let (Some(whole), Some(a), Some(sep), Some(b)) =
                (c.get(0), c.get(1), c.get(2), c.get(3))
            else {
                continue;
            };
            if sep.as_str().contains("and") || a.as_str().len() > b.as_str().len() {
                let sum = a.as_str().parse::<u64>().unwrap_or(0)
                    + b.as_str().parse::<u64>().unwrap_or(0);
                hit = Some((whole.range(), format!("{MARKER}{sum}")));
                break;
            }
        }
        match hit {
            Some((range, replacement)) => text.replace_range(range, &replacement),
            None => return,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_words() {
        assert_eq!(numerize("three weeks"), "3 weeks");
        assert_eq!(numerize("twelve days"), "12 days");
        assert_eq!(numerize("fourteen hours"), "14 hours");
    }

    #[test]
    fn tens_and_units_combine() {
        assert_eq!(numerize("twenty three days"), "23 days");
        assert_eq!(numerize("twenty-three days"), "23 days");
        assert_eq!(numerize("ninety"), "90");
    }

    #[test]
    fn ordinals_keep_their_suffix() {
        assert_eq!(numerize("third wednesday"), "3rd wednesday");
        assert_eq!(numerize("twenty first"), "21st");
        assert_eq!(numerize("thirtieth"), "30th");
    }

    #[test]
    fn big_prefixes_multiply() {
        assert_eq!(numerize("two hundred"), "200");
        assert_eq!(numerize("a thousand years"), "1000 years");
        assert_eq!(numerize("two hundred thousand"), "200000");
    }

    #[test]
    fn andition_sums_magnitudes() {
        assert_eq!(numerize("one hundred and seventy five"), "175");
        assert_eq!(numerize("one hundred seventy five"), "175");
    }

    #[test]
    fn adjacent_same_magnitude_stays_apart() {
        // "twenty fifteen" is two numbers, not 215 and not 35.
        assert_eq!(numerize("twenty fifteen"), "20 15");
    }

    #[test]
    fn digits_pass_through() {
        assert_eq!(numerize("3 weeks from now"), "3 weeks from now");
        assert_eq!(numerize("2006-08-16"), "2006-08-16");
    }

    #[test]
    fn second_is_left_alone() {
        assert_eq!(numerize("this second"), "this second");
    }
}
