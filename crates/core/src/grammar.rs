//! The pattern catalogue and matcher.
//!
//! Patterns are sequences of atoms matched against the tagged token
//! stream. Lists are tried in a fixed order (dates, then numeric endian
//! dates, then anchors, arrows, narrows); within a list declaration order
//! decides, and the first pattern that consumes every token wins. The
//! catalogue is rebuilt for each parse so the endian precedence option is
//! always honored.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::handlers::{self, HandlerId};
use crate::options::{Endian, Options};
use crate::span::Span;
use crate::token::{TagKind, Token};

/// A named pattern list another pattern can delegate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubGrammar {
    Time,
    Anchor,
}

/// One element of a pattern.
#[derive(Debug, Clone, Copy)]
enum Atom {
    /// A token bearing a tag of this kind.
    Tag(TagKind),
    /// Zero or one such token.
    OptTag(TagKind),
    /// The rest of the tokens must match the named list.
    Sub(SubGrammar),
    /// Like `Sub`, but also satisfied by no tokens at all.
    OptSub(SubGrammar),
}

struct Pattern {
    atoms: Vec<Atom>,
    handler: Option<HandlerId>,
}

impl Pattern {
    fn new(atoms: Vec<Atom>, handler: HandlerId) -> Self {
        Self {
            atoms,
            handler: Some(handler),
        }
    }

    fn sub_only(atoms: Vec<Atom>) -> Self {
        Self {
            atoms,
            handler: None,
        }
    }
}

struct Definitions {
    time: Vec<Pattern>,
    date: Vec<Pattern>,
    endian: Vec<Pattern>,
    anchor: Vec<Pattern>,
    arrow: Vec<Pattern>,
    narrow: Vec<Pattern>,
}

impl Definitions {
    fn sub(&self, sub: SubGrammar) -> &[Pattern] {
        match sub {
            SubGrammar::Time => &self.time,
            SubGrammar::Anchor => &self.anchor,
        }
    }
}

fn definitions(options: &Options) -> Definitions {
    use Atom::{OptSub, OptTag, Sub, Tag};
    use TagKind::*;

    let time = vec![Pattern::sub_only(vec![
        Tag(RepeaterTime),
        OptTag(RepeaterDayPortion),
    ])];

    let date = vec![
        // "mon apr 02 17:00:00 pdt 2007"
        Pattern::new(
            vec![
                Tag(RepeaterDayName),
                Tag(RepeaterMonthName),
                Tag(ScalarDay),
                Tag(RepeaterTime),
                OptTag(SeparatorSlashOrDash),
                Tag(TimeZone),
                Tag(ScalarYear),
            ],
            HandlerId::DayNameDateWithZone,
        ),
        // "january 5 2011 [at 7:00]"
        Pattern::new(
            vec![
                Tag(RepeaterMonthName),
                Tag(ScalarDay),
                Tag(ScalarYear),
                OptTag(SeparatorAt),
                OptSub(SubGrammar::Time),
            ],
            HandlerId::MonthNameDayYear,
        ),
        // "january 5 [at 7:00]"
        Pattern::new(
            vec![
                Tag(RepeaterMonthName),
                Tag(ScalarDay),
                OptTag(SeparatorAt),
                OptSub(SubGrammar::Time),
            ],
            HandlerId::MonthNameDay,
        ),
        // "17:00 [on] january 5"
        Pattern::new(
            vec![
                Tag(RepeaterTime),
                OptTag(RepeaterDayPortion),
                OptTag(SeparatorOn),
                Tag(RepeaterMonthName),
                Tag(ScalarDay),
            ],
            HandlerId::TimeBeforeMonthNameDay,
        ),
        // "january 5th [at 7:00]"
        Pattern::new(
            vec![
                Tag(RepeaterMonthName),
                Tag(OrdinalDay),
                OptTag(SeparatorAt),
                OptSub(SubGrammar::Time),
            ],
            HandlerId::MonthNameOrdinal,
        ),
        // "5th january 2011 [at 7:00]"
        Pattern::new(
            vec![
                Tag(OrdinalDay),
                Tag(RepeaterMonthName),
                Tag(ScalarYear),
                OptTag(SeparatorAt),
                OptSub(SubGrammar::Time),
            ],
            HandlerId::OrdinalMonthNameYear,
        ),
        // "22nd of june [at 5pm]"
        Pattern::new(
            vec![
                Tag(OrdinalDay),
                Tag(RepeaterMonthName),
                OptTag(SeparatorAt),
                OptSub(SubGrammar::Time),
            ],
            HandlerId::OrdinalMonthName,
        ),
        // "2011 january 5th"
        Pattern::new(
            vec![Tag(ScalarYear), Tag(RepeaterMonthName), Tag(OrdinalDay)],
            HandlerId::YearMonthNameOrdinal,
        ),
        // "17:00 [on] january 5th"
        Pattern::new(
            vec![
                Tag(RepeaterTime),
                OptTag(RepeaterDayPortion),
                OptTag(SeparatorOn),
                Tag(RepeaterMonthName),
                Tag(OrdinalDay),
            ],
            HandlerId::TimeBeforeMonthNameOrdinal,
        ),
        // "january 2011"
        Pattern::new(
            vec![Tag(RepeaterMonthName), Tag(ScalarYear)],
            HandlerId::MonthNameYear,
        ),
        // "5 january 2011 [at 7:00]"
        Pattern::new(
            vec![
                Tag(ScalarDay),
                Tag(RepeaterMonthName),
                Tag(ScalarYear),
                OptTag(SeparatorAt),
                OptSub(SubGrammar::Time),
            ],
            HandlerId::DayMonthNameYear,
        ),
        // "5 january [at 7:00]"
        Pattern::new(
            vec![
                Tag(ScalarDay),
                Tag(RepeaterMonthName),
                OptTag(SeparatorAt),
                OptSub(SubGrammar::Time),
            ],
            HandlerId::DayMonthName,
        ),
        // "2011-08-16 [at 14:00]"
        Pattern::new(
            vec![
                Tag(ScalarYear),
                Tag(SeparatorSlashOrDash),
                Tag(ScalarMonth),
                Tag(SeparatorSlashOrDash),
                Tag(ScalarDay),
                OptTag(SeparatorAt),
                OptSub(SubGrammar::Time),
            ],
            HandlerId::YearMonthDay,
        ),
        // "8/2011"
        Pattern::new(
            vec![Tag(ScalarMonth), Tag(SeparatorSlashOrDash), Tag(ScalarYear)],
            HandlerId::MonthYear,
        ),
    ];

    let mut endian = Vec::new();
    for precedence in &options.endian_precedence {
        match precedence {
            Endian::Middle => {
                endian.push(Pattern::new(
                    vec![
                        Tag(ScalarMonth),
                        Tag(SeparatorSlashOrDash),
                        Tag(ScalarDay),
                        Tag(SeparatorSlashOrDash),
                        Tag(ScalarYear),
                        OptTag(SeparatorAt),
                        OptSub(SubGrammar::Time),
                    ],
                    HandlerId::MonthDayYear,
                ));
                endian.push(Pattern::new(
                    vec![
                        Tag(ScalarMonth),
                        Tag(SeparatorSlashOrDash),
                        Tag(ScalarDay),
                        OptTag(SeparatorAt),
                        OptSub(SubGrammar::Time),
                    ],
                    HandlerId::MonthDay,
                ));
            }
            Endian::Little => {
                endian.push(Pattern::new(
                    vec![
                        Tag(ScalarDay),
                        Tag(SeparatorSlashOrDash),
                        Tag(ScalarMonth),
                        Tag(SeparatorSlashOrDash),
                        Tag(ScalarYear),
                        OptTag(SeparatorAt),
                        OptSub(SubGrammar::Time),
                    ],
                    HandlerId::DayMonthYear,
                ));
                endian.push(Pattern::new(
                    vec![
                        Tag(ScalarDay),
                        Tag(SeparatorSlashOrDash),
                        Tag(ScalarMonth),
                        OptTag(SeparatorAt),
                        OptSub(SubGrammar::Time),
                    ],
                    HandlerId::DayMonth,
                ));
            }
        }
    }

    let anchor = vec![
        Pattern::new(
            vec![
                OptTag(Grabber),
                Tag(Repeater),
                OptTag(SeparatorAt),
                OptTag(Repeater),
                OptTag(Repeater),
            ],
            HandlerId::Anchor,
        ),
        Pattern::new(
            vec![
                OptTag(Grabber),
                Tag(Repeater),
                Tag(Repeater),
                OptTag(SeparatorAt),
                OptTag(Repeater),
                OptTag(Repeater),
            ],
            HandlerId::Anchor,
        ),
        // "monday next week"
        Pattern::new(
            vec![Tag(Repeater), Tag(Grabber), Tag(Repeater)],
            HandlerId::AnchorReordered,
        ),
    ];

    let arrow = vec![
        // "3 weeks past"
        Pattern::new(
            vec![Tag(Scalar), Tag(Repeater), Tag(Pointer)],
            HandlerId::ScalarRepeaterPointer,
        ),
        // "past 3 weeks"
        Pattern::new(
            vec![Tag(Pointer), Tag(Scalar), Tag(Repeater)],
            HandlerId::PointerScalarRepeater,
        ),
        // "3 weeks future this second"
        Pattern::new(
            vec![
                Tag(Scalar),
                Tag(Repeater),
                Tag(Pointer),
                Sub(SubGrammar::Anchor),
            ],
            HandlerId::ScalarRepeaterPointerAnchor,
        ),
    ];

    let narrow = vec![
        // "3rd wednesday in november"
        Pattern::new(
            vec![Tag(Ordinal), Tag(Repeater), Tag(SeparatorIn), Tag(Repeater)],
            HandlerId::NthRepeaterInOuter,
        ),
        // "3rd month next year"
        Pattern::new(
            vec![Tag(Ordinal), Tag(Repeater), Tag(Grabber), Tag(Repeater)],
            HandlerId::NthRepeaterAfterGrab,
        ),
    ];

    Definitions {
        time,
        date,
        endian,
        anchor,
        arrow,
        narrow,
    }
}

/// Try to match `atoms` against the whole of `tokens`.
fn pattern_matches(atoms: &[Atom], tokens: &[Token], defs: &Definitions) -> bool {
    let mut i = 0;
    for atom in atoms {
        match atom {
            Atom::Tag(kind) => {
                if i < tokens.len() && tokens[i].has(*kind) {
                    i += 1;
                } else {
                    return false;
                }
            }
            Atom::OptTag(kind) => {
                if i < tokens.len() && tokens[i].has(*kind) {
                    i += 1;
                }
            }
            Atom::Sub(sub) | Atom::OptSub(sub) => {
                // A sub-grammar consumes everything that remains.
                if matches!(atom, Atom::OptSub(_)) && i == tokens.len() {
                    return true;
                }
                return defs
                    .sub(*sub)
                    .iter()
                    .any(|p| pattern_matches(&p.atoms, &tokens[i..], defs));
            }
        }
    }
    i == tokens.len()
}

/// What a list strips from the token stream before its handler runs.
#[derive(Debug, Clone, Copy)]
enum SeparatorPolicy {
    All,
    /// Keep `in` and `on`; drop `at`, slashes, dashes, and commas.
    Punctuation,
    None,
}

fn filtered(tokens: &[Token], policy: SeparatorPolicy) -> Vec<Token> {
    tokens
        .iter()
        .filter(|t| match policy {
            SeparatorPolicy::All => !t.has(TagKind::Separator),
            SeparatorPolicy::Punctuation => {
                !(t.has(TagKind::SeparatorAt)
                    || t.has(TagKind::SeparatorSlashOrDash)
                    || t.has(TagKind::SeparatorComma))
            }
            SeparatorPolicy::None => true,
        })
        .cloned()
        .collect()
}

/// Run the token stream through the catalogue; first producing pattern
/// wins. A pattern whose handler declines (impossible date, empty window)
/// does not stop the scan.
pub(crate) fn tokens_to_span(
    tokens: &[Token],
    options: &Options,
    now: NaiveDateTime,
) -> Option<Span> {
    let defs = definitions(options);
    let lists: [(&str, &[Pattern], SeparatorPolicy); 5] = [
        ("date", &defs.date, SeparatorPolicy::All),
        ("endian", &defs.endian, SeparatorPolicy::All),
        ("anchor", &defs.anchor, SeparatorPolicy::All),
        ("arrow", &defs.arrow, SeparatorPolicy::Punctuation),
        ("narrow", &defs.narrow, SeparatorPolicy::None),
    ];

    for (name, list, policy) in lists {
        for pattern in list {
            if !pattern_matches(&pattern.atoms, tokens, &defs) {
                continue;
            }
            let Some(handler) = &pattern.handler else {
                continue;
            };
            debug!(list = name, handler = ?handler, "pattern matched");
            let handler_tokens = filtered(tokens, policy);
            if let Some(span) = handlers::dispatch(handler, &handler_tokens, options, now) {
                return Some(span);
            }
            debug!(list = name, handler = ?handler, "handler declined");
        }
    }
    None
}
