//! Format pattern compilation.
//!
//! A pattern string is compiled once into a list of typed segments; the
//! same compiled form drives both the formatter and the parser.

use alloc::{string::String, vec::Vec};

use crate::support::FormatSupport;

/// A time-field placeholder recognized in a format pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeToken {
    /// `H` / `HH`: hour of day, 0-23.
    Hour { padded: bool },
    /// `h` / `hh`: clock hour, 1-12.
    Hour12 { padded: bool },
    /// `m` / `mm`: minute.
    Minute { padded: bool },
    /// `s` / `ss`: second.
    Second { padded: bool },
    /// `l`: millisecond, always three digits.
    Millisecond,
    /// `c`: microsecond, always three digits.
    Microsecond,
    /// `t` / `tt` / `T` / `TT`: am/pm designator.
    Meridiem { uppercase: bool, abbreviated: bool },
    /// `z`: traditional `±HHMM` offset.
    Offset,
    /// `Z`: ISO-8601 `±HH:MM` / `Z` offset.
    OffsetIso,
}

/// One compiled piece of a pattern: literal text or a field token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Token(TimeToken),
}

/// A format pattern compiled into segments, reusable across any number of
/// format and parse calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimePattern {
    segments: Vec<Segment>,
    support: FormatSupport,
}

impl TimePattern {
    /// Compiles `format` into segments.
    ///
    /// Compilation is total. Characters that are not recognized tokens
    /// pass through as literal text, including whitespace and double
    /// quotes. A single-quote pair delimits a literal span copied
    /// verbatim; an empty `''` pair collapses to nothing, and a quote with
    /// no closing partner is itself a literal `'`.
    pub fn compile(format: &str) -> Self {
        let chars: Vec<char> = format.chars().collect();
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut i = 0;

        while i < chars.len() {
            let ch = chars[i];
            let doubled = chars.get(i + 1) == Some(&ch);
            let token = match ch {
                'H' => Some(TimeToken::Hour { padded: doubled }),
                'h' => Some(TimeToken::Hour12 { padded: doubled }),
                'm' => Some(TimeToken::Minute { padded: doubled }),
                's' => Some(TimeToken::Second { padded: doubled }),
                'l' => Some(TimeToken::Millisecond),
                'c' => Some(TimeToken::Microsecond),
                't' | 'T' => Some(TimeToken::Meridiem {
                    uppercase: ch == 'T',
                    abbreviated: !doubled,
                }),
                'z' => Some(TimeToken::Offset),
                'Z' => Some(TimeToken::OffsetIso),
                '\'' => {
                    match chars[i + 1..].iter().position(|&c| c == '\'') {
                        Some(span) => {
                            literal.extend(&chars[i + 1..i + 1 + span]);
                            i += span + 2;
                        }
                        // No closing quote: the quote itself is literal.
                        None => {
                            literal.push('\'');
                            i += 1;
                        }
                    }
                    continue;
                }
                _ => None,
            };

            match token {
                Some(token) => {
                    flush_literal(&mut segments, &mut literal);
                    segments.push(Segment::Token(token));
                    i += token_width(token);
                }
                None => {
                    literal.push(ch);
                    i += 1;
                }
            }
        }
        flush_literal(&mut segments, &mut literal);

        let support = FormatSupport::from_segments(&segments);
        Self { segments, support }
    }

    /// The compiled segments in pattern order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Capability flags detected for this pattern.
    pub fn support(&self) -> FormatSupport {
        self.support
    }

    /// Counts how often `separator` occurs in the pattern's literal text.
    ///
    /// Quoted spans contribute their rendered content; quote characters do
    /// not exist in the compiled form and never count.
    pub(crate) fn count_in_literals(&self, separator: &str) -> usize {
        if separator.is_empty() {
            return 0;
        }
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Literal(text) => Some(text.matches(separator).count()),
                Segment::Token(_) => None,
            })
            .sum()
    }
}

fn flush_literal(segments: &mut Vec<Segment>, literal: &mut String) {
    if !literal.is_empty() {
        segments.push(Segment::Literal(core::mem::take(literal)));
    }
}

fn token_width(token: TimeToken) -> usize {
    match token {
        TimeToken::Hour { padded }
        | TimeToken::Hour12 { padded }
        | TimeToken::Minute { padded }
        | TimeToken::Second { padded } => 1 + padded as usize,
        TimeToken::Millisecond | TimeToken::Microsecond | TimeToken::Offset | TimeToken::OffsetIso => 1,
        TimeToken::Meridiem { abbreviated, .. } => 2 - abbreviated as usize,
    }
}

/// A reusable compile cache keyed by pattern string.
///
/// Callers that format or parse with the same handful of patterns can hold
/// one of these instead of recompiling per call. The engine itself stays
/// stateless; the cache is caller-owned.
#[cfg(feature = "std")]
#[derive(Debug, Default)]
pub struct PatternCache {
    inner: rustc_hash::FxHashMap<alloc::boxed::Box<str>, TimePattern>,
}

#[cfg(feature = "std")]
impl PatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the compiled pattern for `format`, compiling and storing it
    /// on first use.
    pub fn get_or_compile(&mut self, format: &str) -> &TimePattern {
        if !self.inner.contains_key(format) {
            self.inner
                .insert(alloc::boxed::Box::from(format), TimePattern::compile(format));
        }
        self.inner.get(format).expect("inserted above")
    }

    /// Number of distinct patterns compiled so far.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn literal(text: &str) -> Segment {
        Segment::Literal(text.to_string())
    }

    #[test]
    fn compiles_padded_and_unpadded_tokens() {
        let pattern = TimePattern::compile("HH:m");
        assert_eq!(
            pattern.segments(),
            &[
                Segment::Token(TimeToken::Hour { padded: true }),
                literal(":"),
                Segment::Token(TimeToken::Minute { padded: false }),
            ]
        );
    }

    #[test]
    fn quoted_spans_become_plain_literals() {
        let pattern = TimePattern::compile("'abc' h 'def'");
        assert_eq!(
            pattern.segments(),
            &[
                literal("abc "),
                Segment::Token(TimeToken::Hour12 { padded: false }),
                literal(" def"),
            ]
        );
    }

    #[test]
    fn empty_quote_pair_collapses() {
        assert_eq!(TimePattern::compile("''").segments(), &[] as &[Segment]);
    }

    #[test]
    fn unmatched_quote_is_literal() {
        assert_eq!(TimePattern::compile("'").segments(), &[literal("'")]);
    }

    #[test]
    fn double_quotes_do_not_quote() {
        // The `c` between the quote characters is still a token.
        let pattern = TimePattern::compile("\"abc\"");
        assert_eq!(
            pattern.segments(),
            &[
                literal("\"ab"),
                Segment::Token(TimeToken::Microsecond),
                literal("\""),
            ]
        );
    }

    #[test]
    fn meridiem_tokens_track_case_and_width() {
        let pattern = TimePattern::compile("t tt T TT");
        let tokens: Vec<_> = pattern
            .segments()
            .iter()
            .filter_map(|segment| match segment {
                Segment::Token(token) => Some(*token),
                Segment::Literal(_) => None,
            })
            .collect();
        assert_eq!(
            tokens,
            [
                TimeToken::Meridiem {
                    uppercase: false,
                    abbreviated: true
                },
                TimeToken::Meridiem {
                    uppercase: false,
                    abbreviated: false
                },
                TimeToken::Meridiem {
                    uppercase: true,
                    abbreviated: true
                },
                TimeToken::Meridiem {
                    uppercase: true,
                    abbreviated: false
                },
            ]
        );
    }

    #[test]
    fn counts_separators_in_literal_text_only() {
        let pattern = TimePattern::compile("hh mm tt");
        assert_eq!(pattern.count_in_literals(" "), 2);

        // The quote characters are gone from the compiled form; the span's
        // content still counts.
        let quoted = TimePattern::compile("'at' hh");
        assert_eq!(quoted.count_in_literals(" "), 1);
        assert_eq!(quoted.count_in_literals("at"), 1);

        assert_eq!(TimePattern::compile("HH:mm").count_in_literals(" "), 0);
    }

    #[cfg(feature = "std")]
    #[test]
    fn cache_compiles_each_pattern_once() {
        let mut cache = PatternCache::new();
        let first = cache.get_or_compile("HH:mm").clone();
        cache.get_or_compile("h:mm tt");
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get_or_compile("HH:mm"), &first);
        assert_eq!(cache.len(), 2);
    }
}
