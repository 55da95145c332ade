//! Strict pattern-driven time string parsing.

use crate::{
    pattern::{Segment, TimePattern, TimeToken},
    time::{Meridiem, TimeRecord},
    TimeError, TimeResult,
};

/// Parses `input` against `format`, returning the extracted time value.
///
/// Matching is positional and strict: literal pattern text (whitespace
/// included) must appear verbatim, padded numeric tokens require their
/// exact digit count, and the whole input must be consumed. The meridiem
/// and offset groups are the only optional pieces; when absent the hour is
/// taken as already 24-hour and the timezone is left unset. Fields the
/// pattern never mentions default to zero.
///
/// A structurally incompatible input fails with a recoverable
/// [`TimeError::format`] ("Wrong time format"); callers are expected to
/// catch it and keep their previous valid value.
pub fn parse_time(format: &str, input: &str) -> TimeResult<TimeRecord> {
    let pattern = TimePattern::compile(format);
    parse_with_pattern(&pattern, input)
}

/// [`parse_time`] against an already compiled pattern.
pub fn parse_with_pattern(pattern: &TimePattern, input: &str) -> TimeResult<TimeRecord> {
    let mut hour: u32 = 0;
    let mut minute: u32 = 0;
    let mut second: u32 = 0;
    let mut millisecond: u32 = 0;
    let mut microsecond: u32 = 0;
    let mut meridiem: Option<Meridiem> = None;
    let mut timezone: Option<i16> = None;

    let mut cursor = Cursor::new(input);
    for segment in pattern.segments() {
        match segment {
            Segment::Literal(text) => {
                if !cursor.eat_literal(text) {
                    return Err(mismatch(input));
                }
            }
            Segment::Token(token) => match *token {
                TimeToken::Hour { padded } | TimeToken::Hour12 { padded } => {
                    hour = cursor.eat_number(padded).ok_or_else(|| mismatch(input))?;
                }
                TimeToken::Minute { padded } => {
                    minute = cursor.eat_number(padded).ok_or_else(|| mismatch(input))?;
                }
                TimeToken::Second { padded } => {
                    second = cursor.eat_number(padded).ok_or_else(|| mismatch(input))?;
                }
                TimeToken::Millisecond => {
                    millisecond = cursor.eat_digits(1, 3).ok_or_else(|| mismatch(input))?;
                }
                TimeToken::Microsecond => {
                    microsecond = cursor.eat_digits(1, 3).ok_or_else(|| mismatch(input))?;
                }
                TimeToken::Meridiem { .. } => meridiem = cursor.eat_meridiem(),
                TimeToken::Offset | TimeToken::OffsetIso => timezone = cursor.eat_offset(),
            },
        }
    }
    if !cursor.is_empty() {
        return Err(mismatch(input));
    }

    // 12-hour designators convert after extraction; noon and midnight are
    // the two special cases.
    if let Some(meridiem) = meridiem {
        match meridiem {
            Meridiem::Pm if hour != 12 => hour += 12,
            Meridiem::Am if hour == 12 => hour = 0,
            _ => {}
        }
    }

    if hour > 23 || minute > 59 || second > 59 || millisecond > 999 || microsecond > 999 {
        return Err(TimeError::range().with_message("parsed time field outside valid range"));
    }

    Ok(TimeRecord {
        hour: hour as u8,
        minute: minute as u8,
        second: second as u8,
        millisecond: millisecond as u16,
        microsecond: microsecond as u16,
        timezone,
    })
}

fn mismatch(input: &str) -> TimeError {
    #[cfg(feature = "log")]
    log::debug!("time string {input:?} does not match the format pattern");
    #[cfg(not(feature = "log"))]
    let _ = input;
    TimeError::format()
}

/// A forward-only cursor over the input string.
struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self { rest: input }
    }

    fn is_empty(&self) -> bool {
        self.rest.is_empty()
    }

    fn eat_literal(&mut self, literal: &str) -> bool {
        match self.rest.strip_prefix(literal) {
            Some(rest) => {
                self.rest = rest;
                true
            }
            None => false,
        }
    }

    /// Consumes between `min` and `max` ASCII digits.
    fn eat_digits(&mut self, min: usize, max: usize) -> Option<u32> {
        let len = self
            .rest
            .bytes()
            .take(max)
            .take_while(u8::is_ascii_digit)
            .count();
        if len < min {
            return None;
        }
        let (digits, rest) = self.rest.split_at(len);
        self.rest = rest;
        Some(
            digits
                .bytes()
                .fold(0u32, |value, digit| value * 10 + u32::from(digit - b'0')),
        )
    }

    /// A numeric field: exactly two digits when padded, one or two
    /// otherwise.
    fn eat_number(&mut self, padded: bool) -> Option<u32> {
        if padded {
            self.eat_digits(2, 2)
        } else {
            self.eat_digits(1, 2)
        }
    }

    /// Consumes an am/pm designator if one is present. Case-insensitive;
    /// the two-letter forms win over the single letters.
    fn eat_meridiem(&mut self) -> Option<Meridiem> {
        const DESIGNATORS: [(&str, Meridiem); 4] = [
            ("am", Meridiem::Am),
            ("pm", Meridiem::Pm),
            ("a", Meridiem::Am),
            ("p", Meridiem::Pm),
        ];
        for (name, value) in DESIGNATORS {
            let matched = self
                .rest
                .get(..name.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(name));
            if matched {
                self.rest = &self.rest[name.len()..];
                return Some(value);
            }
        }
        None
    }

    /// Consumes a timezone offset if one is present: `z`/`Z` or
    /// `±HH[:]MM`.
    fn eat_offset(&mut self) -> Option<i16> {
        if self.eat_literal("Z") || self.eat_literal("z") {
            return Some(0);
        }
        let bytes = self.rest.as_bytes();
        let sign: i16 = match bytes.first() {
            Some(b'+') => 1,
            Some(b'-') => -1,
            _ => return None,
        };
        let mut index = 1;
        let hours = read_digit_pair(bytes, index)?;
        index += 2;
        if bytes.get(index) == Some(&b':') {
            index += 1;
        }
        let minutes = read_digit_pair(bytes, index)?;
        index += 2;
        self.rest = &self.rest[index..];
        Some(sign * (hours * 60 + minutes))
    }
}

fn read_digit_pair(bytes: &[u8], index: usize) -> Option<i16> {
    let tens = *bytes.get(index)?;
    let ones = *bytes.get(index + 1)?;
    if !tens.is_ascii_digit() || !ones.is_ascii_digit() {
        return None;
    }
    Some(i16::from(tens - b'0') * 10 + i16::from(ones - b'0'))
}
