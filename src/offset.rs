//! Timezone offset conversion between signed minutes and text.
//!
//! Two textual encodings are supported: the traditional `±HHMM` form and
//! the ISO-8601 `±HH:MM` / `Z` form. Offsets outside the representable
//! range and strings that are not offsets at all are passed through
//! untouched rather than guessed at.

use core::fmt;

use alloc::string::String;
use writeable::{impl_display_with_writeable, LengthHint, Writeable};

/// Highest representable offset, +14:00, in minutes.
pub const MAX_OFFSET_MINUTES: i16 = 840;
/// Lowest representable offset, -12:00, in minutes.
pub const MIN_OFFSET_MINUTES: i16 = -720;

/// A UTC offset prepared for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormattableOffset {
    /// A missing or zero-ISO offset, rendered as UTC.
    Utc { iso8601: bool },
    /// An offset within the representable range.
    Minutes { minutes: i16, iso8601: bool },
    /// An offset outside `-720..=840` minutes, rendered verbatim.
    OutOfRange(i32),
}

impl FormattableOffset {
    /// Prepares `minutes` for rendering. `None` is treated as UTC.
    pub fn from_minutes(minutes: Option<i32>, iso8601: bool) -> Self {
        match minutes {
            None => Self::Utc { iso8601 },
            Some(minutes)
                if minutes > i32::from(MAX_OFFSET_MINUTES)
                    || minutes < i32::from(MIN_OFFSET_MINUTES) =>
            {
                Self::OutOfRange(minutes)
            }
            Some(0) if iso8601 => Self::Utc { iso8601: true },
            Some(minutes) => Self::Minutes {
                minutes: minutes as i16,
                iso8601,
            },
        }
    }
}

impl Writeable for FormattableOffset {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        match *self {
            Self::Utc { iso8601: true } => sink.write_char('Z'),
            Self::Utc { iso8601: false } => sink.write_str("+0000"),
            Self::Minutes { minutes, iso8601 } => {
                sink.write_char(if minutes < 0 { '-' } else { '+' })?;
                let magnitude = minutes.unsigned_abs();
                write_padded_u8((magnitude / 60) as u8, sink)?;
                if iso8601 {
                    sink.write_char(':')?;
                }
                write_padded_u8((magnitude % 60) as u8, sink)
            }
            Self::OutOfRange(value) => value.write_to(sink),
        }
    }

    fn writeable_length_hint(&self) -> LengthHint {
        match *self {
            Self::Utc { iso8601: true } => LengthHint::exact(1),
            Self::Utc { iso8601: false } => LengthHint::exact(5),
            Self::Minutes { iso8601, .. } => LengthHint::exact(5 + iso8601 as usize),
            Self::OutOfRange(value) => value.writeable_length_hint(),
        }
    }
}

impl_display_with_writeable!(FormattableOffset);

/// Renders `minutes` as an offset string.
///
/// `None` renders as UTC (`Z` in ISO-8601 form, `+0000` otherwise); values
/// outside the representable range render as their decimal digits,
/// unchanged.
pub fn timezone_offset_string(minutes: Option<i32>, iso8601: bool) -> String {
    FormattableOffset::from_minutes(minutes, iso8601)
        .write_to_string()
        .into_owned()
}

/// Result of reading a timezone string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedOffset<'a> {
    /// A recognized offset, in minutes east of UTC.
    Minutes(i16),
    /// Not a recognized offset form. The original text is handed back so
    /// the caller can resolve named zones against its own table.
    Unrecognized(&'a str),
}

impl ParsedOffset<'_> {
    /// The offset in minutes, if one was recognized.
    pub fn minutes(self) -> Option<i16> {
        match self {
            Self::Minutes(minutes) => Some(minutes),
            Self::Unrecognized(_) => None,
        }
    }
}

/// Reads a timezone string into signed offset minutes.
///
/// `Z`, `z`, and forms that normalize to them (`:Z`, `+04:00` style colon
/// placement) are handled; anything else comes back as
/// [`ParsedOffset::Unrecognized`].
pub fn timezone_offset_number(tz: &str) -> ParsedOffset<'_> {
    // Normalize the way the textual forms are produced: uppercase, with
    // the first colon removed.
    let mut normalized = String::with_capacity(tz.len());
    let mut colon_removed = false;
    for ch in tz.chars() {
        if ch == ':' && !colon_removed {
            colon_removed = true;
            continue;
        }
        normalized.extend(ch.to_uppercase());
    }

    if normalized == "Z" {
        return ParsedOffset::Minutes(0);
    }

    let bytes = normalized.as_bytes();
    if bytes.len() != 5
        || !(bytes[0] == b'+' || bytes[0] == b'-')
        || !bytes[1..].iter().all(u8::is_ascii_digit)
    {
        return ParsedOffset::Unrecognized(tz);
    }

    let sign = if bytes[0] == b'-' { -1 } else { 1 };
    let hours = i16::from(bytes[1] - b'0') * 10 + i16::from(bytes[2] - b'0');
    let minutes = i16::from(bytes[3] - b'0') * 10 + i16::from(bytes[4] - b'0');
    ParsedOffset::Minutes(sign * (hours * 60 + minutes))
}

/// Shifts an epoch-millisecond timestamp so that its wall-clock reading in
/// an environment at `local_offset_minutes` (east positive) reflects the
/// offset named by `tz`.
///
/// When `tz` is not a recognizable offset the timestamp is returned
/// unchanged.
pub fn timezone_adjust(epoch_ms: i64, local_offset_minutes: i16, tz: &str) -> i64 {
    match timezone_offset_number(tz) {
        ParsedOffset::Minutes(target) => {
            epoch_ms + (i64::from(local_offset_minutes) - i64::from(target)) * 60_000
        }
        ParsedOffset::Unrecognized(_) => epoch_ms,
    }
}

pub(crate) fn write_padded_u8<W: fmt::Write + ?Sized>(num: u8, sink: &mut W) -> fmt::Result {
    if num < 10 {
        sink.write_char('0')?;
    }
    num.write_to(sink)
}
