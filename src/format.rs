//! Pattern-driven time rendering.

use core::fmt;

use alloc::string::String;
use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{
    offset::{write_padded_u8, FormattableOffset},
    options::{TimeDefaults, TimeSettings},
    pattern::{Segment, TimePattern, TimeToken},
    time::{twelve_hour, Meridiem, TimeRecord},
};

/// A time record bound to a compiled pattern for rendering.
#[derive(Debug)]
pub struct FormattableTime<'a> {
    pattern: &'a TimePattern,
    time: &'a TimeRecord,
    /// Offset applied when the record itself carries none.
    default_timezone: Option<i16>,
}

impl<'a> FormattableTime<'a> {
    pub fn new(
        pattern: &'a TimePattern,
        time: &'a TimeRecord,
        default_timezone: Option<i16>,
    ) -> Self {
        Self {
            pattern,
            time,
            default_timezone,
        }
    }

    fn offset(&self, iso8601: bool) -> FormattableOffset {
        let minutes = self.time.timezone.or(self.default_timezone);
        FormattableOffset::from_minutes(minutes.map(i32::from), iso8601)
    }

    fn write_token<W: fmt::Write + ?Sized>(&self, token: TimeToken, sink: &mut W) -> fmt::Result {
        match token {
            TimeToken::Hour { padded: true } => write_padded_u8(self.time.hour, sink),
            TimeToken::Hour { padded: false } => self.time.hour.write_to(sink),
            TimeToken::Hour12 { padded } => {
                let clock_hour = twelve_hour(self.time.hour.into());
                if padded {
                    write_padded_u8(clock_hour, sink)
                } else {
                    clock_hour.write_to(sink)
                }
            }
            TimeToken::Minute { padded: true } => write_padded_u8(self.time.minute, sink),
            TimeToken::Minute { padded: false } => self.time.minute.write_to(sink),
            TimeToken::Second { padded: true } => write_padded_u8(self.time.second, sink),
            TimeToken::Second { padded: false } => self.time.second.write_to(sink),
            TimeToken::Millisecond => write_three_digits(self.time.millisecond, sink),
            TimeToken::Microsecond => write_three_digits(self.time.microsecond, sink),
            TimeToken::Meridiem {
                uppercase,
                abbreviated,
            } => {
                let designator = match (Meridiem::of_hour(self.time.hour), uppercase, abbreviated) {
                    (Meridiem::Am, false, true) => "a",
                    (Meridiem::Am, false, false) => "am",
                    (Meridiem::Am, true, true) => "A",
                    (Meridiem::Am, true, false) => "AM",
                    (Meridiem::Pm, false, true) => "p",
                    (Meridiem::Pm, false, false) => "pm",
                    (Meridiem::Pm, true, true) => "P",
                    (Meridiem::Pm, true, false) => "PM",
                };
                sink.write_str(designator)
            }
            TimeToken::Offset => self.offset(false).write_to(sink),
            TimeToken::OffsetIso => self.offset(true).write_to(sink),
        }
    }
}

impl Writeable for FormattableTime<'_> {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        for segment in self.pattern.segments() {
            match segment {
                Segment::Literal(text) => sink.write_str(text)?,
                Segment::Token(token) => self.write_token(*token, sink)?,
            }
        }
        Ok(())
    }

    fn writeable_length_hint(&self) -> LengthHint {
        let mut hint = LengthHint::exact(0);
        for segment in self.pattern.segments() {
            hint = hint
                + match segment {
                    Segment::Literal(text) => LengthHint::exact(text.len()),
                    Segment::Token(token) => match token {
                        TimeToken::Hour { padded }
                        | TimeToken::Hour12 { padded }
                        | TimeToken::Minute { padded }
                        | TimeToken::Second { padded } => {
                            if *padded {
                                LengthHint::exact(2)
                            } else {
                                LengthHint::between(1, 2)
                            }
                        }
                        TimeToken::Millisecond | TimeToken::Microsecond => LengthHint::exact(3),
                        TimeToken::Meridiem { abbreviated, .. } => {
                            LengthHint::exact(2 - *abbreviated as usize)
                        }
                        TimeToken::Offset => self.offset(false).writeable_length_hint(),
                        TimeToken::OffsetIso => self.offset(true).writeable_length_hint(),
                    },
                };
        }
        hint
    }
}

impl_display_with_writeable!(FormattableTime<'_>);

fn write_three_digits<W: fmt::Write + ?Sized>(value: u16, sink: &mut W) -> fmt::Result {
    if value < 100 {
        sink.write_char('0')?;
    }
    if value < 10 {
        sink.write_char('0')?;
    }
    value.write_to(sink)
}

/// Formats `time` according to `format`.
///
/// The whole pattern walk happens outside single-quote literal spans;
/// literal content, unrecognized characters, and whitespace are copied
/// verbatim. Timezone tokens use the record's own offset when set, then
/// the settings layers' default, then UTC.
pub fn format_time(
    format: &str,
    time: &TimeRecord,
    settings: &TimeSettings,
    defaults: &TimeDefaults,
) -> String {
    let pattern = TimePattern::compile(format);
    FormattableTime::new(&pattern, time, settings.timezone_or(defaults))
        .write_to_string()
        .into_owned()
}
