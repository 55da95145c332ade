//! `timepick_rs` is a token-pattern time format engine for picker-style
//! time strings.
//!
//! ```rust
//! use timepick_rs::{format_time, parse_time, TimeDefaults, TimeSettings};
//!
//! let settings = TimeSettings::new();
//! let defaults = TimeDefaults::default();
//!
//! // Parse a 12-hour time string and render it back in 24-hour form.
//! let time = parse_time("hh:mm tt", "07:45 pm").unwrap();
//! assert_eq!(time.hour, 19);
//! assert_eq!(format_time("HH:mm", &time, &settings, &defaults), "19:45");
//! ```
//!
//! The engine is stateless and purely synchronous: a format pattern is
//! compiled once into typed segments ([`TimePattern`]), and the same
//! compiled pattern drives both formatting and strict positional parsing,
//! so `format(parse(s, p), p) == s` for well-formed input. Around that
//! core sit a combined date-time splitter ([`split_date_time`]), a
//! per-pattern capability detector ([`FormatSupport`]), and a timezone
//! offset codec ([`timezone_offset_string`] / [`timezone_offset_number`]).
//!
//! Calendar arithmetic and date-string parsing are deliberately out of
//! scope; [`split_date_time`] hands the date substring back to the caller
//! untouched.
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    // The std-gated pattern cache is the only consumer of rustc-hash.
    unused_crate_dependencies,
    clippy::module_name_repetitions
)]

extern crate alloc;

#[cfg(any(feature = "std", test))]
extern crate std;

pub mod error;
pub mod format;
pub mod offset;
pub mod options;
pub mod parsers;
pub mod pattern;
pub mod split;
pub mod support;
pub mod time;

#[doc(inline)]
pub use error::TimeError;

/// The engine's result type.
pub type TimeResult<T> = Result<T, TimeError>;

pub use format::{format_time, FormattableTime};
pub use offset::{
    timezone_adjust, timezone_offset_number, timezone_offset_string, FormattableOffset,
    ParsedOffset, MAX_OFFSET_MINUTES, MIN_OFFSET_MINUTES,
};
pub use options::{FieldPatch, SettingsPatch, TimeDefaults, TimeSettings};
pub use parsers::{parse_time, parse_with_pattern};
#[cfg(feature = "std")]
pub use pattern::PatternCache;
pub use pattern::{Segment, TimePattern, TimeToken};
pub use split::{parse_date_time, split_date_time, ParsedDateTime, SplitDateTime};
pub use support::FormatSupport;
pub use time::{twelve_hour, Meridiem, TimeRecord};
