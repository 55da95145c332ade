//! Per-pattern capability detection.

use bitflags::bitflags;

use crate::pattern::{Segment, TimePattern, TimeToken};

bitflags! {
    /// Capability flags describing which time-field families a format
    /// pattern can represent.
    ///
    /// Derived once per pattern and never mutated; the widget layer uses
    /// the flags to decide which controls to show.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FormatSupport: u8 {
        /// An hour token (`H`, `HH`, `h`, `hh`) is present.
        const HOUR = 0b0000_0001;
        /// A minute token (`m`, `mm`) is present.
        const MINUTE = 0b0000_0010;
        /// A second token (`s`, `ss`) is present.
        const SECOND = 0b0000_0100;
        /// The millisecond token `l` is present.
        const MILLISECOND = 0b0000_1000;
        /// The microsecond token `c` is present.
        const MICROSECOND = 0b0001_0000;
        /// An am/pm token is present alongside a 12-hour hour token.
        const MERIDIEM = 0b0010_0000;
        /// An offset token (`z`, `Z`) is present.
        const TIMEZONE = 0b0100_0000;
        /// The ISO-8601 offset token `Z` specifically is present.
        const ISO8601 = 0b1000_0000;
    }
}

impl FormatSupport {
    /// Scans `format` and reports which field families it contains.
    ///
    /// Detection runs over the compiled pattern, so token sequences inside
    /// quoted literal spans never count. An am/pm token only counts as
    /// supported when a 12-hour token accompanies it: `"h t"` is
    /// meridiem-capable, `"t"` and `"H t"` are not.
    pub fn detect(format: &str) -> Self {
        TimePattern::compile(format).support()
    }

    pub(crate) fn from_segments(segments: &[Segment]) -> Self {
        let mut support = Self::empty();
        let mut twelve_hour = false;
        let mut meridiem = false;
        for segment in segments {
            let Segment::Token(token) = segment else {
                continue;
            };
            match token {
                TimeToken::Hour { .. } => support |= Self::HOUR,
                TimeToken::Hour12 { .. } => {
                    support |= Self::HOUR;
                    twelve_hour = true;
                }
                TimeToken::Minute { .. } => support |= Self::MINUTE,
                TimeToken::Second { .. } => support |= Self::SECOND,
                TimeToken::Millisecond => support |= Self::MILLISECOND,
                TimeToken::Microsecond => support |= Self::MICROSECOND,
                TimeToken::Meridiem { .. } => meridiem = true,
                TimeToken::Offset => support |= Self::TIMEZONE,
                TimeToken::OffsetIso => support |= Self::TIMEZONE | Self::ISO8601,
            }
        }
        if meridiem && twelve_hour {
            support |= Self::MERIDIEM;
        }
        support
    }

    pub fn hour(self) -> bool {
        self.contains(Self::HOUR)
    }

    pub fn minute(self) -> bool {
        self.contains(Self::MINUTE)
    }

    pub fn second(self) -> bool {
        self.contains(Self::SECOND)
    }

    pub fn millisecond(self) -> bool {
        self.contains(Self::MILLISECOND)
    }

    pub fn microsecond(self) -> bool {
        self.contains(Self::MICROSECOND)
    }

    pub fn meridiem(self) -> bool {
        self.contains(Self::MERIDIEM)
    }

    pub fn timezone(self) -> bool {
        self.contains(Self::TIMEZONE)
    }

    pub fn iso8601(self) -> bool {
        self.contains(Self::ISO8601)
    }
}
