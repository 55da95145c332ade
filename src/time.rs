//! The structured time value shared by the formatter and the parser.

use crate::{TimeError, TimeResult};

/// A structured time value.
///
/// Produced by the parser and consumed by the formatter; the surrounding
/// widget combines it with a separately parsed date. All fields default to
/// zero except `timezone`, which defaults to `None` ("use the context
/// default offset").
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TimeRecord {
    /// Hour of day, 0-23.
    pub hour: u8,
    /// Minute, 0-59.
    pub minute: u8,
    /// Second, 0-59.
    pub second: u8,
    /// Millisecond, 0-999.
    pub millisecond: u16,
    /// Microsecond, 0-999.
    pub microsecond: u16,
    /// Offset from UTC in minutes, east positive.
    pub timezone: Option<i16>,
}

impl TimeRecord {
    /// Creates a midnight record with no timezone.
    pub const fn new() -> Self {
        Self {
            hour: 0,
            minute: 0,
            second: 0,
            millisecond: 0,
            microsecond: 0,
            timezone: None,
        }
    }

    /// Creates a new `TimeRecord`, rejecting any field outside its valid
    /// range.
    pub fn try_new(
        hour: u8,
        minute: u8,
        second: u8,
        millisecond: u16,
        microsecond: u16,
    ) -> TimeResult<Self> {
        let record = Self {
            hour,
            minute,
            second,
            millisecond,
            microsecond,
            timezone: None,
        };
        if !record.is_valid() {
            return Err(TimeError::range().with_message("time field outside valid range"));
        }
        Ok(record)
    }

    pub const fn with_hour(mut self, hour: u8) -> Self {
        self.hour = hour;
        self
    }

    pub const fn with_minute(mut self, minute: u8) -> Self {
        self.minute = minute;
        self
    }

    pub const fn with_second(mut self, second: u8) -> Self {
        self.second = second;
        self
    }

    pub const fn with_millisecond(mut self, millisecond: u16) -> Self {
        self.millisecond = millisecond;
        self
    }

    pub const fn with_microsecond(mut self, microsecond: u16) -> Self {
        self.microsecond = microsecond;
        self
    }

    pub const fn with_timezone(mut self, timezone: Option<i16>) -> Self {
        self.timezone = timezone;
        self
    }

    /// Returns true if every field lies within its declared range. The
    /// timezone is not checked here; out-of-range offsets are handled at
    /// rendering time.
    pub(crate) const fn is_valid(&self) -> bool {
        self.hour <= 23
            && self.minute <= 59
            && self.second <= 59
            && self.millisecond <= 999
            && self.microsecond <= 999
    }
}

/// The am/pm half of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    /// Returns the designator for a 24-hour value.
    pub const fn of_hour(hour: u8) -> Self {
        if hour < 12 {
            Self::Am
        } else {
            Self::Pm
        }
    }
}

/// Normalizes any hour value into the 1-12 clock range.
///
/// This is a formatting convenience, not a validation gate: multiples of
/// 12 or 24 away from the clock range fold back into it, and hour 0 maps
/// to 12.
pub fn twelve_hour(hour: i32) -> u8 {
    ((i64::from(hour) - 1).rem_euclid(12) + 1) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_hour_passes_through_clock_values() {
        assert_eq!(twelve_hour(6), 6);
        assert_eq!(twelve_hour(12), 12);
    }

    #[test]
    fn twelve_hour_folds_afternoon_hours() {
        assert_eq!(twelve_hour(19), 7);
        assert_eq!(twelve_hour(23), 11);
    }

    #[test]
    fn twelve_hour_maps_zero_to_twelve() {
        assert_eq!(twelve_hour(0), 12);
        assert_eq!(twelve_hour(24), 12);
        assert_eq!(twelve_hour(-12), 12);
    }

    #[test]
    fn twelve_hour_normalizes_values_far_out_of_range() {
        assert_eq!(twelve_hour(11 + 12 * 3), 11);
        assert_eq!(twelve_hour(-13), 11);
    }

    #[test]
    fn twelve_hour_is_periodic_in_twelve() {
        for hour in -48..48 {
            let folded = twelve_hour(hour);
            assert!((1..=12).contains(&folded));
            assert_eq!(folded, twelve_hour(hour + 12));
            assert_eq!(folded, twelve_hour(hour + 24));
        }
    }

    #[test]
    fn try_new_rejects_out_of_range_fields() {
        assert!(TimeRecord::try_new(24, 0, 0, 0, 0).is_err());
        assert!(TimeRecord::try_new(0, 60, 0, 0, 0).is_err());
        assert!(TimeRecord::try_new(0, 0, 60, 0, 0).is_err());
        assert!(TimeRecord::try_new(0, 0, 0, 1000, 0).is_err());
        assert!(TimeRecord::try_new(0, 0, 0, 0, 1000).is_err());
        assert!(TimeRecord::try_new(23, 59, 59, 999, 999).is_ok());
    }

    #[test]
    fn default_record_is_midnight_without_timezone() {
        let record = TimeRecord::default();
        assert_eq!(record, TimeRecord::new());
        assert_eq!(record.hour, 0);
        assert_eq!(record.timezone, None);
    }

    #[test]
    fn builders_set_fields() {
        let record = TimeRecord::new()
            .with_hour(13)
            .with_minute(45)
            .with_timezone(Some(-240));
        assert_eq!(record.hour, 13);
        assert_eq!(record.minute, 45);
        assert_eq!(record.timezone, Some(-240));
    }

    #[test]
    fn meridiem_splits_the_day_at_noon() {
        assert_eq!(Meridiem::of_hour(0), Meridiem::Am);
        assert_eq!(Meridiem::of_hour(11), Meridiem::Am);
        assert_eq!(Meridiem::of_hour(12), Meridiem::Pm);
        assert_eq!(Meridiem::of_hour(23), Meridiem::Pm);
    }
}
