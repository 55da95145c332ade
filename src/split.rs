//! Combined date-time string splitting.

use crate::{
    options::{TimeDefaults, TimeSettings},
    parsers::parse_time,
    pattern::TimePattern,
    time::TimeRecord,
    TimeResult,
};

/// The two halves of a combined date-time string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitDateTime<'a> {
    pub date_string: &'a str,
    pub time_string: &'a str,
}

/// Splits `combined` into its date and time substrings.
///
/// The separator and time format come from the settings layers. When the
/// separator never occurs, the whole string is the date. Otherwise the
/// time format is compiled to count how many separator-delimited fields
/// the time portion itself consumes, and that many trailing fields (plus
/// one) form the time string. Formats like `"hh mm tt"`, where the
/// separator recurs inside the time portion, therefore split on the
/// correct occurrence.
pub fn split_date_time<'a>(
    combined: &'a str,
    settings: &TimeSettings,
    defaults: &TimeDefaults,
) -> SplitDateTime<'a> {
    let separator = settings.separator_or(defaults);
    if separator.is_empty() || !combined.contains(separator) {
        return SplitDateTime {
            date_string: combined,
            time_string: "",
        };
    }

    let pattern = TimePattern::compile(settings.time_format_or(defaults));
    let time_fields = pattern.count_in_literals(separator) + 1;
    let total_fields = combined.matches(separator).count() + 1;
    let date_fields = total_fields.saturating_sub(time_fields);
    if date_fields == 0 {
        // The time format consumes every field; nothing is left for the
        // date.
        return SplitDateTime {
            date_string: "",
            time_string: combined,
        };
    }

    // Byte position of the separator that ends the date portion.
    let mut split_at = 0;
    let mut search_from = 0;
    for _ in 0..date_fields {
        match combined[search_from..].find(separator) {
            Some(found) => {
                split_at = search_from + found;
                search_from = split_at + separator.len();
            }
            None => break,
        }
    }

    SplitDateTime {
        date_string: &combined[..split_at],
        time_string: &combined[split_at + separator.len()..],
    }
}

/// Result of [`parse_date_time`]. Date parsing is delegated to the caller,
/// which receives the date substring verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDateTime<'a> {
    pub date_string: &'a str,
    /// The parsed time portion, or `None` when the combined string held no
    /// time.
    pub time: Option<TimeRecord>,
}

/// Splits `combined` and parses its time portion with the effective time
/// format.
///
/// A combined string without a time portion yields `time: None`; a
/// malformed time portion fails with the same recoverable "Wrong time
/// format" error as [`parse_time`].
pub fn parse_date_time<'a>(
    combined: &'a str,
    settings: &TimeSettings,
    defaults: &TimeDefaults,
) -> TimeResult<ParsedDateTime<'a>> {
    let parts = split_date_time(combined, settings, defaults);
    if parts.time_string.is_empty() {
        return Ok(ParsedDateTime {
            date_string: parts.date_string,
            time: None,
        });
    }
    let time = parse_time(settings.time_format_or(defaults), parts.time_string)?;
    Ok(ParsedDateTime {
        date_string: parts.date_string,
        time: Some(time),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use alloc::string::String;

    #[test]
    fn splits_on_the_default_separator() {
        let parts = split_date_time(
            "3/6/1967 07:32",
            &TimeSettings::new(),
            &TimeDefaults::default(),
        );
        assert_eq!(
            parts,
            SplitDateTime {
                date_string: "3/6/1967",
                time_string: "07:32",
            }
        );
    }

    #[test]
    fn splits_on_a_supplied_separator() {
        let settings = TimeSettings::new().with_separator(Some(String::from("-")));
        let parts = split_date_time("3/6/1967-07:32", &settings, &TimeDefaults::default());
        assert_eq!(
            parts,
            SplitDateTime {
                date_string: "3/6/1967",
                time_string: "07:32",
            }
        );
    }

    #[test]
    fn accounts_for_separators_inside_the_time_format() {
        let settings = TimeSettings::new()
            .with_separator(Some(String::from(" ")))
            .with_time_format(Some(String::from("hh mm tt")));
        let parts = split_date_time("3/6/1967 07 32 am", &settings, &TimeDefaults::default());
        assert_eq!(
            parts,
            SplitDateTime {
                date_string: "3/6/1967",
                time_string: "07 32 am",
            }
        );
    }

    #[test]
    fn date_only_input_has_an_empty_time_string() {
        let parts = split_date_time("3/6/1967", &TimeSettings::new(), &TimeDefaults::default());
        assert_eq!(
            parts,
            SplitDateTime {
                date_string: "3/6/1967",
                time_string: "",
            }
        );
    }

    #[test]
    fn time_format_consuming_every_field_leaves_no_date() {
        let settings = TimeSettings::new().with_time_format(Some(String::from("hh mm tt")));
        let parts = split_date_time("07 32 am", &settings, &TimeDefaults::default());
        assert_eq!(
            parts,
            SplitDateTime {
                date_string: "",
                time_string: "07 32 am",
            }
        );
    }

    #[test]
    fn separators_inside_quoted_literals_count_once_rendered() {
        // The quoted span renders as "at ", so the time portion spans two
        // fields of the combined string.
        let settings = TimeSettings::new().with_time_format(Some(String::from("'at' HH:mm")));
        let parts = split_date_time("3/6/1967 at 07:32", &settings, &TimeDefaults::default());
        assert_eq!(
            parts,
            SplitDateTime {
                date_string: "3/6/1967",
                time_string: "at 07:32",
            }
        );
    }

    #[test]
    fn parse_date_time_returns_only_a_date_without_a_time_portion() {
        let parsed = parse_date_time("9/11/2001", &TimeSettings::new(), &TimeDefaults::default())
            .unwrap();
        assert_eq!(parsed.date_string, "9/11/2001");
        assert_eq!(parsed.time, None);
    }

    #[test]
    fn parse_date_time_parses_the_time_portion() {
        let settings = TimeSettings::new().with_time_format(Some(String::from("H:m:s.l")));
        let parsed = parse_date_time("7/4/1976 1:23:45.678", &settings, &TimeDefaults::default())
            .unwrap();
        assert_eq!(parsed.date_string, "7/4/1976");
        assert_eq!(
            parsed.time,
            Some(TimeRecord {
                hour: 1,
                minute: 23,
                second: 45,
                millisecond: 678,
                microsecond: 0,
                timezone: None,
            })
        );
    }

    #[test]
    fn parse_date_time_propagates_wrong_time_format() {
        let settings = TimeSettings::new().with_time_format(Some(String::from("q")));
        let err = parse_date_time("4/17/2008 11:22:33", &settings, &TimeDefaults::default())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
        assert!(err.message().contains("Wrong time format"));
    }
}
