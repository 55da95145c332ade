//! Settings layers and their resolution.
//!
//! Effective values come from two explicit layers: a per-call
//! [`TimeSettings`] override and a caller-owned [`TimeDefaults`]. There is
//! no process-wide mutable state; callers that want shared defaults pass
//! the same `TimeDefaults` everywhere.

use alloc::string::String;

/// Per-call overrides for the engine's settings surface.
///
/// Unset fields fall back to [`TimeDefaults`] during resolution.
#[non_exhaustive]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TimeSettings {
    /// Separator between the date and time portions of a combined string.
    pub separator: Option<String>,
    /// Format pattern for the time portion.
    pub time_format: Option<String>,
    /// Offset from UTC in minutes applied when a `TimeRecord` carries none.
    pub timezone: Option<i16>,
}

impl TimeSettings {
    /// Creates an empty settings object; every value resolves to the
    /// defaults layer.
    pub const fn new() -> Self {
        Self {
            separator: None,
            time_format: None,
            timezone: None,
        }
    }

    /// Returns true if no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::new()
    }

    pub fn with_separator(mut self, separator: Option<String>) -> Self {
        self.separator = separator;
        self
    }

    pub fn with_time_format(mut self, time_format: Option<String>) -> Self {
        self.time_format = time_format;
        self
    }

    pub const fn with_timezone(mut self, timezone: Option<i16>) -> Self {
        self.timezone = timezone;
        self
    }

    /// The effective date-time separator.
    pub fn separator_or<'a>(&'a self, defaults: &'a TimeDefaults) -> &'a str {
        self.separator.as_deref().unwrap_or(&defaults.separator)
    }

    /// The effective time format pattern.
    pub fn time_format_or<'a>(&'a self, defaults: &'a TimeDefaults) -> &'a str {
        self.time_format.as_deref().unwrap_or(&defaults.time_format)
    }

    /// The effective default offset, if either layer defines one.
    pub fn timezone_or(&self, defaults: &TimeDefaults) -> Option<i16> {
        self.timezone.or(defaults.timezone)
    }

    /// Applies `patch` to this settings object in place and returns it.
    ///
    /// [`FieldPatch::Set`] overwrites a field whether or not it was set,
    /// [`FieldPatch::Clear`] removes it, and [`FieldPatch::Keep`] leaves it
    /// untouched.
    pub fn apply(&mut self, patch: &SettingsPatch) -> &mut Self {
        patch.separator.apply_to(&mut self.separator);
        patch.time_format.apply_to(&mut self.time_format);
        patch.timezone.apply_to(&mut self.timezone);
        self
    }
}

/// The defaults layer consulted when a [`TimeSettings`] field is unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeDefaults {
    /// Separator between date and time portions.
    pub separator: String,
    /// Time format pattern.
    pub time_format: String,
    /// Default offset from UTC in minutes, if any.
    pub timezone: Option<i16>,
}

impl Default for TimeDefaults {
    fn default() -> Self {
        Self {
            separator: String::from(" "),
            time_format: String::from("HH:mm"),
            timezone: None,
        }
    }
}

/// A single-field edit inside a [`SettingsPatch`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum FieldPatch<T> {
    /// Leave the target field as it is.
    #[default]
    Keep,
    /// Remove the target field's value.
    Clear,
    /// Overwrite the target field.
    Set(T),
}

impl<T: Clone> FieldPatch<T> {
    fn apply_to(&self, slot: &mut Option<T>) {
        match self {
            Self::Keep => {}
            Self::Clear => *slot = None,
            Self::Set(value) => *slot = Some(value.clone()),
        }
    }
}

/// A batch of settings edits applied with [`TimeSettings::apply`].
#[non_exhaustive]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SettingsPatch {
    pub separator: FieldPatch<String>,
    pub time_format: FieldPatch<String>,
    pub timezone: FieldPatch<i16>,
}
