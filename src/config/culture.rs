use std::fmt::Write;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Deserialize;

use crate::error::ConfigError;
use crate::model::Scalar;

/// Locale rules used to turn scalar values into text.
///
/// Patterns are `chrono` strftime strings. They are checked when the culture
/// is built, so formatting a scalar never fails afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Culture {
    name: String,
    decimal_separator: char,
    date_pattern: String,
    time_pattern: String,
}

// name, decimal separator, date pattern, time pattern
const PRESETS: &[(&str, char, &str, &str)] = &[
    ("invariant", '.', "%Y-%m-%d", "%H:%M:%S"),
    ("en-US", '.', "%m/%d/%Y", "%-I:%M:%S %p"),
    ("en-GB", '.', "%d/%m/%Y", "%H:%M:%S"),
    ("de-DE", ',', "%d.%m.%Y", "%H:%M:%S"),
    ("fr-FR", ',', "%d/%m/%Y", "%H:%M:%S"),
];

impl Culture {
    pub fn invariant() -> Self {
        Self {
            name: "invariant".to_string(),
            decimal_separator: '.',
            date_pattern: "%Y-%m-%d".to_string(),
            time_pattern: "%H:%M:%S".to_string(),
        }
    }

    /// Look up a preset by name. Matching ignores ASCII case; an empty name
    /// means the invariant culture.
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        let wanted = name.trim();
        if wanted.is_empty() {
            return Ok(Self::invariant());
        }

        PRESETS
            .iter()
            .find(|(preset, ..)| preset.eq_ignore_ascii_case(wanted))
            .map(|(preset, separator, date, time)| Self {
                name: preset.to_string(),
                decimal_separator: *separator,
                date_pattern: date.to_string(),
                time_pattern: time.to_string(),
            })
            .ok_or_else(|| ConfigError::UnknownCulture(wanted.to_string()))
    }

    pub fn custom(
        name: impl Into<String>,
        decimal_separator: char,
        date_pattern: impl Into<String>,
        time_pattern: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let culture = Self {
            name: name.into(),
            decimal_separator,
            date_pattern: date_pattern.into(),
            time_pattern: time_pattern.into(),
        };
        culture.check_patterns()?;
        Ok(culture)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    pub fn preset_names() -> impl Iterator<Item = &'static str> {
        PRESETS.iter().map(|(name, ..)| *name)
    }

    pub fn format(&self, scalar: &Scalar) -> String {
        match scalar {
            Scalar::Unit => "()".to_string(),
            Scalar::Bool(value) => value.to_string(),
            Scalar::Int(value) => value.to_string(),
            Scalar::UInt(value) => value.to_string(),
            Scalar::F32(value) => self.localize_decimal(value.to_string()),
            Scalar::F64(value) => self.localize_decimal(value.to_string()),
            Scalar::Duration(value) => self.localize_decimal(format!("{:?}", value)),
            Scalar::Date(date) => self.format_date(date),
            Scalar::Time(time) => self.format_time(time),
            Scalar::DateTime(stamp) => {
                format!("{} {}", self.format_date(&stamp.date()), self.format_time(&stamp.time()))
            }
            Scalar::Timestamp(stamp) => self.format_timestamp(stamp),
        }
    }

    fn localize_decimal(&self, text: String) -> String {
        if self.decimal_separator == '.' {
            text
        } else {
            text.replace('.', &self.decimal_separator.to_string())
        }
    }

    fn format_date(&self, date: &NaiveDate) -> String {
        let mut out = String::new();
        match write!(out, "{}", date.format(&self.date_pattern)) {
            Ok(()) => out,
            Err(_) => date.to_string(),
        }
    }

    fn format_time(&self, time: &NaiveTime) -> String {
        let mut out = String::new();
        match write!(out, "{}", time.format(&self.time_pattern)) {
            Ok(()) => out,
            Err(_) => time.to_string(),
        }
    }

    fn format_timestamp(&self, stamp: &DateTime<FixedOffset>) -> String {
        let local = stamp.naive_local();
        format!(
            "{} {} {}",
            self.format_date(&local.date()),
            self.format_time(&local.time()),
            stamp.offset()
        )
    }

    fn check_patterns(&self) -> Result<(), ConfigError> {
        let sample = NaiveDateTime::default();
        let mut scratch = String::new();

        if write!(scratch, "{}", sample.date().format(&self.date_pattern)).is_err() {
            return Err(self.invalid("date", &self.date_pattern));
        }
        scratch.clear();
        if write!(scratch, "{}", sample.time().format(&self.time_pattern)).is_err() {
            return Err(self.invalid("time", &self.time_pattern));
        }
        Ok(())
    }

    fn invalid(&self, field: &'static str, pattern: &str) -> ConfigError {
        ConfigError::InvalidPattern {
            culture: self.name.clone(),
            field,
            pattern: pattern.to_string(),
        }
    }
}

impl Default for Culture {
    fn default() -> Self {
        Self::invariant()
    }
}

impl TryFrom<String> for Culture {
    type Error = ConfigError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::from_name(&name)
    }
}
