//! The per-call formatting context.

use std::fmt;

use chrono::Local;

use crate::config::{Color, Config};
use crate::severity::Severity;

/// Named, colorized placeholder values handed to the template function.
///
/// Built fresh for every call and discarded once the template returns.
/// Every field has already passed through exactly one colorization step:
/// `msg` through the severity's colorizer (base when the severity has
/// none), the rest through the base colorizer.
///
/// The time fields each read the clock independently, so they can differ
/// by a sub-millisecond skew within a single call; templates must not
/// assume one shared instant.
pub struct FormattingContext<'a> {
    /// The raw message, colorized for its severity.
    pub msg: String,
    /// The uppercased severity label, in the base color.
    pub label: String,
    /// Wall-clock time, `H:MM:SS`, 24-hour clock.
    pub time24: String,
    /// Wall-clock time, `H:MM:SS AM|PM`.
    pub time12: String,
    /// Calendar date, `D/M/YYYY`.
    pub date: String,
    /// Milliseconds since the Unix epoch.
    pub unix: String,
    base: &'a Color,
}

impl<'a> FormattingContext<'a> {
    /// Builds the context for one formatting call.
    pub(crate) fn build(severity: Severity, config: &'a Config, raw_message: &str) -> Self {
        let base = config.color.base();
        let severity_color = config.color.severity_color(severity);
        let stamp = |content: &str, color: Option<&Color>| match color {
            Some(color) => color(content),
            None => base(content),
        };

        Self {
            msg: stamp(raw_message, severity_color),
            // The label stays in the base color even when the severity has
            // its own colorizer.
            label: stamp(severity.label(), None),
            time24: stamp(&Local::now().format("%-H:%M:%S").to_string(), None),
            time12: stamp(&Local::now().format("%-I:%M:%S %p").to_string(), None),
            date: stamp(&Local::now().format("%-d/%-m/%Y").to_string(), None),
            unix: stamp(&Local::now().timestamp_millis().to_string(), None),
            base,
        }
    }

    /// Colorizes arbitrary content for a custom template field.
    ///
    /// Applies `color` when given, the scheme's base colorizer otherwise -
    /// the same fallback rule the built-in fields were stamped with.
    pub fn stamp(&self, content: impl fmt::Display, color: Option<&Color>) -> String {
        let text = content.to_string();
        match color {
            Some(color) => color(&text),
            None => (self.base)(&text),
        }
    }
}

impl fmt::Debug for FormattingContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormattingContext")
            .field("msg", &self.msg)
            .field("label", &self.label)
            .field("time24", &self.time24)
            .field("time12", &self.time12)
            .field("date", &self.date)
            .field("unix", &self.unix)
            .finish_non_exhaustive()
    }
}
