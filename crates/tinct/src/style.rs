//! Ready-made ANSI colorizers.
//!
//! Color application is injected: the formatter only ever calls the
//! functions the configuration carries. This module provides functions to
//! inject, built on the `console` crate, for callers that do not bring
//! their own.

use console::Style;

use crate::config::{ColorFn, ColorScheme};
use crate::severity::Severity;

/// Wraps a `console` style as an injectable colorizer.
///
/// # Example
///
/// ```
/// use console::Style;
/// use tinct::{ColorScheme, Severity, style};
///
/// let scheme = ColorScheme::new(style::styled(Style::new().dim()))
///     .with_severity(Severity::Error, style::styled(Style::new().red()));
/// ```
#[must_use]
pub fn styled(style: Style) -> ColorFn {
    Box::new(move |text| style.apply_to(text).to_string())
}

/// A colorizer that passes text through unchanged.
#[must_use]
pub fn identity() -> ColorFn {
    Box::new(str::to_owned)
}

impl ColorScheme {
    /// The usual terminal palette: dim base, blue debug, cyan info, yellow
    /// warnings, bold red errors, magenta trace.
    ///
    /// Styling still follows the `console` crate's terminal detection, so
    /// piped output stays plain.
    #[must_use]
    pub fn default_ansi() -> Self {
        ColorScheme::new(styled(Style::new().dim()))
            .with_severity(Severity::Trace, styled(Style::new().magenta()))
            .with_severity(Severity::Debug, styled(Style::new().blue()))
            .with_severity(Severity::Info, styled(Style::new().cyan()))
            .with_severity(Severity::Warn, styled(Style::new().yellow()))
            .with_severity(Severity::Error, styled(Style::new().red().bold()))
    }
}
