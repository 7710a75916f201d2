//! Caller-owned formatter configuration.

use std::collections::HashMap;
use std::fmt;

use crate::context::FormattingContext;
use crate::severity::Severity;
use crate::strategy::Strategy;

/// An injected colorizer: decorates a string for display.
pub type Color = dyn Fn(&str) -> String + Send + Sync;

/// An owned [`Color`], as stored in a [`ColorScheme`].
pub type ColorFn = Box<Color>;

/// An injected template: renders a [`FormattingContext`] into the final
/// display string.
pub type TemplateFn = Box<dyn Fn(&FormattingContext<'_>) -> String + Send + Sync>;

/// Colorizers keyed by severity, with a base fallback.
///
/// Every context field is colorized exactly once: `msg` with the severity's
/// colorizer when one is registered, everything else (and `msg` when the
/// lookup misses) with `base`.
pub struct ColorScheme {
    base: ColorFn,
    severity: HashMap<Severity, ColorFn>,
}

impl ColorScheme {
    /// Creates a scheme with the given base colorizer and no per-severity
    /// entries.
    #[must_use]
    pub fn new(base: ColorFn) -> Self {
        Self { base, severity: HashMap::new() }
    }

    /// Creates a scheme whose colorizers all pass text through unchanged.
    #[must_use]
    pub fn plain() -> Self {
        Self::new(Box::new(str::to_owned))
    }

    /// Registers a colorizer for one severity.
    #[must_use]
    pub fn with_severity(mut self, severity: Severity, color: ColorFn) -> Self {
        self.severity.insert(severity, color);
        self
    }

    /// The base (fallback) colorizer.
    #[must_use]
    pub fn base(&self) -> &Color {
        &*self.base
    }

    /// The colorizer registered for `severity`, if any.
    #[must_use]
    pub fn severity_color(&self, severity: Severity) -> Option<&Color> {
        self.severity.get(&severity).map(|color| &**color)
    }
}

impl fmt::Debug for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorScheme")
            .field("severities", &self.severity.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

/// Immutable formatter configuration, supplied fresh on every call.
///
/// The formatter keeps no state of its own; everything it needs arrives
/// here: the reduction [`Strategy`], the [`ColorScheme`], and the template
/// function that produces the final string.
pub struct Config {
    /// How call-site arguments collapse into the raw message.
    pub strategy: Strategy,
    /// Colorizers applied to the context fields.
    pub color: ColorScheme,
    /// Renders the built context into the final string.
    pub template: TemplateFn,
}

impl Config {
    /// Creates a configuration using the builder pattern.
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

impl Default for Config {
    /// Space-joins all arguments, applies no color, and renders
    /// `[LABEL] message`.
    fn default() -> Self {
        ConfigBuilder::new().build()
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("strategy", &self.strategy)
            .field("color", &self.color)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Config`].
///
/// # Example
///
/// ```
/// use tinct::{ColorScheme, Config, Strategy};
///
/// let config = Config::builder()
///     .strategy(Strategy::First)
///     .color(ColorScheme::plain())
///     .template(|ctx| format!("{} {}", ctx.time24, ctx.msg))
///     .build();
/// assert_eq!(config.strategy, Strategy::First);
/// ```
pub struct ConfigBuilder {
    strategy: Strategy,
    color: ColorScheme,
    template: TemplateFn,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigBuilder {
    /// Creates a builder with the default strategy (`All`), a plain scheme,
    /// and a `[LABEL] message` template.
    #[must_use]
    pub fn new() -> Self {
        Self {
            strategy: Strategy::default(),
            color: ColorScheme::plain(),
            template: Box::new(|ctx| format!("[{}] {}", ctx.label, ctx.msg)),
        }
    }

    /// Sets the message construction strategy.
    #[must_use]
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the color scheme.
    #[must_use]
    pub fn color(mut self, color: ColorScheme) -> Self {
        self.color = color;
        self
    }

    /// Sets the template function.
    #[must_use]
    pub fn template<F>(mut self, template: F) -> Self
    where
        F: Fn(&FormattingContext<'_>) -> String + Send + Sync + 'static,
    {
        self.template = Box::new(template);
        self
    }

    /// Builds the configuration.
    #[must_use]
    pub fn build(self) -> Config {
        Config {
            strategy: self.strategy,
            color: self.color,
            template: self.template,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_lookup_and_fallback() {
        let scheme = ColorScheme::plain()
            .with_severity(Severity::Error, Box::new(|t| format!("<{t}>")));

        assert!(scheme.severity_color(Severity::Error).is_some());
        assert!(scheme.severity_color(Severity::Info).is_none());
        assert_eq!((scheme.base())("x"), "x");
    }

    #[test]
    fn builder_defaults() {
        let config = Config::default();
        assert_eq!(config.strategy, Strategy::All);
        assert!(config.color.severity_color(Severity::Error).is_none());
    }

    #[test]
    fn builder_overrides() {
        let config = Config::builder()
            .strategy(Strategy::None)
            .color(ColorScheme::plain().with_severity(Severity::Warn, Box::new(str::to_owned)))
            .build();
        assert_eq!(config.strategy, Strategy::None);
        assert!(config.color.severity_color(Severity::Warn).is_some());
    }
}
