//! Colorized, templated log-message formatting.
//!
//! The crate does one thing: turn a severity, a caller-owned [`Config`], and
//! a list of call-site arguments into a display string plus the arguments
//! that were not consumed building it. Emitting that string anywhere is the
//! caller's business; there is no sink, no level filtering, and no state
//! kept between calls.
//!
//! Formatting composes three steps:
//!
//! 1. [`construct_message`] reduces the argument list to a single raw
//!    message string according to the configured [`Strategy`].
//! 2. [`FormattingContext`] packages the raw message together with the
//!    uppercased severity label and wall-clock fields, each colorized by the
//!    scheme in the configuration.
//! 3. The caller's template function renders the context into the final
//!    string.
//!
//! # Example
//!
//! ```
//! use tinct::{Arg, ColorScheme, Config, Severity, Strategy, format_message};
//!
//! let config = Config::builder()
//!     .strategy(Strategy::All)
//!     .color(ColorScheme::plain())
//!     .template(|ctx| format!("[{}] {}", ctx.label, ctx.msg))
//!     .build();
//!
//! let args = vec![Arg::from("failed"), Arg::object([("code", Arg::from(500))])];
//! let (line, rest) = format_message(Severity::Error, &config, args);
//! assert_eq!(line, r#"[ERROR] failed {"code":500}"#);
//! assert!(rest.is_empty());
//! ```
//!
//! Colorizers and the template are plain injected functions; the bundled
//! [`style`] module offers ANSI colorizers built on the `console` crate for
//! callers that do not bring their own.

mod config;
mod context;
mod error;
mod format;
mod message;
mod severity;
mod strategy;
pub mod style;

pub use config::{Color, ColorFn, ColorScheme, Config, ConfigBuilder, TemplateFn};
pub use context::FormattingContext;
pub use error::FormatError;
pub use format::format_message;
pub use message::construct_message;
pub use severity::{ParseSeverityError, Severity};
pub use strategy::Strategy;

// Re-export the argument value model so callers need only one crate.
pub use tinct_value::{Arg, safe_stringify};
