//! The formatting entry point.

use tinct_value::Arg;

use crate::config::Config;
use crate::context::FormattingContext;
use crate::message::construct_message;
use crate::severity::Severity;

/// Formats one log message.
///
/// Reduces `args` per the configured strategy, builds the
/// [`FormattingContext`], and hands it to the configured template. Returns
/// the template's output together with the arguments the reduction left
/// unconsumed, for the caller's further use (structured metadata, sinks,
/// and so on - none of that happens here).
///
/// Nothing is caught, wrapped, or logged on the way through: a panic from
/// an injected colorizer or template propagates to the caller unchanged.
#[must_use]
pub fn format_message(severity: Severity, config: &Config, args: Vec<Arg>) -> (String, Vec<Arg>) {
    let (raw_message, residual) = construct_message(config.strategy, args);
    let context = FormattingContext::build(severity, config, &raw_message);
    let formatted = (config.template)(&context);
    (formatted, residual)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ColorScheme;
    use crate::strategy::Strategy;

    #[test]
    fn end_to_end_error_line() {
        let config = Config::builder()
            .strategy(Strategy::All)
            .color(ColorScheme::plain())
            .template(|ctx| format!("[{}] {}", ctx.label, ctx.msg))
            .build();

        let args = vec![
            Arg::from("failed"),
            Arg::object([("code", Arg::from(500))]),
        ];
        let (line, rest) = format_message(Severity::Error, &config, args);

        assert_eq!(line, r#"[ERROR] failed {"code":500}"#);
        assert!(rest.is_empty());
    }

    #[test]
    fn residuals_pass_through_untouched() {
        let config = Config::builder().strategy(Strategy::First).build();
        let meta = Arg::object([("request_id", Arg::from("abc"))]);
        let args = vec![Arg::from("accepted"), meta.clone()];

        let (line, rest) = format_message(Severity::Info, &config, args);
        assert_eq!(line, "[INFO] accepted");
        assert_eq!(rest, vec![meta]);
    }

    #[test]
    fn template_owns_the_output_shape() {
        let config = Config::builder()
            .strategy(Strategy::None)
            .template(|ctx| ctx.stamp("custom", None))
            .build();

        let (line, rest) = format_message(Severity::Debug, &config, vec![Arg::from(1)]);
        assert_eq!(line, "custom");
        assert_eq!(rest, vec![Arg::from(1)]);
    }

    #[test]
    fn fresh_context_every_call() {
        let config = Config::builder()
            .strategy(Strategy::All)
            .template(|ctx| ctx.unix.clone())
            .build();

        let (first, _) = format_message(Severity::Info, &config, vec![Arg::from("a")]);
        let (second, _) = format_message(Severity::Info, &config, vec![Arg::from("b")]);

        let first: i64 = first.parse().expect("unix millis");
        let second: i64 = second.parse().expect("unix millis");
        assert!(second >= first);
    }
}
