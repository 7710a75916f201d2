//! Reduction of call-site arguments into the raw message string.

use tinct_value::Arg;

use crate::strategy::Strategy;

/// Collapses `args` into a raw message string per `strategy`, returning the
/// message and the arguments left unconsumed.
///
/// Residual arguments keep their original order; elements are only ever
/// dropped, never reordered or duplicated.
///
/// - [`Strategy::None`]: empty message, every argument left over.
/// - [`Strategy::First`]: the first argument's string form (`"undefined"`
///   when there are no arguments), the rest left over.
/// - [`Strategy::All`]: every argument's string form joined with single
///   spaces, nothing left over.
#[must_use]
pub fn construct_message(strategy: Strategy, args: Vec<Arg>) -> (String, Vec<Arg>) {
    match strategy {
        Strategy::None => (String::new(), args),
        Strategy::First => {
            let mut args = args.into_iter();
            let raw = args.next().unwrap_or(Arg::Undefined).coerce();
            (raw, args.collect())
        }
        Strategy::All => {
            let raw = args.iter().map(Arg::coerce).collect::<Vec<_>>().join(" ");
            (raw, Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_keeps_everything() {
        let args = vec![Arg::from(1), Arg::from("a")];
        let (raw, rest) = construct_message(Strategy::None, args.clone());
        assert_eq!(raw, "");
        assert_eq!(rest, args);
    }

    #[test]
    fn none_with_no_arguments() {
        let (raw, rest) = construct_message(Strategy::None, Vec::new());
        assert_eq!(raw, "");
        assert!(rest.is_empty());
    }

    #[test]
    fn first_takes_one() {
        let obj = Arg::object([("x", Arg::from(1))]);
        let args = vec![Arg::from(5), Arg::from("a"), obj.clone()];
        let (raw, rest) = construct_message(Strategy::First, args);
        assert_eq!(raw, "5");
        assert_eq!(rest, vec![Arg::from("a"), obj]);
    }

    #[test]
    fn first_with_no_arguments_is_undefined() {
        let (raw, rest) = construct_message(Strategy::First, Vec::new());
        assert_eq!(raw, "undefined");
        assert!(rest.is_empty());
    }

    #[test]
    fn all_joins_with_single_spaces() {
        let args = vec![
            Arg::from("a"),
            Arg::from(1),
            Arg::object([("x", Arg::from(1))]),
        ];
        let (raw, rest) = construct_message(Strategy::All, args);
        assert_eq!(raw, r#"a 1 {"x":1}"#);
        assert!(rest.is_empty());
    }

    #[test]
    fn all_tolerates_a_self_reference() {
        let arg = Arg::object([("a", Arg::from(1))]);
        arg.set("me", arg.clone());
        let (raw, rest) = construct_message(Strategy::All, vec![arg]);
        assert_eq!(raw, r#"{"a":1,"me":"[Circular]"}"#);
        assert!(rest.is_empty());
    }

    #[test]
    fn residuals_keep_input_order() {
        let args: Vec<Arg> = (0..6).map(Arg::from).collect();

        let (_, rest) = construct_message(Strategy::None, args.clone());
        assert_eq!(rest, args);

        let (_, rest) = construct_message(Strategy::First, args.clone());
        assert_eq!(rest, &args[1..]);

        let (_, rest) = construct_message(Strategy::All, args);
        assert!(rest.is_empty());
    }
}
