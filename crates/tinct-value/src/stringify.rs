//! Cycle-safe JSON stringification.
//!
//! Structured [`Arg`] values are shared handles and may contain reference
//! cycles, so feeding them to a plain serializer would recurse forever. The
//! serializer here tracks the handles on the current path and emits the
//! string `"[Circular]"` wherever a value is reached through itself.

use std::cell::RefCell;
use std::rc::Rc;

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::Arg;

/// Placeholder emitted in place of a value that contains itself.
const CIRCULAR: &str = "[Circular]";

/// Renders a value as JSON, breaking reference cycles with `"[Circular]"`.
///
/// Mirrors `JSON.stringify` semantics for the odd cases: `Undefined`
/// serializes as `null` inside arrays and is omitted as an object member.
/// Never fails and never panics, whatever the input contains.
#[must_use]
pub fn safe_stringify(arg: &Arg) -> String {
    let path = RefCell::new(Vec::new());
    let root = SafeArg { arg, path: &path };
    // Writing into a String cannot produce an I/O error and every key is a
    // string, so serialization of this shape is total.
    serde_json::to_string(&root).unwrap_or_else(|_| String::from("null"))
}

/// View of an [`Arg`] that carries the set of structured handles currently
/// being serialized, from the root down to this node.
struct SafeArg<'a> {
    arg: &'a Arg,
    path: &'a RefCell<Vec<*const ()>>,
}

impl SafeArg<'_> {
    fn on_path(&self, ptr: *const ()) -> bool {
        self.path.borrow().iter().any(|seen| *seen == ptr)
    }
}

impl Serialize for SafeArg<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.arg {
            Arg::Undefined | Arg::Null => serializer.serialize_unit(),
            Arg::Bool(b) => serializer.serialize_bool(*b),
            Arg::Number(n) => n.serialize(serializer),
            Arg::Str(s) => serializer.serialize_str(s),
            Arg::Array(items) => {
                let ptr = Rc::as_ptr(items).cast::<()>();
                if self.on_path(ptr) {
                    return serializer.serialize_str(CIRCULAR);
                }
                self.path.borrow_mut().push(ptr);
                let items = items.borrow();
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in &*items {
                    seq.serialize_element(&SafeArg { arg: item, path: self.path })?;
                }
                drop(items);
                let out = seq.end();
                self.path.borrow_mut().pop();
                out
            }
            Arg::Object(members) => {
                let ptr = Rc::as_ptr(members).cast::<()>();
                if self.on_path(ptr) {
                    return serializer.serialize_str(CIRCULAR);
                }
                self.path.borrow_mut().push(ptr);
                let members = members.borrow();
                let mut map = serializer.serialize_map(None)?;
                for (key, value) in &*members {
                    // JSON.stringify drops undefined members.
                    if matches!(value, Arg::Undefined) {
                        continue;
                    }
                    map.serialize_entry(key, &SafeArg { arg: value, path: self.path })?;
                }
                drop(members);
                let out = map.end();
                self.path.borrow_mut().pop();
                out
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stringify_primitives() {
        assert_eq!(safe_stringify(&Arg::Null), "null");
        assert_eq!(safe_stringify(&Arg::Undefined), "null");
        assert_eq!(safe_stringify(&Arg::from(true)), "true");
        assert_eq!(safe_stringify(&Arg::from(7)), "7");
        assert_eq!(safe_stringify(&Arg::from("a\"b")), r#""a\"b""#);
    }

    #[test]
    fn stringify_nested() {
        let arg = Arg::object([
            ("code", Arg::from(500)),
            ("tags", Arg::array([Arg::from("io"), Arg::Null])),
        ]);
        assert_eq!(safe_stringify(&arg), r#"{"code":500,"tags":["io",null]}"#);
    }

    #[test]
    fn object_members_keep_insertion_order() {
        let arg = Arg::object([("z", Arg::from(1)), ("a", Arg::from(2))]);
        assert_eq!(safe_stringify(&arg), r#"{"z":1,"a":2}"#);
    }

    #[test]
    fn undefined_member_is_omitted() {
        let arg = Arg::object([("a", Arg::Undefined), ("b", Arg::from(1))]);
        assert_eq!(safe_stringify(&arg), r#"{"b":1}"#);
    }

    #[test]
    fn undefined_array_element_is_null() {
        let arg = Arg::array([Arg::Undefined, Arg::from(1)]);
        assert_eq!(safe_stringify(&arg), "[null,1]");
    }

    #[test]
    fn self_referencing_object() {
        let arg = Arg::object([("a", Arg::from(1))]);
        arg.set("me", arg.clone());
        assert_eq!(safe_stringify(&arg), r#"{"a":1,"me":"[Circular]"}"#);
    }

    #[test]
    fn self_referencing_array() {
        let arg = Arg::array([Arg::from(1)]);
        arg.push(arg.clone());
        assert_eq!(safe_stringify(&arg), r#"[1,"[Circular]"]"#);
    }

    #[test]
    fn indirect_cycle() {
        let outer = Arg::object([("inner", Arg::Null)]);
        let inner = Arg::object([("outer", outer.clone())]);
        outer.set("inner", inner);
        assert_eq!(
            safe_stringify(&outer),
            r#"{"inner":{"outer":"[Circular]"}}"#
        );
    }

    #[test]
    fn shared_sibling_is_not_a_cycle() {
        let shared = Arg::object([("x", Arg::from(1))]);
        let arg = Arg::array([shared.clone(), shared]);
        assert_eq!(safe_stringify(&arg), r#"[{"x":1},{"x":1}]"#);
    }

    #[test]
    fn deep_nesting_terminates() {
        let mut arg = Arg::from(0);
        for _ in 0..64 {
            arg = Arg::array([arg]);
        }
        let rendered = safe_stringify(&arg);
        assert!(rendered.starts_with("[[[["));
        assert!(rendered.ends_with("]]]]"));
    }
}
