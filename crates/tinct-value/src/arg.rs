//! The `Arg` value enum.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::stringify::safe_stringify;

/// A call-site argument value.
///
/// Primitives are stored by value. `Array` and `Object` are shared, mutable
/// handles: cloning one clones the handle, not the contents, so a value can
/// be inserted into itself and the resulting cycle survives stringification
/// (see [`safe_stringify`]).
///
/// Object members keep insertion order.
#[derive(Clone)]
pub enum Arg {
    /// An absent value, rendered as `undefined`.
    Undefined,
    /// An explicit null.
    Null,
    /// A boolean.
    Bool(bool),
    /// A number (integer or float, without loss for either).
    Number(serde_json::Number),
    /// A string.
    Str(String),
    /// An ordered sequence of values.
    Array(Rc<RefCell<Vec<Arg>>>),
    /// An insertion-ordered set of named members.
    Object(Rc<RefCell<Vec<(String, Arg)>>>),
}

impl Arg {
    /// Creates an array value from the given elements.
    #[must_use]
    pub fn array<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Arg>,
    {
        Arg::Array(Rc::new(RefCell::new(items.into_iter().collect())))
    }

    /// Creates an object value from the given members.
    #[must_use]
    pub fn object<I, K>(members: I) -> Self
    where
        I: IntoIterator<Item = (K, Arg)>,
        K: Into<String>,
    {
        Arg::Object(Rc::new(RefCell::new(
            members.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        )))
    }

    /// Sets a member on an object value, replacing an existing member with
    /// the same key. Returns `false` (and does nothing) if this value is not
    /// an object.
    pub fn set(&self, key: impl Into<String>, value: Arg) -> bool {
        let Arg::Object(members) = self else {
            return false;
        };
        let key = key.into();
        let mut members = members.borrow_mut();
        if let Some(entry) = members.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            members.push((key, value));
        }
        true
    }

    /// Appends an element to an array value. Returns `false` (and does
    /// nothing) if this value is not an array.
    pub fn push(&self, value: Arg) -> bool {
        let Arg::Array(items) = self else {
            return false;
        };
        items.borrow_mut().push(value);
        true
    }

    /// Returns true for values that stringify as JSON rather than by plain
    /// coercion: arrays, objects, and null.
    #[must_use]
    pub fn is_structured(&self) -> bool {
        matches!(self, Arg::Null | Arg::Array(_) | Arg::Object(_))
    }

    /// Reduces this value to its message-string form.
    ///
    /// Structured values go through [`safe_stringify`]; everything else uses
    /// its plain string form: `undefined`, `true`/`false`, the number's
    /// decimal rendering, or the raw (unquoted) string content.
    #[must_use]
    pub fn coerce(&self) -> String {
        match self {
            Arg::Undefined => String::from("undefined"),
            Arg::Bool(b) => b.to_string(),
            Arg::Number(n) => n.to_string(),
            Arg::Str(s) => s.clone(),
            Arg::Null | Arg::Array(_) | Arg::Object(_) => safe_stringify(self),
        }
    }
}

/// Structured variants compare by handle identity, like reference equality;
/// deep comparison is not defined for values that may contain cycles.
impl PartialEq for Arg {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Arg::Undefined, Arg::Undefined) | (Arg::Null, Arg::Null) => true,
            (Arg::Bool(a), Arg::Bool(b)) => a == b,
            (Arg::Number(a), Arg::Number(b)) => a == b,
            (Arg::Str(a), Arg::Str(b)) => a == b,
            (Arg::Array(a), Arg::Array(b)) => Rc::ptr_eq(a, b),
            (Arg::Object(a), Arg::Object(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Undefined => f.write_str("undefined"),
            Arg::Str(s) => write!(f, "{s:?}"),
            other => f.write_str(&safe_stringify(other)),
        }
    }
}

impl From<bool> for Arg {
    fn from(value: bool) -> Self {
        Arg::Bool(value)
    }
}

impl From<i32> for Arg {
    fn from(value: i32) -> Self {
        Arg::Number(value.into())
    }
}

impl From<i64> for Arg {
    fn from(value: i64) -> Self {
        Arg::Number(value.into())
    }
}

impl From<u64> for Arg {
    fn from(value: u64) -> Self {
        Arg::Number(value.into())
    }
}

impl From<f64> for Arg {
    fn from(value: f64) -> Self {
        // Non-finite floats have no JSON form; they degrade to null.
        serde_json::Number::from_f64(value).map_or(Arg::Null, Arg::Number)
    }
}

impl From<serde_json::Number> for Arg {
    fn from(value: serde_json::Number) -> Self {
        Arg::Number(value)
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::Str(value.to_owned())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Arg::Str(value)
    }
}

impl From<Vec<Arg>> for Arg {
    fn from(value: Vec<Arg>) -> Self {
        Arg::Array(Rc::new(RefCell::new(value)))
    }
}

impl From<serde_json::Value> for Arg {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Arg::Null,
            serde_json::Value::Bool(b) => Arg::Bool(b),
            serde_json::Value::Number(n) => Arg::Number(n),
            serde_json::Value::String(s) => Arg::Str(s),
            serde_json::Value::Array(items) => {
                Arg::array(items.into_iter().map(Arg::from))
            }
            serde_json::Value::Object(members) => {
                Arg::object(members.into_iter().map(|(k, v)| (k, Arg::from(v))))
            }
        }
    }
}
