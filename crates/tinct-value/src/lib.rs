//! Call-site argument values for the tinct formatter.
//!
//! Log call sites hand the formatter an ordered list of arbitrary-typed
//! values. This crate provides that value model:
//!
//! - [`Arg`] - a JSON-like value enum whose structured variants are shared
//!   handles, so self-referencing data is representable
//! - [`safe_stringify`] - JSON rendering that marks reference cycles with
//!   `"[Circular]"` instead of failing or looping
//!
//! # Example
//!
//! ```
//! use tinct_value::{Arg, safe_stringify};
//!
//! let obj = Arg::object([("code", Arg::from(500))]);
//! assert_eq!(safe_stringify(&obj), r#"{"code":500}"#);
//!
//! // A cycle is rendered, not an error.
//! obj.set("inner", obj.clone());
//! assert_eq!(safe_stringify(&obj), r#"{"code":500,"inner":"[Circular]"}"#);
//! ```

mod arg;
mod stringify;

pub use arg::Arg;
pub use stringify::safe_stringify;
