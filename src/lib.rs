//! json-cow — a borrow-aware JSON value model.
//!
//! Provides [`JsonValue`], a tagged union covering null, integers, booleans,
//! text, floats, arrays, and objects, and [`Json`], a wrapper that also
//! represents "no value at all" as distinct from an explicit null. Text may
//! borrow from a caller-supplied buffer (`Cow`) instead of copying.
//!
//! Every conversion in the crate is total: building values from native types
//! never fails.
//!
//! ```
//! use json_cow::{Json, JsonValue};
//! use std::collections::BTreeMap;
//!
//! let doc: Json = BTreeMap::from([
//!     ("name", "Alice".into()),
//!     ("age", 20i64.into()),
//!     ("fax", Json::from(None)),
//! ])
//! .into();
//! assert!(doc.has_value());
//! ```

mod interop;
mod value;

pub use value::{Json, JsonValue};
