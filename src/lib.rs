//! Deep cloning for plain key-value mappings.
//!
//! Models the dynamic documents a site configuration lives in (JSON / TOML
//! shaped) as [`Value`], and provides one core operation: [`clone_deep`],
//! which rebuilds every nested plain mapping so that the result shares no
//! mapping with the input. Anything that is not a plain mapping is left
//! alone: primitives are copied by value, arrays keep their shared backing,
//! and a non-mapping input produces `None` rather than an error.
//!
//! # Example
//!
//! ```ignore
//! let doc = map! { "a" => 1, "b" => map! { "b1" => "b1" } };
//! let copy = clone_deep(&doc).unwrap();
//! assert_eq!(copy, doc);
//! ```

mod clone;
mod error;
mod map_macro;
mod value;

pub use clone::clone_deep;
pub use error::ValueError;
pub use value::{Datetime, Map, Value, ValueKind};
