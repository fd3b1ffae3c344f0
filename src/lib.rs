//! # adjunct
//!
//! Small pure helpers for lists, records, strings and tables of JSON-like
//! data.
//!
//! ## Overview
//!
//! Dynamic data is [`serde_json::Value`]; flat records are [`value::Row`].
//! Every helper returns new data and leaves its input alone. The larger
//! pieces are:
//!
//! - **Table reshaping**: [`table::pivot`] and [`table::unpivot`] between long
//!   and wide rows
//! - **Paths**: reading, writing and removing nested values
//!   ([`object::path`])
//! - **Structural matching**: [`object::where_all`] against a nested [`object::Spec`]
//! - **Shuffling**: Fisher–Yates with a pluggable random source
//!   ([`list::shuffle`])
//!
//! ## Feature Flags
//!
//! - `list`: list helpers, grouping, sorting, shuffling
//! - `table`: pivot and unpivot
//! - `object`: record helpers, paths, structural matching
//! - `string`: parsing and case conversion
//! - `math`, `logic`, `relation`, `types`: small numeric, truthiness,
//!   comparison and type predicates
//! - `monads`: unwrapping `Option`/`Result` into typed errors
//! - `random`: [`list::shuffle`] backed by `rand`
//! - `async`: future helpers ([`promise`])
//! - `serde`: `Serialize`/`Deserialize` on public data types
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use adjunct::prelude::*;
//! use serde_json::json;
//!
//! let long: Vec<Row> = serde_json::from_value(json!([
//!     {"id": 1, "attribute": "a", "value": 10},
//!     {"id": 1, "attribute": "b", "value": 20},
//! ])).unwrap();
//!
//! let wide = pivot("attribute", "value", &long);
//! assert_eq!(serde_json::Value::Object(wide[0].clone()), json!({"id": 1, "a": 10, "b": 20}));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every helper of the enabled features.
///
/// # Usage
///
/// ```rust
/// use adjunct::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::*;
    pub use crate::function::*;
    pub use crate::value::*;

    #[cfg(feature = "list")]
    pub use crate::list::*;

    #[cfg(feature = "table")]
    pub use crate::table::*;

    #[cfg(feature = "object")]
    pub use crate::object::*;

    #[cfg(feature = "string")]
    pub use crate::string::*;

    #[cfg(feature = "math")]
    pub use crate::math::*;

    #[cfg(feature = "logic")]
    pub use crate::logic::*;

    #[cfg(feature = "relation")]
    pub use crate::relation::*;

    #[cfg(feature = "types")]
    pub use crate::types::*;

    #[cfg(feature = "monads")]
    pub use crate::monads::*;

    #[cfg(feature = "async")]
    pub use crate::promise::*;
}

pub mod error;
pub mod function;
pub mod value;

#[cfg(feature = "list")]
pub mod list;

#[cfg(feature = "table")]
pub mod table;

#[cfg(feature = "object")]
pub mod object;

#[cfg(feature = "string")]
pub mod string;

#[cfg(feature = "math")]
pub mod math;

#[cfg(feature = "logic")]
pub mod logic;

#[cfg(feature = "relation")]
pub mod relation;

#[cfg(feature = "types")]
pub mod types;

#[cfg(feature = "monads")]
pub mod monads;

#[cfg(feature = "async")]
pub mod promise;
