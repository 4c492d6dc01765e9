//! Core runtime for structq: values, the `Filter` introspection contract,
//! dialects, naming, configuration, and the query compiler that turns an
//! annotated record into a parameterized WHERE fragment.
#![warn(unreachable_pub)]

extern crate self as structq;

// public exports are one module level down
pub mod config;
pub mod dialect;
pub mod error;
pub mod model;
pub mod naming;
pub mod query;
pub mod traits;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

pub use structq_grammar as grammar;

///
/// Prelude
///
/// Vocabulary needed to declare and compile query structs.
/// No errors or configuration types are re-exported here.
///

pub mod prelude {
    pub use crate::{
        query::{Compiled, Compiler},
        traits::{Filter, FilterValue},
        value::Value,
    };
}
