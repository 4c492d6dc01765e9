//! ## Crate layout
//! - `config`: `CompilerConfig`, loadable from TOML.
//! - `dialect`: identifier quoting and placeholder styles.
//! - `grammar`: the `op`/`field` tag grammar.
//! - `model`: static field descriptors emitted by `#[derive(Filter)]`.
//! - `naming`: field name to column name mapping.
//! - `query`: the condition tree builder, renderer, and `Compiler`.
//! - `traits`: `Filter` and `FilterValue`.
//! - `value`: the argument value type.
//!
//! ```ignore
//! use structq::prelude::*;
//!
//! #[derive(Filter)]
//! struct UserQuery {
//!     name: String,
//!     #[filter(op = ">=")]
//!     age: u32,
//!     #[filter(op = "desc", field = "created_at")]
//!     newest_first: bool,
//! }
//!
//! let compiled = Compiler::new().compile(&query);
//! ```

pub use structq_core::*;
pub use structq_derive::Filter;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::{
        query::{Compiled, Compiler},
        traits::{Filter, FilterValue as _},
        value::Value,
    };
    pub use structq_derive::Filter;
}
