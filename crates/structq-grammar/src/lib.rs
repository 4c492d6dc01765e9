//! Tag grammar for structq query structs.
//!
//! Two small languages live here:
//!
//! - directives (`op = "..."`): operator keywords, roles such as `page` or
//!   `desc`, raw templates, and the `-` suppression marker
//! - field expressions (`field = "..."`): column names joined with `&`/`|`
//!   and wrapped in parentheses
//!
//! Both the derive macro and the core compiler depend on this crate, so a tag
//! that compiles is parsed the same way at runtime.

mod directive;
mod error;
mod expr;


pub use directive::{Directive, Operator};
pub use error::TagError;
pub use expr::{Atom, Combinator, FieldExpr};

///
/// CONSTANTS
///

/// Marker substituted by the executor with a positional argument.
pub const PLACEHOLDER: char = '?';

/// Split a comma-separated column list, dropping empty entries.
///
/// Ordering directives accept `field = "a,b"` to sort by several columns.
pub fn column_list(input: &str) -> impl Iterator<Item = &str> {
    input.split(',').map(str::trim).filter(|item| !item.is_empty())
}
