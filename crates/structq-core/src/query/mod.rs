//! Query compilation: build a condition tree from a record, then render it.
//!
//! Pipeline:
//! - `build`: walk the record's `FilterModel`, classify each field
//! - `predicate`: expand a field expression into predicate text
//! - `render`: turn the tree into one parameterized clause
//! - `compile`: the `Compiler` entry point and its output

mod build;
mod compile;
mod order;
mod page;
mod predicate;
mod render;
mod tree;

#[cfg(test)]
mod tests;

pub use build::{BuildOptions, build};
pub use compile::{Compiled, Compiler, Executor, Statement};
pub use order::{OrderBy, OrderDirection, OrderDirective, order_by_sql};
pub use page::PageSpec;
pub use predicate::{RenderedExpr, render_expr, render_predicate};
pub use render::{Args, Fragment, RenderOptions, render};
pub use tree::{ConditionGroup, ConditionLeaf, Node};

pub use structq_grammar::{Combinator, Operator};
