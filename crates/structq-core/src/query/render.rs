use crate::{
    dialect::Dialect,
    query::tree::{ConditionGroup, ConditionLeaf, Node},
    value::Value,
};
use derive_more::{Deref, IntoIterator};
use serde::Serialize;
use structq_grammar::{Operator, PLACEHOLDER};
use tracing::debug;

///
/// Args
///
/// Positional arguments in placeholder order.
///

#[derive(Clone, Debug, Default, Deref, IntoIterator, PartialEq, Serialize)]
#[into_iterator(owned, ref)]
pub struct Args(Vec<Value>);

impl Args {
    #[must_use]
    pub fn into_vec(self) -> Vec<Value> {
        self.0
    }

    fn push(&mut self, value: Value) {
        self.0.push(value);
    }

    fn append(&mut self, other: &mut Self) {
        self.0.append(&mut other.0);
    }
}

impl From<Vec<Value>> for Args {
    fn from(values: Vec<Value>) -> Self {
        Self(values)
    }
}

///
/// Fragment
///
/// Clause text plus its arguments. Until `finish` is called the text uses
/// `?` markers regardless of dialect.
///

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Fragment {
    pub sql: String,
    pub args: Args,
}

impl Fragment {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }

    /// Rewrite every `?` marker into the dialect's numbered placeholder.
    #[must_use]
    pub fn finish(self, dialect: &dyn Dialect) -> Self {
        let mut sql = String::with_capacity(self.sql.len());
        let mut last = 0;

        for (n, at) in marker_positions(&self.sql).into_iter().enumerate() {
            sql.push_str(&self.sql[last..at]);
            dialect.placeholder(n + 1, &mut sql);
            last = at + 1;
        }
        sql.push_str(&self.sql[last..]);

        Self {
            sql,
            args: self.args,
        }
    }

    fn append(&mut self, mut other: Self, parenthesize: bool) {
        if parenthesize {
            self.sql.push('(');
        }
        self.sql.push_str(&other.sql);
        if parenthesize {
            self.sql.push(')');
        }
        self.args.append(&mut other.args);
    }
}

///
/// RenderOptions
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RenderOptions {
    pub expand_list_args: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            expand_list_args: true,
        }
    }
}

/// Render a condition tree into one clause with `?` markers.
///
/// The root is not parenthesized; every non-empty child group is rendered
/// on its own and spliced in as `( … )`.
#[must_use]
pub fn render(group: &ConditionGroup, options: RenderOptions) -> Fragment {
    let mut parts = Vec::with_capacity(group.nodes().len());

    for node in group.nodes() {
        match node {
            Node::Leaf(leaf) => {
                if let Some(fragment) = render_leaf(leaf, options) {
                    parts.push((fragment, is_compound(leaf)));
                }
            }
            Node::Group(child) => {
                let mut fragment = render(child, options);
                if !fragment.is_empty() {
                    fragment.sql = format!("({})", fragment.sql);
                    parts.push((fragment, false));
                }
            }
        }
    }

    // a compound leaf only needs its own parentheses next to siblings
    let wrap_compound = parts.len() > 1;
    let mut out = Fragment::default();
    for (i, (part, compound)) in parts.into_iter().enumerate() {
        if i > 0 {
            out.sql.push_str(group.combinator().keyword());
        }
        out.append(part, wrap_compound && compound);
    }

    out
}

// Multi-column leaves, and raw templates with a top-level AND/OR.
fn is_compound(leaf: &ConditionLeaf) -> bool {
    leaf.atoms() > 1
        || (matches!(leaf.operator(), Operator::Raw(_)) && has_top_level_logic(leaf.expr()))
}

fn has_top_level_logic(sql: &str) -> bool {
    let mut quote: Option<char> = None;
    let mut depth = 0_usize;
    let mut word = String::new();

    for c in sql.chars().chain(std::iter::once(' ')) {
        if let Some(open) = quote {
            if c == open {
                quote = None;
            }
            continue;
        }
        if c.is_ascii_alphanumeric() || c == '_' {
            word.push(c);
            continue;
        }
        if depth == 0 && (word.eq_ignore_ascii_case("and") || word.eq_ignore_ascii_case("or")) {
            return true;
        }
        word.clear();

        match c {
            '"' | '`' | '\'' => quote = Some(c),
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    false
}

fn render_leaf(leaf: &ConditionLeaf, options: RenderOptions) -> Option<Fragment> {
    let expr = leaf.expr();
    let mut values = leaf.values().iter();
    let mut out = Fragment::default();
    let mut last = 0;

    for at in marker_positions(expr) {
        out.sql.push_str(&expr[last..at]);
        last = at + 1;

        let Some(value) = values.next() else {
            debug!(expr, "more placeholders than values, leaf dropped");
            return None;
        };

        match value {
            Value::List(items) if options.expand_list_args => {
                let wrapped = expr[..at].trim_end().ends_with('(')
                    && expr[at + 1..].trim_start().starts_with(')');
                push_expanded(&mut out, items, wrapped);
            }
            _ => {
                out.sql.push(PLACEHOLDER);
                out.args.push(value.clone());
            }
        }
    }
    out.sql.push_str(&expr[last..]);

    if values.next().is_some() {
        debug!(expr, "surplus values ignored");
    }

    Some(out)
}

// One marker per element; bare markers get their own parentheses.
fn push_expanded(out: &mut Fragment, items: &[Value], wrapped: bool) {
    if !wrapped {
        out.sql.push('(');
    }
    if items.is_empty() {
        out.sql.push_str("NULL");
    }
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.sql.push_str(", ");
        }
        out.sql.push(PLACEHOLDER);
        out.args.push(item.clone());
    }
    if !wrapped {
        out.sql.push(')');
    }
}

// Byte offsets of `?` markers outside quoted identifiers and string literals.
fn marker_positions(sql: &str) -> Vec<usize> {
    let mut positions = Vec::new();
    let mut quote: Option<char> = None;

    for (at, c) in sql.char_indices() {
        match (quote, c) {
            (Some(open), c) if c == open => quote = None,
            (Some(_), _) => {}
            (None, '"' | '`' | '\'') => quote = Some(c),
            (None, PLACEHOLDER) => positions.push(at),
            (None, _) => {}
        }
    }

    positions
}
