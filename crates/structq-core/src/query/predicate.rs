use crate::dialect::Dialect;
use structq_grammar::{FieldExpr, Operator, PLACEHOLDER};

///
/// RenderedExpr
///
/// Predicate text for a whole field expression plus the number of atoms it
/// expanded, so the caller knows how many times to replicate the values.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RenderedExpr {
    pub text: String,
    pub atoms: usize,
}

/// Append the predicate template for one column.
///
/// Returns false (and appends nothing) when the operator produces no text:
/// a raw template without a placeholder.
pub fn render_predicate(
    column: &str,
    op: Operator<'_>,
    dialect: &dyn Dialect,
    out: &mut String,
) -> bool {
    if let Operator::Raw(template) = op {
        if !template.contains(PLACEHOLDER) {
            return false;
        }
        out.push_str(template);

        return true;
    }

    dialect.quote_into(column, out);
    out.push(' ');
    out.push_str(op.keyword());

    match op {
        Operator::Null | Operator::NotNull => {}
        Operator::In | Operator::NotIn => out.push_str(" (?)"),
        Operator::Between | Operator::NotBetween => out.push_str(" ? AND ?"),
        _ => out.push_str(" ?"),
    }

    true
}

/// Expand every atom of `expr` with the same operator, joined left to right
/// by the atoms' combinators.
#[must_use]
pub fn render_expr(
    expr: &FieldExpr,
    op: Operator<'_>,
    dialect: &dyn Dialect,
) -> Option<RenderedExpr> {
    let mut text = String::new();
    let mut predicate = String::new();

    for atom in expr.atoms() {
        predicate.clear();
        if !render_predicate(&atom.name, op, dialect, &mut predicate) {
            return None;
        }
        atom.render_into(&predicate, &mut text);
    }

    Some(RenderedExpr {
        text,
        atoms: expr.len(),
    })
}
