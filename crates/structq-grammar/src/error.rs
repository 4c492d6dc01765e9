use thiserror::Error as ThisError;

///
/// TagError
///
/// Problems found while parsing a `field` expression or an `op` directive.
/// The runtime compiler treats any of these as "no predicate"; the derive
/// macro reports them as compile errors.
///

#[remain::sorted]
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum TagError {
    #[error("field expression has an empty name at position {index}")]
    EmptyAtom { index: usize },

    #[error("field expression is empty")]
    EmptyExpression,

    #[error("parenthesis at offset {offset} must wrap a whole name")]
    MisplacedParen { offset: usize },

    #[error("field expression '{expr}' has unbalanced parentheses")]
    UnbalancedParens { expr: String },

    #[error("unknown directive '{directive}'; expected an operator, a role, '-' or a template containing '?'")]
    UnknownDirective { directive: String },
}
