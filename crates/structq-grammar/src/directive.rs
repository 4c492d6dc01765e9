use crate::{PLACEHOLDER, TagError};

///
/// Operator
///
/// Comparison selected for a predicate field. `Raw` carries a caller-written
/// template that already contains the placeholder marker.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Operator<'a> {
    Eq,
    Neq,
    Gt,
    Lt,
    Gte,
    Lte,
    Like,
    In,
    NotIn,
    Between,
    NotBetween,
    Null,
    NotNull,
    Raw(&'a str),
}

impl<'a> Operator<'a> {
    /// Parse an operator keyword, symbol, or raw template.
    #[must_use]
    pub fn parse(tag: &'a str) -> Option<Self> {
        let trimmed = tag.trim();
        let op = match normalize(trimmed).as_str() {
            "=" | "==" | "eq" => Self::Eq,
            "!=" | "<>" | "ne" | "neq" => Self::Neq,
            ">" | "gt" => Self::Gt,
            "<" | "lt" => Self::Lt,
            ">=" | "gte" => Self::Gte,
            "<=" | "lte" => Self::Lte,
            "like" => Self::Like,
            "in" => Self::In,
            "not in" | "not-in" | "not_in" | "nin" => Self::NotIn,
            "between" => Self::Between,
            "not between" | "not-between" | "not_between" => Self::NotBetween,
            "null" | "is null" => Self::Null,
            "not null" | "not-null" | "not_null" | "is not null" => Self::NotNull,
            _ if trimmed.contains(PLACEHOLDER) => Self::Raw(trimmed),
            _ => return None,
        };

        Some(op)
    }

    /// SQL keyword placed between the column and its placeholders.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Neq => "<>",
            Self::Gt => ">",
            Self::Lt => "<",
            Self::Gte => ">=",
            Self::Lte => "<=",
            Self::Like => "LIKE",
            Self::In => "IN",
            Self::NotIn => "NOT IN",
            Self::Between => "BETWEEN",
            Self::NotBetween => "NOT BETWEEN",
            Self::Null => "IS NULL",
            Self::NotNull => "IS NOT NULL",
            Self::Raw(_) => "",
        }
    }

    /// Number of values each rendered atom binds.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Null | Self::NotNull => 0,
            Self::Between | Self::NotBetween => 2,
            _ => 1,
        }
    }

    #[must_use]
    pub const fn is_range(self) -> bool {
        matches!(self, Self::Between | Self::NotBetween)
    }

    /// Opposite null test; every other operator is returned unchanged.
    #[must_use]
    pub const fn inverted(self) -> Self {
        match self {
            Self::Null => Self::NotNull,
            Self::NotNull => Self::Null,
            other => other,
        }
    }
}

///
/// Directive
///
/// Interpretation of a field's `op` tag.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Directive<'a> {
    /// No tag, or an empty one: the compiler picks the operator.
    Default,
    /// `-`: the field never contributes to the query.
    Suppress,
    Page,
    Size,
    Asc,
    Desc,
    Op(Operator<'a>),
    Unknown(&'a str),
}

impl<'a> Directive<'a> {
    #[must_use]
    pub fn parse(tag: &'a str) -> Self {
        let trimmed = tag.trim();

        match normalize(trimmed).as_str() {
            "" => Self::Default,
            "-" => Self::Suppress,
            "page" => Self::Page,
            "size" => Self::Size,
            "asc" => Self::Asc,
            "desc" => Self::Desc,
            _ => Operator::parse(trimmed).map_or(Self::Unknown(trimmed), Self::Op),
        }
    }

    /// Like `parse`, but reject directives the compiler would ignore.
    pub fn parse_strict(tag: &'a str) -> Result<Self, TagError> {
        match Self::parse(tag) {
            Self::Unknown(directive) => Err(TagError::UnknownDirective {
                directive: directive.to_string(),
            }),
            directive => Ok(directive),
        }
    }

    #[must_use]
    pub const fn is_order(self) -> bool {
        matches!(self, Self::Asc | Self::Desc)
    }
}

// lowercase and collapse inner whitespace so "NOT   IN" matches "not in"
fn normalize(tag: &str) -> String {
    tag.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_ascii_lowercase()
}
