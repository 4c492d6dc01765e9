use serde::Serialize;
use std::fmt;

///
/// OrderDirection
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum OrderDirection {
    Asc,
    Desc,
}

impl OrderDirection {
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

impl fmt::Display for OrderDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

///
/// OrderDirective
///
/// Ordering requested by one field: one or more quoted columns sharing a
/// direction.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OrderDirective {
    columns: Vec<String>,
    direction: OrderDirection,
}

impl OrderDirective {
    #[must_use]
    pub const fn new(columns: Vec<String>, direction: OrderDirection) -> Self {
        Self { columns, direction }
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub const fn direction(&self) -> OrderDirection {
        self.direction
    }

    #[must_use]
    pub const fn is_ascending(&self) -> bool {
        matches!(self.direction, OrderDirection::Asc)
    }

    pub fn order_by(&self) -> impl Iterator<Item = OrderBy> + '_ {
        self.columns.iter().map(|column| OrderBy {
            column: column.clone(),
            direction: self.direction,
        })
    }
}

///
/// OrderBy
/// One flattened ORDER BY entry.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct OrderBy {
    pub column: String,
    pub direction: OrderDirection,
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.column, self.direction)
    }
}

/// Comma-join entries as they appear after `ORDER BY`.
#[must_use]
pub fn order_by_sql(entries: &[OrderBy]) -> String {
    entries
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
