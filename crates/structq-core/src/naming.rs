//! Field name → column name mapping.

use convert_case::{Case, Casing};
use serde::{Deserialize, Serialize};

///
/// Namer
///
/// Maps a struct field name to the default column name used when the field
/// carries no `field` tag.
///

pub trait Namer: Send + Sync {
    fn column_name(&self, field: &str) -> String;
}

impl<F> Namer for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn column_name(&self, field: &str) -> String {
        self(field)
    }
}

///
/// NamingCase
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NamingCase {
    /// Keep the field name as written.
    Preserve,
    #[default]
    Snake,
    Camel,
    Pascal,
    Kebab,
    UpperSnake,
    Lower,
}

impl NamingCase {
    #[must_use]
    pub fn apply(self, name: &str) -> String {
        let case = match self {
            Self::Preserve => return name.to_string(),
            Self::Snake => Case::Snake,
            Self::Camel => Case::Camel,
            Self::Pascal => Case::Pascal,
            Self::Kebab => Case::Kebab,
            Self::UpperSnake => Case::UpperSnake,
            Self::Lower => Case::Lower,
        };

        name.to_case(case)
    }
}

///
/// CaseNamer
///
/// Case conversion with an optional prefix such as a table alias.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CaseNamer {
    case: NamingCase,
    prefix: Option<String>,
}

impl CaseNamer {
    #[must_use]
    pub const fn new(case: NamingCase) -> Self {
        Self { case, prefix: None }
    }

    /// Prefix every column, e.g. `"u."` for an aliased table.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        self.prefix = (!prefix.is_empty()).then_some(prefix);
        self
    }
}

impl Namer for CaseNamer {
    fn column_name(&self, field: &str) -> String {
        let column = self.case.apply(field);

        match &self.prefix {
            Some(prefix) => format!("{prefix}{column}"),
            None => column,
        }
    }
}
