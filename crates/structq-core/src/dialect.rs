//! SQL dialect capability.
//!
//! The compiler only needs two things from a database flavour: how to quote
//! an identifier and how to spell the n-th positional placeholder.

use serde::{Deserialize, Serialize};

///
/// Dialect
///

pub trait Dialect: Send + Sync {
    /// Get the dialect name
    fn name(&self) -> &'static str;

    /// Append the quoted form of `ident` to `out`.
    ///
    /// Dotted identifiers (`user.name`) are quoted per segment.
    fn quote_into(&self, ident: &str, out: &mut String);

    /// Append the placeholder for the given index (1-based).
    ///
    /// - ANSI/MySQL/SQLite: `?`
    /// - PostgreSQL: `$1`, `$2`, …
    fn placeholder(&self, index: usize, out: &mut String);

    /// Quote into a fresh string.
    fn quote(&self, ident: &str) -> String {
        let mut out = String::with_capacity(ident.len() + 2);
        self.quote_into(ident, &mut out);
        out
    }
}

// Quote each dot-separated segment, doubling any embedded quote character.
fn quote_segments(ident: &str, quote: char, out: &mut String) {
    for (i, segment) in ident.split('.').enumerate() {
        if i > 0 {
            out.push('.');
        }
        let segment = segment.trim();
        if segment == "*" {
            out.push('*');
            continue;
        }

        out.push(quote);
        for c in segment.chars() {
            if c == quote {
                out.push(quote);
            }
            out.push(c);
        }
        out.push(quote);
    }
}

///
/// Ansi
/// Double-quoted identifiers, `?` placeholders.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct Ansi;

impl Dialect for Ansi {
    fn name(&self) -> &'static str {
        "ansi"
    }

    fn quote_into(&self, ident: &str, out: &mut String) {
        quote_segments(ident, '"', out);
    }

    fn placeholder(&self, _index: usize, out: &mut String) {
        out.push('?');
    }
}

///
/// MySql
///

#[derive(Clone, Copy, Debug, Default)]
pub struct MySql;

impl Dialect for MySql {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn quote_into(&self, ident: &str, out: &mut String) {
        quote_segments(ident, '`', out);
    }

    fn placeholder(&self, _index: usize, out: &mut String) {
        out.push('?');
    }
}

///
/// Postgres
///

#[derive(Clone, Copy, Debug, Default)]
pub struct Postgres;

impl Dialect for Postgres {
    fn name(&self) -> &'static str {
        "postgres"
    }

    fn quote_into(&self, ident: &str, out: &mut String) {
        quote_segments(ident, '"', out);
    }

    fn placeholder(&self, index: usize, out: &mut String) {
        out.push('$');
        out.push_str(&index.to_string());
    }
}

///
/// Sqlite
///

#[derive(Clone, Copy, Debug, Default)]
pub struct Sqlite;

impl Dialect for Sqlite {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn quote_into(&self, ident: &str, out: &mut String) {
        quote_segments(ident, '"', out);
    }

    fn placeholder(&self, _index: usize, out: &mut String) {
        out.push('?');
    }
}

///
/// DialectKind
/// Config-facing selector for the built-in dialects.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DialectKind {
    #[default]
    Ansi,
    #[serde(alias = "mariadb")]
    MySql,
    #[serde(alias = "postgresql", alias = "pg")]
    Postgres,
    Sqlite,
}

impl DialectKind {
    #[must_use]
    pub const fn dialect(self) -> &'static dyn Dialect {
        match self {
            Self::Ansi => &Ansi,
            Self::MySql => &MySql,
            Self::Postgres => &Postgres,
            Self::Sqlite => &Sqlite,
        }
    }

    #[must_use]
    pub fn boxed(self) -> Box<dyn Dialect> {
        match self {
            Self::Ansi => Box::new(Ansi),
            Self::MySql => Box::new(MySql),
            Self::Postgres => Box::new(Postgres),
            Self::Sqlite => Box::new(Sqlite),
        }
    }
}
