use crate::{
    config::CompilerConfig,
    dialect::{Ansi, Dialect},
    naming::{CaseNamer, Namer},
    query::{
        build::{BuildOptions, build},
        order::{OrderBy, order_by_sql},
        render::{Args, Fragment, RenderOptions, render},
        tree::ConditionGroup,
    },
    traits::Filter,
};
use serde::Serialize;
use std::fmt::{self, Write as _};
use tracing::{debug, debug_span};

///
/// Compiler
///
/// Turns a `Filter` record into a `Compiled` clause. Immutable once
/// configured and safe to share between threads.
///

pub struct Compiler {
    dialect: Box<dyn Dialect>,
    namer: Box<dyn Namer>,
    expand_list_args: bool,
    skip_zero_values: bool,
}

impl Compiler {
    #[must_use]
    pub fn new() -> Self {
        Self {
            dialect: Box::new(Ansi),
            namer: Box::new(CaseNamer::default()),
            expand_list_args: true,
            skip_zero_values: true,
        }
    }

    #[must_use]
    pub fn from_config(config: &CompilerConfig) -> Self {
        let mut namer = CaseNamer::new(config.naming);
        if let Some(prefix) = &config.column_prefix {
            namer = namer.with_prefix(prefix.as_str());
        }

        Self {
            dialect: config.dialect.boxed(),
            namer: Box::new(namer),
            expand_list_args: config.expand_list_args,
            skip_zero_values: config.skip_zero_values,
        }
    }

    #[must_use]
    pub fn with_dialect(mut self, dialect: impl Dialect + 'static) -> Self {
        self.dialect = Box::new(dialect);
        self
    }

    #[must_use]
    pub fn with_namer(mut self, namer: impl Namer + 'static) -> Self {
        self.namer = Box::new(namer);
        self
    }

    #[must_use]
    pub const fn expand_list_args(mut self, expand: bool) -> Self {
        self.expand_list_args = expand;
        self
    }

    #[must_use]
    pub const fn skip_zero_values(mut self, skip: bool) -> Self {
        self.skip_zero_values = skip;
        self
    }

    #[must_use]
    pub fn dialect(&self) -> &dyn Dialect {
        self.dialect.as_ref()
    }

    #[must_use]
    pub fn quote(&self, ident: &str) -> String {
        self.dialect.quote(ident)
    }

    /// Build the condition tree without rendering it.
    #[must_use]
    pub fn build(&self, record: &dyn Filter) -> ConditionGroup {
        build(record, &self.build_options())
    }

    /// Render a tree and number its placeholders for this dialect.
    #[must_use]
    pub fn render(&self, group: &ConditionGroup) -> Fragment {
        let options = RenderOptions {
            expand_list_args: self.expand_list_args,
        };

        render(group, options).finish(self.dialect())
    }

    #[must_use]
    pub fn compile(&self, record: &dyn Filter) -> Compiled {
        let span = debug_span!("structq.compile", record = record.model().name);
        let _guard = span.enter();

        let group = self.build(record);
        let Fragment { sql, args } = self.render(&group);

        let page = group.page();
        let compiled = Compiled {
            where_clause: sql,
            args,
            limit: page.limit(),
            offset: page.offset(),
            order_by: group
                .order()
                .iter()
                .flat_map(|directive| directive.order_by())
                .collect(),
        };

        debug!(
            clause = %compiled.where_clause,
            args = compiled.args.len(),
            limit = ?compiled.limit,
            offset = ?compiled.offset,
            order = compiled.order_by.len(),
            "compiled"
        );

        compiled
    }

    fn build_options(&self) -> BuildOptions<'_> {
        BuildOptions {
            dialect: self.dialect.as_ref(),
            namer: self.namer.as_ref(),
            skip_zero_values: self.skip_zero_values,
        }
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Compiler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Compiler")
            .field("dialect", &self.dialect.name())
            .field("expand_list_args", &self.expand_list_args)
            .field("skip_zero_values", &self.skip_zero_values)
            .finish_non_exhaustive()
    }
}

///
/// Compiled
///
/// Output of one compile call. Placeholders in `where_clause` are already in
/// the dialect's form and `args` lines up with them.
///

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Compiled {
    pub where_clause: String,
    pub args: Args,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    pub order_by: Vec<OrderBy>,
}

impl Compiled {
    /// True when no predicate was produced.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.where_clause.is_empty()
    }

    #[must_use]
    pub fn order_by_sql(&self) -> String {
        order_by_sql(&self.order_by)
    }

    /// Full row query. `table` is inserted as given.
    #[must_use]
    pub fn select_sql(&self, table: &str) -> Statement {
        let mut sql = format!("SELECT * FROM {table}");
        self.push_where(&mut sql);

        if !self.order_by.is_empty() {
            sql.push_str(" ORDER BY ");
            sql.push_str(&self.order_by_sql());
        }
        if let Some(limit) = self.limit {
            write!(sql, " LIMIT {limit}").ok();
        }
        if let Some(offset) = self.offset {
            write!(sql, " OFFSET {offset}").ok();
        }

        Statement {
            sql,
            args: self.args.clone(),
        }
    }

    /// Row count over the same filter; pagination and ordering are ignored.
    #[must_use]
    pub fn count_sql(&self, table: &str) -> Statement {
        let mut sql = format!("SELECT COUNT(*) FROM {table}");
        self.push_where(&mut sql);

        Statement {
            sql,
            args: self.args.clone(),
        }
    }

    pub fn count_with<E: Executor>(&self, table: &str, executor: &mut E) -> Result<u64, E::Error> {
        executor.count(&self.count_sql(table))
    }

    fn push_where(&self, sql: &mut String) {
        if !self.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.where_clause);
        }
    }
}

///
/// Statement
///

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Statement {
    pub sql: String,
    pub args: Args,
}

///
/// Executor
///
/// Runs statements produced from a `Compiled`. Connections, sessions and
/// transactions belong to the implementor.
///

pub trait Executor {
    type Error;

    fn count(&mut self, statement: &Statement) -> Result<u64, Self::Error>;
}
