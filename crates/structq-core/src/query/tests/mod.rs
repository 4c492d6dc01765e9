mod builder;

use crate::{
    dialect::{MySql, Postgres},
    model::{FieldKind, FieldModel, FieldType},
    query::{
        Combinator, Compiled, Compiler, ConditionGroup, ConditionLeaf, Node, Operator,
        OrderDirection, PageSpec, RenderOptions, build::like_pattern, render,
    },
    test_fixtures::{FixtureRecord, record_field},
    traits::Filter,
    value::Value,
};
use structq_derive::Filter;
use time::macros::{date, datetime};

///
/// Shared records
///

#[derive(Default, Filter)]
struct UserWhere {
    name: String,
    age: i32,
}

#[derive(Default, Filter)]
struct EitherWhere {
    name: String,
    age: i32,
}

#[derive(Default, Filter)]
struct MixedWhere {
    top: String,
    #[filter(embed)]
    either: EitherWhere,
    tail: String,
}

#[derive(Default, Filter)]
struct Paging {
    #[filter(op = "page")]
    page: i32,
    #[filter(op = "size")]
    size: i32,
}

#[derive(Default, Filter)]
struct SearchWhere {
    #[filter(op = "like", field = "a&(b|c)")]
    term: String,
    age: i32,
}

fn compile(record: &dyn Filter) -> Compiled {
    Compiler::new().compile(record)
}

fn build(record: &dyn Filter) -> ConditionGroup {
    Compiler::new().build(record)
}

fn text(value: &str) -> Value {
    Value::Text(value.to_string())
}
