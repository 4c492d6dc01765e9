use crate::{
    dialect::Dialect,
    model::{FieldModel, FieldRole, Slot},
    naming::Namer,
    query::{
        order::{OrderDirection, OrderDirective},
        predicate::render_expr,
        tree::{ConditionGroup, ConditionLeaf},
    },
    traits::Filter,
    value::Value,
};
use std::borrow::Cow;
use structq_grammar::{Combinator, Directive, FieldExpr, Operator, column_list};
use tracing::{debug, trace};

///
/// BuildOptions
///
/// Capabilities and policy the builder consults while walking a record.
///

#[derive(Clone, Copy)]
pub struct BuildOptions<'a> {
    pub dialect: &'a dyn Dialect,
    pub namer: &'a dyn Namer,
    pub skip_zero_values: bool,
}

/// Build the condition tree for `record`. The root group is AND.
#[must_use]
pub fn build(record: &dyn Filter, options: &BuildOptions<'_>) -> ConditionGroup {
    build_group(record, Combinator::And, options)
}

fn build_group(
    record: &dyn Filter,
    combinator: Combinator,
    options: &BuildOptions<'_>,
) -> ConditionGroup {
    let model = record.model();
    let mut group = ConditionGroup::new(combinator);

    for (index, field) in model.fields.iter().enumerate() {
        match record.slot(index) {
            Slot::Absent => {
                trace!(record = model.name, field = field.name, "absent, skipped");
            }
            Slot::Record(inner) => {
                let combinator = match field.role {
                    FieldRole::Embedded => Combinator::Or,
                    FieldRole::Nested | FieldRole::Value => Combinator::And,
                };
                group.attach(build_group(inner, combinator, options));
            }
            Slot::Value { value, zero } => {
                if is_skipped(&value, zero, options) {
                    trace!(record = model.name, field = field.name, "zero value, skipped");
                    continue;
                }
                build_field(&mut group, field, value, options);
            }
        }
    }

    group
}

// Empty lists can never form a predicate, whatever the zero policy says.
fn is_skipped(value: &Value, zero: bool, options: &BuildOptions<'_>) -> bool {
    match value {
        Value::List(items) if items.is_empty() => true,
        _ => zero && options.skip_zero_values,
    }
}

fn build_field(
    group: &mut ConditionGroup,
    field: &FieldModel,
    value: Value,
    options: &BuildOptions<'_>,
) {
    let directive = field.op.map_or(Directive::Default, Directive::parse);
    if directive == Directive::Suppress {
        return;
    }

    let default_column = options.namer.column_name(field.name);
    let column = match field.column.map(str::trim) {
        Some(column) if !column.is_empty() => Cow::Borrowed(column),
        _ => Cow::Owned(default_column.clone()),
    };

    // pagination: explicit role, or an untagged integer named page/size
    let page_role = match directive {
        Directive::Page => Some(Directive::Page),
        Directive::Size => Some(Directive::Size),
        Directive::Default if default_column == "page" => Some(Directive::Page),
        Directive::Default if default_column == "size" => Some(Directive::Size),
        _ => None,
    };
    if let (Some(role), Some(n)) = (page_role, value.as_i64())
        && field.ty.is_integer()
    {
        if role == Directive::Page {
            group.page_mut().offer_page(n);
        } else {
            group.page_mut().offer_size(n);
        }
        return;
    }

    if directive.is_order()
        && let Some(flag) = value.as_bool()
    {
        push_order(group, field, directive, flag, &column, options);
        return;
    }

    let op = match directive {
        Directive::Op(op) => op,
        Directive::Default => default_operator(field, &value),
        other => {
            debug!(
                field = field.name,
                directive = ?other,
                "directive does not apply to this field type, dropped"
            );
            return;
        }
    };

    // a false flag selects the opposite null test
    let op = match (op, value.as_bool()) {
        (Operator::Null | Operator::NotNull, Some(false)) => op.inverted(),
        _ => op,
    };

    if let Some(leaf) = build_leaf(field, &column, op, value, options) {
        group.push_leaf(leaf);
    }
}

fn default_operator(field: &FieldModel, value: &Value) -> Operator<'static> {
    match value {
        Value::List(items) => {
            let temporal = field.ty.is_temporal_list() || items.iter().all(Value::is_temporal);
            if temporal {
                Operator::Between
            } else {
                Operator::In
            }
        }
        _ => Operator::Eq,
    }
}

fn build_leaf(
    field: &FieldModel,
    column: &str,
    op: Operator<'static>,
    value: Value,
    options: &BuildOptions<'_>,
) -> Option<ConditionLeaf> {
    let expr = match FieldExpr::parse(column) {
        Ok(expr) => expr,
        Err(err) => {
            debug!(field = field.name, column, error = %err, "bad field expression, dropped");
            return None;
        }
    };

    let Some(rendered) = render_expr(&expr, op, options.dialect) else {
        debug!(field = field.name, ?op, "operator renders no predicate, dropped");
        return None;
    };

    let Some(per_atom) = bind_values(op, value) else {
        debug!(field = field.name, ?op, "value does not fit operator, dropped");
        return None;
    };

    let mut values = Vec::with_capacity(per_atom.len() * rendered.atoms);
    for _ in 0..rendered.atoms {
        values.extend_from_slice(&per_atom);
    }

    Some(ConditionLeaf::new(rendered.text, op, rendered.atoms, values))
}

// Values bound by one atom of the predicate.
fn bind_values(op: Operator<'_>, value: Value) -> Option<Vec<Value>> {
    match op {
        Operator::Between | Operator::NotBetween => match value {
            Value::List(items) if items.len() == 2 => Some(items),
            _ => None,
        },
        Operator::Like => Some(vec![like_pattern(value)]),
        Operator::Null | Operator::NotNull => Some(Vec::new()),
        _ => Some(vec![value]),
    }
}

/// Wrap the value in `%…%` unless the caller already placed a wildcard.
pub(crate) fn like_pattern(value: Value) -> Value {
    let text = match value {
        Value::Text(text) => text,
        other => other.to_string(),
    };

    if has_unescaped_percent(&text) {
        Value::Text(text)
    } else {
        Value::Text(format!("%{text}%"))
    }
}

fn has_unescaped_percent(text: &str) -> bool {
    let mut escaped = false;

    for c in text.chars() {
        match c {
            '%' if !escaped => return true,
            '\\' => escaped = !escaped,
            _ => escaped = false,
        }
    }

    false
}

fn push_order(
    group: &mut ConditionGroup,
    field: &FieldModel,
    directive: Directive<'_>,
    flag: bool,
    column: &str,
    options: &BuildOptions<'_>,
) {
    let declared = if directive == Directive::Desc {
        OrderDirection::Desc
    } else {
        OrderDirection::Asc
    };
    let direction = if flag { declared } else { declared.reversed() };

    let columns: Vec<String> = column_list(column)
        .map(|name| options.dialect.quote(name))
        .collect();
    if columns.is_empty() {
        debug!(field = field.name, "order field names no columns, dropped");
        return;
    }

    group.push_order(OrderDirective::new(columns, direction));
}
