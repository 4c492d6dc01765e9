use crate::{
    model::{FieldKind, FieldModel, FieldType, FilterModel, Slot},
    traits::Filter,
    value::Value,
};

///
/// FixtureRecord
///
/// Test-only `Filter` built at runtime from explicit field models and slots.
/// Use it for shapes the derive refuses to emit (unknown directives, raw
/// templates without a placeholder, out-of-band `Value`s).
/// Leaks its model to satisfy the static lifetime `Filter::model` requires.
///

pub(crate) struct FixtureRecord {
    model: &'static FilterModel,
    slots: Vec<FixtureSlot>,
}

enum FixtureSlot {
    Absent,
    Value(Value),
    Present(Value),
    Record(FixtureRecord),
}

impl FixtureRecord {
    pub(crate) fn builder(name: &'static str) -> FixtureBuilder {
        FixtureBuilder {
            name,
            fields: Vec::new(),
            slots: Vec::new(),
        }
    }
}

impl Filter for FixtureRecord {
    fn model(&self) -> &'static FilterModel {
        self.model
    }

    fn slot(&self, index: usize) -> Slot<'_> {
        match self.slots.get(index) {
            None | Some(FixtureSlot::Absent) => Slot::Absent,
            Some(FixtureSlot::Value(value)) => Slot::value(value.clone()),
            Some(FixtureSlot::Present(value)) => Slot::present(value.clone()),
            Some(FixtureSlot::Record(record)) => Slot::Record(record),
        }
    }
}

///
/// FixtureBuilder
///

pub(crate) struct FixtureBuilder {
    name: &'static str,
    fields: Vec<FieldModel>,
    slots: Vec<FixtureSlot>,
}

impl FixtureBuilder {
    /// Plain field; the field type is inferred from the value.
    pub(crate) fn value(self, field: &'static str, value: impl Into<Value>) -> Self {
        let value = value.into();
        let model = FieldModel::new(field, field_type(&value));

        self.push(model, FixtureSlot::Value(value))
    }

    /// Plain field with an explicit model (tags, declared type).
    pub(crate) fn field(self, model: FieldModel, value: impl Into<Value>) -> Self {
        self.push(model, FixtureSlot::Value(value.into()))
    }

    /// `Some(value)`: present even when zero.
    pub(crate) fn present(self, model: FieldModel, value: impl Into<Value>) -> Self {
        self.push(optional(model), FixtureSlot::Present(value.into()))
    }

    pub(crate) fn absent(self, model: FieldModel) -> Self {
        self.push(optional(model), FixtureSlot::Absent)
    }

    pub(crate) fn record(self, model: FieldModel, record: FixtureRecord) -> Self {
        self.push(model, FixtureSlot::Record(record))
    }

    pub(crate) fn build(self) -> FixtureRecord {
        let fields: &'static [FieldModel] = Box::leak(self.fields.into_boxed_slice());
        let model: &'static FilterModel = Box::leak(Box::new(FilterModel {
            name: self.name,
            fields,
        }));

        FixtureRecord {
            model,
            slots: self.slots,
        }
    }

    fn push(mut self, model: FieldModel, slot: FixtureSlot) -> Self {
        self.fields.push(model);
        self.slots.push(slot);
        self
    }
}

const fn optional(model: FieldModel) -> FieldModel {
    FieldModel {
        ty: model.ty.optional(),
        ..model
    }
}

/// Sub-record field model.
pub(crate) const fn record_field(name: &'static str) -> FieldModel {
    FieldModel::new(name, FieldType::scalar(FieldKind::Record))
}

fn field_type(value: &Value) -> FieldType {
    let kind = |value: &Value| match value {
        Value::Bool(_) => FieldKind::Bool,
        Value::Int(_) => FieldKind::Int,
        Value::Uint(_) => FieldKind::Uint,
        Value::Float(_) => FieldKind::Float,
        Value::Text(_) => FieldKind::Text,
        Value::Date(_) | Value::DateTime(_) | Value::Timestamp(_) => FieldKind::Temporal,
        Value::List(_) | Value::Null => FieldKind::Other,
    };

    match value {
        Value::List(items) => {
            let inner = items.first().map_or(FieldKind::Other, kind);
            FieldType::scalar(inner).list()
        }
        other => FieldType::scalar(kind(other)),
    }
}
