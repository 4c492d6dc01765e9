//! Static field descriptors for query structs.
//!
//! `#[derive(Filter)]` emits one `FilterModel` per struct; the compiler walks
//! it instead of inspecting types at runtime.

use crate::{traits::Filter, value::Value};
use std::fmt;

///
/// FieldKind
///
/// Lossy projection of a field's Rust type onto the classes the compiler
/// cares about.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FieldKind {
    Bool,
    Float,
    Int,
    Other,
    Record,
    Temporal,
    Text,
    Uint,
}

impl FieldKind {
    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(self, Self::Int | Self::Uint)
    }
}

///
/// FieldType
///
/// Kind plus the two wrappers that change how a field is read:
/// `list` for `Vec<T>`, `optional` for `Option<T>`.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct FieldType {
    pub kind: FieldKind,
    pub list: bool,
    pub optional: bool,
}

impl FieldType {
    #[must_use]
    pub const fn scalar(kind: FieldKind) -> Self {
        Self {
            kind,
            list: false,
            optional: false,
        }
    }

    #[must_use]
    pub const fn list(self) -> Self {
        Self { list: true, ..self }
    }

    #[must_use]
    pub const fn optional(self) -> Self {
        Self {
            optional: true,
            ..self
        }
    }

    #[must_use]
    pub const fn is_integer(self) -> bool {
        !self.list && self.kind.is_integer()
    }

    #[must_use]
    pub const fn is_bool(self) -> bool {
        !self.list && matches!(self.kind, FieldKind::Bool)
    }

    /// A list of dates or times, compiled to `BETWEEN` by default.
    #[must_use]
    pub const fn is_temporal_list(self) -> bool {
        self.list && matches!(self.kind, FieldKind::Temporal)
    }
}

///
/// FieldRole
///

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum FieldRole {
    /// Plain value: predicate, pagination, or ordering.
    #[default]
    Value,
    /// Named sub-record, AND-grouped.
    Nested,
    /// Embedded sub-record, OR-grouped.
    Embedded,
}

///
/// FieldModel
///
/// Descriptor for one field: its name, type shape, role, and raw tags.
/// Tags stay unparsed here; the compiler interprets them per call.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FieldModel {
    pub name: &'static str,
    pub ty: FieldType,
    pub role: FieldRole,
    /// `op` tag: operator, role keyword, raw template, or `-`.
    pub op: Option<&'static str>,
    /// `field` tag: column expression override.
    pub column: Option<&'static str>,
}

impl FieldModel {
    #[must_use]
    pub const fn new(name: &'static str, ty: FieldType) -> Self {
        Self {
            name,
            ty,
            role: FieldRole::Value,
            op: None,
            column: None,
        }
    }

    #[must_use]
    pub const fn op(self, op: &'static str) -> Self {
        Self {
            op: Some(op),
            ..self
        }
    }

    #[must_use]
    pub const fn column(self, column: &'static str) -> Self {
        Self {
            column: Some(column),
            ..self
        }
    }

    #[must_use]
    pub const fn nested(self) -> Self {
        Self {
            role: FieldRole::Nested,
            ..self
        }
    }

    #[must_use]
    pub const fn embedded(self) -> Self {
        Self {
            role: FieldRole::Embedded,
            ..self
        }
    }
}

///
/// FilterModel
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FilterModel {
    pub name: &'static str,
    pub fields: &'static [FieldModel],
}

impl FilterModel {
    #[must_use]
    pub fn field(&self, name: &str) -> Option<(usize, &FieldModel)> {
        self.fields
            .iter()
            .enumerate()
            .find(|(_, field)| field.name == name)
    }
}

///
/// Slot
///
/// Current content of one field, read through `Filter::slot`.
///

pub enum Slot<'a> {
    /// Nothing to compile: `None`, or an index past the last field.
    Absent,
    /// A value, flagged when it equals its type's zero value.
    Value { value: Value, zero: bool },
    /// A sub-record compiled as its own group.
    Record(&'a dyn Filter),
}

impl Slot<'_> {
    /// Wrap a value, deriving the zero flag from the value itself.
    #[must_use]
    pub fn value(value: Value) -> Self {
        let zero = value.is_zero();

        Self::Value { value, zero }
    }

    /// Wrap a value that was explicitly provided, so it is never zero.
    #[must_use]
    pub const fn present(value: Value) -> Self {
        Self::Value { value, zero: false }
    }

    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl fmt::Debug for Slot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => f.write_str("Absent"),
            Self::Value { value, zero } => f
                .debug_struct("Value")
                .field("value", value)
                .field("zero", zero)
                .finish(),
            Self::Record(record) => f.debug_tuple("Record").field(&record.model().name).finish(),
        }
    }
}
