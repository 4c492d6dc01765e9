
use crate::{
    model::{FieldKind, FieldType, FilterModel, Slot},
    value::Value,
};
use time::{Date, OffsetDateTime, PrimitiveDateTime};
use tracing::debug;

///
/// Filter
///
/// Introspection contract for a query struct: a static field list plus a
/// per-call read of each field. Usually generated by `#[derive(Filter)]`.
///
/// `slot(i)` must describe `model().fields[i]`; out-of-range indexes read
/// as `Slot::Absent`.
///

pub trait Filter {
    fn model(&self) -> &'static FilterModel;

    fn slot(&self, index: usize) -> Slot<'_>;
}

impl<T: Filter + ?Sized> Filter for &T {
    fn model(&self) -> &'static FilterModel {
        (**self).model()
    }

    fn slot(&self, index: usize) -> Slot<'_> {
        (**self).slot(index)
    }
}

impl<T: Filter + ?Sized> Filter for Box<T> {
    fn model(&self) -> &'static FilterModel {
        (**self).model()
    }

    fn slot(&self, index: usize) -> Slot<'_> {
        (**self).slot(index)
    }
}

///
/// FilterValue
///
/// A field type that can be compared against a column.
///
/// `Option<T>` is the presence wrapper: `None` is absent, `Some(v)` is
/// always present, even when `v` is zero.
///

pub trait FilterValue {
    const TYPE: FieldType;

    fn to_value(&self) -> Value;

    fn to_slot(&self) -> Slot<'_> {
        Slot::value(self.to_value())
    }
}

macro_rules! impl_filter_value {
    ( $( $type:ty => $kind:ident ),* $(,)? ) => {
        $(
            impl FilterValue for $type {
                const TYPE: FieldType = FieldType::scalar(FieldKind::$kind);

                fn to_value(&self) -> Value {
                    Value::from(*self)
                }
            }
        )*
    };
}

impl_filter_value!(
    bool => Bool,
    i8 => Int,
    i16 => Int,
    i32 => Int,
    i64 => Int,
    u8 => Uint,
    u16 => Uint,
    u32 => Uint,
    u64 => Uint,
    f32 => Float,
    f64 => Float,
    Date => Temporal,
    PrimitiveDateTime => Temporal,
    OffsetDateTime => Temporal,
);

impl FilterValue for isize {
    const TYPE: FieldType = FieldType::scalar(FieldKind::Int);

    fn to_value(&self) -> Value {
        i64::try_from(*self).map_or_else(
            |_| {
                debug!(value = *self, "isize out of 64-bit range, read as NULL");
                Value::Null
            },
            Value::Int,
        )
    }
}

impl FilterValue for usize {
    const TYPE: FieldType = FieldType::scalar(FieldKind::Uint);

    fn to_value(&self) -> Value {
        u64::try_from(*self).map_or_else(
            |_| {
                debug!(value = *self, "usize out of 64-bit range, read as NULL");
                Value::Null
            },
            Value::Uint,
        )
    }
}

impl FilterValue for char {
    const TYPE: FieldType = FieldType::scalar(FieldKind::Text);

    fn to_value(&self) -> Value {
        Value::Text(self.to_string())
    }
}

impl FilterValue for str {
    const TYPE: FieldType = FieldType::scalar(FieldKind::Text);

    fn to_value(&self) -> Value {
        Value::Text(self.to_string())
    }
}

impl FilterValue for String {
    const TYPE: FieldType = FieldType::scalar(FieldKind::Text);

    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl FilterValue for Value {
    const TYPE: FieldType = FieldType::scalar(FieldKind::Other);

    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl<T: FilterValue + ?Sized> FilterValue for &T {
    const TYPE: FieldType = T::TYPE;

    fn to_value(&self) -> Value {
        (**self).to_value()
    }

    fn to_slot(&self) -> Slot<'_> {
        (**self).to_slot()
    }
}

impl<T: FilterValue + ?Sized> FilterValue for Box<T> {
    const TYPE: FieldType = T::TYPE;

    fn to_value(&self) -> Value {
        (**self).to_value()
    }

    fn to_slot(&self) -> Slot<'_> {
        (**self).to_slot()
    }
}

impl<T: FilterValue> FilterValue for [T] {
    const TYPE: FieldType = T::TYPE.list();

    fn to_value(&self) -> Value {
        Value::List(self.iter().map(FilterValue::to_value).collect())
    }
}

impl<T: FilterValue> FilterValue for Vec<T> {
    const TYPE: FieldType = T::TYPE.list();

    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

impl<T: FilterValue> FilterValue for Option<T> {
    const TYPE: FieldType = T::TYPE.optional();

    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, FilterValue::to_value)
    }

    fn to_slot(&self) -> Slot<'_> {
        match self {
            Some(inner) => match inner.to_slot() {
                Slot::Value { value, .. } => Slot::present(value),
                other => other,
            },
            None => Slot::Absent,
        }
    }
}
