use std::borrow::Cow;

use serde_json::{Map, Number, Value};

use crate::model::{Dump, Scalar, Shape};

fn number_scalar(number: &Number) -> Scalar {
    if let Some(value) = number.as_i64() {
        Scalar::Int(value as i128)
    } else if let Some(value) = number.as_u64() {
        Scalar::UInt(value as u128)
    } else {
        Scalar::F64(number.as_f64().unwrap_or(f64::NAN))
    }
}

// Objects keep document order (serde_json is built with `preserve_order`).
impl Dump for Value {
    fn shape(&self) -> Shape<'_> {
        match self {
            Value::Null => Shape::Null,
            Value::Bool(value) => Shape::Scalar(Scalar::Bool(*value)),
            Value::Number(number) => Shape::Scalar(number_scalar(number)),
            Value::String(text) => Shape::String(Cow::Borrowed(text.as_str())),
            Value::Array(items) => {
                Shape::Enumerable(items.iter().map(|item| item as &dyn Dump).collect())
            }
            Value::Object(map) => map.shape(),
        }
    }

    fn type_name(&self) -> Cow<'static, str> {
        let name = match self {
            Value::Null => "Value",
            Value::Bool(_) => "bool",
            Value::Number(number) if number.is_i64() => "i64",
            Value::Number(number) if number.is_u64() => "u64",
            Value::Number(_) => "f64",
            Value::String(_) => "String",
            Value::Array(_) => "Array",
            Value::Object(_) => "Object",
        };
        Cow::Borrowed(name)
    }
}

impl Dump for Map<String, Value> {
    fn shape(&self) -> Shape<'_> {
        Shape::Dictionary(
            self.iter()
                .map(|(key, value)| (key as &dyn Dump, value as &dyn Dump))
                .collect(),
        )
    }

    fn type_name(&self) -> Cow<'static, str> {
        Cow::Borrowed("Object")
    }
}
