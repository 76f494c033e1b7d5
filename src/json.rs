// SPDX-FileCopyrightText: The im-dotpath authors
// SPDX-License-Identifier: MPL-2.0

//! Conversion between [`serde_json::Value`] and [`Node`].

use serde_json::{Map, Number, Value};

use crate::{Container, Key, Node, Object, Scalar};

/// JSON objects become containers, numeric member names become
/// integer keys.
impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::NULL,
            Value::Bool(value) => value.into(),
            Value::Number(number) => number
                .as_i64()
                .map(Self::from)
                .or_else(|| number.as_f64().map(Self::from))
                .unwrap_or(Self::NULL),
            Value::String(value) => value.into(),
            Value::Array(values) => values.into_iter().collect(),
            Value::Object(members) => Self::Container(
                members
                    .into_iter()
                    .map(|(name, value)| (Key::from(name), Self::from(value)))
                    .collect(),
            ),
        }
    }
}

/// Lists become arrays, all other containers and objects become JSON
/// objects. Floats that cannot be represented in JSON become null.
impl From<Node> for Value {
    fn from(node: Node) -> Self {
        match node {
            Node::Container(container) => container_into_value(container),
            Node::Object(object) => object_into_value(&object),
            Node::Scalar(Scalar::Null) => Self::Null,
            Node::Scalar(Scalar::Bool(value)) => Self::Bool(value),
            Node::Scalar(Scalar::Int(value)) => Self::Number(value.into()),
            Node::Scalar(Scalar::Float(value)) => {
                Number::from_f64(value).map_or(Self::Null, Self::Number)
            }
            Node::Scalar(Scalar::String(value)) => Self::String(value),
        }
    }
}

fn container_into_value(container: Container) -> Value {
    if container.is_list() {
        return Value::Array(container.into_values().map(Value::from).collect());
    }
    Value::Object(
        container
            .into_iter()
            .map(|(key, value)| (key.to_string(), Value::from(value)))
            .collect::<Map<_, _>>(),
    )
}

fn object_into_value(object: &Object) -> Value {
    Value::Object(
        object
            .attributes()
            .map(|(name, value)| (name.to_owned(), Value::from(value.clone())))
            .collect(),
    )
}
