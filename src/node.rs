// SPDX-FileCopyrightText: The im-dotpath authors
// SPDX-License-Identifier: MPL-2.0

use crate::{Container, Key, Object};

/// Non-indexable value.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Scalar {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

/// Universal value type that paths are resolved against.
///
/// The shape of a value is classified once when it is converted into a
/// node. All operations then dispatch on the variant.
#[derive(Debug, Clone, PartialEq, derive_more::From)]
pub enum Node {
    Container(Container),
    Object(Object),
    Scalar(Scalar),
}

impl Default for Node {
    fn default() -> Self {
        Self::NULL
    }
}

impl Node {
    pub const NULL: Self = Self::Scalar(Scalar::Null);

    /// Create an empty container.
    #[must_use]
    pub fn container() -> Self {
        Self::Container(Container::new())
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Scalar(Scalar::Null))
    }

    /// Check if the node is a keyed container.
    ///
    /// Objects are not indexable, even though their attributes
    /// could be accessed by name.
    #[must_use]
    pub const fn is_indexable(&self) -> bool {
        matches!(self, Self::Container(_))
    }

    #[must_use]
    pub const fn as_container(&self) -> Option<&Container> {
        match self {
            Self::Container(container) => Some(container),
            Self::Object(_) | Self::Scalar(_) => None,
        }
    }

    pub fn as_container_mut(&mut self) -> Option<&mut Container> {
        match self {
            Self::Container(container) => Some(container),
            Self::Object(_) | Self::Scalar(_) => None,
        }
    }

    #[must_use]
    pub const fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(object) => Some(object),
            Self::Container(_) | Self::Scalar(_) => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Scalar(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Number of entries of a container, `None` otherwise.
    #[must_use]
    pub fn len(&self) -> Option<usize> {
        self.as_container().map(Container::len)
    }

    /// Check if the node has an entry or a set attribute with the given key.
    #[must_use]
    pub fn key_exists(&self, key: &Key) -> bool {
        match self {
            Self::Container(container) => container.contains_key(key),
            Self::Object(object) => object.is_attribute_set(&key.as_str()),
            Self::Scalar(_) => false,
        }
    }

    /// Single-level read of an entry or a set attribute.
    #[must_use]
    pub fn read(&self, key: &Key) -> Option<&Node> {
        match self {
            Self::Container(container) => container.get(key),
            Self::Object(object) => object.attribute(&key.as_str()),
            Self::Scalar(_) => None,
        }
    }

    /// Single-level write into a container or an object.
    ///
    /// Returns the value back to the caller if the node is a scalar.
    pub fn write(&mut self, key: Key, value: Node) -> Result<Option<Node>, Node> {
        match self {
            Self::Container(container) => Ok(container.insert(key, value)),
            Self::Object(object) => Ok(object.set_attribute(key.to_string(), value)),
            Self::Scalar(_) => Err(value),
        }
    }

    /// Single-level removal of a container entry.
    pub fn delete(&mut self, key: &Key) -> Option<Node> {
        self.as_container_mut()?.remove(key)
    }
}

impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Self::Scalar(Scalar::Bool(value))
    }
}

impl From<i64> for Node {
    fn from(value: i64) -> Self {
        Self::Scalar(Scalar::Int(value))
    }
}

impl From<i32> for Node {
    fn from(value: i32) -> Self {
        Self::Scalar(Scalar::Int(value.into()))
    }
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Self::Scalar(Scalar::Float(value))
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Self::Scalar(Scalar::String(value.to_owned()))
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Self::Scalar(Scalar::String(value))
    }
}

impl From<Key> for Node {
    fn from(key: Key) -> Self {
        match key {
            Key::Index(index) => index.into(),
            Key::Name(name) => name.into(),
        }
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::NULL, Into::into)
    }
}

impl<T: Into<Node>> From<Vec<T>> for Node {
    fn from(values: Vec<T>) -> Self {
        Self::Container(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Node>> FromIterator<T> for Node {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::Container(iter.into_iter().map(Into::into).collect())
    }
}
