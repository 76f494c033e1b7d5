// SPDX-FileCopyrightText: The im-dotpath authors
// SPDX-License-Identifier: MPL-2.0

use std::fmt;

use crate::Node;

/// Default value for lookups that fail.
///
/// Deferred defaults are only computed when they are actually needed.
pub enum Fallback<'a> {
    Value(Node),
    Deferred(Box<dyn FnOnce() -> Node + 'a>),
}

impl<'a> Fallback<'a> {
    pub fn deferred(compute: impl FnOnce() -> Node + 'a) -> Self {
        Self::Deferred(Box::new(compute))
    }

    #[must_use]
    pub fn resolve(self) -> Node {
        match self {
            Self::Value(value) => value,
            Self::Deferred(compute) => compute(),
        }
    }
}

impl Default for Fallback<'_> {
    fn default() -> Self {
        Self::Value(Node::NULL)
    }
}

impl fmt::Debug for Fallback<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

impl From<Node> for Fallback<'_> {
    fn from(value: Node) -> Self {
        Self::Value(value)
    }
}

impl From<&str> for Fallback<'_> {
    fn from(value: &str) -> Self {
        Self::Value(value.into())
    }
}

impl From<i64> for Fallback<'_> {
    fn from(value: i64) -> Self {
        Self::Value(value.into())
    }
}

impl From<bool> for Fallback<'_> {
    fn from(value: bool) -> Self {
        Self::Value(value.into())
    }
}

impl From<i32> for Fallback<'_> {
    fn from(value: i32) -> Self {
        Self::Value(value.into())
    }
}
