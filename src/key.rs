// SPDX-FileCopyrightText: The im-dotpath authors
// SPDX-License-Identifier: MPL-2.0

use std::borrow::Cow;

use crate::{Error, Node, Scalar};

/// Key of an entry in a [`Container`](crate::Container).
///
/// Strings that spell a canonical decimal integer are normalized into
/// [`Key::Index`] on conversion, i.e. `"1"` and `1` address the same entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum Key {
    #[display(fmt = "{}", _0)]
    Index(i64),
    #[display(fmt = "{}", _0)]
    Name(String),
}

impl Key {
    #[must_use]
    pub const fn as_index(&self) -> Option<i64> {
        match self {
            Self::Index(index) => Some(*index),
            Self::Name(_) => None,
        }
    }

    /// The key as it appears in a dot path.
    #[must_use]
    pub fn as_str(&self) -> Cow<'_, str> {
        match self {
            Self::Index(index) => Cow::Owned(index.to_string()),
            Self::Name(name) => Cow::Borrowed(name),
        }
    }
}

/// Parse a canonical decimal integer.
///
/// Rejects leading zeros, a leading `+`, `-0` and values outside of `i64`.
fn parse_canonical_index(s: &str) -> Option<i64> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    let canonical = match digits.as_bytes() {
        [b'0'] => digits.len() == s.len(),
        [b'1'..=b'9', rest @ ..] => rest.iter().all(u8::is_ascii_digit),
        _ => false,
    };
    if !canonical {
        return None;
    }
    s.parse().ok()
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        parse_canonical_index(s).map_or_else(|| Self::Name(s.to_owned()), Self::Index)
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        parse_canonical_index(&s).map_or(Self::Name(s), Self::Index)
    }
}

impl From<&String> for Key {
    fn from(s: &String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<i64> for Key {
    fn from(index: i64) -> Self {
        Self::Index(index)
    }
}

impl From<i32> for Key {
    fn from(index: i32) -> Self {
        Self::Index(index.into())
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        i64::try_from(index).map_or_else(|_| Self::Name(index.to_string()), Self::Index)
    }
}

impl From<&Key> for Key {
    fn from(key: &Key) -> Self {
        key.clone()
    }
}

/// Classify a dynamically typed node as a key.
///
/// Null is the empty string, booleans are `0` or `1` and floats are
/// truncated towards zero.
impl TryFrom<&Node> for Key {
    type Error = Error;

    #[allow(clippy::cast_possible_truncation)]
    fn try_from(node: &Node) -> Result<Self, Self::Error> {
        match node {
            Node::Scalar(Scalar::Null) => Ok(Self::Name(String::new())),
            Node::Scalar(Scalar::Bool(value)) => Ok(Self::Index(i64::from(*value))),
            Node::Scalar(Scalar::Int(index)) => Ok(Self::Index(*index)),
            Node::Scalar(Scalar::Float(value)) => Ok(Self::Index(value.trunc() as i64)),
            Node::Scalar(Scalar::String(name)) => Ok(Self::from(name.as_str())),
            Node::Container(_) | Node::Object(_) => Err(Error::InvalidKey(node.clone())),
        }
    }
}
