// SPDX-FileCopyrightText: The im-dotpath authors
// SPDX-License-Identifier: MPL-2.0

use std::fmt;

use crate::{Error, Key, Node, Scalar};

/// Separator between the segments of a dot path.
pub const SEPARATOR: char = '.';

/// The wildcard segment.
pub const WILDCARD: &str = "*";

/// Atomic unit of a [`Path`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Segment {
    /// Every element at this position.
    #[display(fmt = "*")]
    Wildcard,
    #[display(fmt = "{}", _0)]
    Key(Key),
}

impl Segment {
    #[must_use]
    pub const fn is_wildcard(&self) -> bool {
        matches!(self, Self::Wildcard)
    }

    /// The key addressed by this segment when it is taken literally.
    ///
    /// The wildcard is addressed by the key `"*"`.
    #[must_use]
    pub fn to_key(&self) -> Key {
        match self {
            Self::Wildcard => Key::Name(WILDCARD.to_owned()),
            Self::Key(key) => key.clone(),
        }
    }
}

impl From<&str> for Segment {
    fn from(s: &str) -> Self {
        if s == WILDCARD {
            Self::Wildcard
        } else {
            Self::Key(Key::from(s))
        }
    }
}

impl From<Key> for Segment {
    fn from(key: Key) -> Self {
        Self::Key(key)
    }
}

/// Decomposition of a dot path into segments.
///
/// The empty path is the root path and denotes the node itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<Segment>,

    /// The unsplit string of a multi-segment dot path.
    ///
    /// Containers may use keys that contain the separator, those are
    /// matched before the path is walked segment by segment.
    literal: Option<Key>,
}

impl Path {
    #[must_use]
    pub const fn root() -> Self {
        Self {
            segments: Vec::new(),
            literal: None,
        }
    }

    /// Split a dot path into segments.
    ///
    /// The empty string is the root path. All other strings are split on
    /// every separator, empty segments included.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        if path.is_empty() {
            return Self::root();
        }
        let segments = path.split(SEPARATOR).map(Segment::from).collect::<Vec<_>>();
        let literal = (segments.len() > 1).then(|| Key::from(path));
        Self { segments, literal }
    }

    #[must_use]
    pub fn from_segments(segments: impl IntoIterator<Item = impl Into<Segment>>) -> Self {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
            literal: None,
        }
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Split the path into parent segments and the last child segment.
    #[must_use]
    pub fn parent_child_segments(&self) -> (&[Segment], Option<&Segment>) {
        match self.segments.split_last() {
            Some((child, parents)) => (parents, Some(child)),
            None => (&[], None),
        }
    }

    #[must_use]
    pub fn has_wildcard(&self) -> bool {
        self.segments.iter().any(Segment::is_wildcard)
    }

    #[must_use]
    pub const fn literal(&self) -> Option<&Key> {
        self.literal.as_ref()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{SEPARATOR}")?;
            }
            fmt::Display::fmt(segment, f)?;
        }
        Ok(())
    }
}

impl From<&str> for Path {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

impl From<String> for Path {
    fn from(path: String) -> Self {
        Self::parse(&path)
    }
}

impl From<&String> for Path {
    fn from(path: &String) -> Self {
        Self::parse(path)
    }
}

impl From<&Path> for Path {
    fn from(path: &Path) -> Self {
        path.clone()
    }
}

impl From<Key> for Path {
    fn from(key: Key) -> Self {
        Self::from_segments([Segment::Key(key)])
    }
}

impl From<i64> for Path {
    fn from(index: i64) -> Self {
        Key::Index(index).into()
    }
}

impl From<i32> for Path {
    fn from(index: i32) -> Self {
        Key::from(index).into()
    }
}

impl From<usize> for Path {
    fn from(index: usize) -> Self {
        Key::from(index).into()
    }
}

impl From<Vec<Segment>> for Path {
    fn from(segments: Vec<Segment>) -> Self {
        Self {
            segments,
            literal: None,
        }
    }
}

impl From<&[&str]> for Path {
    fn from(segments: &[&str]) -> Self {
        Self::from_segments(segments.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for Path {
    fn from(segments: [&str; N]) -> Self {
        Self::from_segments(segments)
    }
}

impl FromIterator<Segment> for Path {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self::from_segments(iter)
    }
}

fn segment_from_scalar(scalar: &Scalar) -> Option<Segment> {
    match scalar {
        Scalar::String(s) => Some(Segment::from(s.as_str())),
        Scalar::Int(index) => Some(Segment::Key(Key::Index(*index))),
        Scalar::Null | Scalar::Bool(_) | Scalar::Float(_) => None,
    }
}

/// Classify a dynamically typed node as a path.
///
/// Null is the root path, strings are dot paths, integers address a
/// single position and lists of strings or integers are taken as segments.
impl TryFrom<&Node> for Path {
    type Error = Error;

    fn try_from(node: &Node) -> Result<Self, Self::Error> {
        match node {
            Node::Scalar(Scalar::Null) => Ok(Self::root()),
            Node::Scalar(Scalar::String(path)) => Ok(Self::parse(path)),
            Node::Scalar(Scalar::Int(index)) => Ok(Self::from(*index)),
            Node::Container(container) => container
                .values()
                .map(|segment| match segment {
                    Node::Scalar(scalar) => segment_from_scalar(scalar),
                    Node::Container(_) | Node::Object(_) => None,
                })
                .collect::<Option<Self>>()
                .ok_or_else(|| Error::InvalidPath(node.clone())),
            Node::Scalar(Scalar::Bool(_) | Scalar::Float(_)) | Node::Object(_) => {
                Err(Error::InvalidPath(node.clone()))
            }
        }
    }
}
