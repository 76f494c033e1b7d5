// SPDX-FileCopyrightText: The im-dotpath authors
// SPDX-License-Identifier: MPL-2.0

use std::borrow::Cow;

use crate::{flatten::collapse_values, Container, Fallback, Key, Node, Path, Segment};

/// Check if the node is an indexable container.
#[must_use]
pub const fn accessible(node: &Node) -> bool {
    node.is_indexable()
}

/// Check if the node has an entry or a set attribute with the given key.
///
/// Only looks at the top level, the key is not split into segments.
#[must_use]
pub fn exists(node: &Node, key: impl Into<Key>) -> bool {
    node.key_exists(&key.into())
}

/// Resolve a path against a node.
///
/// Returns `None` if the path does not resolve. The result is borrowed
/// from the node unless a wildcard segment had to collect the values of
/// multiple elements.
///
/// The path is always walked segment by segment, keys that contain the
/// separator are not matched.
#[must_use]
pub fn find<'n>(node: &'n Node, path: &Path) -> Option<Cow<'n, Node>> {
    resolve_segments(node, path.segments())
}

fn resolve_segments<'n>(mut node: &'n Node, segments: &[Segment]) -> Option<Cow<'n, Node>> {
    for (position, segment) in segments.iter().enumerate() {
        let key = match segment {
            Segment::Wildcard => {
                let Node::Container(container) = node else {
                    log::trace!("Cannot fan out over {node:?} at segment {position}");
                    return None;
                };
                // The wildcard consumes all remaining segments.
                return Some(Cow::Owned(fan_out(container, &segments[position + 1..])));
            }
            Segment::Key(key) => key,
        };
        let Some(child) = node.read(key) else {
            log::trace!("Missing key {key} at segment {position}");
            return None;
        };
        node = child;
    }
    Some(Cow::Borrowed(node))
}

/// Resolve the remaining segments against every element of the container.
///
/// Elements that do not resolve contribute null. The results are collapsed
/// by one level if another wildcard follows.
fn fan_out(container: &Container, remaining: &[Segment]) -> Node {
    let results = container
        .values()
        .map(|item| resolve_segments(item, remaining).map_or(Node::NULL, Cow::into_owned));
    if remaining.iter().any(Segment::is_wildcard) {
        Node::Container(collapse_values(results))
    } else {
        results.collect()
    }
}

/// Get a value using dot notation.
///
/// The default is only evaluated if the path does not resolve. The root
/// path returns the node itself.
///
/// ```
/// # use im_dotpath::{get, Node, Object};
/// let project = Object::new().with_attribute("subject", "z-ray");
/// let node = Node::from(vec![Node::from(project)]);
/// assert_eq!(Node::from("z-ray"), get(&node, "0.subject", Node::NULL));
/// assert_eq!(Node::from(vec!["z-ray"]), get(&node, "*.subject", Node::NULL));
/// assert_eq!(Node::from("none"), get(&node, "0.state", "none"));
/// ```
pub fn get<'a>(node: &Node, path: impl Into<Path>, default: impl Into<Fallback<'a>>) -> Node {
    find(node, &path.into()).map_or_else(|| default.into().resolve(), Cow::into_owned)
}

/// Check if a path resolves to an existing entry or set attribute.
///
/// Null values in containers count as existing. A wildcard segment
/// requires a non-empty container whose elements all contain the
/// remaining path. The root path never exists.
#[must_use]
pub fn has(node: &Node, path: impl Into<Path>) -> bool {
    let path = path.into();
    if path.is_root() {
        return false;
    }
    let literal_exists = path
        .literal()
        .zip(node.as_container())
        .is_some_and(|(literal, container)| container.contains_key(literal));
    literal_exists || segments_exist(node, path.segments())
}

fn segments_exist(node: &Node, segments: &[Segment]) -> bool {
    let Some((segment, remaining)) = segments.split_first() else {
        return true;
    };
    match segment {
        Segment::Wildcard => node.as_container().is_some_and(|container| {
            !container.is_empty()
                && container
                    .values()
                    .all(|item| segments_exist(item, remaining))
        }),
        Segment::Key(key) => node
            .read(key)
            .is_some_and(|child| segments_exist(child, remaining)),
    }
}

/// Check if all paths exist.
///
/// Returns `false` if no paths are given.
#[must_use]
pub fn has_all<P: Into<Path>>(node: &Node, paths: impl IntoIterator<Item = P>) -> bool {
    let mut paths = paths.into_iter().peekable();
    if paths.peek().is_none() {
        return false;
    }
    paths.all(|path| has(node, path))
}
