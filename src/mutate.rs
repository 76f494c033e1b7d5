// SPDX-FileCopyrightText: The im-dotpath authors
// SPDX-License-Identifier: MPL-2.0

use crate::{has, Fallback, Key, Node, Path, Segment};

/// Set a value using dot notation.
///
/// Missing intermediate nodes are created as empty containers. Intermediate
/// values that are neither containers nor objects are *replaced* by empty
/// containers, discarding their previous value. A wildcard segment assigns
/// the value to every element of the container at that position.
///
/// The root path replaces the node itself.
///
/// Mutates the node in place and returns it for chaining.
///
/// ```
/// # use im_dotpath::{get, set, Node};
/// let mut node = Node::NULL;
/// set(&mut node, "projects.delta.codename", "acrux");
/// assert_eq!(Node::from("acrux"), get(&node, "projects.delta.codename", Node::NULL));
/// ```
pub fn set(node: &mut Node, path: impl Into<Path>, value: impl Into<Node>) -> &mut Node {
    assign(node, path.into().segments(), value.into(), true);
    node
}

/// Set a value using dot notation unless a value is already present.
///
/// Only missing and null values are filled in. Otherwise behaves like [`set()`].
pub fn fill(node: &mut Node, path: impl Into<Path>, value: impl Into<Node>) -> &mut Node {
    assign(node, path.into().segments(), value.into(), false);
    node
}

fn assign(target: &mut Node, segments: &[Segment], value: Node, overwrite: bool) {
    let Some((segment, remaining)) = segments.split_first() else {
        if overwrite || target.is_null() {
            *target = value;
        }
        return;
    };
    match segment {
        Segment::Wildcard => {
            let Node::Container(container) = target else {
                log::debug!("Replacing {target:?} with an empty container");
                *target = Node::container();
                return;
            };
            for (_, item) in container.iter_mut() {
                if remaining.is_empty() {
                    if overwrite {
                        *item = value.clone();
                    }
                } else {
                    assign(item, remaining, value.clone(), overwrite);
                }
            }
        }
        Segment::Key(key) => {
            let slot = slot_mut(target, key.clone());
            if remaining.is_empty() {
                if overwrite || slot.is_null() {
                    *slot = value;
                }
                return;
            }
            if !matches!(slot, Node::Container(_) | Node::Object(_)) {
                log::debug!("Replacing {slot:?} at {key} with an empty container");
                *slot = Node::container();
            }
            assign(slot, remaining, value, overwrite);
        }
    }
}

/// Mutable access to the child node with the given key.
///
/// A missing child is inserted as null. A scalar target is replaced by an
/// empty container first.
fn slot_mut(target: &mut Node, key: Key) -> &mut Node {
    match target {
        Node::Container(container) => container.entry_mut(key),
        Node::Object(object) => object.attribute_entry_mut(&key.as_str()),
        Node::Scalar(_) => {
            log::debug!("Replacing {target:?} with an empty container");
            *target = Node::container();
            slot_mut(target, key)
        }
    }
}

/// Remove a value using dot notation.
///
/// Only traverses containers. Missing paths are ignored.
pub fn forget(node: &mut Node, path: impl Into<Path>) {
    let path = path.into();
    let Node::Container(container) = node else {
        return;
    };
    if let Some(literal) = path.literal() {
        if container.remove(literal).is_some() {
            log::debug!("Removed {literal}");
            return;
        }
    }
    let (parent_segments, Some(child_segment)) = path.parent_child_segments() else {
        return;
    };
    let mut parent = container;
    for segment in parent_segments {
        let Some(Node::Container(next_parent)) = parent.get_mut(&segment.to_key()) else {
            log::trace!("Nothing to remove at {path}");
            return;
        };
        parent = next_parent;
    }
    if parent.remove(&child_segment.to_key()).is_some() {
        log::debug!("Removed {path}");
    }
}

/// Remove multiple values using dot notation.
pub fn forget_all<P: Into<Path>>(node: &mut Node, paths: impl IntoIterator<Item = P>) {
    for path in paths {
        forget(node, path);
    }
}

/// Set a value using dot notation if the path does not exist yet.
///
/// Consumes the node and returns it, modified or not.
#[must_use]
pub fn add(mut node: Node, path: impl Into<Path>, value: impl Into<Node>) -> Node {
    let path = path.into();
    if !has(&node, &path) {
        set(&mut node, path, value);
    }
    node
}

/// Remove a top-level entry and return its value.
///
/// Returns the default if the node has no such entry.
pub fn pull<'a>(node: &mut Node, key: impl Into<Key>, default: impl Into<Fallback<'a>>) -> Node {
    let key = key.into();
    if let Some(value) = node.delete(&key) {
        log::debug!("Pulled {key}");
        return value;
    }
    default.into().resolve()
}
