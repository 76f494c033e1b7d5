// SPDX-FileCopyrightText: The im-dotpath authors
// SPDX-License-Identifier: MPL-2.0

use std::borrow::Cow;

use crate::{find, forget_all, Container, Error, Fallback, Key, Node, Path, Scalar};

/// Pluck a value from every element.
///
/// If a key path is given the results are keyed by the value at the key
/// path of each element. Without a key path a value path with a wildcard
/// contributes all collected values of an element individually.
///
/// Fails if a key path resolves to a container or an object.
///
/// ```
/// # use im_dotpath::{pluck, Node, Object};
/// let cars = Node::from(vec![
///     Object::new().with_attribute("id", "ford/fusion"),
///     Object::new().with_attribute("id", "vw/passat"),
/// ]);
/// let ids = pluck(&cars, "id", None).unwrap();
/// assert_eq!(Node::from(vec!["ford/fusion", "vw/passat"]), Node::from(ids));
/// ```
pub fn pluck(
    items: &Node,
    value_path: impl Into<Path>,
    key_path: Option<Path>,
) -> Result<Container, Error> {
    let value_path = value_path.into();
    let mut results = Container::new();
    let Some(items) = items.as_container() else {
        return Ok(results);
    };
    for item in items.values() {
        let value = find(item, &value_path).map_or(Node::NULL, Cow::into_owned);
        if let Some(key_path) = &key_path {
            let key = find(item, key_path).map_or(Ok(Key::Name(String::new())), |key| {
                Key::try_from(key.as_ref())
            })?;
            results.insert(key, value);
            continue;
        }
        match value {
            Node::Container(values) if value_path.has_wildcard() => {
                results.extend(values.into_values());
            }
            value => {
                results.push(value);
            }
        }
    }
    Ok(results)
}

/// Filter the entries with a predicate.
///
/// The keys of the remaining entries are preserved.
#[must_use]
pub fn filter(node: &Node, mut predicate: impl FnMut(&Node, &Key) -> bool) -> Container {
    node.as_container()
        .map(|container| {
            container
                .iter()
                .filter(|&(key, value)| predicate(value, key))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect()
        })
        .unwrap_or_default()
}

/// The first value or the default if the node has no values.
pub fn first<'a>(node: &Node, default: impl Into<Fallback<'a>>) -> Node {
    first_where(node, |_, _| true, default)
}

/// The first value that passes the predicate.
pub fn first_where<'a>(
    node: &Node,
    mut predicate: impl FnMut(&Node, &Key) -> bool,
    default: impl Into<Fallback<'a>>,
) -> Node {
    node.as_container()
        .and_then(|container| {
            container
                .iter()
                .find(|&(key, value)| predicate(value, key))
        })
        .map_or_else(|| default.into().resolve(), |(_, value)| value.clone())
}

/// The last value or the default if the node has no values.
pub fn last<'a>(node: &Node, default: impl Into<Fallback<'a>>) -> Node {
    last_where(node, |_, _| true, default)
}

/// The last value that passes the predicate.
pub fn last_where<'a>(
    node: &Node,
    mut predicate: impl FnMut(&Node, &Key) -> bool,
    default: impl Into<Fallback<'a>>,
) -> Node {
    node.as_container()
        .and_then(|container| {
            container
                .iter()
                .rev()
                .find(|&(key, value)| predicate(value, key))
        })
        .map_or_else(|| default.into().resolve(), |(_, value)| value.clone())
}

/// The entries with the given top-level keys in their original order.
#[must_use]
pub fn only<K: Into<Key>>(node: &Node, keys: impl IntoIterator<Item = K>) -> Container {
    let keys = keys.into_iter().map(Into::into).collect::<Vec<_>>();
    node.as_container()
        .map(|container| {
            container
                .iter()
                .filter(|(key, _)| keys.contains(key))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect()
        })
        .unwrap_or_default()
}

/// A copy of the node without the given paths.
#[must_use]
pub fn except<P: Into<Path>>(node: &Node, paths: impl IntoIterator<Item = P>) -> Node {
    let mut node = node.clone();
    forget_all(&mut node, paths);
    node
}

/// Wrap a value into a container unless it already is one.
///
/// Null is wrapped into an empty container.
#[must_use]
pub fn wrap(value: impl Into<Node>) -> Container {
    match value.into() {
        Node::Container(container) => container,
        Node::Scalar(Scalar::Null) => Container::new(),
        value @ (Node::Object(_) | Node::Scalar(_)) => std::iter::once(value).collect(),
    }
}

/// A copy of the node with a value in front.
///
/// Without a key the integer keys are renumbered starting at zero, string
/// keys are kept. With a key an existing entry with that key is dropped.
#[must_use]
pub fn prepend(node: &Node, value: impl Into<Node>, key: Option<Key>) -> Container {
    let mut results = Container::new();
    let entries = node
        .as_container()
        .into_iter()
        .flat_map(Container::iter);
    if let Some(key) = key {
        results.insert(key.clone(), value.into());
        for (entry_key, entry_value) in entries.filter(|(entry_key, _)| **entry_key != key) {
            results.insert(entry_key.clone(), entry_value.clone());
        }
        return results;
    }
    results.push(value.into());
    for (entry_key, entry_value) in entries {
        match entry_key {
            Key::Index(_) => {
                results.push(entry_value.clone());
            }
            Key::Name(_) => {
                results.insert(entry_key.clone(), entry_value.clone());
            }
        }
    }
    results
}

/// Check if the node is a container that is not a list.
#[must_use]
pub fn is_assoc(node: &Node) -> bool {
    node.as_container()
        .is_some_and(|container| !container.is_list())
}

/// Check if the node is a container with keys `0..n` in order.
#[must_use]
pub fn is_list(node: &Node) -> bool {
    node.as_container().is_some_and(Container::is_list)
}
