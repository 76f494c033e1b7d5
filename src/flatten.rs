// SPDX-FileCopyrightText: The im-dotpath authors
// SPDX-License-Identifier: MPL-2.0

use crate::{set, Container, Key, Node, Path, SEPARATOR};

/// Flatten a multi-dimensional container into a single level.
///
/// Leaves are collected in depth-first order. Objects are leaves.
#[must_use]
pub fn flatten(node: &Node) -> Container {
    flatten_depth(node, usize::MAX)
}

/// Flatten at most `depth` levels of nesting.
///
/// Containers nested deeper are collected as values. A depth of zero
/// only collects the values of the node.
#[must_use]
pub fn flatten_depth(node: &Node, depth: usize) -> Container {
    let Some(container) = node.as_container() else {
        return Container::new();
    };
    if depth == 0 {
        return container.to_list();
    }
    let mut results = Container::new();
    flatten_into(&mut results, container, depth);
    results
}

fn flatten_into(results: &mut Container, container: &Container, depth: usize) {
    for item in container.values() {
        match item {
            Node::Container(inner) if depth > 1 => flatten_into(results, inner, depth - 1),
            Node::Container(inner) => results.extend(inner.values().cloned()),
            Node::Object(_) | Node::Scalar(_) => {
                results.push(item.clone());
            }
        }
    }
}

/// Collapse a container of containers into a single container.
///
/// Elements that are not containers are skipped.
#[must_use]
pub fn collapse(node: &Node) -> Container {
    node.as_container()
        .map(|container| collapse_values(container.values().cloned()))
        .unwrap_or_default()
}

/// Merge the entries of all containers into one.
///
/// Entries with integer keys are appended. Entries with string keys
/// replace the value of a previously merged entry with the same key.
pub(crate) fn collapse_values(values: impl IntoIterator<Item = Node>) -> Container {
    let mut results = Container::new();
    for value in values {
        let Node::Container(inner) = value else {
            continue;
        };
        for (key, value) in inner {
            match key {
                Key::Index(_) => {
                    results.push(value);
                }
                Key::Name(_) => {
                    results.insert(key, value);
                }
            }
        }
    }
    results
}

/// Flatten a nested container into a single level keyed by dot paths.
///
/// Empty containers are kept as values.
///
/// ```
/// # use im_dotpath::{dot, Key, Node};
/// let node = Node::from(vec![vec!["apple", "banana"]]);
/// let dotted = dot(&node, "fruits.");
/// assert_eq!(Some(&Node::from("banana")), dotted.get(&Key::from("fruits.0.1")));
/// ```
#[must_use]
pub fn dot(node: &Node, prefix: &str) -> Container {
    let mut results = Container::new();
    if let Some(container) = node.as_container() {
        dot_into(&mut results, container, prefix);
    }
    results
}

fn dot_into(results: &mut Container, container: &Container, prefix: &str) {
    for (key, value) in container.iter() {
        let path = format!("{prefix}{key}");
        match value {
            Node::Container(inner) if !inner.is_empty() => {
                dot_into(results, inner, &format!("{path}{SEPARATOR}"));
            }
            Node::Container(_) | Node::Object(_) | Node::Scalar(_) => {
                results.insert(Key::from(path), value.clone());
            }
        }
    }
}

/// Expand a container keyed by dot paths into a nested container.
#[must_use]
pub fn undot(node: &Node) -> Node {
    let mut results = Node::container();
    if let Some(container) = node.as_container() {
        for (key, value) in container.iter() {
            set(&mut results, Path::parse(&key.as_str()), value.clone());
        }
    }
    results
}
