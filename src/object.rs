// SPDX-FileCopyrightText: The im-dotpath authors
// SPDX-License-Identifier: MPL-2.0

use std::mem;

use crate::{HashMap, Node, Vector};

/// Attribute-bearing object.
///
/// Objects are traversed by attribute access, but they are not indexable.
/// An attribute is *set* if it is present and its value is not null.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Object {
    attributes: Vector<(String, Node)>,

    /// Position of each attribute in `attributes`.
    positions: HashMap<String, usize>,
}

impl Object {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Node>) -> Self {
        self.set_attribute(name.into(), value.into());
        self
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// The value of a set attribute.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Node> {
        let index = self.position(name)?;
        self.attributes
            .get(index)
            .map(|(_, value)| value)
            .filter(|value| !value.is_null())
    }

    #[must_use]
    pub fn is_attribute_set(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// Assign an attribute and return the previous value.
    pub fn set_attribute(&mut self, name: String, value: Node) -> Option<Node> {
        if let Some(index) = self.position(&name) {
            return Some(mem::replace(&mut self.attributes[index].1, value));
        }
        let len = self.attributes.len();
        self.positions.insert(name.clone(), len);
        self.attributes.insert(len, (name, value));
        None
    }

    /// Mutable access to an attribute, adding it as null if it is missing.
    pub fn attribute_entry_mut(&mut self, name: &str) -> &mut Node {
        let index = if let Some(index) = self.position(name) {
            index
        } else {
            self.set_attribute(name.to_owned(), Node::NULL);
            self.attributes.len() - 1
        };
        &mut self.attributes[index].1
    }

    /// All attributes in declaration order, including unset ones.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &Node)> + '_ {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }
}
