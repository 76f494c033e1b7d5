// SPDX-FileCopyrightText: The im-dotpath authors
// SPDX-License-Identifier: MPL-2.0

use std::mem;

use crate::{HashMap, Key, Node, Vector};

/// Ordered mapping from keys to nodes.
///
/// Serves both as a list (keys `0..n`) and as a dictionary. Entries keep
/// their insertion order. Values appended with [`Container::push()`] get
/// the next integer key, which is one past the largest integer key that
/// has ever been inserted.
#[derive(Debug, Clone)]
pub struct Container {
    entries: Vector<(Key, Node)>,

    /// Position of each key in `entries`.
    positions: HashMap<Key, usize>,

    /// `None` after the key `i64::MAX` has been taken.
    next_index: Option<i64>,
}

impl Default for Container {
    fn default() -> Self {
        Self {
            entries: Vector::new(),
            positions: HashMap::new(),
            next_index: Some(0),
        }
    }
}

impl Container {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, key: &Key) -> Option<usize> {
        self.positions.get(key).copied()
    }

    #[must_use]
    pub fn contains_key(&self, key: &Key) -> bool {
        self.positions.contains_key(key)
    }

    #[must_use]
    pub fn get(&self, key: &Key) -> Option<&Node> {
        let index = self.position(key)?;
        self.entries.get(index).map(|(_, value)| value)
    }

    pub fn get_mut(&mut self, key: &Key) -> Option<&mut Node> {
        let index = self.position(key)?;
        self.entries.get_mut(index).map(|(_, value)| value)
    }

    /// Insert or replace an entry.
    ///
    /// Replacing keeps the position of the existing entry. Returns the
    /// replaced value.
    pub fn insert(&mut self, key: Key, value: Node) -> Option<Node> {
        if let Some(existing) = self.get_mut(&key) {
            return Some(mem::replace(existing, value));
        }
        if let (Key::Index(index), Some(next_index)) = (&key, self.next_index) {
            if *index >= next_index {
                self.next_index = index.checked_add(1);
            }
        }
        let len = self.entries.len();
        self.positions.insert(key.clone(), len);
        self.entries.insert(len, (key, value));
        None
    }

    /// Append a value with the next integer key.
    ///
    /// Returns `None` and discards the value if the next integer key would
    /// exceed `i64::MAX`.
    pub fn push(&mut self, value: Node) -> Option<Key> {
        let Some(next_index) = self.next_index else {
            log::warn!("Cannot append {value:?}, the next integer key is already taken");
            return None;
        };
        let key = Key::Index(next_index);
        self.insert(key.clone(), value);
        Some(key)
    }

    /// Mutable access to an entry, inserting null if it is missing.
    pub fn entry_mut(&mut self, key: Key) -> &mut Node {
        let index = if let Some(index) = self.position(&key) {
            index
        } else {
            self.insert(key, Node::NULL);
            self.entries.len() - 1
        };
        &mut self.entries[index].1
    }

    /// Remove an entry while preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &Key) -> Option<Node> {
        let index = self.positions.remove(key)?;
        let (_, value) = self.entries.remove(index);
        for (shifted_key, _) in self.entries.iter().skip(index) {
            if let Some(position) = self.positions.get_mut(shifted_key) {
                *position -= 1;
            }
        }
        Some(value)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&Key, &Node)> + '_ {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&Key, &mut Node)> + '_ {
        self.entries.iter_mut().map(|(key, value)| (&*key, value))
    }

    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &Key> + '_ {
        self.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl DoubleEndedIterator<Item = &Node> + '_ {
        self.iter().map(|(_, value)| value)
    }

    pub fn into_values(self) -> impl DoubleEndedIterator<Item = Node> {
        self.entries.into_iter().map(|(_, value)| value)
    }

    /// Check if the keys are exactly `0..n` in order.
    #[must_use]
    pub fn is_list(&self) -> bool {
        self.keys()
            .zip(0..)
            .all(|(key, expected)| key.as_index() == Some(expected))
    }

    /// Copy of the container with all values appended to an empty list.
    #[must_use]
    pub fn to_list(&self) -> Self {
        self.values().cloned().collect()
    }
}

impl PartialEq for Container {
    fn eq(&self, other: &Self) -> bool {
        // The next index is not observable through lookups.
        self.entries == other.entries
    }
}

impl FromIterator<Node> for Container {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        let mut container = Self::new();
        for value in iter {
            container.push(value);
        }
        container
    }
}

impl FromIterator<(Key, Node)> for Container {
    fn from_iter<I: IntoIterator<Item = (Key, Node)>>(iter: I) -> Self {
        let mut container = Self::new();
        for (key, value) in iter {
            container.insert(key, value);
        }
        container
    }
}

impl Extend<Node> for Container {
    fn extend<I: IntoIterator<Item = Node>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl IntoIterator for Container {
    type Item = (Key, Node);
    type IntoIter = <Vector<(Key, Node)> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
