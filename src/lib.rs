// SPDX-FileCopyrightText: The im-dotpath authors
// SPDX-License-Identifier: MPL-2.0

//! Dot-path access and transforms for nested, heterogeneous data.

mod container;
pub use self::container::Container;

mod error;
pub use self::error::Error;

mod fallback;
pub use self::fallback::Fallback;

mod flatten;
pub use self::flatten::{collapse, dot, flatten, flatten_depth, undot};

#[cfg(feature = "json")]
mod json;

mod key;
pub use self::key::Key;

mod mutate;
pub use self::mutate::{add, fill, forget, forget_all, pull, set};

mod node;
pub use self::node::{Node, Scalar};

mod object;
pub use self::object::Object;

mod path;
pub use self::path::{Path, Segment, SEPARATOR, WILDCARD};

mod query;
pub use self::query::query;

mod random;
pub use self::random::{random, random_with, shuffle, shuffle_with};

mod resolve;
pub use self::resolve::{accessible, exists, find, get, has, has_all};

mod select;
pub use self::select::{
    except, filter, first, first_where, is_assoc, is_list, last, last_where, only, pluck, prepend,
    wrap,
};

#[cfg(feature = "im")]
type HashMap<K, V> = im::HashMap<K, V>;

#[cfg(not(feature = "im"))]
type HashMap<K, V> = std::collections::HashMap<K, V>;

#[cfg(feature = "im")]
type Vector<T> = im::Vector<T>;

#[cfg(not(feature = "im"))]
type Vector<T> = Vec<T>;
