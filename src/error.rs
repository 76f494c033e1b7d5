// SPDX-FileCopyrightText: The im-dotpath authors
// SPDX-License-Identifier: MPL-2.0

use thiserror::Error;

use crate::Node;

/// Invalid arguments that cannot be recovered from by falling back
/// to a default value.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid path: {0:?}")]
    InvalidPath(Node),
    #[error("invalid key: {0:?}")]
    InvalidKey(Node),
    #[error("requested {requested} items, but only {available} items are available")]
    NotEnoughItems { requested: usize, available: usize },
}
