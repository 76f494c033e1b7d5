// SPDX-FileCopyrightText: The im-dotpath authors
// SPDX-License-Identifier: MPL-2.0

use rand::{seq::SliceRandom as _, Rng};

use crate::{Container, Error, Node};

/// Sample random values.
///
/// Without a count a single value is returned as is. With a count the
/// values are returned in a list, even if only one value is requested.
///
/// Fails if more values are requested than available.
pub fn random(node: &Node, count: Option<usize>) -> Result<Node, Error> {
    random_with(node, count, &mut rand::thread_rng())
}

/// Sample random values with the given random number generator.
///
/// See also: [`random()`]
pub fn random_with<R: Rng + ?Sized>(
    node: &Node,
    count: Option<usize>,
    rng: &mut R,
) -> Result<Node, Error> {
    let mut values = node
        .as_container()
        .map(|container| container.values().collect::<Vec<_>>())
        .unwrap_or_default();
    let requested = count.unwrap_or(1);
    let available = values.len();
    if requested > available {
        return Err(Error::NotEnoughItems {
            requested,
            available,
        });
    }
    let (sampled, _) = values.partial_shuffle(rng, requested);
    if count.is_some() {
        return Ok(sampled.iter().map(|&value| value.clone()).collect());
    }
    sampled
        .first()
        .map(|&value| value.clone())
        .ok_or(Error::NotEnoughItems {
            requested,
            available,
        })
}

/// A list with all values in random order.
#[must_use]
pub fn shuffle(node: &Node) -> Container {
    shuffle_with(node, &mut rand::thread_rng())
}

/// Shuffle with the given random number generator.
///
/// Pass a seeded generator for a reproducible order.
#[must_use]
pub fn shuffle_with<R: Rng + ?Sized>(node: &Node, rng: &mut R) -> Container {
    let mut values = node
        .as_container()
        .map(|container| container.values().cloned().collect::<Vec<_>>())
        .unwrap_or_default();
    values.shuffle(rng);
    values.into_iter().collect()
}
