// SPDX-FileCopyrightText: The im-dotpath authors
// SPDX-License-Identifier: MPL-2.0

use std::borrow::Cow;

use crate::{Node, Scalar};

/// Encode a node as a URL query string.
///
/// Keys and values are percent-encoded according to RFC 3986. Nested
/// values are addressed with brackets, e.g. `car[id]=42`. Null values
/// and empty containers are omitted, booleans are encoded as `1` or `0`.
///
/// ```
/// # use im_dotpath::{query, Node, Object};
/// let car = Object::new()
///     .with_attribute("id", "ford/fusion")
///     .with_attribute("name", "fusion");
/// assert_eq!("id=ford%2Ffusion&name=fusion", query(&Node::from(car)));
/// ```
#[must_use]
pub fn query(node: &Node) -> String {
    let mut pairs = Vec::new();
    encode_children(&mut pairs, None, node);
    pairs.join("&")
}

fn encode_children(pairs: &mut Vec<String>, prefix: Option<&str>, node: &Node) {
    match node {
        Node::Container(container) => {
            encode_entries(
                pairs,
                prefix,
                container.iter().map(|(key, value)| (key.as_str(), value)),
            );
        }
        Node::Object(object) => {
            encode_entries(
                pairs,
                prefix,
                object
                    .attributes()
                    .map(|(name, value)| (Cow::Borrowed(name), value)),
            );
        }
        Node::Scalar(_) => (),
    }
}

fn encode_entries<'a>(
    pairs: &mut Vec<String>,
    prefix: Option<&str>,
    entries: impl Iterator<Item = (Cow<'a, str>, &'a Node)>,
) {
    for (key, value) in entries {
        let name = match prefix {
            Some(prefix) => format!("{prefix}[{key}]"),
            None => key.into_owned(),
        };
        match value {
            Node::Scalar(scalar) => {
                if let Some(value) = encode_scalar(scalar) {
                    pairs.push(format!(
                        "{name}={value}",
                        name = urlencoding::encode(&name),
                        value = urlencoding::encode(&value),
                    ));
                }
            }
            Node::Container(_) | Node::Object(_) => encode_children(pairs, Some(&name), value),
        }
    }
}

fn encode_scalar(scalar: &Scalar) -> Option<Cow<'_, str>> {
    match scalar {
        Scalar::Null => None,
        Scalar::Bool(value) => Some(Cow::Borrowed(if *value { "1" } else { "0" })),
        Scalar::Int(value) => Some(Cow::Owned(value.to_string())),
        Scalar::Float(value) => Some(Cow::Owned(value.to_string())),
        Scalar::String(value) => Some(Cow::Borrowed(value)),
    }
}
