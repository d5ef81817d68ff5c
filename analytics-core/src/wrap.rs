//! Normalization of "one value or a list of values".
//!
//! Many API fields accept either a single element or an array of them.
//! [`OneOrMany`] models both shapes and [`wrap`] flattens them to a `Vec`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Either a single value or a list of values.
///
/// Deserializes from a JSON scalar/object or a JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    /// Already a list.
    Many(Vec<T>),
    /// A lone value.
    One(T),
}

impl<T> OneOrMany<T> {
    /// The values as a list; a lone value becomes a one-element list.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Many(values) => values,
            Self::One(value) => vec![value],
        }
    }

    /// Number of values held.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Many(values) => values.len(),
            Self::One(_) => 1,
        }
    }

    /// Whether this is an empty list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> From<T> for OneOrMany<T> {
    fn from(value: T) -> Self {
        Self::One(value)
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(values: Vec<T>) -> Self {
        Self::Many(values)
    }
}

impl<T> From<OneOrMany<T>> for Vec<T> {
    fn from(value: OneOrMany<T>) -> Self {
        value.into_vec()
    }
}

/// Return lists unchanged and put lone values into a one-element list.
///
/// The element type of the result decides whether a `Vec` argument is the
/// list itself or a single (nested) value.
///
/// ```
/// use analytics_core::wrap::wrap;
///
/// let list: Vec<i32> = wrap(vec![1, 2]);
/// assert_eq!(list, [1, 2]);
/// let single: Vec<i32> = wrap(5);
/// assert_eq!(single, [5]);
/// ```
pub fn wrap<T>(value: impl Into<OneOrMany<T>>) -> Vec<T> {
    value.into().into_vec()
}

/// [`wrap`] for untyped JSON: arrays yield their elements, anything else
/// (including `null`) becomes a one-element list.
#[must_use]
pub fn wrap_json(value: Value) -> Vec<Value> {
    match value {
        Value::Array(values) => values,
        other => vec![other],
    }
}
