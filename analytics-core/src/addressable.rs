//! Lists addressable by position, title or identifier.
//!
//! API listings (report suites, metrics, elements, segments) come back as
//! arrays where callers want to pick an entry by index, by its human title
//! or by its machine identifier. [`AddressableList`] wraps such an array
//! and resolves all three, refusing to guess when a key is ambiguous.

use std::borrow::Cow;
use std::fmt;

use crate::config::CollectionConfig;
use crate::error::{Result, UtilError};

/// Collection name used in lookup errors when none is given.
pub const DEFAULT_LIST_NAME: &str = "items";

/// An item that can be looked up by title or identifier.
pub trait Addressable {
    /// Human-readable title.
    fn title(&self) -> &str;

    /// Identifier, in textual form. Numeric ids render as their digits.
    fn id(&self) -> Cow<'_, str>;

    /// The `<td>` cells for this item's row in [`AddressableList::to_html`].
    fn html_cells(&self) -> String {
        format!(
            "<td>{}</td><td>{}</td>",
            escape_html(&self.id()),
            escape_html(self.title())
        )
    }
}

/// A lookup key: a position, or a title-or-id string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key<'a> {
    /// Position in the list; negative values count from the end.
    Index(isize),
    /// Matched against both title and id.
    Name(&'a str),
}

impl From<isize> for Key<'_> {
    fn from(index: isize) -> Self {
        Self::Index(index)
    }
}

impl From<i32> for Key<'_> {
    fn from(index: i32) -> Self {
        Self::Index(isize::try_from(index).unwrap_or(isize::MAX))
    }
}

/// Positions beyond `isize::MAX` saturate to `isize::MAX`; they are out of
/// range for any list, and the error reports the saturated index.
impl From<usize> for Key<'_> {
    fn from(index: usize) -> Self {
        Self::Index(isize::try_from(index).unwrap_or(isize::MAX))
    }
}

impl<'a> From<&'a str> for Key<'a> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}

impl<'a> From<&'a String> for Key<'a> {
    fn from(name: &'a String) -> Self {
        Self::Name(name.as_str())
    }
}

/// An immutable list whose items can be fetched by position, title or id.
#[derive(Clone, PartialEq, Eq)]
pub struct AddressableList<T> {
    items: Vec<T>,
    name: String,
}

impl<T> AddressableList<T> {
    /// Build a list with a collection name used in lookup errors.
    pub fn new(items: impl IntoIterator<Item = T>, name: impl Into<String>) -> Self {
        Self {
            items: items.into_iter().collect(),
            name: name.into(),
        }
    }

    /// Build a list named with the configured default name.
    pub fn with_config(items: impl IntoIterator<Item = T>, config: &CollectionConfig) -> Self {
        Self::new(items, config.default_name.clone())
    }

    /// Collection name, e.g. `"metrics"`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over items in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Items as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Unwrap into the underlying vector.
    #[must_use]
    pub fn into_inner(self) -> Vec<T> {
        self.items
    }

    /// Item at `index`; negative positions count back from the end.
    ///
    /// # Errors
    /// Returns `UtilError::IndexOutOfRange` when the position is outside the list.
    pub fn get_index(&self, index: isize) -> Result<&T> {
        let len = self.items.len();
        let resolved = if index < 0 {
            len.checked_sub(index.unsigned_abs())
        } else {
            Some(index.unsigned_abs())
        };
        resolved
            .and_then(|i| self.items.get(i))
            .ok_or(UtilError::IndexOutOfRange { index, len })
    }
}

impl<T: Addressable + fmt::Debug> AddressableList<T> {
    /// Look an item up by position or by title-or-id.
    ///
    /// ```
    /// # use std::borrow::Cow;
    /// # use analytics_core::addressable::{Addressable, AddressableList};
    /// #[derive(Debug)]
    /// struct Suite { id: &'static str, title: &'static str }
    ///
    /// impl Addressable for Suite {
    ///     fn title(&self) -> &str { self.title }
    ///     fn id(&self) -> Cow<'_, str> { Cow::Borrowed(self.id) }
    /// }
    ///
    /// let suites = AddressableList::new(
    ///     [Suite { id: "prod", title: "Production" }, Suite { id: "dev", title: "Development" }],
    ///     "report suites",
    /// );
    /// assert_eq!(suites.get(0).unwrap().id, "prod");
    /// assert_eq!(suites.get("Development").unwrap().id, "dev");
    /// assert_eq!(suites.get(-1).unwrap().id, "dev");
    /// assert!(suites.get("staging").is_err());
    /// ```
    ///
    /// # Errors
    /// - `UtilError::IndexOutOfRange` for an out-of-bounds position.
    /// - `UtilError::NotFound` when nothing matches a name.
    /// - `UtilError::Ambiguous` when several items match a name.
    pub fn get<'k>(&self, key: impl Into<Key<'k>>) -> Result<&T> {
        match key.into() {
            Key::Index(index) => self.get_index(index),
            Key::Name(name) => self.find(name),
        }
    }

    /// Look an item up by title or id only.
    ///
    /// # Errors
    /// Returns `UtilError::NotFound` or `UtilError::Ambiguous`.
    pub fn find(&self, key: &str) -> Result<&T> {
        let mut matches = self
            .items
            .iter()
            .filter(|item| item.title() == key || item.id() == key);

        match (matches.next(), matches.next()) {
            (Some(item), None) => Ok(item),
            (None, _) => Err(UtilError::NotFound {
                key: key.to_string(),
                name: self.name.clone(),
            }),
            (Some(first), Some(second)) => {
                let matches = [first, second]
                    .into_iter()
                    .chain(matches)
                    .map(|item| format!("{item:?}"))
                    .collect();
                Err(UtilError::Ambiguous {
                    key: key.to_string(),
                    matches,
                })
            }
        }
    }
}

impl<T: Addressable> AddressableList<T> {
    /// Two-column HTML table (ID, Title) for notebook-style display.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut html = String::from("<table><tr><td><b>ID</b></td><td><b>Title</b></td></tr>");
        for item in &self.items {
            html.push_str(&format!("<tr>{}</tr>", item.html_cells()));
        }
        html.push_str("</table>");
        html
    }
}

impl<T> FromIterator<T> for AddressableList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter, DEFAULT_LIST_NAME)
    }
}

impl<'a, T> IntoIterator for &'a AddressableList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for AddressableList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<T> AsRef<[T]> for AddressableList<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

/// Concatenation of every item's own rendering.
impl<T: fmt::Display> fmt::Display for AddressableList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.items.iter().try_for_each(|item| write!(f, "{item}"))
    }
}

impl<T> fmt::Debug for AddressableList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<AddressableList>")
    }
}

fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}
