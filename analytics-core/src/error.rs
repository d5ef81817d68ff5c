//! Error types for the analytics helper library.

use thiserror::Error;

/// Top-level error type for all helper operations.
#[derive(Error, Debug)]
pub enum UtilError {
    /// Positional lookup outside the bounds of a list.
    #[error("Index out of range: {index} (length: {len})")]
    IndexOutOfRange {
        /// The requested position, possibly negative.
        index: isize,
        /// Number of items in the list.
        len: usize,
    },

    /// No item matched a title-or-id lookup.
    #[error("Cannot find {key} among the available {name}")]
    NotFound {
        /// The lookup key.
        key: String,
        /// Human-readable name of the searched collection.
        name: String,
    },

    /// More than one item matched a title-or-id lookup.
    #[error("Found multiple matches for {key}: {}. Use the identifier instead.", .matches.join(", "))]
    Ambiguous {
        /// The lookup key.
        key: String,
        /// Debug renderings of every matching item.
        matches: Vec<String>,
    },

    /// A value of an unsupported kind was passed to date coercion.
    #[error("Can only convert strings into dates, received {type_name}")]
    InvalidType {
        /// Name of the received kind.
        type_name: String,
    },

    /// Text could not be parsed as a date.
    #[error("Cannot parse {input:?} as a date: {reason}")]
    DateParse {
        /// The rejected text.
        input: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, UtilError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ambiguous_message_lists_matches_and_advice() {
        let err = UtilError::Ambiguous {
            key: "Visits".to_string(),
            matches: vec!["Metric(visits)".to_string(), "Metric(cm_visits)".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Found multiple matches for Visits: Metric(visits), Metric(cm_visits). Use the identifier instead."
        );
    }

    #[test]
    fn not_found_names_collection() {
        let err = UtilError::NotFound {
            key: "pageviews".to_string(),
            name: "metrics".to_string(),
        };
        assert_eq!(err.to_string(), "Cannot find pageviews among the available metrics");
    }
}
