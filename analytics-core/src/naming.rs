//! Compound names such as `daily_report` or `evar1-instances`.

use std::fmt;

use crate::config::NamingConfig;

/// Separator used when none is configured.
pub const DEFAULT_CONNECTOR: &str = "_";

/// Join `prefix`, `base` and `suffix` with `connector`, skipping empty parts.
///
/// ```
/// use analytics_core::naming::affix;
///
/// assert_eq!(affix("report", "daily", "", "_"), "daily_report");
/// assert_eq!(affix("x", "a", "b", "-"), "a-x-b");
/// assert_eq!(affix("", "", "", "_"), "");
/// ```
#[must_use]
pub fn affix(base: &str, prefix: &str, suffix: &str, connector: &str) -> String {
    [prefix, base, suffix]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(connector)
}

/// Builder form of [`affix`]; renders through `Display`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Affix<'a> {
    base: &'a str,
    prefix: &'a str,
    suffix: &'a str,
    connector: &'a str,
}

impl<'a> Affix<'a> {
    /// Start from `base` with no prefix, no suffix and the default connector.
    #[must_use]
    pub fn new(base: &'a str) -> Self {
        Self {
            base,
            prefix: "",
            suffix: "",
            connector: DEFAULT_CONNECTOR,
        }
    }

    /// Start from `base` using the configured connector.
    #[must_use]
    pub fn with_config(base: &'a str, config: &'a NamingConfig) -> Self {
        Self::new(base).connector(&config.connector)
    }

    /// Set the prefix.
    #[must_use]
    pub fn prefix(mut self, prefix: &'a str) -> Self {
        self.prefix = prefix;
        self
    }

    /// Set the suffix.
    #[must_use]
    pub fn suffix(mut self, suffix: &'a str) -> Self {
        self.suffix = suffix;
        self
    }

    /// Set the connector.
    #[must_use]
    pub fn connector(mut self, connector: &'a str) -> Self {
        self.connector = connector;
        self
    }
}

impl fmt::Display for Affix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for part in [self.prefix, self.base, self.suffix] {
            if part.is_empty() {
                continue;
            }
            if !first {
                f.write_str(self.connector)?;
            }
            f.write_str(part)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_only() {
        assert_eq!(Affix::new("report").prefix("daily").to_string(), "daily_report");
    }

    #[test]
    fn base_only() {
        assert_eq!(Affix::new("report").to_string(), "report");
        assert_eq!(affix("report", "", "", DEFAULT_CONNECTOR), "report");
    }

    #[test]
    fn all_parts_custom_connector() {
        let name = Affix::new("x").prefix("a").suffix("b").connector("-");
        assert_eq!(name.to_string(), "a-x-b");
    }

    #[test]
    fn empty_base_between_parts_is_skipped() {
        assert_eq!(affix("", "page", "views", "."), "page.views");
        assert_eq!(Affix::new("").suffix("total").to_string(), "total");
    }

    #[test]
    fn whitespace_is_not_empty() {
        assert_eq!(affix(" ", "a", "", "_"), "a_ ");
    }

    #[test]
    fn configured_connector_is_used() {
        let config = NamingConfig { connector: "::".to_string() };
        assert_eq!(Affix::with_config("b", &config).prefix("a").to_string(), "a::b");
    }
}
