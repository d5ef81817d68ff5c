//! # Analytics Core
//!
//! Ergonomic helpers shared by the analytics reporting API client:
//!
//! - [`memoize`](mod@memoize) — per-wrapper result caching that never caches failures
//! - [`addressable`] — lists fetchable by position, title or identifier
//! - [`date`] — coercion of strings, `chrono` values and JSON into dates
//! - [`wrap`](mod@wrap) — "one value or a list" normalization
//! - [`naming`] — compound names from prefix, base and suffix
//! - [`translate`](mod@translate) — key renaming on copies of maps and JSON objects
//!
//! Every helper is synchronous and independent of the others. Errors are
//! returned as [`UtilError`] and never logged above `debug` level here.

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod addressable;
pub mod config;
pub mod date;
pub mod error;
pub mod logging;
pub mod memoize;
pub mod metrics;
pub mod naming;
pub mod translate;
pub mod wrap;

pub use addressable::{Addressable, AddressableList, Key};
pub use config::UtilConfig;
pub use date::{to_date, DateLike};
pub use error::{Result, UtilError};
pub use memoize::{memoize, Memoized};
pub use metrics::CacheStats;
pub use naming::{affix, Affix};
pub use translate::{translate, translate_object};
pub use wrap::{wrap, wrap_json, OneOrMany};
