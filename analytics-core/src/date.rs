//! Coercion of loosely-typed date inputs into calendar dates.
//!
//! Report requests accept dates as `chrono` values, free-form strings
//! (`"2020-01-15"`, `"Jan 15, 2020"`, RFC 3339 timestamps) or raw JSON.
//! Everything is reduced to a [`NaiveDate`]; times and offsets are dropped.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Utc};
use serde_json::Value;
use tracing::debug;

use crate::error::{Result, UtilError};

/// The kinds of value date coercion can be handed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateLike {
    /// No value; coerces to `None`.
    Absent,
    /// A calendar date, returned unchanged.
    Date(NaiveDate),
    /// A date and time without offset.
    DateTime(NaiveDateTime),
    /// A date and time carrying its own offset.
    Zoned(DateTime<FixedOffset>),
    /// Text to be parsed.
    Text(String),
    /// Anything else; always rejected.
    Unsupported {
        /// Name of the received kind.
        type_name: &'static str,
    },
}

impl DateLike {
    /// Reduce to the date component.
    ///
    /// # Errors
    /// - `UtilError::InvalidType` for [`DateLike::Unsupported`].
    /// - `UtilError::DateParse` for text no parser accepts.
    pub fn to_date(&self) -> Result<Option<NaiveDate>> {
        match self {
            Self::Absent => Ok(None),
            Self::Date(date) => Ok(Some(*date)),
            Self::DateTime(datetime) => Ok(Some(datetime.date())),
            Self::Zoned(datetime) => Ok(Some(datetime.date_naive())),
            Self::Text(text) => parse_date(text).map(Some),
            Self::Unsupported { type_name } => Err(UtilError::InvalidType {
                type_name: (*type_name).to_string(),
            }),
        }
    }
}

/// Coerce `value` into an optional calendar date.
///
/// ```
/// use analytics_core::date::{to_date, DateLike};
/// use chrono::NaiveDate;
///
/// let expected = NaiveDate::from_ymd_opt(2020, 1, 15);
/// assert_eq!(to_date("2020-01-15").unwrap(), expected);
/// assert_eq!(to_date(DateLike::Absent).unwrap(), None);
/// assert!(to_date(20_200_115_i64).is_err());
/// ```
///
/// # Errors
/// See [`DateLike::to_date`].
pub fn to_date(value: impl Into<DateLike>) -> Result<Option<NaiveDate>> {
    value.into().to_date()
}

/// Parse free-form text into a date.
///
/// RFC 3339 and RFC 2822 timestamps keep the date in their own offset;
/// everything else goes through `dateparser`, read as UTC at midnight.
///
/// # Errors
/// Returns `UtilError::DateParse` if no format matches.
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    let trimmed = text.trim();
    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(datetime.date_naive());
    }
    if let Ok(datetime) = DateTime::parse_from_rfc2822(trimmed) {
        return Ok(datetime.date_naive());
    }

    dateparser::parse_with(trimmed, &Utc, NaiveTime::MIN)
        .map(|datetime| datetime.date_naive())
        .map_err(|e| {
            debug!(input = trimmed, error = %e, "date text rejected");
            UtilError::DateParse {
                input: text.to_string(),
                reason: e.to_string(),
            }
        })
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

impl From<NaiveDate> for DateLike {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<NaiveDateTime> for DateLike {
    fn from(datetime: NaiveDateTime) -> Self {
        Self::DateTime(datetime)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateLike {
    fn from(datetime: DateTime<Tz>) -> Self {
        let offset = datetime.offset().fix();
        Self::Zoned(datetime.with_timezone(&offset))
    }
}

impl From<&str> for DateLike {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for DateLike {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&String> for DateLike {
    fn from(text: &String) -> Self {
        Self::Text(text.clone())
    }
}

impl<T: Into<DateLike>> From<Option<T>> for DateLike {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

impl From<Value> for DateLike {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Absent,
            Value::String(text) => Self::Text(text),
            other => Self::Unsupported {
                type_name: json_type_name(&other),
            },
        }
    }
}

impl From<&Value> for DateLike {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Self::Absent,
            Value::String(text) => Self::Text(text.clone()),
            other => Self::Unsupported {
                type_name: json_type_name(other),
            },
        }
    }
}

macro_rules! unsupported_date_input {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for DateLike {
                fn from(_: $ty) -> Self {
                    Self::Unsupported { type_name: stringify!($ty) }
                }
            }
        )*
    };
}

unsupported_date_input!(bool, i32, i64, u32, u64, f32, f64);

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
