//! Date/time value model shared by the formatting contract.
//!
//! A [`DateValue`] is an opaque point in time: milliseconds since the Unix
//! epoch plus a zoneless flag. Formatters must not reinterpret the payload
//! beyond what their own contract specifies.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Distinguishes date-only, time-only, and combined date-time semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateKind {
    Date,
    Time,
    DateTime,
}

impl fmt::Display for DateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DateKind::Date => "date",
            DateKind::Time => "time",
            DateKind::DateTime => "date-time",
        };
        write!(f, "{}", name)
    }
}

/// A point in time as the engine hands it to a formatter.
///
/// Values tagged zoneless carry no timezone information (a pure date or a
/// pure time).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateValue {
    millis: i64,
    zoneless: bool,
}

impl DateValue {
    /// Creates a value that carries timezone information.
    pub fn new(millis: i64) -> Self {
        Self {
            millis,
            zoneless: false,
        }
    }

    /// Creates a zoneless value (a pure date or a pure time).
    pub fn zoneless(millis: i64) -> Self {
        Self {
            millis,
            zoneless: true,
        }
    }

    /// Milliseconds since the Unix epoch.
    pub fn epoch_millis(&self) -> i64 {
        self.millis
    }

    /// True if the value carries no timezone information.
    pub fn is_zoneless(&self) -> bool {
        self.zoneless
    }
}
