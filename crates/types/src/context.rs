//! Newtype wrappers for ambient render context
//!
//! These types provide compile-time type safety for the locale and timezone
//! identifiers the engine threads through formatter construction, plus the
//! opaque environment handle it passes along unchanged.

use std::any::Any;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

/// A locale identifier (e.g. `en_US`) supplied by the engine's locale
/// resolution policy. The formatting core never interprets its contents.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Locale(Arc<str>);

impl Locale {
    /// Creates a new Locale from a string
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Returns the string representation of this locale
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Locale {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for Locale {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for Locale {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A timezone identifier (e.g. `UTC`, `Europe/Oslo`) supplied by the
/// engine's timezone resolution policy.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct TimeZone(Arc<str>);

impl TimeZone {
    /// Creates a new TimeZone from a string
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Returns the string representation of this timezone
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for TimeZone {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for TimeZone {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for TimeZone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque handle to the calling engine's per-render state.
///
/// Factories receive this unchanged and may hold on to it for formatters
/// that need engine services; the formatting core itself never looks inside.
#[derive(Clone, Default)]
pub struct Environment {
    state: Option<Arc<dyn Any + Send + Sync>>,
}

impl Environment {
    /// An environment carrying no engine state.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wraps engine-owned state for pass-through.
    pub fn new(state: Arc<dyn Any + Send + Sync>) -> Self {
        Self { state: Some(state) }
    }

    /// Returns the wrapped state handle, if any. Only the engine side
    /// downcasts this.
    pub fn state(&self) -> Option<&(dyn Any + Send + Sync)> {
        self.state.as_deref()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("state", &self.state.as_ref().map(|_| "<engine state>"))
            .finish()
    }
}
