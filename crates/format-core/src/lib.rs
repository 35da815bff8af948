//! Core abstractions for pluggable date/time formatting
//!
//! This crate defines the contract between date/time format plugins and the
//! Stampo rendering pipeline. Templates select a format with a short
//! specifier string: a format-type tag the engine resolves to a factory
//! (through an external registry), plus a parameter payload owned and
//! interpreted entirely by that factory. The factory validates the payload
//! and builds a reusable formatter; the engine's formatter cache owns the
//! instance from then on and shares it across concurrent renders.
//!
//! ## Key Abstractions
//!
//! - **`DateFormatFactory`**: Trait for validating a parameter payload into a ready formatter
//! - **`DateFormat`**: Trait for stateless, immutable value/text conversion
//! - **`MarkupFormat`**: Narrow seam to the engine's markup escaping layer
//! - **`FormatFactoryError`** / **`DateFormatError`**: Typed failures for
//!   construction and invocation

pub mod error;
pub mod markup;

pub use error::{quote, DateFormatError, FormatFactoryError};
pub use markup::MarkupFormat;

use stampo_types::{DateKind, DateValue, Environment, Locale, TimeZone};
use std::sync::Arc;

/// Builds formatters from user-supplied format parameters.
///
/// One factory instance serves every specifier that names its format type.
/// `create` runs the first time the engine sees a given (payload, locale,
/// timezone) combination, so implementations validate everything up front
/// and return either a fully usable formatter or an error — never a
/// formatter that can later fail on construction-time grounds.
pub trait DateFormatFactory: Send + Sync {
    /// Validates `params` and builds a formatter for values of `kind`.
    ///
    /// A factory either supports all three [`DateKind`]s or fails with
    /// [`FormatFactoryError::UnsupportedDateKind`]. `locale`, `time_zone`,
    /// and `env` are always supplied; factories that ignore them must
    /// accept them without side effects. `zoneless` is true when the values
    /// to be formatted carry no timezone information.
    fn create(
        &self,
        kind: DateKind,
        zoneless: bool,
        params: &str,
        locale: &Locale,
        time_zone: &TimeZone,
        env: &Environment,
    ) -> Result<Arc<dyn DateFormat>, FormatFactoryError>;
}

/// A reusable, data-agnostic date/time formatter.
///
/// Implementations are immutable: the same inputs always yield the same
/// outputs, and one instance may be invoked from many threads at once
/// without internal synchronization.
pub trait DateFormat: Send + Sync + std::fmt::Debug {
    /// Renders the value as text.
    ///
    /// An absent value fails with [`DateFormatError::UnformattableValue`]
    /// rather than producing a sentinel string.
    fn format(&self, value: Option<&DateValue>) -> Result<String, DateFormatError>;

    /// Renders the value as text already escaped for `output`.
    ///
    /// Formatters with no markup-aware mode report
    /// [`DateFormatError::MarkupFormattingUnsupported`] — the default body
    /// here — and callers use that signal to fall back to
    /// [`DateFormat::format`] plus external escaping.
    fn format_to_markup(
        &self,
        value: Option<&DateValue>,
        output: &dyn MarkupFormat,
    ) -> Result<String, DateFormatError> {
        let _ = (value, output);
        Err(DateFormatError::MarkupFormattingUnsupported)
    }

    /// Reads a value back from text, for bidirectional contexts such as
    /// form input round-trips. Fails with
    /// [`DateFormatError::MalformedInput`] on non-parseable text.
    fn parse(&self, text: &str) -> Result<DateValue, DateFormatError>;

    /// True if the output varies with the locale the formatter was built
    /// for. Consumed by the engine's formatter cache to pick its cache-key
    /// granularity; must stay constant and accurate for the formatter's
    /// lifetime.
    fn is_locale_bound(&self) -> bool;

    /// True if the output varies with the timezone the formatter was built
    /// for. Same caching contract as [`DateFormat::is_locale_bound`].
    fn is_time_zone_bound(&self) -> bool;

    /// A short, stable, human-readable description for diagnostics and
    /// tooling. Not used for equality or caching.
    fn describe(&self) -> String;
}

/// Unwraps a possibly absent date/time value, failing the way formatters
/// are required to when a template expression resolved to a dateless model.
pub fn require_value(value: Option<&DateValue>) -> Result<&DateValue, DateFormatError> {
    value.ok_or_else(|| DateFormatError::unformattable("no date/time value is present"))
}
