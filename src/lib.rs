//! Pluggable date/time formatting for the Stampo template engine.
//!
//! Templates select a date/time format at render time with a short
//! specifier string: a format-type tag the engine resolves to a factory,
//! plus a parameter payload that factory owns. This crate bundles the
//! contract those plugins implement (`stampo-format-core`) with the value
//! model they exchange (`stampo-types`) and the reference divisor-based
//! epoch plugin (`stampo-format-epoch`).

pub use stampo_format_core::{
    quote, require_value, DateFormat, DateFormatError, DateFormatFactory, FormatFactoryError,
    MarkupFormat,
};
pub use stampo_format_epoch::EpochDivFormatFactory;
pub use stampo_types::{DateKind, DateValue, Environment, Locale, TimeZone};
