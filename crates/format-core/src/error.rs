//! Typed failures for formatter construction and invocation.
//!
//! Both enums carry the offending raw input so callers can build a
//! user-facing diagnostic without re-deriving context. Nothing here is
//! logged or retried by the formatting core; errors always surface to the
//! immediate caller.

use stampo_types::DateKind;
use thiserror::Error;

/// Errors a factory reports while turning a format parameter payload into a
/// ready formatter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatFactoryError {
    /// The payload was empty but this format requires one.
    #[error("a format parameter is required, which specifies {expected}")]
    MissingParameter { expected: String },

    /// The payload was present but did not match this factory's grammar.
    /// The rendered message always quotes the offending payload.
    #[error("the format parameter must be {expected}, but was (shown quoted): {}", quote(.params))]
    MalformedParameter { params: String, expected: String },

    /// The factory does not build formatters for this kind of value.
    #[error("this format does not support formatting {kind} values")]
    UnsupportedDateKind { kind: DateKind },
}

impl FormatFactoryError {
    pub fn missing_parameter(expected: impl Into<String>) -> Self {
        Self::MissingParameter {
            expected: expected.into(),
        }
    }

    pub fn malformed_parameter(params: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::MalformedParameter {
            params: params.into(),
            expected: expected.into(),
        }
    }

    pub fn unsupported_date_kind(kind: DateKind) -> Self {
        Self::UnsupportedDateKind { kind }
    }
}

/// Errors a formatter reports while formatting or parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateFormatError {
    /// The value cannot be rendered as text (absent value, or a value the
    /// formatter's configuration cannot express).
    #[error("the value cannot be formatted: {reason}")]
    UnformattableValue { reason: String },

    /// The text handed to `parse` did not match the expected form. The
    /// rendered message always quotes the offending text.
    #[error("the input does not match the expected form, was (shown quoted): {}", quote(.input))]
    MalformedInput { input: String },

    /// This formatter has no markup-aware output mode. Callers distinguish
    /// "legitimately not provided" from a defect by matching on this.
    #[error("this date format has no markup output mode")]
    MarkupFormattingUnsupported,
}

impl DateFormatError {
    pub fn unformattable(reason: impl Into<String>) -> Self {
        Self::UnformattableValue {
            reason: reason.into(),
        }
    }

    pub fn malformed_input(input: impl Into<String>) -> Self {
        Self::MalformedInput {
            input: input.into(),
        }
    }
}

/// Quotes a raw, possibly user-supplied string for embedding in a
/// diagnostic. Escapes backslashes, double quotes, and control characters
/// so the result stays on one line.
pub fn quote(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 2);
    out.push('"');
    for ch in raw.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
