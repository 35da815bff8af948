use stampo::{
    DateFormat, DateFormatFactory, DateKind, Environment, EpochDivFormatFactory,
    FormatFactoryError, Locale, MarkupFormat, TimeZone,
};
use std::sync::Arc;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Minimal HTML escaping double standing in for the engine's markup layer.
pub struct Html;

impl MarkupFormat for Html {
    fn name(&self) -> &'static str {
        "HTML"
    }

    fn escape_text(&self, raw: &str) -> String {
        raw.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
    }
}

/// XML double, so "regardless of target format" claims can be checked
/// against more than one target.
pub struct Xml;

impl MarkupFormat for Xml {
    fn name(&self) -> &'static str {
        "XML"
    }

    fn escape_text(&self, raw: &str) -> String {
        Html.escape_text(raw).replace('"', "&quot;")
    }
}

/// Builds the reference epoch-div formatter with ambient en_US/UTC context.
pub fn epoch_format(params: &str) -> Result<Arc<dyn DateFormat>, FormatFactoryError> {
    epoch_format_with(params, DateKind::DateTime, "en_US", "UTC")
}

pub fn epoch_format_with(
    params: &str,
    kind: DateKind,
    locale: &str,
    time_zone: &str,
) -> Result<Arc<dyn DateFormat>, FormatFactoryError> {
    EpochDivFormatFactory.create(
        kind,
        false,
        params,
        &Locale::from(locale),
        &TimeZone::from(time_zone),
        &Environment::empty(),
    )
}
