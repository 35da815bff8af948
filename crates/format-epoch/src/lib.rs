//! Divisor-based epoch formatter.
//!
//! The simplest complete plugin for the date format contract: the
//! specifier's parameter payload is an integer divisor, and formatting
//! emits `epoch_millis / divisor` as decimal text. Useful on its own for
//! raw Unix timestamps (`1` for millis, `1000` for seconds) and as the
//! reference implementation the contract's behavioral guarantees are
//! exercised against.

use stampo_format_core::{
    require_value, DateFormat, DateFormatError, DateFormatFactory, FormatFactoryError,
};
use stampo_types::{DateKind, DateValue, Environment, Locale, TimeZone};
use std::sync::Arc;

/// Factory for divisor-based epoch formatters.
///
/// Accepts all three [`DateKind`]s and ignores locale and timezone; the
/// output is locale- and timezone-independent by construction. The divisor
/// is not range-checked here: zero and negative divisors build fine and are
/// only rejected when a division is actually attempted.
#[derive(Debug, Default, Clone, Copy)]
pub struct EpochDivFormatFactory;

impl DateFormatFactory for EpochDivFormatFactory {
    fn create(
        &self,
        _kind: DateKind,
        _zoneless: bool,
        params: &str,
        _locale: &Locale,
        _time_zone: &TimeZone,
        _env: &Environment,
    ) -> Result<Arc<dyn DateFormat>, FormatFactoryError> {
        let divisor = match params.parse::<i32>() {
            Ok(d) => d,
            Err(_) if params.is_empty() => {
                return Err(FormatFactoryError::missing_parameter("the divisor"));
            }
            Err(_) => {
                return Err(FormatFactoryError::malformed_parameter(params, "an integer"));
            }
        };
        log::trace!("built epoch-div date format (divisor: {})", divisor);
        Ok(Arc::new(EpochDivFormat { divisor }))
    }
}

#[derive(Debug)]
struct EpochDivFormat {
    divisor: i32,
}

impl DateFormat for EpochDivFormat {
    fn format(&self, value: Option<&DateValue>) -> Result<String, DateFormatError> {
        let millis = require_value(value)?.epoch_millis();
        // checked_div covers both a zero divisor and i64::MIN / -1.
        let quotient = millis.checked_div(i64::from(self.divisor)).ok_or_else(|| {
            DateFormatError::unformattable(format!(
                "epoch millis {} cannot be divided by {}",
                millis, self.divisor
            ))
        })?;
        Ok(quotient.to_string())
    }

    fn parse(&self, text: &str) -> Result<DateValue, DateFormatError> {
        // Input arrives as raw epoch millis, not the divided form `format`
        // emits.
        text.parse::<i64>()
            .map(DateValue::new)
            .map_err(|_| DateFormatError::malformed_input(text))
    }

    fn is_locale_bound(&self) -> bool {
        false
    }

    fn is_time_zone_bound(&self) -> bool {
        false
    }

    fn describe(&self) -> String {
        "millis since the epoch".to_string()
    }
}
