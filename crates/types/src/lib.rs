pub mod context;
pub mod date;

pub use context::{Environment, Locale, TimeZone};
pub use date::{DateKind, DateValue};
