//! Narrow seam to the engine's markup escaping layer.
//!
//! The escaping machinery itself lives in the rendering pipeline; this
//! trait is the slice of it a markup-aware formatter needs.

/// A target markup output format (HTML, XML, ...).
///
/// Formatters that implement `format_to_markup` use [`MarkupFormat::escape_text`]
/// for any text they did not produce themselves, so the engine's
/// auto-escaping guarantees hold regardless of which plugin produced the
/// output.
pub trait MarkupFormat: Send + Sync {
    /// Returns a human-readable name for this markup format (for logging/debugging).
    fn name(&self) -> &'static str;

    /// Escapes plain text for safe inclusion in this markup format.
    fn escape_text(&self, raw: &str) -> String;
}
