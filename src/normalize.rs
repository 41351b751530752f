//! Text normalization for comparison
//!
//! Every comparison in the engine operates on a canonical form: lowercase,
//! canonically decomposed (NFD), with combining diacritical marks removed.
//! "Café" and "cafe" normalize to the same string.

use unicode_normalization::UnicodeNormalization;

/// Combining diacritical marks block stripped during normalization.
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036F}';

/// Fold text to its canonical comparable form.
///
/// Lowercases, applies Unicode canonical decomposition (NFD) and drops
/// combining diacritical marks. Total and idempotent: normalizing an
/// already-normalized string is a no-op, and the empty string maps to
/// itself.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !COMBINING_MARKS.contains(c))
        .collect()
}
