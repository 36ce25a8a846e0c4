//! Locale price normalization
//!
//! Store prices arrive as display strings like `"1.299,90 TL"`: dot as the
//! thousands separator, comma as the decimal separator, a currency marker, and
//! sometimes non-breaking spaces. This module turns them into plain `f64`
//! values.

/// Normalizes a locale-formatted price string into a numeric value
///
/// Thousands separators, non-breaking spaces, and currency markers are
/// stripped; a decimal comma becomes a decimal point; anything left that is
/// not a digit is discarded around the decimal point. Malformed or empty
/// input yields `0.0` rather than an error, so a bad price never aborts an
/// otherwise-valid record.
pub fn normalize_price(raw: &str) -> f64 {
    // Dot is the thousands separator in this locale, drop it outright.
    let cleaned = raw
        .replace('\u{a0}', "")
        .replace('.', "")
        .trim()
        .replace(',', ".");

    let digits_of = |s: &str| -> String { s.chars().filter(|c| c.is_ascii_digit()).collect() };

    let numeric = if let Some((integer_part, fractional_part)) = cleaned.split_once('.') {
        format!("{}.{}", digits_of(integer_part), digits_of(fractional_part))
    } else {
        digits_of(&cleaned)
    };

    numeric.parse().unwrap_or(0.0)
}
