// SPDX-License-Identifier: MPL-2.0
//! Number formatting for the purchase card.
//!
//! Fixed-decimal output rounds exact ties away from zero, so a `4.25` rating
//! shows as `4.3`.

use unic_langid::LanguageIdentifier;

/// Narrow no-break space, the French digit group separator.
const NARROW_NBSP: char = '\u{202F}';

/// Rounds to `decimals` places, ties away from zero.
fn round_half_up(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Current price with two decimals, e.g. `$49.50`.
#[must_use]
pub fn price(value: f64) -> String {
    format!("${:.2}", round_half_up(value, 2))
}

/// Original price in its shortest form, e.g. `$60` or `$59.99`.
#[must_use]
pub fn original_price(value: f64) -> String {
    format!("${value}")
}

/// Rating with one decimal, e.g. `4.6`.
#[must_use]
pub fn rating(value: f64) -> String {
    format!("{:.1}", round_half_up(value, 1))
}

/// Digit group separator used by `locale`.
#[must_use]
pub fn thousands_separator(locale: &LanguageIdentifier) -> char {
    match locale.language.as_str() {
        "fr" => NARROW_NBSP,
        _ => ',',
    }
}

/// Review count with thousands separators, e.g. `12,840`.
#[must_use]
pub fn group_thousands(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }

    grouped
}
