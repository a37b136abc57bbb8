//! Shared formatting helpers for numbers, timestamps, and embed text.

use chrono::{DateTime, Utc};

/// Inserts `,` between every group of three digits.
///
/// `digits` must be a run of ASCII digits without sign or fraction.
pub fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Formats a signed integer with `en-US` thousands separators.
pub fn format_grouped_i64(value: i64) -> String {
    let grouped = group_thousands(&value.unsigned_abs().to_string());
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Formats an unsigned integer with `en-US` thousands separators.
pub fn format_grouped_u64(value: u64) -> String {
    group_thousands(&value.to_string())
}

/// Formats a float with `en-US` thousands separators and at most three
/// fraction digits, trailing zeros removed (`1234.5` -> `1,234.5`).
///
/// Rounding works on the shortest decimal form of `value`, half away from
/// zero, so `1.0005` becomes `1.001`.
pub fn format_grouped_f64(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let shortest = value.abs().to_string();
    let (int_part, frac_part) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));
    let (int_part, frac_part) = round_half_up(int_part, frac_part, 3);
    let frac = frac_part.trim_end_matches('0');
    let is_zero = int_part.bytes().all(|b| b == b'0') && frac.is_empty();
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    if frac.is_empty() {
        format!("{sign}{}", group_thousands(&int_part))
    } else {
        format!("{sign}{}.{frac}", group_thousands(&int_part))
    }
}

/// Rounds the decimal digits `int.frac` to `places` fraction digits, half
/// away from zero. Returns the integer and fraction digits separately.
fn round_half_up(int: &str, frac: &str, places: usize) -> (String, String) {
    let mut digits: Vec<u8> = int.bytes().collect();
    digits.extend(frac.bytes().take(places));
    digits.resize(int.len() + places, b'0');

    if frac.as_bytes().get(places).is_some_and(|&d| d >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - places;
    let frac_digits = digits.split_off(split);
    (
        String::from_utf8_lossy(&digits).into_owned(),
        String::from_utf8_lossy(&frac_digits).into_owned(),
    )
}

/// Discord relative time markup (`<t:1700000000:R>`), rendered client-side
/// as "3 hours ago".
pub fn format_relative_timestamp(timestamp: DateTime<Utc>) -> String {
    format!("<t:{}:R>", timestamp.timestamp())
}

/// Truncates a string to at most `max_chars` characters, ending with `...`
/// when shortened. Never splits a multi-byte character.
pub fn truncate_string(input: &str, max_chars: usize) -> String {
    if input.chars().count() <= max_chars {
        return input.to_string();
    }

    let kept: String = input.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{kept}...")
}
