//! Time codec: turns user-typed clock times and durations into minute
//! counts and back.
//!
//! Parsing never fails. Anything that cannot be read as a duration is
//! treated as "nothing entered" and becomes `0:00`.

use crate::models::Duration;

/// Largest value the minutes component may take in digit-only input.
const MAX_MINUTES_PART: u32 = 59;

/// Parse `H:MM` / `HH:MM`, or a bare digit string such as `330` (= `3:30`).
///
/// Colon form: hours are unbounded and minutes are added as written.
/// Digit form: see [`normalize_digits`]. Anything else yields zero.
pub fn parse_duration(input: &str) -> Duration {
    let s = input.trim();
    if s.is_empty() {
        return Duration::ZERO;
    }

    if let Some((h, m)) = s.split_once(':') {
        return match (parse_component(h), parse_component(m)) {
            (Some(hours), Some(minutes)) => Duration::from_hm(hours, minutes),
            _ => Duration::ZERO,
        };
    }

    if s.bytes().all(|b| b.is_ascii_digit()) {
        return digits_to_duration(s);
    }

    Duration::ZERO
}

/// Render as `H:MM` (`7:05`, `0:00`, `26:40`).
pub fn format_duration(d: Duration) -> String {
    d.to_string()
}

/// Strip every non-digit character, then read what is left as a
/// digit-only duration. Meant for free-text fields normalized on focus loss.
pub fn normalize_digits(raw: &str) -> Duration {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    digits_to_duration(&digits)
}

/// Last two digits are minutes (clamped to 59), the rest are hours.
/// Fewer than three digits means minutes only.
fn digits_to_duration(digits: &str) -> Duration {
    if digits.is_empty() {
        return Duration::ZERO;
    }

    if digits.len() < 3 {
        let minutes = digits.parse::<u32>().unwrap_or(0);
        return Duration::from_hm(0, minutes.min(MAX_MINUTES_PART));
    }

    let (h, m) = digits.split_at(digits.len() - 2);
    match (h.parse::<u32>(), m.parse::<u32>()) {
        (Ok(hours), Ok(minutes)) => Duration::from_hm(hours, minutes.min(MAX_MINUTES_PART)),
        _ => Duration::ZERO,
    }
}

fn parse_component(s: &str) -> Option<u32> {
    let s = s.trim();
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
