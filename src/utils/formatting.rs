//! Formatting utilities used for CLI output.

use crate::core::codec::format_duration;
use crate::models::Duration;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// `H:MM`, optionally prefixed with `+` when non-zero.
pub fn render_duration(d: Duration, want_sign: bool) -> String {
    let sign = if want_sign && !d.is_zero() { "+" } else { "" };
    format!("{}{}", sign, format_duration(d))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_with_and_without_sign() {
        let d = Duration::from_minutes(95);
        assert_eq!(render_duration(d, false), "1:35");
        assert_eq!(render_duration(d, true), "+1:35");
        assert_eq!(render_duration(Duration::ZERO, true), "0:00");
    }
}
