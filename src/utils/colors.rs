/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Overtime color: green when there is some, grey when zero.
pub fn color_for_overtime(minutes: u32) -> &'static str {
    if minutes > 0 { GREEN } else { GREY }
}
