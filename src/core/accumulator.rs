//! Derived overtime values. Pure functions, recomputed whenever an input
//! changes; nothing here is cached.

use crate::models::{ClockTime, Duration};

/// `actual - planned`, never below zero.
pub fn today_overtime(planned: ClockTime, actual: ClockTime) -> Duration {
    actual.saturating_sub(planned)
}

/// Weekly bucket plus today's overtime.
pub fn weekly_total(weekly_so_far: Duration, today: Duration) -> Duration {
    weekly_so_far.saturating_add(today)
}

/// Weekly total carried onto the prior total.
pub fn grand_total(weekly_total: Duration, prior_total: Duration) -> Duration {
    weekly_total.saturating_add(prior_total)
}
