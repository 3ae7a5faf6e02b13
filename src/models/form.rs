use crate::models::duration::{ClockTime, Duration};
use serde::Serialize;

/// Clock-time inputs the user edits between commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormInputs {
    pub planned_end: ClockTime,
    pub actual_end: ClockTime,
}

/// Derived read-only values shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Overview {
    pub today: Duration,
    pub weekly_total: Duration,
    pub grand_total: Option<Duration>,
}
