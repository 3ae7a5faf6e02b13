use crate::models::duration::Duration;
use serde::Serialize;

/// The three period buckets.
///
/// `weekly_overtime` and `total_overtime` are persisted; `grand_total` lives
/// only for the session and is `None` until a merge has happened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LedgerState {
    pub weekly_overtime: Duration,
    pub total_overtime: Duration,
    pub grand_total: Option<Duration>,
}

impl LedgerState {
    pub fn new(weekly_overtime: Duration, total_overtime: Duration) -> Self {
        Self {
            weekly_overtime,
            total_overtime,
            grand_total: None,
        }
    }
}
