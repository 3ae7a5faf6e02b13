//! Period ledger: the weekly / total / grand-total buckets and the
//! operations that commit into them.
//!
//! Every operation takes the current state and form inputs and returns a
//! [`Commit`]: the next state, the next inputs, and the store writes the
//! caller has to replay. Operations never write to storage themselves.

use crate::core::accumulator::{grand_total, today_overtime, weekly_total};
use crate::core::codec::normalize_digits;
use crate::db::store::KvStore;
use crate::errors::AppResult;
use crate::models::{ClockTime, Duration, FormInputs, LedgerState, Overview, StoreOp};

pub const WEEKLY_KEY: &str = "weeklyOvertimeMinutes";
pub const TOTAL_KEY: &str = "totalOvertimeMinutes";

/// Result of a ledger operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub state: LedgerState,
    pub inputs: FormInputs,
    pub writes: Vec<StoreOp>,
}

pub struct PeriodLedger {
    default_end: ClockTime,
}

impl PeriodLedger {
    pub fn new(default_end: ClockTime) -> Self {
        Self { default_end }
    }

    pub fn default_end(&self) -> ClockTime {
        self.default_end
    }

    /// Read both durable buckets. Missing or unreadable values count as 0.
    pub fn load<S: KvStore + ?Sized>(store: &S) -> AppResult<LedgerState> {
        let weekly = read_minutes(store, WEEKLY_KEY)?;
        let total = read_minutes(store, TOTAL_KEY)?;
        Ok(LedgerState::new(weekly, total))
    }

    /// Today's overtime, the running weekly total and the grand total.
    pub fn derive(state: &LedgerState, inputs: &FormInputs) -> Overview {
        let today = today_overtime(inputs.planned_end, inputs.actual_end);
        Overview {
            today,
            weekly_total: weekly_total(state.weekly_overtime, today),
            grand_total: state.grand_total,
        }
    }

    /// Fold today's overtime into the weekly bucket.
    pub fn save_weekly(&self, state: &LedgerState, inputs: &FormInputs) -> Commit {
        let today = today_overtime(inputs.planned_end, inputs.actual_end);
        let weekly = weekly_total(state.weekly_overtime, today);

        Commit {
            state: LedgerState {
                weekly_overtime: weekly,
                ..*state
            },
            inputs: self.clear_actual(inputs),
            writes: vec![StoreOp::set(WEEKLY_KEY, weekly.total_minutes())],
        }
    }

    /// Close the period: weekly accrual plus today go onto the total,
    /// the weekly bucket restarts from zero.
    pub fn merge(&self, state: &LedgerState, inputs: &FormInputs) -> Commit {
        let today = today_overtime(inputs.planned_end, inputs.actual_end);
        let sum = grand_total(
            weekly_total(state.weekly_overtime, today),
            state.total_overtime,
        );

        Commit {
            state: LedgerState {
                weekly_overtime: Duration::ZERO,
                total_overtime: sum,
                grand_total: Some(sum),
            },
            inputs: self.clear_actual(inputs),
            writes: vec![
                StoreOp::set(TOTAL_KEY, sum.total_minutes()),
                StoreOp::set(WEEKLY_KEY, 0),
            ],
        }
    }

    /// Zero everything and wipe the entire store.
    pub fn reset_all(&self, inputs: &FormInputs) -> Commit {
        Commit {
            state: LedgerState::default(),
            inputs: self.clear_actual(inputs),
            writes: vec![StoreOp::Clear],
        }
    }

    /// Zero only the weekly bucket and drop its key.
    pub fn reset_weekly(&self, state: &LedgerState, inputs: &FormInputs) -> Commit {
        Commit {
            state: LedgerState {
                weekly_overtime: Duration::ZERO,
                ..*state
            },
            inputs: self.clear_actual(inputs),
            writes: vec![StoreOp::Remove { key: WEEKLY_KEY }],
        }
    }

    /// Overwrite the weekly bucket from the "carried from prior days" field.
    pub fn set_weekly(&self, state: &LedgerState, inputs: &FormInputs, raw: &str) -> Commit {
        let weekly = normalize_digits(raw);
        Commit {
            state: LedgerState {
                weekly_overtime: weekly,
                ..*state
            },
            inputs: *inputs,
            writes: vec![StoreOp::set(WEEKLY_KEY, weekly.total_minutes())],
        }
    }

    /// Overwrite the total bucket from the "carried from prior period" field.
    pub fn set_total(&self, state: &LedgerState, inputs: &FormInputs, raw: &str) -> Commit {
        let total = normalize_digits(raw);
        Commit {
            state: LedgerState {
                total_overtime: total,
                ..*state
            },
            inputs: *inputs,
            writes: vec![StoreOp::set(TOTAL_KEY, total.total_minutes())],
        }
    }

    fn clear_actual(&self, inputs: &FormInputs) -> FormInputs {
        FormInputs {
            actual_end: self.default_end,
            ..*inputs
        }
    }
}

fn read_minutes<S: KvStore + ?Sized>(store: &S, key: &str) -> AppResult<Duration> {
    let minutes = store
        .get(key)?
        .and_then(|v| v.trim().parse::<u32>().ok())
        .unwrap_or(0);
    Ok(Duration::from_minutes(minutes))
}
