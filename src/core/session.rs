//! One CLI invocation = one session: open the store, load the ledger,
//! take the form inputs from the command line, commit, persist.

use crate::cli::parser::EndTimes;
use crate::config::Config;
use crate::core::codec::parse_duration;
use crate::core::ledger::{Commit, PeriodLedger};
use crate::db::initialize::init_db;
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::db::store::apply_writes;
use crate::errors::AppResult;
use crate::models::{ClockTime, FormInputs, LedgerState, Overview};
use crate::ui::messages::warning;

pub struct Session {
    pub pool: DbPool,
    pub ledger: PeriodLedger,
    pub state: LedgerState,
    pub inputs: FormInputs,
}

impl Session {
    pub fn open(cfg: &Config, times: &EndTimes) -> AppResult<Self> {
        let pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        let ledger = PeriodLedger::new(cfg.default_end());
        let state = PeriodLedger::load(&pool.store())?;
        let inputs = inputs_from(times, ledger.default_end());

        Ok(Self {
            pool,
            ledger,
            state,
            inputs,
        })
    }

    pub fn overview(&self) -> Overview {
        PeriodLedger::derive(&self.state, &self.inputs)
    }

    /// Adopt the commit and replay its writes as one batch.
    ///
    /// Returns whether the writes reached the store. On failure nothing is
    /// persisted or logged, a warning is printed, and the in-memory state
    /// still moves forward.
    pub fn apply(&mut self, commit: Commit, operation: &str, message: &str) -> bool {
        let mut store = self.pool.store();
        let persisted = match apply_writes(&mut store, &commit.writes) {
            Ok(()) => true,
            Err(e) => {
                warning(format!("Could not persist '{}': {}", operation, e));
                false
            }
        };

        self.state = commit.state;
        self.inputs = commit.inputs;

        if persisted {
            ttlog_or_warn(&self.pool.conn, operation, "ledger", message);
        }
        persisted
    }
}

/// Missing flags fall back to the default end time; unreadable ones to `0:00`.
pub fn inputs_from(times: &EndTimes, default_end: ClockTime) -> FormInputs {
    let pick = |v: &Option<String>| v.as_deref().map(parse_duration).unwrap_or(default_end);
    FormInputs {
        planned_end: pick(&times.planned),
        actual_end: pick(&times.actual),
    }
}
