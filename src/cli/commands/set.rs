use crate::cli::parser::{Commands, EndTimes};
use crate::config::Config;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Carried-over values typed as raw digits; normalized once, here.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Set { weekly, total } = cmd {
        if weekly.is_none() && total.is_none() {
            info("Nothing to set: pass --weekly and/or --total.");
            return Ok(());
        }

        let mut session = Session::open(cfg, &EndTimes::default())?;

        if let Some(raw) = weekly {
            let commit = session.ledger.set_weekly(&session.state, &session.inputs, raw);
            let value = commit.state.weekly_overtime;
            if session.apply(commit, "set", &format!("weekly overtime = {}", value)) {
                success(format!("Weekly overtime set to {}.", value));
            }
        }

        if let Some(raw) = total {
            let commit = session.ledger.set_total(&session.state, &session.inputs, raw);
            let value = commit.state.total_overtime;
            if session.apply(commit, "set", &format!("total overtime = {}", value)) {
                success(format!("Carried total set to {}.", value));
            }
        }
    }

    Ok(())
}
