use crate::cli::parser::{Commands, EndTimes};
use crate::config::Config;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { weekly } = cmd {
        let mut session = Session::open(cfg, &EndTimes::default())?;

        if *weekly {
            let commit = session.ledger.reset_weekly(&session.state, &session.inputs);
            if session.apply(commit, "reset_weekly", "weekly bucket reset") {
                success("Weekly overtime reset to 0:00.");
            }
        } else {
            let commit = session.ledger.reset_all(&session.inputs);
            if session.apply(commit, "reset", "all buckets reset, store cleared") {
                warning("All overtime data cleared.");
            }
        }
    }

    Ok(())
}
