use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::ui::overview::{print_overview, print_overview_json};

/// Print the derived values for the given end times. The ledger is not
/// changed; opening the session still creates the database and runs
/// pending migrations.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { times, json } = cmd {
        let session = Session::open(cfg, times)?;
        let view = session.overview();

        if *json {
            print_overview_json(&session.state, &session.inputs, &view)?;
        } else {
            print_overview(&session.state, &session.inputs, &view, cfg);
        }
    }

    Ok(())
}
