use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::ui::overview::print_overview;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Save { times } = cmd {
        let mut session = Session::open(cfg, times)?;
        let today = session.overview().today;

        let commit = session.ledger.save_weekly(&session.state, &session.inputs);
        let weekly = commit.state.weekly_overtime;
        let message = format!("+{} today, weekly now {}", today, weekly);

        if session.apply(commit, "save", &message) {
            success(format!("Saved {} into the weekly bucket.", today));
        }
        print_overview(&session.state, &session.inputs, &session.overview(), cfg);
    }

    Ok(())
}
