use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::ui::overview::print_overview;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Merge { times } = cmd {
        let mut session = Session::open(cfg, times)?;

        let commit = session.ledger.merge(&session.state, &session.inputs);
        let total = commit.state.total_overtime;
        let message = format!("period closed, total now {}", total);

        if session.apply(commit, "merge", &message) {
            success(format!("Period merged, carried total is now {}.", total));
        }
        print_overview(&session.state, &session.inputs, &session.overview(), cfg);
    }

    Ok(())
}
