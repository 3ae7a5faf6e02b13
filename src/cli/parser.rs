use clap::{Parser, Subcommand};

/// Command-line interface definition for rovertime
#[derive(Parser)]
#[command(
    name = "rovertime",
    version = env!("CARGO_PKG_VERSION"),
    about = "Compute today's overtime and keep weekly and carried totals in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (config file is neither read nor written)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Show today's overtime and the running totals
    Show {
        #[command(flatten)]
        times: EndTimes,

        #[arg(long = "json", help = "Print the values as JSON")]
        json: bool,
    },

    /// Fold today's overtime into the weekly bucket
    Save {
        #[command(flatten)]
        times: EndTimes,
    },

    /// Close the period: move the weekly total onto the carried total
    Merge {
        #[command(flatten)]
        times: EndTimes,
    },

    /// Reset everything (clears the whole store)
    Reset {
        #[arg(long = "weekly", help = "Reset only the weekly bucket")]
        weekly: bool,
    },

    /// Set carried overtime from raw digits (e.g. 330 = 3:30)
    Set {
        #[arg(long = "weekly", value_name = "DIGITS", help = "Overtime carried from prior days")]
        weekly: Option<String>,

        #[arg(long = "total", value_name = "DIGITS", help = "Overtime carried from prior periods")]
        total: Option<String>,
    },
}

/// Planned and actual end of the working day.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct EndTimes {
    /// Planned end time (H:MM)
    #[arg(long = "planned", value_name = "H:MM")]
    pub planned: Option<String>,

    /// Actual end time (H:MM)
    #[arg(long = "actual", value_name = "H:MM")]
    pub actual: Option<String>,
}
