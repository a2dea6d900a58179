use clap::{Parser, Subcommand};

/// Command-line interface definition for timeledger
#[derive(Parser)]
#[command(
    name = "timeledger",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track work sessions with start/stop events and report worked time and overtime",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use with --edit")]
        editor: Option<String>,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Start a work session
    Start {
        #[arg(long = "at", value_name = "DATETIME", help = "Event time (default: now)")]
        at: Option<String>,

        #[arg(long = "project", help = "Project the session belongs to")]
        project: Option<String>,
    },

    /// Stop the running work session
    Stop {
        #[arg(long = "at", value_name = "DATETIME", help = "Event time (default: now)")]
        at: Option<String>,

        #[arg(long = "project", help = "Project the session belongs to")]
        project: Option<String>,
    },

    /// Add pause minutes to a day (negative values correct a previous entry)
    Pause {
        #[arg(allow_negative_numbers = true)]
        minutes: i64,

        #[arg(long = "date", value_name = "DATE", help = "Day of the pause (default: today)")]
        date: Option<String>,
    },

    /// Delete the event logged at an exact timestamp
    Del {
        #[arg(value_name = "DATETIME")]
        timestamp: String,
    },

    /// Manage free days (vacation, sick leave, ...)
    Timeoff {
        #[command(subcommand)]
        action: TimeoffAction,
    },

    /// Show the events, pause and worked time of one day
    Day {
        #[arg(value_name = "DATE", help = "Day to show (default: today)")]
        date: Option<String>,
    },

    /// Month report with one row per day
    Report {
        #[arg(long, short, value_name = "YYYY-MM", help = "Month to report (default: current)")]
        month: Option<String>,

        #[arg(long, help = "Print the ledger as JSON")]
        json: bool,
    },

    /// Year summary with one row per month
    Year {
        #[arg(value_name = "YYYY", help = "Year to summarize (default: current)")]
        year: Option<i32>,

        #[arg(long, help = "Print the summary as JSON")]
        json: bool,
    },

    /// All-time and per-year overtime
    Overtime {
        #[arg(long, help = "Print the totals as JSON")]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum TimeoffAction {
    /// Mark a day as free
    Add {
        #[arg(value_name = "DATE")]
        date: String,

        #[arg(long, default_value = crate::models::time_off::DEFAULT_REASON)]
        reason: String,
    },

    /// Remove a free day
    Del {
        #[arg(value_name = "DATE")]
        date: String,
    },

    /// List free days of a year
    List {
        #[arg(long, value_name = "YYYY")]
        year: Option<i32>,
    },
}
