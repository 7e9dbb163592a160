use crate::export::ExportSource;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTrainer
#[derive(Parser)]
#[command(
    name = "rtrainer",
    version = env!("CARGO_PKG_VERSION"),
    about = "Personal-training console: customer and training grids, calendar, statistics and CSV export",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config_file: Option<String>,

    /// Override the customers document (JSON saved from the API)
    #[arg(global = true, long = "customers-file", value_name = "FILE")]
    pub customers_file: Option<String>,

    /// Override the trainings document (JSON saved from the API)
    #[arg(global = true, long = "trainings-file", value_name = "FILE")]
    pub trainings_file: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Show the configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file path")]
        path: bool,
    },

    /// Customer grid
    Customers {
        #[arg(
            long = "filter",
            value_name = "EXPR",
            help = "Column filter, e.g. city~hel, lastname=Lee (repeatable)"
        )]
        filters: Vec<String>,

        #[arg(long, value_name = "COL[:desc]", help = "Sort by column")]
        sort: Option<String>,

        #[arg(long, default_value_t = 1, help = "Page number (1-based)")]
        page: usize,
    },

    /// Training grid
    Trainings {
        #[arg(
            long = "filter",
            value_name = "EXPR",
            help = "Column filter, e.g. date=2024-05-10, duration>45, customer~ann (repeatable)"
        )]
        filters: Vec<String>,

        #[arg(long, value_name = "COL[:desc]", help = "Sort by column")]
        sort: Option<String>,

        #[arg(long, default_value_t = 1, help = "Page number (1-based)")]
        page: usize,
    },

    /// Calendar agenda of the trainings
    Calendar {
        #[arg(long, value_name = "YYYY-MM-DD", help = "First day shown")]
        from: Option<String>,

        #[arg(long, value_name = "YYYY-MM-DD", help = "Last day shown")]
        to: Option<String>,

        #[arg(long, help = "Print the calendar events as JSON")]
        json: bool,

        #[arg(long, value_name = "FILE", help = "Save the calendar events as a JSON file")]
        file: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,
    },

    /// Total minutes booked per activity
    Stats,

    /// Export records to CSV
    Export {
        #[arg(long, value_enum, default_value = "customers")]
        source: ExportSource,

        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,
    },
}
