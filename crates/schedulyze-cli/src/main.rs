use clap::{Parser, Subcommand};

mod commands;
mod common;

#[derive(Parser)]
#[command(name = "schedulyze", version, about = "Schedulyze study scheduler CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a study schedule from a plan file
    Plan(commands::plan::PlanArgs),
    /// Show the priority analysis for the subjects in a plan file
    Priorities(commands::priorities::PrioritiesArgs),
    /// Export a generated schedule to a calendar format
    Export(commands::export::ExportArgs),
    /// Show summary statistics for a generated schedule
    Summary(commands::summary::SummaryArgs),
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Plan(args) => commands::plan::run(args),
        Commands::Priorities(args) => commands::priorities::run(args),
        Commands::Export(args) => commands::export::run(args),
        Commands::Summary(args) => commands::summary::run(args),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
