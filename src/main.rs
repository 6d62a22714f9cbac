use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use duty_roster::clock::SystemClock;
use duty_roster::config::{RosterConfig, DEFAULT_UTC_OFFSET_HOURS};
use duty_roster::display::print_run_report;
use duty_roster::export::CsvSink;
use duty_roster::parser::CsvSource;
use duty_roster::schedule::{execute, AssignmentEngine, RunReport};
use duty_roster::trigger::run_every;

#[derive(Parser, Debug)]
#[command(name = "duty-roster")]
#[command(version)]
#[command(about = "Assigns recurring duties fairly by historical count")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fill every day once and persist the result
    Run(RosterArgs),

    /// Run again on a fixed interval until interrupted
    Watch {
        #[command(flatten)]
        roster: RosterArgs,

        /// Seconds between runs
        #[arg(long, default_value = "86400")]
        every_secs: u64,
    },
}

#[derive(Args, Debug)]
struct RosterArgs {
    /// Duty definitions CSV
    #[arg(long, env = "ROSTER_DUTIES", default_value = "data/duties.csv")]
    duties: PathBuf,

    /// Member counts CSV, rewritten after each run
    #[arg(long, env = "ROSTER_MEMBERS", default_value = "data/members.csv")]
    members: PathBuf,

    /// Output directory for roster files
    #[arg(long, env = "ROSTER_OUTPUT", default_value = "output")]
    output: PathBuf,

    /// UTC offset in hours for the run label
    #[arg(long, env = "ROSTER_UTC_OFFSET", default_value_t = DEFAULT_UTC_OFFSET_HOURS, allow_hyphen_values = true)]
    utc_offset: i32,

    /// Seed for tie-breaking
    #[arg(long, env = "ROSTER_SEED")]
    seed: Option<u64>,

    /// Treat the first row of each CSV as data
    #[arg(long)]
    no_header: bool,
}

impl From<RosterArgs> for RosterConfig {
    fn from(args: RosterArgs) -> Self {
        Self {
            duties_path: args.duties,
            members_path: args.members,
            output_dir: args.output,
            utc_offset_hours: args.utc_offset,
            seed: args.seed,
            skip_header: !args.no_header,
        }
    }
}

fn run_once(config: &RosterConfig) -> duty_roster::Result<RunReport> {
    let mut source = CsvSource::new(&config.duties_path, &config.members_path);
    source.skip_header = config.skip_header;
    let mut sink = CsvSink::new(&config.output_dir, &config.members_path);
    sink.write_header = config.skip_header;
    let clock = SystemClock::with_offset_hours(config.utc_offset_hours)?;

    match config.seed {
        Some(seed) => execute(&source, &mut sink, &clock, &mut AssignmentEngine::seeded(seed)),
        None => execute(&source, &mut sink, &clock, &mut AssignmentEngine::from_entropy()),
    }
}

async fn watch(config: RosterConfig, every: Duration) {
    tracing::info!(every_secs = every.as_secs(), "Watching for scheduled runs");

    run_every(every, tokio::signal::ctrl_c(), || match run_once(&config) {
        Ok(report) => print_run_report(&report),
        // Nothing was persisted; try again next tick
        Err(e) => tracing::error!(error = %e, "Scheduled run failed"),
    })
    .await;
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => {
            let config = RosterConfig::from(args);
            config.validate()?;
            let report = run_once(&config)?;
            print_run_report(&report);
        }
        Commands::Watch { roster, every_secs } => {
            let config = RosterConfig::from(roster);
            config.validate()?;
            watch(config, Duration::from_secs(every_secs.max(1))).await;
        }
    }

    Ok(())
}
