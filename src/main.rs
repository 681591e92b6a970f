use std::env;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use verstamp::cli::orchestration::{self, PropagateWorkflowArgs};
use verstamp::ui;

#[derive(clap::Parser)]
#[command(
    name = "verstamp",
    about = "Propagate a version string across project files"
)]
struct Args {
    #[arg(help = "Target version, e.g. 1.4.2")]
    target_version: Option<String>,

    #[arg(
        short = 'C',
        long = "dir",
        help = "Working directory for rule paths (default: current directory)"
    )]
    dir: Option<PathBuf>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(long, help = "Preview what would happen without making changes")]
    dry_run: bool,

    #[arg(long, help = "Show configured rules and exit")]
    list: bool,

    #[arg(short = 'V', long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("verstamp {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let working_dir = match args.dir {
        Some(dir) => dir,
        None => env::current_dir()?,
    };

    if args.list {
        match orchestration::load_propagator(args.config.as_deref(), &working_dir) {
            Ok((propagator, _)) => ui::display_rules(propagator.rules()),
            Err(e) => {
                ui::display_error(&e.to_string());
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    let workflow_args = PropagateWorkflowArgs {
        version: args.target_version,
        working_dir,
        config_path: args.config,
        dry_run: args.dry_run,
    };

    if let Err(e) = orchestration::run_propagate_workflow(workflow_args) {
        ui::display_error(&e.to_string());
        if e.is_usage_error() {
            eprintln!("Usage: verstamp <MAJOR.MINOR.PATCH[suffix]>");
        }
        std::process::exit(1);
    }

    Ok(())
}
