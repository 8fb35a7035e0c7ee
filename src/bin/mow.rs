use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use mower_sim::{parse, run};

#[derive(Debug, Parser)]
#[command(
    name = "mow",
    about = "Run a plain-text mowing plan and print each mower's final pose"
)]
struct Cli {
    /// Path to the mowing plan file.
    file: PathBuf,

    /// Emit the final poses as a JSON array instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Parse(#[from] mower_sim::ParseError),
    #[error("failed to serialize results: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    match run_plan(&Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn run_plan(cli: &Cli) -> Result<(), CliError> {
    let content = std::fs::read_to_string(&cli.file).map_err(|source| CliError::Read {
        path: cli.file.clone(),
        source,
    })?;
    let plan = parse(&content)?;
    let poses = run(&plan);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&poses)?);
    } else {
        for (index, pose) in poses.iter().enumerate() {
            println!(
                "Mower {}: [{}, {}] facing {}",
                index + 1,
                pose.position.x,
                pose.position.y,
                pose.orientation
            );
        }
    }
    Ok(())
}
