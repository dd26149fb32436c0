mod cli;

use clap::Parser;
use cli::{Cli, Command};
use ghoste::config::Config;
use ghoste::error::Result;
use ghoste::{PlanOptions, preset};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_presets(json: bool) -> Result<()> {
    let presets: Vec<preset::Preset> = preset::presets().collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&presets)?);
        return Ok(());
    }

    for preset in &presets {
        let chunks: Vec<String> = preset
            .plan
            .chunks()
            .map(|chunk| chunk.secs().to_string())
            .collect();
        println!(
            "{:>3}s  [{}] = {}s{}",
            preset.seconds,
            chunks.join(", "),
            preset.plan.total_seconds(),
            if preset.multi_segment {
                "  (multi-segment)"
            } else {
                ""
            },
        );
    }

    Ok(())
}

fn run() -> Result<()> {
    let args = Cli::parse();
    let config = Config::load(args.config.as_deref())?;

    match args.command {
        Command::Plan {
            seconds,
            output,
            extension,
            json,
        } => {
            let options = PlanOptions {
                target_secs: seconds,
                output,
                extension,
            };

            if json {
                let report = ghoste::prepare(&options, &config, |_| {})?;
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                ghoste::prepare(&options, &config, |message| eprintln!("{message}"))?;
            }
        }
        Command::Presets { json } => print_presets(json)?,
        Command::Config => print!("{}", config.to_toml()?),
    }

    Ok(())
}

fn main() {
    init_logging();

    if let Err(error) = run() {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}
