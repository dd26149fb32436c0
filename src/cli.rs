use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ghoste",
    about = "Plan generator-sized video segments for Ghoste One"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "Plan the segments for a requested duration")]
    Plan {
        #[arg(allow_negative_numbers = true, help = "Requested duration in seconds")]
        seconds: i64,

        #[arg(
            short,
            long,
            help = "Output path (without extension; segments get numbered suffixes)"
        )]
        output: Option<PathBuf>,

        #[arg(long, default_value = ghoste::DEFAULT_EXTENSION, help = "Extension for segment files")]
        extension: String,

        #[arg(long, help = "Print the plan as JSON on stdout")]
        json: bool,
    },

    #[command(about = "List the duration presets and their plans")]
    Presets {
        #[arg(long, help = "Print the presets as JSON on stdout")]
        json: bool,
    },

    #[command(about = "Print the effective configuration")]
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn plan_accepts_negative_seconds() {
        let cli = Cli::try_parse_from(["ghoste", "plan", "-3"]).unwrap();
        assert!(matches!(cli.command, Command::Plan { seconds: -3, .. }));
    }

    #[test]
    fn plan_defaults_extension() {
        let cli = Cli::try_parse_from(["ghoste", "plan", "30", "--json"]).unwrap();
        match cli.command {
            Command::Plan {
                extension, json, ..
            } => {
                assert_eq!(extension, "mp4");
                assert!(json);
            }
            _ => panic!("expected plan command"),
        }
    }

    #[test]
    fn config_flag_is_global() {
        let cli = Cli::try_parse_from(["ghoste", "presets", "--config", "ghoste.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("ghoste.toml")));
    }
}
