mod score;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use topicscout_core::ScoringMode;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "topicscout")]
#[command(about = "Score and rank content topics by demand, competition and opportunity")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Score every topic in a topics file and print them ranked by opportunity
    Score {
        /// Topics file (YAML or JSON); defaults to `TOPICSCOUT_TOPICS_PATH`
        #[arg(long)]
        file: Option<PathBuf>,

        /// Scoring mode: `two_source`, `three_source` or `fast_exploration`
        #[arg(long)]
        mode: Option<ScoringMode>,

        /// Print the full scoring records as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Only show the N highest-ranked topics
        #[arg(long)]
        top: Option<usize>,

        /// Maximum topics scored at once; defaults to `TOPICSCOUT_MAX_CONCURRENT_TOPICS`
        #[arg(long)]
        max_concurrent: Option<usize>,
    },
    /// Validate a topics file without scoring it
    Check {
        /// Topics file (YAML or JSON); defaults to `TOPICSCOUT_TOPICS_PATH`
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = topicscout_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(env = %config.env, mode = %config.mode, "configuration loaded");

    match cli.command {
        Some(Commands::Score {
            file,
            mode,
            json,
            top,
            max_concurrent,
        }) => {
            let options = score::ScoreOptions {
                file,
                mode,
                json,
                top,
                max_concurrent,
            };
            score::run_score(&config, options).await?;
        }
        Some(Commands::Check { file }) => {
            let path = file.unwrap_or_else(|| config.topics_path.clone());
            score::run_check(&path)?;
        }
        None => println!("topicscout: try `topicscout score`, or `topicscout --help` for usage"),
    }

    Ok(())
}

#[cfg(test)]
mod tests;
