mod commands;
mod terminal;

use commands::{CommandLine, Commands, diagnose, health, interactive};
use medassist_common::config::Config;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let overrides = commands.overrides();
    let command = commands.command.unwrap_or(Commands::Interactive);

    logging::init_logging(matches!(command, Commands::Interactive));

    let cfg = Config::from_env(overrides)?;

    match command {
        Commands::Diagnose { symptoms } => {
            print::banner(cfg.no_banner, cfg.quiet);
            print::header("submitting symptoms", cfg.quiet);
            diagnose::diagnose(symptoms, &cfg).await
        }
        Commands::Interactive => interactive::interactive(&cfg).await,
        Commands::Health => {
            print::banner(cfg.no_banner, cfg.quiet);
            print::header("checking service health", cfg.quiet);
            health::health(&cfg).await
        }
    }
}
