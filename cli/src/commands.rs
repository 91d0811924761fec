pub mod diagnose;
pub mod health;
pub mod interactive;

use clap::{ArgAction, Parser, Subcommand};
use medassist_common::config::Overrides;

#[derive(Parser)]
#[command(name = "medassist")]
#[command(version, about = "Ranks likely diagnoses for a free-text symptom description.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Root URL of the diagnostic service [env: MEDASSIST_URL]
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Give up on a request after this many seconds [env: MEDASSIST_TIMEOUT_SECS]
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Reduce output, repeat for less
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Skip the banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Submit symptoms once and print the ranked diagnoses
    #[command(alias = "d")]
    Diagnose {
        /// Symptom description; read from stdin when omitted
        symptoms: Vec<String>,
    },
    /// Open the full-screen symptom form (default)
    #[command(alias = "i")]
    Interactive,
    /// Check that the diagnostic service is up
    #[command(alias = "h")]
    Health,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn overrides(&self) -> Overrides {
        Overrides {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            quiet: self.quiet,
            no_banner: self.no_banner,
        }
    }
}
