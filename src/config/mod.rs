pub mod script;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "gml-demo")]
#[command(version)]
#[command(about = "Five-minute walkthrough of the GML ecosystem")]
pub struct CliConfig {
    #[arg(short, long, help = "Enable verbose logging (written to stderr)")]
    pub verbose: bool,
}
