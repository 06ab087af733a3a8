//! CLI definitions and command dispatch.

use std::env::current_dir;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::debug;

use gicon_core::{fetch_default_font, generate_default_icons};

#[derive(Parser)]
#[command(name = "gicon", version)]
#[command(about = "Generate extension icons and fetch the Material Icons font")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Commands {
    /// Render images/icon{16,48,128}.png
    Icons,
    /// Download css/fonts/MaterialIcons-Regular.woff2
    FetchFont,
}

impl Commands {
    /// Runs the command with the working directory as the anchor.
    ///
    /// A non-200 font download is reported on stdout and still exits normally.
    pub fn run(self) -> Result<()> {
        let root = current_dir().context("Failed to resolve working directory")?;
        debug!("Anchor directory {}", root.display());

        match self {
            Commands::Icons => {
                generate_default_icons(&root)?;
            }
            Commands::FetchFont => {
                fetch_default_font(&root)?;
            }
        }
        Ok(())
    }
}
