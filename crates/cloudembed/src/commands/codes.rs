//! `cloudembed codes` command implementation.

use std::path::PathBuf;

use clap::Args;
use cloudembed_bbc::{BbcCode, Plugin};
use cloudembed_config::Config;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the codes command.
#[derive(Args)]
pub(crate) struct CodesArgs {
    /// Path to configuration file (default: auto-discover cloudembed.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl CodesArgs {
    /// Execute the codes command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let mut output = Output::new();
        let config = Config::load(self.config.as_deref(), None)?;

        let mut codes = Vec::new();
        config.plugin().register_codes(&mut codes);

        output.heading(&format_row("TAG", "TYPE", "BLOCK"))?;
        for code in &codes {
            output.line(&format_code(code))?;
        }

        Ok(())
    }
}

fn format_row(tag: &str, content_type: &str, block: &str) -> String {
    format!("{tag:<12} {content_type:<18} {block}")
}

fn format_code(code: &BbcCode) -> String {
    let block = if code.block_level { "yes" } else { "no" };
    format_row(&code.tag, code.content_type.as_str(), block)
}
