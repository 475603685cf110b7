//! `cloudembed buttons` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use cloudembed_bbc::{ButtonGroups, FallbackPlacement, Placement, SoundCloudPlugin};
use cloudembed_config::{CliSettings, Config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the buttons command.
#[derive(Args)]
pub(crate) struct ButtonsArgs {
    /// Toolbar JSON file, a list of button groups (default: stdin).
    file: Option<PathBuf>,

    /// Code of the button to insert after (overrides config).
    #[arg(long)]
    after: Option<String>,

    /// Placement when that button is missing: last-group or new-group (overrides config).
    #[arg(long)]
    fallback: Option<FallbackPlacement>,

    /// Path to configuration file (default: auto-discover cloudembed.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl ButtonsArgs {
    /// Execute the buttons command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the toolbar JSON cannot be
    /// read or parsed.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let mut output = Output::new();

        let cli_settings = CliSettings {
            after: self.after,
            fallback: self.fallback,
            ..Default::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let plugin = config.plugin();

        let json = match self.file.as_deref() {
            Some(path) if path != Path::new("-") => std::fs::read_to_string(path)?,
            _ => std::io::read_to_string(std::io::stdin())?,
        };
        let (placement, toolbar) = add_button(&plugin, &json)?;
        tracing::info!(?placement, "Inserted SoundCloud button");

        output.note(&describe(placement, plugin.reference_code()));
        output.line(&toolbar)?;

        Ok(())
    }
}

/// Parse a toolbar, place the plugin's button and serialize the result.
fn add_button(plugin: &SoundCloudPlugin, json: &str) -> Result<(Placement, String), CliError> {
    let mut groups: ButtonGroups = serde_json::from_str(json)?;
    let placement = plugin.place_button(&mut groups);
    Ok((placement, serde_json::to_string_pretty(&groups)?))
}

/// Human-readable placement summary.
fn describe(placement: Placement, reference: &str) -> String {
    match placement {
        Placement::AfterReference { group, index } => {
            format!("Inserted after '{reference}' (group {group}, position {index})")
        }
        Placement::Appended { group, index } => {
            format!("'{reference}' not found, appended (group {group}, position {index})")
        }
    }
}
