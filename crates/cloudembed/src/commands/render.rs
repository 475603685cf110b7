//! `cloudembed render` command implementation.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::Args;
use cloudembed_bbc::{BbcCode, SOUNDCLOUD_TAG};
use cloudembed_config::{CliSettings, Config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Tag contents to render (default: one per line from stdin).
    inputs: Vec<String>,

    /// Tag to render the contents as.
    #[arg(short, long, default_value = SOUNDCLOUD_TAG)]
    tag: String,

    /// Player accent color as #rrggbb (overrides config).
    #[arg(long)]
    color: Option<String>,

    /// Path to configuration file (default: auto-discover cloudembed.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, the tag is unknown, or stdin
    /// cannot be read.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let mut output = Output::new();

        let cli_settings = CliSettings {
            color: self.color,
            ..Default::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let codes = config.plugin().codes();
        let code = find_code(&codes, &self.tag)?;

        let inputs = if self.inputs.is_empty() {
            read_stdin_lines()?
        } else {
            self.inputs
        };
        tracing::info!(tag = %code.tag, count = inputs.len(), "Rendering tag contents");

        write_rendered(&mut output, code, &inputs)
    }
}

/// Render each input on its own line, warning about inputs left unchanged.
fn write_rendered<W: Write>(
    output: &mut Output<W>,
    code: &BbcCode,
    inputs: &[String],
) -> Result<(), CliError> {
    for input in inputs {
        let rendered = render(code, input);
        if !input.is_empty() && rendered == *input {
            output.warning(&format!("Not a SoundCloud link, left unchanged: {input}"));
        }
        output.line(&rendered)?;
    }
    Ok(())
}

/// Look up a registration by tag name.
fn find_code<'a>(codes: &'a [BbcCode], tag: &str) -> Result<&'a BbcCode, CliError> {
    codes.iter().find(|c| c.tag == tag).ok_or_else(|| {
        let known: Vec<_> = codes.iter().map(|c| c.tag.as_str()).collect();
        CliError::Validation(format!(
            "Unknown tag '{tag}' (expected one of: {})",
            known.join(", ")
        ))
    })
}

/// Run tag content through the registration's validator.
fn render(code: &BbcCode, input: &str) -> String {
    let mut content = input.to_owned();
    code.apply(&mut content);
    content
}

fn read_stdin_lines() -> Result<Vec<String>, CliError> {
    let lines: Vec<String> = std::io::stdin().lock().lines().collect::<Result<_, _>>()?;
    Ok(lines)
}
