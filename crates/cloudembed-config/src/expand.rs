//! Environment references in the player endpoint.
//!
//! Lets one `cloudembed.toml` serve several deployments, e.g.
//! `endpoint = "${CLOUDEMBED_PLAYER:-https://w.soundcloud.com/player/}"`.
//! Colors and heights are taken literally.

use std::env::VarError;

use cloudembed_bbc::PlayerOptions;

use crate::ConfigError;

const ENDPOINT_FIELD: &str = "player.endpoint";

/// Expand `$NAME`, `${NAME}` and `${NAME:-fallback}` in `player.endpoint`
/// from the process environment.
pub(crate) fn expand_player(player: &mut PlayerOptions) -> Result<(), ConfigError> {
    expand_player_with(player, |name| std::env::var(name).map(Some))
}

fn expand_player_with<F>(player: &mut PlayerOptions, lookup: F) -> Result<(), ConfigError>
where
    F: FnMut(&str) -> Result<Option<String>, VarError>,
{
    if !player.endpoint.contains('$') {
        return Ok(());
    }

    let expanded = shellexpand::env_with_context(&player.endpoint, lookup).map_err(|e| {
        let message = match e.cause {
            VarError::NotPresent => format!("{} is not set and has no fallback", e.var_name),
            VarError::NotUnicode(_) => format!("{} is not valid UTF-8", e.var_name),
        };
        ConfigError::EnvVar {
            field: ENDPOINT_FIELD.to_owned(),
            message,
        }
    })?;
    player.endpoint = expanded.into_owned();
    Ok(())
}
