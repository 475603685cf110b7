//! Host hook interface.
//!
//! A forum host calls [`Plugin::register_codes`] while setting up its bbcode
//! parser and [`Plugin::register_buttons`] while building the editor toolbar.

use std::sync::Arc;

use crate::button::{Button, ButtonGroups, FallbackPlacement, Placement, insert_button};
use crate::code::{BbcCode, ContentType};
use crate::embed::PlayerOptions;
use crate::validate::SoundCloudValidator;

/// Tag for single sounds.
pub const SOUNDCLOUD_TAG: &str = "soundcloud";

/// Tag intended for playlists. Shares validation with [`SOUNDCLOUD_TAG`].
pub const CLOUDSET_TAG: &str = "cloudset";

/// Code of the toolbar button the SoundCloud button follows.
pub const DEFAULT_REFERENCE_CODE: &str = "youtube";

/// Hooks a plugin exposes to the host.
pub trait Plugin {
    /// Plugin name for logs.
    fn name(&self) -> &str;

    /// Append bbcode registrations.
    fn register_codes(&self, codes: &mut Vec<BbcCode>);

    /// Add toolbar buttons.
    fn register_buttons(&self, groups: &mut ButtonGroups);
}

/// SoundCloud embed plugin: `[soundcloud]` and `[cloudset]` tags plus an
/// editor button.
///
/// # Example
///
/// ```
/// use cloudembed_bbc::{Plugin, SoundCloudPlugin};
///
/// let plugin = SoundCloudPlugin::new();
///
/// let mut codes = Vec::new();
/// plugin.register_codes(&mut codes);
/// assert_eq!(codes.len(), 2);
///
/// let mut content = "soundcloud.com/artist/sets/mix".to_owned();
/// codes[1].apply(&mut content);
/// assert!(content.contains(r#"height="350""#));
/// ```
#[derive(Debug, Clone)]
pub struct SoundCloudPlugin {
    validator: Arc<SoundCloudValidator>,
    reference_code: String,
    fallback: FallbackPlacement,
}

impl Default for SoundCloudPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl SoundCloudPlugin {
    /// Create the plugin with default player options and button placement.
    #[must_use]
    pub fn new() -> Self {
        Self {
            validator: Arc::new(SoundCloudValidator::default()),
            reference_code: DEFAULT_REFERENCE_CODE.to_owned(),
            fallback: FallbackPlacement::default(),
        }
    }

    /// Use custom player options for rendered embeds.
    #[must_use]
    pub fn with_player_options(mut self, options: PlayerOptions) -> Self {
        self.validator = Arc::new(SoundCloudValidator::new(options));
        self
    }

    /// Place the button after the button with this code.
    #[must_use]
    pub fn with_reference_code(mut self, code: impl Into<String>) -> Self {
        self.reference_code = code.into();
        self
    }

    /// Set where the button goes when the reference button is missing.
    #[must_use]
    pub fn with_fallback(mut self, fallback: FallbackPlacement) -> Self {
        self.fallback = fallback;
        self
    }

    /// The shared tag validator.
    #[must_use]
    pub fn validator(&self) -> &SoundCloudValidator {
        &self.validator
    }

    /// Code of the button the SoundCloud button follows.
    #[must_use]
    pub fn reference_code(&self) -> &str {
        &self.reference_code
    }

    /// Insert the editor button and report where it went.
    ///
    /// [`Plugin::register_buttons`] delegates here.
    pub fn place_button(&self, groups: &mut ButtonGroups) -> Placement {
        insert_button(groups, Self::button(), &self.reference_code, self.fallback)
    }

    /// Registrations for both tags, sharing one validator.
    #[must_use]
    pub fn codes(&self) -> Vec<BbcCode> {
        [SOUNDCLOUD_TAG, CLOUDSET_TAG]
            .into_iter()
            .map(|tag| {
                let validator = Arc::clone(&self.validator);
                BbcCode::new(tag, ContentType::UnparsedContent)
                    .with_validator(validator)
                    .with_block_level(true)
            })
            .collect()
    }

    /// The editor button.
    #[must_use]
    pub fn button() -> Button {
        Button::for_tag(SOUNDCLOUD_TAG, "soundcloud", "SoundCloud")
    }
}

impl Plugin for SoundCloudPlugin {
    fn name(&self) -> &'static str {
        "soundcloud-embed"
    }

    fn register_codes(&self, codes: &mut Vec<BbcCode>) {
        codes.extend(self.codes());
        tracing::debug!(plugin = self.name(), "Registered bbcode tags");
    }

    fn register_buttons(&self, groups: &mut ButtonGroups) {
        let placement = self.place_button(groups);
        tracing::debug!(
            plugin = self.name(),
            reference = %self.reference_code,
            ?placement,
            "Registered editor button"
        );
    }
}
