//! The SoundCloud tag validator.

use crate::code::Validator;
use crate::embed::{PlayerOptions, render_embed};
use crate::url::{SoundCloudUrl, UrlError};

/// Result of transforming raw tag content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transform {
    /// Input was empty; content becomes empty.
    Empty,
    /// Input matched; content becomes this embed fragment.
    Embed(String),
    /// Input did not match; content stays exactly as typed.
    Unchanged,
}

impl Transform {
    /// Write the outcome into tag content.
    pub fn apply(self, content: &mut String) {
        match self {
            Self::Empty => content.clear(),
            Self::Embed(html) => *content = html,
            Self::Unchanged => {}
        }
    }
}

/// Turns `[soundcloud]` and `[cloudset]` content into a player embed.
///
/// # Example
///
/// ```
/// use cloudembed_bbc::{SoundCloudValidator, Validator};
///
/// let validator = SoundCloudValidator::default();
///
/// let mut content = "soundcloud.com/artist/track?utm_source=clipboard".to_owned();
/// validator.validate(&mut content);
/// assert!(content.starts_with("<iframe"));
///
/// let mut content = "not a link".to_owned();
/// validator.validate(&mut content);
/// assert_eq!(content, "not a link");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SoundCloudValidator {
    options: PlayerOptions,
}

impl SoundCloudValidator {
    /// Create a validator with custom player options.
    #[must_use]
    pub fn new(options: PlayerOptions) -> Self {
        Self { options }
    }

    /// Player options used for rendering.
    #[must_use]
    pub fn options(&self) -> &PlayerOptions {
        &self.options
    }

    /// Compute the new tag content without mutating anything.
    #[must_use]
    pub fn transform(&self, raw: &str) -> Transform {
        match SoundCloudUrl::parse(raw) {
            Ok(url) => Transform::Embed(render_embed(&url, &self.options)),
            Err(UrlError::Empty) => Transform::Empty,
            Err(e) => {
                tracing::debug!(error = %e, "Leaving tag content unchanged");
                Transform::Unchanged
            }
        }
    }
}

impl Validator for SoundCloudValidator {
    fn validate(&self, content: &mut String) {
        self.transform(content).apply(content);
    }
}
