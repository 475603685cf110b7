//! Bbcode registration entries.
//!
//! Hosts keep a list of [`BbcCode`] descriptors and consult it while parsing
//! posts. For unparsed-content tags the inner text goes straight to the
//! descriptor's [`Validator`].

use std::fmt;
use std::sync::Arc;

/// Handler that rewrites the raw content of a tag in place.
///
/// Implementations must be all-or-nothing: either replace `content`
/// completely or leave it exactly as received.
///
/// # Example
///
/// ```
/// use cloudembed_bbc::Validator;
///
/// struct Upper;
///
/// impl Validator for Upper {
///     fn validate(&self, content: &mut String) {
///         *content = content.to_uppercase();
///     }
/// }
///
/// let mut content = "loud".to_owned();
/// Upper.validate(&mut content);
/// assert_eq!(content, "LOUD");
/// ```
pub trait Validator: Send + Sync {
    /// Rewrite tag content in place.
    fn validate(&self, content: &mut String);
}

/// How the host treats the text between opening and closing tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    /// Inner text is handed to the validator without markup processing.
    UnparsedContent,
    /// Inner text is parsed for nested markup.
    ParsedContent,
    /// Tag has no closing counterpart.
    Closed,
}

impl ContentType {
    /// Host-side identifier.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UnparsedContent => "unparsed_content",
            Self::ParsedContent => "parsed_content",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A bbcode tag registration.
#[derive(Clone)]
pub struct BbcCode {
    /// Tag name without brackets (e.g. `soundcloud`).
    pub tag: String,
    /// Content handling mode.
    pub content_type: ContentType,
    /// Content validator, shared between tags that use the same logic.
    pub validator: Option<Arc<dyn Validator>>,
    /// Whether the tag renders as a block element.
    pub block_level: bool,
}

impl BbcCode {
    /// Create an inline registration without a validator.
    #[must_use]
    pub fn new(tag: impl Into<String>, content_type: ContentType) -> Self {
        Self {
            tag: tag.into(),
            content_type,
            validator: None,
            block_level: false,
        }
    }

    /// Attach a validator.
    #[must_use]
    pub fn with_validator(mut self, validator: Arc<dyn Validator>) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Set the block-level flag.
    #[must_use]
    pub fn with_block_level(mut self, block_level: bool) -> Self {
        self.block_level = block_level;
        self
    }

    /// Run the validator over tag content. Content is untouched when no
    /// validator is registered.
    pub fn apply(&self, content: &mut String) {
        if let Some(validator) = &self.validator {
            validator.validate(content);
        }
    }
}

impl fmt::Debug for BbcCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BbcCode")
            .field("tag", &self.tag)
            .field("content_type", &self.content_type)
            .field("validator", &self.validator.is_some())
            .field("block_level", &self.block_level)
            .finish()
    }
}
