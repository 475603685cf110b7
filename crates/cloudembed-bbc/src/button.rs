//! Editor toolbar buttons.
//!
//! Hosts group toolbar buttons into rows ([`ButtonGroups`]). The SoundCloud
//! button goes right after a reference button (YouTube by default) so media
//! embeds sit together; when the reference is missing a
//! [`FallbackPlacement`] decides where it lands.

use std::fmt;
use std::str::FromStr;

/// A toolbar button definition.
///
/// Separators and other host entries may lack a `code`; they never match a
/// reference search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Button {
    /// Icon identifier.
    pub image: String,
    /// Tag code the button inserts.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub code: Option<String>,
    /// Tooltip text.
    pub description: String,
    /// Text inserted before the selection.
    pub before: String,
    /// Text inserted after the selection.
    pub after: String,
}

impl Button {
    /// Create a button that wraps the selection in `[code]...[/code]`.
    #[must_use]
    pub fn for_tag(code: &str, image: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            code: Some(code.to_owned()),
            description: description.into(),
            before: format!("[{code}]"),
            after: format!("[/{code}]"),
        }
    }
}

/// Button rows, outer list in toolbar order.
pub type ButtonGroups = Vec<Vec<Button>>;

/// Where to put the button when the reference button is absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum FallbackPlacement {
    /// Append the button to the end of the last group, creating a group on
    /// an empty toolbar.
    #[default]
    LastGroup,
    /// Append a new one-button group after the last group.
    NewGroup,
}

impl FallbackPlacement {
    /// Identifier used in config files and CLI flags.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LastGroup => "last-group",
            Self::NewGroup => "new-group",
        }
    }
}

impl fmt::Display for FallbackPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`FallbackPlacement`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown fallback placement '{0}' (expected 'last-group' or 'new-group')")]
pub struct ParsePlacementError(String);

impl FromStr for FallbackPlacement {
    type Err = ParsePlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "last-group" => Ok(Self::LastGroup),
            "new-group" => Ok(Self::NewGroup),
            other => Err(ParsePlacementError(other.to_owned())),
        }
    }
}

/// Where [`insert_button`] put the button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Inserted directly after the reference button.
    AfterReference { group: usize, index: usize },
    /// Reference not found; appended per the fallback placement.
    Appended { group: usize, index: usize },
}

impl Placement {
    /// `(group, index)` of the inserted button.
    #[must_use]
    pub fn position(self) -> (usize, usize) {
        match self {
            Self::AfterReference { group, index } | Self::Appended { group, index } => {
                (group, index)
            }
        }
    }
}

/// Find the first button with the given code, scanning groups in order.
///
/// Returns `(group, index)` of the match.
#[must_use]
pub fn find_button(groups: &[Vec<Button>], code: &str) -> Option<(usize, usize)> {
    groups
        .iter()
        .enumerate()
        .flat_map(|(group, buttons)| {
            buttons
                .iter()
                .enumerate()
                .map(move |(index, button)| (group, index, button))
        })
        .find(|(_, _, button)| button.code.as_deref() == Some(code))
        .map(|(group, index, _)| (group, index))
}

/// Insert `button` right after the first button whose code is `reference`.
///
/// All other buttons keep their relative order. Without a reference match
/// the button is appended according to `fallback`.
///
/// # Example
///
/// ```
/// use cloudembed_bbc::{Button, FallbackPlacement, Placement, insert_button};
///
/// let mut groups = vec![vec![
///     Button::for_tag("b", "bold", "Bold"),
///     Button::for_tag("youtube", "youtube", "YouTube"),
///     Button::for_tag("i", "italic", "Italic"),
/// ]];
/// let button = Button::for_tag("soundcloud", "soundcloud", "SoundCloud");
///
/// let placement = insert_button(&mut groups, button, "youtube", FallbackPlacement::default());
/// assert_eq!(placement, Placement::AfterReference { group: 0, index: 2 });
/// assert_eq!(groups[0][2].code.as_deref(), Some("soundcloud"));
/// ```
pub fn insert_button(
    groups: &mut ButtonGroups,
    button: Button,
    reference: &str,
    fallback: FallbackPlacement,
) -> Placement {
    if let Some((group, index)) = find_button(groups, reference)
        && let Some(buttons) = groups.get_mut(group)
    {
        let index = index + 1;
        buttons.insert(index, button);
        return Placement::AfterReference { group, index };
    }

    match fallback {
        FallbackPlacement::LastGroup => {
            if groups.is_empty() {
                groups.push(Vec::new());
            }
            let group = groups.len() - 1;
            let buttons = &mut groups[group];
            buttons.push(button);
            Placement::Appended {
                group,
                index: buttons.len() - 1,
            }
        }
        FallbackPlacement::NewGroup => {
            groups.push(vec![button]);
            Placement::Appended {
                group: groups.len() - 1,
                index: 0,
            }
        }
    }
}
