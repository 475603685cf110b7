//! SoundCloud embeds for forum bbcode.
//!
//! This crate provides the two hooks a forum host needs to support
//! `[soundcloud]URL[/soundcloud]` and `[cloudset]URL[/cloudset]` tags:
//!
//! - [`Plugin::register_codes`] appends the tag registrations. Both tags are
//!   unparsed-content tags sharing one [`SoundCloudValidator`], which turns a
//!   SoundCloud link into a player iframe with a caption, or leaves the
//!   content exactly as typed when the link does not match.
//! - [`Plugin::register_buttons`] adds a SoundCloud button to the editor
//!   toolbar, right after the YouTube button.
//!
//! Everything is a synchronous string or list rewrite. No requests are made
//! to SoundCloud.
//!
//! # Example
//!
//! ```
//! use cloudembed_bbc::{Plugin, SoundCloudPlugin, Validator};
//!
//! let plugin = SoundCloudPlugin::new();
//!
//! let mut content = "http://soundcloud.com/artist/track?utm_source=clipboard".to_owned();
//! plugin.validator().validate(&mut content);
//! assert!(content.contains("url=https://soundcloud.com/artist/track&"));
//!
//! let mut toolbar = vec![vec![]];
//! plugin.register_buttons(&mut toolbar);
//! assert_eq!(toolbar[0][0].before, "[soundcloud]");
//! ```
//!
//! # Features
//!
//! - `serde`: (de)serialize [`Button`], [`FallbackPlacement`] and
//!   [`PlayerOptions`].

mod button;
mod code;
mod embed;
mod plugin;
mod url;
mod validate;

pub use button::{
    Button, ButtonGroups, FallbackPlacement, ParsePlacementError, Placement, find_button,
    insert_button,
};
pub use code::{BbcCode, ContentType, Validator};
pub use embed::{
    DEFAULT_COLOR, DEFAULT_PLAYER_ENDPOINT, PLAYLIST_HEIGHT, PlayerOptions, TRACK_HEIGHT,
    escape_html, render_embed,
};
pub use plugin::{CLOUDSET_TAG, DEFAULT_REFERENCE_CODE, Plugin, SOUNDCLOUD_TAG, SoundCloudPlugin};
pub use url::{SoundCloudUrl, UrlError, UrlKind, normalize};
pub use validate::{SoundCloudValidator, Transform};
