//! Embed fragment rendering.
//!
//! Produces the player iframe plus a caption linking to the artist and the
//! track or playlist page.

use crate::url::{SoundCloudUrl, UrlKind};

/// SoundCloud widget endpoint.
pub const DEFAULT_PLAYER_ENDPOINT: &str = "https://w.soundcloud.com/player/";

/// Player accent color.
pub const DEFAULT_COLOR: &str = "#7c6c64";

/// Iframe height for a single track.
pub const TRACK_HEIGHT: u32 = 130;

/// Iframe height for a playlist, tall enough to show the track list.
pub const PLAYLIST_HEIGHT: u32 = 350;

const CAPTION_STYLE: &str = "font-size:10px;color:#cccccc;line-break:anywhere;\
word-break:normal;overflow:hidden;white-space:nowrap;text-overflow:ellipsis;\
font-family:Interstate,Lucida Grande,Lucida Sans Unicode,Lucida Sans,Garuda,\
Verdana,Tahoma,sans-serif;font-weight:100;";

const LINK_STYLE: &str = "color:#cccccc;text-decoration:none;";

/// Display options for the embedded player.
///
/// Defaults produce the classic compact widget: no autoplay, sharing and
/// download buttons hidden, artwork shown.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlayerOptions {
    /// Player endpoint the matched URL is passed to.
    pub endpoint: String,
    /// Accent color as `#rrggbb`.
    pub color: String,
    /// Iframe height for tracks.
    pub track_height: u32,
    /// Iframe height for playlists.
    pub playlist_height: u32,
    /// Start playback on load.
    pub auto_play: bool,
    /// Show the share button.
    pub sharing: bool,
    /// Show the download button.
    pub download: bool,
    /// Show the play counter.
    pub show_playcount: bool,
    /// Show the cover artwork.
    pub show_artwork: bool,
}

impl Default for PlayerOptions {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_PLAYER_ENDPOINT.to_owned(),
            color: DEFAULT_COLOR.to_owned(),
            track_height: TRACK_HEIGHT,
            playlist_height: PLAYLIST_HEIGHT,
            auto_play: false,
            sharing: false,
            download: false,
            show_playcount: false,
            show_artwork: true,
        }
    }
}

impl PlayerOptions {
    /// Iframe height for the given link kind.
    #[must_use]
    pub fn height(&self, kind: UrlKind) -> u32 {
        match kind {
            UrlKind::Track => self.track_height,
            UrlKind::Playlist => self.playlist_height,
        }
    }

    /// Build the iframe `src` for an already-escaped URL.
    fn player_src(&self, url: &str) -> String {
        format!(
            "{endpoint}?url={url}&color={color}&auto_play={auto_play}&sharing={sharing}\
             &download={download}&show_playcount={show_playcount}&show_artwork={show_artwork}",
            endpoint = self.endpoint,
            color = self.color.replace('#', "%23"),
            auto_play = self.auto_play,
            sharing = self.sharing,
            download = self.download,
            show_playcount = self.show_playcount,
            show_artwork = self.show_artwork,
        )
    }
}

/// Render the embed fragment for a matched URL.
///
/// # Example
///
/// ```
/// use cloudembed_bbc::{PlayerOptions, SoundCloudUrl, render_embed};
///
/// let url = SoundCloudUrl::parse("https://soundcloud.com/artist/track").unwrap();
/// let html = render_embed(&url, &PlayerOptions::default());
/// assert!(html.starts_with(r#"<iframe width="100%" height="130""#));
/// assert!(html.contains(r#"<a href="https://soundcloud.com/artist" title="artist""#));
/// ```
#[must_use]
pub fn render_embed(url: &SoundCloudUrl, options: &PlayerOptions) -> String {
    let href = escape_html(&url.url);
    let profile = escape_html(&url.profile_url());
    let artist = escape_html(&url.artist);
    let slug = escape_html(&url.slug);

    format!(
        concat!(
            r#"<iframe width="100%" height="{height}" scrolling="no" frameborder="no" src="{src}"></iframe>"#,
            r#"<div style="{caption}">"#,
            r#"<a href="{profile}" title="{artist}" target="_blank" style="{link}">{artist}</a> · "#,
            r#"<a href="{href}" title="{slug}" target="_blank" style="{link}">{slug}</a></div>"#,
        ),
        height = options.height(url.kind),
        src = options.player_src(&href),
        caption = CAPTION_STYLE,
        link = LINK_STYLE,
        profile = profile,
        artist = artist,
        href = href,
        slug = slug,
    )
}

/// Escape HTML special characters for text and attribute values.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn track() -> SoundCloudUrl {
        SoundCloudUrl::parse("https://soundcloud.com/artist/track").unwrap()
    }

    #[test]
    fn test_render_track_fragment() {
        let html = render_embed(&track(), &PlayerOptions::default());
        let expected = concat!(
            r#"<iframe width="100%" height="130" scrolling="no" frameborder="no" "#,
            r#"src="https://w.soundcloud.com/player/?url=https://soundcloud.com/artist/track"#,
            r#"&color=%237c6c64&auto_play=false&sharing=false&download=false"#,
            r#"&show_playcount=false&show_artwork=true"></iframe>"#,
            r#"<div style="font-size:10px;color:#cccccc;line-break:anywhere;word-break:normal;"#,
            r#"overflow:hidden;white-space:nowrap;text-overflow:ellipsis;"#,
            r#"font-family:Interstate,Lucida Grande,Lucida Sans Unicode,Lucida Sans,Garuda,"#,
            r#"Verdana,Tahoma,sans-serif;font-weight:100;">"#,
            r#"<a href="https://soundcloud.com/artist" title="artist" target="_blank" "#,
            r#"style="color:#cccccc;text-decoration:none;">artist</a> · "#,
            r#"<a href="https://soundcloud.com/artist/track" title="track" target="_blank" "#,
            r#"style="color:#cccccc;text-decoration:none;">track</a></div>"#,
        );
        assert_eq!(html, expected);
    }

    #[test]
    fn test_render_playlist_height() {
        let url = SoundCloudUrl::parse("https://soundcloud.com/artist/sets/mylist").unwrap();
        let html = render_embed(&url, &PlayerOptions::default());
        assert!(html.contains(r#"height="350""#));
        assert!(html.contains(">mylist</a>"));
    }

    #[test]
    fn test_render_custom_options() {
        let options = PlayerOptions {
            color: "#ff5500".to_owned(),
            track_height: 166,
            auto_play: true,
            show_artwork: false,
            ..PlayerOptions::default()
        };
        let html = render_embed(&track(), &options);
        assert!(html.contains(r#"height="166""#));
        assert!(html.contains("&color=%23ff5500&auto_play=true"));
        assert!(html.contains("&show_artwork=false"));
    }

    #[test]
    fn test_render_escapes_captured_values() {
        let url = SoundCloudUrl::parse(r#"https://soundcloud.com/a"b/<script>"#).unwrap();
        let html = render_embed(&url, &PlayerOptions::default());
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains(r#"title="a&quot;b""#));
    }

    #[test]
    fn test_height_by_kind() {
        let options = PlayerOptions::default();
        assert_eq!(options.height(UrlKind::Track), TRACK_HEIGHT);
        assert_eq!(options.height(UrlKind::Playlist), PLAYLIST_HEIGHT);
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a&b"), "a&amp;b");
        assert_eq!(escape_html(r#"<"'>"#), "&lt;&quot;&#x27;&gt;");
        assert_eq!(escape_html("plain-slug_01"), "plain-slug_01");
    }
}
