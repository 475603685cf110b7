//! SoundCloud URL normalization and matching.
//!
//! Tag content typed by forum users is loose: it may carry a `http://` scheme,
//! no scheme at all, tracking parameters, or `<br>` tags injected by the
//! editor. [`SoundCloudUrl::parse`] cleans that up and matches the result
//! against the one URL shape the player accepts.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

/// Matches `https://soundcloud.com/<artist>[/sets]/<slug>`, stopping before any query string.
///
/// Groups: 1 = artist, 2 = `/sets` marker, 3 = track or playlist slug.
static SOUNDCLOUD_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^https://soundcloud\.com/([^/]+)(/sets)?/([^?]+)").unwrap()
});

/// Line breaks inserted by WYSIWYG editors (`<br>`, `<br/>`, `<br />`).
static LINE_BREAK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").unwrap());

/// Characters trimmed from tag content. ASCII whitespace plus NUL only, so a
/// leading no-break space still fails the match.
const TRIM_CHARS: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B'];

const HTTP_PREFIX: &str = "http://";
const HTTPS_PREFIX: &str = "https://";

/// Error returned when tag content is not a usable SoundCloud link.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlError {
    /// The tag had no content.
    #[error("URL is empty")]
    Empty,
    /// The normalized content does not match the SoundCloud URL pattern.
    #[error("not a SoundCloud track or playlist URL: {0}")]
    NoMatch(String),
}

/// Whether a link points at a single sound or a playlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlKind {
    /// `https://soundcloud.com/<artist>/<track>`
    Track,
    /// `https://soundcloud.com/<artist>/sets/<playlist>`
    Playlist,
}

/// A matched SoundCloud link.
///
/// # Example
///
/// ```
/// use cloudembed_bbc::{SoundCloudUrl, UrlKind};
///
/// let url = SoundCloudUrl::parse("soundcloud.com/artist/sets/mix?utm_source=clipboard").unwrap();
/// assert_eq!(url.url, "https://soundcloud.com/artist/sets/mix");
/// assert_eq!(url.artist, "artist");
/// assert_eq!(url.slug, "mix");
/// assert_eq!(url.kind, UrlKind::Playlist);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundCloudUrl {
    /// Full matched URL with `https` scheme and without query string.
    pub url: String,
    /// Artist (user) path segment.
    pub artist: String,
    /// Track or playlist slug.
    pub slug: String,
    /// Track or playlist.
    pub kind: UrlKind,
}

impl SoundCloudUrl {
    /// Normalize raw tag content and match it against the SoundCloud URL pattern.
    ///
    /// # Errors
    ///
    /// Returns [`UrlError::Empty`] for empty input and [`UrlError::NoMatch`]
    /// (carrying the raw input) when the normalized string is not a
    /// SoundCloud track or playlist link.
    pub fn parse(raw: &str) -> Result<Self, UrlError> {
        if raw.is_empty() {
            return Err(UrlError::Empty);
        }

        let normalized = normalize(raw);
        let caps = SOUNDCLOUD_URL_RE
            .captures(&normalized)
            .ok_or_else(|| UrlError::NoMatch(raw.to_owned()))?;

        let kind = if caps.get(2).is_some() {
            UrlKind::Playlist
        } else {
            UrlKind::Track
        };

        Ok(Self {
            url: caps[0].to_owned(),
            artist: caps[1].to_owned(),
            slug: caps[3].to_owned(),
            kind,
        })
    }

    /// Artist profile page.
    #[must_use]
    pub fn profile_url(&self) -> String {
        format!("https://soundcloud.com/{}", self.artist)
    }

    /// Whether this link is a playlist (`/sets/` segment present).
    #[must_use]
    pub fn is_playlist(&self) -> bool {
        self.kind == UrlKind::Playlist
    }
}

impl FromStr for SoundCloudUrl {
    type Err = UrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SoundCloudUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// Clean up raw tag content and force the `https` scheme.
///
/// Strips editor line breaks, trims ASCII whitespace, rewrites a leading
/// `http://` to `https://` and prepends `https://` when the content does not
/// start with a scheme. Only the start of the content is inspected, and
/// scheme detection ignores ASCII case.
///
/// # Example
///
/// ```
/// use cloudembed_bbc::normalize;
///
/// assert_eq!(normalize("  HTTP://soundcloud.com/a/b<br>"), "https://soundcloud.com/a/b");
/// assert_eq!(normalize("soundcloud.com/a/b"), "https://soundcloud.com/a/b");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    let stripped = LINE_BREAK_RE.replace_all(raw, "");
    let data = stripped.trim_matches(TRIM_CHARS);

    if starts_with_ignore_case(data, HTTP_PREFIX) {
        format!("{HTTPS_PREFIX}{}", &data[HTTP_PREFIX.len()..])
    } else if starts_with_ignore_case(data, HTTPS_PREFIX) {
        data.to_owned()
    } else {
        format!("{HTTPS_PREFIX}{data}")
    }
}

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}
