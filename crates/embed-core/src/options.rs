//! Embed options for the Twitch player
//!
//! [`EmbedOptions`] carries everything the URL builder needs. Every field
//! except the channel has a default, so options deserialized from JSON only
//! need a `channel` key.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur while assembling embed options
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmbedError {
    /// Channel name was empty
    #[error("Channel name must not be empty")]
    EmptyChannel,

    /// Theme name is not one the player understands
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),
}

/// Result type for embed operations
pub type Result<T> = std::result::Result<T, EmbedError>;

// =============================================================================
// Channel
// =============================================================================

/// Name of the Twitch channel to embed
///
/// Always non-empty. Whether the channel exists is only known to the player
/// once the frame loads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Channel(String);

impl Channel {
    /// Create a channel name, rejecting the empty string
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(EmbedError::EmptyChannel);
        }
        Ok(Self(name))
    }

    /// Get the channel name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Channel {
    type Error = EmbedError;

    fn try_from(name: String) -> Result<Self> {
        Self::new(name)
    }
}

impl From<Channel> for String {
    fn from(channel: Channel) -> Self {
        channel.0
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Theme
// =============================================================================

/// Player color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light player chrome
    Light,
    /// Dark player chrome
    #[default]
    Dark,
}

impl Theme {
    /// Get the theme as its query-string value
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl FromStr for Theme {
    type Err = EmbedError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(EmbedError::UnknownTheme(s.to_string())),
        }
    }
}

// =============================================================================
// Start Time
// =============================================================================

/// Playback start offset in `<H>h<M>m<S>s` form
///
/// The value is handed to the player as-is; only the default and
/// [`StartTime::from_secs`] guarantee the canonical format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StartTime(String);

impl StartTime {
    /// Format a second offset, e.g. 5400 becomes `1h30m0s`
    pub fn from_secs(secs: u64) -> Self {
        let hours = secs / 3600;
        let minutes = (secs % 3600) / 60;
        let seconds = secs % 60;
        Self(format!("{}h{}m{}s", hours, minutes, seconds))
    }

    /// Get the start time as its query-string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for StartTime {
    fn default() -> Self {
        Self("0h0m0s".to_string())
    }
}

impl From<&str> for StartTime {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for StartTime {
    fn from(value: String) -> Self {
        Self(value)
    }
}

// =============================================================================
// Embed Options
// =============================================================================

fn default_true() -> bool {
    true
}

/// Options controlling the embedded player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbedOptions {
    /// Channel to embed
    pub channel: Channel,

    /// Domains allowed to embed the player, in order. `None` falls back to
    /// the current host name when one is known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<Vec<String>>,

    /// Whether the player may go full screen
    #[serde(default = "default_true")]
    pub allow_fullscreen: bool,

    /// Whether playback starts automatically
    #[serde(default = "default_true")]
    pub autoplay: bool,

    /// Whether playback starts muted
    #[serde(default)]
    pub muted: bool,

    /// Player color theme
    #[serde(default)]
    pub theme: Theme,

    /// Playback start offset
    #[serde(default)]
    pub time: StartTime,
}

impl EmbedOptions {
    /// Create options for a channel with every other field at its default
    pub fn new(channel: impl Into<String>) -> Result<Self> {
        Ok(Self::for_channel(Channel::new(channel)?))
    }

    /// Create options for an already validated channel
    pub fn for_channel(channel: Channel) -> Self {
        Self {
            channel,
            parent: None,
            allow_fullscreen: true,
            autoplay: true,
            muted: false,
            theme: Theme::default(),
            time: StartTime::default(),
        }
    }

    /// Set the parent domains explicitly
    pub fn with_parent<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parent = Some(domains.into_iter().map(Into::into).collect());
        self
    }

    /// Set whether full screen is allowed
    pub fn with_allow_fullscreen(mut self, allow: bool) -> Self {
        self.allow_fullscreen = allow;
        self
    }

    /// Set autoplay
    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    /// Set muted start
    pub fn with_muted(mut self, muted: bool) -> Self {
        self.muted = muted;
        self
    }

    /// Set the theme
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the start time
    pub fn with_time(mut self, time: impl Into<StartTime>) -> Self {
        self.time = time.into();
        self
    }

    /// Resolve the parent domains to emit
    ///
    /// Explicit domains win, even an explicitly empty list. Otherwise the
    /// current host is used if there is one.
    pub fn resolve_parents<'a>(&'a self, current_host: Option<&'a str>) -> Vec<&'a str> {
        match &self.parent {
            Some(domains) => domains.iter().map(String::as_str).collect(),
            None => match current_host {
                Some(host) => {
                    tracing::debug!("No parent domains given, falling back to host {}", host);
                    vec![host]
                }
                None => Vec::new(),
            },
        }
    }
}
