//! Twitch live player component
//!
//! [`TwitchLive`] holds the component props: the embed options plus layout
//! attributes. It never builds URLs itself; rendering hands the embed
//! options to [`embed_core::build_embed_url`].

use crate::frame::FrameDescriptor;
use embed_core::{Channel, EmbedOptions, HostEnvironment, Result, StartTime, Theme};
use serde::{Deserialize, Serialize};

/// Component display name
pub const DISPLAY_NAME: &str = "TwitchLive";

// =============================================================================
// Dimension
// =============================================================================

/// Width or height of the player frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    /// Fixed pixel value
    Pixels(u32),
    /// Pre-formatted CSS size such as `"100%"`
    Css(String),
}

impl Dimension {
    /// Create a pixel dimension
    pub fn px(value: u32) -> Self {
        Dimension::Pixels(value)
    }

    /// Create a percentage dimension
    pub fn percent(value: u32) -> Self {
        Dimension::Css(format!("{}%", value))
    }

    /// Normalize to a CSS size string
    pub fn normalize(&self) -> String {
        match self {
            Dimension::Pixels(value) => format!("{}px", value),
            Dimension::Css(value) => value.clone(),
        }
    }
}

impl From<u32> for Dimension {
    fn from(value: u32) -> Self {
        Dimension::Pixels(value)
    }
}

impl From<&str> for Dimension {
    fn from(value: &str) -> Self {
        Dimension::Css(value.to_string())
    }
}

impl From<String> for Dimension {
    fn from(value: String) -> Self {
        Dimension::Css(value)
    }
}

fn default_width() -> Dimension {
    Dimension::Pixels(940)
}

fn default_height() -> Dimension {
    Dimension::Pixels(480)
}

// =============================================================================
// TwitchLive Component
// =============================================================================

/// Embedded Twitch live player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwitchLive {
    /// Player options forwarded to the URL builder
    #[serde(flatten)]
    pub options: EmbedOptions,
    /// Frame width
    #[serde(default = "default_width")]
    pub width: Dimension,
    /// Frame height
    #[serde(default = "default_height")]
    pub height: Dimension,
    /// Extra CSS class for the frame
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    /// Element ID for the frame
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Input accepted by the renderer
pub type RenderOptions = TwitchLive;

impl TwitchLive {
    /// Create a player for the given channel, 940x480 by default
    pub fn new(channel: impl Into<String>) -> Result<Self> {
        Ok(Self::from_options(EmbedOptions::new(channel)?))
    }

    /// Create a player from existing embed options
    pub fn from_options(options: EmbedOptions) -> Self {
        Self {
            options,
            width: default_width(),
            height: default_height(),
            class_name: None,
            id: None,
        }
    }

    /// Get the channel
    pub fn channel(&self) -> &Channel {
        &self.options.channel
    }

    /// Set the frame width
    pub fn with_width(mut self, width: impl Into<Dimension>) -> Self {
        self.width = width.into();
        self
    }

    /// Set the frame height
    pub fn with_height(mut self, height: impl Into<Dimension>) -> Self {
        self.height = height.into();
        self
    }

    /// Set the CSS class
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Set the element ID
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the parent domains
    pub fn with_parent<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = self.options.with_parent(domains);
        self
    }

    /// Set whether full screen is allowed
    pub fn with_allow_fullscreen(mut self, allow: bool) -> Self {
        self.options = self.options.with_allow_fullscreen(allow);
        self
    }

    /// Set autoplay
    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.options = self.options.with_autoplay(autoplay);
        self
    }

    /// Set muted start
    pub fn with_muted(mut self, muted: bool) -> Self {
        self.options = self.options.with_muted(muted);
        self
    }

    /// Set the theme
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.options = self.options.with_theme(theme);
        self
    }

    /// Set the start time
    pub fn with_time(mut self, time: impl Into<StartTime>) -> Self {
        self.options = self.options.with_time(time);
        self
    }

    /// Accessible title for the frame
    pub fn title(&self) -> String {
        format!("Twitch stream for {}", self.options.channel)
    }

    /// Render the frame descriptor
    ///
    /// `current_host` stands in for the page's host name when no parent
    /// domains were configured.
    pub fn render(&self, current_host: Option<&str>) -> FrameDescriptor {
        tracing::debug!("Rendering {} for channel {}", DISPLAY_NAME, self.options.channel);

        FrameDescriptor {
            src: embed_core::build_embed_url(&self.options, current_host),
            width: self.width.normalize(),
            height: self.height.normalize(),
            title: self.title(),
            allow_fullscreen: self.options.allow_fullscreen,
            borderless: true,
            class_name: self.class_name.clone(),
            id: self.id.clone(),
        }
    }

    /// Render the frame descriptor, asking `env` for the current host
    pub fn render_in(&self, env: &impl HostEnvironment) -> FrameDescriptor {
        self.render(env.current_host())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embed_core::{NoHost, StaticHost};

    // ==========================================================================
    // Dimension Tests
    // ==========================================================================

    #[test]
    fn test_dimension_pixels() {
        assert_eq!(Dimension::from(800).normalize(), "800px");
        assert_eq!(Dimension::px(0).normalize(), "0px");
    }

    #[test]
    fn test_dimension_css_passthrough() {
        assert_eq!(Dimension::from("100%").normalize(), "100%");
        let calc = Dimension::from("calc(100vh - 4rem)".to_string());
        assert_eq!(calc.normalize(), "calc(100vh - 4rem)");
        assert_eq!(Dimension::percent(50).normalize(), "50%");
    }

    #[test]
    fn test_dimension_serialization() {
        let pixels: Dimension = serde_json::from_str("800").unwrap();
        assert_eq!(pixels, Dimension::Pixels(800));

        let css: Dimension = serde_json::from_str(r#""100%""#).unwrap();
        assert_eq!(css, Dimension::Css("100%".to_string()));

        assert_eq!(serde_json::to_string(&Dimension::Pixels(450)).unwrap(), "450");
    }

    // ==========================================================================
    // TwitchLive Tests
    // ==========================================================================

    #[test]
    fn test_twitch_live_new() {
        let player = TwitchLive::new("shroud").unwrap();
        assert_eq!(player.channel().as_str(), "shroud");
        assert_eq!(player.width, Dimension::Pixels(940));
        assert_eq!(player.height, Dimension::Pixels(480));
        assert!(player.class_name.is_none());
        assert!(player.id.is_none());
    }

    #[test]
    fn test_twitch_live_rejects_empty_channel() {
        assert!(TwitchLive::new("").is_err());
    }

    #[test]
    fn test_twitch_live_builder() {
        let player = TwitchLive::new("monstercat")
            .unwrap()
            .with_width("100%")
            .with_height(450)
            .with_class_name("custom-twitch-embed")
            .with_id("player")
            .with_muted(true)
            .with_autoplay(false)
            .with_theme(Theme::Light)
            .with_time("0h5m0s")
            .with_parent(["example.com"]);

        assert_eq!(player.width, Dimension::Css("100%".to_string()));
        assert_eq!(player.height, Dimension::Pixels(450));
        assert_eq!(player.class_name.as_deref(), Some("custom-twitch-embed"));
        assert_eq!(player.id.as_deref(), Some("player"));
        assert!(player.options.muted);
        assert!(!player.options.autoplay);
        assert_eq!(player.options.theme, Theme::Light);
        assert_eq!(player.options.time.as_str(), "0h5m0s");
        assert_eq!(player.options.parent, Some(vec!["example.com".to_string()]));
    }

    #[test]
    fn test_setters_match_embed_options_builders() {
        let player = TwitchLive::new("x")
            .unwrap()
            .with_parent(["a.com"])
            .with_allow_fullscreen(false)
            .with_autoplay(false)
            .with_muted(true)
            .with_theme(Theme::Light)
            .with_time(StartTime::from_secs(90));

        let options = EmbedOptions::new("x")
            .unwrap()
            .with_parent(["a.com"])
            .with_allow_fullscreen(false)
            .with_autoplay(false)
            .with_muted(true)
            .with_theme(Theme::Light)
            .with_time(StartTime::from_secs(90));

        assert_eq!(player.options, options);
        assert_eq!(player.options.time.as_str(), "0h1m30s");
    }

    #[test]
    fn test_render_fields() {
        let frame = TwitchLive::new("shroud")
            .unwrap()
            .with_width(800)
            .with_height(450)
            .render(None);

        assert_eq!(
            frame.src,
            "https://player.twitch.tv/?channel=shroud&autoplay=true&muted=false&time=0h0m0s&theme=dark"
        );
        assert_eq!(frame.width, "800px");
        assert_eq!(frame.height, "450px");
        assert_eq!(frame.title, "Twitch stream for shroud");
        assert!(frame.title.contains("stream for shroud"));
        assert!(frame.allow_fullscreen);
        assert!(frame.borderless);
    }

    #[test]
    fn test_render_delegates_to_url_builder() {
        let player = TwitchLive::new("x").unwrap().with_allow_fullscreen(false);
        let frame = player.render(Some("site.dev"));
        assert_eq!(frame.src, embed_core::build_embed_url(&player.options, Some("site.dev")));
        assert!(!frame.allow_fullscreen);
        assert!(frame.borderless);
    }

    #[test]
    fn test_render_passthrough_attributes() {
        let frame = TwitchLive::new("x")
            .unwrap()
            .with_class_name("wide")
            .with_id("main-player")
            .render(None);
        assert_eq!(frame.class_name.as_deref(), Some("wide"));
        assert_eq!(frame.id.as_deref(), Some("main-player"));
    }

    #[test]
    fn test_render_in_environment() {
        let player = TwitchLive::new("x").unwrap();
        assert_eq!(player.render_in(&StaticHost::new("a.com")), player.render(Some("a.com")));
        assert_eq!(player.render_in(&NoHost), player.render(None));
    }

    #[test]
    fn test_twitch_live_deserialize() {
        let json = r#"{
            "channel": "monstercat",
            "width": "100%",
            "height": 450,
            "className": "embed",
            "id": "player",
            "theme": "light"
        }"#;
        let player: TwitchLive = serde_json::from_str(json).unwrap();

        assert_eq!(player.channel().as_str(), "monstercat");
        assert_eq!(player.width, Dimension::Css("100%".to_string()));
        assert_eq!(player.height, Dimension::Pixels(450));
        assert_eq!(player.class_name.as_deref(), Some("embed"));
        assert_eq!(player.id.as_deref(), Some("player"));
        assert_eq!(player.options.theme, Theme::Light);
        assert!(player.options.autoplay);
    }

    #[test]
    fn test_twitch_live_deserialize_defaults() {
        let player: TwitchLive = serde_json::from_str(r#"{"channel":"shroud"}"#).unwrap();
        assert_eq!(player, TwitchLive::new("shroud").unwrap());
    }
}
