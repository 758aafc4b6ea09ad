//! Twitch player embed URL builder
//!
//! Query parameters are emitted in a fixed order: `channel`, `autoplay`,
//! `muted`, `time`, one `parent` per domain, `theme`, then
//! `allowfullscreen=false` when full screen is disabled. The player treats a
//! missing `allowfullscreen` as true.
//!
//! Keys and values use `application/x-www-form-urlencoded` encoding, so a
//! space becomes `+`.

use crate::host::HostEnvironment;
use crate::options::EmbedOptions;
use url::form_urlencoded;

/// Base URL of the Twitch embedded player
pub const EMBED_BASE_URL: &str = "https://player.twitch.tv/";

/// Build the player URL for the given options
///
/// `current_host` is only consulted when `options.parent` is `None`. With no
/// parent domains at all the URL is still well-formed, but Twitch will refuse
/// to play it.
pub fn build_embed_url(options: &EmbedOptions, current_host: Option<&str>) -> String {
    let parents = options.resolve_parents(current_host);
    if parents.is_empty() {
        tracing::debug!(
            "Embed URL for channel {} has no parent domains; the player will reject it",
            options.channel
        );
    }

    let mut params: Vec<(&str, &str)> = vec![
        ("channel", options.channel.as_str()),
        ("autoplay", bool_param(options.autoplay)),
        ("muted", bool_param(options.muted)),
        ("time", options.time.as_str()),
    ];
    params.extend(parents.into_iter().map(|domain| ("parent", domain)));
    params.push(("theme", options.theme.as_str()));
    if !options.allow_fullscreen {
        params.push(("allowfullscreen", "false"));
    }

    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params)
        .finish();

    format!("{}?{}", EMBED_BASE_URL, query)
}

fn bool_param(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

impl EmbedOptions {
    /// Get the embed URL, falling back to `current_host` for parent domains
    pub fn embed_url(&self, current_host: Option<&str>) -> String {
        build_embed_url(self, current_host)
    }

    /// Get the embed URL, asking `env` for the current host
    pub fn embed_url_in(&self, env: &impl HostEnvironment) -> String {
        build_embed_url(self, env.current_host())
    }
}
