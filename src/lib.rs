//! Embeddable Twitch live players
//!
//! Re-exports the URL builder from `embed-core` and the player component
//! from `embed-ui` so applications only need this one dependency.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use embed_core::{
    build_embed_url, Channel, EmbedError, EmbedOptions, HostEnvironment, NoHost, Result,
    StartTime, StaticHost, Theme, EMBED_BASE_URL,
};
pub use embed_ui::{Dimension, FrameDescriptor, RenderOptions, TwitchLive, DISPLAY_NAME};
