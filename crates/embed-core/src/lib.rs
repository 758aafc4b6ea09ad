//! Embed URL construction for Twitch live players
//!
//! This crate turns typed embed options into the query-parameterized URL
//! loaded by the Twitch player frame. It performs no I/O: the only
//! environment-dependent input, the current host name, is passed in
//! explicitly.
//!
//! # Modules
//!
//! - [`options`] - Embed options, channel names, themes and start times
//! - [`host`] - Sources for the current host name
//! - [`embed_url`] - The URL builder itself
//!
//! # Example
//!
//! ```rust
//! use embed_core::{build_embed_url, EmbedOptions, Theme};
//!
//! let options = EmbedOptions::new("shroud")
//!     .unwrap()
//!     .with_theme(Theme::Light)
//!     .with_parent(["example.com"]);
//!
//! let url = build_embed_url(&options, None);
//! assert!(url.starts_with("https://player.twitch.tv/?channel=shroud"));
//! assert!(url.contains("parent=example.com"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod embed_url;
pub mod host;
pub mod options;

pub use embed_url::{build_embed_url, EMBED_BASE_URL};
pub use host::{HostEnvironment, NoHost, StaticHost};
pub use options::{Channel, EmbedError, EmbedOptions, Result, StartTime, Theme};
