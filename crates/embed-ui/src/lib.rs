//! Presentational components for embedding Twitch players
//!
//! Components are Rust structs with serializable props. Rendering produces a
//! [`frame::FrameDescriptor`] that a frontend turns into an `<iframe>`, or
//! that can be written out directly with [`frame::FrameDescriptor::to_html`].
//!
//! # Modules
//!
//! - [`components`] - The [`TwitchLive`] component and dimension handling
//! - [`frame`] - Frame descriptors and their HTML form
//!
//! # Example
//!
//! ```rust
//! use embed_ui::{Dimension, TwitchLive};
//!
//! let frame = TwitchLive::new("shroud")
//!     .unwrap()
//!     .with_width(800)
//!     .with_height(Dimension::from("50%"))
//!     .render(Some("example.com"));
//!
//! assert_eq!(frame.width, "800px");
//! assert_eq!(frame.height, "50%");
//! assert_eq!(frame.title, "Twitch stream for shroud");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod components;
pub mod frame;

pub use components::{Dimension, RenderOptions, TwitchLive, DISPLAY_NAME};
pub use frame::FrameDescriptor;
