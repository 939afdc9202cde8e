//! # slackdown
//!
//! A Rust library and CLI for exporting Slack channel history, thread
//! replies included, to a Markdown document.
//!
//! ## Overview
//!
//! slackdown fetches conversation history through the Slack Web API and
//! renders each message's rich-text blocks as Markdown, preserving bold,
//! italic, strikethrough, inline code, links, lists, quotes, and code
//! blocks. Channels, a lookback window, user allow-lists, and per-channel
//! headers are configured via CLI flags or a YAML file.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use slackdown::prelude::*;
//!
//! fn main() -> slackdown::Result<()> {
//!     let config = ExportConfig::from_path("export.yaml")?;
//!     let client = SlackClient::new("xoxb-...")?;
//!
//!     // Fetch everything the config asks for, in order
//!     let channels = collect_channels(&client, &config)?;
//!
//!     // Stream the Markdown document to the configured output file
//!     write_file(&channels, &config)?;
//!     Ok(())
//! }
//! ```
//!
//! Conversion is usable without the network layer; any
//! [`ApiMessage`](slack::types::ApiMessage) (for instance one decoded
//! from an exported JSON file) can be rendered with
//! [`convert_message`](markdown::convert_message) and
//! [`write_document`](markdown::write_document).
//!
//! ## Module Structure
//!
//! - [`markdown`] — **the conversion core**
//!   - [`markdown::style`] — composable inline style wrappers
//!   - [`markdown::convert`] — per-element and per-message converters
//!   - [`markdown::document`] — document assembly and streaming output
//! - [`slack`] — Web API client and payload data model
//! - [`collect`] — retrieval orchestration and allow-list filtering
//! - [`config`] — YAML / programmatic export configuration
//! - [`cli`] — CLI types (requires the `cli` feature)
//! - [`error`] — unified error types ([`SlackdownError`], [`Result`])
//! - [`prelude`] — convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod collect;
pub mod config;
pub mod error;
pub mod markdown;
pub mod slack;

// Re-export the main types at the crate root for convenience
pub use error::{Result, SlackdownError};

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use slackdown::prelude::*;
/// ```
pub mod prelude {
    // Error types
    pub use crate::error::{Result, SlackdownError};

    // Configuration
    pub use crate::config::{ChannelConfig, ExportConfig};

    // Retrieval
    pub use crate::collect::{ChannelHistory, MessageSource, ThreadedMessage, collect_channels};
    pub use crate::slack::SlackClient;
    pub use crate::slack::types::{ApiMessage, Block, RichTextElement, SectionElement, TextStyle};

    // Conversion
    pub use crate::markdown::{convert_message, decorate, write_document, write_file};
}
