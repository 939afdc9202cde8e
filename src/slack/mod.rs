//! Slack retrieval: Web API client and payload data model.
//!
//! - [`client`] — blocking, cursor-paginated client for the three
//!   conversation endpoints
//! - [`types`] — serde structures for envelopes, messages, blocks, and the
//!   rich-text element unions

pub mod client;
pub mod types;

pub use client::SlackClient;
