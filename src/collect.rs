//! Retrieval orchestration and allow-list filtering.
//!
//! [`collect_channels`] walks the configured channels in order and turns
//! the Slack conversation endpoints into [`ChannelHistory`] values ready
//! for Markdown rendering. The retrieval operations sit behind the
//! [`MessageSource`] trait so the orchestration logic can be exercised
//! against an in-memory source in tests; the real implementation is
//! [`SlackClient`](crate::slack::SlackClient).
//!
//! Everything here is sequential: channels one at a time, messages one at
//! a time, thread replies one at a time. This is a batch export tool, and
//! the first fetch failure aborts the run.

use std::collections::HashMap;

use chrono::{Duration, Utc};

use crate::config::ExportConfig;
use crate::error::Result;
use crate::slack::types::{ApiMessage, Channel};

/// Source of channels, history, and thread replies.
///
/// `fetch_history` returns messages newest-first, as the Slack endpoint
/// sends them; [`collect_channels`] reverses the page before conversion.
/// `fetch_replies` returns the thread oldest-first, with Slack's echo of
/// the root message included.
pub trait MessageSource {
    /// Lists the channels visible to the token.
    fn list_channels(&self) -> Result<Vec<Channel>>;

    /// Fetches channel history no older than `oldest` (Unix seconds,
    /// string-encoded), newest-first.
    fn fetch_history(&self, channel_id: &str, oldest: &str) -> Result<Vec<ApiMessage>>;

    /// Fetches the replies of the thread rooted at `thread_ts`,
    /// oldest-first.
    fn fetch_replies(&self, channel_id: &str, thread_ts: &str) -> Result<Vec<ApiMessage>>;
}

/// A root message together with its fetched thread replies (oldest-first).
#[derive(Debug, Clone)]
pub struct ThreadedMessage {
    pub root: ApiMessage,
    pub replies: Vec<ApiMessage>,
}

impl ThreadedMessage {
    /// Iterates the replies, skipping Slack's echo of the root message
    /// (the reply whose timestamp equals the root's).
    pub fn thread_replies(&self) -> impl Iterator<Item = &ApiMessage> {
        self.replies.iter().filter(|r| r.ts != self.root.ts)
    }
}

/// One channel's collected messages, oldest-first.
#[derive(Debug, Clone)]
pub struct ChannelHistory {
    pub id: String,
    pub name: String,
    pub messages: Vec<ThreadedMessage>,
}

/// Returns the oldest timestamp of the lookback window, `since_days` days
/// before now, as the string-encoded Unix seconds the history endpoint
/// expects.
pub fn lookback_timestamp(since_days: i64) -> String {
    (Utc::now() - Duration::days(since_days))
        .timestamp()
        .to_string()
}

/// Returns `true` if the message survives the allow-list.
///
/// An empty list includes everyone; otherwise the author's user id or bot
/// id must be a member.
pub fn retain_author(message: &ApiMessage, allow: &[String]) -> bool {
    allow.is_empty()
        || allow.iter().any(|u| *u == message.user)
        || allow.iter().any(|u| *u == message.bot_id)
}

/// Collects the configured channels' histories, in configuration order.
///
/// Channels the token cannot see are skipped, as are channels with no
/// messages left after filtering. Replies are fetched only for messages
/// that actually started a thread.
pub fn collect_channels<S: MessageSource>(
    source: &S,
    config: &ExportConfig,
) -> Result<Vec<ChannelHistory>> {
    let oldest = lookback_timestamp(config.since);
    let channels = source.list_channels()?;
    let names: HashMap<&str, &str> = channels
        .iter()
        .map(|c| (c.id.as_str(), c.name.as_str()))
        .collect();

    let mut histories = Vec::new();
    for channel in &config.channels {
        let Some(name) = names.get(channel.id.as_str()) else {
            continue;
        };
        let allow = config.users_for(channel);

        let mut page = source.fetch_history(&channel.id, &oldest)?;
        page.reverse();

        let mut messages = Vec::new();
        for root in page {
            if !retain_author(&root, allow) {
                continue;
            }
            let replies = if root.has_thread() {
                source.fetch_replies(&channel.id, &root.ts)?
            } else {
                Vec::new()
            };
            messages.push(ThreadedMessage { root, replies });
        }

        if messages.is_empty() {
            continue;
        }
        histories.push(ChannelHistory {
            id: channel.id.clone(),
            name: (*name).to_owned(),
            messages,
        });
    }
    Ok(histories)
}
