//! Slack Web API client.
//!
//! A thin blocking client over the three conversation endpoints slackdown
//! needs. Every list-shaped endpoint is paginated with a cursor; pages are
//! requested 200 entries at a time until `next_cursor` comes back empty.
//!
//! Failures are never retried here: a transport error or an `ok: false`
//! envelope surfaces immediately and ends the run. Rate-limit handling, if
//! wanted, belongs in front of this client, not inside it.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::collect::MessageSource;
use crate::error::{Result, SlackdownError};
use crate::slack::types::{
    ApiMessage, Channel, ChannelListResponse, MessageListResponse, ResponseMetadata,
};

const API_BASE: &str = "https://slack.com/api";
const PAGE_LIMIT: &str = "200";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking Slack Web API client carrying a bearer token.
///
/// # Example
///
/// ```rust,no_run
/// use slackdown::slack::SlackClient;
///
/// # fn main() -> slackdown::Result<()> {
/// let client = SlackClient::new("xoxb-...")?;
/// let channels = client.list_channels()?;
/// # Ok(())
/// # }
/// ```
pub struct SlackClient {
    http: reqwest::blocking::Client,
    token: String,
}

impl SlackClient {
    /// Creates a client for the given API token.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            token: token.into(),
        })
    }

    fn get<T: DeserializeOwned>(&self, method: &str, query: &[(&str, &str)]) -> Result<T> {
        let response = self
            .http
            .get(format!("{API_BASE}/{method}"))
            .bearer_auth(&self.token)
            .query(query)
            .send()?;
        Ok(response.json()?)
    }

    /// Lists public and private channels visible to the token.
    pub fn list_channels(&self) -> Result<Vec<Channel>> {
        let mut channels = Vec::new();
        let mut cursor = String::new();
        loop {
            let mut query = vec![
                ("types", "public_channel,private_channel"),
                ("exclude_archived", "false"),
                ("limit", PAGE_LIMIT),
            ];
            if !cursor.is_empty() {
                query.push(("cursor", &cursor));
            }
            let page: ChannelListResponse = self.get("conversations.list", &query)?;
            if !page.ok {
                return Err(SlackdownError::api(
                    "conversations.list",
                    page.error.unwrap_or_else(|| "unknown error".into()),
                ));
            }
            channels.extend(page.channels);
            match next_cursor(page.response_metadata.as_ref()) {
                Some(next) => cursor = next,
                None => break,
            }
        }
        Ok(channels)
    }

    /// Fetches channel history no older than `oldest`, newest-first.
    pub fn fetch_history(&self, channel_id: &str, oldest: &str) -> Result<Vec<ApiMessage>> {
        self.message_pages(
            "conversations.history",
            &[("channel", channel_id), ("oldest", oldest)],
        )
    }

    /// Fetches the replies of a thread, oldest-first, root echo included.
    pub fn fetch_replies(&self, channel_id: &str, thread_ts: &str) -> Result<Vec<ApiMessage>> {
        self.message_pages(
            "conversations.replies",
            &[("channel", channel_id), ("ts", thread_ts)],
        )
    }

    fn message_pages(
        &self,
        method: &'static str,
        params: &[(&str, &str)],
    ) -> Result<Vec<ApiMessage>> {
        let mut messages = Vec::new();
        let mut cursor = String::new();
        loop {
            let mut query = params.to_vec();
            query.push(("limit", PAGE_LIMIT));
            if !cursor.is_empty() {
                query.push(("cursor", &cursor));
            }
            let page: MessageListResponse = self.get(method, &query)?;
            if !page.ok {
                return Err(SlackdownError::api(
                    method,
                    page.error.unwrap_or_else(|| "unknown error".into()),
                ));
            }
            messages.extend(page.messages);
            match next_cursor(page.response_metadata.as_ref()) {
                Some(next) => cursor = next,
                None => break,
            }
        }
        Ok(messages)
    }
}

fn next_cursor(metadata: Option<&ResponseMetadata>) -> Option<String> {
    metadata
        .and_then(ResponseMetadata::cursor)
        .map(ToOwned::to_owned)
}

impl MessageSource for SlackClient {
    fn list_channels(&self) -> Result<Vec<Channel>> {
        SlackClient::list_channels(self)
    }

    fn fetch_history(&self, channel_id: &str, oldest: &str) -> Result<Vec<ApiMessage>> {
        SlackClient::fetch_history(self, channel_id, oldest)
    }

    fn fetch_replies(&self, channel_id: &str, thread_ts: &str) -> Result<Vec<ApiMessage>> {
        SlackClient::fetch_replies(self, channel_id, thread_ts)
    }
}
