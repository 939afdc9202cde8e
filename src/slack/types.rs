//! Data model for Slack Web API payloads.
//!
//! This module contains the serde structures for the three conversation
//! endpoints slackdown consumes (`conversations.list`, `.history`,
//! `.replies`) and the rich-text document model carried inside messages.
//!
//! # Rich-text decoding
//!
//! A message block holds a sequence of [`RichTextElement`]s. The element's
//! `type` tag is inspected during deserialization:
//!
//! - `rich_text_section` is decoded eagerly into typed
//!   [`SectionElement`]s, so a malformed section fails the whole response
//!   decode like any other wire error.
//! - `rich_text_preformatted`, `rich_text_list`, and `rich_text_quote`
//!   keep their payload as an opaque [`serde_json::Value`]. The Markdown
//!   converters decode those payloads into typed records on use and raise
//!   [`SlackdownError::Decode`](crate::SlackdownError::Decode) on mismatch.
//! - Anything else becomes [`RichTextElement::Unknown`] carrying the raw
//!   JSON text of the element, which is passed through to the output
//!   verbatim.
//!
//! Keeping the payload opaque here means call sites only ever dispatch on
//! the closed enum; the decode step stays internal to each converter.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

// ============================================================================
// Response envelopes
// ============================================================================

/// Pagination metadata attached to list-shaped responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseMetadata {
    /// Cursor for the next page; empty or absent on the last page.
    #[serde(default)]
    pub next_cursor: String,
}

impl ResponseMetadata {
    /// Returns the cursor to request the next page with, if there is one.
    pub fn cursor(&self) -> Option<&str> {
        if self.next_cursor.is_empty() {
            None
        } else {
            Some(&self.next_cursor)
        }
    }
}

/// Envelope of a `conversations.list` response.
#[derive(Debug, Deserialize)]
pub struct ChannelListResponse {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub channels: Vec<Channel>,
    #[serde(default)]
    pub response_metadata: Option<ResponseMetadata>,
}

/// Envelope of a `conversations.history` or `conversations.replies`
/// response.
#[derive(Debug, Deserialize)]
pub struct MessageListResponse {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub messages: Vec<ApiMessage>,
    #[serde(default)]
    pub response_metadata: Option<ResponseMetadata>,
}

// ============================================================================
// Channels and messages
// ============================================================================

/// A channel as returned by `conversations.list`.
#[derive(Debug, Clone, Deserialize)]
pub struct Channel {
    /// Channel identifier (`C...`).
    pub id: String,
    /// Display name; Slack omits it for some conversation kinds.
    #[serde(default)]
    pub name: String,
}

/// One message as returned by the history and replies endpoints.
///
/// The `ts` value is a string-encoded timestamp, unique and monotonically
/// increasing within a channel. It doubles as the message identifier and,
/// for threads, as the thread root id.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiMessage {
    /// Timestamp / identifier, e.g. `"1717171717.000100"`.
    #[serde(default)]
    pub ts: String,
    /// Author user id; empty for bot-authored messages.
    #[serde(default)]
    pub user: String,
    /// Author bot id; empty for user-authored messages.
    #[serde(default)]
    pub bot_id: String,
    /// Number of thread replies; zero when the message has no thread.
    #[serde(default)]
    pub reply_count: u32,
    /// Ordered content blocks. Only rich-text blocks are converted.
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl ApiMessage {
    /// Returns `true` if the message starts a thread.
    pub fn has_thread(&self) -> bool {
        self.reply_count > 0
    }
}

/// A typed content block attached to a message.
///
/// Only blocks with `type == "rich_text"` carry convertible content; other
/// kinds (`section`, `divider`, `image`, ...) contribute nothing to the
/// Markdown output.
#[derive(Debug, Clone, Deserialize)]
pub struct Block {
    /// Block kind tag.
    #[serde(rename = "type")]
    pub kind: String,
    /// Rich-text elements; empty for non-rich-text blocks.
    #[serde(default)]
    pub elements: Vec<RichTextElement>,
}

pub(crate) const RICH_TEXT_BLOCK: &str = "rich_text";

impl Block {
    /// Returns `true` if this is a rich-text block.
    pub fn is_rich_text(&self) -> bool {
        self.kind == RICH_TEXT_BLOCK
    }
}

// ============================================================================
// Rich-text elements
// ============================================================================

/// One rich-text element inside a rich-text block.
///
/// See the module docs for how the variants are decoded.
#[derive(Debug, Clone)]
pub enum RichTextElement {
    /// `rich_text_section`: a run of text and link sub-elements.
    Section(RichTextSection),
    /// `rich_text_preformatted`: opaque payload, rendered as a code fence.
    Preformatted(Value),
    /// `rich_text_list`: opaque payload, rendered as a Markdown list.
    List(Value),
    /// `rich_text_quote`: opaque payload, rendered as a block quote.
    Quote(Value),
    /// Anything unrecognized: the raw JSON text, passed through verbatim.
    Unknown(String),
}

impl<'de> Deserialize<'de> for RichTextElement {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned();
        match kind.as_str() {
            "rich_text_section" => serde_json::from_value(value)
                .map(RichTextElement::Section)
                .map_err(serde::de::Error::custom),
            "rich_text_preformatted" => Ok(RichTextElement::Preformatted(value)),
            "rich_text_list" => Ok(RichTextElement::List(value)),
            "rich_text_quote" => Ok(RichTextElement::Quote(value)),
            _ => Ok(RichTextElement::Unknown(value.to_string())),
        }
    }
}

/// A `rich_text_section` element: an ordered run of sub-elements.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RichTextSection {
    #[serde(default)]
    pub elements: Vec<SectionElement>,
}

/// One sub-element of a rich-text section.
#[derive(Debug, Clone)]
pub enum SectionElement {
    /// Literal text with optional styling.
    Text {
        text: String,
        style: Option<TextStyle>,
    },
    /// A bare URL.
    Link { url: String },
    /// An unrecognized sub-element kind (`emoji`, `user`, `channel`, ...).
    ///
    /// Converters report these on stderr and skip them; Slack grows this
    /// vocabulary over time and an export should not fail on it.
    Other(Value),
}

#[derive(Deserialize)]
struct TextRepr {
    #[serde(default)]
    text: String,
    #[serde(default)]
    style: Option<TextStyle>,
}

#[derive(Deserialize)]
struct LinkRepr {
    #[serde(default)]
    url: String,
}

impl<'de> Deserialize<'de> for SectionElement {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned();
        match kind.as_str() {
            "text" => serde_json::from_value(value)
                .map(|TextRepr { text, style }| SectionElement::Text { text, style })
                .map_err(serde::de::Error::custom),
            "link" => serde_json::from_value(value)
                .map(|LinkRepr { url }| SectionElement::Link { url })
                .map_err(serde::de::Error::custom),
            _ => Ok(SectionElement::Other(value)),
        }
    }
}

/// Inline style flags for a text fragment.
///
/// All flags are independent and composable; an absent style means plain
/// text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct TextStyle {
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub strike: bool,
    #[serde(default)]
    pub code: bool,
}

impl TextStyle {
    /// Returns `true` if no flag is set.
    pub fn is_plain(&self) -> bool {
        !(self.bold || self.italic || self.strike || self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_list_envelope() {
        let json = r#"{
            "ok": true,
            "channels": [
                {"id": "C111", "name": "general"},
                {"id": "C222", "name": "random"}
            ],
            "response_metadata": {"next_cursor": "dGVhbTpD"}
        }"#;
        let resp: ChannelListResponse = serde_json::from_str(json).unwrap();
        assert!(resp.ok);
        assert_eq!(resp.channels.len(), 2);
        assert_eq!(resp.channels[0].id, "C111");
        assert_eq!(
            resp.response_metadata.unwrap().cursor(),
            Some("dGVhbTpD")
        );
    }

    #[test]
    fn test_envelope_error() {
        let json = r#"{"ok": false, "error": "invalid_auth"}"#;
        let resp: MessageListResponse = serde_json::from_str(json).unwrap();
        assert!(!resp.ok);
        assert_eq!(resp.error.as_deref(), Some("invalid_auth"));
        assert!(resp.messages.is_empty());
    }

    #[test]
    fn test_empty_cursor_is_last_page() {
        let meta = ResponseMetadata {
            next_cursor: String::new(),
        };
        assert!(meta.cursor().is_none());
    }

    #[test]
    fn test_message_deserialization() {
        let json = r#"{
            "ts": "1717171717.000100",
            "user": "U111",
            "reply_count": 2,
            "blocks": [
                {
                    "type": "rich_text",
                    "elements": [
                        {
                            "type": "rich_text_section",
                            "elements": [
                                {"type": "text", "text": "hi", "style": {"bold": true}},
                                {"type": "link", "url": "https://example.com"}
                            ]
                        }
                    ]
                }
            ]
        }"#;
        let msg: ApiMessage = serde_json::from_str(json).unwrap();
        assert_eq!(msg.ts, "1717171717.000100");
        assert_eq!(msg.user, "U111");
        assert!(msg.has_thread());
        assert_eq!(msg.blocks.len(), 1);
        assert!(msg.blocks[0].is_rich_text());

        let RichTextElement::Section(section) = &msg.blocks[0].elements[0] else {
            panic!("expected a section element");
        };
        assert_eq!(section.elements.len(), 2);
        match &section.elements[0] {
            SectionElement::Text { text, style } => {
                assert_eq!(text, "hi");
                assert!(style.unwrap().bold);
            }
            other => panic!("expected text, got {other:?}"),
        }
        match &section.elements[1] {
            SectionElement::Link { url } => assert_eq!(url, "https://example.com"),
            other => panic!("expected link, got {other:?}"),
        }
    }

    #[test]
    fn test_list_and_quote_stay_opaque() {
        let json = r#"{
            "type": "rich_text",
            "elements": [
                {"type": "rich_text_list", "style": "bullet", "indent": 0, "elements": []},
                {"type": "rich_text_quote", "elements": [{"type": "text", "text": "q"}]},
                {"type": "rich_text_preformatted", "elements": [{"type": "text", "text": "x"}]}
            ]
        }"#;
        let block: Block = serde_json::from_str(json).unwrap();
        assert!(matches!(block.elements[0], RichTextElement::List(_)));
        assert!(matches!(block.elements[1], RichTextElement::Quote(_)));
        assert!(matches!(
            block.elements[2],
            RichTextElement::Preformatted(_)
        ));
    }

    #[test]
    fn test_unrecognized_element_keeps_raw_json() {
        let json = r#"{"type": "rich_text_table", "rows": 3}"#;
        let elem: RichTextElement = serde_json::from_str(json).unwrap();
        let RichTextElement::Unknown(raw) = elem else {
            panic!("expected unknown element");
        };
        assert!(raw.contains("rich_text_table"));
        assert!(raw.contains("3"));
    }

    #[test]
    fn test_unrecognized_section_element() {
        let json = r#"{"type": "emoji", "name": "tada"}"#;
        let elem: SectionElement = serde_json::from_str(json).unwrap();
        assert!(matches!(elem, SectionElement::Other(_)));
    }

    #[test]
    fn test_non_rich_text_block() {
        let json = r#"{"type": "divider"}"#;
        let block: Block = serde_json::from_str(json).unwrap();
        assert!(!block.is_rich_text());
        assert!(block.elements.is_empty());
    }

    #[test]
    fn test_style_defaults() {
        let style: TextStyle = serde_json::from_str(r#"{"bold": true}"#).unwrap();
        assert!(style.bold);
        assert!(!style.italic);
        assert!(!style.is_plain());
        assert!(TextStyle::default().is_plain());
    }

    #[test]
    fn test_bot_message() {
        let json = r#"{"ts": "1.0", "bot_id": "B999"}"#;
        let msg: ApiMessage = serde_json::from_str(json).unwrap();
        assert!(msg.user.is_empty());
        assert_eq!(msg.bot_id, "B999");
        assert!(!msg.has_thread());
    }
}
