//! Rich-text element to Markdown conversion.
//!
//! One converter per element kind, each a pure function returning an owned
//! sequence of Markdown fragments. The caller concatenates fragments in
//! order; nothing here performs I/O.
//!
//! List, quote, and preformatted elements arrive with their payload still
//! opaque (see [`crate::slack::types`]); each converter decodes the payload
//! into its typed record first and raises
//! [`SlackdownError::Decode`](crate::SlackdownError::Decode) if the shape
//! does not match. Unrecognized section sub-elements are reported on stderr
//! and skipped so an export does not fail when Slack ships a new inline
//! element kind.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Result, SlackdownError};
use crate::markdown::style::decorate;
use crate::slack::types::{ApiMessage, RichTextElement, RichTextSection, SectionElement, TextStyle};

// ============================================================================
// Opaque payload records
// ============================================================================

/// One span of a decoded payload: literal text or a link, with optional
/// styling.
#[derive(Debug, Default, Deserialize)]
struct RawSpan {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    text: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    style: Option<TextStyle>,
}

#[derive(Debug, Deserialize)]
struct PreformattedPayload {
    #[serde(default)]
    elements: Vec<RawSpan>,
}

#[derive(Debug, Deserialize)]
struct ListPayload {
    #[serde(default)]
    style: String,
    #[serde(default)]
    indent: usize,
    #[serde(default)]
    elements: Vec<ListItemPayload>,
}

#[derive(Debug, Deserialize)]
struct ListItemPayload {
    #[serde(default)]
    elements: Vec<RawSpan>,
}

#[derive(Debug, Deserialize)]
struct QuotePayload {
    #[serde(default)]
    elements: Vec<RawSpan>,
}

// ============================================================================
// Element converters
// ============================================================================

/// Converts a rich-text section into Markdown fragments.
///
/// Text sub-elements get embedded newlines turned into hard line breaks
/// (trailing double space) before styling is applied; link sub-elements
/// emit the bare URL followed by a hard break. Anything else is reported
/// and skipped.
pub fn convert_section(section: &RichTextSection) -> Vec<String> {
    let mut md = Vec::new();
    for element in &section.elements {
        match element {
            SectionElement::Text { text, style } => {
                let broken = text.replace('\n', "  \n");
                md.push(decorate(&broken, style.as_ref()));
            }
            SectionElement::Link { url } => md.push(format!("{url}  ")),
            SectionElement::Other(value) => {
                eprintln!("slackdown: skipping unrecognized section element: {value}");
            }
        }
    }
    md
}

/// Converts a preformatted element into a fenced code block.
///
/// Styling flags on the payload spans are ignored; code blocks carry their
/// content literally. Link spans contribute their URL.
pub fn convert_preformatted(payload: &Value) -> Result<Vec<String>> {
    let pre: PreformattedPayload = serde_json::from_value(payload.clone())
        .map_err(|e| SlackdownError::decode("rich_text_preformatted", e))?;
    let mut md = vec!["```\n".to_owned()];
    for span in &pre.elements {
        md.push(match span.kind.as_str() {
            "link" => span.url.clone(),
            _ => span.text.clone(),
        });
    }
    md.push("\n```".to_owned());
    Ok(md)
}

/// Converts a list element into one Markdown line per item.
///
/// Indentation is three spaces per level. Ordered lists use the literal
/// marker `1. ` for every item; Markdown renderers number the items
/// themselves, so the marker never increments.
pub fn convert_list(payload: &Value) -> Result<Vec<String>> {
    let list: ListPayload = serde_json::from_value(payload.clone())
        .map_err(|e| SlackdownError::decode("rich_text_list", e))?;
    let indent = "   ".repeat(list.indent);
    let marker = if list.style == "ordered" { "1. " } else { "* " };
    let mut md = Vec::with_capacity(list.elements.len());
    for item in &list.elements {
        let mut content = String::new();
        for span in &item.elements {
            match span.kind.as_str() {
                "text" => content.push_str(&decorate(&span.text, span.style.as_ref())),
                "link" => content.push_str(&span.url),
                _ => {}
            }
        }
        md.push(format!("{indent}{marker}{content}\n"));
    }
    Ok(md)
}

/// Converts a quote element into a `> `-prefixed block.
///
/// Every physical line of the quote is prefixed independently and
/// hard-broken, and the block ends with a paragraph separator.
pub fn convert_quote(payload: &Value) -> Result<String> {
    let quote: QuotePayload = serde_json::from_value(payload.clone())
        .map_err(|e| SlackdownError::decode("rich_text_quote", e))?;
    let mut text = String::from("> ");
    for span in &quote.elements {
        text.push_str(&decorate(&span.text, span.style.as_ref()));
    }
    Ok(text.replace('\n', "  \n> ") + "\n\n")
}

// ============================================================================
// Message converter
// ============================================================================

/// Converts one message into its ordered Markdown fragments.
///
/// Walks the message's blocks in order, dispatching every element of every
/// rich-text block to its converter; non-rich-text blocks contribute
/// nothing. The fragment sequence always ends with a blank-line separator
/// so consecutive messages don't visually merge.
///
/// The first decode failure aborts the message; fragments the caller
/// already wrote stay written (write-as-you-go, no rollback).
pub fn convert_message(message: &ApiMessage) -> Result<Vec<String>> {
    let mut md = Vec::new();
    for block in message.blocks.iter().filter(|b| b.is_rich_text()) {
        for element in &block.elements {
            match element {
                RichTextElement::Section(section) => md.extend(convert_section(section)),
                RichTextElement::Preformatted(payload) => {
                    md.extend(convert_preformatted(payload)?);
                }
                RichTextElement::List(payload) => md.extend(convert_list(payload)?),
                RichTextElement::Quote(payload) => md.push(convert_quote(payload)?),
                RichTextElement::Unknown(raw) => md.push(raw.clone()),
            }
        }
    }
    md.push("\n\n".to_owned());
    Ok(md)
}
