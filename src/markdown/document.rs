//! Markdown document assembly.
//!
//! The assembler walks collected channels in order and streams fragments
//! straight into the output sink. Nothing is buffered beyond the
//! `BufWriter` in [`write_file`], so arbitrarily large histories stream to
//! disk; it also means fragments written before a failure stay written.

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::collect::ChannelHistory;
use crate::config::{ChannelConfig, ExportConfig};
use crate::error::Result;
use crate::markdown::convert::convert_message;

fn header_line<'a>(channel: &'a ChannelHistory, cfg: Option<&'a ChannelConfig>) -> &'a str {
    cfg.and_then(|c| c.header.as_deref())
        .filter(|h| !h.is_empty())
        .unwrap_or(&channel.name)
}

/// Writes the Markdown document for the collected channels to a sink.
///
/// Per channel, in input order: an optional `# <name>` header (the
/// configured override when set, suppressed by the channel's `no_header`
/// or the global `no_channel_name`), then every root message's rendered
/// Markdown followed by its thread replies', skipping Slack's echo of the
/// root in the reply list.
pub fn write_document<W: Write>(
    channels: &[ChannelHistory],
    config: &ExportConfig,
    out: &mut W,
) -> Result<()> {
    for channel in channels {
        let cfg = config.channels.iter().find(|c| c.id == channel.id);
        let suppress = config.no_channel_name || cfg.is_some_and(|c| c.no_header);
        if !suppress {
            writeln!(out, "# {}", header_line(channel, cfg))?;
        }

        for message in &channel.messages {
            for fragment in convert_message(&message.root)? {
                out.write_all(fragment.as_bytes())?;
            }
            for reply in message.thread_replies() {
                for fragment in convert_message(reply)? {
                    out.write_all(fragment.as_bytes())?;
                }
            }
        }
    }
    Ok(())
}

/// Writes the document to the configured output file.
///
/// The file is created once, written sequentially through a `BufWriter`,
/// and flushed on success; dropping the writer closes the handle on every
/// exit path.
pub fn write_file(channels: &[ChannelHistory], config: &ExportConfig) -> Result<()> {
    let file = File::create(&config.output)?;
    let mut writer = BufWriter::new(file);
    write_document(channels, config, &mut writer)?;
    writer.flush()?;
    Ok(())
}
