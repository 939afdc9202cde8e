//! Command-line interface definition using clap.
//!
//! The export can be described entirely on the command line or delegated
//! to a YAML file with `--config`; when a config file is given it is the
//! sole source of export options and the other flags are ignored. Either
//! way the result is an [`ExportConfig`].

use clap::Parser;

use crate::config::{ChannelConfig, ExportConfig};
use crate::error::Result;

/// Export Slack channel history, threads included, to a Markdown file.
#[derive(Parser, Debug, Clone)]
#[command(name = "slackdown")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    slackdown -t xoxb-... -c export.yaml
    slackdown -t xoxb-... --channel C0123456789 -o digest.md
    slackdown -t xoxb-... --channel C01 --channel C02 --since 7
    slackdown -t xoxb-... --channel C01 --user U0AAAAAAA --no-channel-name")]
pub struct Args {
    /// Slack API token
    #[arg(short, long, value_name = "TOKEN")]
    pub token: String,

    /// Path to a YAML config file (sole source of export options when set)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// Channel to export, in output order (repeatable)
    #[arg(long = "channel", value_name = "ID")]
    pub channels: Vec<String>,

    /// Path to output file
    #[arg(short, long, default_value = "slack_history.md")]
    pub output: String,

    /// Lookback window in days
    #[arg(long, value_name = "DAYS", default_value_t = 1)]
    pub since: i64,

    /// Only include messages from this user or bot id (repeatable)
    #[arg(long = "user", value_name = "ID")]
    pub users: Vec<String>,

    /// Do not emit "# <channel>" header lines
    #[arg(long)]
    pub no_channel_name: bool,
}

impl Args {
    /// Resolves the arguments into an export configuration.
    ///
    /// With `--config`, loads and validates the YAML file; otherwise the
    /// flags themselves are validated the same way.
    pub fn into_config(self) -> Result<ExportConfig> {
        if let Some(path) = &self.config {
            return ExportConfig::from_path(path);
        }
        let config = ExportConfig {
            output: self.output,
            since: self.since,
            users: self.users,
            no_channel_name: self.no_channel_name,
            channels: self.channels.into_iter().map(ChannelConfig::new).collect(),
        };
        config.validate()?;
        Ok(config)
    }
}
