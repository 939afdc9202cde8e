//! Export configuration.
//!
//! An export is described either by a YAML file or by CLI flags; both paths
//! produce an [`ExportConfig`]. The YAML shape:
//!
//! ```yaml
//! output: digest.md
//! since: 7
//! users: [U111, U222]
//! channels:
//!   - id: C123
//!   - id: C456
//!     header: Weekly sync
//!     users: [U333]
//!   - id: C789
//!     no_header: true
//! ```
//!
//! `output` and at least one channel are required; everything else has a
//! default. A per-channel `users` list overrides the global allow-list for
//! that channel only.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SlackdownError};

fn default_since() -> i64 {
    1
}

/// Per-channel export settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChannelConfig {
    /// Channel identifier (`C...`).
    pub id: String,

    /// Header text to emit instead of the channel's display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,

    /// Suppress the header line for this channel entirely.
    #[serde(default)]
    pub no_header: bool,

    /// User allow-list for this channel, overriding the global one when
    /// non-empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<String>,
}

impl ChannelConfig {
    /// Creates a channel entry with only an id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

/// Top-level export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Destination Markdown file path. Required.
    #[serde(default)]
    pub output: String,

    /// Lookback window in days (default 1).
    #[serde(default = "default_since")]
    pub since: i64,

    /// Global user allow-list; empty means include everyone.
    #[serde(default)]
    pub users: Vec<String>,

    /// Suppress the `# <channel>` header for every channel.
    #[serde(default)]
    pub no_channel_name: bool,

    /// Channels to export, in output order. Required.
    #[serde(default)]
    pub channels: Vec<ChannelConfig>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output: String::new(),
            since: default_since(),
            users: Vec::new(),
            no_channel_name: false,
            channels: Vec::new(),
        }
    }
}

impl ExportConfig {
    /// Reads and validates a YAML configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parses and validates a YAML configuration string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the required fields.
    pub fn validate(&self) -> Result<()> {
        if self.output.is_empty() {
            return Err(SlackdownError::config("missing field: output"));
        }
        if self.channels.is_empty() {
            return Err(SlackdownError::config("no channels configured"));
        }
        Ok(())
    }

    /// Returns the allow-list that applies to a channel: the channel's own
    /// list when non-empty, the global list otherwise.
    pub fn users_for<'a>(&'a self, channel: &'a ChannelConfig) -> &'a [String] {
        if channel.users.is_empty() {
            &self.users
        } else {
            &channel.users
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_yaml() {
        let yaml = r"
output: digest.md
since: 7
users: [U111, U222]
no_channel_name: true
channels:
  - id: C123
  - id: C456
    header: Weekly sync
    users: [U333]
  - id: C789
    no_header: true
";
        let config = ExportConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.output, "digest.md");
        assert_eq!(config.since, 7);
        assert_eq!(config.users, vec!["U111", "U222"]);
        assert!(config.no_channel_name);
        assert_eq!(config.channels.len(), 3);
        assert_eq!(config.channels[1].header.as_deref(), Some("Weekly sync"));
        assert!(config.channels[2].no_header);
    }

    #[test]
    fn test_defaults() {
        let yaml = "
output: out.md
channels:
  - id: C1
";
        let config = ExportConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.since, 1);
        assert!(config.users.is_empty());
        assert!(!config.no_channel_name);
        assert!(config.channels[0].header.is_none());
        assert!(!config.channels[0].no_header);
    }

    #[test]
    fn test_missing_output_rejected() {
        let yaml = "
channels:
  - id: C1
";
        let err = ExportConfig::from_yaml(yaml).unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("output"));
    }

    #[test]
    fn test_empty_channels_rejected() {
        let err = ExportConfig::from_yaml("output: out.md").unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("channels"));
    }

    #[test]
    fn test_invalid_yaml_rejected() {
        let err = ExportConfig::from_yaml("output: [unclosed").unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_users_for_override() {
        let config = ExportConfig {
            output: "out.md".into(),
            users: vec!["U_GLOBAL".into()],
            channels: vec![
                ChannelConfig::new("C1"),
                ChannelConfig {
                    users: vec!["U_LOCAL".into()],
                    ..ChannelConfig::new("C2")
                },
            ],
            ..ExportConfig::default()
        };
        assert_eq!(config.users_for(&config.channels[0]), ["U_GLOBAL"]);
        assert_eq!(config.users_for(&config.channels[1]), ["U_LOCAL"]);
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = ExportConfig::from_path("/nonexistent/config.yaml").unwrap_err();
        assert!(err.is_io());
    }
}
