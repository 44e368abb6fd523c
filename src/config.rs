//! Configuration for siistreams
//!
//! Centralized configuration with defaults matching the games' own files.

use crate::error::{Result, SiiError};

/// Main configuration for the codec and the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Parser Configuration
    // -------------------------------------------------------------------------
    /// Token identifying the definition line, matched case-insensitively.
    /// The whole line is carried through verbatim.
    pub definition_marker: String,

    // -------------------------------------------------------------------------
    // Writer Configuration
    // -------------------------------------------------------------------------
    /// Attribute name of the stream array
    ///   ` {list_key}: N`
    ///   ` {list_key}[i]: "url|label"`
    pub list_key: String,

    /// Line terminator used when writing
    pub line_ending: LineEnding,
}

/// Line terminator for written files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// `\n`
    #[default]
    Lf,

    /// `\r\n`, what the games write on Windows
    CrLf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            definition_marker: "live_stream_def".to_string(),
            list_key: "stream_data".to_string(),
            line_ending: LineEnding::Lf,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Reject settings the codec cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.definition_marker.trim().is_empty() {
            return Err(SiiError::Config(
                "definition marker must not be empty".to_string(),
            ));
        }
        if self.list_key.trim().is_empty() {
            return Err(SiiError::Config("list key must not be empty".to_string()));
        }
        if self.list_key.contains(|c: char| c.is_whitespace() || !c.is_ascii()) {
            return Err(SiiError::Config(format!(
                "list key must be a single ASCII word, got {:?}",
                self.list_key
            )));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the marker that identifies the definition line
    pub fn definition_marker(mut self, marker: impl Into<String>) -> Self {
        self.config.definition_marker = marker.into();
        self
    }

    /// Set the attribute name of the stream array
    pub fn list_key(mut self, key: impl Into<String>) -> Self {
        self.config.list_key = key.into();
        self
    }

    /// Set the line terminator for written files
    pub fn line_ending(mut self, line_ending: LineEnding) -> Self {
        self.config.line_ending = line_ending;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
