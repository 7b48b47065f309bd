use crate::model::event::SplitDirection;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// Name used for the scratch buffer when none is configured
pub const DEFAULT_BUFFER_NAME: &str = "_SCRATCH_";

/// Scratch buffer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScratchConfig {
    /// Display name of the scratch buffer
    pub buffer_name: String,

    /// Direction used when the scratch buffer opens in a new split
    pub split_direction: SplitDirection,
}

impl Default for ScratchConfig {
    fn default() -> Self {
        Self {
            buffer_name: DEFAULT_BUFFER_NAME.to_string(),
            split_direction: SplitDirection::default(),
        }
    }
}

/// User-supplied options where every field is optional
///
/// A missing key and an explicit `null` both mean "use the default". Unknown keys are
/// ignored.
#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema)]
#[serde(default)]
pub struct ScratchOptions {
    /// Display name of the scratch buffer (default: "_SCRATCH_")
    pub buffer_name: Option<String>,

    /// Direction used when the scratch buffer opens in a new split (default: "horizontal")
    pub split_direction: Option<SplitDirection>,
}

impl ScratchOptions {
    /// Fill unset fields from the defaults
    pub fn resolve(self) -> ScratchConfig {
        let defaults = ScratchConfig::default();
        ScratchConfig {
            buffer_name: self.buffer_name.unwrap_or(defaults.buffer_name),
            split_direction: self.split_direction.unwrap_or(defaults.split_direction),
        }
    }
}

impl ScratchConfig {
    /// Build a configuration from user-supplied options
    ///
    /// `options` must be a JSON object matching [`ScratchOptions`].
    pub fn from_json(options: &Value) -> Result<Self, ConfigError> {
        // Structs also deserialize from sequences, which is not a valid options value
        if !options.is_object() {
            return Err(ConfigError::InvalidType(format!(
                "options must be an object, got {options}"
            )));
        }

        let options = ScratchOptions::deserialize(options)
            .map_err(|e| ConfigError::InvalidType(e.to_string()))?;

        let config = options.resolve();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;

        let value: Value =
            serde_json::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        Self::from_json(&value)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.buffer_name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "buffer_name cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
    InvalidType(String),
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(msg) => write!(f, "IO error: {msg}"),
            ConfigError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            ConfigError::InvalidType(msg) => write!(f, "Invalid type: {msg}"),
            ConfigError::ValidationError(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}
