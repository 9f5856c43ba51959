use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

use crate::{
    error::{ConfigError, Result},
    timecode::FrameRate,
};

/// Main configuration for vdscript-info
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Frame rate shared by every script in the batch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fps: Option<FrameRate>,

    /// Input discovery settings
    pub input: InputConfig,

    /// Report output settings
    pub output: OutputConfig,

    /// Batch behaviour
    pub batch: BatchConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound { path: path.display().to_string() })?;

        let config: Config = toml::from_str(&content)
            .map_err(|_| ConfigError::ParseFailed { path: path.display().to_string() })?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::InvalidValue {
                key: "config".to_string(),
                value: e.to_string()
            })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.input.validate()?;
        self.output.validate()?;
        Ok(())
    }
}

/// Where to look for scripts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// File extension of selection scripts, without the dot
    pub extension: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            extension: "vdscript".to_string(),
        }
    }
}

impl InputConfig {
    fn validate(&self) -> Result<()> {
        let extension = self.extension.trim_start_matches('.');
        if extension.is_empty() || extension.contains(['/', '\\']) {
            return Err(ConfigError::InvalidValue {
                key: "input.extension".to_string(),
                value: self.extension.clone()
            }.into());
        }

        Ok(())
    }

    /// Extension with any leading dot removed
    pub fn normalized_extension(&self) -> &str {
        self.extension.trim_start_matches('.')
    }
}

/// How reports are written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Appended to the script's file stem to name the report
    pub suffix: String,

    /// Write every report here instead of beside its script
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,

    /// Width of the dashed rule above the total line
    pub separator_width: usize,

    /// Finish each report with the frame rate used
    pub include_fps: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            suffix: "_info.txt".to_string(),
            directory: None,
            separator_width: 80,
            include_fps: true,
        }
    }
}

impl OutputConfig {
    fn validate(&self) -> Result<()> {
        if self.suffix.is_empty() || self.suffix.contains(['/', '\\']) {
            return Err(ConfigError::InvalidValue {
                key: "output.suffix".to_string(),
                value: self.suffix.clone()
            }.into());
        }

        if self.separator_width == 0 {
            return Err(ConfigError::InvalidValue {
                key: "output.separator_width".to_string(),
                value: self.separator_width.to_string()
            }.into());
        }

        Ok(())
    }
}

/// What a batch does when one script fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Log the failure and move on to the next script
    #[default]
    Skip,
    /// Stop the batch at the first failure
    Abort,
}

/// Batch processing configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    pub on_error: FailurePolicy,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.output.suffix, "_info.txt");
        assert_eq!(config.batch.on_error, FailurePolicy::Skip);
    }

    #[test]
    fn test_config_roundtrip() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test_config.toml");

        let mut original_config = Config::default();
        original_config.fps = Some(FrameRate::new(23.976).unwrap());
        original_config.output.directory = Some(PathBuf::from("reports"));
        original_config.batch.on_error = FailurePolicy::Abort;

        original_config.save_to_file(&file_path).unwrap();
        let loaded_config = Config::from_file(&file_path).unwrap();

        assert_eq!(original_config, loaded_config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str("fps = 25\n[output]\ninclude_fps = false\n").unwrap();
        assert_eq!(config.fps.map(|f| f.as_f64()), Some(25.0));
        assert!(!config.output.include_fps);
        assert_eq!(config.output.separator_width, 80);
        assert_eq!(config.input.extension, "vdscript");
    }

    #[test]
    fn test_invalid_fps_rejected_on_load() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("bad.toml");
        std::fs::write(&file_path, "fps = -1.0\n").unwrap();

        assert!(Config::from_file(&file_path).is_err());
    }

    #[test]
    fn test_invalid_output_config() {
        let mut config = Config::default();
        config.output.separator_width = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.output.suffix = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_extension_normalized() {
        let mut config = Config::default();
        config.input.extension = ".vdscript".to_string();
        assert!(config.validate().is_ok());
        assert_eq!(config.input.normalized_extension(), "vdscript");

        config.input.extension = ".".to_string();
        assert!(config.validate().is_err());
    }
}
