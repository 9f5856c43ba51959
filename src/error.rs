use thiserror::Error;

/// Main error type for the vdscript-info library
#[derive(Error, Debug)]
pub enum VdscriptError {
    #[error("Script error: {0}")]
    Script(#[from] ScriptError),

    #[error("Frame rate error: {0}")]
    FrameRate(#[from] FrameRateError),

    #[error("Batch error: {0}")]
    Batch(#[from] BatchError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while reading or scanning a selection script
#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("Failed to read script file: {path} ({reason})")]
    ReadFailed { path: String, reason: String },

    #[error("Frame number does not fit in 64 bits: {value}")]
    InvalidNumber { value: String },

    #[error("Range starting at frame {start} covers no frames")]
    EmptyRange { start: u64 },

    #[error("Range starting at frame {start} with {length} frames overflows")]
    RangeOverflow { start: u64, length: u64 },

    #[error("Total length of {count} selections overflows")]
    TotalOverflow { count: usize },
}

/// Errors raised while validating a user-supplied frame rate
#[derive(Error, Debug, PartialEq)]
pub enum FrameRateError {
    #[error("Frame rate is not a number: '{input}'")]
    NotANumber { input: String },

    #[error("Frame rate must be greater than zero, got {value}")]
    NonPositive { value: f64 },

    #[error("Frame rate must be a finite number, got {value}")]
    NotFinite { value: f64 },

    #[error("No frame rate given")]
    Missing,
}

/// Errors raised by batch processing
#[derive(Error, Debug)]
pub enum BatchError {
    #[error("No .{extension} files found in: {path}")]
    NoScriptsFound { path: String, extension: String },

    #[error("Input path does not exist: {path}")]
    InputNotFound { path: String },

    #[error("Failed to write report: {path} ({reason})")]
    WriteFailed { path: String, reason: String },

    #[error("Failed to stream reports: {reason}")]
    OutputFailed { reason: String },

    #[error("{failed} of {total} script(s) failed")]
    FilesFailed { failed: usize, total: usize },
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration file: {path}")]
    ParseFailed { path: String },

    #[error("Invalid configuration value: {key} = {value}")]
    InvalidValue { key: String, value: String },

    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },
}

/// Convenience type alias for Results using VdscriptError
pub type Result<T> = std::result::Result<T, VdscriptError>;

impl VdscriptError {
    /// Whether a batch run may move on to the next script after this error
    pub fn is_per_file(&self) -> bool {
        matches!(
            self,
            Self::Script(_) | Self::Io(_) | Self::Batch(BatchError::WriteFailed { .. })
        )
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Script(ScriptError::ReadFailed { path, .. }) => {
                format!("Could not read script '{}'. Please check the file exists and is UTF-8 text.", path)
            }
            Self::FrameRate(FrameRateError::Missing) => {
                "No frame rate given. Pass --fps or set `fps` in the configuration file.".to_string()
            }
            Self::FrameRate(e) => {
                format!("{}. Enter a positive number such as 23.976 or 25.", e)
            }
            Self::Batch(BatchError::NoScriptsFound { path, extension }) => {
                format!("No .{} files found in '{}'.", extension, path)
            }
            Self::Config(ConfigError::FileNotFound { path }) => {
                format!("Configuration file '{}' not found.", path)
            }
            _ => self.to_string(),
        }
    }
}
