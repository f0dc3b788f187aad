use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Input file '{path}' does not exist")]
    InputNotFound { path: String },

    #[error("Request failed with status code {status}")]
    HttpStatusError { status: u16, body: String },

    #[error("No results were found. Output file will not be created.")]
    NoResults,

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl EtlError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::InputNotFound { path } => {
                format!("Error: Input file '{}' does not exist.", path)
            }
            EtlError::NoResults => {
                "No results were found. Output file will not be created.".to_string()
            }
            EtlError::ConfigError { .. } | EtlError::InvalidConfigValueError { .. } => {
                self.to_string()
            }
            EtlError::TomlError(e) => format!("Could not parse config file: {}", e),
            other => format!("Error in main process: {}", other),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EtlError::InputNotFound { .. } => "Check the --input path and try again",
            EtlError::NoResults => {
                "Verify the identifiers in the input file; rerun with --debug to inspect API responses"
            }
            EtlError::ConfigError { .. }
            | EtlError::InvalidConfigValueError { .. }
            | EtlError::TomlError(_)
            | EtlError::UrlError(_) => "Fix the configuration file or command-line flags",
            EtlError::ApiError(_) | EtlError::HttpStatusError { .. } => {
                "Check network connectivity and the lookup endpoint"
            }
            EtlError::CsvError(_) | EtlError::IoError(_) | EtlError::SerializationError(_) => {
                "Check that the input is valid CSV and the output location is writable"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
