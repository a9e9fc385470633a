use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("CliError: {0}")]
    Cli(#[from] CliError),
    #[error("ApiError: {0}")]
    Api(#[from] ApiError),
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
    #[error("DisplayError: {0}")]
    Display(#[from] DisplayError),
    #[error("UtilsError: {0}")]
    Utils(#[from] UtilsError),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("Invalid JSON input: {message}")]
    InvalidJson { message: String },
    #[error("{count} value(s) failed validation")]
    ValidationFailed { count: usize },
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid header line '{line}': {reason}")]
    InvalidHeader { line: String, reason: String },
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Configuration save failed: {message}")]
    ConfigSaveFailed { message: String },
    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration value for '{field}': {value}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("Terminal output error: {0}")]
    TerminalOutput(String),
}

#[derive(Error, Debug)]
pub enum UtilsError {
    #[error("Validation error: {message}")]
    Validation { message: String },
    #[error("Invalid UTF-8 sequence at byte {valid_up_to}")]
    Decode { valid_up_to: usize },
    #[error("Invalid hex input: {message}")]
    Hex { message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorSeverity {
    Critical,
    High,
    Medium,
    Low,
}

impl ErrorSeverity {
    pub fn label(&self) -> &'static str {
        match self {
            ErrorSeverity::Critical => "critical",
            ErrorSeverity::High => "error",
            ErrorSeverity::Medium => "warning",
            ErrorSeverity::Low => "note",
        }
    }
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Cli(CliError::ValidationFailed { .. }) => ErrorSeverity::Low,
            AppError::Cli(_) => ErrorSeverity::Medium,
            AppError::Api(_) => ErrorSeverity::Medium,
            AppError::Config(_) => ErrorSeverity::High,
            AppError::Storage(storage_error) => match storage_error {
                StorageError::ConfigDirNotFound => ErrorSeverity::Critical,
                _ => ErrorSeverity::High,
            },
            AppError::Display(_) => ErrorSeverity::Low,
            AppError::Utils(_) => ErrorSeverity::Low,
        }
    }

    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Storage(StorageError::ConfigParseError { .. }) => Some(
                "Check the TOML syntax of config.toml, or run 'edgekit config show' with --config-dir pointing at an empty directory".to_string(),
            ),
            AppError::Storage(StorageError::ConfigDirNotFound) => {
                Some("Pass --config-dir or set EDGEKIT_CONFIG_DIR".to_string())
            }
            AppError::Api(ApiError::InvalidHeader { .. }) => {
                Some("Headers must be given as -H 'Name: value'".to_string())
            }
            AppError::Utils(UtilsError::Hex { .. }) => {
                Some("Hex input must have an even number of [0-9a-f] digits".to_string())
            }
            _ => None,
        }
    }
}
