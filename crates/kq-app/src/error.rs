use kq_config::ConfigError;
use kq_core::{FormatError, LoadError, QuizError};

pub const EXIT_USAGE: u8 = 1;
pub const EXIT_MALFORMED_FORMAT: u8 = 2;
pub const EXIT_FILE_OPEN: u8 = 3;
pub const EXIT_FILE_READ: u8 = 4;
pub const EXIT_EMPTY: u8 = 5;
pub const EXIT_CONFIG: u8 = 6;
pub const EXIT_DISPLAY: u8 = 7;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Quiz(#[from] QuizError),

    #[error("display failed: {0:#}")]
    Display(anyhow::Error),
}

impl AppError {
    /// Process exit code, stable per failure cause
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Config(_) => EXIT_CONFIG,
            AppError::Format(_) => EXIT_MALFORMED_FORMAT,
            AppError::Load(LoadError::Open { .. }) => EXIT_FILE_OPEN,
            AppError::Load(LoadError::Read { .. }) => EXIT_FILE_READ,
            AppError::Quiz(QuizError::EmptyStore) => EXIT_EMPTY,
            AppError::Display(_) => EXIT_DISPLAY,
        }
    }
}
