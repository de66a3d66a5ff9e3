use std::io;
use std::path::PathBuf;

/// Structural problems in a format string, found before any vocab is read
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("format malformed at byte {position}: unknown directive '%{kind}'")]
    InvalidDirective { position: usize, kind: char },

    #[error("format malformed at byte {position}: '%' at end of format")]
    DanglingMarker { position: usize },

    #[error("format malformed at byte {position}: '%{kind}' must be followed by a delimiter or '%d'")]
    MissingDelimiter { position: usize, kind: char },

    #[error("format malformed at byte {position}: '%{kind}' is missing its argument")]
    MissingArgument { position: usize, kind: char },

    #[error("format malformed at byte {position}: '%d' must directly follow '%h', '%k' or '%r'")]
    OrphanDistinguisher { position: usize },
}

impl FormatError {
    /// Byte offset of the offending directive in the format string
    pub fn position(&self) -> usize {
        match self {
            FormatError::InvalidDirective { position, .. }
            | FormatError::DanglingMarker { position }
            | FormatError::MissingDelimiter { position, .. }
            | FormatError::MissingArgument { position, .. }
            | FormatError::OrphanDistinguisher { position } => *position,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to open vocab file {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("failed to read vocab file {name} at line {line}: {source}")]
    Read {
        name: String,
        line: usize,
        source: io::Error,
    },
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("no vocab matches format")]
    EmptyStore,
}
