use thiserror::Error;

/// Every way an upload can fail. The `Display` text is the message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectError {
    #[error("Please upload a CSV or TSV file")]
    UnsupportedFileType,

    #[error("Error reading file")]
    ReadFailure,

    #[error("File must contain at least {minimum} names")]
    InsufficientRecords { minimum: usize, found: usize },

    #[error("Error processing file. Please check the format.")]
    MalformedInput,
}

impl SelectError {
    /// Short tag used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            SelectError::UnsupportedFileType => "unsupported-file-type",
            SelectError::ReadFailure => "read-failure",
            SelectError::InsufficientRecords { .. } => "insufficient-records",
            SelectError::MalformedInput => "malformed-input",
        }
    }
}
