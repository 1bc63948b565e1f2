use thiserror::Error;

/// Main error type for asn1dump operations
///
/// Codec failures (`EndOfStream`, `InvalidData`, `Io` while reading) stop a
/// walk quietly. `UnexpectedLength`, `MalformedLength` and `DepthExceeded`
/// describe structural corruption and end the whole dump.
#[derive(Error, Debug)]
pub enum DumpError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("End of stream")]
    EndOfStream,

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("at position {offset}: unexpected length ({length}) encountered")]
    UnexpectedLength { offset: u64, length: u64 },

    #[error("at position {offset}: malformed length field ({reason})")]
    MalformedLength { offset: u64, reason: String },

    #[error("Nesting depth limit of {0} exceeded")]
    DepthExceeded(usize),
}

impl DumpError {
    /// Whether this error describes structural corruption that must end the dump
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            DumpError::UnexpectedLength { .. }
                | DumpError::MalformedLength { .. }
                | DumpError::DepthExceeded(_)
        )
    }
}

/// Result type alias for asn1dump operations
pub type DumpResult<T> = Result<T, DumpError>;
