use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("credential must be text or an integer, got {kind}")]
    InvalidInputType { kind: &'static str },

    #[error("generated password length must be at least 1, got {length}")]
    InvalidLength { length: i64 },

    #[error("HTTP {status} fetching range for prefix {prefix}")]
    RangeFetch { prefix: String, status: u16 },

    #[error("connection to range service failed for prefix {prefix}: {source}")]
    Connection {
        prefix: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("malformed range entry '{line}' for prefix {prefix}")]
    MalformedRange { prefix: String, line: String },

    #[error("password list '{path}' not found")]
    FileNotFound { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
