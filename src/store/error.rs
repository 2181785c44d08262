use thiserror::Error;

/// Errors surfaced by [`ContactBook`](crate::store::ContactBook) operations.
///
/// `NotFound` and `EmptyUndo` are negative results, not failures; the CLI
/// renders them as plain messages. `Io` and `Csv` are kept distinct so a
/// transfer failure can be told apart from a bad file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("contact '{0}' not found")]
    NotFound(String),

    #[error("no deleted contact to restore")]
    EmptyUndo,

    #[error("malformed birthday '{value}' for contact '{name}' (expected YYYY-MM-DD)")]
    MalformedDate { name: String, value: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
