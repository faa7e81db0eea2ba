use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Invalid record at line {line}: {reason}")]
    InvalidRecord { line: u64, reason: String },

    #[error("Empty corpus: {0}")]
    EmptyCorpus(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// True for failures reading or parsing the corpus source.
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            Error::Io(_)
                | Error::Csv(_)
                | Error::Json(_)
                | Error::MissingColumn(_)
                | Error::InvalidRecord { .. }
        )
    }

    /// True when the corpus has no entries or no usable vocabulary.
    pub fn is_empty_corpus(&self) -> bool {
        matches!(self, Error::EmptyCorpus(_))
    }
}
