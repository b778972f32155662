use thiserror::Error;

/// Convenience result type for loading and summarizing.
pub type SummaryResult<T> = Result<T, SummaryError>;

/// Error type returned by the loader and the summarizer.
///
/// Every variant is terminal for the current invocation. Callers that need to branch on the
/// failure (exit codes, HTTP status codes) should match on [`SummaryError::kind`].
#[derive(Debug, Error)]
pub enum SummaryError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reader error. Malformed input is a parse error; a failed read is an I/O error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// A column classified as numeric by its first record holds a non-numeric value later on.
    #[error("failed to parse value at record {record} column '{column}': {message} (raw='{raw}')")]
    ValueFormat {
        /// 1-based data record number (the header is not counted).
        record: usize,
        column: String,
        raw: String,
        message: String,
    },

    /// The caller named a column that is not in the header.
    #[error("missing column '{column}'. columns={available:?}")]
    MissingColumn { column: String, available: Vec<String> },
}

/// Coarse classification of a [`SummaryError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The source could not be opened or read.
    Io,
    /// The delimited-text grammar is malformed.
    Parse,
    /// A numeric column holds a value that does not parse as a number.
    ValueFormat,
    /// A requested column does not exist.
    MissingColumn,
}

impl SummaryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SummaryError::Io(_) => ErrorKind::Io,
            SummaryError::Csv(err) => match err.kind() {
                csv::ErrorKind::Io(_) => ErrorKind::Io,
                _ => ErrorKind::Parse,
            },
            SummaryError::ValueFormat { .. } => ErrorKind::ValueFormat,
            SummaryError::MissingColumn { .. } => ErrorKind::MissingColumn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ErrorKind, SummaryError};

    #[test]
    fn io_errors_classify_as_io() {
        let err = SummaryError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn invalid_utf8_is_a_parse_error() {
        let input: &[u8] = b"a,b\n1,\xff\xfe\n";
        let mut rdr = csv::ReaderBuilder::new().from_reader(input);
        let err = rdr.records().find_map(Result::err).map(SummaryError::from);
        assert_eq!(err.map(|e| e.kind()), Some(ErrorKind::Parse));
    }

    #[test]
    fn missing_column_message_names_the_column() {
        let err = SummaryError::MissingColumn {
            column: "nope".to_string(),
            available: vec!["id".to_string()],
        };
        assert_eq!(err.kind(), ErrorKind::MissingColumn);
        assert!(err.to_string().contains("missing column 'nope'"));
    }
}
