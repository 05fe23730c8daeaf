use std::fmt;

use thiserror::Error;

use crate::core::models::Frequency;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum FsError {
    /// An HTTP request failed or timed out.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success HTTP status code.
    #[error("unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// A configured endpoint could not be parsed.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The entity code was empty or whitespace.
    #[error("entity code must not be empty")]
    InvalidCode,

    /// The portal page did not contain the `encparam`/`id` tokens.
    #[error("encparam or id not found in portal page (code={code})")]
    Extraction {
        /// The entity code whose portal page was scanned.
        code: String,
    },

    /// The data endpoint returned a blank body.
    #[error("data endpoint returned an empty body (code={code}, freq={frequency})")]
    EmptyResponse {
        /// The entity code that was requested.
        code: String,
        /// The reporting view that was requested.
        frequency: Frequency,
    },

    /// Fewer than two `<table>` blocks were found in the response.
    #[error("expected at least 2 tables in response, found {found}")]
    TableCount {
        /// Number of tables parsed.
        found: usize,
    },

    /// The summary table's header is neither one nor two rows deep.
    #[error("summary table has {levels} header levels; expected 1 or 2")]
    HeaderDepth {
        /// Number of header rows found.
        levels: usize,
    },

    /// No column carries the metric-name label.
    #[error("metric-name column `{0}` not found")]
    MissingKeyColumn(String),

    /// The same metric was requested more than once.
    #[error("metric `{0}` requested more than once")]
    DuplicateMetric(String),

    /// Writing the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding the CSV output failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A pipeline stage failed for one entity code.
    #[error("[{code}] {stage} failed: {source}")]
    Stage {
        /// The entity code being processed.
        code: String,
        /// The stage that failed.
        stage: Stage,
        /// The underlying failure.
        #[source]
        source: Box<FsError>,
    },
}

impl FsError {
    /// Returns `true` for network-side failures (timeouts, connection errors, bad status),
    /// as opposed to failures caused by the content that came back.
    pub fn is_transport(&self) -> bool {
        match self {
            FsError::Transport(_) | FsError::Status { .. } => true,
            FsError::Stage { source, .. } => source.is_transport(),
            _ => false,
        }
    }

    pub(crate) fn at(self, code: &str, stage: Stage) -> FsError {
        FsError::Stage {
            code: code.to_string(),
            stage,
            source: Box::new(self),
        }
    }
}

/// The step of the pipeline an error was raised in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Scraping the auth tokens from the portal page.
    Tokens,
    /// Calling the data endpoint for one reporting view.
    Fetch(Frequency),
    /// Parsing and keying one reporting view's table.
    Normalize(Frequency),
    /// Writing the merged table to disk.
    Write,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Tokens => f.write_str("token extraction"),
            Stage::Fetch(freq) => write!(f, "fetch ({})", freq.label()),
            Stage::Normalize(freq) => write!(f, "normalize ({})", freq.label()),
            Stage::Write => f.write_str("write"),
        }
    }
}
