//! fin-summary: annual and quarterly financial summaries from the WiseReport company portal.
//!
//! A run for one company code:
//! 1. [`tokens::extract_tokens`] scrapes the session tokens from the portal page.
//! 2. [`summary::fetch_raw_table`] requests the annual and the quarterly view with them.
//! 3. [`table::normalize`] keys each response's summary table by metric name.
//! 4. [`table::select`] and [`table::merge`] shape both views into one fixed table.
//! 5. [`output::write_csv`] persists it.
//!
//! [`pipeline::run`] does all of the above.

pub mod core;
pub mod output;
pub mod pipeline;
pub mod summary;
pub mod table;
pub mod tokens;

pub use crate::core::{AuthTokens, EntityCode, Frequency, FsClient, FsClientBuilder, FsError, Stage};
pub use table::{FinTable, Metric, Row};
pub use tokens::{FallbackStrategy, RegexStrategy, ScriptTagStrategy, TokenExtractionStrategy};
