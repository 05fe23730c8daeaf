//! End-to-end run for one entity code: tokens, both views, selection, merge, CSV.

use std::path::{Path, PathBuf};

use crate::core::{AuthTokens, EntityCode, Frequency, FsClient, FsError, Stage};
use crate::output::{output_path, write_csv};
use crate::summary::fetch_raw_table;
use crate::table::{DEFAULT_METRICS, FinTable, merge, normalize, select};
use crate::tokens::extract_tokens;

/// Fetches and normalizes one reporting view, projected onto [`DEFAULT_METRICS`].
///
/// # Errors
///
/// Errors are wrapped in [`FsError::Stage`] naming the code and the failing step.
pub async fn fetch_view(
    client: &FsClient,
    code: &EntityCode,
    freq: Frequency,
    tokens: &AuthTokens,
) -> Result<FinTable, FsError> {
    let raw = fetch_raw_table(client, code, freq, tokens)
        .await
        .map_err(|e| e.at(code.as_str(), Stage::Fetch(freq)))?;
    normalize(&raw)
        .and_then(|table| select(&table, &DEFAULT_METRICS))
        .map_err(|e| e.at(code.as_str(), Stage::Normalize(freq)))
}

/// Builds the merged annual + quarterly summary for `code` without writing it.
///
/// Tokens are scraped once and reused for both views. The first failure aborts the run.
///
/// # Errors
///
/// Any stage failure, wrapped in [`FsError::Stage`].
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, err, fields(code = %code)))]
pub async fn build_summary(client: &FsClient, code: &EntityCode) -> Result<FinTable, FsError> {
    let tokens = extract_tokens(client, code)
        .await
        .map_err(|e| e.at(code.as_str(), Stage::Tokens))?;

    let annual = fetch_view(client, code, Frequency::Annual, &tokens).await?;
    let quarterly = fetch_view(client, code, Frequency::Quarterly, &tokens).await?;

    Ok(merge(&annual, &quarterly))
}

/// Runs the whole pipeline and writes `<out_dir>/<code>.csv`, returning its path.
///
/// Nothing is written unless every network and parsing step succeeded.
///
/// # Errors
///
/// Any stage failure, wrapped in [`FsError::Stage`].
pub async fn run(client: &FsClient, code: &EntityCode, out_dir: &Path) -> Result<PathBuf, FsError> {
    let merged = build_summary(client, code).await?;
    let path = output_path(out_dir, code);
    write_csv(&merged, &path).map_err(|e| e.at(code.as_str(), Stage::Write))?;
    Ok(path)
}
