//! The financial-summary AJAX endpoint (`cF1001.aspx`).

use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, REFERER};

use crate::core::{AuthTokens, EntityCode, FsClient, FsError, Frequency};

/// Fetches the raw HTML of the summary tables for one reporting view.
///
/// The request carries the tokens from [`crate::tokens::extract_tokens`] and a `Referer`
/// pointing at the same portal page they were scraped from. One attempt, no retry.
///
/// # Errors
///
/// Returns [`FsError::Transport`]/[`FsError::Status`] on network failure and
/// [`FsError::EmptyResponse`] if the body is blank.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip_all, err, fields(code = %code, freq = %freq))
)]
pub async fn fetch_raw_table(
    client: &FsClient,
    code: &EntityCode,
    freq: Frequency,
    tokens: &AuthTokens,
) -> Result<String, FsError> {
    let mut url = client.data_url().clone();
    url.query_pairs_mut()
        .append_pair("cmp_cd", code.as_str())
        .append_pair("fin_typ", "0")
        .append_pair("freq_typ", freq.code())
        .append_pair("extY", "0")
        .append_pair("extQ", "0")
        .append_pair("encparam", &tokens.encparam)
        .append_pair("id", &tokens.id);

    let referer = client.portal_page_url(code);
    let req = client
        .http()
        .get(url)
        .header(REFERER, referer.as_str())
        .header(ACCEPT, client.accept())
        .header(ACCEPT_LANGUAGE, client.accept_language());

    let resp = req.send().await?;
    let endpoint = format!("summary_{}", freq.label());
    let body = crate::core::net::get_text(resp, &endpoint, code.as_str()).await?;

    if body.trim().is_empty() {
        return Err(FsError::EmptyResponse {
            code: code.to_string(),
            frequency: freq,
        });
    }
    Ok(body)
}
