//! Portal page scraping for the `encparam`/`id` session tokens.
//!
//! The data endpoint refuses requests that do not carry the two values the portal page
//! embeds in its inline scripts. How they are found is pluggable through
//! [`TokenExtractionStrategy`]; the client's default tries [`RegexStrategy`] and then
//! [`ScriptTagStrategy`].

mod strategies;

use std::fmt;

use crate::core::{AuthTokens, EntityCode, FsClient, FsError};

pub use strategies::{FallbackStrategy, RegexStrategy, ScriptTagStrategy};

/// A way of locating the auth tokens in the portal page's HTML.
pub trait TokenExtractionStrategy: fmt::Debug + Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Returns both tokens, or `None` if either one cannot be found.
    fn extract(&self, html: &str) -> Option<AuthTokens>;
}

/// Fetches the portal page for `code` and extracts its auth tokens with the client's strategy.
///
/// Makes exactly one request; there is no retry.
///
/// # Errors
///
/// Returns [`FsError::Transport`] or [`FsError::Status`] if the page cannot be fetched, and
/// [`FsError::Extraction`] if the strategy finds no tokens (or only empty ones).
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, err, fields(code = %code)))]
pub async fn extract_tokens(client: &FsClient, code: &EntityCode) -> Result<AuthTokens, FsError> {
    let url = client.portal_page_url(code);
    let resp = client.http().get(url).send().await?;
    let body = crate::core::net::get_text(resp, "portal", code.as_str()).await?;

    let strategy = client.token_strategy();
    match strategy.extract(&body) {
        Some(tokens) if !tokens.encparam.is_empty() && !tokens.id.is_empty() => {
            #[cfg(feature = "tracing")]
            tracing::debug!(strategy = strategy.name(), id = %tokens.id, "auth tokens extracted");
            Ok(tokens)
        }
        _ => Err(FsError::Extraction {
            code: code.to_string(),
        }),
    }
}
