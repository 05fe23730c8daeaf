#[cfg(feature = "test-mode")]
use std::env;

use crate::core::FsError;

/// Check the status and read the response body as text.
/// In `test-mode`, if `FS_RECORD=1`, the body is saved as a fixture via `core::fixtures`.
pub(crate) async fn get_text(
    resp: reqwest::Response,
    _endpoint: &str,
    _code: &str,
) -> Result<String, FsError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(FsError::Status {
            status: status.as_u16(),
            url: resp.url().to_string(),
        });
    }

    let text = resp.text().await?;

    #[cfg(feature = "tracing")]
    tracing::debug!(endpoint = _endpoint, code = _code, len = text.len(), "response body read");

    #[cfg(feature = "test-mode")]
    {
        if env::var("FS_RECORD").ok().as_deref() == Some("1")
            && let Err(e) = crate::core::fixtures::record_fixture(_endpoint, _code, &text)
        {
            eprintln!("FS_RECORD: failed to write fixture for {_code}: {e}");
        }
    }

    Ok(text)
}
