//! Recording helper for persisting fetched pages as test fixtures.
//! Compiled only when the `test-mode` feature is enabled.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub(crate) fn get_fixture_dir() -> PathBuf {
    env::var("FS_FIXDIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"))
}

pub(crate) fn record_fixture(endpoint: &str, code: &str, body: &str) -> Result<(), std::io::Error> {
    let dir = get_fixture_dir();
    fs::create_dir_all(&dir)?;
    let path = dir.join(format!("{endpoint}_{code}.html"));
    fs::write(&path, body)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(path = %path.display(), "recorded fixture");

    Ok(())
}
