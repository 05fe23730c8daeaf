use std::fmt;

use crate::core::FsError;

/// Identifier of the company being queried (e.g. `005930`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityCode(String);

impl EntityCode {
    /// Trims `code` and rejects it when nothing is left.
    ///
    /// # Errors
    ///
    /// Returns [`FsError::InvalidCode`] for empty or whitespace-only input.
    pub fn new(code: impl AsRef<str>) -> Result<Self, FsError> {
        let code = code.as_ref().trim();
        if code.is_empty() {
            return Err(FsError::InvalidCode);
        }
        Ok(Self(code.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EntityCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Session parameters scraped from the portal page and required by the data endpoint.
///
/// Scoped to a single entity code and a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthTokens {
    /// The opaque `encparam` value.
    pub encparam: String,
    /// The alphanumeric `id` value.
    pub id: String,
}

/// Which reporting view the data endpoint should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frequency {
    /// Fiscal-year columns.
    Annual,
    /// Fiscal-quarter columns.
    Quarterly,
    /// Annual and quarterly columns in one table, under a two-level header.
    All,
}

impl Frequency {
    /// The `freq_typ` value the data endpoint expects.
    pub fn code(self) -> &'static str {
        match self {
            Frequency::Annual => "Y",
            Frequency::Quarterly => "Q",
            Frequency::All => "A",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Frequency::Annual => "annual",
            Frequency::Quarterly => "quarterly",
            Frequency::All => "all",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
