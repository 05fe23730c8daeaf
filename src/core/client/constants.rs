//! Centralized constants for default endpoints, headers and timeouts.

use std::time::Duration;

/// Default desktop UA; the portal gates responses on browser-looking headers.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/114.0.0.0 Safari/537.36"
);

/// Company overview page that embeds `encparam` and `id` (`cmp_cd` is appended).
pub(crate) const DEFAULT_PORTAL_URL: &str =
    "https://navercomp.wisereport.co.kr/v2/company/c1010001.aspx";

/// Financial-summary AJAX endpoint.
pub(crate) const DEFAULT_DATA_URL: &str =
    "https://navercomp.wisereport.co.kr/v2/company/ajax/cF1001.aspx";

pub(crate) const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

pub(crate) const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.5";

/// Bound applied to each request when none is configured.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
