//! Public client surface + builder.
//! Defaults (UA, endpoints, headers, timeout) live in `constants`.

mod constants;

use crate::core::{EntityCode, FsError};
use crate::tokens::{FallbackStrategy, TokenExtractionStrategy};
use constants::{
    ACCEPT, ACCEPT_LANGUAGE, DEFAULT_DATA_URL, DEFAULT_PORTAL_URL, DEFAULT_TIMEOUT, USER_AGENT,
};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Everything needed to talk to the portal: the HTTP client, endpoints, browser headers
/// and the token extraction strategy.
///
/// Holds no per-company state, so one client can serve any number of entity codes.
#[derive(Debug, Clone)]
pub struct FsClient {
    http: Client,
    portal_url: Url,
    data_url: Url,
    accept: String,
    accept_language: String,
    timeout: Duration,
    token_strategy: Arc<dyn TokenExtractionStrategy>,
}

impl FsClient {
    /// Create a new builder.
    pub fn builder() -> FsClientBuilder {
        FsClientBuilder::default()
    }

    /// Build a client with every default.
    ///
    /// # Errors
    ///
    /// Returns `FsError` if the underlying HTTP client cannot be constructed.
    pub fn new() -> Result<Self, FsError> {
        Self::builder().build()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn data_url(&self) -> &Url {
        &self.data_url
    }
    pub(crate) fn accept(&self) -> &str {
        &self.accept
    }
    pub(crate) fn accept_language(&self) -> &str {
        &self.accept_language
    }
    pub(crate) fn token_strategy(&self) -> &dyn TokenExtractionStrategy {
        self.token_strategy.as_ref()
    }

    /// The per-request timeout this client was built with.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The portal page URL for `code`. Also sent as `Referer` to the data endpoint.
    pub fn portal_page_url(&self, code: &EntityCode) -> Url {
        let mut url = self.portal_url.clone();
        url.query_pairs_mut().append_pair("cmp_cd", code.as_str());
        url
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct FsClientBuilder {
    user_agent: Option<String>,
    portal_url: Option<Url>,
    data_url: Option<Url>,
    accept: Option<String>,
    accept_language: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    token_strategy: Option<Arc<dyn TokenExtractionStrategy>>,
}

impl FsClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the portal page (e.g., `https://navercomp.wisereport.co.kr/v2/company/c1010001.aspx`).
    pub fn portal_url(mut self, url: Url) -> Self {
        self.portal_url = Some(url);
        self
    }

    /// Override the data endpoint (e.g., `https://navercomp.wisereport.co.kr/v2/company/ajax/cF1001.aspx`).
    pub fn data_url(mut self, url: Url) -> Self {
        self.data_url = Some(url);
        self
    }

    /// Override the `Accept` header sent to the data endpoint.
    pub fn accept(mut self, accept: impl Into<String>) -> Self {
        self.accept = Some(accept.into());
        self
    }

    /// Override the `Accept-Language` header sent to the data endpoint.
    pub fn accept_language(mut self, lang: impl Into<String>) -> Self {
        self.accept_language = Some(lang.into());
        self
    }

    /// Set the overall per-request timeout. Default: 10 seconds.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Replace the strategy used to pull `encparam`/`id` out of the portal page.
    pub fn token_strategy(mut self, strategy: impl TokenExtractionStrategy + 'static) -> Self {
        self.token_strategy = Some(Arc::new(strategy));
        self
    }

    pub fn build(self) -> Result<FsClient, FsError> {
        let portal_url = match self.portal_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_PORTAL_URL)?,
        };
        let data_url = match self.data_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_DATA_URL)?,
        };
        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .cookie_store(true)
            .timeout(timeout);

        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(FsClient {
            http,
            portal_url,
            data_url,
            accept: self.accept.unwrap_or_else(|| ACCEPT.to_string()),
            accept_language: self
                .accept_language
                .unwrap_or_else(|| ACCEPT_LANGUAGE.to_string()),
            timeout,
            token_strategy: self
                .token_strategy
                .unwrap_or_else(|| Arc::new(FallbackStrategy::default())),
        })
    }
}
