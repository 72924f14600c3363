//! # attest-client
//!
//! Typed async client for the evidence backend's REST API.
//!
//! One [`ApiClient`] owns the cookie jar (session + CSRF cookies), the
//! single-flight CSRF gate and the retry ledger. Resource operations are
//! grouped by backend resource:
//! - auth (login, logout, current user, profile, password, Google sign-in)
//! - categories (controls, groups, export)
//! - submissions (evidence, review, dashboard, analytics)
//! - documents (uploaded files)
//! - notifications
//! - Google Drive hand-off
//!
//! Every mutating call carries `X-CSRFToken`; a CSRF-type 403 is retried
//! exactly once after a fresh token fetch.

pub mod auth;
pub mod categories;
pub mod csrf;
pub mod documents;
pub mod google_drive;
pub mod notifications;
pub mod request;
pub mod retry;
pub mod submissions;

mod error;
mod http;

pub use categories::CategoryQuery;
pub use documents::{DocumentQuery, distinct_uploaders};
pub use error::{ApiError, ErrorKind};
pub use request::{ApiRequest, UploadFile};
pub use submissions::{EvidenceUpload, SubmissionQuery};

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use attest_config::ApiConfig;
use reqwest::Url;
use reqwest::cookie::{CookieStore, Jar};
use serde::de::DeserializeOwned;

use crate::csrf::{CSRF_HEADER, CsrfGate, token_from_cookie_header};
use crate::http::{check_response, decode};
use crate::request::{CSRF_PATH, RequestBody};
use crate::retry::RetryLedger;

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the evidence backend.
pub struct ApiClient {
    http: reqwest::Client,
    jar: Arc<Jar>,
    base_url: String,
    origin: Url,
    csrf: CsrfGate,
    retries: RetryLedger,
    next_request: AtomicU64,
}

impl ApiClient {
    /// Create a client for `base_url` with default timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] if `base_url` does not parse, or
    /// [`ApiError::Transport`] if the HTTP client fails to build.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::from_config(&ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        })
    }

    /// Create a client from the `[api]` configuration section.
    ///
    /// # Errors
    ///
    /// See [`Self::new`].
    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        let origin = Url::parse(&format!("{base_url}/")).map_err(|e| ApiError::InvalidUrl {
            url: base_url.clone(),
            reason: e.to_string(),
        })?;
        let jar = Arc::new(Jar::default());
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .cookie_provider(Arc::clone(&jar))
            .build()?;
        Ok(Self {
            http,
            jar,
            base_url,
            origin,
            csrf: CsrfGate::default(),
            retries: RetryLedger::default(),
            next_request: AtomicU64::new(1),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Number of `GET /auth/csrf/` calls this client has issued.
    #[must_use]
    pub fn csrf_fetches(&self) -> u64 {
        self.csrf.fetches()
    }

    // ── Cookies ────────────────────────────────────────────────────

    /// Cookies the jar would send to the backend, as a `Cookie` header value.
    #[must_use]
    pub fn cookie_header(&self) -> Option<String> {
        self.jar
            .cookies(&self.origin)
            .and_then(|value| value.to_str().ok().map(str::to_string))
    }

    /// Seed the jar from a previously saved [`Self::cookie_header`] value.
    pub fn restore_cookies(&self, header: &str) {
        for pair in header.split(';').map(str::trim).filter(|p| p.contains('=')) {
            self.jar
                .add_cookie_str(&format!("{pair}; Path=/"), &self.origin);
        }
    }

    /// Token currently held in the jar, if any.
    #[must_use]
    pub fn csrf_token(&self) -> Option<String> {
        self.cookie_header()
            .as_deref()
            .and_then(token_from_cookie_header)
    }

    // ── CSRF ───────────────────────────────────────────────────────

    /// Token for a mutating request: the cookie if present, otherwise the
    /// result of a shared fetch. `None` if the fetch failed.
    ///
    /// Also returns the fetch generation the token belongs to, so a later
    /// refresh is skipped when someone else already replaced it.
    async fn ensure_csrf_token(&self) -> (Option<String>, u64) {
        let seen = self.csrf.generation();
        if let Some(token) = self.csrf_token() {
            return (Some(token), seen);
        }
        self.csrf.fetch_once(seen, || self.fetch_csrf_cookie()).await;
        (self.csrf_token(), self.csrf.generation())
    }

    /// Fresh token after a rejection. Skips the fetch when another caller
    /// already refreshed after `seen`.
    async fn refresh_csrf_token(&self, seen: u64) -> Option<String> {
        self.csrf.fetch_once(seen, || self.fetch_csrf_cookie()).await;
        self.csrf_token()
    }

    async fn fetch_csrf_cookie(&self) {
        let url = format!("{}{CSRF_PATH}", self.base_url);
        tracing::info!(path = CSRF_PATH, "fetching csrf token");
        match self.http.get(&url).send().await {
            Ok(resp) if resp.status().is_success() => {}
            Ok(resp) => {
                tracing::warn!(status = resp.status().as_u16(), "csrf token fetch rejected");
            }
            Err(error) => tracing::warn!(%error, "csrf token fetch failed"),
        }
    }

    // ── Execution ──────────────────────────────────────────────────

    fn url_for(&self, request: &ApiRequest) -> Result<Url, ApiError> {
        let raw = format!("{}{}", self.base_url, request.path);
        let mut url = Url::parse(&raw).map_err(|e| ApiError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;
        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(request.query.iter());
        }
        Ok(url)
    }

    /// Send `request` under the CSRF policy and return the checked response.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`] from the final attempt.
    pub async fn execute(&self, request: &ApiRequest) -> Result<reqwest::Response, ApiError> {
        let url = self.url_for(request)?;
        let id = self.next_request.fetch_add(1, Ordering::Relaxed);
        let signature = format!("{} {url} #{id}", request.method);
        let outcome = self.execute_with_retry(request, &url, &signature).await;
        self.retries.release(&signature);
        outcome
    }

    async fn execute_with_retry(
        &self,
        request: &ApiRequest,
        url: &Url,
        signature: &str,
    ) -> Result<reqwest::Response, ApiError> {
        let (token, epoch) = if request.needs_csrf_token() {
            self.ensure_csrf_token().await
        } else {
            (None, self.csrf.generation())
        };

        let first = self.send(request, url, token.as_deref()).await;
        if !matches!(first, Err(ApiError::Forbidden { csrf: true, .. })) {
            return first;
        }
        if request.is_csrf_exempt() {
            return first;
        }
        if !self.retries.try_mark(signature) {
            tracing::warn!(signature, "csrf rejection after retry; giving up");
            return first;
        }

        tracing::warn!(signature, "csrf rejection; refreshing token and retrying once");
        let Some(token) = self.refresh_csrf_token(epoch).await else {
            tracing::warn!(signature, "no csrf token after refresh; not resending");
            return first;
        };
        self.send(request, url, Some(&token)).await
    }

    async fn send(
        &self,
        request: &ApiRequest,
        url: &Url,
        csrf_token: Option<&str>,
    ) -> Result<reqwest::Response, ApiError> {
        let mut builder = self.http.request(request.method.clone(), url.clone());
        if let Some(token) = csrf_token {
            builder = builder.header(CSRF_HEADER, token);
        }
        builder = match &request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(value),
            RequestBody::Multipart(fields) => builder.multipart(ApiRequest::build_form(fields)?),
        };

        let resp = builder.send().await?;
        tracing::debug!(
            method = %request.method,
            path = %request.path,
            status = resp.status().as_u16(),
            "api response"
        );
        check_response(resp).await
    }

    /// Execute and decode a JSON body.
    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        request: &ApiRequest,
    ) -> Result<T, ApiError> {
        decode(self.execute(request).await?).await
    }

    /// Execute and discard the body.
    pub(crate) async fn run(&self, request: &ApiRequest) -> Result<(), ApiError> {
        self.execute(request).await.map(drop)
    }
}
