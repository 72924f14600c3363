//! Anti-forgery token acquisition.
//!
//! The backend issues its token as a `csrftoken` (or `csrf_token`) cookie from
//! `GET /auth/csrf/`. Mutating requests echo it back in `X-CSRFToken`.
//! Concurrent callers that find no token share a single fetch: they queue on
//! an async mutex, and whoever finds the fetch generation already advanced
//! reuses the cookie that fetch produced.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::Mutex;

/// Header carrying the token on mutating requests.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Cookie names the backend may use for the token.
pub const CSRF_COOKIES: [&str; 2] = ["csrftoken", "csrf_token"];

const REJECTION_SIGNATURES: [&str; 4] = [
    "csrf",
    "origin checking failed",
    "token missing",
    "verification failed",
];

/// Whether a 403 payload describes an anti-forgery failure rather than a
/// permission problem.
#[must_use]
pub fn is_csrf_rejection(text: &str) -> bool {
    let lowered = text.to_lowercase();
    REJECTION_SIGNATURES
        .iter()
        .any(|signature| lowered.contains(signature))
}

/// Extract the token from a `Cookie` header value (`a=1; csrftoken=xyz`).
#[must_use]
pub fn token_from_cookie_header(header: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        if !CSRF_COOKIES.contains(&name.trim()) || value.is_empty() {
            return None;
        }
        Some(
            urlencoding::decode(value)
                .map_or_else(|_| value.to_string(), std::borrow::Cow::into_owned),
        )
    })
}

/// Single-flight coordination for token fetches.
#[derive(Debug, Default)]
pub struct CsrfGate {
    lock: Mutex<()>,
    generation: AtomicU64,
    fetches: AtomicU64,
}

impl CsrfGate {
    /// Completed fetch count; callers snapshot it before looking for a token.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Number of token fetches actually issued.
    #[must_use]
    pub fn fetches(&self) -> u64 {
        self.fetches.load(Ordering::SeqCst)
    }

    /// Run `fetch` unless another caller completed one after `seen` was
    /// taken. Returns `true` if this caller performed the fetch.
    pub async fn fetch_once<F, Fut>(&self, seen: u64, fetch: F) -> bool
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        let _guard = self.lock.lock().await;
        if self.generation() != seen {
            return false;
        }
        self.fetches.fetch_add(1, Ordering::SeqCst);
        fetch().await;
        self.generation.fetch_add(1, Ordering::SeqCst);
        true
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("CSRF Failed: CSRF token missing.", true)]
    #[case("Forbidden (Origin checking failed - http://evil does not match any trusted origins.)", true)]
    #[case("CSRF verification failed. Request aborted.", true)]
    #[case("Token missing or incorrect", true)]
    #[case("You do not have permission to perform this action.", false)]
    #[case("", false)]
    fn rejection_signatures(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(is_csrf_rejection(text), expected);
    }

    #[rstest]
    #[case("sessionid=abc; csrftoken=tok123", Some("tok123"))]
    #[case("csrf_token=tok%3D1", Some("tok=1"))]
    #[case("sessionid=abc", None)]
    #[case("csrftoken=", None)]
    fn cookie_lookup(#[case] header: &str, #[case] expected: Option<&str>) {
        assert_eq!(token_from_cookie_header(header).as_deref(), expected);
    }

    #[tokio::test]
    async fn concurrent_callers_share_one_fetch() {
        let gate = Arc::new(CsrfGate::default());
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = gate.generation();

        let mut handles = Vec::new();
        for _ in 0..8 {
            let gate = Arc::clone(&gate);
            let calls = Arc::clone(&calls);
            handles.push(tokio::spawn(async move {
                gate.fetch_once(seen, || async {
                    tokio::time::sleep(Duration::from_millis(20)).await;
                    calls.fetch_add(1, Ordering::SeqCst);
                })
                .await
            }));
        }
        let mut performed = 0;
        for handle in handles {
            if handle.await.unwrap() {
                performed += 1;
            }
        }

        assert_eq!(performed, 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(gate.generation(), 1);
        assert_eq!(gate.fetches(), 1);
    }

    #[tokio::test]
    async fn later_generation_fetches_again() {
        let gate = CsrfGate::default();
        assert!(gate.fetch_once(gate.generation(), || async {}).await);
        assert!(gate.fetch_once(gate.generation(), || async {}).await);
        assert_eq!(gate.fetches(), 2);
    }
}
