//! Bounded, expiring record of which requests have already been retried.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Retries allowed per request signature.
pub const MAX_RETRIES: u8 = 1;

const DEFAULT_CAPACITY: usize = 256;
const DEFAULT_TTL: Duration = Duration::from_secs(300);

#[derive(Debug, Clone, Copy)]
struct Entry {
    count: u8,
    marked_at: Instant,
}

/// Maps a request signature (`METHOD url #id`, one id per call to
/// `execute`) to the number of CSRF retries it has consumed.
#[derive(Debug)]
pub struct RetryLedger {
    entries: Mutex<HashMap<String, Entry>>,
    capacity: usize,
    ttl: Duration,
}

impl Default for RetryLedger {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY, DEFAULT_TTL)
    }
}

impl RetryLedger {
    #[must_use]
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            capacity: capacity.max(1),
            ttl,
        }
    }

    /// Consume one retry for `signature`. Returns `false` once the cap is
    /// reached.
    pub fn try_mark(&self, signature: &str) -> bool {
        self.try_mark_at(signature, Instant::now())
    }

    fn try_mark_at(&self, signature: &str, now: Instant) -> bool {
        let mut entries = self.lock();
        entries.retain(|_, entry| now.duration_since(entry.marked_at) < self.ttl);

        if let Some(entry) = entries.get_mut(signature) {
            if entry.count >= MAX_RETRIES {
                return false;
            }
            entry.count += 1;
            entry.marked_at = now;
            return true;
        }

        if entries.len() >= self.capacity
            && let Some(oldest) = entries
                .iter()
                .min_by_key(|(_, entry)| entry.marked_at)
                .map(|(key, _)| key.clone())
        {
            entries.remove(&oldest);
        }
        entries.insert(
            signature.to_string(),
            Entry {
                count: 1,
                marked_at: now,
            },
        );
        true
    }

    /// Forget `signature` once its logical request has finished.
    pub fn release(&self, signature: &str) {
        self.lock().remove(signature);
    }

    #[must_use]
    pub fn retries_for(&self, signature: &str) -> u8 {
        self.lock().get(signature).map_or(0, |entry| entry.count)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Entry>> {
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}
