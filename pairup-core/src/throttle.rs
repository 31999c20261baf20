//! Duplicate-request suppression.
//!
//! [`RequestThrottle`] is a fixed-capacity expiring key→timestamp store: a
//! key is admitted at most once per time-to-live window. The surrounding
//! application holds one per flow that must not process rapid duplicate
//! submissions (e.g. password-reset requests keyed by email address).
//!
//! Time is read through the injectable [`Clock`] seam so tests control
//! expiry deterministically.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use thiserror::Error;

/// Source of monotonic time for a [`RequestThrottle`].
///
/// Implementations must be monotonic: successive calls never go backwards.
pub trait Clock: Send + Sync {
    /// Return the current instant.
    fn now(&self) -> Instant;
}

/// [`Clock`] backed by [`Instant::now`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Errors returned by [`RequestThrottle::with_clock`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ThrottleError {
    /// A zero capacity would suppress every request.
    #[error("throttle capacity must be at least one entry")]
    ZeroCapacity,
    /// A zero time-to-live would never suppress anything.
    #[error("throttle time-to-live must be positive")]
    ZeroTtl,
}

/// Fixed-capacity expiring key→timestamp store.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use pairup_core::RequestThrottle;
///
/// # fn main() -> Result<(), pairup_core::ThrottleError> {
/// let mut throttle = RequestThrottle::new(128, Duration::from_secs(300))?;
/// assert!(throttle.try_acquire("user@example.com"));
/// assert!(!throttle.try_acquire("user@example.com"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RequestThrottle<C: Clock = SystemClock> {
    capacity: usize,
    ttl: Duration,
    clock: C,
    entries: HashMap<String, Instant>,
}

impl RequestThrottle<SystemClock> {
    /// Construct a throttle reading time from [`SystemClock`].
    ///
    /// # Errors
    /// Returns [`ThrottleError`] when `capacity` or `ttl` is zero.
    pub fn new(capacity: usize, ttl: Duration) -> Result<Self, ThrottleError> {
        Self::with_clock(capacity, ttl, SystemClock)
    }
}

impl<C: Clock> RequestThrottle<C> {
    /// Construct a throttle with an injected clock.
    ///
    /// # Errors
    /// Returns [`ThrottleError`] when `capacity` or `ttl` is zero.
    pub fn with_clock(capacity: usize, ttl: Duration, clock: C) -> Result<Self, ThrottleError> {
        if capacity == 0 {
            return Err(ThrottleError::ZeroCapacity);
        }
        if ttl.is_zero() {
            return Err(ThrottleError::ZeroTtl);
        }
        Ok(Self {
            capacity,
            ttl,
            clock,
            entries: HashMap::new(),
        })
    }

    /// Admit `key` unless an unexpired entry for it exists.
    ///
    /// Returns `true` when the request may proceed; the key is recorded at
    /// the current instant. Returns `false` while a previous admission of
    /// the same key is still within the time-to-live window.
    ///
    /// Expired entries are purged on every call. When the store is full the
    /// oldest entry is evicted to make room.
    pub fn try_acquire(&mut self, key: &str) -> bool {
        let now = self.clock.now();
        self.purge_expired(now);
        if self.entries.contains_key(key) {
            return false;
        }
        if self.entries.len() >= self.capacity {
            self.evict_oldest();
        }
        self.entries.insert(key.to_owned(), now);
        true
    }

    /// Return the configured capacity.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Return the configured time-to-live.
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Return the number of tracked keys, including not-yet-purged ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Report whether no keys are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn purge_expired(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.entries
            .retain(|_, stamp| now.saturating_duration_since(*stamp) < ttl);
    }

    fn evict_oldest(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, stamp)| **stamp)
            .map(|(key, _)| key.clone());
        if let Some(key) = oldest {
            self.entries.remove(&key);
        }
    }
}
