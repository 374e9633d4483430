use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::time::interval;
use tracing::{debug, info};

use crate::metrics::RATE_LIMIT_TRACKED_CLIENTS;

pub const DEFAULT_MAX_REQUESTS: u32 = 30;
pub const DEFAULT_WINDOW: Duration = Duration::from_millis(60_000);

// Rate limit entry - tracks requests per client identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitEntry {
    pub count: u32,
    pub window_start: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Admit,
    Reject,
}

/// Admission capability the ask handler depends on.
///
/// Implementations own the per-client counting state; the handler only ever
/// asks whether a request may proceed.
pub trait AdmissionGate: Send + Sync {
    fn admit(&self, client_id: &str, now: Instant) -> bool;

    /// Drops records whose window has expired and returns how many went away.
    fn sweep(&self, now: Instant) -> usize;

    fn tracked_clients(&self) -> usize;
}

// Fixed window counter, one record per client.
// Records are never removed unless `sweep` is called.
pub struct FixedWindowLimiter {
    entries: DashMap<String, RateLimitEntry>,
    max_requests: u32,
    window: Duration,
}

impl FixedWindowLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            max_requests,
            window,
        }
    }

    pub fn max_requests(&self) -> u32 {
        self.max_requests
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    fn expired(&self, entry: &RateLimitEntry, now: Instant) -> bool {
        now.saturating_duration_since(entry.window_start) > self.window
    }

    pub fn check_and_record(&self, client_id: &str, now: Instant) -> Decision {
        // the entry guard holds the shard lock for the whole read-modify-write
        match self.entries.entry(client_id.to_string()) {
            Entry::Vacant(slot) => {
                slot.insert(RateLimitEntry {
                    count: 1,
                    window_start: now,
                });
                Decision::Admit
            }
            Entry::Occupied(mut slot) => {
                let entry = slot.get_mut();

                // window expired..? start over
                if self.expired(entry, now) {
                    *entry = RateLimitEntry {
                        count: 1,
                        window_start: now,
                    };
                    return Decision::Admit;
                }

                // rejected requests still count, so the client stays blocked
                // until the window runs out
                entry.count = entry.count.saturating_add(1);
                if entry.count > self.max_requests {
                    Decision::Reject
                } else {
                    Decision::Admit
                }
            }
        }
    }

    pub fn get(&self, client_id: &str) -> Option<RateLimitEntry> {
        self.entries.get(client_id).map(|entry| *entry)
    }
}

impl Default for FixedWindowLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_REQUESTS, DEFAULT_WINDOW)
    }
}

impl AdmissionGate for FixedWindowLimiter {
    fn admit(&self, client_id: &str, now: Instant) -> bool {
        self.check_and_record(client_id, now) == Decision::Admit
    }

    fn sweep(&self, now: Instant) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !self.expired(entry, now));
        before.saturating_sub(self.entries.len())
    }

    fn tracked_clients(&self) -> usize {
        self.entries.len()
    }
}

// Periodically drops expired rate records so the store stops growing
pub async fn sweeper(gate: Arc<dyn AdmissionGate>, every: Duration) {
    let mut ticker = interval(every);

    info!(interval_secs = every.as_secs(), "rate limit sweeper started");

    loop {
        ticker.tick().await;

        let removed = gate.sweep(Instant::now());
        let tracked = gate.tracked_clients();
        RATE_LIMIT_TRACKED_CLIENTS.set(tracked as f64);

        if removed > 0 {
            debug!(removed, tracked, "swept expired rate limit records");
        }
    }
}
