use chrono::Utc;
use std::collections::HashMap;
use std::sync::{ Arc, Mutex };

/// Millisecond clock, injected so window arithmetic is testable.
pub trait Clock: Send + Sync {
    fn now_ms(&self) -> i64;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

#[derive(Clone, Copy, Debug)]
struct WindowRecord {
    count: u32,
    reset_at_ms: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RateDecision {
    Allowed,
    Limited {
        reset_at_ms: i64,
    },
}

/// Fixed-window request counter keyed by client identifier.
///
/// Records are created lazily the first time an identifier is seen and are
/// never evicted; the table lives for the process lifetime. Unidentified
/// clients all share the "unknown" bucket.
pub struct FixedWindowLimiter {
    limit: u32,
    window_ms: i64,
    clock: Arc<dyn Clock>,
    records: Mutex<HashMap<String, WindowRecord>>,
}

impl FixedWindowLimiter {
    pub fn new(limit: u32, window_ms: i64) -> Self {
        Self::with_clock(limit, window_ms, Arc::new(SystemClock))
    }

    pub fn with_clock(limit: u32, window_ms: i64, clock: Arc<dyn Clock>) -> Self {
        Self {
            limit,
            window_ms,
            clock,
            records: Mutex::new(HashMap::new()),
        }
    }

    /// Check-and-increment as one atomic step under the table lock.
    pub fn check(&self, identifier: &str) -> RateDecision {
        let now = self.clock.now_ms();
        let mut records = self.records.lock().unwrap_or_else(|e| e.into_inner());

        match records.get_mut(identifier) {
            Some(record) if now <= record.reset_at_ms => {
                if record.count >= self.limit {
                    return RateDecision::Limited { reset_at_ms: record.reset_at_ms };
                }
                record.count += 1;
                RateDecision::Allowed
            }
            _ => {
                // First request from this identifier, or its window expired.
                records.insert(identifier.to_string(), WindowRecord {
                    count: 1,
                    reset_at_ms: now + self.window_ms,
                });
                RateDecision::Allowed
            }
        }
    }
}
