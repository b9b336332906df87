//! Process-wide application state.
//!
//! Everything a handler needs beyond the request itself lives here, built
//! once at bootstrap and shared by `Arc` — there are no module-level
//! statics. Restarting the process rebuilds the state, which is what resets
//! the counter and the start time.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Duration, Utc};

/// A strictly increasing per-process request sequence.
///
/// Backed by an atomic: every call to [`next`](RequestCounter::next) returns
/// a value no other call ever returns, and [`total`](RequestCounter::total)
/// equals the number of `next` calls so far. Values reflect the order
/// increments landed, not the order requests hit the network layer — two
/// racing requests may be numbered either way.
#[derive(Debug, Default)]
pub struct RequestCounter(AtomicU64);

impl RequestCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns the next sequence value, starting at 1.
    pub fn next(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Number of sequence values assigned so far.
    pub fn total(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}

/// Immutable service identity plus the one piece of shared mutable state.
///
/// Constructed in `main`, wrapped in an `Arc`, and handed to the handlers
/// and middleware that need it.
#[derive(Debug)]
pub struct AppState {
    service: String,
    version: String,
    started_at: DateTime<Utc>,
    endpoints: Vec<String>,
    counter: RequestCounter,
}

impl AppState {
    pub fn new(service: &str, version: &str, endpoints: &[&str]) -> Self {
        Self {
            service: service.to_owned(),
            version: version.to_owned(),
            started_at: Utc::now(),
            endpoints: endpoints.iter().map(|&e| e.to_owned()).collect(),
            counter: RequestCounter::new(),
        }
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn endpoints(&self) -> &[String] {
        &self.endpoints
    }

    pub fn counter(&self) -> &RequestCounter {
        &self.counter
    }

    /// Wall-clock time elapsed since the state was built.
    pub fn uptime(&self) -> Duration {
        Utc::now() - self.started_at
    }

    /// Uptime rendered for humans, e.g. `"1h23m45.678s"`.
    pub fn uptime_string(&self) -> String {
        format_duration(self.uptime())
    }
}

/// Renders a duration as `[Nh][Nm]S.mmms`. Negative durations clamp to zero;
/// the state's clock only runs forward.
pub(crate) fn format_duration(d: Duration) -> String {
    let total_ms = d.num_milliseconds().max(0);
    let hours = total_ms / 3_600_000;
    let minutes = (total_ms % 3_600_000) / 60_000;
    let seconds = (total_ms % 60_000) / 1_000;
    let millis = total_ms % 1_000;

    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{hours}h"));
    }
    if minutes > 0 || hours > 0 {
        out.push_str(&format!("{minutes}m"));
    }
    out.push_str(&format!("{seconds}.{millis:03}s"));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn counter_starts_at_zero_and_counts_up() {
        let counter = RequestCounter::new();
        assert_eq!(counter.total(), 0);
        assert_eq!(counter.next(), 1);
        assert_eq!(counter.next(), 2);
        assert_eq!(counter.total(), 2);
    }

    #[test]
    fn counter_assigns_unique_values_across_threads() {
        let counter = Arc::new(RequestCounter::new());
        let per_thread = 200;

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let counter = Arc::clone(&counter);
                thread::spawn(move || {
                    (0..per_thread).map(|_| counter.next()).collect::<Vec<u64>>()
                })
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for seq in handle.join().unwrap() {
                assert!(seen.insert(seq), "sequence value {seq} assigned twice");
            }
        }

        assert_eq!(counter.total(), 8 * per_thread);
        assert_eq!(seen.len() as u64, counter.total());
    }

    #[test]
    fn uptime_is_non_negative() {
        let state = AppState::new("test", "0.0.0", &[]);
        assert!(state.uptime() >= Duration::zero());
        assert!(state.started_at() <= Utc::now());
    }

    #[test]
    fn format_duration_shapes() {
        assert_eq!(format_duration(Duration::milliseconds(42)), "0.042s");
        assert_eq!(format_duration(Duration::milliseconds(1_500)), "1.500s");
        assert_eq!(format_duration(Duration::seconds(62)), "1m2.000s");
        assert_eq!(
            format_duration(Duration::seconds(3_600 + 120 + 3)),
            "1h2m3.000s"
        );
        assert_eq!(format_duration(Duration::milliseconds(-5)), "0.000s");
    }
}
