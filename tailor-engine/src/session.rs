//! Last-request-wins session bookkeeping.
//!
//! Each session carries a generation counter. A new request bumps the
//! generation; an in-flight computation that discovers a newer
//! generation after an await returns `Superseded` instead of leaking a
//! stale result into output.

use dashmap::DashMap;

/// Concurrent session → generation table.
#[derive(Default)]
pub struct SessionTable {
    generations: DashMap<String, u64>,
}

impl SessionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new request for a session, superseding any in-flight
    /// one. Returns this request's generation.
    pub fn begin(&self, session_id: &str) -> u64 {
        let mut entry = self.generations.entry(session_id.to_string()).or_insert(0);
        *entry += 1;
        *entry
    }

    /// Whether `generation` is still the newest request for the session.
    pub fn is_current(&self, session_id: &str, generation: u64) -> bool {
        self.generations
            .get(session_id)
            .map(|g| *g == generation)
            .unwrap_or(false)
    }

    /// Number of sessions seen.
    pub fn session_count(&self) -> usize {
        self.generations.len()
    }
}
