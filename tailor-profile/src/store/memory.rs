//! In-memory reference implementation of `IProfileStore`.
//!
//! Durable engines live behind the same trait outside this workspace;
//! this implementation keeps the trait honest (atomic per-user updates,
//! append-before-fold, idempotent event ids) and supports JSON
//! export/import so reload semantics are testable.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use tailor_core::errors::{ProfileError, TailorResult};
use tailor_core::feedback::event::FeedbackEvent;
use tailor_core::profile::UserProfile;
use tailor_core::traits::IProfileStore;

/// Per-user stored state: the profile aggregate plus its event log.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct UserRecord {
    profile: Option<UserProfile>,
    /// Append-only log, oldest first.
    events: Vec<FeedbackEvent>,
    /// Applied event ids for idempotence.
    seen_events: HashSet<String>,
}

/// Thread-safe in-memory profile store using `DashMap` for per-user
/// entry locking. An entry's shard lock makes every `atomic_update`
/// all-or-nothing for that user while other users proceed concurrently.
#[derive(Default)]
pub struct InMemoryProfileStore {
    records: DashMap<String, UserRecord>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize the full store to JSON (profiles + event logs).
    pub fn export_json(&self) -> TailorResult<String> {
        let snapshot: Vec<(String, UserRecord)> = self
            .records
            .iter()
            .map(|r| (r.key().clone(), r.value().clone()))
            .collect();
        Ok(serde_json::to_string(&snapshot)?)
    }

    /// Rebuild a store from `export_json` output.
    pub fn import_json(json: &str) -> TailorResult<Self> {
        let snapshot: Vec<(String, UserRecord)> = serde_json::from_str(json)?;
        let store = Self::new();
        for (user_id, record) in snapshot {
            store.records.insert(user_id, record);
        }
        Ok(store)
    }

    /// Number of users with stored state.
    pub fn user_count(&self) -> usize {
        self.records.len()
    }
}

impl IProfileStore for InMemoryProfileStore {
    fn read(&self, user_id: &str) -> TailorResult<Option<UserProfile>> {
        Ok(self
            .records
            .get(user_id)
            .and_then(|r| r.profile.clone()))
    }

    fn read_or_create(&self, user_id: &str, now: DateTime<Utc>) -> TailorResult<UserProfile> {
        let mut record = self.records.entry(user_id.to_string()).or_default();
        if record.profile.is_none() {
            debug!(user_id, "creating cold-start profile");
            record.profile = Some(UserProfile::new(user_id, now));
        }
        Ok(record.profile.clone().ok_or_else(|| ProfileError::NotFound {
            user_id: user_id.to_string(),
        })?)
    }

    fn atomic_update(
        &self,
        user_id: &str,
        update: &mut dyn FnMut(&mut UserProfile),
    ) -> TailorResult<UserProfile> {
        let mut record = self.records.entry(user_id.to_string()).or_default();
        let profile = record.profile.as_mut().ok_or_else(|| ProfileError::NotFound {
            user_id: user_id.to_string(),
        })?;
        // The update runs on a working copy; the stored profile is only
        // replaced once the closure returns (no partial writes).
        let mut working = profile.clone();
        update(&mut working);
        *profile = working.clone();
        Ok(working)
    }

    fn append_event(&self, event: &FeedbackEvent) -> TailorResult<bool> {
        let mut record = self.records.entry(event.user_id.clone()).or_default();
        let key = event.event_id.to_string();
        if record.seen_events.contains(&key) {
            debug!(event_id = %event.event_id, "duplicate event ignored");
            return Ok(false);
        }
        record.seen_events.insert(key);
        record.events.push(event.clone());
        Ok(true)
    }

    fn recent_events(&self, user_id: &str, limit: usize) -> TailorResult<Vec<FeedbackEvent>> {
        Ok(self
            .records
            .get(user_id)
            .map(|r| r.events.iter().rev().take(limit).cloned().collect())
            .unwrap_or_default())
    }
}
