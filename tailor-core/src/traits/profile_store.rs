use chrono::{DateTime, Utc};

use crate::errors::TailorResult;
use crate::feedback::event::FeedbackEvent;
use crate::profile::user_profile::UserProfile;

/// Durable per-user profile state plus the append-only feedback log.
///
/// Implementations must guarantee:
/// - `atomic_update` is all-or-nothing per user; a failed update leaves
///   the stored profile untouched (fail closed, no partial writes).
/// - `append_event` is durable before it returns.
/// - reads return a consistent snapshot and may proceed concurrently
///   with a writer.
pub trait IProfileStore: Send + Sync {
    /// Read a profile. `Ok(None)` for unknown users.
    fn read(&self, user_id: &str) -> TailorResult<Option<UserProfile>>;

    /// Read a profile, creating a neutral cold-start profile on first
    /// interaction.
    fn read_or_create(&self, user_id: &str, now: DateTime<Utc>) -> TailorResult<UserProfile>;

    /// Apply `update` to the stored profile atomically and return the
    /// updated copy.
    fn atomic_update(
        &self,
        user_id: &str,
        update: &mut dyn FnMut(&mut UserProfile),
    ) -> TailorResult<UserProfile>;

    /// Append an event to the durable log. Returns `false` when the
    /// event id was already appended (idempotent no-op).
    fn append_event(&self, event: &FeedbackEvent) -> TailorResult<bool>;

    /// Most recent events for a user, newest first, up to `limit`.
    fn recent_events(&self, user_id: &str, limit: usize) -> TailorResult<Vec<FeedbackEvent>>;
}
