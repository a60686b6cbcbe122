pub mod confidence;
pub mod preference;
pub mod reading;
pub mod snapshot;
pub mod user_profile;
pub mod weight;

pub use confidence::Confidence;
pub use preference::{TopicPreference, Trend};
pub use reading::{Language, ReadingAbility, ReadingLevel};
pub use snapshot::{PreferenceSnapshot, SnapshotTrigger};
pub use user_profile::UserProfile;
pub use weight::Weight;
