pub mod event;

pub use event::{DiscoveryResponse, FeedbackEvent, FeedbackSignal};
