pub mod context;
pub mod discovery;
pub mod request;
pub mod result;
pub mod transparency;

pub use context::{ContextFactor, DeviceType, Mood, RequestContext, TimeOfDay};
pub use discovery::DiscoveryRecommendation;
pub use request::RecommendationRequest;
pub use result::{
    RecommendationResponse, RecommendationResult, RelaxationStep, ScoreExplanation, ScoreFactor,
};
pub use transparency::{PreferenceTransparency, TopicDerivation};
