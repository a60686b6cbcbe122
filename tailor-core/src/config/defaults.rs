//! Named defaults for all tunable parameters.
//!
//! Decay constants, half-lives, and the divergence band have no single
//! canonical value; deployments tune them through `TailorConfig` rather
//! than these compile-time fallbacks.

// Feedback fold
pub const DEFAULT_LEARNING_RATE: f64 = 0.1;
pub const DEFAULT_EXPLICIT_SIGNAL_WEIGHT: f64 = 1.0;
pub const DEFAULT_IMPLICIT_SIGNAL_WEIGHT: f64 = 0.4;
pub const DEFAULT_DISCOVERY_SIGNAL_WEIGHT: f64 = 0.6;
pub const DEFAULT_RECENCY_HALF_LIFE_DAYS: f64 = 30.0;
pub const DEFAULT_CONFIDENCE_STEP: f64 = 0.1;
pub const DEFAULT_CONFLICT_DECAY: f64 = 0.85;
pub const DEFAULT_MIN_PERSONALIZATION_EVENTS: u64 = 5;
pub const DEFAULT_READING_LEVEL_STEP: f64 = 0.05;
pub const DEFAULT_SPEED_BASELINE_SMOOTHING: f64 = 0.2;

// Interest scoring
pub const DEFAULT_TOPIC_FACTOR_WEIGHT: f64 = 0.6;
pub const DEFAULT_TYPE_AFFINITY_WEIGHT: f64 = 0.15;
pub const DEFAULT_READING_FIT_WEIGHT: f64 = 0.25;
pub const DEFAULT_ABOVE_LEVEL_PENALTY: f64 = 0.35;
pub const DEFAULT_BELOW_LEVEL_PENALTY: f64 = 0.1;
pub const DEFAULT_MISMATCH_BANDS: f64 = 1.0;

// Contextual recommendation
pub const DEFAULT_TIME_TOLERANCE: f64 = 0.2;
pub const DEFAULT_BOOST_FLOOR: f64 = 0.8;
pub const DEFAULT_BOOST_CEILING: f64 = 1.2;
pub const DEFAULT_BOOST_SCALE: f64 = 0.2;
pub const DEFAULT_MIN_CONTEXT_SAMPLES: usize = 10;
pub const DEFAULT_CONTEXT_HISTORY_WINDOW: usize = 50;
pub const DEFAULT_DIVERSITY_DECAY: f64 = 0.7;
pub const DEFAULT_RELAXED_LEVEL_EXTRA_BANDS: f64 = 1.0;

// Discovery
pub const DEFAULT_EXPLORED_CONFIDENCE: f64 = 0.6;
pub const DEFAULT_ACCESSIBILITY_THRESHOLD: f64 = 0.5;
pub const DEFAULT_MIN_DIVERGENCE: f64 = 0.3;
pub const DEFAULT_MAX_DIVERGENCE: f64 = 0.8;
pub const DEFAULT_NOVELTY_WEIGHT: f64 = 0.25;
pub const DEFAULT_OPENNESS_BAND_SCALE: f64 = 0.15;
pub const DEFAULT_MAX_BRIDGING_TOPICS: usize = 3;

// Evolution tracking
pub const DEFAULT_SNAPSHOT_EVERY_EVENTS: u64 = 20;
pub const DEFAULT_SNAPSHOT_INTERVAL_HOURS: u64 = 24;
pub const DEFAULT_SHIFT_THRESHOLD: f64 = 0.5;
pub const DEFAULT_TREND_WINDOW: usize = 4;
pub const DEFAULT_TREND_SLOPE_EPSILON: f64 = 0.02;

// Content access
pub const DEFAULT_STORE_DEADLINE_MS: u64 = 500;
pub const DEFAULT_EMBEDDING_CACHE_CAPACITY: u64 = 10_000;
pub const DEFAULT_EMBEDDING_CACHE_TTL_SECS: u64 = 86_400;
pub const DEFAULT_CANDIDATE_CACHE_CAPACITY: u64 = 1_000;
pub const DEFAULT_CANDIDATE_CACHE_TTL_SECS: u64 = 600;
