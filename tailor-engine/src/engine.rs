//! TailorEngine — the exposed call contracts.
//!
//! Concurrency model: per-user profile mutation is single-writer (one
//! async mutex per user, append-then-fold under the lock); reads go
//! straight to the store's consistent snapshot and may trail an
//! in-flight fold by one event. Recommendation and discovery are
//! read-only and run in parallel across users. Profile store failures
//! are fatal for the request; content-side failures degrade and flag.

use std::sync::Arc;

use chrono::Utc;
use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::{debug, info};

use tailor_core::config::TailorConfig;
use tailor_core::errors::{RecommendError, TailorResult};
use tailor_core::feedback::event::{DiscoveryResponse, FeedbackEvent, FeedbackSignal};
use tailor_core::models::request::RecommendationRequest;
use tailor_core::models::result::RecommendationResponse;
use tailor_core::models::transparency::PreferenceTransparency;
use tailor_core::profile::reading::Language;
use tailor_core::profile::snapshot::SnapshotTrigger;
use tailor_core::traits::{ContentQuery, IContentStore, IProfileStore};
use tailor_core::constants::MAX_CANDIDATE_POOL;

use tailor_content::{AnalyzerRegistry, CachedContentStore, EmbeddingCache};
use tailor_core::content::analysis::ContentAnalysis;
use tailor_core::traits::IContentAnalyzer;
use tailor_discovery::{DiscoveryEngine, DiscoveryOutcome};
use tailor_evolution::EvolutionTracker;
use tailor_profile::{overrides, transparency, FeedbackProcessor};
use tailor_recommend::ContextualRecommender;

use crate::session::SessionTable;

/// The personalization engine facade.
pub struct TailorEngine {
    config: TailorConfig,
    profiles: Arc<dyn IProfileStore>,
    content: CachedContentStore,
    processor: FeedbackProcessor,
    recommender: ContextualRecommender,
    discovery: DiscoveryEngine,
    evolution: EvolutionTracker,
    analyzers: AnalyzerRegistry,
    embeddings: EmbeddingCache,
    sessions: SessionTable,
    /// One writer lock per user; taken for every profile mutation.
    writer_locks: DashMap<String, Arc<Mutex<()>>>,
}

impl TailorEngine {
    pub fn new(
        config: TailorConfig,
        profiles: Arc<dyn IProfileStore>,
        content_store: Arc<dyn IContentStore>,
    ) -> Self {
        let content = CachedContentStore::new(content_store, &config.content);
        let processor = FeedbackProcessor::new(config.feedback.clone());
        let recommender =
            ContextualRecommender::new(config.scoring.clone(), config.recommend.clone());
        let discovery = DiscoveryEngine::new(config.discovery.clone(), config.scoring.clone());
        let evolution = EvolutionTracker::new(config.evolution.clone());
        let embeddings = EmbeddingCache::new(
            config.content.embedding_cache_capacity,
            config.content.embedding_cache_ttl_secs,
        );
        Self {
            config,
            profiles,
            content,
            processor,
            recommender,
            discovery,
            evolution,
            analyzers: AnalyzerRegistry::new(Default::default()),
            embeddings,
            sessions: SessionTable::new(),
            writer_locks: DashMap::new(),
        }
    }

    /// Register a language-specific analyzer. Call during setup, before
    /// the engine is shared.
    pub fn register_analyzer(&mut self, analyzer: Arc<dyn IContentAnalyzer>) {
        self.analyzers.register(analyzer);
    }

    /// Analyze raw content text for ingest.
    ///
    /// Dispatches on language; unknown languages and analyzer outages
    /// degrade to the keyword fallback (marked low-confidence).
    /// Embeddings are cached by content hash: identical text never
    /// re-embeds, and a degraded analysis reuses the last known
    /// embedding for the same text when one exists.
    pub fn analyze_content(
        &self,
        text: &str,
        language: &Language,
    ) -> TailorResult<ContentAnalysis> {
        let key = EmbeddingCache::key(text);
        let mut analysis = self.analyzers.analyze(text, language)?;
        if analysis.embedding.is_empty() {
            if let Some(cached) = self.embeddings.get(&key) {
                analysis.embedding = cached;
            }
        } else {
            self.embeddings.insert(key, analysis.embedding.clone());
        }
        Ok(analysis)
    }

    /// Ranked, contextual recommendations.
    ///
    /// A newer request in the same session supersedes this one: the
    /// superseded computation returns `RecommendError::Superseded`
    /// rather than leaking its result.
    pub async fn contextual_recommendations(
        &self,
        request: &RecommendationRequest,
    ) -> TailorResult<RecommendationResponse> {
        let generation = request
            .session_id
            .as_deref()
            .map(|sid| (sid, self.sessions.begin(sid)));

        let now = Utc::now();
        let profile = self.profiles.read_or_create(&request.user_id, now)?;
        let history = self
            .profiles
            .recent_events(&request.user_id, self.config.recommend.context_history_window)?;

        let query = ContentQuery {
            language: Some(request.language.clone()),
            max_reading_time_min: None,
            exclude_ids: Vec::new(),
            limit: MAX_CANDIDATE_POOL,
        };
        let candidates = self.content.query(&query).await?;

        // The await above is the suspension point a newer request can
        // overtake us at.
        if let Some((sid, generation)) = generation {
            if !self.sessions.is_current(sid, generation) {
                debug!(session_id = sid, "request superseded mid-flight");
                return Err(RecommendError::Superseded {
                    session_id: sid.to_string(),
                }
                .into());
            }
        }

        let outcome = self
            .recommender
            .rank(&profile, request, &candidates.items, &history);

        info!(
            user_id = %request.user_id,
            results = outcome.results.len(),
            relaxed = ?outcome.relaxed,
            incomplete = candidates.incomplete,
            "contextual recommendations served"
        );

        Ok(RecommendationResponse {
            results: outcome.results,
            uncontextualized: outcome.uncontextualized,
            exploratory: outcome.exploratory,
            incomplete: candidates.incomplete,
            relaxed: outcome.relaxed,
        })
    }

    /// Divergence-banded discovery recommendations.
    pub async fn discovery_recommendations(
        &self,
        user_id: &str,
        limit: usize,
        language: Language,
    ) -> TailorResult<DiscoveryOutcome> {
        let now = Utc::now();
        let profile = self.profiles.read_or_create(user_id, now)?;

        let query = ContentQuery {
            language: Some(language),
            max_reading_time_min: None,
            exclude_ids: Vec::new(),
            limit: MAX_CANDIDATE_POOL,
        };
        let candidates = self.content.query(&query).await?;

        Ok(self.discovery.discover(&profile, &candidates.items, limit))
    }

    /// Submit one feedback event. Idempotent by event id: the first
    /// submission folds, every repeat is a no-op returning `false`.
    ///
    /// Append-then-fold: the event is durably appended before the fold
    /// mutates the aggregate, and both happen under the user's writer
    /// lock.
    pub async fn submit_feedback(&self, event: FeedbackEvent) -> TailorResult<bool> {
        let lock = self.writer_lock(&event.user_id);
        let _guard = lock.lock().await;

        if !self.profiles.append_event(&event)? {
            return Ok(false);
        }

        let content = self.content.get(&event.content_id).await;
        let now = Utc::now();
        self.profiles.read_or_create(&event.user_id, now)?;
        self.profiles.atomic_update(&event.user_id, &mut |profile| {
            self.processor.apply(profile, &event, content.as_ref(), now);
            // The tracker logs shifts itself; the report is advisory here.
            let _ = self.evolution.tick(profile, now);
        })?;
        Ok(true)
    }

    /// Record the user's response to a discovery recommendation. The
    /// response flows through the ordinary feedback pipeline, where it
    /// accumulates into the discovery-openness weight.
    pub async fn record_discovery_response(
        &self,
        user_id: &str,
        content_id: &str,
        response: DiscoveryResponse,
    ) -> TailorResult<bool> {
        let event = FeedbackEvent::new(
            user_id,
            content_id,
            FeedbackSignal::Discovery { response },
            Utc::now(),
        );
        self.submit_feedback(event).await
    }

    /// Current weights, confidences, and their derivation.
    pub fn preference_transparency(&self, user_id: &str) -> TailorResult<PreferenceTransparency> {
        let profile = self.profiles.read_or_create(user_id, Utc::now())?;
        Ok(transparency::report(&profile))
    }

    /// Pin a topic weight manually. The override wins over automatic
    /// updates until `reset_override`, and persists with the profile.
    pub async fn override_preference(
        &self,
        user_id: &str,
        topic: &str,
        value: f64,
    ) -> TailorResult<()> {
        let lock = self.writer_lock(user_id);
        let _guard = lock.lock().await;

        let now = Utc::now();
        self.profiles.read_or_create(user_id, now)?;
        self.profiles.atomic_update(user_id, &mut |profile| {
            overrides::apply(profile, topic, value, now);
            self.evolution
                .snapshot(profile, SnapshotTrigger::Manual, now);
        })?;
        Ok(())
    }

    /// Return an overridden topic to automatic learning.
    pub async fn reset_override(&self, user_id: &str, topic: &str) -> TailorResult<()> {
        let lock = self.writer_lock(user_id);
        let _guard = lock.lock().await;

        let now = Utc::now();
        self.profiles.read_or_create(user_id, now)?;
        let mut result = Ok(());
        self.profiles.atomic_update(user_id, &mut |profile| {
            if let Err(error) = overrides::reset(profile, topic, now) {
                result = Err(error);
            }
        })?;
        result
    }

    fn writer_lock(&self, user_id: &str) -> Arc<Mutex<()>> {
        self.writer_locks
            .entry(user_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}
