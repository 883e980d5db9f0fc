//! Wanderlust Engine
//!
//! Platform-agnostic core logic for the Wanderlust mood-based travel planner.
//! This crate scores the destination catalog against a traveller's profile
//! and tracks their trip plans, without UI or platform-specific dependencies.

pub mod catalog;
pub mod constants;
pub mod destination;
pub mod error;
pub mod map_search;
pub mod notice;
pub mod plan;
pub mod plan_store;
pub mod profile;
pub mod recommend;
pub mod scoring;
pub mod storage;

// Re-export commonly used types
pub use catalog::Catalog;
pub use destination::{Destination, GroupSize, PriceRange, Region, SafetyLevel};
pub use error::{CatalogError, ConfigError, ParseLabelError};
pub use map_search::{PlaceResult, search_places};
pub use notice::Notice;
pub use plan::{Clock, FixedClock, Plan, PlanStatus, SystemClock, slugify};
pub use plan_store::{AddOutcome, PlanStore, StatusCounts};
pub use profile::{DesiredChange, Emotion, UserProfile};
pub use recommend::{RecommendRng, candidate_pool, recommend, recommend_rng, recommend_with, sample};
pub use scoring::{
    ScoredDestination, ScoringConfig, adjusted_score, adjusted_score_with, score_and_rank,
};
pub use storage::{MemoryStorage, MemoryStorageError, PlanStorage, decode_plans, encode_plans};

/// Trait for abstracting catalog loading.
/// Platform-specific implementations should provide this
pub trait CatalogLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the destination catalog from the platform-specific source
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded or fails validation.
    fn load_catalog(&self) -> Result<Catalog, Self::Error>;

    /// Load the scoring configuration. Defaults unless overridden.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured source cannot be parsed.
    fn load_scoring_config(&self) -> Result<ScoringConfig, Self::Error> {
        Ok(ScoringConfig::default_config())
    }
}

/// Loader serving the catalog compiled into this crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledCatalog;

impl CatalogLoader for BundledCatalog {
    type Error = std::convert::Infallible;

    fn load_catalog(&self) -> Result<Catalog, Self::Error> {
        Ok(Catalog::bundled().clone())
    }
}

/// Main engine tying a catalog source to plan persistence
pub struct TravelEngine<L, S>
where
    L: CatalogLoader,
    S: PlanStorage,
{
    loader: L,
    storage: S,
}

impl<L, S> TravelEngine<L, S>
where
    L: CatalogLoader,
    S: PlanStorage,
{
    /// Create a new engine with the provided catalog loader and storage
    pub const fn new(loader: L, storage: S) -> Self {
        Self { loader, storage }
    }

    /// Suggest destinations for `profile`, sampling with a RNG seeded from `seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog or scoring config cannot be loaded,
    /// or the loaded config fails [`ScoringConfig::validate`].
    pub fn recommend(&self, profile: &UserProfile, seed: u64) -> Result<Vec<Destination>, anyhow::Error>
    where
        L::Error: Into<anyhow::Error>,
    {
        let catalog = self.loader.load_catalog().map_err(Into::into)?;
        let cfg = self.loader.load_scoring_config().map_err(Into::into)?;
        cfg.validate()?;
        let mut rng = recommend_rng(seed);
        Ok(recommend_with(catalog.as_slice(), profile, &cfg, &mut rng))
    }

    /// Resolve a deep link against the loaded catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded or the destination
    /// is unknown.
    pub fn destination(&self, name: &str, region: Region) -> Result<Destination, anyhow::Error>
    where
        L::Error: Into<anyhow::Error>,
    {
        let catalog = self.loader.load_catalog().map_err(Into::into)?;
        Ok(catalog.find(name, region)?.clone())
    }

    /// Open the plan store over this engine's storage.
    pub fn open_plans(&self) -> PlanStore<S>
    where
        S: Clone,
    {
        PlanStore::open(self.storage.clone())
    }
}
