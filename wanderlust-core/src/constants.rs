//! Centralized scoring and persistence constants for Wanderlust logic.
//!
//! These values back `ScoringConfig::default_config` and the storage
//! adapters. Keeping them together means recommendation behaviour only
//! changes through reviewed code edits.

// Persistence --------------------------------------------------------------
/// Storage key holding the serialized plan list.
pub const PLANS_STORAGE_KEY: &str = "wanderlust.plans";

// Scoring bonuses ----------------------------------------------------------
pub(crate) const DESIRED_CHANGE_BONUS: u8 = 10;
pub(crate) const GROUP_SIZE_BONUS: u8 = 5;
pub(crate) const EMOTION_BONUS: u8 = 8;
pub(crate) const MAX_SCORE: u8 = 100;

// Keywords matched against `emotionalMatch` (lowercase) --------------------
pub(crate) const KEYWORD_PEACE: &str = "peace";
pub(crate) const KEYWORD_TRANQUIL: &str = "tranquil";
pub(crate) const KEYWORD_ADVENTUROUS: &str = "adventurous";
pub(crate) const KEYWORD_JOYFUL: &str = "joyful";

// Sampling -----------------------------------------------------------------
pub(crate) const CANDIDATE_POOL_SIZE: usize = 6;
pub(crate) const MIN_SAMPLE_SIZE: usize = 2;
pub(crate) const MAX_SAMPLE_SIZE: usize = 3;

// Map search defaults ------------------------------------------------------
pub(crate) const PLACE_MATCH_PERCENTAGE: u8 = 80;
pub(crate) const PLACE_EMOTIONAL_MATCH: &str = "Discovered nearby";

/// Artificial latency before recommendations are revealed, in milliseconds.
pub const RECOMMEND_DELAY_MS: u32 = 1_500;
