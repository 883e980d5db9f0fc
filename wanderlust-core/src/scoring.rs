//! Deterministic affinity scoring and ranking.
use serde::{Deserialize, Serialize};

use crate::constants::{
    CANDIDATE_POOL_SIZE, DESIRED_CHANGE_BONUS, EMOTION_BONUS, GROUP_SIZE_BONUS,
    KEYWORD_ADVENTUROUS, KEYWORD_JOYFUL, KEYWORD_PEACE, KEYWORD_TRANQUIL, MAX_SAMPLE_SIZE,
    MAX_SCORE, MIN_SAMPLE_SIZE,
};
use crate::destination::Destination;
use crate::error::ConfigError;
use crate::profile::{DesiredChange, Emotion, UserProfile};

/// Tunables for scoring and sampling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub desired_change_bonus: u8,
    pub group_size_bonus: u8,
    /// Added once per matching emotion.
    pub emotion_bonus: u8,
    pub max_score: u8,
    pub pool_size: usize,
    pub min_sample: usize,
    pub max_sample: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

impl ScoringConfig {
    #[must_use]
    pub const fn default_config() -> Self {
        Self {
            desired_change_bonus: DESIRED_CHANGE_BONUS,
            group_size_bonus: GROUP_SIZE_BONUS,
            emotion_bonus: EMOTION_BONUS,
            max_score: MAX_SCORE,
            pool_size: CANDIDATE_POOL_SIZE,
            min_sample: MIN_SAMPLE_SIZE,
            max_sample: MAX_SAMPLE_SIZE,
        }
    }

    /// Load a config, filling omitted fields from the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed or the pool/sample
    /// settings are unusable.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// # Errors
    ///
    /// Returns an error for a zero pool, an empty sample range or a score
    /// cap above 100.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_score > MAX_SCORE {
            return Err(ConfigError::MaxScoreOutOfRange {
                value: self.max_score,
            });
        }
        if self.pool_size == 0 {
            return Err(ConfigError::EmptyPool);
        }
        if self.min_sample == 0 || self.min_sample > self.max_sample {
            return Err(ConfigError::EmptySampleRange {
                min: self.min_sample,
                max: self.max_sample,
            });
        }
        Ok(())
    }
}

/// A catalog entry paired with its profile-adjusted score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredDestination<'a> {
    pub destination: &'a Destination,
    pub score: u8,
}

fn desired_change_matches(change: DesiredChange, text: &str) -> bool {
    match change {
        DesiredChange::Peace => text.contains(KEYWORD_PEACE) || text.contains(KEYWORD_TRANQUIL),
        DesiredChange::Adventure => text.contains(KEYWORD_ADVENTUROUS),
        DesiredChange::Joy => text.contains(KEYWORD_JOYFUL),
        DesiredChange::Excitement => false,
    }
}

fn emotion_matches(emotion: Emotion, text: &str) -> bool {
    match emotion {
        Emotion::Stressed | Emotion::Peaceful => text.contains(KEYWORD_PEACE),
        Emotion::Excited => text.contains(KEYWORD_ADVENTUROUS),
        _ => false,
    }
}

/// Score one destination against a profile using the default config.
#[must_use]
pub fn adjusted_score(destination: &Destination, profile: &UserProfile) -> u8 {
    adjusted_score_with(destination, profile, &ScoringConfig::default_config())
}

/// Base `matchPercentage` plus keyword, group and emotion bonuses, capped
/// at `max_score` (and at 100) but never below the base. Keyword checks are plain case-insensitive substring
/// matches on `emotionalMatch`.
#[must_use]
pub fn adjusted_score_with(
    destination: &Destination,
    profile: &UserProfile,
    cfg: &ScoringConfig,
) -> u8 {
    let text = destination.emotional_match.to_lowercase();
    let mut score = u32::from(destination.match_percentage);

    if profile
        .desired_change
        .is_some_and(|change| desired_change_matches(change, &text))
    {
        score += u32::from(cfg.desired_change_bonus);
    }

    if profile.group_size.is_some() && destination.ideal_group_size == profile.group_size {
        score += u32::from(cfg.group_size_bonus);
    }

    let emotion_hits = profile
        .emotions
        .iter()
        .filter(|emotion| emotion_matches(**emotion, &text))
        .count();
    let emotion_hits = u32::try_from(emotion_hits).unwrap_or(u32::MAX);
    score = score.saturating_add(emotion_hits.saturating_mul(u32::from(cfg.emotion_bonus)));

    let base = destination.match_percentage;
    let cap = u32::from(cfg.max_score.min(MAX_SCORE));
    u8::try_from(score.min(cap)).map_or(base, |capped| capped.max(base))
}

/// Score every destination and order by descending score. Ties keep
/// catalog order.
#[must_use]
pub fn score_and_rank<'a>(
    catalog: &'a [Destination],
    profile: &UserProfile,
    cfg: &ScoringConfig,
) -> Vec<ScoredDestination<'a>> {
    let mut ranked: Vec<ScoredDestination<'a>> = catalog
        .iter()
        .map(|destination| ScoredDestination {
            destination,
            score: adjusted_score_with(destination, profile, cfg),
        })
        .collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}
