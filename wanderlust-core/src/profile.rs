//! The per-pass user profile built from the emotion and preference steps.
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

use crate::destination::GroupSize;
use crate::error::ParseLabelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Stressed,
    Peaceful,
    Excited,
    Anxious,
    Tired,
    Curious,
    Happy,
    Lonely,
}

impl Emotion {
    pub const ALL: [Self; 8] = [
        Self::Stressed,
        Self::Peaceful,
        Self::Excited,
        Self::Anxious,
        Self::Tired,
        Self::Curious,
        Self::Happy,
        Self::Lonely,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Stressed => "stressed",
            Self::Peaceful => "peaceful",
            Self::Excited => "excited",
            Self::Anxious => "anxious",
            Self::Tired => "tired",
            Self::Curious => "curious",
            Self::Happy => "happy",
            Self::Lonely => "lonely",
        }
    }
}

impl FromStr for Emotion {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|e| e.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseLabelError::new("emotion", s))
    }
}

/// What the traveller wants the trip to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DesiredChange {
    Peace,
    Adventure,
    Joy,
    Excitement,
}

impl DesiredChange {
    pub const ALL: [Self; 4] = [Self::Peace, Self::Adventure, Self::Joy, Self::Excitement];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Peace => "peace",
            Self::Adventure => "adventure",
            Self::Joy => "joy",
            Self::Excitement => "excitement",
        }
    }
}

impl FromStr for DesiredChange {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseLabelError::new("desired change", s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub emotions: BTreeSet<Emotion>,
    #[serde(default)]
    pub desired_change: Option<DesiredChange>,
    #[serde(default)]
    pub group_size: Option<GroupSize>,
}

impl UserProfile {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_emotions(mut self, emotions: impl IntoIterator<Item = Emotion>) -> Self {
        self.emotions.extend(emotions);
        self
    }

    #[must_use]
    pub fn with_desired_change(mut self, change: DesiredChange) -> Self {
        self.desired_change = Some(change);
        self
    }

    #[must_use]
    pub fn with_group_size(mut self, group: GroupSize) -> Self {
        self.group_size = Some(group);
        self
    }

    /// Toggle an emotion chip; returns whether it is now selected.
    pub fn toggle_emotion(&mut self, emotion: Emotion) -> bool {
        if self.emotions.remove(&emotion) {
            false
        } else {
            self.emotions.insert(emotion);
            true
        }
    }

    /// At least one emotion must be picked before leaving the first step.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        !self.emotions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emotions_form_a_set() {
        let profile = UserProfile::new().with_emotions([
            Emotion::Stressed,
            Emotion::Stressed,
            Emotion::Tired,
        ]);
        assert_eq!(profile.emotions.len(), 2);
        assert!(profile.is_ready());
        assert!(!UserProfile::new().is_ready());
    }

    #[test]
    fn toggle_emotion_flips_selection() {
        let mut profile = UserProfile::new();
        assert!(profile.toggle_emotion(Emotion::Curious));
        assert!(!profile.toggle_emotion(Emotion::Curious));
        assert!(profile.emotions.is_empty());
    }

    #[test]
    fn labels_parse_case_insensitively() {
        assert_eq!(" Excited ".parse::<Emotion>().unwrap(), Emotion::Excited);
        assert_eq!("JOY".parse::<DesiredChange>().unwrap(), DesiredChange::Joy);
        assert!("grumpy".parse::<Emotion>().is_err());
    }

    #[test]
    fn profile_deserializes_with_missing_fields() {
        let profile: UserProfile = serde_json::from_str(r#"{"emotions":["stressed"]}"#).unwrap();
        assert!(profile.desired_change.is_none());
        assert!(profile.group_size.is_none());
    }
}
