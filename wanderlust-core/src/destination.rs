//! Destination records and the closed label sets they use.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseLabelError;

/// Catalog region. Serialized as its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "Karnataka")]
    Karnataka,
    #[serde(rename = "Kerala")]
    Kerala,
    #[serde(rename = "Tamil Nadu")]
    TamilNadu,
    /// Weekend getaways around Bangalore, listed under Karnataka.
    #[serde(rename = "Near Bangalore")]
    NearBangalore,
}

impl Region {
    pub const ALL: [Self; 4] = [
        Self::Karnataka,
        Self::Kerala,
        Self::TamilNadu,
        Self::NearBangalore,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Karnataka => "Karnataka",
            Self::Kerala => "Kerala",
            Self::TamilNadu => "Tamil Nadu",
            Self::NearBangalore => "Near Bangalore",
        }
    }

    /// Route segment used by listing pages.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Karnataka => "karnataka",
            Self::Kerala => "kerala",
            Self::TamilNadu => "tamil-nadu",
            Self::NearBangalore => "near-bangalore",
        }
    }

    /// The primary region a sub-label is listed under.
    #[must_use]
    pub const fn primary(self) -> Self {
        match self {
            Self::NearBangalore | Self::Karnataka => Self::Karnataka,
            Self::Kerala => Self::Kerala,
            Self::TamilNadu => Self::TamilNadu,
        }
    }

    #[must_use]
    pub const fn is_primary(self) -> bool {
        matches!(self, Self::Karnataka | Self::Kerala | Self::TamilNadu)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Region {
    type Err = ParseLabelError;

    /// Accepts either the display label or the slug, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|r| r.label().eq_ignore_ascii_case(wanted) || r.slug().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseLabelError::new("region", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SafetyLevel {
    High,
    Medium,
    Low,
}

impl SafetyLevel {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PriceRange {
    #[serde(rename = "$")]
    Budget,
    #[serde(rename = "$$")]
    Moderate,
    #[serde(rename = "$$$")]
    Premium,
}

impl PriceRange {
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Budget => "$",
            Self::Moderate => "$$",
            Self::Premium => "$$$",
        }
    }
}

/// Travelling party size, shared by profiles and destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupSize {
    Solo,
    Couple,
    Family,
    Friends,
}

impl GroupSize {
    pub const ALL: [Self; 4] = [Self::Solo, Self::Couple, Self::Family, Self::Friends];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Solo => "solo",
            Self::Couple => "couple",
            Self::Family => "family",
            Self::Friends => "friends",
        }
    }
}

impl FromStr for GroupSize {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|g| g.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseLabelError::new("group size", s))
    }
}

/// A catalog entry.
///
/// `(name, region)` is the identity used for deduplication and
/// "already added" checks; see [`Destination::same_place`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub name: String,
    pub region: Region,
    pub match_percentage: u8,
    pub emotional_match: String,
    pub safety_level: SafetyLevel,
    pub price_range: PriceRange,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ideal_group_size: Option<GroupSize>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_time: Option<String>,
    #[serde(default)]
    pub tips: Vec<String>,
    #[serde(default)]
    pub activities: Vec<String>,
}

impl Destination {
    /// Minimal record carrying only the scoring fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        region: Region,
        match_percentage: u8,
        emotional_match: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            region,
            match_percentage,
            emotional_match: emotional_match.into(),
            safety_level: SafetyLevel::Medium,
            price_range: PriceRange::Moderate,
            ideal_group_size: None,
            description: String::new(),
            image: String::new(),
            highlights: Vec::new(),
            best_time: None,
            tips: Vec::new(),
            activities: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_group_size(mut self, group: GroupSize) -> Self {
        self.ideal_group_size = Some(group);
        self
    }

    #[must_use]
    pub fn is(&self, name: &str, region: Region) -> bool {
        self.region == region && self.name == name
    }

    #[must_use]
    pub fn same_place(&self, other: &Self) -> bool {
        self.is(&other.name, other.region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_parses_labels_and_slugs() {
        assert_eq!("Tamil Nadu".parse::<Region>().unwrap(), Region::TamilNadu);
        assert_eq!("tamil-nadu".parse::<Region>().unwrap(), Region::TamilNadu);
        assert_eq!(
            "near bangalore".parse::<Region>().unwrap(),
            Region::NearBangalore
        );
        let err = "Bangalore".parse::<Region>().unwrap_err();
        assert_eq!(err.kind, "region");
    }

    #[test]
    fn sub_labels_roll_up_to_primary_region() {
        assert_eq!(Region::NearBangalore.primary(), Region::Karnataka);
        assert!(!Region::NearBangalore.is_primary());
        assert!(Region::ALL.iter().filter(|r| r.is_primary()).count() == 3);
    }

    #[test]
    fn destination_json_uses_display_labels() {
        let json = r#"{
            "name": "Ooty",
            "region": "Tamil Nadu",
            "matchPercentage": 92,
            "emotionalMatch": "Peaceful & Refreshing",
            "safetyLevel": "high",
            "priceRange": "$$",
            "idealGroupSize": "couple",
            "highlights": ["Botanical Garden"]
        }"#;
        let dest: Destination = serde_json::from_str(json).unwrap();
        assert_eq!(dest.region, Region::TamilNadu);
        assert_eq!(dest.price_range, PriceRange::Moderate);
        assert_eq!(dest.ideal_group_size, Some(GroupSize::Couple));
        assert!(dest.tips.is_empty());

        let value = serde_json::to_value(&dest).unwrap();
        assert_eq!(value["priceRange"], "$$");
        assert_eq!(value["safetyLevel"], "high");
        assert!(value.get("bestTime").is_none());
    }

    #[test]
    fn identity_is_name_and_region() {
        let a = Destination::new("Coorg", Region::Karnataka, 90, "Calm");
        let b = Destination::new("Coorg", Region::NearBangalore, 90, "Calm");
        let c = Destination::new("Coorg", Region::Karnataka, 50, "Other");
        assert!(!a.same_place(&b));
        assert!(a.same_place(&c));
    }
}
