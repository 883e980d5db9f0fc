//! Trip plans: destinations the traveller has committed to, with a lifecycle.
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::destination::{Destination, Region};
use crate::error::ParseLabelError;

/// Lifecycle stage of a plan. New plans always start as `Selected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlanStatus {
    #[default]
    Selected,
    Ongoing,
    Completed,
}

impl PlanStatus {
    pub const ALL: [Self; 3] = [Self::Selected, Self::Ongoing, Self::Completed];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Selected => "selected",
            Self::Ongoing => "ongoing",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PlanStatus {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|st| st.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseLabelError::new("plan status", s))
    }
}

/// A destination wrapped with identity and lifecycle state.
///
/// Serialized flat: every destination field sits next to `id`, `status`
/// and `dateAdded`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    #[serde(flatten)]
    pub destination: Destination,
    pub id: String,
    pub status: PlanStatus,
    pub date_added: String,
}

impl Plan {
    pub(crate) fn create(destination: Destination, id: String, now: DateTime<Utc>) -> Self {
        Self {
            destination,
            id,
            status: PlanStatus::Selected,
            date_added: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.destination.name
    }

    #[must_use]
    pub const fn region(&self) -> Region {
        self.destination.region
    }

    #[must_use]
    pub fn is(&self, name: &str, region: Region) -> bool {
        self.destination.is(name, region)
    }
}

/// Source of creation timestamps.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant (useful for tests).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Out-of-range values fall back to the Unix epoch.
    #[must_use]
    pub fn at_millis(millis: i64) -> Self {
        Self(DateTime::from_timestamp_millis(millis).unwrap_or_default())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Lowercase ASCII slug: alphanumerics kept, everything else collapsed to `-`.
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        slug.push_str("plan");
    }
    slug
}

/// `<slug>-<unix millis>`, suffixed `-2`, `-3`, … while `taken` reports a clash.
pub(crate) fn generate_id(name: &str, now: DateTime<Utc>, taken: impl Fn(&str) -> bool) -> String {
    let base = format!("{}-{}", slugify(name), now.timestamp_millis());
    if !taken(&base) {
        return base;
    }
    let mut n = 2_u32;
    loop {
        let candidate = format!("{base}-{n}");
        if !taken(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_collapses_punctuation() {
        assert_eq!(slugify("Nandi Hills"), "nandi-hills");
        assert_eq!(slugify("  Coorg (Kodagu)! "), "coorg-kodagu");
        assert_eq!(slugify("???"), "plan");
    }

    #[test]
    fn ids_combine_name_and_timestamp() {
        let now = FixedClock::at_millis(1_700_000_000_123).now();
        assert_eq!(generate_id("Ooty", now, |_| false), "ooty-1700000000123");
        let id = generate_id("Ooty", now, |c| c == "ooty-1700000000123");
        assert_eq!(id, "ooty-1700000000123-2");
    }

    #[test]
    fn status_parses_only_known_values() {
        assert_eq!("Ongoing".parse::<PlanStatus>().unwrap(), PlanStatus::Ongoing);
        assert!("cancelled".parse::<PlanStatus>().is_err());
        assert_eq!(PlanStatus::default(), PlanStatus::Selected);
    }

    #[test]
    fn plan_serializes_flat_with_iso_date() {
        let dest = Destination::new("Ooty", Region::TamilNadu, 92, "Peaceful & Nostalgic");
        let plan = Plan::create(
            dest,
            "ooty-1".to_string(),
            FixedClock::at_millis(1_700_000_000_000).now(),
        );
        let value = serde_json::to_value(&plan).unwrap();
        assert_eq!(value["name"], "Ooty");
        assert_eq!(value["region"], "Tamil Nadu");
        assert_eq!(value["status"], "selected");
        assert_eq!(value["dateAdded"], "2023-11-14T22:13:20.000Z");
        assert!(value.get("destination").is_none());

        let back: Plan = serde_json::from_value(value).unwrap();
        assert_eq!(back, plan);
    }
}
