//! Simulated "explore on the map" search over a fixed set of nearby places.
//!
//! There is no geocoding backend; results come from a hardcoded list and
//! can be turned into destination records for the plan store.
use serde::{Deserialize, Serialize};

use crate::constants::{PLACE_EMOTIONAL_MATCH, PLACE_MATCH_PERCENTAGE};
use crate::destination::{Destination, PriceRange, Region, SafetyLevel};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceResult {
    pub name: String,
    pub area: String,
    pub category: String,
    pub rating: f32,
    #[serde(default)]
    pub region: Option<Region>,
}

impl PlaceResult {
    fn mock(name: &str, area: &str, category: &str, rating: f32, region: Option<Region>) -> Self {
        Self {
            name: name.to_string(),
            area: area.to_string(),
            category: category.to_string(),
            rating,
            region,
        }
    }

    /// A destination-shaped record with medium safety, `$$` pricing and,
    /// unless the place knows better, Karnataka as its region.
    #[must_use]
    pub fn to_destination(&self) -> Destination {
        let mut destination = Destination::new(
            self.name.clone(),
            self.region.unwrap_or(Region::Karnataka),
            PLACE_MATCH_PERCENTAGE,
            PLACE_EMOTIONAL_MATCH,
        );
        destination.safety_level = SafetyLevel::Medium;
        destination.price_range = PriceRange::Moderate;
        destination.description = format!("{} in {}", self.category, self.area);
        destination
    }

    fn matches(&self, needle: &str) -> bool {
        [&self.name, &self.area, &self.category]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

fn mock_places() -> Vec<PlaceResult> {
    vec![
        PlaceResult::mock("Cubbon Park", "Bangalore", "Park", 4.6, Some(Region::NearBangalore)),
        PlaceResult::mock("Lalbagh Botanical Garden", "Bangalore", "Garden", 4.5, Some(Region::NearBangalore)),
        PlaceResult::mock("Skandagiri", "Chikkaballapur", "Trek", 4.4, Some(Region::NearBangalore)),
        PlaceResult::mock("Mysore Palace", "Mysuru", "Heritage", 4.7, Some(Region::Karnataka)),
        PlaceResult::mock("Jog Falls", "Shivamogga", "Waterfall", 4.5, Some(Region::Karnataka)),
        PlaceResult::mock("Fort Kochi", "Kochi", "Heritage", 4.4, Some(Region::Kerala)),
        PlaceResult::mock("Athirappilly Falls", "Thrissur", "Waterfall", 4.6, Some(Region::Kerala)),
        PlaceResult::mock("Marina Beach", "Chennai", "Beach", 4.3, Some(Region::TamilNadu)),
        PlaceResult::mock("Mahabalipuram Shore Temple", "Chengalpattu", "Heritage", 4.5, Some(Region::TamilNadu)),
        PlaceResult::mock("Riverside Cafe", "Unknown", "Cafe", 4.1, None),
    ]
}

/// Places whose name, area or category contain `query` (case-insensitive).
/// A blank query returns every place.
#[must_use]
pub fn search_places(query: &str) -> Vec<PlaceResult> {
    let needle = query.trim().to_lowercase();
    let places = mock_places();
    if needle.is_empty() {
        return places;
    }
    places.into_iter().filter(|p| p.matches(&needle)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_query_lists_everything() {
        assert_eq!(search_places("  ").len(), mock_places().len());
    }

    #[test]
    fn query_matches_name_area_and_category() {
        assert!(search_places("cubbon").iter().any(|p| p.name == "Cubbon Park"));
        assert_eq!(search_places("MYSURU").len(), 1);
        assert_eq!(search_places("waterfall").len(), 2);
        assert!(search_places("atlantis").is_empty());
    }

    #[test]
    fn destination_defaults_fill_missing_fields() {
        let cafe = search_places("riverside").remove(0);
        let dest = cafe.to_destination();
        assert_eq!(dest.region, Region::Karnataka);
        assert_eq!(dest.safety_level, SafetyLevel::Medium);
        assert_eq!(dest.price_range, PriceRange::Moderate);
        assert_eq!(dest.match_percentage, 80);

        let fort = search_places("fort kochi").remove(0).to_destination();
        assert_eq!(fort.region, Region::Kerala);
    }
}
