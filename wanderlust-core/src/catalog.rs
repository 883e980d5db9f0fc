//! Bundled destination catalog and lookups.
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::constants::MAX_SCORE;
use crate::destination::{Destination, Region};
use crate::error::CatalogError;

const BUNDLED_CATALOG_DATA: &str =
    include_str!("../../wanderlust-web/static/assets/data/destinations.json");

static BUNDLED: Lazy<Catalog> = Lazy::new(|| {
    Catalog::from_json(BUNDLED_CATALOG_DATA).unwrap_or_else(|err| {
        log::error!("bundled catalog rejected: {err}");
        Catalog::empty()
    })
});

/// Read-only list of destinations in encounter order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Catalog(Vec<Destination>);

impl Catalog {
    #[must_use]
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// The dataset shipped with the application, parsed on first use.
    #[must_use]
    pub fn bundled() -> &'static Self {
        &BUNDLED
    }

    /// Parse a catalog from a JSON array of destinations.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the records fail
    /// validation (see [`Catalog::from_destinations`]).
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let destinations: Vec<Destination> = serde_json::from_str(json)?;
        Self::from_destinations(destinations)
    }

    /// Build a catalog, rejecting repeated `(name, region)` pairs and match
    /// percentages above 100.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure encountered.
    pub fn from_destinations(destinations: Vec<Destination>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(destinations.len());
        for dest in &destinations {
            if dest.match_percentage > MAX_SCORE {
                return Err(CatalogError::MatchOutOfRange {
                    name: dest.name.clone(),
                    value: dest.match_percentage,
                });
            }
            if !seen.insert((dest.name.as_str(), dest.region)) {
                return Err(CatalogError::DuplicateDestination {
                    name: dest.name.clone(),
                    region: dest.region,
                });
            }
        }
        Ok(Self(destinations))
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Destination] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Destination> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Destinations carrying exactly this region label.
    pub fn by_region(&self, region: Region) -> impl Iterator<Item = &Destination> + '_ {
        self.0.iter().filter(move |d| d.region == region)
    }

    /// Destinations listed on a primary region's page, sub-labels included.
    pub fn by_primary_region(&self, region: Region) -> impl Iterator<Item = &Destination> + '_ {
        let primary = region.primary();
        self.0.iter().filter(move |d| d.region.primary() == primary)
    }

    /// Resolve a deep link to a destination.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when no destination matches.
    pub fn find(&self, name: &str, region: Region) -> Result<&Destination, CatalogError> {
        self.0
            .iter()
            .find(|d| d.is(name, region))
            .ok_or_else(|| CatalogError::NotFound {
                name: name.to_string(),
                region,
            })
    }

    /// Case-insensitive lookup by name alone, for callers without a region.
    pub fn find_by_name<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Destination> + 'a {
        self.0
            .iter()
            .filter(move |d| d.name.eq_ignore_ascii_case(name.trim()))
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Destination;
    type IntoIter = std::slice::Iter<'a, Destination>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
