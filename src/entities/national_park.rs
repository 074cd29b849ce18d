// 🏞️ National Park Entity - a named destination that hosts trips
//
// The name is fixed at construction. Everything else a park "knows" (trips,
// visitors, popularity) is derived from the trip registry on demand.

use crate::attributes::NATIONAL_PARK_NAME;
use crate::entities::{Trip, Visitor};
use crate::error::Result;
use crate::ledger::Ledger;
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

// ============================================================================
// NATIONAL PARK ENTITY
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct NationalPark {
    /// Stable identity (UUID) - NEVER changes
    id: String,

    /// At least 3 characters, immutable
    name: String,
}

impl NationalPark {
    /// Create new park with a fresh UUID
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        NATIONAL_PARK_NAME.check(&name)?;

        Ok(NationalPark {
            id: uuid::Uuid::new_v4().to_string(),
            name,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    // ========================================================================
    // DERIVED QUERIES
    // ========================================================================

    /// All trips to this park, in booking order
    pub fn trips<'a>(&self, ledger: &'a Ledger) -> Vec<&'a Trip> {
        ledger
            .trips()
            .all_trips()
            .iter()
            .filter(|trip| trip.national_park_id() == self.id)
            .collect()
    }

    /// Distinct visitors, in order of their first trip here
    pub fn visitors<'a>(&self, ledger: &'a Ledger) -> Vec<&'a Visitor> {
        let mut seen = HashSet::new();
        self.trips(ledger)
            .into_iter()
            .filter(|trip| seen.insert(trip.visitor_id()))
            .filter_map(|trip| ledger.visitors().find_by_id(trip.visitor_id()))
            .collect()
    }

    pub fn total_visits(&self, ledger: &Ledger) -> usize {
        self.trips(ledger).len()
    }

    /// Visitor with the most trips here. Ties go to whoever visited first.
    /// None when the park has no trips.
    pub fn best_visitor<'a>(&self, ledger: &'a Ledger) -> Option<&'a Visitor> {
        // min_by_key keeps the first of equal keys, max_by_key the last
        self.visitors(ledger)
            .into_iter()
            .min_by_key(|visitor| Reverse(visitor.total_visits_at_park(ledger, self)))
    }

    /// Park with the most trips across the ledger. Ties go to the park
    /// registered first. None only when no park exists.
    pub fn most_visited(ledger: &Ledger) -> Option<&NationalPark> {
        ledger
            .parks()
            .all_parks()
            .iter()
            .min_by_key(|park| Reverse(park.total_visits(ledger)))
    }
}

impl PartialEq for NationalPark {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for NationalPark {}

impl Hash for NationalPark {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

// ============================================================================
// NATIONAL PARK REGISTRY
// ============================================================================

/// Every park created in a ledger, in creation order.
#[derive(Debug, Default)]
pub struct NationalParkRegistry {
    parks: Vec<NationalPark>,
}

impl NationalParkRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn register(&mut self, park: NationalPark) {
        self.parks.push(park);
    }

    pub(crate) fn clear(&mut self) {
        self.parks.clear();
    }

    pub fn find_by_id(&self, id: &str) -> Option<&NationalPark> {
        self.parks.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find_by_id(id).is_some()
    }

    pub fn by_name(&self, name: &str) -> Vec<&NationalPark> {
        self.parks.iter().filter(|p| p.name == name).collect()
    }

    pub fn all_parks(&self) -> &[NationalPark] {
        &self.parks
    }

    pub fn count(&self) -> usize {
        self.parks.len()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_park_creation() {
        let park = NationalPark::new("Yosemite").unwrap();

        assert!(!park.id().is_empty());
        assert_eq!(park.name(), "Yosemite");
    }

    #[test]
    fn test_park_name_min_length() {
        assert!(NationalPark::new("Zio").is_ok());
        assert!(NationalPark::new("A very long national park name indeed").is_ok());

        assert!(NationalPark::new("").is_err());
        let err = NationalPark::new("Zi").unwrap_err();
        assert_eq!(err.field(), Some("national_park.name"));
    }

    #[test]
    fn test_trips_visitors_and_totals() {
        let mut ledger = Ledger::new();
        let ben = ledger.add_visitor("Ben").unwrap();
        let ann = ledger.add_visitor("Ann").unwrap();
        let yosemite = ledger.add_park("Yosemite").unwrap();
        let zion = ledger.add_park("Zion").unwrap();

        ledger.add_trip(&ann, &yosemite, "2023-01-01", "2023-01-05").unwrap();
        ledger.add_trip(&ben, &yosemite, "2023-02-01", "2023-02-03").unwrap();
        ledger.add_trip(&ann, &yosemite, "2023-03-01", "2023-03-03").unwrap();
        ledger.add_trip(&ben, &zion, "2023-04-01", "2023-04-03").unwrap();

        assert_eq!(yosemite.trips(&ledger).len(), 3);
        assert_eq!(yosemite.total_visits(&ledger), 3);
        assert_eq!(zion.total_visits(&ledger), 1);

        let visitors = yosemite.visitors(&ledger);
        assert_eq!(visitors, vec![&ann, &ben]);
    }

    #[test]
    fn test_best_visitor() {
        let mut ledger = Ledger::new();
        let ben = ledger.add_visitor("Ben").unwrap();
        let ann = ledger.add_visitor("Ann").unwrap();
        let zion = ledger.add_park("Zion").unwrap();

        ledger.add_trip(&ben, &zion, "2023-01-01", "2023-01-02").unwrap();
        ledger.add_trip(&ann, &zion, "2023-02-01", "2023-02-02").unwrap();
        ledger.add_trip(&ann, &zion, "2023-03-01", "2023-03-02").unwrap();

        assert_eq!(zion.best_visitor(&ledger), Some(&ann));
    }

    #[test]
    fn test_best_visitor_tie_goes_to_first_visitor() {
        let mut ledger = Ledger::new();
        let ben = ledger.add_visitor("Ben").unwrap();
        let ann = ledger.add_visitor("Ann").unwrap();
        let zion = ledger.add_park("Zion").unwrap();

        ledger.add_trip(&ann, &zion, "2023-01-01", "2023-01-02").unwrap();
        ledger.add_trip(&ben, &zion, "2023-02-01", "2023-02-02").unwrap();

        assert_eq!(zion.best_visitor(&ledger), Some(&ann));
    }

    #[test]
    fn test_best_visitor_without_trips() {
        let mut ledger = Ledger::new();
        let zion = ledger.add_park("Zion").unwrap();

        assert!(zion.best_visitor(&ledger).is_none());
    }

    #[test]
    fn test_most_visited() {
        let mut ledger = Ledger::new();
        assert!(NationalPark::most_visited(&ledger).is_none());

        let ben = ledger.add_visitor("Ben").unwrap();
        let yosemite = ledger.add_park("Yosemite").unwrap();
        let zion = ledger.add_park("Zion").unwrap();

        // All parks at zero: first registered wins
        assert_eq!(NationalPark::most_visited(&ledger), Some(&yosemite));

        ledger.add_trip(&ben, &zion, "2023-01-01", "2023-01-02").unwrap();
        assert_eq!(NationalPark::most_visited(&ledger), Some(&zion));

        // Tie: first registered wins
        ledger.add_trip(&ben, &yosemite, "2023-02-01", "2023-02-02").unwrap();
        assert_eq!(NationalPark::most_visited(&ledger), Some(&yosemite));
    }

    #[test]
    fn test_registry_lookups() {
        let mut ledger = Ledger::new();
        let zion = ledger.add_park("Zion").unwrap();
        ledger.add_park("Arches").unwrap();

        let registry = ledger.parks();
        assert_eq!(registry.count(), 2);
        assert!(registry.contains(zion.id()));
        assert_eq!(registry.find_by_id(zion.id()), Some(&zion));
        assert_eq!(registry.by_name("Arches").len(), 1);
        assert!(registry.by_name("Denali").is_empty());
    }
}
