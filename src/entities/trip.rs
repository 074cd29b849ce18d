// 🎒 Trip Entity - join record between a Visitor and a National Park
//
// Relationships: visitor_id → Visitor, national_park_id → NationalPark
// (foreign keys, never owning). Dates are free-form strings of at least
// 7 characters and can be changed after booking.

use crate::attributes::{TRIP_END_DATE, TRIP_START_DATE};
use crate::entities::{NationalPark, Visitor};
use crate::error::{ModelError, Result};
use crate::ledger::Ledger;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::hash::{Hash, Hasher};

// ============================================================================
// TRIP ENTITY
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct Trip {
    id: String,

    /// Visitor ID (foreign key to Visitor entity)
    visitor_id: String,

    /// National park ID (foreign key to NationalPark entity)
    national_park_id: String,

    start_date: String,
    end_date: String,

    booked_at: DateTime<Utc>,
}

impl Trip {
    /// Build a trip; both dates go through the same checks as the setters
    pub fn new(
        visitor: &Visitor,
        national_park: &NationalPark,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Result<Self> {
        let mut trip = Trip {
            id: uuid::Uuid::new_v4().to_string(),
            visitor_id: visitor.id().to_string(),
            national_park_id: national_park.id().to_string(),
            start_date: String::new(),
            end_date: String::new(),
            booked_at: Utc::now(),
        };

        trip.set_start_date(start_date)?;
        trip.set_end_date(end_date)?;

        Ok(trip)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn visitor_id(&self) -> &str {
        &self.visitor_id
    }

    pub fn national_park_id(&self) -> &str {
        &self.national_park_id
    }

    pub fn start_date(&self) -> &str {
        &self.start_date
    }

    pub fn end_date(&self) -> &str {
        &self.end_date
    }

    pub fn booked_at(&self) -> DateTime<Utc> {
        self.booked_at
    }

    pub(crate) fn set_start_date(&mut self, start_date: impl Into<String>) -> Result<()> {
        let start_date = start_date.into();
        TRIP_START_DATE.check(&start_date)?;
        self.start_date = start_date;
        Ok(())
    }

    pub(crate) fn set_end_date(&mut self, end_date: impl Into<String>) -> Result<()> {
        let end_date = end_date.into();
        TRIP_END_DATE.check(&end_date)?;
        self.end_date = end_date;
        Ok(())
    }

    /// Resolve the visitor foreign key
    pub fn visitor<'a>(&self, ledger: &'a Ledger) -> Option<&'a Visitor> {
        ledger.visitors().find_by_id(&self.visitor_id)
    }

    /// Resolve the national park foreign key
    pub fn national_park<'a>(&self, ledger: &'a Ledger) -> Option<&'a NationalPark> {
        ledger.parks().find_by_id(&self.national_park_id)
    }
}

impl PartialEq for Trip {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Trip {}

impl Hash for Trip {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

// ============================================================================
// TRIP REGISTRY
// ============================================================================

/// All booked trips in booking order. This is the only place relationships
/// live; visitor and park queries scan it.
#[derive(Debug, Default)]
pub struct TripRegistry {
    trips: Vec<Trip>,
}

impl TripRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn register(&mut self, trip: Trip) {
        self.trips.push(trip);
    }

    /// Apply `update_fn` to a copy and commit it only if it succeeds
    pub(crate) fn update_trip<F>(&mut self, id: &str, update_fn: F) -> Result<Trip>
    where
        F: FnOnce(&mut Trip) -> Result<()>,
    {
        let slot = self
            .trips
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| ModelError::NotFound {
                kind: "Trip",
                id: id.to_string(),
            })?;

        let mut next = slot.clone();
        update_fn(&mut next)?;
        *slot = next.clone();

        Ok(next)
    }

    /// Drop every trip; visitors and parks are untouched
    pub(crate) fn clear_all(&mut self) {
        self.trips.clear();
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Trip> {
        self.trips.iter().find(|t| t.id == id)
    }

    pub fn all_trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn count(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_pair() -> (Visitor, NationalPark) {
        (
            Visitor::new("Ben").unwrap(),
            NationalPark::new("Yosemite").unwrap(),
        )
    }

    #[test]
    fn test_trip_creation() {
        let (ben, yosemite) = sample_pair();
        let trip = Trip::new(&ben, &yosemite, "2023-01-01", "2023-01-05").unwrap();

        assert!(!trip.id().is_empty());
        assert_eq!(trip.visitor_id(), ben.id());
        assert_eq!(trip.national_park_id(), yosemite.id());
        assert_eq!(trip.start_date(), "2023-01-01");
        assert_eq!(trip.end_date(), "2023-01-05");
    }

    #[test]
    fn test_trip_date_validation() {
        let (ben, yosemite) = sample_pair();

        // Exactly 7 characters is enough
        assert!(Trip::new(&ben, &yosemite, "2023-01", "2023-02").is_ok());

        let err = Trip::new(&ben, &yosemite, "Jan 1", "2023-01-05").unwrap_err();
        assert_eq!(err.field(), Some("trip.start_date"));

        let err = Trip::new(&ben, &yosemite, "2023-01-01", "").unwrap_err();
        assert_eq!(err.field(), Some("trip.end_date"));
    }

    #[test]
    fn test_date_setters_revalidate() {
        let (ben, yosemite) = sample_pair();
        let mut trip = Trip::new(&ben, &yosemite, "2023-01-01", "2023-01-05").unwrap();

        trip.set_start_date("2023-01-02").unwrap();
        trip.set_end_date("2023-01-09").unwrap();
        assert_eq!(trip.start_date(), "2023-01-02");
        assert_eq!(trip.end_date(), "2023-01-09");

        assert!(trip.set_start_date("Jan 2").is_err());
        assert!(trip.set_end_date("short").is_err());
        assert_eq!(trip.start_date(), "2023-01-02");
        assert_eq!(trip.end_date(), "2023-01-09");
    }

    #[test]
    fn test_resolve_foreign_keys() {
        let mut ledger = Ledger::new();
        let ben = ledger.add_visitor("Ben").unwrap();
        let zion = ledger.add_park("Zion").unwrap();
        let trip = ledger.add_trip(&ben, &zion, "2023-01-01", "2023-01-05").unwrap();

        assert_eq!(trip.visitor(&ledger), Some(&ben));
        assert_eq!(trip.national_park(&ledger), Some(&zion));
    }

    #[test]
    fn test_unregistered_trip_resolves_to_none() {
        let ledger = Ledger::new();
        let (ben, yosemite) = sample_pair();
        let trip = Trip::new(&ben, &yosemite, "2023-01-01", "2023-01-05").unwrap();

        assert!(trip.visitor(&ledger).is_none());
        assert!(trip.national_park(&ledger).is_none());
    }

    #[test]
    fn test_registry_order_and_clear() {
        let (ben, yosemite) = sample_pair();
        let mut registry = TripRegistry::new();

        let first = Trip::new(&ben, &yosemite, "2023-01-01", "2023-01-05").unwrap();
        let second = Trip::new(&ben, &yosemite, "2023-02-01", "2023-02-05").unwrap();
        registry.register(first.clone());
        registry.register(second.clone());

        assert_eq!(registry.count(), 2);
        assert_eq!(registry.all_trips(), &[first.clone(), second]);
        assert_eq!(registry.find_by_id(first.id()), Some(&first));

        registry.clear_all();
        assert!(registry.is_empty());
        assert!(registry.find_by_id(first.id()).is_none());
    }

    #[test]
    fn test_update_trip_is_atomic() {
        let (ben, yosemite) = sample_pair();
        let mut registry = TripRegistry::new();
        let trip = Trip::new(&ben, &yosemite, "2023-01-01", "2023-01-05").unwrap();
        let id = trip.id().to_string();
        registry.register(trip);

        // Start date is valid but end date is not: nothing changes
        let result = registry.update_trip(&id, |t| {
            t.set_start_date("2024-01-01")?;
            t.set_end_date("bad")
        });
        assert!(result.is_err());
        assert_eq!(registry.find_by_id(&id).unwrap().start_date(), "2023-01-01");

        let err = registry.update_trip("non-existent-id", |_| Ok(())).unwrap_err();
        assert!(matches!(err, ModelError::NotFound { kind: "Trip", .. }));
    }
}
