// 📒 Ledger - the store that owns every registry
//
// Visitors, parks and trips all live here for as long as the ledger does.
// Construction goes through the ledger so that a trip can only ever point at
// a visitor and a park it already knows about.

use crate::entities::{
    NationalPark, NationalParkRegistry, Trip, TripRegistry, Visitor, VisitorRegistry,
};
use crate::error::{ModelError, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// PARK REPORT
// ============================================================================

/// One row of the park report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParkStat {
    pub park_id: String,
    pub name: String,
    pub total_visits: usize,
    pub distinct_visitors: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_visitor: Option<String>,
    /// Booking time of the most recently booked trip here
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_booked_at: Option<DateTime<Utc>>,
}

// ============================================================================
// LEDGER
// ============================================================================

#[derive(Debug, Default)]
pub struct Ledger {
    visitors: VisitorRegistry,
    parks: NationalParkRegistry,
    trips: TripRegistry,
}

impl Ledger {
    /// Empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visitors(&self) -> &VisitorRegistry {
        &self.visitors
    }

    pub fn parks(&self) -> &NationalParkRegistry {
        &self.parks
    }

    pub fn trips(&self) -> &TripRegistry {
        &self.trips
    }

    // ========================================================================
    // CONSTRUCTION
    //
    // The `add_*` methods return a snapshot of the registered entity. The
    // snapshot keeps its identity, so it works for queries, but changes go
    // through the ledger (`rename_visitor`, `reschedule_trip`, ...).
    // ========================================================================

    /// Register a visitor and return a snapshot of it.
    ///
    /// Snapshots cannot be mutated directly:
    ///
    /// ```compile_fail
    /// let mut ledger = park_ledger::Ledger::new();
    /// let mut ben = ledger.add_visitor("Ben").unwrap();
    /// ben.set_name("Benny").unwrap();
    /// ```
    pub fn add_visitor(&mut self, name: impl Into<String>) -> Result<Visitor> {
        let visitor = Visitor::new(name)?;
        tracing::debug!(id = visitor.id(), name = visitor.name(), "registered visitor");

        self.visitors.register(visitor.clone());
        Ok(visitor)
    }

    pub fn add_park(&mut self, name: impl Into<String>) -> Result<NationalPark> {
        let park = NationalPark::new(name)?;
        tracing::debug!(id = park.id(), name = park.name(), "registered national park");

        self.parks.register(park.clone());
        Ok(park)
    }

    /// Book a trip. The visitor and park must belong to this ledger; that is
    /// checked before the dates are looked at. Returns a snapshot.
    ///
    /// ```compile_fail
    /// let mut ledger = park_ledger::Ledger::new();
    /// let ben = ledger.add_visitor("Ben").unwrap();
    /// let zion = ledger.add_park("Zion").unwrap();
    /// let mut trip = ledger.add_trip(&ben, &zion, "2023-01-01", "2023-01-05").unwrap();
    /// trip.set_start_date("2024-09-09").unwrap();
    /// ```
    pub fn add_trip(
        &mut self,
        visitor: &Visitor,
        national_park: &NationalPark,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Result<Trip> {
        if !self.visitors.contains(visitor.id()) {
            tracing::warn!(id = visitor.id(), "trip references unknown visitor");
            return Err(ModelError::UnknownReference {
                kind: "Visitor",
                id: visitor.id().to_string(),
            });
        }

        if !self.parks.contains(national_park.id()) {
            tracing::warn!(id = national_park.id(), "trip references unknown national park");
            return Err(ModelError::UnknownReference {
                kind: "NationalPark",
                id: national_park.id().to_string(),
            });
        }

        let trip = Trip::new(visitor, national_park, start_date, end_date)?;
        tracing::debug!(
            id = trip.id(),
            visitor = visitor.name(),
            park = national_park.name(),
            start = trip.start_date(),
            end = trip.end_date(),
            "booked trip"
        );

        self.trips.register(trip.clone());
        Ok(trip)
    }

    // ========================================================================
    // UPDATES
    // ========================================================================

    /// Update a registered visitor; nothing changes if `update_fn` fails
    fn update_visitor<F>(&mut self, id: &str, update_fn: F) -> Result<Visitor>
    where
        F: FnOnce(&mut Visitor) -> Result<()>,
    {
        let visitor = self.visitors.update_visitor(id, update_fn)?;
        tracing::debug!(id, name = visitor.name(), "updated visitor");
        Ok(visitor)
    }

    /// Rename a registered visitor; every query sees the new name
    pub fn rename_visitor(&mut self, id: &str, name: impl Into<String>) -> Result<Visitor> {
        let name = name.into();
        self.update_visitor(id, |visitor| visitor.set_name(name))
    }

    /// Update a registered trip; nothing changes if `update_fn` fails
    fn update_trip<F>(&mut self, id: &str, update_fn: F) -> Result<Trip>
    where
        F: FnOnce(&mut Trip) -> Result<()>,
    {
        let trip = self.trips.update_trip(id, update_fn)?;
        tracing::debug!(id, start = trip.start_date(), end = trip.end_date(), "updated trip");
        Ok(trip)
    }

    pub fn set_trip_start_date(&mut self, id: &str, start_date: impl Into<String>) -> Result<Trip> {
        let start_date = start_date.into();
        self.update_trip(id, |trip| trip.set_start_date(start_date))
    }

    pub fn set_trip_end_date(&mut self, id: &str, end_date: impl Into<String>) -> Result<Trip> {
        let end_date = end_date.into();
        self.update_trip(id, |trip| trip.set_end_date(end_date))
    }

    /// Change both dates at once; if either is invalid neither is applied
    pub fn reschedule_trip(
        &mut self,
        id: &str,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Result<Trip> {
        let (start_date, end_date) = (start_date.into(), end_date.into());
        self.update_trip(id, |trip| {
            trip.set_start_date(start_date)?;
            trip.set_end_date(end_date)
        })
    }

    // ========================================================================
    // RESETS
    // ========================================================================

    /// Drop every trip. Visitors and parks stay registered.
    pub fn clear_trips(&mut self) {
        tracing::debug!(count = self.trips.count(), "clearing trips");
        self.trips.clear_all();
    }

    /// Drop everything: trips, visitors and parks
    pub fn reset(&mut self) {
        tracing::debug!(
            visitors = self.visitors.count(),
            parks = self.parks.count(),
            trips = self.trips.count(),
            "resetting ledger"
        );
        self.trips.clear_all();
        self.visitors.clear();
        self.parks.clear();
    }

    // ========================================================================
    // REPORTING
    // ========================================================================

    /// Per-park summary in park registration order
    pub fn park_report(&self) -> Vec<ParkStat> {
        self.parks
            .all_parks()
            .iter()
            .map(|park| ParkStat {
                park_id: park.id().to_string(),
                name: park.name().to_string(),
                total_visits: park.total_visits(self),
                distinct_visitors: park.visitors(self).len(),
                best_visitor: park.best_visitor(self).map(|v| v.name().to_string()),
                last_booked_at: park.trips(self).iter().map(|t| t.booked_at()).max(),
            })
            .collect()
    }
}

// ============================================================================
// TESTS
// ============================================================================
