// 🧍 Visitor Entity - a named actor who takes trips
//
// "Visitor name is a VALUE (can change), Visitor UUID is IDENTITY (never changes)"
//
// Two visitors called "Ben" are two different visitors. Trips point at the id,
// so renaming a visitor never detaches their trips.

use crate::attributes::VISITOR_NAME;
use crate::entities::{NationalPark, Trip};
use crate::error::{ModelError, Result};
use crate::ledger::Ledger;
use serde::Serialize;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

// ============================================================================
// VISITOR ENTITY
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct Visitor {
    /// Stable identity (UUID) - NEVER changes
    id: String,

    /// 1-15 characters, revalidated on every rename
    name: String,
}

impl Visitor {
    /// Create new visitor with a fresh UUID
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        VISITOR_NAME.check(&name)?;

        Ok(Visitor {
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

    /// Rename; on failure the old name stays in place.
    /// Callers outside the crate go through `Ledger::rename_visitor`.
    pub(crate) fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        VISITOR_NAME.check(&name)?;
        self.name = name;
        Ok(())
    }

    // ========================================================================
    // DERIVED QUERIES (scan the trip registry on every call)
    // ========================================================================

    /// All trips taken by this visitor, in booking order
    pub fn trips<'a>(&self, ledger: &'a Ledger) -> Vec<&'a Trip> {
        ledger
            .trips()
            .all_trips()
            .iter()
            .filter(|trip| trip.visitor_id() == self.id)
            .collect()
    }

    /// Distinct parks this visitor has been to, in order of first visit
    pub fn national_parks<'a>(&self, ledger: &'a Ledger) -> Vec<&'a NationalPark> {
        let mut seen = HashSet::new();
        self.trips(ledger)
            .into_iter()
            .filter(|trip| seen.insert(trip.national_park_id()))
            .filter_map(|trip| ledger.parks().find_by_id(trip.national_park_id()))
            .collect()
    }

    pub fn total_visits_at_park(&self, ledger: &Ledger, park: &NationalPark) -> usize {
        self.trips(ledger)
            .into_iter()
            .filter(|trip| trip.national_park_id() == park.id())
            .count()
    }
}

impl PartialEq for Visitor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Visitor {}

impl Hash for Visitor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

// ============================================================================
// VISITOR REGISTRY
// ============================================================================

/// Every visitor ever created in a ledger, in creation order.
/// Append-only: visitors are never removed individually.
#[derive(Debug, Default)]
pub struct VisitorRegistry {
    visitors: Vec<Visitor>,
}

impl VisitorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn register(&mut self, visitor: Visitor) {
        self.visitors.push(visitor);
    }

    /// Apply `update_fn` to a copy and commit it only if it succeeds
    pub(crate) fn update_visitor<F>(&mut self, id: &str, update_fn: F) -> Result<Visitor>
    where
        F: FnOnce(&mut Visitor) -> Result<()>,
    {
        let slot = self
            .visitors
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or_else(|| ModelError::NotFound {
                kind: "Visitor",
                id: id.to_string(),
            })?;

        let mut next = slot.clone();
        update_fn(&mut next)?;
        *slot = next.clone();

        Ok(next)
    }

    pub(crate) fn clear(&mut self) {
        self.visitors.clear();
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Visitor> {
        self.visitors.iter().find(|v| v.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find_by_id(id).is_some()
    }

    /// Names are not unique, so this returns every match
    pub fn by_name(&self, name: &str) -> Vec<&Visitor> {
        self.visitors.iter().filter(|v| v.name == name).collect()
    }

    pub fn all_visitors(&self) -> &[Visitor] {
        &self.visitors
    }

    pub fn count(&self) -> usize {
        self.visitors.len()
    }
}

// ============================================================================
// TESTS
// ============================================================================
