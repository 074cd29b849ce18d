// Entity Models
// Identity is a UUID that never changes; names and dates are values.
//
// Each entity file holds:
// - the entity with its derived queries
// - a registry owned by the Ledger

pub mod visitor;
pub mod national_park;
pub mod trip;

pub use visitor::{Visitor, VisitorRegistry};
pub use national_park::{NationalPark, NationalParkRegistry};
pub use trip::{Trip, TripRegistry};
