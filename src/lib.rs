// Park Ledger - Core Library
// Visitors, national parks and the trips that join them

pub mod error;
pub mod attributes;   // Field rules for names and dates
pub mod entities;     // Visitor, NationalPark, Trip + registries
pub mod ledger;       // Store that owns the registries
pub mod logger;

// Re-export commonly used types
pub use error::{ModelError, Result};
pub use attributes::{FieldRule, ValidationRule};
pub use entities::{
    Visitor, VisitorRegistry,
    NationalPark, NationalParkRegistry,
    Trip, TripRegistry,
};
pub use ledger::{Ledger, ParkStat};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
