// 🏛️ Field Rules - validation catalog
// Each validated field is described once here; entities reference the rule
// instead of repeating length checks in every constructor and setter.

use crate::error::{ModelError, Result};
use serde::Serialize;

// ============================================================================
// VALIDATION RULES
// ============================================================================

/// Length bounds are counted in chars, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValidationRule {
    MinLength(usize),
    MaxLength(usize),
}

impl ValidationRule {
    /// Returns the failure reason, or None when the value passes
    fn violation(&self, value: &str) -> Option<String> {
        let len = value.chars().count();
        match *self {
            ValidationRule::MinLength(min) if len < min => {
                Some(format!("must be at least {} characters, got {}", min, len))
            }
            ValidationRule::MaxLength(max) if len > max => {
                Some(format!("must be at most {} characters, got {}", max, len))
            }
            _ => None,
        }
    }
}

// ============================================================================
// FIELD RULE
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct FieldRule {
    /// Qualified field name (e.g. "visitor.name")
    pub field: &'static str,
    pub rules: &'static [ValidationRule],
}

impl FieldRule {
    /// Check a value against every rule; the first violation wins
    pub fn check(&self, value: &str) -> Result<()> {
        match self.rules.iter().find_map(|rule| rule.violation(value)) {
            Some(reason) => {
                tracing::debug!(field = self.field, %reason, "validation failed");
                Err(ModelError::Validation {
                    field: self.field.to_string(),
                    value: value.to_string(),
                    reason,
                })
            }
            None => Ok(()),
        }
    }
}

pub const VISITOR_NAME: FieldRule = FieldRule {
    field: "visitor.name",
    rules: &[ValidationRule::MinLength(1), ValidationRule::MaxLength(15)],
};

pub const NATIONAL_PARK_NAME: FieldRule = FieldRule {
    field: "national_park.name",
    rules: &[ValidationRule::MinLength(3)],
};

pub const TRIP_START_DATE: FieldRule = FieldRule {
    field: "trip.start_date",
    rules: &[ValidationRule::MinLength(7)],
};

pub const TRIP_END_DATE: FieldRule = FieldRule {
    field: "trip.end_date",
    rules: &[ValidationRule::MinLength(7)],
};
