//! Record checks run once at ingestion, before any aggregation.
//!
//! These are pure: they inspect a single record and never touch storage.

use rust_decimal::Decimal;

use crate::config::MAX_AMOUNT;
use crate::error::{GlobetrotterError, Result};
use crate::models::{Activity, ActivitySuggestion, ItinerarySection, Trip};

/// Reject a trip whose end date precedes its start date or whose total
/// budget is negative or above [`MAX_AMOUNT`].
pub fn validate_trip(trip: &Trip) -> Result<()> {
    if trip.end_date < trip.start_date {
        return Err(GlobetrotterError::InvalidRange {
            entity: "trip",
            id: trip.id.clone(),
            start: trip.start_date,
            end: trip.end_date,
        });
    }
    check_amount("trip", &trip.id, "total_budget", trip.total_budget)
}

/// Reject a section with an out-of-range budget or an inverted date range.
pub fn validate_section(section: &ItinerarySection) -> Result<()> {
    if section.end_date < section.start_date {
        return Err(GlobetrotterError::InvalidRange {
            entity: "itinerary section",
            id: section.id.clone(),
            start: section.start_date,
            end: section.end_date,
        });
    }
    check_amount("itinerary section", &section.id, "budget", section.budget)
}

pub fn validate_activity(activity: &Activity) -> Result<()> {
    check_amount("activity", &activity.id, "expense", activity.expense)
}

pub fn validate_suggestion(suggestion: &ActivitySuggestion) -> Result<()> {
    check_amount(
        "activity suggestion",
        &suggestion.id,
        "estimated_cost",
        suggestion.estimated_cost,
    )
}

/// Advisory check: does the section's date range sit inside its trip's?
///
/// The store does not enforce this, so callers log violations instead of
/// rejecting the record.
pub fn section_within_trip(trip: &Trip, section: &ItinerarySection) -> bool {
    trip.start_date <= section.start_date && section.end_date <= trip.end_date
}

fn check_amount(
    entity: &'static str,
    id: &str,
    field: &'static str,
    value: Decimal,
) -> Result<()> {
    if value < Decimal::ZERO || value > MAX_AMOUNT {
        return Err(GlobetrotterError::InvalidAmount {
            entity,
            id: id.to_string(),
            field,
            value,
        });
    }
    Ok(())
}
