//! Itinerary and budget queries for a single trip.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::aggregate::{self, BudgetSummary};
use crate::dataset::Dataset;
use crate::error::{GlobetrotterError, Result};
use crate::models::{Activity, ItinerarySection, Trip};

/// A section paired with its activities, both in order-index order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionWithActivities {
    pub section: ItinerarySection,
    pub activities: Vec<Activity>,
    pub spent: Decimal,
}

// ---------------------------------------------------------------------------
// ItineraryQuery
// ---------------------------------------------------------------------------

/// Query interface for itinerary sections, activities, and trip budgets.
pub struct ItineraryQuery<'a> {
    data: &'a Dataset,
}

impl<'a> ItineraryQuery<'a> {
    /// Create a new `ItineraryQuery` bound to the given dataset.
    pub fn new(data: &'a Dataset) -> Self {
        Self { data }
    }

    fn trip(&self, trip_id: &str) -> Result<&'a Trip> {
        self.data
            .trip(trip_id)
            .ok_or_else(|| GlobetrotterError::NotFound(format!("Trip {}", trip_id)))
    }

    /// Sections of a trip in order-index order.
    pub fn sections(&self, trip_id: &str) -> Result<Vec<ItinerarySection>> {
        self.trip(trip_id)?;
        Ok(self.data.sections_for_trip(trip_id))
    }

    /// Activities of one section in order-index order.
    ///
    /// An unknown section id yields an empty list.
    pub fn activities(&self, section_id: &str) -> Vec<&'a Activity> {
        aggregate::activities_for_section(self.data.activities(), section_id)
    }

    /// Every section of a trip with its activities and spend.
    pub fn section_activities(&self, trip_id: &str) -> Result<Vec<SectionWithActivities>> {
        let sections = self.sections(trip_id)?;
        Ok(sections
            .into_iter()
            .map(|section| {
                let activities: Vec<Activity> =
                    aggregate::activities_for_section(self.data.activities(), &section.id)
                        .into_iter()
                        .cloned()
                        .collect();
                let spent = aggregate::section_spend(&activities);
                SectionWithActivities {
                    section,
                    activities,
                    spent,
                }
            })
            .collect())
    }

    /// Total spend across every activity under the trip.
    pub fn spent(&self, trip_id: &str) -> Result<Decimal> {
        let sections = self.sections(trip_id)?;
        Ok(aggregate::trip_spend(&sections, self.data.activities()))
    }

    /// Total budget minus spend. Negative when the trip is over budget.
    pub fn remaining(&self, trip_id: &str) -> Result<Decimal> {
        let trip = self.trip(trip_id)?;
        Ok(aggregate::remaining_budget(
            trip,
            self.data.sections(),
            self.data.activities(),
        ))
    }

    /// Budget summary with a per-section breakdown.
    pub fn budget(&self, trip_id: &str) -> Result<BudgetSummary> {
        let trip = self.trip(trip_id)?;
        Ok(aggregate::budget_summary(
            trip,
            self.data.sections(),
            self.data.activities(),
        ))
    }

    /// Trip spend split by activity category.
    pub fn spend_by_category(&self, trip_id: &str) -> Result<Vec<(String, Decimal)>> {
        self.trip(trip_id)?;
        Ok(aggregate::spend_by_category(
            self.data.activities_for_trip(trip_id),
        ))
    }
}
