//! Trip queries for a single owner's trip list and dashboard.

use tracing::warn;

use crate::aggregate::{self, StatusGroups};
use crate::config;
use crate::dataset::Dataset;
use crate::error::{GlobetrotterError, Result};
use crate::filter::{TripFilter, TripOrder};
use crate::models::{Trip, TripStatus};

// ---------------------------------------------------------------------------
// TripQuery
// ---------------------------------------------------------------------------

/// Query interface for trips.
pub struct TripQuery<'a> {
    data: &'a Dataset,
}

impl<'a> TripQuery<'a> {
    /// Create a new `TripQuery` bound to the given dataset.
    pub fn new(data: &'a Dataset) -> Self {
        Self { data }
    }

    /// Get a trip by id.
    pub fn get(&self, id: &str) -> Result<&'a Trip> {
        self.data
            .trip(id)
            .ok_or_else(|| GlobetrotterError::NotFound(format!("Trip {}", id)))
    }

    /// List an owner's trips, optionally narrowed to one status.
    ///
    /// `status` of `None` or `"all"` keeps every trip. Any other value must be
    /// a known status, otherwise [`GlobetrotterError::UnrecognizedStatus`].
    pub fn for_owner(
        &self,
        owner_id: &str,
        status: Option<&str>,
        order: TripOrder,
    ) -> Result<Vec<&'a Trip>> {
        let mut filter = TripFilter::new();
        filter.owner(owner_id).order_by(order);
        if let Some(raw) = status.filter(|s| !s.eq_ignore_ascii_case("all")) {
            filter.status(TripStatus::parse_known(&raw.to_lowercase())?);
        }
        Ok(filter.apply(self.data.trips()))
    }

    /// Group an owner's trips into ongoing, upcoming, and completed.
    ///
    /// Trips with an unrecognized status are returned in `unclassified` and
    /// logged.
    pub fn grouped(&self, owner_id: &str) -> StatusGroups<'a> {
        let owned = TripFilter::new().owner(owner_id).apply(self.data.trips());
        let groups = aggregate::derive_status_groups(owned);
        log_unclassified(&groups);
        groups
    }

    /// Group every trip in the dataset by status.
    pub fn grouped_all(&self) -> StatusGroups<'a> {
        let groups = aggregate::derive_status_groups(self.data.trips());
        log_unclassified(&groups);
        groups
    }

    /// The most recently created trips across the dataset, newest first.
    pub fn recent(&self, limit: i64) -> Vec<&'a Trip> {
        aggregate::recent(self.data.trips(), |t| t.created_at, limit)
    }

    /// An owner's most recently created trips at the dashboard's default
    /// length, newest first.
    pub fn dashboard_recent(&self, owner_id: &str) -> Vec<&'a Trip> {
        let owned = TripFilter::new().owner(owner_id).apply(self.data.trips());
        aggregate::recent(&owned, |t| t.created_at, config::DASHBOARD_RECENT_TRIPS)
            .into_iter()
            .copied()
            .collect()
    }

    /// Count trips, optionally for one owner.
    pub fn count(&self, owner_id: Option<&str>) -> usize {
        match owner_id {
            Some(owner) => TripFilter::new().owner(owner).apply(self.data.trips()).len(),
            None => self.data.trips().len(),
        }
    }
}

fn log_unclassified(groups: &StatusGroups<'_>) {
    for trip in &groups.unclassified {
        warn!(trip = %trip.id, status = %trip.status, "trip has an unrecognized status");
    }
}
