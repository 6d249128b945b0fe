//! Site-wide statistics for the admin screen.

use serde::Serialize;

use crate::aggregate::{self, AdminStats, Ranked};
use crate::config;
use crate::dataset::Dataset;
use crate::queries::community::{with_author, AuthoredTrip};

/// Everything the admin screen shows, computed with the default list sizes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdminOverview<'a> {
    pub stats: AdminStats,
    pub shares: Vec<StatusShare>,
    pub popular_destinations: Vec<Ranked<String>>,
    pub recent_trips: Vec<AuthoredTrip<'a>>,
}

/// Share of trips in one status bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusShare {
    pub status: &'static str,
    pub count: usize,
    pub percent: f64,
}

// ---------------------------------------------------------------------------
// AnalyticsQuery
// ---------------------------------------------------------------------------

/// Query interface for aggregate statistics across every user.
pub struct AnalyticsQuery<'a> {
    data: &'a Dataset,
}

impl<'a> AnalyticsQuery<'a> {
    /// Create a new `AnalyticsQuery` bound to the given dataset.
    pub fn new(data: &'a Dataset) -> Self {
        Self { data }
    }

    /// User, trip, status, and budget totals.
    pub fn stats(&self) -> AdminStats {
        aggregate::admin_stats(self.data.profiles().len(), self.data.trips())
    }

    /// Status buckets as percentages of all trips.
    ///
    /// The `"other"` bucket counts trips whose status is not recognized.
    pub fn status_shares(&self) -> Vec<StatusShare> {
        let stats = self.stats();
        [
            ("upcoming", stats.upcoming_trips),
            ("ongoing", stats.ongoing_trips),
            ("completed", stats.completed_trips),
            ("other", stats.other_trips),
        ]
        .into_iter()
        .map(|(status, count)| StatusShare {
            status,
            count,
            percent: aggregate::percent_of(count, stats.total_trips),
        })
        .collect()
    }

    /// Most common trip start places.
    pub fn popular_destinations(&self, top_n: i64) -> Vec<Ranked<String>> {
        aggregate::rank_by_frequency(self.data.trips(), |t| t.start_place.clone(), top_n)
    }

    /// Most recently created trips with their authors.
    pub fn recent_trips(&self, limit: i64) -> Vec<AuthoredTrip<'a>> {
        aggregate::recent(self.data.trips(), |t| t.created_at, limit)
            .into_iter()
            .map(|trip| with_author(self.data, trip))
            .collect()
    }

    /// Stats, status shares, top destinations, and recent trips in one call.
    pub fn overview(&self) -> AdminOverview<'a> {
        AdminOverview {
            stats: self.stats(),
            shares: self.status_shares(),
            popular_destinations: self.popular_destinations(config::POPULAR_DESTINATIONS),
            recent_trips: self.recent_trips(config::ADMIN_RECENT_TRIPS),
        }
    }
}
