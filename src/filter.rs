//! In-memory trip filter with chained construction.
//!
//! Conditions are combined with AND. Builder methods return `&mut Self` for
//! chaining, and [`TripFilter::apply`] never mutates the input slice.
//!
//! # Example
//!
//! ```rust
//! use globetrotter_sdk::filter::{TripFilter, TripOrder};
//! use globetrotter_sdk::models::TripStatus;
//!
//! let trips: Vec<globetrotter_sdk::models::Trip> = Vec::new();
//! let matches = TripFilter::new()
//!     .owner("user-1")
//!     .status(TripStatus::Upcoming)
//!     .order_by(TripOrder::StartDateDesc)
//!     .limit(10)
//!     .apply(&trips);
//! assert!(matches.is_empty());
//! ```

use chrono::NaiveDate;

use crate::models::{Trip, TripStatus};

/// Sort order for filtered trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TripOrder {
    /// Keep input order.
    #[default]
    Unordered,
    StartDateDesc,
    StartDateAsc,
    Name,
    CreatedAtDesc,
}

/// Builds a trip predicate plus ordering and paging.
#[derive(Debug, Clone, Default)]
pub struct TripFilter {
    owner_id: Option<String>,
    status: Option<TripStatus>,
    public_only: bool,
    name_like: Option<String>,
    place_like: Option<String>,
    active_on: Option<NaiveDate>,
    ends_from: Option<NaiveDate>,
    order: TripOrder,
    limit_val: Option<usize>,
    offset_val: Option<usize>,
}

impl TripFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep trips owned by `owner_id`.
    pub fn owner(&mut self, owner_id: &str) -> &mut Self {
        self.owner_id = Some(owner_id.to_string());
        self
    }

    /// Keep trips whose stored status equals `status`.
    pub fn status(&mut self, status: TripStatus) -> &mut Self {
        self.status = Some(status);
        self
    }

    pub fn public_only(&mut self) -> &mut Self {
        self.public_only = true;
        self
    }

    /// Case-insensitive substring match on the trip name.
    pub fn name_like(&mut self, needle: &str) -> &mut Self {
        self.name_like = Some(needle.to_lowercase());
        self
    }

    /// Case-insensitive substring match on the start place.
    pub fn place_like(&mut self, needle: &str) -> &mut Self {
        self.place_like = Some(needle.to_lowercase());
        self
    }

    /// Keep trips whose inclusive date range contains `date`.
    pub fn active_on(&mut self, date: NaiveDate) -> &mut Self {
        self.active_on = Some(date);
        self
    }

    /// Keep trips that have not ended before `date`.
    pub fn ends_on_or_after(&mut self, date: NaiveDate) -> &mut Self {
        self.ends_from = Some(date);
        self
    }

    pub fn order_by(&mut self, order: TripOrder) -> &mut Self {
        self.order = order;
        self
    }

    /// Set the maximum number of trips to return.
    pub fn limit(&mut self, n: usize) -> &mut Self {
        self.limit_val = Some(n);
        self
    }

    /// Set the number of trips to skip after ordering.
    pub fn offset(&mut self, n: usize) -> &mut Self {
        self.offset_val = Some(n);
        self
    }

    /// Whether a single trip passes every condition.
    pub fn matches(&self, trip: &Trip) -> bool {
        if let Some(owner) = &self.owner_id {
            if &trip.user_id != owner {
                return false;
            }
        }
        if let Some(status) = &self.status {
            if &trip.status != status {
                return false;
            }
        }
        if self.public_only && !trip.is_public {
            return false;
        }
        if let Some(needle) = &self.name_like {
            if !trip.name.to_lowercase().contains(needle.as_str()) {
                return false;
            }
        }
        if let Some(needle) = &self.place_like {
            if !trip.start_place.to_lowercase().contains(needle.as_str()) {
                return false;
            }
        }
        if let Some(date) = self.active_on {
            if !trip.covers(date) {
                return false;
            }
        }
        if let Some(date) = self.ends_from {
            if trip.end_date < date {
                return false;
            }
        }
        true
    }

    /// Apply the filter, ordering, and paging to `trips`.
    ///
    /// Ordering is stable: trips that compare equal keep their input order.
    pub fn apply<'a>(&self, trips: &'a [Trip]) -> Vec<&'a Trip> {
        let mut out: Vec<&Trip> = trips.iter().filter(|t| self.matches(t)).collect();

        match self.order {
            TripOrder::Unordered => {}
            TripOrder::StartDateDesc => out.sort_by(|a, b| b.start_date.cmp(&a.start_date)),
            TripOrder::StartDateAsc => out.sort_by(|a, b| a.start_date.cmp(&b.start_date)),
            TripOrder::Name => out.sort_by(|a, b| a.name.cmp(&b.name)),
            TripOrder::CreatedAtDesc => out.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        }

        let skip = self.offset_val.unwrap_or(0);
        let take = self.limit_val.unwrap_or(usize::MAX);
        out.into_iter().skip(skip).take(take).collect()
    }
}
