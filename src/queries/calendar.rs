//! Calendar lookups over one owner's trips and sections.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};

use crate::aggregate;
use crate::config;
use crate::dataset::Dataset;
use crate::error::{GlobetrotterError, Result};
use crate::filter::TripFilter;
use crate::models::{ItinerarySection, Trip};

/// Trips and sections spanning a single day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayEvents<'a> {
    pub trips: Vec<&'a Trip>,
    pub sections: Vec<&'a ItinerarySection>,
}

impl DayEvents<'_> {
    pub fn is_empty(&self) -> bool {
        self.trips.is_empty() && self.sections.is_empty()
    }
}

// ---------------------------------------------------------------------------
// CalendarQuery
// ---------------------------------------------------------------------------

/// Query interface for date lookups.
pub struct CalendarQuery<'a> {
    data: &'a Dataset,
}

impl<'a> CalendarQuery<'a> {
    /// Create a new `CalendarQuery` bound to the given dataset.
    pub fn new(data: &'a Dataset) -> Self {
        Self { data }
    }

    fn owned(&self, owner_id: &str) -> (Vec<Trip>, Vec<ItinerarySection>) {
        let trips: Vec<Trip> = self
            .data
            .trips()
            .iter()
            .filter(|t| t.user_id == owner_id)
            .cloned()
            .collect();
        let trip_ids: HashSet<&str> = trips.iter().map(|t| t.id.as_str()).collect();
        let sections = self
            .data
            .sections()
            .iter()
            .filter(|s| trip_ids.contains(s.trip_id.as_str()))
            .cloned()
            .collect();
        (trips, sections)
    }

    /// Everything the owner has planned on `date`.
    pub fn events_on(&self, owner_id: &str, date: NaiveDate) -> DayEvents<'a> {
        let trip_ids: HashSet<&str> = self
            .data
            .trips()
            .iter()
            .filter(|t| t.user_id == owner_id)
            .map(|t| t.id.as_str())
            .collect();
        DayEvents {
            trips: aggregate::trips_on_date(self.data.trips(), date)
                .into_iter()
                .filter(|t| t.user_id == owner_id)
                .collect(),
            sections: aggregate::sections_on_date(self.data.sections(), date)
                .into_iter()
                .filter(|s| trip_ids.contains(s.trip_id.as_str()))
                .collect(),
        }
    }

    /// Days of `month` on which the owner has a trip or section.
    pub fn busy_days(&self, owner_id: &str, year: i32, month: u32) -> Result<Vec<NaiveDate>> {
        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
            GlobetrotterError::InvalidArgument(format!("Invalid month {}-{}", year, month))
        })?;
        let (trips, sections) = self.owned(owner_id);
        Ok(first
            .iter_days()
            .take_while(|d| d.month() == month)
            .filter(|d| aggregate::has_event_on(&trips, &sections, *d))
            .collect())
    }

    /// The owner's trips that have not ended before `today`, in stored order.
    ///
    /// `limit <= 0` yields an empty result.
    pub fn upcoming(&self, owner_id: &str, today: NaiveDate, limit: i64) -> Vec<&'a Trip> {
        let Ok(limit) = usize::try_from(limit) else {
            return Vec::new();
        };
        TripFilter::new()
            .owner(owner_id)
            .ends_on_or_after(today)
            .limit(limit)
            .apply(self.data.trips())
    }

    /// [`upcoming`](Self::upcoming) at the calendar panel's default length.
    pub fn upcoming_trips(&self, owner_id: &str, today: NaiveDate) -> Vec<&'a Trip> {
        self.upcoming(owner_id, today, config::CALENDAR_UPCOMING_TRIPS)
    }
}
