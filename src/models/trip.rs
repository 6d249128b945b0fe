use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::validation::validate_trip;

// ---------------------------------------------------------------------------
// TripStatus
// ---------------------------------------------------------------------------

/// Lifecycle label stored on a trip row.
///
/// Stored as a lowercase string. Values outside the known set are kept as
/// [`TripStatus::Unrecognized`] so that grouping can report them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TripStatus {
    #[default]
    Upcoming,
    Ongoing,
    Completed,
    Unrecognized(String),
}

impl TripStatus {
    pub fn as_str(&self) -> &str {
        match self {
            TripStatus::Upcoming => "upcoming",
            TripStatus::Ongoing => "ongoing",
            TripStatus::Completed => "completed",
            TripStatus::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, TripStatus::Unrecognized(_))
    }

    /// Parse a status filter, rejecting values outside the known set.
    pub fn parse_known(raw: &str) -> Result<Self> {
        match TripStatus::from(raw.to_string()) {
            TripStatus::Unrecognized(other) => {
                Err(crate::error::GlobetrotterError::UnrecognizedStatus(other))
            }
            status => Ok(status),
        }
    }
}

impl From<String> for TripStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "upcoming" => TripStatus::Upcoming,
            "ongoing" => TripStatus::Ongoing,
            "completed" => TripStatus::Completed,
            _ => TripStatus::Unrecognized(raw),
        }
    }
}

impl From<TripStatus> for String {
    fn from(status: TripStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for TripStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Trip
// ---------------------------------------------------------------------------

/// A planned journey owned by one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub start_place: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub status: TripStatus,
    #[serde(default)]
    pub total_budget: Decimal,
    #[serde(default)]
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Trip {
    /// Whether `date` falls inside the trip's inclusive date range.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Number of calendar days the trip spans, counting both ends.
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

// ---------------------------------------------------------------------------
// TripDraft: fields a user supplies when creating a trip
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripDraft {
    pub name: String,
    pub start_place: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub total_budget: Decimal,
    #[serde(default)]
    pub is_public: bool,
}

impl TripDraft {
    /// Turn the draft into a validated trip row.
    ///
    /// New trips always start as [`TripStatus::Upcoming`]. The owner id comes
    /// from the caller's session.
    pub fn into_trip(self, id: &str, owner_id: &str, now: DateTime<Utc>) -> Result<Trip> {
        let trip = Trip {
            id: id.to_string(),
            user_id: owner_id.to_string(),
            name: self.name,
            start_place: self.start_place,
            start_date: self.start_date,
            end_date: self.end_date,
            status: TripStatus::Upcoming,
            total_budget: self.total_budget,
            is_public: self.is_public,
            created_at: now,
            updated_at: Some(now),
        };
        validate_trip(&trip)?;
        Ok(trip)
    }
}
