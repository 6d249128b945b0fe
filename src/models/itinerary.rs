use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{GlobetrotterError, Result};
use crate::models::validation::{validate_activity, validate_section};

// ---------------------------------------------------------------------------
// ItinerarySection: a sub-period of a trip (one city or day range)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItinerarySection {
    pub id: String,
    pub trip_id: String,
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub budget: Decimal,
    #[serde(default)]
    pub order_index: i32,
    pub created_at: Option<DateTime<Utc>>,
}

impl ItinerarySection {
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

// ---------------------------------------------------------------------------
// Activity: a single planned expense under a section
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub section_id: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub expense: Decimal,
    pub category: Option<String>,
    #[serde(default)]
    pub order_index: i32,
    pub created_at: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// Drafts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionDraft {
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub budget: Decimal,
    pub order_index: Option<i32>,
}

impl SectionDraft {
    /// Build a validated section appended after `existing` sections of the trip.
    ///
    /// Without an explicit order index the section is placed after every
    /// section already in the trip.
    pub fn into_section(
        self,
        id: &str,
        trip_id: &str,
        existing: &[ItinerarySection],
        now: DateTime<Utc>,
    ) -> Result<ItinerarySection> {
        let order_index = match self.order_index {
            Some(i) => i,
            None => {
                let siblings = existing.iter().filter(|s| s.trip_id == trip_id).count();
                next_order_index(siblings)?
            }
        };
        let section = ItinerarySection {
            id: id.to_string(),
            trip_id: trip_id.to_string(),
            title: self.title,
            start_date: self.start_date,
            end_date: self.end_date,
            budget: self.budget,
            order_index,
            created_at: Some(now),
        };
        validate_section(&section)?;
        Ok(section)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityDraft {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub expense: Decimal,
    pub category: Option<String>,
    pub order_index: Option<i32>,
}

impl ActivityDraft {
    pub fn into_activity(
        self,
        id: &str,
        section_id: &str,
        existing: &[Activity],
        now: DateTime<Utc>,
    ) -> Result<Activity> {
        let order_index = match self.order_index {
            Some(i) => i,
            None => {
                let siblings = existing.iter().filter(|a| a.section_id == section_id).count();
                next_order_index(siblings)?
            }
        };
        let activity = Activity {
            id: id.to_string(),
            section_id: section_id.to_string(),
            name: self.name,
            description: self.description.filter(|d| !d.trim().is_empty()),
            expense: self.expense,
            category: self.category.filter(|c| !c.trim().is_empty()),
            order_index,
            created_at: Some(now),
        };
        validate_activity(&activity)?;
        Ok(activity)
    }
}

/// Order index for a row appended after `siblings` existing rows.
fn next_order_index(siblings: usize) -> Result<i32> {
    i32::try_from(siblings).map_err(|_| {
        GlobetrotterError::InvalidArgument(format!("Too many siblings to append: {}", siblings))
    })
}
