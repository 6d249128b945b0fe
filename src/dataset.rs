//! Validated, in-memory rows that the query interfaces read from.
//!
//! Records enter through [`Dataset::ingest`], which validates every row once
//! and fails on the first bad one. Sections and activities are stored sorted
//! by order index, so every slice handed to the aggregation functions is
//! already in display order.

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::config;
use crate::error::Result;
use crate::loader::SnapshotLoader;
use crate::models::{
    section_within_trip, validate_activity, validate_section, validate_suggestion, validate_trip,
    Activity, ActivitySuggestion, City, ItinerarySection, Profile, Trip,
};

/// Raw rows as fetched from the store, before validation.
#[derive(Debug, Clone, Default)]
pub struct Tables {
    pub profiles: Vec<Profile>,
    pub trips: Vec<Trip>,
    pub sections: Vec<ItinerarySection>,
    pub activities: Vec<Activity>,
    pub cities: Vec<City>,
    pub suggestions: Vec<ActivitySuggestion>,
}

impl Tables {
    /// Read every table from a snapshot directory. Only `trips` is required.
    pub fn load(loader: &SnapshotLoader) -> Result<Self> {
        Ok(Self {
            profiles: loader.load_rows(config::PROFILES, false)?,
            trips: loader.load_rows(config::TRIPS, true)?,
            sections: loader.load_rows(config::SECTIONS, false)?,
            activities: loader.load_rows(config::ACTIVITIES, false)?,
            cities: loader.load_rows(config::CITIES, false)?,
            suggestions: loader.load_rows(config::SUGGESTIONS, false)?,
        })
    }
}

/// Validated rows.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    profiles: Vec<Profile>,
    trips: Vec<Trip>,
    sections: Vec<ItinerarySection>,
    activities: Vec<Activity>,
    cities: Vec<City>,
    suggestions: Vec<ActivitySuggestion>,
}

impl Dataset {
    /// Validate `tables` and build a dataset.
    ///
    /// Returns the first validation error; no dataset is produced from
    /// partially valid input. Advisory problems (a section outside its trip's
    /// dates, rows pointing at a missing parent, repeated order indexes) are
    /// logged and kept.
    pub fn ingest(tables: Tables) -> Result<Self> {
        let Tables {
            profiles,
            trips,
            mut sections,
            mut activities,
            cities,
            suggestions,
        } = tables;

        for trip in &trips {
            validate_trip(trip)?;
        }
        for section in &sections {
            validate_section(section)?;
        }
        for activity in &activities {
            validate_activity(activity)?;
        }
        for suggestion in &suggestions {
            validate_suggestion(suggestion)?;
        }

        report_advisories(&trips, &sections, &activities);

        // Stable: equal order indexes keep their fetched order.
        sections.sort_by_key(|s| s.order_index);
        activities.sort_by_key(|a| a.order_index);

        debug!(
            trips = trips.len(),
            sections = sections.len(),
            activities = activities.len(),
            "dataset ingested"
        );

        Ok(Self {
            profiles,
            trips,
            sections,
            activities,
            cities,
            suggestions,
        })
    }

    /// Load a snapshot directory and ingest it.
    pub fn load(loader: &SnapshotLoader) -> Result<Self> {
        Self::ingest(Tables::load(loader)?)
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    /// All sections, ordered by order index.
    pub fn sections(&self) -> &[ItinerarySection] {
        &self.sections
    }

    /// All activities, ordered by order index.
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn suggestions(&self) -> &[ActivitySuggestion] {
        &self.suggestions
    }

    pub fn trip(&self, id: &str) -> Option<&Trip> {
        self.trips.iter().find(|t| t.id == id)
    }

    pub fn profile(&self, id: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    pub fn section(&self, id: &str) -> Option<&ItinerarySection> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Sections of one trip, in order-index order.
    pub fn sections_for_trip(&self, trip_id: &str) -> Vec<ItinerarySection> {
        self.sections
            .iter()
            .filter(|s| s.trip_id == trip_id)
            .cloned()
            .collect()
    }

    /// Activities under one trip, grouped by section in section order and
    /// ordered by order index within each section.
    pub fn activities_for_trip(&self, trip_id: &str) -> Vec<Activity> {
        self.sections
            .iter()
            .filter(|s| s.trip_id == trip_id)
            .flat_map(|s| self.activities.iter().filter(move |a| a.section_id == s.id))
            .cloned()
            .collect()
    }
}

fn report_advisories(trips: &[Trip], sections: &[ItinerarySection], activities: &[Activity]) {
    let trips_by_id: HashMap<&str, &Trip> = trips.iter().map(|t| (t.id.as_str(), t)).collect();
    let section_ids: HashSet<&str> = sections.iter().map(|s| s.id.as_str()).collect();

    let mut seen_section_slots = HashSet::new();
    for section in sections {
        match trips_by_id.get(section.trip_id.as_str()) {
            Some(trip) if !section_within_trip(trip, section) => warn!(
                section = %section.id,
                trip = %trip.id,
                "section dates fall outside the trip's date range"
            ),
            Some(_) => {}
            None => warn!(
                section = %section.id,
                trip = %section.trip_id,
                "section references an unknown trip"
            ),
        }
        if !seen_section_slots.insert((section.trip_id.as_str(), section.order_index)) {
            warn!(
                trip = %section.trip_id,
                order_index = section.order_index,
                "duplicate section order index within trip"
            );
        }
    }

    let mut seen_activity_slots = HashSet::new();
    for activity in activities {
        if !section_ids.contains(activity.section_id.as_str()) {
            warn!(
                activity = %activity.id,
                section = %activity.section_id,
                "activity references an unknown section"
            );
        }
        if !seen_activity_slots.insert((activity.section_id.as_str(), activity.order_index)) {
            warn!(
                section = %activity.section_id,
                order_index = activity.order_index,
                "duplicate activity order index within section"
            );
        }
    }
}
