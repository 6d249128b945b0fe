//! Pure budget and grouping computations over rows already in memory.
//!
//! Nothing in this module performs I/O, logs, or mutates its arguments. Every
//! function is total over validated input: empty slices produce zero or empty
//! results, and non-positive limits produce empty results.
//!
//! Amounts are [`Decimal`], so section-wise and flat sums agree exactly.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::config::UNCATEGORIZED;
use crate::models::{Activity, ItinerarySection, Trip, TripStatus};

// ---------------------------------------------------------------------------
// Spend
// ---------------------------------------------------------------------------

/// Activities belonging to `section_id`, in input order.
///
/// No reordering happens here; callers sort by order index upstream.
pub fn activities_for_section<'a>(
    activities: &'a [Activity],
    section_id: &str,
) -> Vec<&'a Activity> {
    activities
        .iter()
        .filter(|a| a.section_id == section_id)
        .collect()
}

/// Sum of `expense` over the given activities. Zero for an empty sequence.
///
/// Values are summed as given; validation at ingestion keeps them non-negative.
pub fn section_spend<I, A>(activities: I) -> Decimal
where
    I: IntoIterator<Item = A>,
    A: Borrow<Activity>,
{
    activities
        .into_iter()
        .fold(Decimal::ZERO, |sum, a| sum + a.borrow().expense)
}

/// Sum of [`section_spend`] over every section, with activities matched to
/// sections by id.
///
/// Activities whose section is not in `sections` are not counted.
pub fn trip_spend<I, S>(sections: I, activities: &[Activity]) -> Decimal
where
    I: IntoIterator<Item = S>,
    S: Borrow<ItinerarySection>,
{
    sections
        .into_iter()
        .map(|s| section_spend(activities_for_section(activities, &s.borrow().id)))
        .fold(Decimal::ZERO, |sum, spend| sum + spend)
}

/// `trip.total_budget` minus the spend of the trip's sections.
///
/// Sections belonging to other trips are ignored. The result is negative when
/// the trip is over budget and is never clamped.
pub fn remaining_budget(
    trip: &Trip,
    sections: &[ItinerarySection],
    activities: &[Activity],
) -> Decimal {
    let own = sections.iter().filter(|s| s.trip_id == trip.id);
    trip.total_budget - trip_spend(own, activities)
}

// ---------------------------------------------------------------------------
// Budget breakdowns
// ---------------------------------------------------------------------------

/// Spend against a single section's own budget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionBudget {
    pub section_id: String,
    pub title: String,
    pub budget: Decimal,
    pub spent: Decimal,
    pub remaining: Decimal,
    pub activity_count: usize,
}

/// Trip-level budget with a per-section breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetSummary {
    pub trip_id: String,
    pub total_budget: Decimal,
    pub spent: Decimal,
    pub remaining: Decimal,
    /// Sum of the section budgets.
    pub allocated: Decimal,
    /// `total_budget - allocated`; negative when sections promise more than the trip has.
    pub unallocated: Decimal,
    pub sections: Vec<SectionBudget>,
}

impl BudgetSummary {
    pub fn is_over_budget(&self) -> bool {
        self.remaining < Decimal::ZERO
    }
}

pub fn section_budget(section: &ItinerarySection, activities: &[Activity]) -> SectionBudget {
    let own = activities_for_section(activities, &section.id);
    let spent = section_spend(own.iter().copied());
    SectionBudget {
        section_id: section.id.clone(),
        title: section.title.clone(),
        budget: section.budget,
        spent,
        remaining: section.budget - spent,
        activity_count: own.len(),
    }
}

/// Full budget picture for one trip.
///
/// `spent` agrees with [`trip_spend`] and `remaining` with [`remaining_budget`].
/// Sections keep their input order.
pub fn budget_summary(
    trip: &Trip,
    sections: &[ItinerarySection],
    activities: &[Activity],
) -> BudgetSummary {
    let breakdown: Vec<SectionBudget> = sections
        .iter()
        .filter(|s| s.trip_id == trip.id)
        .map(|s| section_budget(s, activities))
        .collect();
    let spent = breakdown.iter().fold(Decimal::ZERO, |sum, s| sum + s.spent);
    let allocated = breakdown.iter().fold(Decimal::ZERO, |sum, s| sum + s.budget);
    BudgetSummary {
        trip_id: trip.id.clone(),
        total_budget: trip.total_budget,
        spent,
        remaining: trip.total_budget - spent,
        allocated,
        unallocated: trip.total_budget - allocated,
        sections: breakdown,
    }
}

/// Spend per activity category, in first-seen category order.
///
/// Activities without a category are grouped under [`UNCATEGORIZED`].
pub fn spend_by_category<I, A>(activities: I) -> Vec<(String, Decimal)>
where
    I: IntoIterator<Item = A>,
    A: Borrow<Activity>,
{
    let mut totals: Vec<(String, Decimal)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for a in activities {
        let a = a.borrow();
        let label = a
            .category
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(UNCATEGORIZED);
        match index.get(label) {
            Some(&i) => totals[i].1 += a.expense,
            None => {
                index.insert(label.to_string(), totals.len());
                totals.push((label.to_string(), a.expense));
            }
        }
    }
    totals
}

// ---------------------------------------------------------------------------
// Status grouping
// ---------------------------------------------------------------------------

/// Trips partitioned by their stored status.
///
/// Every input trip lands in exactly one bucket. Trips whose status is not
/// one of the three known values go to `unclassified`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusGroups<'a> {
    pub ongoing: Vec<&'a Trip>,
    pub upcoming: Vec<&'a Trip>,
    pub completed: Vec<&'a Trip>,
    pub unclassified: Vec<&'a Trip>,
}

impl StatusGroups<'_> {
    pub fn len(&self) -> usize {
        self.ongoing.len() + self.upcoming.len() + self.completed.len() + self.unclassified.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn has_unclassified(&self) -> bool {
        !self.unclassified.is_empty()
    }
}

/// Group trips by their stored `status`. Status is read, never recomputed
/// from dates. Relative input order is kept inside each bucket.
pub fn derive_status_groups<'a, I>(trips: I) -> StatusGroups<'a>
where
    I: IntoIterator<Item = &'a Trip>,
{
    let mut groups = StatusGroups::default();
    for trip in trips {
        match trip.status {
            TripStatus::Ongoing => groups.ongoing.push(trip),
            TripStatus::Upcoming => groups.upcoming.push(trip),
            TripStatus::Completed => groups.completed.push(trip),
            TripStatus::Unrecognized(_) => groups.unclassified.push(trip),
        }
    }
    groups
}

// ---------------------------------------------------------------------------
// Ranking
// ---------------------------------------------------------------------------

/// A key with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ranked<K> {
    pub key: K,
    pub count: usize,
}

/// Count `key_of(item)` occurrences and return the `top_n` most frequent keys.
///
/// Ties keep first-seen order. `top_n <= 0` yields an empty result; a `top_n`
/// larger than the number of distinct keys returns every key.
pub fn rank_by_frequency<T, K, F>(items: &[T], key_of: F, top_n: i64) -> Vec<Ranked<K>>
where
    K: Eq + Hash + Clone,
    F: Fn(&T) -> K,
{
    if top_n <= 0 {
        return Vec::new();
    }
    let mut ranked: Vec<Ranked<K>> = Vec::new();
    let mut index: HashMap<K, usize> = HashMap::new();
    for item in items {
        let key = key_of(item);
        match index.get(&key) {
            Some(&i) => ranked[i].count += 1,
            None => {
                index.insert(key.clone(), ranked.len());
                ranked.push(Ranked { key, count: 1 });
            }
        }
    }
    // sort_by is stable, so equal counts stay in first-seen order
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(clamp_limit(top_n));
    ranked
}

/// The `limit` items with the largest `key_of` value, newest first.
///
/// Ties keep input order. `limit <= 0` yields an empty result.
pub fn recent<T, K, F>(items: &[T], key_of: F, limit: i64) -> Vec<&T>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    if limit <= 0 {
        return Vec::new();
    }
    let mut sorted: Vec<&T> = items.iter().collect();
    sorted.sort_by(|a, b| key_of(b).cmp(&key_of(a)));
    sorted.truncate(clamp_limit(limit));
    sorted
}

fn clamp_limit(n: i64) -> usize {
    usize::try_from(n).unwrap_or(usize::MAX)
}

// ---------------------------------------------------------------------------
// Admin statistics
// ---------------------------------------------------------------------------

/// Site-wide counters shown on the admin screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdminStats {
    pub total_users: usize,
    pub total_trips: usize,
    pub upcoming_trips: usize,
    pub ongoing_trips: usize,
    pub completed_trips: usize,
    /// Trips with an unrecognized status.
    pub other_trips: usize,
    pub total_budget: Decimal,
}

pub fn admin_stats(total_users: usize, trips: &[Trip]) -> AdminStats {
    let groups = derive_status_groups(trips);
    AdminStats {
        total_users,
        total_trips: trips.len(),
        upcoming_trips: groups.upcoming.len(),
        ongoing_trips: groups.ongoing.len(),
        completed_trips: groups.completed.len(),
        other_trips: groups.unclassified.len(),
        total_budget: trips
            .iter()
            .fold(Decimal::ZERO, |sum, t| sum + t.total_budget),
    }
}

/// `part / whole` as a percentage; 0 when `whole` is 0.
pub fn percent_of(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}

// ---------------------------------------------------------------------------
// Calendar
// ---------------------------------------------------------------------------

pub fn trips_on_date(trips: &[Trip], date: NaiveDate) -> Vec<&Trip> {
    trips.iter().filter(|t| t.covers(date)).collect()
}

pub fn sections_on_date(sections: &[ItinerarySection], date: NaiveDate) -> Vec<&ItinerarySection> {
    sections.iter().filter(|s| s.covers(date)).collect()
}

/// Whether any trip or section spans `date`.
pub fn has_event_on(trips: &[Trip], sections: &[ItinerarySection], date: NaiveDate) -> bool {
    trips.iter().any(|t| t.covers(date)) || sections.iter().any(|s| s.covers(date))
}
