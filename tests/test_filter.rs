//! Unit tests for the in-memory TripFilter.

mod common;

use common::{date, sample_dataset};
use globetrotter_sdk::models::TripStatus;
use globetrotter_sdk::{TripFilter, TripOrder};

fn ids(trips: Vec<&globetrotter_sdk::models::Trip>) -> Vec<&str> {
    trips.into_iter().map(|t| t.id.as_str()).collect()
}

#[test]
fn empty_filter_keeps_input_order() {
    let data = sample_dataset();
    let all = TripFilter::new().apply(data.trips());
    assert_eq!(
        ids(all),
        vec!["trip-europe", "trip-tokyo", "trip-paris", "trip-lisbon"]
    );
}

#[test]
fn owner_and_status_combine_with_and() {
    let data = sample_dataset();
    let found = TripFilter::new()
        .owner("user-ada")
        .status(TripStatus::Completed)
        .apply(data.trips());
    assert_eq!(ids(found), vec!["trip-tokyo"]);
}

#[test]
fn public_only_excludes_private_trips() {
    let data = sample_dataset();
    let found = TripFilter::new().public_only().apply(data.trips());
    assert!(!ids(found).contains(&"trip-tokyo"));
}

#[test]
fn name_and_place_match_case_insensitively() {
    let data = sample_dataset();
    let by_name = TripFilter::new().name_like("SPRING").apply(data.trips());
    assert_eq!(ids(by_name), vec!["trip-tokyo"]);

    let by_place = TripFilter::new().place_like("par").apply(data.trips());
    assert_eq!(ids(by_place), vec!["trip-europe", "trip-paris"]);
}

#[test]
fn active_on_uses_inclusive_range() {
    let data = sample_dataset();
    let found = TripFilter::new()
        .active_on(date(2024, 5, 5))
        .apply(data.trips());
    assert_eq!(ids(found), vec!["trip-paris"]);
}

#[test]
fn ends_on_or_after_keeps_trips_ending_that_day() {
    let data = sample_dataset();
    let found = TripFilter::new()
        .ends_on_or_after(date(2024, 6, 14))
        .apply(data.trips());
    assert_eq!(ids(found), vec!["trip-europe", "trip-lisbon"]);
}

#[test]
fn order_by_start_date_desc() {
    let data = sample_dataset();
    let found = TripFilter::new()
        .order_by(TripOrder::StartDateDesc)
        .apply(data.trips());
    assert_eq!(
        ids(found),
        vec!["trip-lisbon", "trip-europe", "trip-paris", "trip-tokyo"]
    );
}

#[test]
fn order_by_name() {
    let data = sample_dataset();
    let found = TripFilter::new().order_by(TripOrder::Name).apply(data.trips());
    assert_eq!(
        ids(found),
        vec!["trip-lisbon", "trip-paris", "trip-europe", "trip-tokyo"]
    );
}

#[test]
fn created_at_ties_keep_input_order() {
    let data = sample_dataset();
    let found = TripFilter::new()
        .order_by(TripOrder::CreatedAtDesc)
        .limit(2)
        .apply(data.trips());
    assert_eq!(ids(found), vec!["trip-paris", "trip-lisbon"]);
}

#[test]
fn offset_skips_after_ordering() {
    let data = sample_dataset();
    let found = TripFilter::new()
        .order_by(TripOrder::StartDateAsc)
        .offset(1)
        .limit(2)
        .apply(data.trips());
    assert_eq!(ids(found), vec!["trip-paris", "trip-europe"]);
}
