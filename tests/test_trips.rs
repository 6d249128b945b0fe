//! Trip query tests against the in-memory sample dataset.

mod common;

use globetrotter_sdk::queries::TripQuery;
use globetrotter_sdk::{GlobetrotterError, TripOrder};

#[test]
fn get_finds_trip() {
    let data = common::sample_dataset();
    let tq = TripQuery::new(&data);
    assert_eq!(tq.get("trip-tokyo").unwrap().name, "Tokyo Spring");
}

#[test]
fn get_unknown_trip_is_not_found() {
    let data = common::sample_dataset();
    let tq = TripQuery::new(&data);
    assert!(matches!(tq.get("nope"), Err(GlobetrotterError::NotFound(_))));
}

#[test]
fn for_owner_all_sorted_by_date() {
    let data = common::sample_dataset();
    let tq = TripQuery::new(&data);
    let trips = tq
        .for_owner("user-ada", Some("all"), TripOrder::StartDateDesc)
        .unwrap();
    let ids: Vec<&str> = trips.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["trip-europe", "trip-tokyo"]);
}

#[test]
fn for_owner_with_status_filter() {
    let data = common::sample_dataset();
    let tq = TripQuery::new(&data);
    let trips = tq
        .for_owner("user-bob", Some("Ongoing"), TripOrder::Name)
        .unwrap();
    assert_eq!(trips.len(), 1);
    assert_eq!(trips[0].id, "trip-paris");
}

#[test]
fn for_owner_rejects_unknown_status_filter() {
    let data = common::sample_dataset();
    let tq = TripQuery::new(&data);
    let err = tq
        .for_owner("user-bob", Some("cancelled"), TripOrder::Name)
        .unwrap_err();
    assert!(matches!(err, GlobetrotterError::UnrecognizedStatus(s) if s == "cancelled"));
}

#[test]
fn grouped_reports_unclassified_trips() {
    let data = common::sample_dataset();
    let tq = TripQuery::new(&data);
    let groups = tq.grouped("user-bob");
    assert_eq!(groups.ongoing.len(), 1);
    assert!(groups.upcoming.is_empty());
    assert_eq!(groups.unclassified.len(), 1);
    assert_eq!(groups.len(), 2);
}

#[test]
fn grouped_all_covers_every_trip() {
    let data = common::sample_dataset();
    let tq = TripQuery::new(&data);
    assert_eq!(tq.grouped_all().len(), data.trips().len());
}

#[test]
fn recent_returns_newest_first() {
    let data = common::sample_dataset();
    let tq = TripQuery::new(&data);
    let ids: Vec<&str> = tq.recent(3).iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["trip-paris", "trip-lisbon", "trip-europe"]);
}

#[test]
fn dashboard_recent_only_shows_the_owners_trips() {
    let data = common::sample_dataset();
    let tq = TripQuery::new(&data);

    let ada: Vec<&str> = tq
        .dashboard_recent("user-ada")
        .iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(ada, vec!["trip-europe", "trip-tokyo"]);

    let bob = tq.dashboard_recent("user-bob");
    assert!(bob.iter().all(|t| t.user_id == "user-bob"));
    assert_eq!(bob.len(), 2);
    assert!(tq.dashboard_recent("user-nobody").is_empty());
}

#[test]
fn count_by_owner() {
    let data = common::sample_dataset();
    let tq = TripQuery::new(&data);
    assert_eq!(tq.count(Some("user-ada")), 2);
    assert_eq!(tq.count(Some("user-nobody")), 0);
    assert_eq!(tq.count(None), 4);
}
