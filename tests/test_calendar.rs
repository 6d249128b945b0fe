//! Calendar lookup tests.

mod common;

use common::date;
use globetrotter_sdk::models::Trip;
use globetrotter_sdk::queries::CalendarQuery;
use globetrotter_sdk::GlobetrotterError;

#[test]
fn events_on_includes_trip_and_section() {
    let data = common::sample_dataset();
    let cal = CalendarQuery::new(&data);
    let events = cal.events_on("user-ada", date(2024, 6, 6));
    assert_eq!(events.trips.len(), 1);
    assert_eq!(events.sections.len(), 1);
    assert_eq!(events.sections[0].title, "Rome");
}

#[test]
fn events_on_ignores_other_owners() {
    let data = common::sample_dataset();
    let cal = CalendarQuery::new(&data);
    assert!(cal.events_on("user-bob", date(2024, 6, 6)).is_empty());
}

#[test]
fn busy_days_in_month() {
    let data = common::sample_dataset();
    let cal = CalendarQuery::new(&data);
    let days = cal.busy_days("user-ada", 2024, 3).unwrap();
    assert_eq!(days.len(), 11);
    assert_eq!(days[0], date(2024, 3, 20));
    assert_eq!(days[10], date(2024, 3, 30));
}

#[test]
fn busy_days_rejects_invalid_month() {
    let data = common::sample_dataset();
    let cal = CalendarQuery::new(&data);
    assert!(matches!(
        cal.busy_days("user-ada", 2024, 13),
        Err(GlobetrotterError::InvalidArgument(_))
    ));
}

fn ids(trips: Vec<&Trip>) -> Vec<&str> {
    trips.into_iter().map(|t| t.id.as_str()).collect()
}

#[test]
fn upcoming_keeps_trips_not_yet_ended() {
    let data = common::sample_dataset();
    let cal = CalendarQuery::new(&data);

    assert_eq!(
        ids(cal.upcoming("user-ada", date(2024, 3, 30), 5)),
        vec!["trip-europe", "trip-tokyo"]
    );
    assert_eq!(
        ids(cal.upcoming("user-ada", date(2024, 3, 31), 5)),
        vec!["trip-europe"]
    );
    assert!(cal.upcoming("user-ada", date(2024, 6, 15), 5).is_empty());
}

#[test]
fn upcoming_respects_limit_and_owner() {
    let data = common::sample_dataset();
    let cal = CalendarQuery::new(&data);
    let today = date(2024, 1, 1);

    assert_eq!(cal.upcoming("user-ada", today, 1).len(), 1);
    assert!(cal.upcoming("user-ada", today, 0).is_empty());
    assert!(cal.upcoming("user-ada", today, -2).is_empty());
    assert!(cal
        .upcoming_trips("user-bob", today)
        .iter()
        .all(|t| t.user_id == "user-bob"));
}
