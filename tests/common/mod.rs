//! Shared test fixtures for the GlobeTrotter SDK integration tests.
//!
//! `sample_tables()` returns a small set of rows decoded from JSON the same way
//! exported tables are, and `sample_dataset()` ingests them.

#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, Utc};
use globetrotter_sdk::loader::decode_rows;
use globetrotter_sdk::{Dataset, GlobetrotterSdk, Tables};
use rust_decimal::Decimal;
use serde_json::{json, Value};

pub fn d(s: &str) -> Decimal {
    s.parse().unwrap()
}

pub fn date(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

pub fn ts(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

pub fn profiles_json() -> Value {
    json!([
        {
            "id": "user-ada",
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "ada@example.com",
            "phone": null,
            "city": "London",
            "country": "UK",
            "profile_photo_url": null,
            "is_admin": true,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        },
        {
            "id": "user-bob",
            "first_name": "Bob",
            "last_name": "Stone",
            "email": "bob@example.com",
            "phone": "555-0100",
            "city": null,
            "country": null,
            "profile_photo_url": "https://img.example.com/bob.png",
            "is_admin": false,
            "created_at": "2024-01-02T00:00:00Z",
            "updated_at": "2024-01-02T00:00:00Z"
        }
    ])
}

pub fn trips_json() -> Value {
    json!([
        {
            "id": "trip-europe",
            "user_id": "user-ada",
            "name": "Summer in Europe",
            "start_place": "Paris",
            "start_date": "2024-06-01",
            "end_date": "2024-06-14",
            "status": "upcoming",
            "total_budget": 500,
            "is_public": true,
            "created_at": "2024-01-10T09:00:00Z",
            "updated_at": "2024-01-10T09:00:00Z"
        },
        {
            "id": "trip-tokyo",
            "user_id": "user-ada",
            "name": "Tokyo Spring",
            "start_place": "Tokyo",
            "start_date": "2024-03-20",
            "end_date": "2024-03-30",
            "status": "completed",
            "total_budget": 1200.0,
            "is_public": false,
            "created_at": "2024-01-05T09:00:00Z",
            "updated_at": null
        },
        {
            "id": "trip-paris",
            "user_id": "user-bob",
            "name": "Paris Again",
            "start_place": "Paris",
            "start_date": "2024-05-01",
            "end_date": "2024-05-05",
            "status": "ongoing",
            "total_budget": "800.00",
            "is_public": true,
            "created_at": "2024-02-01T12:00:00Z",
            "updated_at": null
        },
        {
            "id": "trip-lisbon",
            "user_id": "user-bob",
            "name": "Lisbon Weekend",
            "start_place": "Lisbon",
            "start_date": "2024-07-10",
            "end_date": "2024-07-12",
            "status": "cancelled",
            "total_budget": 0,
            "is_public": true,
            "created_at": "2024-02-01T12:00:00Z",
            "updated_at": null
        }
    ])
}

pub fn sections_json() -> Value {
    json!([
        {
            "id": "sec-rome",
            "trip_id": "trip-europe",
            "title": "Rome",
            "start_date": "2024-06-06",
            "end_date": "2024-06-14",
            "budget": 250,
            "order_index": 1,
            "created_at": "2024-01-10T09:05:00Z"
        },
        {
            "id": "sec-paris",
            "trip_id": "trip-europe",
            "title": "Paris",
            "start_date": "2024-06-01",
            "end_date": "2024-06-05",
            "budget": 300,
            "order_index": 0,
            "created_at": "2024-01-10T09:04:00Z"
        },
        {
            "id": "sec-kyoto",
            "trip_id": "trip-tokyo",
            "title": "Kyoto",
            "start_date": "2024-03-20",
            "end_date": "2024-03-25",
            "budget": 400,
            "order_index": 0,
            "created_at": "2024-01-05T09:05:00Z"
        }
    ])
}

pub fn activities_json() -> Value {
    json!([
        {
            "id": "act-vatican",
            "section_id": "sec-rome",
            "name": "Vatican tour",
            "description": null,
            "expense": 394.25,
            "category": null,
            "order_index": 1,
            "created_at": null
        },
        {
            "id": "act-louvre",
            "section_id": "sec-paris",
            "name": "Louvre",
            "description": "Morning visit",
            "expense": 45.50,
            "category": "Culture",
            "order_index": 0,
            "created_at": null
        },
        {
            "id": "act-cruise",
            "section_id": "sec-paris",
            "name": "Dinner cruise",
            "description": null,
            "expense": "120.00",
            "category": "Food",
            "order_index": 1,
            "created_at": null
        },
        {
            "id": "act-colosseum",
            "section_id": "sec-rome",
            "name": "Colosseum",
            "description": null,
            "expense": 60.25,
            "category": "Sightseeing",
            "order_index": 0,
            "created_at": null
        },
        {
            "id": "act-temple",
            "section_id": "sec-kyoto",
            "name": "Temple walk",
            "description": null,
            "expense": 30,
            "category": "Culture",
            "order_index": 0,
            "created_at": null
        }
    ])
}

pub fn cities_json() -> Value {
    json!([
        {
            "id": "city-lisbon",
            "name": "Lisbon",
            "country": "Portugal",
            "image_url": null,
            "popularity_score": 70,
            "created_at": null
        },
        {
            "id": "city-paris",
            "name": "Paris",
            "country": "France",
            "image_url": "https://img.example.com/paris.jpg",
            "popularity_score": 95,
            "created_at": null
        },
        {
            "id": "city-parikia",
            "name": "Parikia",
            "country": "Greece",
            "image_url": null,
            "popularity_score": 40,
            "created_at": null
        },
        {
            "id": "city-tokyo",
            "name": "Tokyo",
            "country": "Japan",
            "image_url": null,
            "popularity_score": 90,
            "created_at": null
        }
    ])
}

pub fn suggestions_json() -> Value {
    json!([
        {
            "id": "sug-eiffel",
            "city_id": "city-paris",
            "name": "Eiffel Tower",
            "description": null,
            "category": "Sightseeing",
            "estimated_cost": 25,
            "popularity": 100,
            "created_at": null
        },
        {
            "id": "sug-louvre",
            "city_id": "city-paris",
            "name": "Louvre",
            "description": null,
            "category": "Culture",
            "estimated_cost": 17,
            "popularity": 90,
            "created_at": null
        },
        {
            "id": "sug-sushi",
            "city_id": "city-tokyo",
            "name": "Sushi class",
            "description": null,
            "category": "Food",
            "estimated_cost": 80,
            "popularity": 70,
            "created_at": null
        },
        {
            "id": "sug-balloon",
            "city_id": null,
            "name": "Hot air balloon",
            "description": null,
            "category": "Adventure",
            "estimated_cost": 200,
            "popularity": 95,
            "created_at": null
        }
    ])
}

pub fn sample_tables() -> Tables {
    Tables {
        profiles: decode_rows("profiles", profiles_json()).unwrap(),
        trips: decode_rows("trips", trips_json()).unwrap(),
        sections: decode_rows("itinerary_sections", sections_json()).unwrap(),
        activities: decode_rows("activities", activities_json()).unwrap(),
        cities: decode_rows("cities", cities_json()).unwrap(),
        suggestions: decode_rows("activity_suggestions", suggestions_json()).unwrap(),
    }
}

pub fn sample_dataset() -> Dataset {
    Dataset::ingest(sample_tables()).unwrap()
}

pub fn sample_sdk() -> GlobetrotterSdk {
    GlobetrotterSdk::from_dataset(sample_dataset())
}
