use std::collections::HashMap;
use std::path::PathBuf;

use rust_decimal::Decimal;

pub const PROFILES: &str = "profiles";
pub const TRIPS: &str = "trips";
pub const SECTIONS: &str = "itinerary_sections";
pub const ACTIVITIES: &str = "activities";
pub const CITIES: &str = "cities";
pub const SUGGESTIONS: &str = "activity_suggestions";

// Default list sizes used by the dashboard, admin, and community screens.
pub const POPULAR_DESTINATIONS: i64 = 5;
pub const ADMIN_RECENT_TRIPS: i64 = 10;
pub const DASHBOARD_RECENT_TRIPS: i64 = 3;
pub const COMMUNITY_TRIPS: i64 = 20;
pub const FEATURED_CITIES: i64 = 8;
pub const TRIP_SUGGESTIONS: i64 = 6;
pub const CALENDAR_UPCOMING_TRIPS: i64 = 5;

/// Label used when an activity has no category.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Largest amount accepted for a budget, expense, or cost.
///
/// Keeps every sum over a dataset far below `Decimal::MAX`.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0);

pub fn table_files() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        (PROFILES, "profiles.json"),
        (TRIPS, "trips.json"),
        (SECTIONS, "itinerary_sections.json"),
        (ACTIVITIES, "activities.json"),
        // Catalog
        (CITIES, "cities.json"),
        (SUGGESTIONS, "activity_suggestions.json"),
    ])
}

pub fn default_data_dir() -> PathBuf {
    if let Some(data) = dirs::data_dir() {
        data.join("globetrotter-sdk")
    } else {
        PathBuf::from(".globetrotter-sdk-data")
    }
}
