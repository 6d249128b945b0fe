//! Query modules for the GlobeTrotter SDK.
//!
//! Each module provides a query struct that borrows from a
//! [`Dataset`](crate::dataset::Dataset) and exposes read-only methods over its
//! validated rows. Budget and ranking math is delegated to
//! [`aggregate`](crate::aggregate).

pub mod analytics;
pub mod calendar;
pub mod catalog;
pub mod community;
pub mod itinerary;
pub mod trips;

pub use analytics::{AdminOverview, AnalyticsQuery, StatusShare};
pub use calendar::{CalendarQuery, DayEvents};
pub use catalog::CatalogQuery;
pub use community::{AuthoredTrip, CommunityQuery};
pub use itinerary::{ItineraryQuery, SectionWithActivities};
pub use trips::TripQuery;
