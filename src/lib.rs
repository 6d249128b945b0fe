//! GlobeTrotter SDK for Rust.
//!
//! Reads exported GlobeTrotter tables (trips, itinerary sections, activities,
//! profiles, and the city catalog), validates them once at the boundary, and
//! answers itinerary, budget, and statistics questions in-process.
//!
//! The budget and ranking math lives in [`aggregate`] as pure functions that
//! can be used on their own with rows fetched from anywhere.
//!
//! # Quick start
//!
//! ```no_run
//! use globetrotter_sdk::GlobetrotterSdk;
//!
//! let sdk = GlobetrotterSdk::builder().data_dir("./export").build().unwrap();
//!
//! // Budget for one trip
//! let budget = sdk.itinerary().budget("trip-1").unwrap();
//! println!("remaining: {}", budget.remaining);
//!
//! // Admin leaderboard
//! let top = sdk.analytics().popular_destinations(5);
//! ```

pub mod aggregate;
pub mod config;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod loader;
pub mod models;
pub mod queries;

pub use dataset::{Dataset, Tables};
pub use error::{GlobetrotterError, Result};
pub use filter::{TripFilter, TripOrder};
pub use loader::SnapshotLoader;

use std::fmt;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// GlobetrotterSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`GlobetrotterSdk`] instance.
///
/// Use [`GlobetrotterSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](GlobetrotterSdkBuilder::build) to load the data.
#[derive(Default)]
pub struct GlobetrotterSdkBuilder {
    data_dir: Option<PathBuf>,
}

impl GlobetrotterSdkBuilder {
    /// Set the directory holding the table exports.
    ///
    /// If not set, the platform-appropriate default data directory is used
    /// (e.g. `~/.local/share/globetrotter-sdk` on Linux).
    pub fn data_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.data_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Load and validate every table.
    ///
    /// Fails on the first malformed or invalid record.
    pub fn build(self) -> Result<GlobetrotterSdk> {
        let loader = SnapshotLoader::new(self.data_dir);
        let data = Dataset::load(&loader)?;
        Ok(GlobetrotterSdk {
            data,
            source: Some(loader.data_dir),
        })
    }
}

// ---------------------------------------------------------------------------
// GlobetrotterSdk
// ---------------------------------------------------------------------------

/// The main entry point for the GlobeTrotter SDK.
///
/// Owns a validated [`Dataset`] and exposes domain-specific query interfaces
/// as lightweight borrowing wrappers.
pub struct GlobetrotterSdk {
    data: Dataset,
    source: Option<PathBuf>,
}

impl GlobetrotterSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> GlobetrotterSdkBuilder {
        GlobetrotterSdkBuilder::default()
    }

    /// Wrap rows that were already fetched and validated.
    pub fn from_dataset(data: Dataset) -> Self {
        Self { data, source: None }
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the trip query interface.
    pub fn trips(&self) -> queries::trips::TripQuery<'_> {
        queries::trips::TripQuery::new(&self.data)
    }

    /// Access the itinerary and budget query interface.
    pub fn itinerary(&self) -> queries::itinerary::ItineraryQuery<'_> {
        queries::itinerary::ItineraryQuery::new(&self.data)
    }

    /// Access the city and activity-suggestion catalog.
    pub fn catalog(&self) -> queries::catalog::CatalogQuery<'_> {
        queries::catalog::CatalogQuery::new(&self.data)
    }

    /// Access the public trip feed.
    pub fn community(&self) -> queries::community::CommunityQuery<'_> {
        queries::community::CommunityQuery::new(&self.data)
    }

    /// Access site-wide statistics.
    pub fn analytics(&self) -> queries::analytics::AnalyticsQuery<'_> {
        queries::analytics::AnalyticsQuery::new(&self.data)
    }

    /// Access calendar lookups.
    pub fn calendar(&self) -> queries::calendar::CalendarQuery<'_> {
        queries::calendar::CalendarQuery::new(&self.data)
    }

    /// Return a reference to the underlying [`Dataset`].
    pub fn dataset(&self) -> &Dataset {
        &self.data
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for GlobetrotterSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = self
            .source
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<memory>".to_string());
        write!(
            f,
            "GlobetrotterSdk(source={}, trips={}, sections={}, activities={})",
            source,
            self.data.trips().len(),
            self.data.sections().len(),
            self.data.activities().len()
        )
    }
}
