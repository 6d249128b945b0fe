//! Community feed of trips their owners chose to share.

use serde::Serialize;

use crate::aggregate;
use crate::config;
use crate::dataset::Dataset;
use crate::models::{Profile, Trip};

/// A trip together with its owner's profile, when the profile is known.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthoredTrip<'a> {
    pub trip: &'a Trip,
    pub author: Option<&'a Profile>,
}

impl AuthoredTrip<'_> {
    /// Owner's display name, empty when the profile is missing.
    pub fn author_name(&self) -> String {
        self.author.map(Profile::full_name).unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// CommunityQuery
// ---------------------------------------------------------------------------

/// Query interface for public trips.
pub struct CommunityQuery<'a> {
    data: &'a Dataset,
}

impl<'a> CommunityQuery<'a> {
    /// Create a new `CommunityQuery` bound to the given dataset.
    pub fn new(data: &'a Dataset) -> Self {
        Self { data }
    }

    /// The newest `limit` public trips with their authors.
    pub fn public_trips(&self, limit: i64) -> Vec<AuthoredTrip<'a>> {
        let public: Vec<&Trip> = self.data.trips().iter().filter(|t| t.is_public).collect();
        aggregate::recent(&public, |t| t.created_at, limit)
            .into_iter()
            .copied()
            .map(|trip| with_author(self.data, trip))
            .collect()
    }

    /// The community feed at its default length.
    pub fn feed(&self) -> Vec<AuthoredTrip<'a>> {
        self.public_trips(config::COMMUNITY_TRIPS)
    }
}

pub(crate) fn with_author<'a>(data: &'a Dataset, trip: &'a Trip) -> AuthoredTrip<'a> {
    AuthoredTrip {
        trip,
        author: data.profile(&trip.user_id),
    }
}
