//! City and activity-suggestion catalog queries.

use crate::aggregate;
use crate::config;
use crate::dataset::Dataset;
use crate::models::{ActivitySuggestion, City};

// ---------------------------------------------------------------------------
// CatalogQuery
// ---------------------------------------------------------------------------

/// Query interface for the read-only destination catalog.
pub struct CatalogQuery<'a> {
    data: &'a Dataset,
}

impl<'a> CatalogQuery<'a> {
    /// Create a new `CatalogQuery` bound to the given dataset.
    pub fn new(data: &'a Dataset) -> Self {
        Self { data }
    }

    /// The `limit` most popular cities.
    pub fn top_cities(&self, limit: i64) -> Vec<&'a City> {
        aggregate::recent(self.data.cities(), |c| c.popularity_score, limit)
    }

    /// Cities featured on the dashboard.
    pub fn featured_cities(&self) -> Vec<&'a City> {
        self.top_cities(config::FEATURED_CITIES)
    }

    /// Cities whose name contains `query` (case-insensitive), most popular first.
    ///
    /// An empty query matches every city.
    pub fn search_cities(&self, query: &str) -> Vec<&'a City> {
        let needle = query.trim().to_lowercase();
        let mut found: Vec<&City> = self
            .data
            .cities()
            .iter()
            .filter(|c| needle.is_empty() || c.name.to_lowercase().contains(&needle))
            .collect();
        found.sort_by(|a, b| b.popularity_score.cmp(&a.popularity_score));
        found
    }

    /// Activity suggestions, most popular first.
    ///
    /// `category` of `None` or `"all"` keeps every suggestion; otherwise the
    /// match is case-insensitive.
    pub fn suggestions(&self, category: Option<&str>, limit: i64) -> Vec<&'a ActivitySuggestion> {
        let category = category.filter(|c| !c.eq_ignore_ascii_case("all"));
        let matching: Vec<&'a ActivitySuggestion> = self
            .data
            .suggestions()
            .iter()
            .filter(|s| match category {
                Some(wanted) => s
                    .category
                    .as_deref()
                    .map(|c| c.eq_ignore_ascii_case(wanted))
                    .unwrap_or(false),
                None => true,
            })
            .collect();
        aggregate::recent(&matching, |s| s.popularity, limit)
            .into_iter()
            .copied()
            .collect()
    }

    /// Ideas shown while creating a trip.
    pub fn trip_ideas(&self) -> Vec<&'a ActivitySuggestion> {
        self.suggestions(None, config::TRIP_SUGGESTIONS)
    }

    /// Suggestions attached to one city, most popular first.
    pub fn suggestions_for_city(&self, city_id: &str) -> Vec<&'a ActivitySuggestion> {
        let mut found: Vec<&ActivitySuggestion> = self
            .data
            .suggestions()
            .iter()
            .filter(|s| s.city_id.as_deref() == Some(city_id))
            .collect();
        found.sort_by(|a, b| b.popularity.cmp(&a.popularity));
        found
    }

    /// Resolve the city a suggestion belongs to.
    pub fn city_of(&self, suggestion: &ActivitySuggestion) -> Option<&'a City> {
        let city_id = suggestion.city_id.as_deref()?;
        self.data.cities().iter().find(|c| c.id == city_id)
    }
}
