use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// City: destination catalog entry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: String,
    pub name: String,
    pub country: String,
    pub image_url: Option<String>,
    #[serde(default)]
    pub popularity_score: i64,
    pub created_at: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// ActivitySuggestion: catalog activity a user can add to a section
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivitySuggestion {
    pub id: String,
    pub city_id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub estimated_cost: Decimal,
    #[serde(default)]
    pub popularity: i64,
    pub created_at: Option<DateTime<Utc>>,
}
