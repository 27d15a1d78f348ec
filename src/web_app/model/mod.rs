// web_app/model/mod.rs - Shared data models for client and server
//
// These structs mirror the analysis backend's JSON contract and are passed
// between the browser and the server functions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod state;
pub mod title;

pub use state::{Submission, ViewState};

/// Text shown in place of the allergen list when the backend flags nothing
pub const NO_ALLERGIES_TEXT: &str = "No allergies found";

/// How the search bar input is interpreted
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchMode {
    #[default]
    Query,      // Product name, sent to the backend search endpoint
    Filter,     // Product page URL, sent straight to the compute endpoint
}

impl SearchMode {
    /// Placeholder text for the search input in this mode
    pub fn placeholder(&self) -> &'static str {
        match self {
            SearchMode::Query => "Search for a product...",
            SearchMode::Filter => "Paste a product page URL...",
        }
    }
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchMode::Query => write!(f, "Product name"),
            SearchMode::Filter => write!(f, "Product URL"),
        }
    }
}

/// Which panel is visible below the search bar
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayMode {
    #[default]
    ProductList,
    AllergyResult,
}

/// Product summary returned by the backend search endpoint
///
/// `url` identifies the product and is the key sent to the compute endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSummary {
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub title: String,
    pub url: String,
}

/// Body of `POST /search`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub input: String,
}

/// Response of `POST /search`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub products: Vec<ProductSummary>,
}

/// Body of `POST /compute`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputeRequest {
    pub url: String,
}

/// Response of `POST /compute`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputeResponse {
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Allergens found for a product
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AllergyResult {
    /// Ingredient names in backend order, never empty
    Found(Vec<String>),
    NoneFound,
}

impl AllergyResult {
    pub fn from_allergies(allergies: Vec<String>) -> Self {
        if allergies.is_empty() {
            AllergyResult::NoneFound
        } else {
            AllergyResult::Found(allergies)
        }
    }

    /// Lines to render, substituting the sentinel text when nothing was found
    pub fn display_lines(&self) -> Vec<String> {
        match self {
            AllergyResult::Found(allergies) => allergies.clone(),
            AllergyResult::NoneFound => vec![NO_ALLERGIES_TEXT.to_string()],
        }
    }

    pub fn count(&self) -> usize {
        match self {
            AllergyResult::Found(allergies) => allergies.len(),
            AllergyResult::NoneFound => 0,
        }
    }
}

/// Result of analysing one product, as handed to the client
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AllergyReport {
    pub product: ProductSummary,
    pub result: AllergyResult,
    pub image: Option<String>,
    pub checked_at: DateTime<Utc>,
}

impl AllergyReport {
    pub fn new(product: ProductSummary, response: ComputeResponse) -> Self {
        Self {
            product,
            result: AllergyResult::from_allergies(response.allergies),
            // Blank image strings are treated like a missing image
            image: response.image.filter(|s| !s.trim().is_empty()),
            checked_at: Utc::now(),
        }
    }
}
