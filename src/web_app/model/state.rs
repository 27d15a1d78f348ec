// web_app/model/state.rs - View state for the allergy checker page
//
// The page keeps one `ViewState` inside a signal. All transitions live here
// as plain methods so they can be unit tested without a reactive runtime.

use serde::{Deserialize, Serialize};

use super::title::title_from_url;
use super::{AllergyReport, DisplayMode, ProductSummary, SearchMode};

/// Request the page should send after a search bar submission
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    /// Look up products by name
    Search(String),
    /// Analyse one product directly
    Compute(ProductSummary),
}

/// Everything the allergy page renders from
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub search_mode: SearchMode,
    pub display_mode: DisplayMode,
    pub products: Vec<ProductSummary>,
    pub report: Option<AllergyReport>,
    pub current_product: Option<ProductSummary>,
    pub loading: bool,
    /// Raw failure text shown in the error dialog
    pub error: Option<String>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a request as in flight
    ///
    /// Returns `false` without touching anything if one already is.
    pub fn begin_request(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        self.error = None;
        true
    }

    pub fn set_search_mode(&mut self, mode: SearchMode) {
        self.search_mode = mode;
    }

    /// Interpret search bar input according to the current search mode
    pub fn submit(&mut self, input: &str) -> Option<Submission> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        match self.search_mode {
            SearchMode::Query => Some(Submission::Search(input.to_string())),
            SearchMode::Filter => {
                let product = ProductSummary {
                    brand: String::new(),
                    title: title_from_url(input),
                    url: input.to_string(),
                };
                self.current_product = Some(product.clone());
                Some(Submission::Compute(product))
            }
        }
    }

    /// Start the request for a search bar submission
    ///
    /// Blank input and submissions while a request is in flight yield `None`
    /// and leave the state untouched.
    pub fn start_submission(&mut self, input: &str) -> Option<Submission> {
        if input.trim().is_empty() || !self.begin_request() {
            return None;
        }
        self.submit(input)
    }

    /// Remember which listed product is being analysed
    pub fn select_product(&mut self, product: ProductSummary) {
        self.current_product = Some(product);
    }

    pub fn apply_search(&mut self, products: Vec<ProductSummary>) {
        self.products = products;
        self.display_mode = DisplayMode::ProductList;
        self.loading = false;
    }

    pub fn apply_report(&mut self, report: AllergyReport) {
        self.current_product = Some(report.product.clone());
        self.report = Some(report);
        self.display_mode = DisplayMode::AllergyResult;
        self.loading = false;
    }

    /// Record a failed request; whatever was on screen stays there
    pub fn fail(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn back_to_products(&mut self) {
        self.display_mode = DisplayMode::ProductList;
    }

    pub fn showing_products(&self) -> bool {
        self.display_mode == DisplayMode::ProductList
    }

    pub fn showing_allergies(&self) -> bool {
        self.display_mode == DisplayMode::AllergyResult
    }
}
