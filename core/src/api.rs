//! The executing client: build, fetch, and parse in one call.
//!
//! # Design
//! [`MealApi`] owns a [`MealClient`] for request building / response
//! parsing and a [`Transport`] for the blocking round-trip; every operation
//! is exactly one GET. The `try_*` methods surface [`ApiError`]. The plain
//! methods keep the historical contract of the upstream client: every
//! failure mode — transport, decoding, or simply no data — flattens into an
//! absent result, and callers never see a half-parsed value.

use crate::client::{MealClient, DEFAULT_BASE_URL};
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{Category, Ingredient, Meal, MealSummary};

/// Synchronous client for the recipe service.
///
/// Stateless between calls; the only shared resource is the transport
/// agent, which is safe to use from multiple threads.
#[derive(Clone)]
pub struct MealApi {
    client: MealClient,
    transport: Transport,
}

impl MealApi {
    /// Client against the public service.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Client against an alternate host, e.g. a local mock server.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            client: MealClient::new(base_url),
            transport: Transport::new(),
        }
    }

    /// Search meals by name.
    pub fn try_search(&self, name: &str) -> Result<Vec<Meal>, ApiError> {
        let response = self.transport.get(&self.client.build_search(name))?;
        self.client.parse_meals(response)
    }

    /// Search meals whose name starts with a letter.
    pub fn try_search_by_letter(&self, letter: char) -> Result<Vec<Meal>, ApiError> {
        let response = self
            .transport
            .get(&self.client.build_search_by_letter(letter))?;
        self.client.parse_meals(response)
    }

    /// Look up one meal by its numeric id.
    pub fn try_lookup(&self, id: u32) -> Result<Meal, ApiError> {
        let response = self.transport.get(&self.client.build_lookup(id))?;
        self.client.parse_meal(response)
    }

    /// Fetch a meal chosen by the service.
    pub fn try_random(&self) -> Result<Meal, ApiError> {
        let response = self.transport.get(&self.client.build_random())?;
        self.client.parse_meal(response)
    }

    /// Fetch the full category table.
    pub fn try_categories(&self) -> Result<Vec<Category>, ApiError> {
        let response = self.transport.get(&self.client.build_categories())?;
        self.client.parse_categories(response)
    }

    /// Meal summaries containing an ingredient.
    pub fn try_filter_by_ingredient(&self, ingredient: &str) -> Result<Vec<MealSummary>, ApiError> {
        let response = self
            .transport
            .get(&self.client.build_filter_by_ingredient(ingredient))?;
        self.client.parse_meal_summaries(response)
    }

    /// Meal summaries from an area.
    pub fn try_filter_by_area(&self, area: &str) -> Result<Vec<MealSummary>, ApiError> {
        let response = self.transport.get(&self.client.build_filter_by_area(area))?;
        self.client.parse_meal_summaries(response)
    }

    /// Meal summaries in a category.
    pub fn try_filter_by_category(&self, category: &str) -> Result<Vec<MealSummary>, ApiError> {
        let response = self
            .transport
            .get(&self.client.build_filter_by_category(category))?;
        self.client.parse_meal_summaries(response)
    }

    /// Category names only.
    pub fn try_list_categories(&self) -> Result<Vec<String>, ApiError> {
        let response = self.transport.get(&self.client.build_list_categories())?;
        self.client.parse_category_names(response)
    }

    /// The ingredient table.
    pub fn try_list_ingredients(&self) -> Result<Vec<Ingredient>, ApiError> {
        let response = self.transport.get(&self.client.build_list_ingredients())?;
        self.client.parse_ingredients(response)
    }

    /// Area names only.
    pub fn try_list_areas(&self) -> Result<Vec<String>, ApiError> {
        let response = self.transport.get(&self.client.build_list_areas())?;
        self.client.parse_area_names(response)
    }

    // Flattened variants: the upstream client's absent-or-value contract.
    // A returned list is never empty; "nothing found" and "request failed"
    // are both `None`.

    pub fn search(&self, name: &str) -> Option<Vec<Meal>> {
        self.try_search(name).ok()
    }

    pub fn search_by_letter(&self, letter: char) -> Option<Vec<Meal>> {
        self.try_search_by_letter(letter).ok()
    }

    pub fn lookup(&self, id: u32) -> Option<Meal> {
        self.try_lookup(id).ok()
    }

    pub fn random(&self) -> Option<Meal> {
        self.try_random().ok()
    }

    pub fn categories(&self) -> Option<Vec<Category>> {
        self.try_categories().ok()
    }

    pub fn filter_by_ingredient(&self, ingredient: &str) -> Option<Vec<MealSummary>> {
        self.try_filter_by_ingredient(ingredient).ok()
    }

    pub fn filter_by_area(&self, area: &str) -> Option<Vec<MealSummary>> {
        self.try_filter_by_area(area).ok()
    }

    pub fn filter_by_category(&self, category: &str) -> Option<Vec<MealSummary>> {
        self.try_filter_by_category(category).ok()
    }

    pub fn list_categories(&self) -> Option<Vec<String>> {
        self.try_list_categories().ok()
    }

    pub fn list_ingredients(&self) -> Option<Vec<Ingredient>> {
        self.try_list_ingredients().ok()
    }

    pub fn list_areas(&self) -> Option<Vec<String>> {
        self.try_list_areas().ok()
    }
}

impl Default for MealApi {
    fn default() -> Self {
        Self::new()
    }
}
