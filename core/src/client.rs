//! Stateless request builder and response parser for the recipe API.
//!
//! # Design
//! `MealClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! [`HttpRequest`] and a `parse_*` method that consumes an [`HttpResponse`],
//! so URL construction and decoding can be exercised against canned bodies
//! without a socket. Every endpoint wraps its rows in the same envelope,
//! `{"<key>": [row] | null}`, with key `meals` or `categories`; one generic
//! decoder handles all of them.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{Category, Ingredient, Meal, MealSummary};

/// Base URL of the public recipe service.
pub const DEFAULT_BASE_URL: &str = "https://themealdb.com/api/json/v1/1";

/// Characters escaped in free-text query parameters: everything outside the
/// RFC 3986 unreserved set.
const QUERY: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

fn encode(param: &str) -> String {
    utf8_percent_encode(param, QUERY).to_string()
}

/// Synchronous, stateless request builder and response parser for the
/// recipe API.
///
/// Builds [`HttpRequest`] values and parses [`HttpResponse`] values without
/// touching the network. `MealApi` (or a test) executes the HTTP round-trip
/// between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct MealClient {
    base_url: String,
}

impl MealClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `search.php?s=` — meals whose name matches a free-text term.
    pub fn build_search(&self, name: &str) -> HttpRequest {
        HttpRequest {
            url: format!("{}/search.php?s={}", self.base_url, encode(name)),
        }
    }

    /// `search.php?f=` — meals whose name starts with a letter.
    pub fn build_search_by_letter(&self, letter: char) -> HttpRequest {
        HttpRequest {
            url: format!("{}/search.php?f={letter}", self.base_url),
        }
    }

    /// `lookup.php?i=` — one meal by numeric id.
    pub fn build_lookup(&self, id: u32) -> HttpRequest {
        HttpRequest {
            url: format!("{}/lookup.php?i={id}", self.base_url),
        }
    }

    /// `random.php` — one meal chosen by the service.
    pub fn build_random(&self) -> HttpRequest {
        HttpRequest {
            url: format!("{}/random.php", self.base_url),
        }
    }

    /// `categories.php` — the full category table.
    pub fn build_categories(&self) -> HttpRequest {
        HttpRequest {
            url: format!("{}/categories.php", self.base_url),
        }
    }

    /// `filter.php?i=` — meal summaries containing an ingredient.
    pub fn build_filter_by_ingredient(&self, ingredient: &str) -> HttpRequest {
        HttpRequest {
            url: format!("{}/filter.php?i={}", self.base_url, encode(ingredient)),
        }
    }

    /// `filter.php?a=` — meal summaries from an area.
    pub fn build_filter_by_area(&self, area: &str) -> HttpRequest {
        HttpRequest {
            url: format!("{}/filter.php?a={}", self.base_url, encode(area)),
        }
    }

    /// `filter.php?c=` — meal summaries in a category.
    pub fn build_filter_by_category(&self, category: &str) -> HttpRequest {
        HttpRequest {
            url: format!("{}/filter.php?c={}", self.base_url, encode(category)),
        }
    }

    /// `list.php?c=list` — category names only.
    pub fn build_list_categories(&self) -> HttpRequest {
        HttpRequest {
            url: format!("{}/list.php?c=list", self.base_url),
        }
    }

    /// `list.php?i=list` — the ingredient table.
    pub fn build_list_ingredients(&self) -> HttpRequest {
        HttpRequest {
            url: format!("{}/list.php?i=list", self.base_url),
        }
    }

    /// `list.php?a=list` — area names only.
    pub fn build_list_areas(&self) -> HttpRequest {
        HttpRequest {
            url: format!("{}/list.php?a=list", self.base_url),
        }
    }

    pub fn parse_meals(&self, response: HttpResponse) -> Result<Vec<Meal>, ApiError> {
        check_status(&response)?;
        decode_rows(&response.body, "meals")
    }

    /// Narrows the envelope to its first meal. `lookup.php` and
    /// `random.php` are expected to return exactly one row; extra rows are
    /// ignored rather than rejected.
    pub fn parse_meal(&self, response: HttpResponse) -> Result<Meal, ApiError> {
        self.parse_meals(response)?
            .into_iter()
            .next()
            .ok_or(ApiError::NotFound)
    }

    pub fn parse_categories(&self, response: HttpResponse) -> Result<Vec<Category>, ApiError> {
        check_status(&response)?;
        decode_rows(&response.body, "categories")
    }

    pub fn parse_meal_summaries(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<MealSummary>, ApiError> {
        check_status(&response)?;
        decode_rows(&response.body, "meals")
    }

    pub fn parse_category_names(&self, response: HttpResponse) -> Result<Vec<String>, ApiError> {
        check_status(&response)?;
        let rows: Vec<CategoryName> = decode_rows(&response.body, "meals")?;
        Ok(rows.into_iter().map(|row| row.name).collect())
    }

    pub fn parse_ingredients(&self, response: HttpResponse) -> Result<Vec<Ingredient>, ApiError> {
        check_status(&response)?;
        decode_rows(&response.body, "meals")
    }

    pub fn parse_area_names(&self, response: HttpResponse) -> Result<Vec<String>, ApiError> {
        check_status(&response)?;
        let rows: Vec<AreaName> = decode_rows(&response.body, "meals")?;
        Ok(rows.into_iter().map(|row| row.name).collect())
    }
}

/// Name-only row shapes used by the `list.php` endpoints.
#[derive(Deserialize)]
struct CategoryName {
    #[serde(rename = "strCategory")]
    name: String,
}

#[derive(Deserialize)]
struct AreaName {
    #[serde(rename = "strArea")]
    name: String,
}

/// Reject non-2xx responses, keeping the status and body for diagnosis.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}

/// Decode the service's envelope: a JSON object with a single `key` whose
/// value is either an array of rows or null. A missing key, a null, and an
/// empty array all mean "no data".
fn decode_rows<T: DeserializeOwned>(body: &str, key: &str) -> Result<Vec<T>, ApiError> {
    let mut root: Value =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    if !root.is_object() {
        return Err(ApiError::Decode("expected a JSON object envelope".to_string()));
    }
    let rows = match root.get_mut(key).map(Value::take) {
        None | Some(Value::Null) => return Err(ApiError::NotFound),
        Some(rows @ Value::Array(_)) => rows,
        Some(_) => {
            return Err(ApiError::Decode(format!("expected an array under {key:?}")));
        }
    };
    let rows: Vec<T> =
        serde_json::from_value(rows).map_err(|e| ApiError::Decode(e.to_string()))?;
    if rows.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(rows)
}
