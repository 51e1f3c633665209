//! Domain records returned by the recipe service.
//!
//! # Design
//! Wire field names follow the service's `strXxx` / `idXxx` convention and
//! are mapped to Rust names with serde renames. The numbered
//! `strIngredient1..20` / `strMeasure1..20` columns on a meal are captured
//! through a flattened map and exposed as paired values via
//! [`Meal::ingredients`], which also keeps decoding tolerant of any extra
//! columns the service grows. These types are defined independently from
//! the mock-server crate; the integration tests catch schema drift.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Number of ingredient/measure column pairs on a meal record.
const INGREDIENT_SLOTS: usize = 20;

/// A full recipe record, as returned by `search.php`, `lookup.php`, and
/// `random.php`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strCategory")]
    pub category: Option<String>,
    #[serde(rename = "strArea")]
    pub area: Option<String>,
    #[serde(rename = "strInstructions")]
    pub instructions: Option<String>,
    #[serde(rename = "strMealThumb")]
    pub thumbnail: Option<String>,
    /// Comma-separated tag string as sent by the service; see
    /// [`Meal::tag_list`] for the split form.
    #[serde(rename = "strTags")]
    pub tags: Option<String>,
    #[serde(rename = "strYoutube")]
    pub youtube: Option<String>,
    #[serde(rename = "strSource")]
    pub source: Option<String>,
    /// Remaining wire columns, notably `strIngredient1..20` and
    /// `strMeasure1..20`. Kept as raw JSON so unexpected columns never
    /// break decoding.
    #[serde(flatten)]
    rest: BTreeMap<String, Value>,
}

impl Meal {
    /// Ingredient/measure pairs in slot order.
    ///
    /// The service pads its fixed columns with nulls and empty strings;
    /// those slots are skipped. A named ingredient with a blank measure is
    /// kept, with the measure as an empty string.
    pub fn ingredients(&self) -> Vec<(String, String)> {
        (1..=INGREDIENT_SLOTS)
            .filter_map(|i| {
                let name = self
                    .rest
                    .get(&format!("strIngredient{i}"))?
                    .as_str()?
                    .trim();
                if name.is_empty() {
                    return None;
                }
                let measure = self
                    .rest
                    .get(&format!("strMeasure{i}"))
                    .and_then(Value::as_str)
                    .unwrap_or("")
                    .trim()
                    .to_string();
                Some((name.to_string(), measure))
            })
            .collect()
    }

    /// The `strTags` value split on commas, with blank segments dropped.
    pub fn tag_list(&self) -> Vec<String> {
        self.tags
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// A recipe category row from `categories.php`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "idCategory")]
    pub id: String,
    #[serde(rename = "strCategory")]
    pub name: String,
    #[serde(rename = "strCategoryThumb")]
    pub thumbnail: Option<String>,
    #[serde(rename = "strCategoryDescription")]
    pub description: Option<String>,
}

/// The lightweight meal row returned by the `filter.php` endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealSummary {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb")]
    pub thumbnail: Option<String>,
}

/// An ingredient row from `list.php?i=list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(rename = "idIngredient")]
    pub id: String,
    #[serde(rename = "strIngredient")]
    pub name: String,
    #[serde(rename = "strDescription")]
    pub description: Option<String>,
    #[serde(rename = "strType")]
    pub kind: Option<String>,
}
