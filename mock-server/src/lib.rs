use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Map, Value};
use tokio::net::TcpListener;

/// One fully populated recipe row in the fixture dataset.
pub struct MealRow {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub area: &'static str,
    pub instructions: &'static str,
    pub thumb: &'static str,
    pub tags: Option<&'static str>,
    pub youtube: &'static str,
    pub ingredients: &'static [(&'static str, &'static str)],
}

impl MealRow {
    /// Render to the wire shape, padding the fixed twenty ingredient
    /// columns with empty strings the way the live service does.
    fn to_json(&self) -> Value {
        let mut map = Map::new();
        map.insert("idMeal".to_string(), json!(self.id));
        map.insert("strMeal".to_string(), json!(self.name));
        map.insert("strCategory".to_string(), json!(self.category));
        map.insert("strArea".to_string(), json!(self.area));
        map.insert("strInstructions".to_string(), json!(self.instructions));
        map.insert("strMealThumb".to_string(), json!(self.thumb));
        map.insert("strTags".to_string(), json!(self.tags));
        map.insert("strYoutube".to_string(), json!(self.youtube));
        map.insert("strSource".to_string(), Value::Null);
        for i in 1..=20 {
            let (ingredient, measure) = self.ingredients.get(i - 1).copied().unwrap_or(("", ""));
            map.insert(format!("strIngredient{i}"), json!(ingredient));
            map.insert(format!("strMeasure{i}"), json!(measure));
        }
        Value::Object(map)
    }

    fn to_summary(&self) -> Value {
        json!({
            "strMeal": self.name,
            "strMealThumb": self.thumb,
            "idMeal": self.id,
        })
    }

    fn has_ingredient(&self, name: &str) -> bool {
        self.ingredients
            .iter()
            .any(|(ingredient, _)| ingredient.eq_ignore_ascii_case(name))
    }
}

#[derive(Serialize)]
pub struct CategoryRow {
    #[serde(rename = "idCategory")]
    pub id: &'static str,
    #[serde(rename = "strCategory")]
    pub name: &'static str,
    #[serde(rename = "strCategoryThumb")]
    pub thumb: &'static str,
    #[serde(rename = "strCategoryDescription")]
    pub description: &'static str,
}

#[derive(Serialize)]
pub struct IngredientRow {
    #[serde(rename = "idIngredient")]
    pub id: &'static str,
    #[serde(rename = "strIngredient")]
    pub name: &'static str,
    #[serde(rename = "strDescription")]
    pub description: Option<&'static str>,
    #[serde(rename = "strType")]
    pub kind: Option<&'static str>,
}

/// The read-only fixture dataset served by every endpoint.
pub struct Dataset {
    pub meals: Vec<MealRow>,
    pub categories: Vec<CategoryRow>,
    pub ingredients: Vec<IngredientRow>,
    pub areas: Vec<&'static str>,
}

impl Dataset {
    pub fn sample() -> Self {
        Self {
            meals: vec![
                MealRow {
                    id: "52772",
                    name: "Teriyaki Chicken Casserole",
                    category: "Chicken",
                    area: "Japanese",
                    instructions: "Preheat oven to 350F. Combine soy sauce, water, brown sugar, \
                                   ginger and garlic in a saucepan and cover. Bring to a boil, \
                                   then mix in cornstarch and stir until thickened. Place chicken \
                                   in a baking dish, cover with sauce and bake 30 minutes. Serve \
                                   over rice with the vegetables.",
                    thumb: "https://www.themealdb.com/images/media/meals/wvpsxx1468256321.jpg",
                    tags: Some("Meat,Casserole"),
                    youtube: "https://www.youtube.com/watch?v=4aZr5hZXP_s",
                    ingredients: &[
                        ("soy sauce", "3/4 cup"),
                        ("water", "1/2 cup"),
                        ("brown sugar", "1/4 cup"),
                        ("ground ginger", "1/2 teaspoon"),
                        ("minced garlic", "1/2 teaspoon"),
                        ("cornstarch", "4 tablespoons"),
                        ("chicken breasts", "2"),
                        ("stir-fry vegetables", "1 (12 oz.) package"),
                        ("brown rice", "3 cups"),
                    ],
                },
                MealRow {
                    id: "52771",
                    name: "Spicy Arrabiata Penne",
                    category: "Vegetarian",
                    area: "Italian",
                    instructions: "Bring a large pot of water to a boil and cook the penne until \
                                   al dente. Fry the garlic and chilli in olive oil, add the \
                                   tomatoes and simmer. Toss the pasta in the sauce and finish \
                                   with parsley.",
                    thumb: "https://www.themealdb.com/images/media/meals/ustsqw1468250014.jpg",
                    tags: Some("Pasta,Spicy"),
                    youtube: "https://www.youtube.com/watch?v=1IszT_guI08",
                    ingredients: &[
                        ("penne rigate", "1 pound"),
                        ("olive oil", "1/4 cup"),
                        ("garlic", "3 cloves"),
                        ("chopped tomatoes", "1 tin"),
                        ("red chilli flakes", "1/2 teaspoon"),
                        ("italian seasoning", "1/2 teaspoon"),
                        ("basil", "6 leaves"),
                    ],
                },
                MealRow {
                    id: "52977",
                    name: "Corba",
                    category: "Side",
                    area: "Turkish",
                    instructions: "Pick through the lentils and rinse them. Saute the onion and \
                                   carrot, add the spices, then the lentils, stock and water. \
                                   Simmer for 20 minutes and blend until smooth.",
                    thumb: "https://www.themealdb.com/images/media/meals/58oia61564916529.jpg",
                    tags: Some("Soup"),
                    youtube: "https://www.youtube.com/watch?v=VVnZd8A84z4",
                    ingredients: &[
                        ("red lentils", "1 cup"),
                        ("onion", "1 large"),
                        ("carrots", "1 large"),
                        ("tomato puree", "1 tbs"),
                        ("cumin", "2 tsp"),
                        ("paprika", "1 tsp"),
                        ("vegetable stock", "4 cups"),
                    ],
                },
            ],
            categories: vec![
                CategoryRow {
                    id: "1",
                    name: "Beef",
                    thumb: "https://www.themealdb.com/images/category/beef.png",
                    description: "Beef is the culinary name for meat from cattle, particularly \
                                  skeletal muscle.",
                },
                CategoryRow {
                    id: "2",
                    name: "Chicken",
                    thumb: "https://www.themealdb.com/images/category/chicken.png",
                    description: "Chicken is a type of domesticated fowl and one of the most \
                                  common kinds of poultry in the world.",
                },
                CategoryRow {
                    id: "3",
                    name: "Dessert",
                    thumb: "https://www.themealdb.com/images/category/dessert.png",
                    description: "Dessert is a course that concludes a meal, usually consisting \
                                  of sweet foods.",
                },
            ],
            ingredients: vec![
                IngredientRow {
                    id: "1",
                    name: "Chicken",
                    description: Some("The chicken is a type of domesticated fowl."),
                    kind: None,
                },
                IngredientRow {
                    id: "3",
                    name: "Salmon",
                    description: Some("Salmon is the common name for several species of ray-finned fish."),
                    kind: None,
                },
                IngredientRow {
                    id: "9",
                    name: "Soy Sauce",
                    description: None,
                    kind: None,
                },
            ],
            areas: vec!["American", "British", "Italian", "Japanese", "Turkish"],
        }
    }
}

pub type Db = Arc<Dataset>;

pub fn app() -> Router {
    let db: Db = Arc::new(Dataset::sample());
    Router::new()
        .route("/api/json/v1/1/search.php", get(search))
        .route("/api/json/v1/1/lookup.php", get(lookup))
        .route("/api/json/v1/1/random.php", get(random))
        .route("/api/json/v1/1/categories.php", get(categories))
        .route("/api/json/v1/1/filter.php", get(filter))
        .route("/api/json/v1/1/list.php", get(list))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Wrap rows in the service's envelope. Like the live service, a query
/// with no matches answers `200` with a null list, never a 404.
fn envelope(key: &str, rows: Vec<Value>) -> Json<Value> {
    let inner = if rows.is_empty() {
        Value::Null
    } else {
        Value::Array(rows)
    };
    let mut map = Map::new();
    map.insert(key.to_string(), inner);
    Json(Value::Object(map))
}

async fn search(
    State(db): State<Db>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let rows = if let Some(name) = params.get("s") {
        let needle = name.to_lowercase();
        db.meals
            .iter()
            .filter(|meal| meal.name.to_lowercase().contains(&needle))
            .map(MealRow::to_json)
            .collect()
    } else if let Some(letter) = params.get("f") {
        let prefix = letter.to_lowercase();
        db.meals
            .iter()
            .filter(|meal| meal.name.to_lowercase().starts_with(&prefix))
            .map(MealRow::to_json)
            .collect()
    } else {
        Vec::new()
    };
    envelope("meals", rows)
}

async fn lookup(
    State(db): State<Db>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let rows = match params.get("i") {
        Some(id) => db
            .meals
            .iter()
            .filter(|meal| meal.id == id.as_str())
            .map(MealRow::to_json)
            .collect(),
        None => Vec::new(),
    };
    envelope("meals", rows)
}

// Deterministic so tests stay stable: always the first row.
async fn random(State(db): State<Db>) -> Json<Value> {
    let rows = db.meals.first().map(MealRow::to_json).into_iter().collect();
    envelope("meals", rows)
}

async fn categories(State(db): State<Db>) -> Json<Value> {
    let rows = db.categories.iter().map(|category| json!(category)).collect();
    envelope("categories", rows)
}

async fn filter(
    State(db): State<Db>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let rows = if let Some(ingredient) = params.get("i") {
        db.meals
            .iter()
            .filter(|meal| meal.has_ingredient(ingredient))
            .map(MealRow::to_summary)
            .collect()
    } else if let Some(area) = params.get("a") {
        db.meals
            .iter()
            .filter(|meal| meal.area.eq_ignore_ascii_case(area))
            .map(MealRow::to_summary)
            .collect()
    } else if let Some(category) = params.get("c") {
        db.meals
            .iter()
            .filter(|meal| meal.category.eq_ignore_ascii_case(category))
            .map(MealRow::to_summary)
            .collect()
    } else {
        Vec::new()
    };
    envelope("meals", rows)
}

async fn list(
    State(db): State<Db>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let wants = |key: &str| params.get(key).is_some_and(|value| value == "list");
    let rows = if wants("c") {
        db.categories
            .iter()
            .map(|category| json!({ "strCategory": category.name }))
            .collect()
    } else if wants("i") {
        db.ingredients
            .iter()
            .map(|ingredient| json!(ingredient))
            .collect()
    } else if wants("a") {
        db.areas
            .iter()
            .map(|area| json!({ "strArea": area }))
            .collect()
    } else {
        Vec::new()
    };
    envelope("meals", rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meal_row_pads_twenty_ingredient_columns() {
        let dataset = Dataset::sample();
        let row = dataset.meals[0].to_json();
        assert_eq!(row["strIngredient1"], "soy sauce");
        assert_eq!(row["strMeasure1"], "3/4 cup");
        assert_eq!(row["strIngredient20"], "");
        assert_eq!(row["strMeasure20"], "");
    }

    #[test]
    fn envelope_with_no_rows_is_null() {
        let Json(body) = envelope("meals", Vec::new());
        assert_eq!(body, json!({ "meals": null }));
    }

    #[test]
    fn envelope_with_rows_is_array() {
        let Json(body) = envelope("meals", vec![json!({"idMeal": "1"})]);
        assert_eq!(body["meals"][0]["idMeal"], "1");
    }

    #[test]
    fn sample_dataset_contains_the_teriyaki_casserole() {
        let dataset = Dataset::sample();
        assert!(dataset
            .meals
            .iter()
            .any(|meal| meal.id == "52772" && meal.name == "Teriyaki Chicken Casserole"));
    }
}
