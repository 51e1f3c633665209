//! Verify parse methods against canned response bodies stored in
//! `tests/fixtures/`.
//!
//! These cover everything that doesn't need a socket: the envelope's
//! absence signals, first-row narrowing, name extraction, and full decoding
//! of a realistic lookup record.

use mealdb_core::{ApiError, HttpResponse, MealClient};

fn client() -> MealClient {
    MealClient::new("http://localhost:3000")
}

fn ok(body: &str) -> HttpResponse {
    HttpResponse {
        status: 200,
        body: body.to_string(),
    }
}

#[test]
fn lookup_fixture_decodes_the_full_record() {
    let body = include_str!("fixtures/lookup_teriyaki.json");
    let meal = client().parse_meal(ok(body)).unwrap();

    assert_eq!(meal.id, "52772");
    assert_eq!(meal.name, "Teriyaki Chicken Casserole");
    assert_eq!(meal.category.as_deref(), Some("Chicken"));
    assert_eq!(meal.area.as_deref(), Some("Japanese"));
    assert_eq!(meal.tag_list(), vec!["Meat", "Casserole"]);

    let ingredients = meal.ingredients();
    assert_eq!(ingredients.len(), 9);
    assert_eq!(ingredients[0], ("soy sauce".to_string(), "3/4 cup".to_string()));
    assert_eq!(ingredients[8], ("brown rice".to_string(), "3 cups".to_string()));
}

#[test]
fn search_fixture_names_all_contain_the_term() {
    let body = include_str!("fixtures/search_chicken.json");
    let meals = client().parse_meals(ok(body)).unwrap();

    assert_eq!(meals.len(), 2);
    for meal in &meals {
        assert!(
            meal.name.to_lowercase().contains("chicken"),
            "unexpected result: {}",
            meal.name
        );
    }
}

#[test]
fn category_names_fixture_yields_plain_names() {
    let names = client()
        .parse_category_names(ok(
            r#"{"meals":[{"strCategory":"Beef"},{"strCategory":"Chicken"}]}"#,
        ))
        .unwrap();
    assert_eq!(names, vec!["Beef", "Chicken"]);
}

#[test]
fn listings_reparse_identically() {
    let body = include_str!("fixtures/categories.json");
    let first = client().parse_categories(ok(body)).unwrap();
    let second = client().parse_categories(ok(body)).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 3);

    let areas = r#"{"meals":[{"strArea":"Japanese"},{"strArea":"Turkish"}]}"#;
    assert_eq!(
        client().parse_area_names(ok(areas)).unwrap(),
        client().parse_area_names(ok(areas)).unwrap()
    );
}

#[test]
fn null_envelope_is_absent_for_every_parser() {
    let c = client();
    let null_meals = r#"{"meals":null}"#;

    assert!(matches!(c.parse_meals(ok(null_meals)), Err(ApiError::NotFound)));
    assert!(matches!(c.parse_meal(ok(null_meals)), Err(ApiError::NotFound)));
    assert!(matches!(
        c.parse_meal_summaries(ok(null_meals)),
        Err(ApiError::NotFound)
    ));
    assert!(matches!(
        c.parse_category_names(ok(null_meals)),
        Err(ApiError::NotFound)
    ));
    assert!(matches!(
        c.parse_ingredients(ok(null_meals)),
        Err(ApiError::NotFound)
    ));
    assert!(matches!(
        c.parse_area_names(ok(null_meals)),
        Err(ApiError::NotFound)
    ));
    assert!(matches!(
        c.parse_categories(ok(r#"{"categories":null}"#)),
        Err(ApiError::NotFound)
    ));
}

#[test]
fn extra_rows_are_narrowed_to_the_first() {
    let body = include_str!("fixtures/search_chicken.json");
    let meal = client().parse_meal(ok(body)).unwrap();
    assert_eq!(meal.id, "52772");
}
