//! Full operation sweep against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then exercises every client
//! operation over real HTTP. Validates request building (including query
//! encoding), the transport round-trip, and response parsing end-to-end.

use mealdb_core::{ApiError, MealApi};

/// Boot the mock server on a random port and return the base URL to point
/// the client at.
fn start_mock() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}/api/json/v1/1")
}

#[test]
fn search_and_lookup() {
    let api = MealApi::with_base_url(&start_mock());

    // Name search: every hit contains the term.
    let meals = api.search("Teriyaki").unwrap();
    assert_eq!(meals.len(), 1);
    assert!(meals[0].name.to_lowercase().contains("teriyaki"));

    // The term round-trips percent-encoded; no match flattens to None.
    assert!(api.search("mac & cheese").is_none());

    // First-letter search.
    let meals = api.search_by_letter('c').unwrap();
    assert_eq!(meals[0].name, "Corba");

    // Lookup by id returns the full record.
    let meal = api.lookup(52772).unwrap();
    assert_eq!(meal.name, "Teriyaki Chicken Casserole");
    assert_eq!(meal.area.as_deref(), Some("Japanese"));
    assert!(!meal.ingredients().is_empty());

    // Unknown id: absent at the flattened surface, NotFound at the typed one.
    assert!(api.lookup(99999).is_none());
    assert!(matches!(api.try_lookup(99999), Err(ApiError::NotFound)));
}

#[test]
fn random_and_listings() {
    let api = MealApi::with_base_url(&start_mock());

    let meal = api.random().unwrap();
    assert!(!meal.name.is_empty());

    let categories = api.categories().unwrap();
    assert_eq!(categories.len(), 3);
    assert!(categories.iter().any(|category| category.name == "Beef"));

    let names = api.list_categories().unwrap();
    assert!(names.contains(&"Beef".to_string()));

    let areas = api.list_areas().unwrap();
    assert!(areas.contains(&"Japanese".to_string()));

    let ingredients = api.list_ingredients().unwrap();
    assert!(ingredients.iter().any(|ingredient| ingredient.name == "Chicken"));
}

#[test]
fn filters() {
    let api = MealApi::with_base_url(&start_mock());

    let hits = api.filter_by_ingredient("chicken breasts").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "52772");

    let hits = api.filter_by_area("Italian").unwrap();
    assert_eq!(hits[0].name, "Spicy Arrabiata Penne");

    let hits = api.filter_by_category("Side").unwrap();
    assert_eq!(hits[0].name, "Corba");

    assert!(api.filter_by_area("Martian").is_none());
    assert!(matches!(
        api.try_filter_by_area("Martian"),
        Err(ApiError::NotFound)
    ));
}

#[test]
fn failures_flatten_to_none() {
    // Nothing listens here: the typed layer sees a transport error, the
    // flattened layer sees absence.
    let unreachable = MealApi::with_base_url("http://127.0.0.1:1/api/json/v1/1");
    assert!(unreachable.random().is_none());
    assert!(matches!(unreachable.try_random(), Err(ApiError::Transport(_))));

    // A wrong path prefix yields 404s: an HTTP error at the typed layer,
    // absence at the flattened one.
    let addr = start_mock();
    let wrong_prefix = addr.replace("/api/json/v1/1", "/api/json/v9/9");
    let api = MealApi::with_base_url(&wrong_prefix);
    assert!(api.categories().is_none());
    assert!(matches!(
        api.try_categories(),
        Err(ApiError::Http { status: 404, .. })
    ));
}
