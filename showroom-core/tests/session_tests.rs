// Tests for the showroom view-model against a mock catalog backend

use showroom_client::ShowroomClient;
use showroom_core::compare::AddOutcome;
use showroom_core::data::{COMPARE_KEY, Database, MemoryStorage, Storage, THEME_KEY};
use showroom_core::error::ShowroomError;
use showroom_core::filter::FilterCriteria;
use showroom_core::route::Route;
use showroom_core::session::{Showroom, ShowroomOptions};
use showroom_core::theme::Theme;
use tempfile::TempDir;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

const CATALOG_JSON: &str = r#"[
    {"id":1,"name":"Honda Civic","manufacturerId":2,"categoryId":2,"year":2020,"image":"civic.jpg"},
    {"id":2,"name":"Toyota Corolla","manufacturerId":1,"categoryId":2,"year":2019,"image":"corolla.jpg"},
    {"id":3,"name":"Ford Focus","manufacturerId":3,"categoryId":5,"year":2021,"image":"focus.jpg"}
]"#;

fn detail_json(id: u32, name: &str, category_id: u32, year: i32) -> String {
    format!(
        r#"{{"id":{},"name":"{}","categoryId":{},"year":{},
            "specifications":{{"engine":"2.0L I4","horsepower":150,"transmission":"Automatic","drivetrain":"FWD"}}}}"#,
        id, name, category_id, year
    )
}

async fn mock_backend() -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cars"))
        .respond_with(ResponseTemplate::new(200).set_body_string(CATALOG_JSON))
        .mount(&mock_server)
        .await;

    for (id, name, category, year) in [
        (1, "Honda Civic", 2, 2020),
        (2, "Toyota Corolla", 2, 2019),
        (3, "Ford Focus", 5, 2021),
    ] {
        Mock::given(method("GET"))
            .and(path(format!("/cars/{}", id)))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(detail_json(id, name, category, year)),
            )
            .mount(&mock_server)
            .await;
    }

    Mock::given(method("GET"))
        .and(path("/cars/99"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    mock_server
}

fn open_with<S: Storage>(server: &MockServer, storage: S, reset: bool) -> Showroom<S> {
    let client = ShowroomClient::new(&server.uri()).unwrap();
    let options = ShowroomOptions {
        reset_comparison_on_visit: reset,
    };
    Showroom::open(client, storage, options).unwrap()
}

fn stored_list<S: Storage>(showroom: &Showroom<S>) -> Option<String> {
    showroom.storage().get(COMPARE_KEY).unwrap()
}

// ============================================================================
// Catalog and details
// ============================================================================

#[tokio::test]
async fn test_load_catalog_and_filter() {
    let server = mock_backend().await;
    let mut showroom = open_with(&server, MemoryStorage::new(), true);

    assert_eq!(showroom.load_catalog().await.unwrap().len(), 3);

    let result = showroom.filtered(&FilterCriteria::text("corolla"));
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, 2);
}

#[tokio::test]
async fn test_catalog_failure_keeps_previous_snapshot() {
    let server = mock_backend().await;
    let mut showroom = open_with(&server, MemoryStorage::new(), true);
    showroom.load_catalog().await.unwrap();

    server.reset().await;
    Mock::given(method("GET"))
        .and(path("/cars"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = showroom.load_catalog().await.unwrap_err();
    assert_eq!(err.user_message(), "Failed to load cars. Please try again later.");
    assert!(err.to_string().starts_with("Failed to load cars: "));
    assert_eq!(showroom.catalog().len(), 3);
}

#[tokio::test]
async fn test_detail_and_recommendations() {
    let server = mock_backend().await;
    let mut showroom = open_with(&server, MemoryStorage::new(), true);
    showroom.load_catalog().await.unwrap();
    showroom.navigate(Route::Details { id: 1 }).unwrap();

    let car = showroom.load_detail(1).await.unwrap();
    assert_eq!(car.name, "Honda Civic");

    let recommended: Vec<u32> = showroom.recommendations().iter().map(|c| c.id).collect();
    assert_eq!(recommended, vec![2]);
}

#[tokio::test]
async fn test_detail_not_found_message() {
    let server = mock_backend().await;
    let mut showroom = open_with(&server, MemoryStorage::new(), true);
    showroom.load_detail(2).await.unwrap();

    let err = showroom.load_detail(99).await.unwrap_err();
    assert_eq!(err.user_message(), "Failed to load car details.");
    assert!(err.to_string().starts_with("Failed to load car 99: "));
    assert_eq!(showroom.current().map(|c| c.id), Some(2));
}

#[tokio::test]
async fn test_navigation_drops_current_detail() {
    let server = mock_backend().await;
    let mut showroom = open_with(&server, MemoryStorage::new(), true);
    showroom.load_detail(1).await.unwrap();

    showroom.navigate(Route::Compare).unwrap();
    assert!(showroom.current().is_none());
    assert!(showroom.recommendations().is_empty());
}

// ============================================================================
// Comparison list
// ============================================================================

#[tokio::test]
async fn test_mutations_persist() {
    let server = mock_backend().await;
    let mut showroom = open_with(&server, MemoryStorage::new(), true);

    showroom.add_to_comparison(3).unwrap();
    showroom.add_to_comparison(1).unwrap();
    assert_eq!(stored_list(&showroom).as_deref(), Some("[3,1]"));
    assert_eq!(showroom.badge_count(), 2);

    assert!(showroom.remove_from_comparison(3).unwrap());
    assert_eq!(stored_list(&showroom).as_deref(), Some("[1]"));

    showroom.clear_comparison().unwrap();
    assert_eq!(stored_list(&showroom).as_deref(), Some("[]"));
    assert_eq!(showroom.badge_count(), 0);
}

#[tokio::test]
async fn test_capacity_error_leaves_storage_untouched() {
    let server = mock_backend().await;
    let storage = MemoryStorage::new();
    storage.set(COMPARE_KEY, "[1,2,3,4]").unwrap();
    let mut showroom = open_with(&server, storage, false);

    let err = showroom.add_to_comparison(5).unwrap_err();
    assert!(matches!(err, ShowroomError::ComparisonFull { max: 4 }));
    assert_eq!(showroom.comparison().ids(), &[1, 2, 3, 4]);
    assert_eq!(stored_list(&showroom).as_deref(), Some("[1,2,3,4]"));
}

#[tokio::test]
async fn test_add_on_details_page_includes_viewed_car() {
    let server = mock_backend().await;
    let mut showroom = open_with(&server, MemoryStorage::new(), true);
    showroom.navigate(Route::Details { id: 1 }).unwrap();

    assert_eq!(showroom.add_to_comparison(2).unwrap(), AddOutcome::Added);
    assert_eq!(showroom.comparison().ids(), &[1, 2]);
}

#[tokio::test]
async fn test_visiting_catalog_resets_comparison() {
    let server = mock_backend().await;
    let storage = MemoryStorage::new();
    storage.set(COMPARE_KEY, "[2,3]").unwrap();
    let mut showroom = open_with(&server, storage, true);
    assert_eq!(showroom.badge_count(), 2);

    showroom.navigate(Route::Compare).unwrap();
    assert_eq!(showroom.badge_count(), 2);

    showroom.navigate(Route::Catalog).unwrap();
    assert_eq!(showroom.badge_count(), 0);
    assert_eq!(stored_list(&showroom).as_deref(), Some("[]"));
}

#[tokio::test]
async fn test_keep_comparison_across_visits() {
    let server = mock_backend().await;
    let storage = MemoryStorage::new();
    storage.set(COMPARE_KEY, "[2,3]").unwrap();
    let mut showroom = open_with(&server, storage, false);

    showroom.navigate(Route::Catalog).unwrap();
    showroom.navigate(Route::Details { id: 1 }).unwrap();
    assert_eq!(showroom.comparison().ids(), &[2, 3]);
}

#[tokio::test]
async fn test_corrupt_stored_list_loads_empty() {
    let server = mock_backend().await;
    let storage = MemoryStorage::new();
    storage.set(COMPARE_KEY, "{not json").unwrap();

    let showroom = open_with(&server, storage, false);
    assert!(showroom.comparison().is_empty());
}

#[tokio::test]
async fn test_oversized_stored_list_is_normalised() {
    let server = mock_backend().await;
    let storage = MemoryStorage::new();
    storage.set(COMPARE_KEY, "[1,1,2,3,4,5]").unwrap();

    let showroom = open_with(&server, storage, false);
    assert_eq!(showroom.comparison().ids(), &[1, 2, 3, 4]);
}

#[tokio::test]
async fn test_compared_cars_skips_failures() {
    let server = mock_backend().await;
    let storage = MemoryStorage::new();
    storage.set(COMPARE_KEY, "[3,99,1]").unwrap();
    let showroom = open_with(&server, storage, false);

    let cars = showroom.compared_cars().await;
    let ids: Vec<u32> = cars.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![3, 1]);
    assert!(cars.iter().all(|c| c.specifications.is_some()));
}

// ============================================================================
// Theme and on-disk storage
// ============================================================================

#[tokio::test]
async fn test_theme_persists_across_sessions() {
    let server = mock_backend().await;
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("showroom.db");

    {
        let mut showroom = open_with(&server, Database::new(&db_path).unwrap(), true);
        assert_eq!(showroom.theme(), Theme::Light);
        assert_eq!(showroom.toggle_theme().unwrap(), Theme::Dark);
        showroom.add_to_comparison(2).unwrap();
    }

    let showroom = open_with(&server, Database::new(&db_path).unwrap(), true);
    assert_eq!(showroom.theme(), Theme::Dark);
    assert_eq!(showroom.comparison().ids(), &[2]);
    assert_eq!(
        showroom.storage().get(THEME_KEY).unwrap().as_deref(),
        Some("dark")
    );
}

#[tokio::test]
async fn test_unknown_stored_theme_falls_back_to_light() {
    let server = mock_backend().await;
    let storage = MemoryStorage::new();
    storage.set(THEME_KEY, "sepia").unwrap();

    let showroom = open_with(&server, storage, true);
    assert_eq!(showroom.theme(), Theme::Light);
}
