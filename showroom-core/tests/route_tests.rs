// Tests for page routing

use showroom_core::error::ShowroomError;
use showroom_core::route::Route;

#[test]
fn test_catalog_paths() {
    for location in ["/", "", "/index.html", "http://localhost:8080/"] {
        assert_eq!(Route::parse(location).unwrap(), Route::Catalog, "{}", location);
    }
}

#[test]
fn test_details_with_id() {
    assert_eq!(Route::parse("/details?id=3").unwrap(), Route::Details { id: 3 });
    assert_eq!(
        Route::parse("http://localhost:8080/details.html?foo=bar&id=12").unwrap(),
        Route::Details { id: 12 }
    );
}

#[test]
fn test_details_without_id() {
    let err = Route::parse("/details").unwrap_err();
    assert!(matches!(err, ShowroomError::MissingCarId));
    assert_eq!(err.user_message(), "No car ID specified.");
}

#[test]
fn test_details_with_bad_id() {
    assert!(matches!(
        Route::parse("/details?id=abc"),
        Err(ShowroomError::MissingCarId)
    ));
}

#[test]
fn test_compare_paths() {
    assert_eq!(Route::parse("/compare").unwrap(), Route::Compare);
    assert_eq!(Route::parse("compare.html").unwrap(), Route::Compare);
}

#[test]
fn test_unknown_path() {
    assert!(matches!(
        Route::parse("/garage"),
        Err(ShowroomError::UnknownRoute(_))
    ));
}

#[test]
fn test_double_slash_is_not_a_host() {
    for location in ["//compare", "//details?id=3", "//"] {
        assert!(
            matches!(Route::parse(location), Err(ShowroomError::UnknownRoute(_))),
            "{}",
            location
        );
    }
}

#[test]
fn test_relative_path_without_leading_slash() {
    assert_eq!(Route::parse("details?id=4").unwrap(), Route::Details { id: 4 });
    assert_eq!(Route::parse("/compare#top").unwrap(), Route::Compare);
}

#[test]
fn test_display_round_trips_through_parse() {
    for route in [Route::Catalog, Route::Details { id: 5 }, Route::Compare] {
        assert_eq!(Route::parse(&route.to_string()).unwrap(), route);
    }
}

#[test]
fn test_which_pages_reset_comparison() {
    assert!(Route::Catalog.resets_comparison());
    assert!(Route::Details { id: 1 }.resets_comparison());
    assert!(!Route::Compare.resets_comparison());
}
