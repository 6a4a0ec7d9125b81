use actix_web::http::StatusCode;
use tracks_core::test_helper::{test_time, track_fixes};
use web_api::{
    error::ErrorDiscriminants,
    routes::v1::extent::{Extent, ExtentParameters},
};

use super::helper::TestHelper;

fn helper() -> TestHelper {
    let mut fixes = track_fixes("coyote", test_time(1), 3);
    fixes.extend(track_fixes("badger", test_time(5), 1));
    TestHelper::new(fixes)
}

#[actix_web::test]
async fn test_extent_spans_all_fixes() {
    let response = helper().get_extent(&ExtentParameters::default()).await;

    assert_eq!(response.status, StatusCode::OK);
    let extent: Extent = response.json::<Option<Extent>>().unwrap();
    assert_eq!(extent.start, test_time(1));
    assert_eq!(extent.stop, test_time(5));
    assert!(extent.north > extent.south);
    assert!(extent.east > extent.west);
}

#[actix_web::test]
async fn test_extent_of_empty_store_is_null() {
    let response = TestHelper::new(vec![])
        .get_extent(&ExtentParameters::default())
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.json::<Option<Extent>>().is_none());
}

#[actix_web::test]
async fn test_given_bounds_replace_stored_ones() {
    let params = ExtentParameters {
        given_start: Some("2013-07-01 00:00:00".into()),
        given_stop: None,
    };

    let extent: Extent = helper()
        .get_extent(&params)
        .await
        .json::<Option<Extent>>()
        .unwrap();

    assert_eq!(extent.start, test_time(0));
    assert_eq!(extent.stop, test_time(5));
}

#[actix_web::test]
async fn test_invalid_given_bound_is_rejected() {
    let params = ExtentParameters {
        given_start: Some("noon".into()),
        given_stop: None,
    };

    let response = helper().get_extent(&params).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error().error, ErrorDiscriminants::InvalidParameter);
}
