use actix_web::http::StatusCode;
use tracks_core::{
    TrackId,
    test_helper::{test_time, track_fixes},
};

use super::helper::TestHelper;

#[actix_web::test]
async fn test_tracks_are_distinct_and_sorted() {
    let mut fixes = track_fixes("coyote", test_time(1), 2);
    fixes.extend(track_fixes("badger", test_time(2), 2));
    fixes.extend(track_fixes("coyote", test_time(3), 1));
    let helper = TestHelper::new(fixes);

    let response = helper.get_tracks().await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json::<Vec<TrackId>>(),
        vec![TrackId::from("badger"), TrackId::from("coyote")]
    );
}

#[actix_web::test]
async fn test_tracks_of_empty_store_is_empty() {
    let helper = TestHelper::new(vec![]);

    let response = helper.get_tracks().await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.json::<Vec<TrackId>>().is_empty());
}
