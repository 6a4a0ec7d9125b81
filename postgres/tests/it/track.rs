use chrono::Duration;
use tracks_core::{
    test_helper::{test_time, track_fixes},
    RecordSource, TimeWindow, TrackCatalog, TrackFilter, TrackId,
};

use crate::helper::test;

#[tokio::test]
#[ignore]
async fn test_fix_records_are_grouped_by_track_and_ordered_by_time() {
    test(|helper| async move {
        let mut fixes = track_fixes("B", test_time(1), 3);
        fixes.extend(track_fixes("A", test_time(1), 3));
        fixes.reverse();
        helper.add_fixes(fixes).await;

        let window = TimeWindow::new(test_time(0), test_time(2)).unwrap();
        let records = helper
            .adapter
            .fix_records(&window, &TrackFilter::All)
            .await
            .unwrap();

        let order: Vec<_> = records
            .iter()
            .map(|r| (r.track_id.as_str(), r.timestamp))
            .collect();
        let mut expected = order.clone();
        expected.sort();

        assert_eq!(records.len(), 6);
        assert_eq!(order, expected);
    })
    .await;
}

#[tokio::test]
#[ignore]
async fn test_fix_records_window_bounds_are_inclusive() {
    test(|helper| async move {
        helper.add_fixes(track_fixes("A", test_time(1), 5)).await;

        let window =
            TimeWindow::new(test_time(1) + Duration::minutes(1), test_time(1) + Duration::minutes(3))
                .unwrap();
        let records = helper
            .adapter
            .fix_records(&window, &TrackFilter::All)
            .await
            .unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].timestamp, window.start());
        assert_eq!(records[2].timestamp, window.stop());
    })
    .await;
}

#[tokio::test]
#[ignore]
async fn test_fix_records_only_returns_filtered_track() {
    test(|helper| async move {
        helper.add_fixes(track_fixes("A", test_time(1), 2)).await;
        helper.add_fixes(track_fixes("AB", test_time(1), 2)).await;

        let window = TimeWindow::new(test_time(0), test_time(2)).unwrap();
        let records = helper
            .adapter
            .fix_records(&window, &TrackFilter::Track(TrackId::from("A")))
            .await
            .unwrap();

        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.track_id.as_str() == "A"));
    })
    .await;
}

#[tokio::test]
#[ignore]
async fn test_track_names_are_distinct_and_sorted() {
    test(|helper| async move {
        helper.add_fixes(track_fixes("coyote", test_time(1), 2)).await;
        helper.add_fixes(track_fixes("badger", test_time(1), 2)).await;

        let names = helper.adapter.track_names().await.unwrap();

        assert_eq!(names, vec![TrackId::from("badger"), TrackId::from("coyote")]);
    })
    .await;
}

#[tokio::test]
#[ignore]
async fn test_extent_of_empty_table_is_none() {
    test(|helper| async move {
        assert!(helper.adapter.extent().await.unwrap().is_none());
    })
    .await;
}

#[tokio::test]
#[ignore]
async fn test_extent_spans_all_fixes() {
    test(|helper| async move {
        helper.add_fixes(track_fixes("A", test_time(1), 3)).await;
        helper.add_fixes(track_fixes("B", test_time(3), 1)).await;

        let extent = helper.adapter.extent().await.unwrap().unwrap();

        assert_eq!(extent.start, test_time(1));
        assert_eq!(extent.stop, test_time(3));
        assert!(extent.north > extent.south);
        assert!(extent.east > extent.west);
    })
    .await;
}
