use chrono::{TimeZone, Utc};
use serde_json::json;

use crate::types::history::{HistoryBucket, HistoryItem};

#[test]
fn history_item_wire_format() {
    let item = HistoryItem {
        id: 5,
        title: "Bubble Woods".to_owned(),
        slug: "bubble-woods".to_owned(),
        image_url: "/images/games/bubble-woods.png".to_owned(),
        last_played: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
        category: Some("bubble-games".to_owned()),
    };
    assert_eq!(
        serde_json::to_value(&item).unwrap(),
        json!({
            "id": 5,
            "title": "Bubble Woods",
            "slug": "bubble-woods",
            "imageUrl": "/images/games/bubble-woods.png",
            "lastPlayed": "2024-06-01T12:00:00Z",
            "category": "bubble-games"
        }),
        "The storage field names must stay compatible with existing blobs"
    );
}

#[test]
fn history_item_deserializes_legacy_blob_without_category() {
    let item = serde_json::from_value::<HistoryItem>(json!({
        "id": 5,
        "title": "Bubble Woods",
        "slug": "bubble-woods",
        "imageUrl": "/images/games/bubble-woods.png",
        "lastPlayed": "2024-06-01T12:00:00Z"
    }))
    .unwrap();
    assert_eq!(item.category, None);
}

#[test]
fn history_bucket_is_a_plain_array() {
    let bucket = HistoryBucket::new(vec![HistoryItem {
        id: 5,
        title: "Bubble Woods".to_owned(),
        slug: "bubble-woods".to_owned(),
        image_url: "/images/games/bubble-woods.png".to_owned(),
        last_played: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
        category: None,
    }]);
    let value = serde_json::to_value(&bucket).unwrap();
    assert!(value.is_array(), "The blob is a bare array of entries");
    assert_eq!(value[0]["slug"], json!("bubble-woods"));
    assert_eq!(
        serde_json::from_value::<HistoryBucket>(value).unwrap(),
        bucket
    );
}
