use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::games::GameId;

/// One record of the play history. The serialized field names are a storage
/// contract: they must keep matching blobs written by earlier releases.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    pub id: GameId,
    pub title: String,
    pub slug: String,
    pub image_url: String,
    /// Set to "now" at the moment of (re)recording.
    pub last_played: DateTime<Utc>,
    /// Falls back to the catalog-wide default category when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Payload of the record-play action. `last_played` is stamped from
/// `Env::now()` when the entry is recorded.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PlayedGame {
    pub id: GameId,
    pub title: String,
    pub slug: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}
