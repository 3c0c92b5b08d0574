use serde::Deserialize;

use crate::models::catalog_with_filters::Selected as CatalogWithFiltersSelected;
use crate::types::history::PlayedGame;

#[derive(Clone, Deserialize, Debug)]
#[serde(tag = "action", content = "args")]
pub enum ActionCtx {
    /// Record that the user has opened a game. The entry is upserted into
    /// the play history with a fresh timestamp and the history is persisted.
    RecordPlay(PlayedGame),
    /// Drop the whole play history, including the persisted blob.
    ClearHistory,
    /// Load the persisted play history into the context. Missing or corrupt
    /// data resolves to an empty history.
    PullHistoryFromStorage,
}

#[derive(Clone, Deserialize, Debug)]
#[serde(tag = "action", content = "args")]
pub enum ActionCatalogWithFilters {
    Search(String),
    LoadNextPage,
}

#[derive(Clone, Deserialize, Debug)]
#[serde(tag = "action", content = "args")]
pub enum ActionRandomGame {
    Open,
}

#[derive(Clone, Deserialize, Debug)]
#[serde(tag = "action", content = "args")]
pub enum ActionLoad {
    CatalogWithFilters(CatalogWithFiltersSelected),
    PlayHistory,
}

#[derive(Clone, Deserialize, Debug)]
#[serde(tag = "action", content = "args")]
pub enum Action {
    Ctx(ActionCtx),
    Load(ActionLoad),
    CatalogWithFilters(ActionCatalogWithFilters),
    RandomGame(ActionRandomGame),
    Unload,
}
