use crate::runtime::EnvError;
use crate::types::games::GamePreview;
use crate::types::history::HistoryBucket;
use crate::types::locale::Locale;

//
// Those messages are meant to be dispatched and handled only inside the
// bubbleshooters-core crate
//
#[derive(Debug)]
pub enum Internal {
    /// Dispatched when the play history changes, with a flag whether it is
    /// already persisted.
    HistoryChanged(bool),
    /// Result for pulling the play history from storage.
    HistoryStorageResult(Result<Option<HistoryBucket>, EnvError>),
    /// Result for pulling the cached game catalog from storage.
    CatalogStorageResult(Result<Option<Vec<GamePreview>>, EnvError>),
    /// Result for fetching the game catalog from the API.
    CatalogAPIResult(Locale, Result<Vec<GamePreview>, EnvError>),
}
