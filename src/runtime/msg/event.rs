use serde::Serialize;

use crate::models::ctx::CtxError;
use crate::types::games::GameId;
use crate::types::locale::Locale;

///
/// Those messages are meant to be dispatched by the `bubbleshooters-core`
/// crate and handled by its users. They double as the non-fatal diagnostic
/// channel: failures surface here instead of propagating to callers.
#[derive(Clone, Serialize, Debug, PartialEq)]
#[serde(tag = "event", content = "args")]
pub enum Event {
    PlayRecorded {
        id: GameId,
    },
    HistoryPushedToStorage,
    HistoryPulledFromStorage,
    HistoryCleared,
    CatalogFetched {
        locale: Locale,
    },
    CatalogPushedToStorage,
    RandomGamePicked {
        id: GameId,
    },
    Error {
        error: CtxError,
        source: Box<Event>,
    },
}
