use serde::Serialize;

use crate::models::ctx::update_history;
use crate::runtime::msg::Msg;
use crate::runtime::{Effects, Env, Update};
use crate::types::games::GameCatalog;
use crate::types::history::HistoryBucket;
use crate::types::locale::{Locale, Messages};

/// Shared state every model depends on: the active locale, its translation
/// dictionary, the per-locale game catalog and the play history. The shell
/// constructs it per page with the locale-aware content it has loaded.
#[derive(Default, Clone, Serialize, Debug)]
pub struct Ctx {
    pub locale: Locale,
    #[serde(skip)]
    pub messages: Messages,
    #[serde(skip)]
    pub catalog: GameCatalog,
    #[serde(skip)]
    pub history: HistoryBucket,
}

impl Ctx {
    pub fn new(
        locale: Locale,
        messages: Messages,
        catalog: GameCatalog,
        history: HistoryBucket,
    ) -> Self {
        Ctx {
            locale,
            messages,
            catalog,
            history,
        }
    }
}

impl<E: Env + 'static> Update<E> for Ctx {
    fn update(&mut self, msg: &Msg) -> Effects {
        update_history::<E>(&mut self.history, msg)
    }
}
