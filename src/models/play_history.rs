use lazysort::SortedBy;
use serde::Serialize;

use crate::models::common::eq_update;
use crate::models::ctx::Ctx;
use crate::runtime::msg::{Action, ActionLoad, Internal, Msg};
use crate::runtime::{Effects, Env, UpdateWithCtx};
use crate::types::history::{HistoryBucket, HistoryItem};

/// The recently-played page: the play history in presentation order, most
/// recently played first. An empty history is an ordinary empty list; the
/// shell renders the "no history" empty state for it.
#[derive(Default, Clone, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PlayHistory {
    pub items: Vec<HistoryItem>,
}

impl<E: Env + 'static> UpdateWithCtx<E> for PlayHistory {
    fn update(&mut self, msg: &Msg, ctx: &Ctx) -> Effects {
        match msg {
            Msg::Action(Action::Load(ActionLoad::PlayHistory))
            | Msg::Internal(Internal::HistoryChanged(_)) => {
                items_update(&mut self.items, &ctx.history)
            }
            Msg::Action(Action::Unload) => eq_update(&mut self.items, vec![]),
            _ => Effects::none().unchanged(),
        }
    }
}

fn items_update(items: &mut Vec<HistoryItem>, history: &HistoryBucket) -> Effects {
    let next_items = history
        .items
        .iter()
        .sorted_by(|a, b| b.last_played.cmp(&a.last_played))
        .cloned()
        .collect::<Vec<_>>();
    eq_update(items, next_items)
}
