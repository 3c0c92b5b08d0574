use futures::FutureExt;

use crate::constants::HISTORY_STORAGE_KEY;
use crate::models::ctx::CtxError;
use crate::runtime::msg::{Action, ActionCtx, Event, Internal, Msg};
use crate::runtime::{Effect, EffectFuture, Effects, Env, EnvFutureExt};
use crate::types::history::{HistoryBucket, HistoryItem};

pub fn update_history<E: Env + 'static>(history: &mut HistoryBucket, msg: &Msg) -> Effects {
    match msg {
        Msg::Action(Action::Ctx(ActionCtx::RecordPlay(played))) => {
            // A navigable entry needs a positive id and a non-empty slug.
            if played.id == 0 || played.slug.is_empty() {
                return Effects::none().unchanged();
            };
            history.record(HistoryItem {
                id: played.id,
                title: played.title.to_owned(),
                slug: played.slug.to_owned(),
                image_url: played.image_url.to_owned(),
                last_played: E::now(),
                category: played.category.to_owned(),
            });
            Effects::msgs(vec![
                Msg::Internal(Internal::HistoryChanged(false)),
                Msg::Event(Event::PlayRecorded { id: played.id }),
            ])
        }
        Msg::Action(Action::Ctx(ActionCtx::ClearHistory)) => {
            let changed_effects = if history.is_empty() {
                Effects::none().unchanged()
            } else {
                history.items.clear();
                Effects::msg(Msg::Internal(Internal::HistoryChanged(true)))
            };
            // The blob is deleted even when the in-memory history is
            // already empty. Repeated clears are idempotent.
            changed_effects.join(Effects::one(clear_history_in_storage::<E>()).unchanged())
        }
        Msg::Action(Action::Ctx(ActionCtx::PullHistoryFromStorage)) => {
            Effects::one(pull_history_from_storage::<E>()).unchanged()
        }
        Msg::Internal(Internal::HistoryStorageResult(result)) => match result {
            Ok(bucket) => {
                let next_history = bucket.to_owned().unwrap_or_default();
                if *history != next_history {
                    *history = next_history;
                    Effects::msg(Msg::Internal(Internal::HistoryChanged(true)))
                        .join(Effects::msg(Msg::Event(Event::HistoryPulledFromStorage)).unchanged())
                } else {
                    Effects::msg(Msg::Event(Event::HistoryPulledFromStorage)).unchanged()
                }
            }
            Err(error) => {
                // Fail open: a corrupt blob is treated as an empty history.
                let next_history = HistoryBucket::default();
                let changed_effects = if *history != next_history {
                    *history = next_history;
                    Effects::msg(Msg::Internal(Internal::HistoryChanged(true)))
                } else {
                    Effects::none().unchanged()
                };
                changed_effects.join(
                    Effects::msg(Msg::Event(Event::Error {
                        error: CtxError::from(error.to_owned()),
                        source: Box::new(Event::HistoryPulledFromStorage),
                    }))
                    .unchanged(),
                )
            }
        },
        Msg::Internal(Internal::HistoryChanged(persisted)) if !persisted => {
            Effects::one(push_history_to_storage::<E>(history)).unchanged()
        }
        _ => Effects::none().unchanged(),
    }
}

fn pull_history_from_storage<E: Env + 'static>() -> Effect {
    EffectFuture::Sequential(
        E::get_storage::<HistoryBucket>(HISTORY_STORAGE_KEY)
            .map(|result| Msg::Internal(Internal::HistoryStorageResult(result)))
            .boxed_env(),
    )
    .into()
}

fn push_history_to_storage<E: Env + 'static>(history: &HistoryBucket) -> Effect {
    EffectFuture::Sequential(
        E::set_storage(HISTORY_STORAGE_KEY, Some(history))
            .map(|result| match result {
                Ok(_) => Msg::Event(Event::HistoryPushedToStorage),
                Err(error) => Msg::Event(Event::Error {
                    error: CtxError::from(error),
                    source: Box::new(Event::HistoryPushedToStorage),
                }),
            })
            .boxed_env(),
    )
    .into()
}

fn clear_history_in_storage<E: Env + 'static>() -> Effect {
    EffectFuture::Sequential(
        E::set_storage::<HistoryBucket>(HISTORY_STORAGE_KEY, None)
            .map(|result| match result {
                Ok(_) => Msg::Event(Event::HistoryCleared),
                Err(error) => Msg::Event(Event::Error {
                    error: CtxError::from(error),
                    source: Box::new(Event::HistoryCleared),
                }),
            })
            .boxed_env(),
    )
    .into()
}
