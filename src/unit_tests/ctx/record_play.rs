use bubbleshooters_derive::Model;
use chrono::{Duration, TimeZone, Utc};

use crate::constants::{HISTORY_STORAGE_KEY, MAX_HISTORY_ITEMS};
use crate::models::ctx::Ctx;
use crate::runtime::msg::{Action, ActionCtx};
use crate::runtime::{Env, Runtime, RuntimeAction};
use crate::types::games::GameId;
use crate::types::history::{HistoryBucket, PlayedGame};
use crate::unit_tests::{TestEnv, NOW, STORAGE};

fn played_game(id: GameId) -> PlayedGame {
    PlayedGame {
        id,
        title: format!("Game {id}"),
        slug: format!("game-{id}"),
        image_url: format!("/images/games/game-{id}.png"),
        category: Some("bubble-games".to_owned()),
    }
}

fn stored_history() -> HistoryBucket {
    STORAGE
        .read()
        .unwrap()
        .get(HISTORY_STORAGE_KEY)
        .map(|data| serde_json::from_str(data).unwrap())
        .unwrap_or_default()
}

#[test]
fn actionctx_recordplay() {
    #[derive(Model, Clone, Debug)]
    #[model(TestEnv)]
    struct TestModel {
        ctx: Ctx,
    }
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    *NOW.write().unwrap() = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let (runtime, _rx) = Runtime::<TestEnv, _>::new(
        TestModel {
            ctx: Ctx::default(),
        },
        vec![],
        1000,
    );
    TestEnv::run(|| {
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::Ctx(ActionCtx::RecordPlay(played_game(5))),
        });
    });
    {
        let model = runtime.model().unwrap();
        assert_eq!(model.ctx.history.len(), 1, "Should have one entry");
        assert_eq!(model.ctx.history.items[0].id, 5);
        assert_eq!(
            model.ctx.history.items[0].last_played,
            TestEnv::now(),
            "Should have stamped the entry with the current time"
        );
    }
    assert_eq!(
        stored_history().items.first().map(|item| item.id),
        Some(5),
        "Should have persisted the recorded play"
    );
}

#[test]
fn actionctx_recordplay_same_id_replaces_entry() {
    #[derive(Model, Clone, Debug)]
    #[model(TestEnv)]
    struct TestModel {
        ctx: Ctx,
    }
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    *NOW.write().unwrap() = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let (runtime, _rx) = Runtime::<TestEnv, _>::new(
        TestModel {
            ctx: Ctx::default(),
        },
        vec![],
        1000,
    );
    TestEnv::run(|| {
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::Ctx(ActionCtx::RecordPlay(PlayedGame {
                title: "A".to_owned(),
                ..played_game(5)
            })),
        });
    });
    *NOW.write().unwrap() = Utc.with_ymd_and_hms(2024, 6, 1, 13, 0, 0).unwrap();
    TestEnv::run(|| {
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::Ctx(ActionCtx::RecordPlay(PlayedGame {
                title: "B".to_owned(),
                ..played_game(5)
            })),
        });
    });
    let model = runtime.model().unwrap();
    assert_eq!(
        model.ctx.history.len(),
        1,
        "Should have replaced the entry instead of duplicating it"
    );
    assert_eq!(model.ctx.history.items[0].title, "B");
    assert_eq!(
        model.ctx.history.items[0].last_played,
        Utc.with_ymd_and_hms(2024, 6, 1, 13, 0, 0).unwrap(),
        "Should have taken the latest played time"
    );
}

#[test]
fn actionctx_recordplay_evicts_least_recently_played() {
    #[derive(Model, Clone, Debug)]
    #[model(TestEnv)]
    struct TestModel {
        ctx: Ctx,
    }
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    let start = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let (runtime, _rx) = Runtime::<TestEnv, _>::new(
        TestModel {
            ctx: Ctx::default(),
        },
        vec![],
        1000,
    );
    for id in 1..=21 {
        *NOW.write().unwrap() = start + Duration::minutes(id as i64);
        TestEnv::run(|| {
            runtime.dispatch(RuntimeAction {
                field: None,
                action: Action::Ctx(ActionCtx::RecordPlay(played_game(id))),
            });
        });
        assert!(
            runtime.model().unwrap().ctx.history.len() <= MAX_HISTORY_ITEMS,
            "Should never exceed the history bound"
        );
    }
    let model = runtime.model().unwrap();
    assert_eq!(model.ctx.history.len(), MAX_HISTORY_ITEMS);
    assert!(
        !model.ctx.history.items.iter().any(|item| item.id == 1),
        "Should have evicted the least recently played entry"
    );
    assert!(
        (2..=21).all(|id| model.ctx.history.items.iter().any(|item| item.id == id)),
        "Should have kept the last 20 recorded entries"
    );
    assert_eq!(
        model.ctx.history.sorted_items().first().map(|item| item.id),
        Some(21),
        "Should return the most recently played entry first"
    );
    drop(model);
    let stored = stored_history();
    assert_eq!(stored.len(), MAX_HISTORY_ITEMS);
    assert!(
        !stored.items.iter().any(|item| item.id == 1),
        "Should have persisted the bounded history"
    );
}

#[test]
fn actionctx_recordplay_rejects_non_navigable_entries() {
    #[derive(Model, Clone, Debug)]
    #[model(TestEnv)]
    struct TestModel {
        ctx: Ctx,
    }
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    let (runtime, _rx) = Runtime::<TestEnv, _>::new(
        TestModel {
            ctx: Ctx::default(),
        },
        vec![],
        1000,
    );
    TestEnv::run(|| {
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::Ctx(ActionCtx::RecordPlay(played_game(0))),
        });
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::Ctx(ActionCtx::RecordPlay(PlayedGame {
                slug: "".to_owned(),
                ..played_game(7)
            })),
        });
    });
    assert!(
        runtime.model().unwrap().ctx.history.is_empty(),
        "Should have ignored entries without a positive id and a slug"
    );
    assert!(
        STORAGE.read().unwrap().get(HISTORY_STORAGE_KEY).is_none(),
        "Should not have touched the storage"
    );
}
