use bubbleshooters_derive::Model;
use chrono::{TimeZone, Utc};

use crate::constants::HISTORY_STORAGE_KEY;
use crate::models::ctx::Ctx;
use crate::runtime::msg::{Action, ActionCtx};
use crate::runtime::{Runtime, RuntimeAction};
use crate::types::history::{HistoryBucket, HistoryItem};
use crate::unit_tests::{TestEnv, STORAGE};

fn history_item(id: u32) -> HistoryItem {
    HistoryItem {
        id,
        title: format!("Game {id}"),
        slug: format!("game-{id}"),
        image_url: format!("/images/games/game-{id}.png"),
        last_played: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
        category: Some("bubble-games".to_owned()),
    }
}

#[test]
fn actionctx_clearhistory() {
    #[derive(Model, Clone, Debug)]
    #[model(TestEnv)]
    struct TestModel {
        ctx: Ctx,
    }
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    let history = HistoryBucket::new(vec![history_item(1), history_item(2)]);
    STORAGE.write().unwrap().insert(
        HISTORY_STORAGE_KEY.to_owned(),
        serde_json::to_string(&history).unwrap(),
    );
    let (runtime, _rx) = Runtime::<TestEnv, _>::new(
        TestModel {
            ctx: Ctx::new(
                Default::default(),
                Default::default(),
                Default::default(),
                history,
            ),
        },
        vec![],
        1000,
    );
    TestEnv::run(|| {
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::Ctx(ActionCtx::ClearHistory),
        });
    });
    assert!(
        runtime.model().unwrap().ctx.history.is_empty(),
        "Should have reset the history"
    );
    assert!(
        STORAGE.read().unwrap().get(HISTORY_STORAGE_KEY).is_none(),
        "Should have deleted the persisted blob"
    );
}

#[test]
fn actionctx_clearhistory_is_idempotent() {
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
            action: Action::Ctx(ActionCtx::ClearHistory),
        });
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::Ctx(ActionCtx::ClearHistory),
        });
    });
    assert!(
        runtime.model().unwrap().ctx.history.is_empty(),
        "Clearing an empty history should have no observable effect"
    );
    assert!(STORAGE.read().unwrap().get(HISTORY_STORAGE_KEY).is_none());
}
