use bubbleshooters_derive::Model;
use chrono::{TimeZone, Utc};

use crate::constants::HISTORY_STORAGE_KEY;
use crate::models::ctx::Ctx;
use crate::runtime::msg::{Action, ActionCtx};
use crate::runtime::{Runtime, RuntimeAction};
use crate::types::history::{HistoryBucket, HistoryItem};
use crate::unit_tests::{TestEnv, STORAGE};

fn history_item(id: u32, hour: u32) -> HistoryItem {
    HistoryItem {
        id,
        title: format!("Game {id}"),
        slug: format!("game-{id}"),
        image_url: format!("/images/games/game-{id}.png"),
        last_played: Utc.with_ymd_and_hms(2024, 6, 1, hour, 0, 0).unwrap(),
        category: None,
    }
}

#[test]
fn actionctx_pullhistoryfromstorage() {
    #[derive(Model, Clone, Debug)]
    #[model(TestEnv)]
    struct TestModel {
        ctx: Ctx,
    }
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    let history = HistoryBucket::new(vec![history_item(1, 10), history_item(2, 11)]);
    STORAGE.write().unwrap().insert(
        HISTORY_STORAGE_KEY.to_owned(),
        serde_json::to_string(&history).unwrap(),
    );
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
            action: Action::Ctx(ActionCtx::PullHistoryFromStorage),
        });
    });
    assert_eq!(
        runtime.model().unwrap().ctx.history,
        history,
        "Should have loaded the persisted history"
    );
}

#[test]
fn actionctx_pullhistoryfromstorage_missing_blob() {
    #[derive(Model, Clone, Debug)]
    #[model(TestEnv)]
    struct TestModel {
        ctx: Ctx,
    }
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    let (runtime, _rx) = Runtime::<TestEnv, _>::new(
        TestModel {
            ctx: Ctx::new(
                Default::default(),
                Default::default(),
                Default::default(),
                HistoryBucket::new(vec![history_item(9, 10)]),
            ),
        },
        vec![],
        1000,
    );
    TestEnv::run(|| {
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::Ctx(ActionCtx::PullHistoryFromStorage),
        });
    });
    assert!(
        runtime.model().unwrap().ctx.history.is_empty(),
        "A missing blob should resolve to an empty history"
    );
}

#[test]
fn actionctx_pullhistoryfromstorage_corrupt_blob() {
    #[derive(Model, Clone, Debug)]
    #[model(TestEnv)]
    struct TestModel {
        ctx: Ctx,
    }
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    STORAGE.write().unwrap().insert(
        HISTORY_STORAGE_KEY.to_owned(),
        "not a json blob".to_owned(),
    );
    let (runtime, _rx) = Runtime::<TestEnv, _>::new(
        TestModel {
            ctx: Ctx::new(
                Default::default(),
                Default::default(),
                Default::default(),
                HistoryBucket::new(vec![history_item(9, 10)]),
            ),
        },
        vec![],
        1000,
    );
    TestEnv::run(|| {
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::Ctx(ActionCtx::PullHistoryFromStorage),
        });
    });
    assert!(
        runtime.model().unwrap().ctx.history.is_empty(),
        "A corrupt blob should fail open into an empty history"
    );
}
