use bubbleshooters_derive::Model;
use chrono::{TimeZone, Utc};

use crate::models::ctx::Ctx;
use crate::models::play_history::PlayHistory;
use crate::runtime::msg::{Action, ActionCtx, ActionLoad};
use crate::runtime::{Runtime, RuntimeAction};
use crate::types::history::{HistoryBucket, HistoryItem, PlayedGame};
use crate::unit_tests::{TestEnv, NOW};

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
fn play_history_is_sorted_by_recency() {
    #[derive(Model, Clone, Debug)]
    #[model(TestEnv)]
    struct TestModel {
        ctx: Ctx,
        play_history: PlayHistory,
    }
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    // Insertion order deliberately differs from recency order.
    let history = HistoryBucket::new(vec![
        history_item(1, 11),
        history_item(2, 13),
        history_item(3, 12),
    ]);
    let (runtime, _rx) = Runtime::<TestEnv, _>::new(
        TestModel {
            ctx: Ctx::new(
                Default::default(),
                Default::default(),
                Default::default(),
                history,
            ),
            play_history: PlayHistory::default(),
        },
        vec![],
        1000,
    );
    TestEnv::run(|| {
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::Load(ActionLoad::PlayHistory),
        });
    });
    let model = runtime.model().unwrap();
    assert_eq!(
        model
            .play_history
            .items
            .iter()
            .map(|item| item.id)
            .collect::<Vec<_>>(),
        vec![2, 3, 1],
        "Should present the most recently played entries first"
    );
}

#[test]
fn play_history_follows_recorded_plays() {
    #[derive(Model, Clone, Debug)]
    #[model(TestEnv)]
    struct TestModel {
        ctx: Ctx,
        play_history: PlayHistory,
    }
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    *NOW.write().unwrap() = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let (runtime, _rx) = Runtime::<TestEnv, _>::new(
        TestModel {
            ctx: Ctx::default(),
            play_history: PlayHistory::default(),
        },
        vec![],
        1000,
    );
    TestEnv::run(|| {
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::Load(ActionLoad::PlayHistory),
        });
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::Ctx(ActionCtx::RecordPlay(PlayedGame {
                id: 4,
                title: "Game 4".to_owned(),
                slug: "game-4".to_owned(),
                image_url: "/images/games/game-4.png".to_owned(),
                category: None,
            })),
        });
    });
    let model = runtime.model().unwrap();
    assert_eq!(
        model.play_history.items.first().map(|item| item.id),
        Some(4),
        "Should pick up plays recorded after the page was loaded"
    );
}

#[test]
fn play_history_empties_after_clear() {
    #[derive(Model, Clone, Debug)]
    #[model(TestEnv)]
    struct TestModel {
        ctx: Ctx,
        play_history: PlayHistory,
    }
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    let (runtime, _rx) = Runtime::<TestEnv, _>::new(
        TestModel {
            ctx: Ctx::new(
                Default::default(),
                Default::default(),
                Default::default(),
                HistoryBucket::new(vec![history_item(1, 11)]),
            ),
            play_history: PlayHistory::default(),
        },
        vec![],
        1000,
    );
    TestEnv::run(|| {
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::Load(ActionLoad::PlayHistory),
        });
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::Ctx(ActionCtx::ClearHistory),
        });
    });
    assert!(
        runtime.model().unwrap().play_history.items.is_empty(),
        "Should render the empty state after the history is cleared"
    );
}
