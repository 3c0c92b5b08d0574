use std::any::Any;

use bubbleshooters_derive::Model;
use chrono::{TimeZone, Utc};
use futures::future;

use crate::constants::CATALOG_STORAGE_KEY;
use crate::models::common::Loadable;
use crate::models::ctx::Ctx;
use crate::models::random_game::RandomGame;
use crate::runtime::msg::{Action, ActionRandomGame};
use crate::runtime::{Env, EnvError, EnvFutureExt, Runtime, RuntimeAction, TryEnvFuture};
use crate::types::games::{CatalogResponse, GamePreview};
use crate::unit_tests::{
    default_fetch_handler, Request, TestEnv, FETCH_HANDLER, NOW, REQUESTS, STORAGE,
};

fn preview(id: u32, href: &str) -> GamePreview {
    GamePreview {
        id,
        title: format!("Game {id}"),
        platform: "Bubble Games".to_owned(),
        image_url: format!("/images/games/{id}.png"),
        href: href.to_owned(),
    }
}

fn previews() -> Vec<GamePreview> {
    vec![
        preview(1, "/bubble-games/classic-bubble-shooter"),
        preview(2, "/bubble-games/bubble-woods"),
        preview(3, "/puzzle-games/mahjong-garden"),
    ]
}

fn expected_pick(games: &[GamePreview]) -> &GamePreview {
    let index = TestEnv::now().timestamp_millis().unsigned_abs() as usize % games.len();
    &games[index]
}

#[test]
fn actionrandomgame_open_uses_cached_catalog() {
    #[derive(Model, Clone, Debug)]
    #[model(TestEnv)]
    struct TestModel {
        ctx: Ctx,
        random_game: RandomGame,
    }
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    *NOW.write().unwrap() = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let games = previews();
    STORAGE.write().unwrap().insert(
        CATALOG_STORAGE_KEY.to_owned(),
        serde_json::to_string(&games).unwrap(),
    );
    let (runtime, _rx) = Runtime::<TestEnv, _>::new(
        TestModel {
            ctx: Ctx::default(),
            random_game: RandomGame::default(),
        },
        vec![],
        1000,
    );
    TestEnv::run(|| {
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::RandomGame(ActionRandomGame::Open),
        });
    });
    let model = runtime.model().unwrap();
    assert_eq!(
        model
            .random_game
            .picked
            .as_ref()
            .map(|deep_links| deep_links.game.to_owned()),
        Some(expected_pick(&games).href.to_owned()),
        "Should have picked a game from the cached catalog"
    );
    assert!(
        REQUESTS.read().unwrap().is_empty(),
        "Should not have touched the catalog API"
    );
}

#[test]
fn actionrandomgame_open_fetches_and_caches_catalog() {
    #[derive(Model, Clone, Debug)]
    #[model(TestEnv)]
    struct TestModel {
        ctx: Ctx,
        random_game: RandomGame,
    }
    fn fetch_handler(request: Request) -> TryEnvFuture<Box<dyn Any + Send>> {
        match request {
            Request { url, method, .. }
                if url == "https://bubbleshooters.org/api/games?locale=en"
                    && method == "GET" =>
            {
                future::ok(Box::new(CatalogResponse { games: previews() }) as Box<dyn Any + Send>)
                    .boxed_env()
            }
            _ => default_fetch_handler(request),
        }
    }
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    *FETCH_HANDLER.write().unwrap() = Box::new(fetch_handler);
    *NOW.write().unwrap() = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let (runtime, _rx) = Runtime::<TestEnv, _>::new(
        TestModel {
            ctx: Ctx::default(),
            random_game: RandomGame::default(),
        },
        vec![],
        1000,
    );
    TestEnv::run(|| {
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::RandomGame(ActionRandomGame::Open),
        });
    });
    let model = runtime.model().unwrap();
    assert_eq!(
        REQUESTS.read().unwrap().len(),
        1,
        "Should have fetched the catalog once"
    );
    assert!(
        matches!(&model.random_game.catalog, Some(Loadable::Ready(games)) if games.len() == 3),
        "Should hold the fetched catalog"
    );
    assert_eq!(
        model
            .random_game
            .picked
            .as_ref()
            .map(|deep_links| deep_links.game.to_owned()),
        Some(expected_pick(&previews()).href.to_owned()),
    );
    assert!(
        STORAGE
            .read()
            .unwrap()
            .get(CATALOG_STORAGE_KEY)
            .map_or(false, |data| {
                serde_json::from_str::<Vec<GamePreview>>(data)
                    .map_or(false, |games| games.len() == 3)
            }),
        "Should have cached the fetched catalog"
    );
}

#[test]
fn actionrandomgame_open_fetch_failure_resolves_loading() {
    #[derive(Model, Clone, Debug)]
    #[model(TestEnv)]
    struct TestModel {
        ctx: Ctx,
        random_game: RandomGame,
    }
    fn fetch_handler(_request: Request) -> TryEnvFuture<Box<dyn Any + Send>> {
        future::err(EnvError::Fetch("connection refused".to_owned())).boxed_env()
    }
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    *FETCH_HANDLER.write().unwrap() = Box::new(fetch_handler);
    let (runtime, _rx) = Runtime::<TestEnv, _>::new(
        TestModel {
            ctx: Ctx::default(),
            random_game: RandomGame::default(),
        },
        vec![],
        1000,
    );
    TestEnv::run(|| {
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::RandomGame(ActionRandomGame::Open),
        });
    });
    let model = runtime.model().unwrap();
    assert!(
        matches!(&model.random_game.catalog, Some(Loadable::Err(_))),
        "The loading state must resolve even when the fetch fails"
    );
    assert_eq!(
        model.random_game.picked, None,
        "No link should be picked, so no navigation happens"
    );
}

#[test]
fn actionrandomgame_open_drops_corrupt_cache() {
    #[derive(Model, Clone, Debug)]
    #[model(TestEnv)]
    struct TestModel {
        ctx: Ctx,
        random_game: RandomGame,
    }
    fn fetch_handler(request: Request) -> TryEnvFuture<Box<dyn Any + Send>> {
        match request {
            Request { url, .. } if url == "https://bubbleshooters.org/api/games?locale=en" => {
                future::ok(Box::new(CatalogResponse { games: previews() }) as Box<dyn Any + Send>)
                    .boxed_env()
            }
            _ => default_fetch_handler(request),
        }
    }
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    *FETCH_HANDLER.write().unwrap() = Box::new(fetch_handler);
    *NOW.write().unwrap() = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    STORAGE.write().unwrap().insert(
        CATALOG_STORAGE_KEY.to_owned(),
        "certainly not a catalog".to_owned(),
    );
    let (runtime, _rx) = Runtime::<TestEnv, _>::new(
        TestModel {
            ctx: Ctx::default(),
            random_game: RandomGame::default(),
        },
        vec![],
        1000,
    );
    TestEnv::run(|| {
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::RandomGame(ActionRandomGame::Open),
        });
    });
    let model = runtime.model().unwrap();
    assert!(
        model.random_game.picked.is_some(),
        "Should have recovered by fetching a fresh catalog"
    );
    assert!(
        STORAGE
            .read()
            .unwrap()
            .get(CATALOG_STORAGE_KEY)
            .map_or(false, |data| serde_json::from_str::<Vec<GamePreview>>(data).is_ok()),
        "The corrupt cache should have been replaced by the fetched catalog"
    );
}
