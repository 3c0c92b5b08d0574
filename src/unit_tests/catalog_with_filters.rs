use bubbleshooters_derive::Model;

use crate::constants::{CATEGORY_PAGE_SIZE, SEARCH_PAGE_SIZE};
use crate::models::catalog_with_filters::{CatalogWithFilters, Selected};
use crate::models::ctx::Ctx;
use crate::runtime::msg::{Action, ActionCatalogWithFilters, ActionLoad};
use crate::runtime::{Runtime, RuntimeAction};
use crate::types::games::{Game, GameCatalog};
use crate::unit_tests::TestEnv;

fn game(id: u32, title: &str, platform: &str, description: &str) -> Game {
    Game {
        id,
        title: title.to_owned(),
        platform: platform.to_owned(),
        image_url: format!("/images/games/{id}.png"),
        href: format!(
            "/{}/{}",
            platform.to_lowercase().replace(' ', "-"),
            title.to_lowercase().replace(' ', "-")
        ),
        description: description.to_owned(),
        embed_url: format!("https://cdn.bubbleshooter.com/games/{id}/"),
        seo_description: None,
    }
}

fn catalog() -> GameCatalog {
    GameCatalog {
        game_list: vec![
            game(1, "Classic Bubble Shooter", "Bubble Games", "Pop colorful bubbles"),
            game(2, "Bubble Woods", "Bubble Games", "A forest full of bubbles"),
            game(3, "Mahjong Garden", "Puzzle Games", "Relaxing tile matching"),
            game(4, "Solitaire Kings", "Card Games", "The classic card game"),
        ],
        ..Default::default()
    }
}

fn ctx() -> Ctx {
    Ctx::new(
        Default::default(),
        Default::default(),
        catalog(),
        Default::default(),
    )
}

#[test]
fn catalog_filters_by_category_platform() {
    #[derive(Model, Clone, Debug)]
    #[model(TestEnv)]
    struct TestModel {
        ctx: Ctx,
        catalog: CatalogWithFilters,
    }
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    let (runtime, _rx) = Runtime::<TestEnv, _>::new(
        TestModel {
            ctx: ctx(),
            catalog: CatalogWithFilters::default(),
        },
        vec![],
        1000,
    );
    TestEnv::run(|| {
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::Load(ActionLoad::CatalogWithFilters(Selected {
                category: Some("bubble-games".to_owned()),
                search: None,
            })),
        });
    });
    let model = runtime.model().unwrap();
    assert_eq!(
        model
            .catalog
            .catalog
            .iter()
            .map(|game| game.id)
            .collect::<Vec<_>>(),
        vec![1, 2],
        "Should only contain games of the selected category"
    );
    assert!(
        model
            .catalog
            .selectable
            .categories
            .iter()
            .any(|category| category.slug == "bubble-games" && category.selected),
        "Should flag the selected category"
    );
}

#[test]
fn catalog_search_is_case_insensitive_substring() {
    #[derive(Model, Clone, Debug)]
    #[model(TestEnv)]
    struct TestModel {
        ctx: Ctx,
        catalog: CatalogWithFilters,
    }
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    let (runtime, _rx) = Runtime::<TestEnv, _>::new(
        TestModel {
            ctx: ctx(),
            catalog: CatalogWithFilters::default(),
        },
        vec![],
        1000,
    );
    TestEnv::run(|| {
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::Load(ActionLoad::CatalogWithFilters(Selected::default())),
        });
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::CatalogWithFilters(ActionCatalogWithFilters::Search(
                "BUBBLE".to_owned(),
            )),
        });
    });
    {
        let model = runtime.model().unwrap();
        assert_eq!(
            model
                .catalog
                .catalog
                .iter()
                .map(|game| game.id)
                .collect::<Vec<_>>(),
            vec![1, 2],
            "Should match the query against title and platform, ignoring case"
        );
    }
    TestEnv::run(|| {
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::CatalogWithFilters(ActionCatalogWithFilters::Search(
                "tile matching".to_owned(),
            )),
        });
    });
    let model = runtime.model().unwrap();
    assert_eq!(
        model
            .catalog
            .catalog
            .iter()
            .map(|game| game.id)
            .collect::<Vec<_>>(),
        vec![3],
        "Should match the query against the description as well"
    );
}

#[test]
fn catalog_load_next_page_extends_the_window() {
    #[derive(Model, Clone, Debug)]
    #[model(TestEnv)]
    struct TestModel {
        ctx: Ctx,
        catalog: CatalogWithFilters,
    }
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    let game_list = (1..=30)
        .map(|id| game(id, &format!("Bubble Game {id}"), "Bubble Games", ""))
        .collect::<Vec<_>>();
    let (runtime, _rx) = Runtime::<TestEnv, _>::new(
        TestModel {
            ctx: Ctx::new(
                Default::default(),
                Default::default(),
                GameCatalog {
                    game_list,
                    ..Default::default()
                },
                Default::default(),
            ),
            catalog: CatalogWithFilters::default(),
        },
        vec![],
        1000,
    );
    TestEnv::run(|| {
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::Load(ActionLoad::CatalogWithFilters(Selected {
                category: Some("bubble-games".to_owned()),
                search: None,
            })),
        });
    });
    {
        let model = runtime.model().unwrap();
        assert_eq!(model.catalog.catalog.len(), CATEGORY_PAGE_SIZE);
        assert_eq!(
            model
                .catalog
                .selectable
                .next_page
                .as_ref()
                .map(|page| page.skip),
            Some(CATEGORY_PAGE_SIZE)
        );
    }
    TestEnv::run(|| {
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::CatalogWithFilters(ActionCatalogWithFilters::LoadNextPage),
        });
    });
    {
        let model = runtime.model().unwrap();
        assert_eq!(model.catalog.catalog.len(), 2 * CATEGORY_PAGE_SIZE);
    }
    TestEnv::run(|| {
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::CatalogWithFilters(ActionCatalogWithFilters::LoadNextPage),
        });
    });
    let model = runtime.model().unwrap();
    assert_eq!(
        model.catalog.catalog.len(),
        30,
        "Should stop at the end of the filtered list"
    );
    assert_eq!(
        model.catalog.selectable.next_page, None,
        "Should not offer another page"
    );
}

#[test]
fn catalog_search_resets_the_window() {
    #[derive(Model, Clone, Debug)]
    #[model(TestEnv)]
    struct TestModel {
        ctx: Ctx,
        catalog: CatalogWithFilters,
    }
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    let game_list = (1..=40)
        .map(|id| game(id, &format!("Bubble Game {id}"), "Bubble Games", ""))
        .collect::<Vec<_>>();
    let (runtime, _rx) = Runtime::<TestEnv, _>::new(
        TestModel {
            ctx: Ctx::new(
                Default::default(),
                Default::default(),
                GameCatalog {
                    game_list,
                    ..Default::default()
                },
                Default::default(),
            ),
            catalog: CatalogWithFilters::default(),
        },
        vec![],
        1000,
    );
    TestEnv::run(|| {
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::Load(ActionLoad::CatalogWithFilters(Selected::default())),
        });
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::CatalogWithFilters(ActionCatalogWithFilters::LoadNextPage),
        });
    });
    assert_eq!(
        runtime.model().unwrap().catalog.catalog.len(),
        2 * SEARCH_PAGE_SIZE
    );
    TestEnv::run(|| {
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::CatalogWithFilters(ActionCatalogWithFilters::Search(
                "bubble".to_owned(),
            )),
        });
    });
    assert_eq!(
        runtime.model().unwrap().catalog.catalog.len(),
        SEARCH_PAGE_SIZE,
        "A new query should reset the take-first-N window"
    );
}

#[test]
fn catalog_unknown_category_matches_nothing() {
    #[derive(Model, Clone, Debug)]
    #[model(TestEnv)]
    struct TestModel {
        ctx: Ctx,
        catalog: CatalogWithFilters,
    }
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    let (runtime, _rx) = Runtime::<TestEnv, _>::new(
        TestModel {
            ctx: ctx(),
            catalog: CatalogWithFilters::default(),
        },
        vec![],
        1000,
    );
    TestEnv::run(|| {
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::Load(ActionLoad::CatalogWithFilters(Selected {
                category: Some("no-such-games".to_owned()),
                search: None,
            })),
        });
    });
    assert!(
        runtime.model().unwrap().catalog.catalog.is_empty(),
        "An unknown category should not match any games"
    );
}
