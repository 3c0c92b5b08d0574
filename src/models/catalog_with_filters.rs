use boolinator::Boolinator;
use derivative::Derivative;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::constants::{CATEGORIES, CATEGORY_PAGE_SIZE, SEARCH_PAGE_SIZE};
use crate::models::common::eq_update;
use crate::models::ctx::Ctx;
use crate::runtime::msg::{Action, ActionCatalogWithFilters, ActionLoad, Msg};
use crate::runtime::{Effects, Env, UpdateWithCtx};
use crate::types::games::{Category, Game, GameCatalog, GamePreview};

#[derive(Default, Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct Selected {
    /// Path segment of the selected category, e.g. `bubble-games`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Free-text query matched case-insensitively against title, platform
    /// and description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

#[derive(PartialEq, Eq, Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SelectableCategory {
    pub name: String,
    pub slug: String,
    pub selected: bool,
}

#[derive(PartialEq, Eq, Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SelectablePage {
    pub skip: usize,
}

#[derive(Default, PartialEq, Eq, Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Selectable {
    pub categories: Vec<SelectableCategory>,
    pub next_page: Option<SelectablePage>,
}

/// Category browsing and search over the per-locale catalog: a linear
/// predicate scan with take-first-N windowing, no backing index.
#[derive(Derivative, Serialize, Clone, Debug)]
#[derivative(Default)]
pub struct CatalogWithFilters {
    pub selected: Option<Selected>,
    pub selectable: Selectable,
    pub catalog: Vec<GamePreview>,
    /// Size of the current take-first-N window.
    #[derivative(Default(value = "SEARCH_PAGE_SIZE"))]
    pub limit: usize,
}

impl<E: Env + 'static> UpdateWithCtx<E> for CatalogWithFilters {
    fn update(&mut self, msg: &Msg, ctx: &Ctx) -> Effects {
        match msg {
            Msg::Action(Action::Load(ActionLoad::CatalogWithFilters(selected))) => {
                self.limit = page_size(selected);
                let selected_effects = eq_update(&mut self.selected, Some(selected.to_owned()));
                let catalog_effects =
                    catalog_update(&mut self.catalog, &self.selected, self.limit, &ctx.catalog);
                let selectable_effects = selectable_update(
                    &mut self.selectable,
                    &self.selected,
                    self.limit,
                    &ctx.catalog,
                );
                selected_effects
                    .join(catalog_effects)
                    .join(selectable_effects)
            }
            Msg::Action(Action::Unload) => {
                self.limit = SEARCH_PAGE_SIZE;
                let selected_effects = eq_update(&mut self.selected, None);
                let catalog_effects = eq_update(&mut self.catalog, vec![]);
                let selectable_effects = selectable_update(
                    &mut self.selectable,
                    &self.selected,
                    self.limit,
                    &ctx.catalog,
                );
                selected_effects
                    .join(catalog_effects)
                    .join(selectable_effects)
            }
            Msg::Action(Action::CatalogWithFilters(ActionCatalogWithFilters::Search(query))) => {
                let next_selected = Selected {
                    category: self
                        .selected
                        .as_ref()
                        .and_then(|selected| selected.category.to_owned()),
                    search: (!query.is_empty()).as_some(query.to_owned()),
                };
                // A new query resets the window.
                self.limit = page_size(&next_selected);
                let selected_effects = eq_update(&mut self.selected, Some(next_selected));
                let catalog_effects =
                    catalog_update(&mut self.catalog, &self.selected, self.limit, &ctx.catalog);
                let selectable_effects = selectable_update(
                    &mut self.selectable,
                    &self.selected,
                    self.limit,
                    &ctx.catalog,
                );
                selected_effects
                    .join(catalog_effects)
                    .join(selectable_effects)
            }
            Msg::Action(Action::CatalogWithFilters(ActionCatalogWithFilters::LoadNextPage))
                if self.selectable.next_page.is_some() =>
            {
                self.limit += self.selected.as_ref().map_or(SEARCH_PAGE_SIZE, page_size);
                let catalog_effects =
                    catalog_update(&mut self.catalog, &self.selected, self.limit, &ctx.catalog);
                let selectable_effects = selectable_update(
                    &mut self.selectable,
                    &self.selected,
                    self.limit,
                    &ctx.catalog,
                );
                catalog_effects.join(selectable_effects)
            }
            _ => Effects::none().unchanged(),
        }
    }
}

fn page_size(selected: &Selected) -> usize {
    if selected.category.is_some() {
        CATEGORY_PAGE_SIZE
    } else {
        SEARCH_PAGE_SIZE
    }
}

fn filtered_games<'a>(catalog: &'a GameCatalog, selected: &Selected) -> Vec<&'a Game> {
    let category = match &selected.category {
        Some(slug) => match Category::find(slug) {
            Some(category) => Some(category),
            // An unknown category matches nothing.
            None => return vec![],
        },
        None => None,
    };
    catalog
        .game_list
        .iter()
        .filter(|game| match category {
            Some(category) => game.platform.eq_ignore_ascii_case(&category.name),
            None => true,
        })
        .filter(|game| match &selected.search {
            Some(query) => {
                let query = query.to_lowercase();
                game.title.to_lowercase().contains(&query)
                    || game.platform.to_lowercase().contains(&query)
                    || game.description.to_lowercase().contains(&query)
            }
            None => true,
        })
        .collect_vec()
}

fn catalog_update(
    catalog: &mut Vec<GamePreview>,
    selected: &Option<Selected>,
    limit: usize,
    game_catalog: &GameCatalog,
) -> Effects {
    let next_catalog = match selected {
        Some(selected) => filtered_games(game_catalog, selected)
            .into_iter()
            .take(limit)
            .map(GamePreview::from)
            .collect_vec(),
        None => vec![],
    };
    eq_update(catalog, next_catalog)
}

fn selectable_update(
    selectable: &mut Selectable,
    selected: &Option<Selected>,
    limit: usize,
    game_catalog: &GameCatalog,
) -> Effects {
    let categories = CATEGORIES
        .iter()
        .map(|category| SelectableCategory {
            name: category.name.to_owned(),
            slug: category.slug().to_owned(),
            selected: selected
                .as_ref()
                .and_then(|selected| selected.category.as_deref())
                .map_or(false, |slug| {
                    slug == category.slug() || slug == category.key
                }),
        })
        .collect_vec();
    let next_page = match selected {
        Some(selected) => (filtered_games(game_catalog, selected).len() > limit)
            .as_some(SelectablePage { skip: limit }),
        None => None,
    };
    let next_selectable = Selectable {
        categories,
        next_page,
    };
    eq_update(selectable, next_selectable)
}
