use serde::Serialize;

use crate::types::games::{Category, Game};
use crate::types::locale::{Locale, Messages};

const DEFAULT_HOME_LABEL: &str = "Home";

/// One crumb of a page trail. The home crumb is implicit; trails start at
/// the first level below the root.
#[derive(Clone, PartialEq, Eq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbItem {
    pub label: String,
    pub href: String,
    pub is_current_page: bool,
}

pub fn home_crumb(messages: &Messages, locale: &Locale) -> BreadcrumbItem {
    BreadcrumbItem {
        label: messages
            .get_or("game.breadcrumb.home", DEFAULT_HOME_LABEL)
            .to_owned(),
        href: locale.root_path(),
        is_current_page: false,
    }
}

pub fn category_trail(category: &Category, locale: &Locale) -> Vec<BreadcrumbItem> {
    vec![BreadcrumbItem {
        label: category.name.to_owned(),
        href: format!("{}{}", locale.path_prefix(), category.href),
        is_current_page: true,
    }]
}

pub fn game_trail(category: &Category, game: &Game, locale: &Locale) -> Vec<BreadcrumbItem> {
    vec![
        BreadcrumbItem {
            label: category.name.to_owned(),
            href: format!("{}{}", locale.path_prefix(), category.href),
            is_current_page: false,
        },
        BreadcrumbItem {
            label: game.title.to_owned(),
            href: format!("{}{}", locale.path_prefix(), game.href),
            is_current_page: true,
        },
    ]
}
