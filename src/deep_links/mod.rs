use percent_encoding::utf8_percent_encode;
use serde::Serialize;

use crate::constants::{DEFAULT_CATEGORY, HOME_GAME_ID, URI_COMPONENT_ENCODE_SET};
use crate::types::games::{Category, Game, GamePreview};
use crate::types::history::HistoryItem;
use crate::types::locale::Locale;

/// Navigable link to a game page under the active locale.
#[derive(Clone, PartialEq, Eq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GameDeepLinks {
    pub game: String,
}

impl From<(&HistoryItem, &Locale)> for GameDeepLinks {
    fn from((item, locale): (&HistoryItem, &Locale)) -> Self {
        // The entry with the sentinel id is the featured home game and
        // links to the site root. Kept for compatibility with blobs written
        // by earlier releases.
        let game = if item.id == HOME_GAME_ID {
            locale.root_path()
        } else {
            let category = item.category.as_deref().unwrap_or(DEFAULT_CATEGORY);
            format!(
                "{}/{}/{}",
                locale.path_prefix(),
                utf8_percent_encode(category, URI_COMPONENT_ENCODE_SET),
                utf8_percent_encode(&item.slug, URI_COMPONENT_ENCODE_SET)
            )
        };
        GameDeepLinks { game }
    }
}

impl From<(&GamePreview, &Locale)> for GameDeepLinks {
    fn from((game, locale): (&GamePreview, &Locale)) -> Self {
        GameDeepLinks {
            game: format!("{}{}", locale.path_prefix(), game.href),
        }
    }
}

impl From<(&Game, &Locale)> for GameDeepLinks {
    fn from((game, locale): (&Game, &Locale)) -> Self {
        GameDeepLinks {
            game: format!("{}{}", locale.path_prefix(), game.href),
        }
    }
}

/// Navigable link to a category page under the active locale.
#[derive(Clone, PartialEq, Eq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDeepLinks {
    pub category: String,
}

impl From<(&Category, &Locale)> for CategoryDeepLinks {
    fn from((category, locale): (&Category, &Locale)) -> Self {
        CategoryDeepLinks {
            category: format!("{}{}", locale.path_prefix(), category.href),
        }
    }
}
