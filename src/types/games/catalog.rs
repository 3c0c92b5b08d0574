use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::constants::RELATED_GAMES_COUNT;
use crate::types::games::{Game, GamePreview};

/// The per-locale catalog document, loaded by the shell from the game data
/// files for the active locale.
#[derive(Default, Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GameCatalog {
    #[serde(default)]
    pub game_list: Vec<Game>,
    #[serde(default)]
    pub popular_games: Vec<Game>,
    #[serde(default)]
    pub new_games: Vec<Game>,
}

impl GameCatalog {
    pub fn game_by_path(&self, path: &str) -> Option<&Game> {
        self.game_list.iter().find(|game| game.href == path)
    }
    /// Other games of the same category, for the related-games strip of a
    /// game page.
    pub fn related_games(&self, game: &Game) -> Vec<&Game> {
        let category_prefix = format!("/{}/", game.category_slug());
        self.game_list
            .iter()
            .filter(|other| other.id != game.id && other.href.starts_with(&category_prefix))
            .take(RELATED_GAMES_COUNT)
            .collect_vec()
    }
}

/// Response of the catalog query interface (`GET /api/games?locale={}`).
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct CatalogResponse {
    pub games: Vec<GamePreview>,
}
