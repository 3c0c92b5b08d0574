use crate::types::games::{Category, GameId};
use lazy_static::lazy_static;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use url::Url;

/// The single well-known key the play history blob is persisted under.
pub const HISTORY_STORAGE_KEY: &str = "gameHistory";
/// Cached catalog for the random-game affordance.
pub const CATALOG_STORAGE_KEY: &str = "allGames";
pub const MAX_HISTORY_ITEMS: usize = 20;
/// Legacy "home game": a history entry with this id links to the site root.
pub const HOME_GAME_ID: GameId = 1;
/// Category used for history links when the entry has none.
pub const DEFAULT_CATEGORY: &str = "all-games";
pub const CATEGORY_PAGE_SIZE: usize = 12;
pub const SEARCH_PAGE_SIZE: usize = 18;
pub const RELATED_GAMES_COUNT: usize = 5;
pub const SITE_NAME: &str = "Bubble Shooters";
pub const URI_COMPONENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

lazy_static! {
    pub static ref BASE_URL: Url =
        Url::parse("https://bubbleshooters.org").expect("BASE_URL parse failed");
    pub static ref CATALOG_API_URL: Url =
        Url::parse("https://bubbleshooters.org/api/games").expect("CATALOG_API_URL parse failed");
    pub static ref CATEGORIES: Vec<Category> = vec![
        Category {
            icon: "🔥".to_owned(),
            name: "Hot Games".to_owned(),
            href: "/hot-games".to_owned(),
            alt: "Most Played Bubble Shooter Games Online".to_owned(),
            key: "hot".to_owned(),
        },
        Category {
            icon: "✨".to_owned(),
            name: "New Games".to_owned(),
            href: "/new-games".to_owned(),
            alt: "Newest Bubble Shooter Games Online".to_owned(),
            key: "new".to_owned(),
        },
        Category {
            icon: "🎯".to_owned(),
            name: "Bubble Games".to_owned(),
            href: "/bubble-games".to_owned(),
            alt: "Classic Bubble Shooter Games Online".to_owned(),
            key: "bubble".to_owned(),
        },
        Category {
            icon: "🧩".to_owned(),
            name: "Puzzle Games".to_owned(),
            href: "/puzzle-games".to_owned(),
            alt: "Bubble Puzzle Games Online".to_owned(),
            key: "puzzle".to_owned(),
        },
        Category {
            icon: "🃏".to_owned(),
            name: "Card Games".to_owned(),
            href: "/card-games".to_owned(),
            alt: "Card Games Online".to_owned(),
            key: "card".to_owned(),
        },
        Category {
            icon: "🏃".to_owned(),
            name: "Junping Games".to_owned(),
            href: "/junping-games".to_owned(),
            alt: "Jumping Games Online".to_owned(),
            key: "junping".to_owned(),
        },
        Category {
            icon: "🎶".to_owned(),
            name: "Music Games".to_owned(),
            href: "/music-games".to_owned(),
            alt: "Music Games Online".to_owned(),
            key: "music".to_owned(),
        },
    ];
}
