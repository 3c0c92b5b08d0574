use chrono::{TimeZone, Utc};

use crate::deep_links::{CategoryDeepLinks, GameDeepLinks};
use crate::types::games::{Category, GamePreview};
use crate::types::history::HistoryItem;
use crate::types::locale::Locale;

fn history_item(id: u32, slug: &str, category: Option<&str>) -> HistoryItem {
    HistoryItem {
        id,
        title: "Some Game".to_owned(),
        slug: slug.to_owned(),
        image_url: "/images/games/some-game.png".to_owned(),
        last_played: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
        category: category.map(|category| category.to_owned()),
    }
}

#[test]
fn history_item_deep_links() {
    let item = history_item(7, "bubble-woods", Some("bubble-games"));
    assert_eq!(
        GameDeepLinks::from((&item, &Locale::En)).game,
        "/bubble-games/bubble-woods"
    );
    assert_eq!(
        GameDeepLinks::from((&item, &Locale::Zh)).game,
        "/zh/bubble-games/bubble-woods",
        "Non-default locales should carry the locale prefix"
    );
}

#[test]
fn history_item_deep_links_default_category() {
    let item = history_item(7, "bubble-woods", None);
    assert_eq!(
        GameDeepLinks::from((&item, &Locale::En)).game,
        "/all-games/bubble-woods",
        "Entries without a category should fall back to the catalog-wide one"
    );
}

#[test]
fn history_item_deep_links_home_sentinel() {
    let item = history_item(1, "classic-bubble-shooter", Some("bubble-games"));
    assert_eq!(
        GameDeepLinks::from((&item, &Locale::En)).game,
        "/",
        "The home game entry should link to the site root"
    );
    assert_eq!(GameDeepLinks::from((&item, &Locale::ZhTw)).game, "/zh-TW");
}

#[test]
fn history_item_deep_links_encodes_segments() {
    let item = history_item(7, "bubble shooter 100%", Some("bubble-games"));
    assert_eq!(
        GameDeepLinks::from((&item, &Locale::En)).game,
        "/bubble-games/bubble%20shooter%20100%25"
    );
}

#[test]
fn game_preview_deep_links() {
    let preview = GamePreview {
        id: 2,
        title: "Bubble Woods".to_owned(),
        platform: "Bubble Games".to_owned(),
        image_url: "/images/games/bubble-woods.png".to_owned(),
        href: "/bubble-games/bubble-woods".to_owned(),
    };
    assert_eq!(
        GameDeepLinks::from((&preview, &Locale::En)).game,
        "/bubble-games/bubble-woods"
    );
    assert_eq!(
        GameDeepLinks::from((&preview, &Locale::Fr)).game,
        "/fr/bubble-games/bubble-woods"
    );
}

#[test]
fn category_deep_links() {
    let category = Category::find("bubble-games").unwrap();
    assert_eq!(
        CategoryDeepLinks::from((category, &Locale::En)).category,
        "/bubble-games"
    );
    assert_eq!(
        CategoryDeepLinks::from((category, &Locale::Ja)).category,
        "/ja/bubble-games"
    );
}
