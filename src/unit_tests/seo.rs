use serde_json::json;
use strum::IntoEnumIterator;

use crate::seo::{JsonLd, JsonLdNode, PageMetadata};
use crate::types::games::{Category, Game};
use crate::types::locale::{Locale, Messages};

fn game() -> Game {
    Game {
        id: 2,
        title: "Bubble Woods".to_owned(),
        platform: "Bubble Games".to_owned(),
        image_url: "/images/games/bubble-woods.png".to_owned(),
        href: "/bubble-games/bubble-woods".to_owned(),
        description: "A forest full of bubbles".to_owned(),
        embed_url: "https://cdn.bubbleshooter.com/games/bubble-woods/".to_owned(),
        seo_description: None,
    }
}

#[test]
fn home_metadata_enumerates_locale_alternates() {
    let metadata = PageMetadata::home(&Messages::default(), &Locale::En);
    assert_eq!(metadata.canonical.as_str(), "https://bubbleshooters.org/");
    assert_eq!(metadata.alternates.len(), Locale::iter().count());
    assert!(
        metadata
            .alternates
            .iter()
            .any(|alternate| alternate.hreflang == "zh-TW"
                && alternate.href.as_str() == "https://bubbleshooters.org/zh-TW"),
        "Should keep the exact locale codes in the hreflang alternates"
    );
    assert!(
        metadata
            .alternates
            .iter()
            .any(|alternate| alternate.hreflang == "en"
                && alternate.href.as_str() == "https://bubbleshooters.org/"),
        "The default locale should stay unprefixed"
    );
}

#[test]
fn game_metadata_substitutes_templates() {
    let messages = Messages::from(json!({
        "game": {
            "metadata": {
                "title": "{title} kostenlos spielen",
                "description": "Spiele {title} aus {platform} direkt im Browser"
            }
        }
    }));
    let metadata = PageMetadata::game(&game(), &messages, &Locale::De);
    assert_eq!(metadata.title, "Bubble Woods kostenlos spielen");
    assert_eq!(
        metadata.description,
        "Spiele Bubble Woods aus Bubble Games direkt im Browser"
    );
    assert_eq!(
        metadata.canonical.as_str(),
        "https://bubbleshooters.org/bubble-games/bubble-woods",
        "The canonical URL should point at the default-locale page"
    );
    assert_eq!(
        metadata
            .open_graph
            .as_ref()
            .map(|open_graph| open_graph.url.as_str()),
        Some("https://bubbleshooters.org/de/bubble-games/bubble-woods"),
        "The Open Graph URL should point at the localized page"
    );
}

#[test]
fn game_metadata_falls_back_to_default_templates() {
    let metadata = PageMetadata::game(&game(), &Messages::default(), &Locale::En);
    assert_eq!(metadata.title, "Play Bubble Woods Online - Bubble Shooters");
    assert!(metadata.description.contains("Bubble Woods"));
    assert!(metadata.description.contains("Bubble Games"));
}

#[test]
fn category_metadata() {
    let category = Category::find("bubble-games").unwrap();
    let metadata = PageMetadata::category(category, &Messages::default());
    assert_eq!(metadata.title, "Bubble Games - Bubble Shooters");
    assert_eq!(
        metadata.canonical.as_str(),
        "https://bubbleshooters.org/bubble-games"
    );
    assert!(metadata.open_graph.is_none());
}

#[test]
fn home_json_ld_graph() {
    let value = serde_json::to_value(JsonLd::home()).unwrap();
    assert_eq!(value["@context"], json!("https://schema.org"));
    assert_eq!(value["@graph"][0]["@type"], json!("WebSite"));
    assert_eq!(
        value["@graph"][0]["@id"],
        json!("https://bubbleshooters.org/#website")
    );
    assert_eq!(
        value["@graph"][0]["potentialAction"]["target"],
        json!("https://bubbleshooters.org/search?q={search_term_string}")
    );
    assert_eq!(value["@graph"][1]["@type"], json!("VideoGame"));
}

#[test]
fn game_json_ld_graph() {
    let value = serde_json::to_value(JsonLd::game(&game())).unwrap();
    assert_eq!(value["@graph"][1]["@type"], json!("VideoGame"));
    assert_eq!(
        value["@graph"][1]["@id"],
        json!("https://bubbleshooters.org/bubble-games/bubble-woods#game")
    );
    assert_eq!(value["@graph"][1]["name"], json!("Bubble Woods"));
    assert_eq!(
        value["@graph"][1]["gamePlatform"],
        json!(["Web Browser", "Mobile"])
    );
}

#[test]
fn category_json_ld_breadcrumbs() {
    let category = Category::find("bubble-games").unwrap();
    let json_ld = JsonLd::category(category);
    let breadcrumbs = json_ld
        .graph
        .iter()
        .find_map(|node| match node {
            JsonLdNode::BreadcrumbList(list) => Some(list),
            _ => None,
        })
        .expect("Should contain a breadcrumb list");
    assert_eq!(
        breadcrumbs
            .item_list_element
            .iter()
            .map(|item| (item.position, item.name.as_str()))
            .collect::<Vec<_>>(),
        vec![(1, "Home"), (2, "All Games"), (3, "Bubble Games")]
    );
    let value = serde_json::to_value(&json_ld).unwrap();
    assert_eq!(value["@graph"][0]["@type"], json!("CollectionPage"));
    assert_eq!(value["@graph"][1]["@type"], json!("VideoGameSeries"));
    assert_eq!(
        value["@graph"][2]["itemListElement"][0]["item"],
        json!("https://bubbleshooters.org/")
    );
}
