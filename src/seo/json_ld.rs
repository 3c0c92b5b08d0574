use serde::Serialize;
use url::Url;

use crate::constants::SITE_NAME;
use crate::seo::metadata::page_url;
use crate::types::games::{Category, Game};

pub const SCHEMA_ORG_CONTEXT: &str = "https://schema.org";

const SITE_DESCRIPTION: &str =
    "Play bubble shooter games online for free. Enjoy classic, 3D, and puzzle bubble shooter \
     games with no download required.";
const GAME_GENRES: [&str; 3] = ["Puzzle", "Arcade", "Casual"];
const GAME_PLATFORMS: [&str; 2] = ["Web Browser", "Mobile"];
const SERIES_GENRES: [&str; 3] = ["Bubble Games", "Puzzle Games", "Matching Games"];

/// The structured-data document injected into a server-rendered page.
#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct JsonLd {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@graph")]
    pub graph: Vec<JsonLdNode>,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
#[serde(tag = "@type")]
pub enum JsonLdNode {
    WebSite(WebSite),
    VideoGame(VideoGame),
    CollectionPage(CollectionPage),
    VideoGameSeries(VideoGameSeries),
    BreadcrumbList(BreadcrumbList),
}

#[derive(Clone, PartialEq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct WebSite {
    #[serde(rename = "@id")]
    pub id: String,
    pub url: Url,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub potential_action: Option<SearchAction>,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SearchAction {
    #[serde(rename = "@type")]
    pub r#type: String,
    pub target: String,
    #[serde(rename = "query-input")]
    pub query_input: String,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct VideoGame {
    #[serde(rename = "@id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub genre: Vec<String>,
    pub game_platform: Vec<String>,
    pub application_category: String,
    pub operating_system: String,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CollectionPage {
    #[serde(rename = "@id")]
    pub id: String,
    pub url: Url,
    pub name: String,
    pub description: String,
    pub is_part_of: Reference,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct Reference {
    #[serde(rename = "@id")]
    pub id: String,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct VideoGameSeries {
    #[serde(rename = "@id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub game_platform: String,
    pub genre: Vec<String>,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbList {
    pub item_list_element: Vec<ListItem>,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct ListItem {
    #[serde(rename = "@type")]
    pub r#type: String,
    pub position: u32,
    pub name: String,
    pub item: String,
}

impl WebSite {
    fn site(potential_action: Option<SearchAction>) -> Self {
        WebSite {
            id: format!("{}#website", page_url("/")),
            url: page_url("/"),
            name: SITE_NAME.to_owned(),
            description: SITE_DESCRIPTION.to_owned(),
            potential_action,
        }
    }
}

impl BreadcrumbList {
    fn new(crumbs: Vec<(String, String)>) -> Self {
        BreadcrumbList {
            item_list_element: crumbs
                .into_iter()
                .enumerate()
                .map(|(index, (name, path))| ListItem {
                    r#type: "ListItem".to_owned(),
                    position: index as u32 + 1,
                    name,
                    item: page_url(&path).to_string(),
                })
                .collect(),
        }
    }
}

impl JsonLd {
    pub fn home() -> Self {
        JsonLd {
            context: SCHEMA_ORG_CONTEXT.to_owned(),
            graph: vec![
                JsonLdNode::WebSite(WebSite::site(Some(SearchAction {
                    r#type: "SearchAction".to_owned(),
                    target: format!("{}search?q={{search_term_string}}", page_url("/")),
                    query_input: "required name=search_term_string".to_owned(),
                }))),
                JsonLdNode::VideoGame(VideoGame {
                    id: format!("{}#game", page_url("/")),
                    name: "Bubble Shooter".to_owned(),
                    description: "Classic bubble shooter game where you match and pop colorful \
                                  bubbles to clear the board."
                        .to_owned(),
                    genre: GAME_GENRES.iter().map(|genre| genre.to_string()).collect(),
                    game_platform: GAME_PLATFORMS
                        .iter()
                        .map(|platform| platform.to_string())
                        .collect(),
                    application_category: "Game".to_owned(),
                    operating_system: "Web Browser".to_owned(),
                }),
            ],
        }
    }

    pub fn game(game: &Game) -> Self {
        let description = if game.description.is_empty() {
            format!(
                "Play {} online for free in your browser. No download required.",
                game.title
            )
        } else {
            game.description.to_owned()
        };
        JsonLd {
            context: SCHEMA_ORG_CONTEXT.to_owned(),
            graph: vec![
                JsonLdNode::WebSite(WebSite::site(None)),
                JsonLdNode::VideoGame(VideoGame {
                    id: format!("{}#game", page_url(&game.href)),
                    name: game.title.to_owned(),
                    description,
                    genre: GAME_GENRES.iter().map(|genre| genre.to_string()).collect(),
                    game_platform: GAME_PLATFORMS
                        .iter()
                        .map(|platform| platform.to_string())
                        .collect(),
                    application_category: "Game".to_owned(),
                    operating_system: "Web Browser".to_owned(),
                }),
            ],
        }
    }

    pub fn category(category: &Category) -> Self {
        let description = format!(
            "Want to play {0}? Play best {0} online for free in your browser. No download \
             required. Enjoy {0} instantly.",
            category.name
        );
        JsonLd {
            context: SCHEMA_ORG_CONTEXT.to_owned(),
            graph: vec![
                JsonLdNode::CollectionPage(CollectionPage {
                    id: format!("{}#webpage", page_url(&category.href)),
                    url: page_url(&category.href),
                    name: format!("{} - {}", category.name, SITE_NAME),
                    description: description.to_owned(),
                    is_part_of: Reference {
                        id: format!("{}#website", page_url("/")),
                    },
                }),
                JsonLdNode::VideoGameSeries(VideoGameSeries {
                    id: format!("{}#gameseries", page_url(&category.href)),
                    name: format!("{} Collection", category.name),
                    description,
                    game_platform: category.name.to_owned(),
                    genre: SERIES_GENRES.iter().map(|genre| genre.to_string()).collect(),
                }),
                JsonLdNode::BreadcrumbList(BreadcrumbList::new(vec![
                    ("Home".to_owned(), "/".to_owned()),
                    ("All Games".to_owned(), "/all-games".to_owned()),
                    (category.name.to_owned(), category.href.to_owned()),
                ])),
            ],
        }
    }
}
