use serde::Serialize;
use strum::IntoEnumIterator;
use url::Url;

use crate::constants::{BASE_URL, SITE_NAME};
use crate::types::games::{Category, Game};
use crate::types::locale::{Locale, Messages};

// Fallback templates, used when the locale dictionary does not provide its
// own. `{title}` and `{platform}` are substituted before rendering.
const DEFAULT_HOME_TITLE: &str = "Bubble Shooters - Play Free Bubble Shooter Games Online";
const DEFAULT_HOME_DESCRIPTION: &str =
    "Play bubble shooter games online for free. Enjoy classic, 3D, and puzzle bubble shooter \
     games with no download required.";
const DEFAULT_HOME_KEYWORDS: &str = "bubble shooter, bubble games, free online games";
const DEFAULT_GAME_TITLE: &str = "Play {title} Online - Bubble Shooters";
const DEFAULT_GAME_DESCRIPTION: &str =
    "Play {title} online for free in your browser. No download required. Enjoy {platform} \
     instantly.";
const DEFAULT_CATEGORY_TITLE: &str = "{platform} - Bubble Shooters";
const DEFAULT_CATEGORY_DESCRIPTION: &str =
    "Want to play {platform}? Play best {platform} online for free in your browser. No download \
     required.";
const DEFAULT_HISTORY_TITLE: &str = "Play History - Bubble Shooters";
const DEFAULT_HISTORY_DESCRIPTION: &str = "Games you have played recently";

pub const OG_IMAGE_PATH: &str = "/images/og-image.jpg";
pub const HISTORY_PATH: &str = "/history";

/// Absolute URL of a site path.
pub(crate) fn page_url(path: &str) -> Url {
    BASE_URL.join(path).expect("page url build failed")
}

fn localized_url(path: &str, locale: &Locale) -> Url {
    let path = match path {
        "/" => locale.root_path(),
        path => format!("{}{}", locale.path_prefix(), path),
    };
    page_url(&path)
}

/// Per-locale document metadata of a server-rendered page. The canonical
/// URL always points at the default-locale page; the alternates enumerate
/// every supported locale.
#[derive(Clone, PartialEq, Eq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub canonical: Url,
    pub alternates: Vec<AlternateLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_graph: Option<OpenGraph>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<TwitterCard>,
}

#[derive(Clone, PartialEq, Eq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AlternateLink {
    pub hreflang: String,
    pub href: Url,
}

#[derive(Clone, PartialEq, Eq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub url: Url,
    pub site_name: String,
    pub r#type: String,
    pub images: Vec<OpenGraphImage>,
    pub locale: Locale,
}

#[derive(Clone, PartialEq, Eq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraphImage {
    pub url: Url,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

#[derive(Clone, PartialEq, Eq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TwitterCard {
    pub card: String,
    pub title: String,
    pub description: String,
    pub images: Vec<Url>,
}

impl PageMetadata {
    pub fn home(messages: &Messages, locale: &Locale) -> Self {
        let title = messages
            .get_or("home.metadata.title", DEFAULT_HOME_TITLE)
            .to_owned();
        let description = messages
            .get_or("home.metadata.description", DEFAULT_HOME_DESCRIPTION)
            .to_owned();
        let keywords = messages
            .get_or("home.metadata.keywords", DEFAULT_HOME_KEYWORDS)
            .to_owned();
        let og_title = messages.get_or("home.metadata.og.title", &title).to_owned();
        let og_description = messages
            .get_or("home.metadata.og.description", &description)
            .to_owned();
        let og_image_alt = messages
            .get_or("home.metadata.og.imageAlt", SITE_NAME)
            .to_owned();
        PageMetadata {
            canonical: page_url("/"),
            alternates: alternate_links("/"),
            open_graph: Some(OpenGraph {
                title: og_title.to_owned(),
                description: og_description.to_owned(),
                url: localized_url("/", locale),
                site_name: SITE_NAME.to_owned(),
                r#type: "website".to_owned(),
                images: vec![OpenGraphImage {
                    url: page_url(OG_IMAGE_PATH),
                    width: 1200,
                    height: 630,
                    alt: og_image_alt,
                }],
                locale: *locale,
            }),
            twitter: Some(TwitterCard {
                card: "summary_large_image".to_owned(),
                title: og_title,
                description: og_description,
                images: vec![page_url(OG_IMAGE_PATH)],
            }),
            title,
            description,
            keywords,
        }
    }

    pub fn game(game: &Game, messages: &Messages, locale: &Locale) -> Self {
        let title = messages
            .get_or("game.metadata.title", DEFAULT_GAME_TITLE)
            .replace("{title}", &game.title);
        let description = messages
            .get_or("game.metadata.description", DEFAULT_GAME_DESCRIPTION)
            .replace("{title}", &game.title)
            .replace("{platform}", &game.platform);
        PageMetadata {
            title: title.to_owned(),
            description: description.to_owned(),
            keywords: "".to_owned(),
            canonical: page_url(&game.href),
            alternates: alternate_links(&game.href),
            open_graph: Some(OpenGraph {
                title: title.to_owned(),
                description: description.to_owned(),
                url: localized_url(&game.href, locale),
                site_name: SITE_NAME.to_owned(),
                r#type: "website".to_owned(),
                images: vec![OpenGraphImage {
                    url: page_url(&game.image_url),
                    width: 320,
                    height: 200,
                    alt: format!("{} Screenshot", game.title),
                }],
                locale: *locale,
            }),
            twitter: Some(TwitterCard {
                card: "summary_large_image".to_owned(),
                title,
                description,
                images: vec![page_url(&game.image_url)],
            }),
        }
    }

    pub fn category(category: &Category, messages: &Messages) -> Self {
        let title = messages
            .get_or("category.metadata.title", DEFAULT_CATEGORY_TITLE)
            .replace("{platform}", &category.name);
        let description = messages
            .get_or("category.metadata.description", DEFAULT_CATEGORY_DESCRIPTION)
            .replace("{platform}", &category.name);
        let keywords = messages.get_or("category.metadata.keywords", "").to_owned();
        PageMetadata {
            title,
            description,
            keywords,
            canonical: page_url(&category.href),
            alternates: alternate_links(&category.href),
            open_graph: None,
            twitter: None,
        }
    }

    pub fn history(messages: &Messages) -> Self {
        let title = messages
            .get_or("history.metadata.title", DEFAULT_HISTORY_TITLE)
            .to_owned();
        let description = messages
            .get_or("history.metadata.description", DEFAULT_HISTORY_DESCRIPTION)
            .to_owned();
        let keywords = messages.get_or("history.metadata.keywords", "").to_owned();
        PageMetadata {
            title,
            description,
            keywords,
            canonical: page_url(HISTORY_PATH),
            alternates: alternate_links(HISTORY_PATH),
            open_graph: None,
            twitter: None,
        }
    }
}

fn alternate_links(path: &str) -> Vec<AlternateLink> {
    Locale::iter()
        .map(|locale| AlternateLink {
            hreflang: locale.to_string(),
            href: localized_url(path, &locale),
        })
        .collect()
}
