use serde::{Deserialize, Serialize};

/// Stable identifier of a game within a catalog. Positive; `0` is not a
/// valid id.
pub type GameId = u32;

/// One game of the per-locale catalog document.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: GameId,
    pub title: String,
    pub platform: String,
    pub image_url: String,
    /// Path of the game page, e.g. `/bubble-games/bubble-shooter-pro`.
    pub href: String,
    pub description: String,
    /// The third-party URL embedded by the game page iframe.
    pub embed_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_description: Option<SeoDescription>,
}

impl Game {
    /// Path segment identifying the game within its category.
    pub fn slug(&self) -> &str {
        self.href.rsplit('/').next().unwrap_or("")
    }
    /// Category path segment of [`Game::href`].
    pub fn category_slug(&self) -> &str {
        self.href.trim_start_matches('/').split('/').next().unwrap_or("")
    }
}

/// List/strip representation of a game. The catalog query interface
/// guarantees at least `id` and `href` for navigation.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GamePreview {
    pub id: GameId,
    pub title: String,
    pub platform: String,
    pub image_url: String,
    pub href: String,
}

impl From<&Game> for GamePreview {
    fn from(game: &Game) -> Self {
        GamePreview {
            id: game.id,
            title: game.title.to_owned(),
            platform: game.platform.to_owned(),
            image_url: game.image_url.to_owned(),
            href: game.href.to_owned(),
        }
    }
}

/// Long-form SEO content blocks rendered below a game.
#[derive(Default, Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SeoDescription {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<Section>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub overview: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gameplay: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub history: Vec<String>,
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subsections: Vec<Subsection>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bullet_points: Vec<String>,
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Subsection {
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub faqs: Vec<Faq>,
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    pub question: String,
    pub answer: String,
}
