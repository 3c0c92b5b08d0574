use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Locales the portal is published in. The default locale is served from
/// the site root without a path prefix, every other locale is served under
/// `/{code}`.
#[derive(
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Debug,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    #[strum(serialize = "en")]
    En,
    #[serde(rename = "zh")]
    #[strum(serialize = "zh")]
    Zh,
    #[serde(rename = "zh-TW")]
    #[strum(serialize = "zh-TW")]
    ZhTw,
    #[serde(rename = "es")]
    #[strum(serialize = "es")]
    Es,
    #[serde(rename = "pt")]
    #[strum(serialize = "pt")]
    Pt,
    #[serde(rename = "ru")]
    #[strum(serialize = "ru")]
    Ru,
    #[serde(rename = "ja")]
    #[strum(serialize = "ja")]
    Ja,
    #[serde(rename = "de")]
    #[strum(serialize = "de")]
    De,
    #[serde(rename = "fr")]
    #[strum(serialize = "fr")]
    Fr,
    #[serde(rename = "ko")]
    #[strum(serialize = "ko")]
    Ko,
    #[serde(rename = "it")]
    #[strum(serialize = "it")]
    It,
    #[serde(rename = "fil")]
    #[strum(serialize = "fil")]
    Fil,
    #[serde(rename = "hi")]
    #[strum(serialize = "hi")]
    Hi,
    #[serde(rename = "vi")]
    #[strum(serialize = "vi")]
    Vi,
}

impl Locale {
    /// Parses a path parameter, falling back to the default locale for
    /// anything unsupported.
    pub fn from_param(param: &str) -> Self {
        Locale::from_str(param).unwrap_or_default()
    }
    /// Prefix prepended to every path under this locale. Empty for the
    /// default locale.
    pub fn path_prefix(&self) -> String {
        match self {
            Locale::En => "".to_owned(),
            locale => format!("/{locale}"),
        }
    }
    /// Path of the site root under this locale.
    pub fn root_path(&self) -> String {
        match self {
            Locale::En => "/".to_owned(),
            locale => format!("/{locale}"),
        }
    }
}
