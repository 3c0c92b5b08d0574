use serde::{Deserialize, Serialize};

use crate::constants::CATEGORIES;

/// One entry of the category configuration.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct Category {
    pub icon: String,
    pub name: String,
    /// Path of the category page, e.g. `/bubble-games`.
    pub href: String,
    pub alt: String,
    pub key: String,
}

impl Category {
    /// Path segment of the category page.
    pub fn slug(&self) -> &str {
        self.href.trim_start_matches('/')
    }
    /// Resolves a category by its path segment or its short key.
    pub fn find(slug: &str) -> Option<&'static Category> {
        CATEGORIES
            .iter()
            .find(|category| category.slug() == slug || category.key == slug)
    }
}
