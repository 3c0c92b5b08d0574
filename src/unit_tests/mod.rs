mod env;
pub use env::*;

mod catalog_with_filters;
mod ctx;
mod deep_links;
mod play_history;
mod random_game;
mod seo;
mod serde;
