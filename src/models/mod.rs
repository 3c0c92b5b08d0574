pub mod common;
pub mod ctx;

pub mod catalog_with_filters;
pub mod play_history;
pub mod random_game;
