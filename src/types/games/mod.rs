mod catalog;
pub use catalog::*;

mod category;
pub use category::*;

mod game;
pub use game::*;
