mod history_bucket;
pub use history_bucket::*;

mod history_item;
pub use history_item::*;
