mod update_history;
use update_history::*;

mod error;
pub use error::*;

mod ctx;
pub use ctx::*;
