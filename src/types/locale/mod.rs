mod locale;
pub use locale::*;

mod messages;
pub use messages::*;
