mod breadcrumbs;
pub use breadcrumbs::*;

mod json_ld;
pub use json_ld::*;

mod metadata;
pub use metadata::*;
