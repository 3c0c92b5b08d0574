pub mod games;
pub mod history;
pub mod locale;
