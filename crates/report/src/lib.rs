mod csv;
mod error;
mod format;
mod report;
mod rows;
mod summary;

pub use csv::*;
pub use error::*;
pub use format::*;
pub use report::*;
pub use rows::*;
pub use summary::*;

rust_i18n::i18n!("locales", fallback = "en");

/// A rendered document and the file name it should be saved under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub file_name: String,
    pub content: String,
}
