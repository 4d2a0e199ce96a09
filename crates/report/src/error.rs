use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Unknown report locale: {0}")]
    UnknownLocale(String),

    #[error("Invalid date format: {0}")]
    InvalidDateFormat(#[from] time::error::InvalidFormatDescription),

    #[error("Date formatting error: {0}")]
    DateFormat(#[from] time::error::Format),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
