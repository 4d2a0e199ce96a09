#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("{0} not found")]
    NotFound(String),

    #[error("{0}")]
    Invalid(String),

    #[error("{0}")]
    Unknown(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::Invalid(format!($msg)))
    };
    ($err:expr $(,)?) => {
        return Err($crate::Error::Invalid(format!($err)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::Invalid(format!($fmt, $($arg)*)))
    };
}

#[macro_export]
macro_rules! not_found {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        return Err($crate::Error::NotFound(format!($fmt $(, $arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reject(name: &str) -> Result<()> {
        if name.trim().is_empty() {
            crate::bail!("name must not be empty");
        }
        Ok(())
    }

    fn missing(index: usize) -> Result<()> {
        crate::not_found!("meal #{}", index);
    }

    #[test]
    fn test_bail_produces_invalid() {
        let err = reject("  ").unwrap_err();
        assert!(matches!(err, Error::Invalid(_)));
        assert_eq!(err.to_string(), "name must not be empty");
        assert!(reject("Lunch").is_ok());
    }

    #[test]
    fn test_not_found_message() {
        let err = missing(3).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
        assert_eq!(err.to_string(), "meal #3 not found");
    }
}
