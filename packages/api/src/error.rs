//! Server-side error type. Server functions flatten it into `ServerFnError`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0} is not set")]
    MissingEnv(&'static str),

    #[error("invalid value for {name}: {value}")]
    InvalidEnv { name: &'static str, value: String },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ApiError::MissingEnv("DATABASE_URL").to_string(),
            "DATABASE_URL is not set"
        );
        assert_eq!(
            ApiError::InvalidEnv {
                name: "DATABASE_MAX_CONNECTIONS",
                value: "lots".into()
            }
            .to_string(),
            "invalid value for DATABASE_MAX_CONNECTIONS: lots"
        );
    }
}
