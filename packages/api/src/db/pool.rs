//! Database connection pool using the OnceCell pattern.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::sync::OnceCell;

use crate::error::ApiError;

static POOL: OnceCell<PgPool> = OnceCell::const_new();

const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Connection settings read from `DATABASE_URL` and `DATABASE_MAX_CONNECTIONS`.
#[derive(Debug, Clone, PartialEq)]
pub struct DbSettings {
    pub url: String,
    pub max_connections: u32,
}

impl DbSettings {
    pub fn from_env() -> Result<Self, ApiError> {
        dotenvy::dotenv().ok();
        Self::from_values(
            std::env::var("DATABASE_URL").ok(),
            std::env::var("DATABASE_MAX_CONNECTIONS").ok(),
        )
    }

    fn from_values(url: Option<String>, max: Option<String>) -> Result<Self, ApiError> {
        let url = url
            .filter(|u| !u.trim().is_empty())
            .ok_or(ApiError::MissingEnv("DATABASE_URL"))?;

        let max_connections = match max {
            None => DEFAULT_MAX_CONNECTIONS,
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ApiError::InvalidEnv {
                        name: "DATABASE_MAX_CONNECTIONS",
                        value: raw,
                    })
                }
            },
        };

        Ok(Self {
            url,
            max_connections,
        })
    }
}

/// Get or initialize the database connection pool.
pub async fn get_pool() -> Result<&'static PgPool, ApiError> {
    POOL.get_or_try_init(|| async {
        let settings = DbSettings::from_env()?;
        tracing::info!(
            max_connections = settings.max_connections,
            "Connecting to database"
        );
        let pool = PgPoolOptions::new()
            .max_connections(settings.max_connections)
            .connect(&settings.url)
            .await?;
        Ok(pool)
    })
    .await
}

/// Apply pending migrations.
pub async fn migrate(pool: &PgPool) -> Result<(), ApiError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let s = DbSettings::from_values(Some("postgres://localhost/site".into()), None).unwrap();
        assert_eq!(s.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert_eq!(s.url, "postgres://localhost/site");
    }

    #[test]
    fn test_settings_missing_url() {
        assert!(matches!(
            DbSettings::from_values(None, None),
            Err(ApiError::MissingEnv("DATABASE_URL"))
        ));
        assert!(matches!(
            DbSettings::from_values(Some("  ".into()), None),
            Err(ApiError::MissingEnv(_))
        ));
    }

    #[test]
    fn test_settings_max_connections() {
        let url = Some("postgres://x".to_string());
        assert_eq!(
            DbSettings::from_values(url.clone(), Some(" 12 ".into()))
                .unwrap()
                .max_connections,
            12
        );
        assert!(matches!(
            DbSettings::from_values(url.clone(), Some("0".into())),
            Err(ApiError::InvalidEnv { .. })
        ));
        assert!(matches!(
            DbSettings::from_values(url, Some("many".into())),
            Err(ApiError::InvalidEnv { .. })
        ));
    }
}
