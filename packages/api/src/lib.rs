//! # API crate: fullstack server functions for the portfolio
//!
//! Every public `async fn` in this file is a Dioxus server function, annotated
//! with `#[get(...)]` and compiled twice: once with the database-backed body
//! (behind `#[cfg(feature = "server")]`) and once as a thin client stub that
//! forwards the call over HTTP.
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`db`] | `server` | PostgreSQL pool (lazy `OnceCell` singleton) and settings from the environment |
//! | [`error`] | `server` | [`error::ApiError`] for configuration and database failures |
//! | [`models`] | `server` | `testimonials` table rows and their projection to [`Testimonial`] |
//!
//! ## Server functions
//!
//! - `get_public_testimonials`: `GET /api/public/testimonials`, active rows only
//! - `list_testimonials`: `GET /api/admin/testimonials`, every row

use dioxus::prelude::*;

pub mod db;
#[cfg(feature = "server")]
pub mod error;
pub mod models;

pub use content::Testimonial;

#[cfg(feature = "server")]
fn internal(e: impl std::fmt::Display) -> ServerFnError {
    ServerFnError::new(e.to_string())
}

/// Published testimonials, ordered for display.
#[cfg(feature = "server")]
#[get("/api/public/testimonials")]
pub async fn get_public_testimonials() -> Result<Vec<Testimonial>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::TestimonialRow;

    let pool = get_pool().await.map_err(|e| {
        tracing::error!("Testimonials unavailable: {}", e);
        internal(e)
    })?;

    let rows = TestimonialRow::list_active(pool).await.map_err(|e| {
        tracing::error!("Failed to load testimonials: {}", e);
        internal(e)
    })?;

    tracing::debug!("Serving {} testimonials", rows.len());
    Ok(rows.iter().map(TestimonialRow::to_public).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/public/testimonials")]
pub async fn get_public_testimonials() -> Result<Vec<Testimonial>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Every testimonial including inactive ones, for the admin table.
///
/// Not authenticated: anyone who can reach the server can read inactive rows.
/// Put the admin routes behind a reverse-proxy auth layer when deploying.
#[cfg(feature = "server")]
#[get("/api/admin/testimonials")]
pub async fn list_testimonials() -> Result<Vec<Testimonial>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::TestimonialRow;

    let pool = get_pool().await.map_err(internal)?;
    let rows = TestimonialRow::list_all(pool).await.map_err(|e| {
        tracing::error!("Failed to list testimonials: {}", e);
        internal(e)
    })?;

    Ok(rows.iter().map(TestimonialRow::to_public).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/admin/testimonials")]
pub async fn list_testimonials() -> Result<Vec<Testimonial>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
