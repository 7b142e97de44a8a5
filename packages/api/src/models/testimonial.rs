//! # Testimonial rows
//!
//! [`TestimonialRow`] is the complete row from the `testimonials` table. It
//! derives [`sqlx::FromRow`] and carries audit timestamps that never leave the
//! server. [`TestimonialRow::to_public`] projects it into the client-safe
//! [`content::Testimonial`], clamping the rating into 1..=5.

use chrono::{DateTime, Utc};
use content::Testimonial;
use sqlx::{FromRow, PgPool};

#[derive(Debug, Clone, FromRow)]
pub struct TestimonialRow {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub company: String,
    pub image: String,
    pub company_logo: String,
    pub content: String,
    pub rating: i16,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TestimonialRow {
    /// Convert to the record served to the client.
    pub fn to_public(&self) -> Testimonial {
        Testimonial {
            id: self.id,
            name: self.name.clone(),
            role: self.role.clone(),
            company: self.company.clone(),
            image: self.image.clone(),
            company_logo: self.company_logo.clone(),
            content: self.content.clone(),
            rating: self.rating.clamp(1, 5) as u8,
            sort_order: Some(self.sort_order),
            is_active: Some(self.is_active),
        }
    }

    pub async fn list_active(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as(
            "SELECT * FROM testimonials WHERE is_active = TRUE ORDER BY sort_order ASC, id ASC",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn list_all(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM testimonials ORDER BY sort_order ASC, id ASC")
            .fetch_all(pool)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(rating: i16) -> TestimonialRow {
        TestimonialRow {
            id: 3,
            name: "Priya Nair".into(),
            role: "Head of Product".into(),
            company: "Lumen".into(),
            image: "/p.webp".into(),
            company_logo: "/l.svg".into(),
            content: "Shipped on time.".into(),
            rating,
            sort_order: 2,
            is_active: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_to_public() {
        let t = row(4).to_public();
        assert_eq!(t.id, 3);
        assert_eq!(t.name, "Priya Nair");
        assert_eq!(t.rating, 4);
        assert_eq!(t.sort_order, Some(2));
        assert_eq!(t.is_active, Some(false));
    }

    #[test]
    fn test_rating_clamped() {
        assert_eq!(row(0).to_public().rating, 1);
        assert_eq!(row(-3).to_public().rating, 1);
        assert_eq!(row(11).to_public().rating, 5);
    }
}
