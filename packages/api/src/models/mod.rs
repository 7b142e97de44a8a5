//! Database models for the application.

#[cfg(feature = "server")]
mod testimonial;

#[cfg(feature = "server")]
pub use testimonial::TestimonialRow;
