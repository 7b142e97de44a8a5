//! The public one-page site. Each section owns an anchor id used by the
//! navbar and wraps its body in a [`Reveal`](crate::Reveal).

mod heading;
pub use heading::SectionHeading;

mod hero;
pub use hero::Hero;

mod about;
pub use about::About;

mod experience;
pub use experience::Experience;

mod education;
pub use education::Education;

mod projects;
pub use projects::Projects;

mod services;
pub use services::Services;

mod testimonials;
pub use testimonials::Testimonials;

mod contact;
pub use contact::Contact;

mod footer;
pub use footer::Footer;
