use dioxus::prelude::*;

use crate::sections::{
    About, Contact, Education, Experience, Footer, Hero, Projects, Services, Testimonials,
};
use crate::Navbar;

/// The public one-page site.
#[component]
pub fn HomeView() -> Element {
    rsx! {
        Navbar {}
        main {
            Hero {}
            About {}
            Experience {}
            Education {}
            Projects {}
            Services {}
            Testimonials {}
            Contact {}
        }
        Footer {}
    }
}
