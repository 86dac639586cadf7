use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{CatalogView, CategoryView, DataGate, HomeView, ProgressView, QuizView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/category?:cat", CategoryView)] Category { cat: String },
        #[route("/quiz?:cat", QuizView)] Quiz { cat: String },
        #[route("/progress", ProgressView)] Progress {},
        #[route("/catalog", CatalogView)] Catalog {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            TopNav {}
            main { class: "content",
                DataGate {
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn TopNav() -> Element {
    rsx! {
        nav { class: "topnav",
            h1 { "Product Training" }
            ul {
                li { Link { active_class: "active", to: Route::Home {}, "Home" } }
                li { Link { active_class: "active", to: Route::Progress {}, "Progress" } }
                li { Link { active_class: "active", to: Route::Catalog {}, "Catalog" } }
            }
        }
    }
}
