use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::StudyView;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", StudyView)] Study {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "masthead",
                h1 { "🌱 EcoAprende: Tu Aventura Ecológica" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
