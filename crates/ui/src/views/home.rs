use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use services::CatalogQueries;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ResetDialog, ViewError, ViewState, view_state_from_resource};
use crate::vm::{HomeTileVm, map_home_tiles};

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let Ok(data) = ctx.data() else {
        return rsx! {};
    };
    let navigator = use_navigator();
    let progress = ctx.progress();
    let mut confirm_reset = use_signal(|| false);

    let tiles_data = data.clone();
    let resource = use_resource(move || {
        let progress = progress.clone();
        let data = tiles_data.clone();
        async move {
            let store = progress.load().await.map_err(|_| ViewError::Unknown)?;
            Ok::<_, ViewError>(map_home_tiles(&CatalogQueries::overviews(&data, &store)))
        }
    });

    let state = view_state_from_resource(&resource);
    let title = data.catalog.site_title.clone();

    rsx! {
        document::Title { "{title}" }
        div { class: "page home-page",
            header { class: "view-header",
                h2 { class: "view-title", "Categories" }
                p { class: "view-subtitle", "Pick a category to review its products and take the quiz." }
            }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
                ViewState::Ready(tiles) => rsx! {
                    div { id: "categoryGrid", class: "grid",
                        for tile in tiles {
                            HomeTile { key: "{tile.id}", tile: tile.clone() }
                        }
                    }
                },
            }
            div { class: "btnrow",
                button {
                    id: "resetBtn",
                    class: "btn",
                    r#type: "button",
                    onclick: move |_| confirm_reset.set(true),
                    "Reset progress"
                }
            }
            if confirm_reset() {
                ResetDialog {
                    on_cancel: move |()| confirm_reset.set(false),
                    on_reset: move |()| {
                        confirm_reset.set(false);
                        let mut resource = resource;
                        resource.restart();
                        let _ = navigator.push(Route::Home {});
                    },
                }
            }
        }
    }
}

#[component]
fn HomeTile(tile: HomeTileVm) -> Element {
    rsx! {
        Link { class: "card tile", to: Route::Category { cat: tile.id.clone() },
            div { class: "kicker", "{tile.kicker}" }
            div { class: "title", "{tile.name}" }
            p { class: "desc", "{tile.tagline}" }
            div { class: "hr" }
            div { class: "badge",
                b { "{tile.percent_label}" }
                " score • {tile.attempts_label}"
            }
        }
    }
}
