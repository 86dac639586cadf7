use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use services::CatalogQueries;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ResetDialog, ViewError, ViewState, view_state_from_resource};
use crate::vm::{ProgressRowVm, map_progress_rows};

#[component]
pub fn ProgressView() -> Element {
    let ctx = use_context::<AppContext>();
    let Ok(data) = ctx.data() else {
        return rsx! {};
    };
    let navigator = use_navigator();
    let progress = ctx.progress();
    let mut confirm_reset = use_signal(|| false);

    let rows_data = data.clone();
    let resource = use_resource(move || {
        let progress = progress.clone();
        let data = rows_data.clone();
        async move {
            let store = progress.load().await.map_err(|_| ViewError::Unknown)?;
            Ok::<_, ViewError>(map_progress_rows(&CatalogQueries::progress_rows(
                &data.catalog,
                &store,
            )))
        }
    });

    let state = view_state_from_resource(&resource);
    let title = data.catalog.site_title.clone();

    rsx! {
        document::Title { "{title} • Progress" }
        div { class: "page progress-page",
            header { class: "view-header",
                h2 { class: "view-title", "Progress" }
                p { class: "view-subtitle", "Latest quiz result per category." }
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
                ViewState::Ready(rows) => rsx! {
                    table { class: "progress-table",
                        thead {
                            tr {
                                th { "Category" }
                                th { "Attempts" }
                                th { "Score" }
                                th { "Percent" }
                                th { "Last updated" }
                            }
                        }
                        tbody { id: "progressBody",
                            for row in rows {
                                ProgressTableRow { key: "{row.id}", row: row.clone() }
                            }
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
                        let _ = navigator.push(Route::Home {});
                    },
                }
            }
        }
    }
}

#[component]
fn ProgressTableRow(row: ProgressRowVm) -> Element {
    rsx! {
        tr {
            td {
                Link { to: Route::Category { cat: row.id.clone() },
                    b { "{row.name}" }
                }
            }
            td { "{row.attempts}" }
            td { "{row.score_label}" }
            td {
                span { class: "pill {row.tone_class}", "{row.percent_label}" }
            }
            td { class: "muted small", "{row.last_updated}" }
        }
    }
}
