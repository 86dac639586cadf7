use dioxus::prelude::*;

use crate::context::AppContext;

#[component]
pub fn CatalogView() -> Element {
    let ctx = use_context::<AppContext>();
    let Ok(data) = ctx.data() else {
        return rsx! {};
    };
    let info = data.catalog.catalog.clone();
    let title = data.catalog.site_title.clone();

    rsx! {
        document::Title { "{title} • Catalog" }
        div { class: "page catalog-page",
            header { class: "view-header",
                h2 { id: "catalogName", class: "view-title", "{info.name}" }
            }
            match info.filename {
                Some(filename) => rsx! {
                    p { id: "catalogFile", "{filename}" }
                    a { class: "btn primary", href: "assets/{filename}", target: "_blank", "Open catalog PDF" }
                },
                None => rsx! {
                    p { id: "catalogFile", "No PDF file in this build" }
                    p { id: "pdfNote", class: "muted",
                        "Product details are still available on each category page."
                    }
                },
            }
        }
    }
}
