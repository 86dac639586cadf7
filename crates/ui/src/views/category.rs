use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_router::Link;
use services::{CatalogQueries, TrainingData};
use training_core::ProductFilter;
use training_core::model::{Category, SubcategoryId};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::RedirectHome;
use crate::vm::{ProductCardVm, SkuVm, map_product_card, product_count_label};

#[component]
pub fn CategoryView(cat: String) -> Element {
    let ctx = use_context::<AppContext>();
    let Ok(data) = ctx.data() else {
        return rsx! {};
    };
    let Some(category) = CatalogQueries::find_category(&data.catalog, Some(&cat)).cloned() else {
        return rsx! { RedirectHome {} };
    };

    rsx! {
        CategoryPage { key: "{cat}", data, category }
    }
}

#[component]
fn CategoryPage(data: Arc<TrainingData>, category: Category) -> Element {
    let mut search = use_signal(String::new);
    let mut subcategory = use_signal(String::new);

    let selected = subcategory();
    let filter = ProductFilter::new(
        (!selected.is_empty()).then(|| SubcategoryId::new(selected.clone())),
        search(),
    );
    let cards: Vec<ProductCardVm> = filter
        .apply(&data.catalog, &category.id)
        .into_iter()
        .map(map_product_card)
        .collect();
    let count_label = product_count_label(cards.len());
    let subcategories = data.catalog.subcategories_of(&category.id).to_vec();
    let question_count = data.quizzes.count_for(&category.id);
    let site_title = data.catalog.site_title.clone();
    let cat = category.id.to_string();

    rsx! {
        document::Title { "{site_title} • {category.name}" }
        div { class: "page category-page",
            header { class: "view-header",
                h2 { id: "catTitle", class: "view-title", "{category.name}" }
                p { id: "catMeta", class: "view-subtitle", "Catalog pages: {category.range}" }
            }
            div { id: "subcatList", class: "pills",
                for sub in subcategories.iter() {
                    span { class: "pill",
                        "{sub.name} "
                        span { class: "muted", "p.{sub.pages}" }
                    }
                }
            }
            div { class: "quiz-cta card pad",
                p { id: "quizCount", "{question_count} question(s) in this category quiz" }
                Link { id: "startQuizBtn", class: "btn primary", to: Route::Quiz { cat: cat.clone() }, "Start quiz" }
            }
            div { class: "filters",
                select {
                    id: "subcatSelect",
                    value: "{selected}",
                    onchange: move |evt| subcategory.set(evt.value()),
                    option { value: "", "All" }
                    for sub in subcategories.iter() {
                        option { value: "{sub.id}", "{sub.name}" }
                    }
                }
                input {
                    id: "searchBox",
                    r#type: "search",
                    placeholder: "Search products...",
                    value: "{search}",
                    oninput: move |evt| search.set(evt.value()),
                }
            }
            p { id: "productCount", class: "muted", "{count_label}" }
            div { id: "productList",
                for card in cards {
                    ProductCard { key: "{card.id}", card: card.clone() }
                }
            }
        }
    }
}

#[component]
fn ProductCard(card: ProductCardVm) -> Element {
    rsx! {
        div { class: "card pad",
            div { class: "quiz-top",
                div {
                    h2 { "{card.name}" }
                    div { class: "muted small", "{card.meta}" }
                }
                div { class: "sku",
                    match card.sku.clone() {
                        SkuVm::Link { label, href } => rsx! {
                            a { class: "pill sku-link", href: "{href}", target: "_blank", rel: "noopener", "{label}" }
                        },
                        SkuVm::Group(group) => rsx! {
                            span { class: "pill", "{group}" }
                        },
                        SkuVm::Missing => rsx! {},
                    }
                }
            }
            div { class: "hr" }
            div { class: "pills",
                for highlight in card.highlights.iter() {
                    span { class: "pill", "{highlight}" }
                }
            }
            p { "{card.notes}" }
            if let Some(actives) = card.hero_actives.as_ref() {
                div { class: "muted small",
                    b { "Hero actives: " }
                    "{actives}"
                }
            }
        }
    }
}
