use training_core::model::Product;

use super::time_fmt::EMPTY_LABEL;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkuVm {
    Link { label: String, href: String },
    Group(String),
    Missing,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductCardVm {
    pub id: String,
    pub name: String,
    pub meta: String,
    pub highlights: Vec<String>,
    pub notes: String,
    pub hero_actives: Option<String>,
    pub sku: SkuVm,
}

#[must_use]
pub fn map_product_card(product: &Product) -> ProductCardVm {
    let sku = match (product.storefront_url(), &product.sku, &product.sku_group) {
        (Some(url), Some(sku), _) => SkuVm::Link {
            label: format!("SKU {sku}"),
            href: url.to_string(),
        },
        (_, _, Some(group)) => SkuVm::Group(group.clone()),
        _ => SkuVm::Missing,
    };
    ProductCardVm {
        id: product.id.to_string(),
        name: product.name.clone(),
        meta: format!(
            "Size: {} • Price: {} • Catalog p.{}",
            or_empty(product.size.as_deref()),
            or_empty(product.price.as_deref()),
            or_empty(product.source_page.as_deref()),
        ),
        highlights: product.highlights.clone(),
        notes: product.notes.clone(),
        hero_actives: product.hero_actives.clone(),
        sku,
    }
}

/// One line in the "catalog references" list under an explanation.
#[must_use]
pub fn product_reference_label(product: &Product) -> String {
    format!(
        "{} (p.{}) — {}",
        product.name,
        product.source_page.as_deref().unwrap_or_default(),
        product.price.as_deref().unwrap_or_default()
    )
}

#[must_use]
pub fn product_count_label(count: usize) -> String {
    format!("{count} product(s) loaded")
}

fn or_empty(value: Option<&str>) -> &str {
    value.unwrap_or(EMPTY_LABEL)
}
