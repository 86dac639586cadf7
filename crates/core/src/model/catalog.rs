use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::model::ids::{CategoryId, ProductId, SubcategoryId};
use crate::model::text::{null_default, opt_text, text};

/// Storefront product page; the SKU is passed as the `pid` query parameter.
pub const STOREFRONT_PRODUCT_URL: &str =
    "https://www.farmasius.com/christinedelgado/product-detail/shea-butter-almond-shower-cream";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("loaded but contains no categories.")]
    NoCategories,
}

/// A grouping of products and the topic of one quiz.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub tagline: String,
    /// Catalog page range, e.g. `"4-9"`.
    #[serde(default, deserialize_with = "text")]
    pub range: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Subcategory {
    pub id: SubcategoryId,
    pub name: String,
    #[serde(default, deserialize_with = "text")]
    pub pages: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub category: CategoryId,
    #[serde(rename = "subcat", default)]
    pub subcategory: Option<SubcategoryId>,
    pub name: String,
    #[serde(rename = "price_usd", default, deserialize_with = "opt_text")]
    pub price: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub size: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub highlights: Vec<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub notes: String,
    #[serde(default, deserialize_with = "opt_text")]
    pub hero_actives: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub sku: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub sku_group: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub source_page: Option<String>,
}

impl Product {
    /// Lowercased text the free-text search runs against.
    #[must_use]
    pub fn search_blob(&self) -> String {
        format!(
            "{} {} {} {}",
            self.name,
            self.notes,
            self.hero_actives.as_deref().unwrap_or_default(),
            self.highlights.join(" ")
        )
        .to_lowercase()
    }

    /// Storefront link for products that carry a SKU.
    #[must_use]
    pub fn storefront_url(&self) -> Option<Url> {
        let sku = self.sku.as_deref()?;
        Url::parse_with_params(STOREFRONT_PRODUCT_URL, &[("pid", sku)]).ok()
    }
}

/// Printed catalog the product data was transcribed from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CatalogInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "opt_text")]
    pub filename: Option<String>,
}

/// The `catalog.json` document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[serde(default)]
    pub site_title: String,
    #[serde(default)]
    pub catalog: CatalogInfo,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub subcategories: BTreeMap<CategoryId, Vec<Subcategory>>,
    #[serde(default)]
    pub products: Vec<Product>,
}

impl Catalog {
    /// # Errors
    ///
    /// Returns `CatalogError::NoCategories` when the category list is empty.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.categories.is_empty() {
            return Err(CatalogError::NoCategories);
        }
        Ok(())
    }

    #[must_use]
    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    #[must_use]
    pub fn subcategories_of(&self, id: &CategoryId) -> &[Subcategory] {
        self.subcategories.get(id).map_or(&[], Vec::as_slice)
    }

    /// Products of a category, in document order.
    pub fn products_in<'a>(&'a self, id: &'a CategoryId) -> impl Iterator<Item = &'a Product> {
        self.products.iter().filter(move |p| &p.category == id)
    }

    /// Resolve product references, silently dropping ids not in the catalog.
    #[must_use]
    pub fn resolve_products(&self, ids: &[ProductId]) -> Vec<&Product> {
        ids.iter().filter_map(|id| self.product(id)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"{
        "siteTitle": "Training",
        "catalog": { "name": "Spring Catalog", "filename": "" },
        "categories": [
            { "id": "skincare", "name": "Skincare", "tagline": "Glow", "range": "4-9" },
            { "id": "makeup", "name": "Makeup", "tagline": "Color", "range": 12 }
        ],
        "subcategories": {
            "skincare": [ { "id": "cleansers", "name": "Cleansers", "pages": "4" } ]
        },
        "products": [
            {
                "id": "sk-1", "category": "skincare", "subcat": "cleansers",
                "name": "Gel Cleanser", "price_usd": "$12.99", "size": "150 ml",
                "highlights": ["gentle"], "notes": "Daily use", "sku": "1000123",
                "source_page": 4
            },
            { "id": "mk-1", "category": "makeup", "name": "Lip Tint" }
        ]
    }"#;

    fn catalog() -> Catalog {
        serde_json::from_str(CATALOG).unwrap()
    }

    #[test]
    fn parses_wire_names_and_numeric_text() {
        let catalog = catalog();
        assert_eq!(catalog.site_title, "Training");
        assert_eq!(catalog.catalog.filename, None);
        assert_eq!(catalog.categories[1].range, "12");

        let product = &catalog.products[0];
        assert_eq!(product.subcategory, Some(SubcategoryId::new("cleansers")));
        assert_eq!(product.price.as_deref(), Some("$12.99"));
        assert_eq!(product.source_page.as_deref(), Some("4"));
        assert!(catalog.products[1].highlights.is_empty());
    }

    #[test]
    fn null_optional_fields_read_as_empty() {
        let catalog: Catalog = serde_json::from_str(
            r#"{
                "categories": [ { "id": "hair", "name": "Hair", "tagline": null } ],
                "products": [
                    { "id": "h-1", "category": "hair", "name": "Shampoo", "notes": null,
                      "highlights": null, "hero_actives": null, "sku": null }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(catalog.categories[0].tagline, "");
        let product = &catalog.products[0];
        assert_eq!(product.notes, "");
        assert!(product.highlights.is_empty());
        assert!(product.storefront_url().is_none());
        assert_eq!(product.search_blob(), "shampoo   ");
    }

    #[test]
    fn empty_category_list_fails_validation() {
        let catalog: Catalog = serde_json::from_str(r#"{ "categories": [] }"#).unwrap();
        assert_eq!(catalog.validate(), Err(CatalogError::NoCategories));
        assert!(self::catalog().validate().is_ok());
    }

    #[test]
    fn lookups_by_category() {
        let catalog = catalog();
        let skincare = CategoryId::new("skincare");
        assert_eq!(catalog.category(&skincare).unwrap().name, "Skincare");
        assert_eq!(catalog.products_in(&skincare).count(), 1);
        assert_eq!(catalog.subcategories_of(&skincare).len(), 1);
        assert!(catalog.subcategories_of(&CategoryId::new("makeup")).is_empty());
        assert!(catalog.category(&CategoryId::new("nope")).is_none());
    }

    #[test]
    fn unresolvable_references_are_dropped() {
        let catalog = catalog();
        let refs = vec![ProductId::new("missing"), ProductId::new("mk-1")];
        let resolved = catalog.resolve_products(&refs);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].name, "Lip Tint");
    }

    #[test]
    fn storefront_url_carries_sku() {
        let catalog = catalog();
        let url = catalog.products[0].storefront_url().unwrap();
        assert!(url.as_str().ends_with("?pid=1000123"));
        assert!(catalog.products[1].storefront_url().is_none());
    }
}
