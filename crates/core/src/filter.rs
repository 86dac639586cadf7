use crate::model::{Catalog, CategoryId, Product, SubcategoryId};

/// Narrowing applied to a category's product list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub subcategory: Option<SubcategoryId>,
    pub query: String,
}

impl ProductFilter {
    #[must_use]
    pub fn new(subcategory: Option<SubcategoryId>, query: impl Into<String>) -> Self {
        Self {
            subcategory,
            query: query.into(),
        }
    }

    /// Case-insensitive, trimmed search term; empty means "match all".
    #[must_use]
    pub fn normalized_query(&self) -> String {
        self.query.trim().to_lowercase()
    }

    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(sub) = &self.subcategory {
            if product.subcategory.as_ref() != Some(sub) {
                return false;
            }
        }
        let query = self.normalized_query();
        query.is_empty() || product.search_blob().contains(&query)
    }

    /// Products of `category` passing the filter, in catalog order.
    #[must_use]
    pub fn apply<'a>(&self, catalog: &'a Catalog, category: &'a CategoryId) -> Vec<&'a Product> {
        catalog
            .products_in(category)
            .filter(|p| self.matches(p))
            .collect()
    }
}
