mod catalog;
mod ids;
mod question;
mod text;

pub use catalog::{
    Catalog, CatalogError, CatalogInfo, Category, Product, STOREFRONT_PRODUCT_URL, Subcategory,
};
pub use ids::{CategoryId, ProductId, SubcategoryId};
pub use question::{QuestionError, QuizBank, QuizQuestion, Skill};
