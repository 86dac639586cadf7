#![allow(dead_code)]

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::StatusCode;
use services::{CATALOG_PATH, DataSource, Fetched, LoadError, QUIZZES_PATH};

pub const CATALOG_JSON: &str = r#"{
    "siteTitle": "Training",
    "catalog": { "name": "Spring Catalog" },
    "categories": [
        { "id": "skincare", "name": "Skincare", "tagline": "Glow", "range": "4-9" },
        { "id": "fragrance", "name": "Fragrance", "tagline": "Scent", "range": "10-12" }
    ],
    "products": [
        { "id": "sk-1", "category": "skincare", "name": "Gel Cleanser" }
    ]
}"#;

pub const QUIZZES_JSON: &str = r#"{ "quizzes": [
    { "category": "skincare", "prompt": "Q1", "choices": ["a", "b", "c"], "correctIndex": 1,
      "explanation": "E1", "productRefs": ["sk-1", "gone"] },
    { "category": "skincare", "prompt": "Q2", "choices": ["a", "b", "c"], "correctIndex": 0,
      "explanation": "E2" },
    { "category": "skincare", "prompt": "Q3", "choices": ["a", "b", "c"], "correctIndex": 2,
      "explanation": "E3" }
] }"#;

/// Canned responses keyed by document path.
#[derive(Default)]
pub struct StaticSource {
    responses: HashMap<&'static str, Fetched>,
}

impl StaticSource {
    pub fn valid() -> Self {
        Self::default()
            .with(CATALOG_PATH, Fetched::ok(CATALOG_JSON))
            .with(QUIZZES_PATH, Fetched::ok(QUIZZES_JSON))
    }

    pub fn with(mut self, path: &'static str, fetched: Fetched) -> Self {
        self.responses.insert(path, fetched);
        self
    }
}

#[async_trait]
impl DataSource for StaticSource {
    async fn fetch(&self, path: &'static str) -> Result<Fetched, LoadError> {
        Ok(self
            .responses
            .get(path)
            .cloned()
            .unwrap_or_else(|| Fetched::status(StatusCode::NOT_FOUND)))
    }
}
