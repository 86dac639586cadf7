use training_core::model::{Catalog, Category, CategoryId};
use training_core::{ProgressRecord, ProgressStore, percent};

use crate::data::TrainingData;

/// Home tile numbers for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOverview {
    pub category: Category,
    pub percent: u32,
    pub attempts: u32,
    pub question_count: usize,
}

/// One line of the progress table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressRow {
    pub category: Category,
    pub attempts: u32,
    pub record: Option<ProgressRecord>,
}

impl ProgressRow {
    #[must_use]
    pub fn percent(&self) -> u32 {
        self.record.as_ref().map_or(0, |r| r.percent)
    }
}

/// Read-only joins of loaded data against stored progress.
pub struct CatalogQueries;

impl CatalogQueries {
    /// Resolve the `cat` navigation parameter to a known category.
    #[must_use]
    pub fn find_category<'a>(catalog: &'a Catalog, raw: Option<&str>) -> Option<&'a Category> {
        let id = CategoryId::new(raw?);
        catalog.category(&id)
    }

    /// Tiles for the home view, in catalog order.
    ///
    /// Percent is recomputed from score and total; attempts only count once a
    /// scored record exists.
    #[must_use]
    pub fn overviews(data: &TrainingData, store: &ProgressStore) -> Vec<CategoryOverview> {
        data.catalog
            .categories
            .iter()
            .map(|category| {
                let (score, total) = store
                    .record(&category.id)
                    .map_or((0, 0), |r| (r.score, r.total));
                let attempts = if total > 0 {
                    store.attempts(&category.id)
                } else {
                    0
                };
                CategoryOverview {
                    category: category.clone(),
                    percent: percent(score, total),
                    attempts,
                    question_count: data.quizzes.count_for(&category.id),
                }
            })
            .collect()
    }

    /// Rows for the progress view, one per category including untouched ones.
    #[must_use]
    pub fn progress_rows(catalog: &Catalog, store: &ProgressStore) -> Vec<ProgressRow> {
        catalog
            .categories
            .iter()
            .map(|category| ProgressRow {
                category: category.clone(),
                attempts: store.attempts(&category.id),
                record: store.record(&category.id).cloned(),
            })
            .collect()
    }
}
