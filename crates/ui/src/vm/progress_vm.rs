use services::ProgressRow;
use training_core::ScoreTone;

use super::time_fmt::{EMPTY_LABEL, format_optional};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressRowVm {
    pub id: String,
    pub name: String,
    pub attempts: u32,
    pub score_label: String,
    pub percent_label: String,
    pub tone_class: &'static str,
    pub last_updated: String,
}

#[must_use]
pub fn map_progress_rows(rows: &[ProgressRow]) -> Vec<ProgressRowVm> {
    rows.iter()
        .map(|row| {
            let percent = row.percent();
            ProgressRowVm {
                id: row.category.id.to_string(),
                name: row.category.name.clone(),
                attempts: row.attempts,
                score_label: row.record.as_ref().map_or_else(
                    || EMPTY_LABEL.to_string(),
                    |r| format!("{} / {}", r.score, r.total),
                ),
                percent_label: format!("{percent}%"),
                tone_class: ScoreTone::from_percent(percent).css_class(),
                last_updated: format_optional(row.record.as_ref().and_then(|r| r.last_updated)),
            }
        })
        .collect()
}
