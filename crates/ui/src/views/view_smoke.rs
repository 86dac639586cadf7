use std::sync::Arc;

use storage::repository::{KeyValueRepository, Storage, StorageError};
use training_core::model::CategoryId;
use training_core::time::fixed_now;
use training_core::{ProgressStore, Score};

use super::test_harness::{
    ViewKind, setup_failed_view_harness, setup_view_harness, setup_view_harness_with_storage,
};
use crate::vm::QuizIntent;

async fn render_settled(harness: &mut super::test_harness::ViewHarness) -> String {
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    harness.render()
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_renders_tiles_with_latest_percent() {
    let mut harness = setup_view_harness(ViewKind::Home);
    let mut store = ProgressStore::default();
    store.record_attempt(
        &CategoryId::new("skincare"),
        Score { correct: 2, total: 3 },
        fixed_now(),
    );
    harness
        .services
        .progress()
        .save(&store)
        .await
        .expect("save progress");

    let html = render_settled(&mut harness).await;
    assert!(html.contains("categoryGrid"), "missing grid in {html}");
    assert!(html.contains("Skincare"), "missing tile in {html}");
    assert!(html.contains("67%"), "missing percent in {html}");
    assert!(html.contains("1 quiz attempt(s)"), "missing attempts in {html}");
    assert!(html.contains("0 quiz attempt(s)"), "missing untouched tile in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn failed_load_shows_diagnostic_panel_instead_of_view() {
    let mut harness = setup_failed_view_harness(ViewKind::Home);
    let html = render_settled(&mut harness).await;
    assert!(html.contains("dataLoadError"), "missing panel in {html}");
    assert!(html.contains("Data failed to load"), "missing heading in {html}");
    assert!(
        html.contains("catalog.json loaded but contains no categories."),
        "missing details in {html}"
    );
    assert!(html.contains("assets/data/quizzes.json"), "missing path in {html}");
    assert!(!html.contains("categoryGrid"), "view rendered anyway in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn category_view_lists_products_and_quiz_size() {
    let mut harness = setup_view_harness(ViewKind::Category("skincare"));
    let html = render_settled(&mut harness).await;
    assert!(html.contains("Catalog pages: 4-9"), "missing meta in {html}");
    assert!(html.contains("1 product(s) loaded"), "missing count in {html}");
    assert!(
        html.contains("3 question(s) in this category quiz"),
        "missing quiz count in {html}"
    );
    assert!(html.contains("Gel Cleanser"), "missing product in {html}");
    assert!(html.contains("SKU 1000123"), "missing sku link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_starts_at_first_question() {
    let mut harness = setup_view_harness(ViewKind::Quiz("skincare"));
    let html = render_settled(&mut harness).await;
    assert!(html.contains("Question 1 of 3"), "missing position in {html}");
    assert!(html.contains("Which cleanser suits daily use?"), "missing prompt in {html}");
    assert!(html.contains("Product Knowledge"), "missing skill in {html}");
    assert!(!html.contains("Incorrect"), "feedback shown too early in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_without_questions_says_so() {
    let mut harness = setup_view_harness(ViewKind::Quiz("fragrance"));
    let html = render_settled(&mut harness).await;
    assert!(html.contains("No quiz yet"), "missing empty state in {html}");
    assert!(html.contains("assets/data/quizzes.json"), "missing hint in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn progress_view_shows_placeholders_and_scores() {
    let mut harness = setup_view_harness(ViewKind::Progress);
    let mut store = ProgressStore::default();
    store.record_attempt(
        &CategoryId::new("skincare"),
        Score { correct: 2, total: 3 },
        fixed_now(),
    );
    harness
        .services
        .progress()
        .save(&store)
        .await
        .expect("save progress");

    let html = render_settled(&mut harness).await;
    assert!(html.contains("progressBody"), "missing table in {html}");
    assert!(html.contains("2 / 3"), "missing score in {html}");
    assert!(html.contains("67%"), "missing percent in {html}");
    assert!(html.contains("—"), "missing placeholder in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn catalog_view_without_file_says_so() {
    let mut harness = setup_view_harness(ViewKind::Catalog);
    let html = render_settled(&mut harness).await;
    assert!(html.contains("Spring Catalog"), "missing name in {html}");
    assert!(html.contains("No PDF file in this build"), "missing note in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_run_through_finish_persists_latest_score() {
    let mut harness = setup_view_harness(ViewKind::Quiz("skincare"));
    render_settled(&mut harness).await;

    harness.quiz(QuizIntent::Choose(1)).await;
    let html = harness.render();
    assert!(html.contains("Correct"), "missing feedback in {html}");
    assert!(html.contains("It is gentle."), "missing explanation in {html}");
    assert!(
        html.contains("Gel Cleanser (p.4) — $12.99"),
        "missing reference in {html}"
    );

    harness.quiz(QuizIntent::Next).await;
    harness.quiz(QuizIntent::Choose(0)).await;
    harness.quiz(QuizIntent::Next).await;
    harness.quiz(QuizIntent::Choose(1)).await;
    assert!(harness.render().contains("Incorrect"));

    harness.quiz(QuizIntent::Finish).await;
    let html = harness.render();
    assert!(html.contains("Quiz Complete"), "missing summary in {html}");
    assert!(html.contains("2 / 3"), "missing score in {html}");
    assert!(html.contains("67%"), "missing percent in {html}");
    assert!(!html.contains("could not be saved"), "unexpected save error in {html}");

    let store = harness.services.progress().load().await.expect("load progress");
    let skincare = CategoryId::new("skincare");
    let record = store.record(&skincare).expect("record saved");
    assert_eq!((record.score, record.total, record.percent), (2, 3, 67));
    assert_eq!(store.attempts(&skincare), 1);

    harness.quiz(QuizIntent::Retake).await;
    let html = harness.render();
    assert!(html.contains("Question 1 of 3"), "retake did not restart in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn next_stays_reachable_after_going_back_on_a_full_answer_set() {
    let mut harness = setup_view_harness(ViewKind::Quiz("skincare"));
    render_settled(&mut harness).await;

    for (step, choice) in [1, 0, 1].into_iter().enumerate() {
        harness.quiz(QuizIntent::Choose(choice)).await;
        if step < 2 {
            harness.quiz(QuizIntent::Next).await;
        }
    }
    harness.quiz(QuizIntent::Prev).await;
    harness.quiz(QuizIntent::Prev).await;

    let session = harness.quiz_session().expect("session running");
    assert_eq!(session.current_index(), Some(0));
    assert!(session.can_next() && session.can_finish());

    let html = harness.render();
    assert!(html.contains("nextBtn"), "next hidden in {html}");
    assert!(html.contains("finishBtn"), "finish hidden in {html}");

    harness.quiz(QuizIntent::Next).await;
    let session = harness.quiz_session().expect("session running");
    assert_eq!(session.current_index(), Some(1));
    assert_eq!(session.answers(), &[Some(1), Some(0), Some(1)]);
}

#[tokio::test(flavor = "current_thread")]
async fn rejected_steps_leave_the_quiz_unchanged() {
    let mut harness = setup_view_harness(ViewKind::Quiz("skincare"));
    render_settled(&mut harness).await;

    harness.quiz(QuizIntent::Next).await;
    harness.quiz(QuizIntent::Prev).await;
    harness.quiz(QuizIntent::Finish).await;
    let session = harness.quiz_session().expect("session running");
    assert_eq!(session.current_index(), Some(0));
    assert!(session.answers().iter().all(Option::is_none));

    let store = harness.services.progress().load().await.expect("load progress");
    assert!(store.is_empty());
}

struct FailingRecords;

#[async_trait::async_trait]
impl KeyValueRepository for FailingRecords {
    async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn failed_save_still_shows_summary_with_note() {
    let storage = Storage {
        records: Arc::new(FailingRecords),
    };
    let mut harness = setup_view_harness_with_storage(ViewKind::Quiz("skincare"), storage);
    render_settled(&mut harness).await;

    for (step, choice) in [1, 0, 2].into_iter().enumerate() {
        harness.quiz(QuizIntent::Choose(choice)).await;
        if step < 2 {
            harness.quiz(QuizIntent::Next).await;
        }
    }
    harness.quiz(QuizIntent::Finish).await;

    let html = harness.render();
    assert!(html.contains("Quiz Complete"), "missing summary in {html}");
    assert!(html.contains("100%"), "missing percent in {html}");
    assert!(
        html.contains("Your score could not be saved."),
        "missing save note in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn unknown_category_redirects_home() {
    let mut harness = setup_view_harness(ViewKind::Quiz("nails"));
    let html = render_settled(&mut harness).await;
    assert!(harness.redirects.count() >= 1, "no redirect for unknown category");
    assert!(!html.contains("quizCard"), "quiz rendered anyway in {html}");

    let mut harness = setup_view_harness(ViewKind::Category(""));
    render_settled(&mut harness).await;
    assert!(harness.redirects.count() >= 1, "no redirect for missing category");

    let mut harness = setup_view_harness(ViewKind::Quiz("skincare"));
    render_settled(&mut harness).await;
    assert_eq!(harness.redirects.count(), 0);
}
