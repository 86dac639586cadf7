use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_router::Link;
use services::{CatalogQueries, QUIZZES_PATH, QuizServiceError, TrainingData};
use training_core::model::Category;
use training_core::{QuizError, QuizSession};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::RedirectHome;
use crate::vm::{ChoiceVm, ExplanationVm, QuizIntent, map_question, map_quiz_summary};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SaveState {
    Idle,
    Saving,
    Failed,
}

#[component]
pub fn QuizView(cat: String) -> Element {
    let ctx = use_context::<AppContext>();
    let Ok(data) = ctx.data() else {
        return rsx! {};
    };
    let Some(category) = CatalogQueries::find_category(&data.catalog, Some(&cat)).cloned() else {
        return rsx! { RedirectHome {} };
    };

    rsx! {
        QuizPage { key: "{cat}", data, category }
    }
}

#[component]
fn QuizPage(data: Arc<TrainingData>, category: Category) -> Element {
    let ctx = use_context::<AppContext>();
    let quiz = ctx.quiz();
    let mut session: Signal<Option<QuizSession>> = {
        let quiz = quiz.clone();
        let data = data.clone();
        let category_id = category.id.clone();
        use_signal(move || quiz.start(&data.quizzes, &category_id).ok())
    };
    let save_state = use_signal(|| SaveState::Idle);

    let dispatch_intent = {
        let quiz = quiz.clone();
        let data = data.clone();
        let category_id = category.id.clone();
        use_callback(move |intent: QuizIntent| {
            let mut save_state = save_state;
            match intent {
                QuizIntent::Choose(index) => {
                    apply_step(session, intent, |active| active.choose(index).map(|_| ()));
                }
                QuizIntent::Next => apply_step(session, intent, |active| active.next().map(|_| ())),
                QuizIntent::Prev => apply_step(session, intent, |active| active.prev().map(|_| ())),
                QuizIntent::Retake => {
                    session.set(quiz.start(&data.quizzes, &category_id).ok());
                    save_state.set(SaveState::Idle);
                }
                QuizIntent::Finish => {
                    if save_state() == SaveState::Saving {
                        return;
                    }
                    let Some(mut attempt) = session() else {
                        return;
                    };
                    let quiz = quiz.clone();
                    spawn(async move {
                        save_state.set(SaveState::Saving);
                        match quiz.finish(&mut attempt).await {
                            Ok(_) => {
                                session.set(Some(attempt));
                                save_state.set(SaveState::Idle);
                            }
                            Err(QuizServiceError::Progress(err)) => {
                                tracing::warn!(error = %err, "quiz progress was not saved");
                                session.set(Some(attempt));
                                save_state.set(SaveState::Failed);
                            }
                            Err(err) => {
                                tracing::debug!(error = %err, "quiz could not finish");
                                save_state.set(SaveState::Idle);
                            }
                        }
                    });
                }
            }
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch_intent, session);
            }
        }
    }

    let title = format!("{} • {} Quiz", data.catalog.site_title, category.name);
    let cat = category.id.to_string();

    let Some(current) = session() else {
        return rsx! {
            document::Title { "{title}" }
            div { class: "page quiz-page",
                div { id: "quizCard", class: "card pad",
                    h2 { "No quiz yet" }
                    p { class: "muted",
                        "Add questions for this category in "
                        code { "{QUIZZES_PATH}" }
                        "."
                    }
                    div { class: "btnrow",
                        Link { class: "btn", to: Route::Category { cat: cat.clone() }, "Back to category" }
                    }
                }
            }
        };
    };

    if current.is_complete() {
        let summary = map_quiz_summary(&current);
        return rsx! {
            document::Title { "{title}" }
            div { class: "page quiz-page",
                div { id: "quizCard", class: "card pad",
                    div { class: "quiz-top",
                        div {
                            h2 { "Quiz Complete" }
                            p { class: "muted",
                                "Category: "
                                b { "{category.name}" }
                            }
                        }
                        span { class: "pill {summary.tone_class}", "{summary.percent_label}" }
                    }
                    div { class: "hr" }
                    p {
                        "Your score: "
                        b { "{summary.score_label}" }
                        "."
                    }
                    if save_state() == SaveState::Failed {
                        p { class: "modal-error", "Your score could not be saved." }
                    }
                    div { class: "btnrow",
                        Link { class: "btn primary", to: Route::Category { cat: cat.clone() }, "Review products" }
                        button { id: "retakeBtn", class: "btn", r#type: "button", onclick: move |_| dispatch_intent.call(QuizIntent::Retake), "Retake quiz" }
                        Link { class: "btn", to: Route::Progress {}, "View progress" }
                        Link { class: "btn", to: Route::Home {}, "Home" }
                    }
                    p { class: "muted small",
                        "Tip: focus on the explanations you missed. They double as talking points with customers."
                    }
                }
            }
        };
    }

    let Some(question) = map_question(&current, &data.catalog) else {
        return rsx! {};
    };

    rsx! {
        document::Title { "{title}" }
        div { class: "page quiz-page",
            header { class: "view-header",
                h2 { id: "quizTitle", class: "view-title", "{category.name} Quiz" }
                div { class: "progressbar",
                    div { id: "quizProgress", style: "width: {question.progress_percent}%" }
                }
            }
            div { id: "quizCard", class: "card pad",
                div { class: "quiz-top",
                    div { class: "muted small", "{question.index_label}" }
                    span { class: "pill", "{question.skill_label}" }
                }
                h2 { class: "q", "{question.prompt}" }
                div { class: "choices",
                    for choice in question.choices {
                        ChoiceButton {
                            key: "{choice.index}",
                            choice: choice.clone(),
                            on_choose: move |index: usize| dispatch_intent.call(QuizIntent::Choose(index)),
                        }
                    }
                }
                if let Some(explanation) = question.explanation.clone() {
                    Explanation { explanation }
                }
                div { class: "btnrow",
                    button {
                        id: "prevBtn",
                        class: "btn",
                        r#type: "button",
                        disabled: !question.can_prev,
                        onclick: move |_| dispatch_intent.call(QuizIntent::Prev),
                        "Previous"
                    }
                    button {
                        id: "nextBtn",
                        class: "btn",
                        r#type: "button",
                        disabled: !question.can_next,
                        onclick: move |_| dispatch_intent.call(QuizIntent::Next),
                        "Next"
                    }
                    button {
                        id: "finishBtn",
                        class: "btn primary",
                        r#type: "button",
                        disabled: !question.can_finish || save_state() == SaveState::Saving,
                        onclick: move |_| dispatch_intent.call(QuizIntent::Finish),
                        "Finish"
                    }
                }
            }
        }
    }
}

/// Run one navigation or answer step, keeping the session as is when it is rejected.
fn apply_step(
    mut session: Signal<Option<QuizSession>>,
    intent: QuizIntent,
    step: impl FnOnce(&mut QuizSession) -> Result<(), QuizError>,
) {
    let mut guard = session.write();
    let Some(active) = guard.as_mut() else {
        return;
    };
    if let Err(err) = step(active) {
        tracing::debug!(?intent, error = %err, "quiz step rejected");
    }
}

#[component]
fn ChoiceButton(choice: ChoiceVm, on_choose: EventHandler<usize>) -> Element {
    let index = choice.index;
    rsx! {
        button {
            class: "{choice.class}",
            r#type: "button",
            disabled: choice.disabled,
            onclick: move |_| on_choose.call(index),
            "{choice.label}"
        }
    }
}

#[component]
fn Explanation(explanation: ExplanationVm) -> Element {
    let (pill_class, verdict) = if explanation.is_correct {
        ("pill ok", "Correct")
    } else {
        ("pill bad", "Incorrect")
    };
    rsx! {
        div { class: "explain",
            span { class: "{pill_class}", "{verdict}" }
            p { "{explanation.text}" }
            if !explanation.references.is_empty() {
                div { class: "muted small",
                    b { "Catalog references:" }
                    ul {
                        for reference in explanation.references.iter() {
                            li { "{reference}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    session: Rc<RefCell<Option<Signal<Option<QuizSession>>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<QuizIntent>,
        session: Signal<Option<QuizSession>>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.session.borrow_mut() = Some(session);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn session(&self) -> Signal<Option<QuizSession>> {
        (*self.session.borrow()).expect("quiz session registered")
    }
}
