use training_core::model::Catalog;
use training_core::{ChoiceMark, QuizSession, ScoreTone};

use super::product_vm::product_reference_label;

/// Everything a learner can do on the quiz page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Choose(usize),
    Next,
    Prev,
    Finish,
    Retake,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceVm {
    pub index: usize,
    pub label: String,
    pub class: &'static str,
    pub disabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExplanationVm {
    pub is_correct: bool,
    pub text: String,
    pub references: Vec<String>,
}

/// Everything the question card needs for the current position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub index_label: String,
    pub skill_label: &'static str,
    pub prompt: String,
    pub choices: Vec<ChoiceVm>,
    pub explanation: Option<ExplanationVm>,
    pub can_prev: bool,
    pub can_next: bool,
    pub can_finish: bool,
    pub progress_percent: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizSummaryVm {
    pub score_label: String,
    pub percent_label: String,
    pub tone_class: &'static str,
}

/// Map the session's current question, `None` once completed.
#[must_use]
pub fn map_question(session: &QuizSession, catalog: &Catalog) -> Option<QuestionVm> {
    let index = session.current_index()?;
    let question = session.current_question()?;
    let answered = session.current_answer().is_some();

    let choices = question
        .choices
        .iter()
        .enumerate()
        .map(|(i, label)| ChoiceVm {
            index: i,
            label: label.clone(),
            class: match session.choice_mark(i) {
                ChoiceMark::Correct => "choice correct",
                ChoiceMark::Wrong => "choice wrong",
                ChoiceMark::Open | ChoiceMark::Neutral => "choice",
            },
            disabled: answered,
        })
        .collect();

    let explanation = session.current_answer().map(|chosen| ExplanationVm {
        is_correct: question.is_correct(chosen),
        text: question.explanation.clone(),
        references: catalog
            .resolve_products(&question.product_refs)
            .into_iter()
            .map(product_reference_label)
            .collect(),
    });

    Some(QuestionVm {
        index_label: format!("Question {} of {}", index + 1, session.len()),
        skill_label: question.skill.label(),
        prompt: question.prompt.clone(),
        choices,
        explanation,
        can_prev: session.can_prev(),
        can_next: session.can_next(),
        can_finish: session.can_finish(),
        progress_percent: session.progress_percent(),
    })
}

#[must_use]
pub fn map_quiz_summary(session: &QuizSession) -> QuizSummaryVm {
    let score = session.score();
    let percent = score.percent();
    QuizSummaryVm {
        score_label: format!("{} / {}", score.correct, score.total),
        percent_label: format!("{percent}%"),
        tone_class: ScoreTone::from_percent(percent).css_class(),
    }
}
