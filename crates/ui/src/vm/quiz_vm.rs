use eco_core::model::{Quiz, QuizOutcome};

/// Display copy for one radio group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizQuestionVm {
    pub prompt: String,
    pub choices: Vec<String>,
}

/// Display copy for the whole quiz form. Never exposes which choice is
/// correct.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizFormVm {
    pub intro: String,
    pub questions: Vec<QuizQuestionVm>,
}

#[must_use]
pub fn map_quiz_form(quiz: &Quiz) -> QuizFormVm {
    QuizFormVm {
        intro: quiz.intro().to_string(),
        questions: quiz
            .questions()
            .iter()
            .map(|question| QuizQuestionVm {
                prompt: question.prompt().to_string(),
                choices: question.choices().to_vec(),
            })
            .collect(),
    }
}

/// Feedback lines ready for display, one per question.
#[must_use]
pub fn map_feedback(outcome: &QuizOutcome) -> Vec<String> {
    outcome
        .feedback()
        .iter()
        .map(|line| line.message.clone())
        .collect()
}
