use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("a question needs at least two choices")]
    TooFewChoices,

    #[error("correct choice index {correct} is out of range for {choices} choices")]
    CorrectOutOfRange { correct: usize, choices: usize },

    #[error("got {got} answers for {expected} questions")]
    AnswerCount { expected: usize, got: usize },
}

/// Single multiple-choice question with one correct option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    choices: Vec<String>,
    correct: usize,
    explanation: String,
}

impl Question {
    /// # Errors
    ///
    /// Returns `QuizError::TooFewChoices` for fewer than two choices and
    /// `QuizError::CorrectOutOfRange` when `correct` does not index a choice.
    pub fn new(
        prompt: impl Into<String>,
        choices: Vec<String>,
        correct: usize,
        explanation: impl Into<String>,
    ) -> Result<Self, QuizError> {
        if choices.len() < 2 {
            return Err(QuizError::TooFewChoices);
        }
        if correct >= choices.len() {
            return Err(QuizError::CorrectOutOfRange {
                correct,
                choices: choices.len(),
            });
        }
        Ok(Self {
            prompt: prompt.into(),
            choices,
            correct,
            explanation: explanation.into(),
        })
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    /// Shown as part of the feedback for a wrong answer.
    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn correct_choice(&self) -> &str {
        &self.choices[self.correct]
    }

    fn is_correct(&self, answer: &str) -> bool {
        self.correct_choice() == answer
    }
}

/// One line of per-question feedback, produced for every question no matter
/// how it was answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackLine {
    pub correct: bool,
    pub message: String,
}

/// Result of scoring a submission: earned points plus display feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOutcome {
    score: u32,
    max_score: u32,
    feedback: Vec<FeedbackLine>,
}

impl QuizOutcome {
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn max_score(&self) -> u32 {
        self.max_score
    }

    #[must_use]
    pub fn feedback(&self) -> &[FeedbackLine] {
        &self.feedback
    }
}

/// Fixed quiz attached to a lesson.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    intro: String,
    points_per_question: u32,
    questions: Vec<Question>,
}

impl Quiz {
    #[must_use]
    pub fn new(
        intro: impl Into<String>,
        points_per_question: u32,
        questions: Vec<Question>,
    ) -> Self {
        Self {
            intro: intro.into(),
            points_per_question,
            questions,
        }
    }

    #[must_use]
    pub fn intro(&self) -> &str {
        &self.intro
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn max_score(&self) -> u32 {
        self.points_per_question * self.questions.len() as u32
    }

    /// Score a submission. `None` answers count as incorrect; there is no
    /// separate error path for leaving a question blank.
    ///
    /// Evaluation is pure: the same answers always produce the same outcome
    /// and nothing outside the returned value changes.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::AnswerCount` when the answer slice length does
    /// not match the question count.
    pub fn evaluate(&self, answers: &[Option<String>]) -> Result<QuizOutcome, QuizError> {
        if answers.len() != self.questions.len() {
            return Err(QuizError::AnswerCount {
                expected: self.questions.len(),
                got: answers.len(),
            });
        }

        let mut score = 0;
        let mut feedback = Vec::with_capacity(self.questions.len());
        for (idx, (question, answer)) in self.questions.iter().zip(answers).enumerate() {
            let number = idx + 1;
            let correct = answer.as_deref().is_some_and(|a| question.is_correct(a));
            if correct {
                score += self.points_per_question;
                feedback.push(FeedbackLine {
                    correct: true,
                    message: format!("✅ Pregunta {number}: ¡Correcto!"),
                });
            } else {
                feedback.push(FeedbackLine {
                    correct: false,
                    message: format!(
                        "❌ Pregunta {number}: Incorrecto. {}",
                        question.explanation
                    ),
                });
            }
        }

        Ok(QuizOutcome {
            score,
            max_score: self.max_score(),
            feedback,
        })
    }
}
