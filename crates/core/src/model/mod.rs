mod lesson;
mod media;
mod page;
mod progress;
mod quiz;
mod topic;

pub use lesson::{Lesson, LessonSection};
pub use media::{MediaError, MediaRef};
pub use page::Page;
pub use progress::{LessonProgress, ProgressStore, ProgressSummary};
pub use quiz::{FeedbackLine, Question, Quiz, QuizError, QuizOutcome};
pub use topic::{ParseTopicError, Topic};
