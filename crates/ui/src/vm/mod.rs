mod dashboard_vm;
mod markdown_vm;
mod quiz_vm;

pub use dashboard_vm::{DASHBOARD_TOPICS, LessonCardVm, map_lesson_cards};
pub use markdown_vm::{markdown_to_html, sanitize_html};
pub use quiz_vm::{QuizFormVm, QuizQuestionVm, map_feedback, map_quiz_form};
