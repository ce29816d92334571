mod dashboard;
mod lesson;
mod progress_update;
mod study;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use dashboard::DashboardView;
pub use lesson::LessonView;
pub use progress_update::ProgressUpdateView;
pub use study::StudyView;
