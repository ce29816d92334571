use dioxus::prelude::*;

use eco_core::model::Page;

use crate::context::AppContext;
use crate::views::{DashboardView, LessonView, ProgressUpdateView};

/// Page switcher: renders whichever view the session's page state names.
///
/// The session lives in a signal owned here. Every child mutates it through
/// `StudyFlowService` only, so each render is a pure function of the
/// session snapshot.
#[component]
pub fn StudyView() -> Element {
    let ctx = use_context::<AppContext>();
    let flow = ctx.study_flow();
    let session = use_signal(move || flow.new_session());

    let page = session.read().page();
    match page {
        Page::Dashboard => rsx! { DashboardView { session } },
        Page::Lesson(topic) => rsx! { LessonView { session, topic } },
        Page::ProgressUpdate => rsx! { ProgressUpdateView { session } },
    }
}
