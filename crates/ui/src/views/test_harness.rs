use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use eco_core::model::Topic;
use eco_core::time::fixed_now;
use services::{Clock, LessonCatalog, StudyFlowService, StudySession};

use crate::context::{UiApp, build_app_context};
use crate::views::{DashboardView, LessonView, ProgressUpdateView};

struct TestApp {
    catalog: Arc<LessonCatalog>,
    study_flow: Arc<StudyFlowService>,
}

impl UiApp for TestApp {
    fn catalog(&self) -> Arc<LessonCatalog> {
        Arc::clone(&self.catalog)
    }

    fn study_flow(&self) -> Arc<StudyFlowService> {
        Arc::clone(&self.study_flow)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Dashboard,
    Lesson(Topic),
    ProgressUpdate,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    session: StudySession,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| props.session.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    let initial = use_context::<StudySession>();
    let session = use_signal(move || initial.clone());
    match view {
        ViewKind::Dashboard => rsx! { DashboardView { session } },
        ViewKind::Lesson(topic) => rsx! { LessonView { session, topic } },
        ViewKind::ProgressUpdate => rsx! { ProgressUpdateView { session } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Flow service over the built-in catalog with a fixed clock. Tests derive
/// the session they want by driving this before handing it to the harness.
pub fn builtin_flow() -> Arc<StudyFlowService> {
    let catalog = Arc::new(LessonCatalog::builtin().expect("builtin catalog"));
    Arc::new(StudyFlowService::new(Clock::fixed(fixed_now()), catalog))
}

pub fn setup_view_harness(view: ViewKind, session: StudySession) -> ViewHarness {
    let catalog = Arc::new(LessonCatalog::builtin().expect("builtin catalog"));
    let study_flow = Arc::new(StudyFlowService::new(
        Clock::fixed(fixed_now()),
        Arc::clone(&catalog),
    ));
    let app = Arc::new(TestApp {
        catalog,
        study_flow,
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view, session });

    ViewHarness { dom }
}
