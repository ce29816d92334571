use std::sync::Arc;

use services::{LessonCatalog, StudyFlowService};

pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<LessonCatalog>;
    fn study_flow(&self) -> Arc<StudyFlowService>;
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<LessonCatalog>,
    study_flow: Arc<StudyFlowService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: app.catalog(),
            study_flow: app.study_flow(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<LessonCatalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn study_flow(&self) -> Arc<StudyFlowService> {
        Arc::clone(&self.study_flow)
    }
}

// This context is provided by the application composition root
// (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
