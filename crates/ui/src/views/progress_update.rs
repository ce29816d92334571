use dioxus::prelude::*;

use services::StudySession;

use crate::context::AppContext;
use crate::vm::map_feedback;

/// Confirmation screen shown between quiz submission and the dashboard
/// refresh. The staged outcome is committed when the student continues.
#[component]
pub fn ProgressUpdateView(mut session: Signal<StudySession>) -> Element {
    let ctx = use_context::<AppContext>();
    let flow = ctx.study_flow();

    let (score, feedback) = {
        let current = session.read();
        match current.staged() {
            Some(staged) => (staged.outcome().score(), map_feedback(staged.outcome())),
            None => (0, Vec::new()),
        }
    };

    rsx! {
        div { class: "page transition",
            p { class: "celebration", "🎈" }
            p { class: "success",
                "¡Cuestionario completado! Ganaste "
                strong { "{score}" }
                " Puntos Ecológicos."
            }
            ul { class: "feedback",
                for line in feedback {
                    li { "{line}" }
                }
            }
            button {
                class: "continue",
                onclick: move |_| {
                    flow.continue_to_dashboard(&mut session.write());
                },
                "Continuar al Dashboard"
            }
        }
    }
}
