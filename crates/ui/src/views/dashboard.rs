use dioxus::prelude::*;

use services::StudySession;

use crate::context::AppContext;
use crate::vm::{LessonCardVm, map_lesson_cards};

#[component]
pub fn DashboardView(session: Signal<StudySession>) -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();

    let (summary, cards) = {
        let current = session.read();
        (
            current.progress().summary(),
            map_lesson_cards(current.progress(), &catalog),
        )
    };
    let percent = (summary.fraction() * 100.0).round();

    rsx! {
        div { class: "page dashboard",
            section { class: "metrics",
                div { class: "metric",
                    span { class: "metric__label", "Insignias Obtenidas" }
                    span { class: "metric__value", "{summary.badge_count}/{summary.total_lessons}" }
                    span { class: "metric__delta", "¡Sigue así!" }
                }
                div { class: "progress",
                    div { class: "progress__track",
                        div { class: "progress__fill", style: "width: {percent}%" }
                    }
                    span { class: "progress__label",
                        "Progreso General: {summary.completed_lessons}/{summary.total_lessons} Lecciones"
                    }
                }
            }

            h3 { "Selecciona una Lección para empezar a aprender:" }

            div { class: "cards",
                for card in cards {
                    LessonCard { session, card }
                }
                GamesCard {}
            }
        }
    }
}

#[component]
fn LessonCard(mut session: Signal<StudySession>, card: LessonCardVm) -> Element {
    let ctx = use_context::<AppContext>();
    let flow = ctx.study_flow();
    let topic = card.topic;

    rsx! {
        div { class: "card card--{card.accent}",
            h4 { "{card.heading}" }
            p { "{card.blurb} Puntaje: {card.score}" }
            button {
                class: "card__action",
                disabled: !card.unlocked,
                onclick: move |_| {
                    flow.select_lesson(&mut session.write(), topic);
                },
                "Iniciar Lección"
            }
        }
    }
}

// Quick-access tile for the mini games. The content does not exist yet, so
// the tile is always locked.
#[component]
fn GamesCard() -> Element {
    rsx! {
        div { class: "card card--purple card--muted",
            h4 { "🎮 Mini Juegos" }
            p { "¡Pon a prueba lo aprendido! (Desbloquea una insignia)" }
            button { class: "card__action", disabled: true, "Jugar Ahora" }
        }
    }
}
