use dioxus::prelude::*;

use eco_core::model::Topic;
use services::StudySession;

use crate::context::AppContext;
use crate::vm::{map_quiz_form, markdown_to_html};

#[component]
pub fn LessonView(mut session: Signal<StudySession>, topic: Topic) -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let flow = ctx.study_flow();

    let question_count = catalog
        .lesson(topic)
        .map(|lesson| lesson.quiz().questions().len())
        .unwrap_or_default();
    // One ephemeral selection slot per question; dropped with the view, so
    // nothing survives past submit.
    let mut selected = use_signal(move || vec![None::<usize>; question_count]);
    let mut quiz_error = use_signal(|| None::<String>);

    let Some(lesson) = catalog.lesson(topic) else {
        // Locked topics never reach this view; keep a plain fallback anyway.
        return rsx! {
            p { class: "lesson__missing", "Lección no disponible." }
        };
    };

    let form = map_quiz_form(lesson.quiz());
    let questions_for_submit = form.questions.clone();
    let flow_submit = flow.clone();
    let flow_back = flow.clone();

    rsx! {
        div { class: "page lesson",
            h2 { "{lesson.title()}" }
            div {
                class: "callout",
                dangerous_inner_html: "{markdown_to_html(lesson.definition())}",
            }

            div { class: "lesson__columns",
                div { class: "lesson__text",
                    for part in lesson.sections() {
                        section { class: "lesson__section",
                            h3 { "{part.heading()}" }
                            div { dangerous_inner_html: "{markdown_to_html(part.body_markdown())}" }
                        }
                    }

                    details { class: "quiz",
                        summary { "❓ Cuestionario Rápido: {topic.title()}" }
                        p { class: "quiz__intro", "{form.intro}" }

                        for (q_idx, question) in form.questions.iter().enumerate() {
                            fieldset { class: "quiz__question",
                                legend { "{question.prompt}" }
                                for (c_idx, choice) in question.choices.iter().enumerate() {
                                    label { class: "quiz__choice",
                                        input {
                                            r#type: "radio",
                                            name: "question-{q_idx}",
                                            checked: selected.read()[q_idx] == Some(c_idx),
                                            onchange: move |_| {
                                                selected.write()[q_idx] = Some(c_idx);
                                            },
                                        }
                                        "{choice}"
                                    }
                                }
                            }
                        }

                        if let Some(message) = quiz_error.read().clone() {
                            p { class: "quiz__error", "{message}" }
                        }

                        button {
                            class: "quiz__submit",
                            onclick: move |_| {
                                let answers: Vec<Option<String>> = {
                                    let chosen = selected.read();
                                    chosen
                                        .iter()
                                        .enumerate()
                                        .map(|(idx, choice)| {
                                            choice.map(|c| {
                                                questions_for_submit[idx].choices[c].clone()
                                            })
                                        })
                                        .collect()
                                };
                                match flow_submit.submit_quiz(&mut session.write(), &answers) {
                                    Ok(_) => quiz_error.set(None),
                                    Err(error) => quiz_error.set(Some(error.to_string())),
                                }
                            },
                            "Enviar Respuestas"
                        }
                    }
                }

                div { class: "lesson__media",
                    if let Some(image) = lesson.image() {
                        figure {
                            img { src: "{image.url()}", alt: "{image.caption()}" }
                            figcaption { "{image.caption()}" }
                        }
                    }
                    if let Some(video) = lesson.video() {
                        p { class: "lesson__video",
                            a { href: "{video.url()}", target: "_blank", "▶ {video.caption()}" }
                        }
                    }
                }
            }

            button {
                class: "back",
                onclick: move |_| {
                    flow_back.back_to_dashboard(&mut session.write());
                },
                "⬅️ Volver al Dashboard"
            }
        }
    }
}
