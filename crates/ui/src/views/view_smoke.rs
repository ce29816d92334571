use eco_core::model::Topic;

use super::test_harness::{ViewKind, builtin_flow, setup_view_harness};

#[test]
fn dashboard_smoke_renders_metric_and_cards() {
    let flow = builtin_flow();
    let session = flow.new_session();

    let mut harness = setup_view_harness(ViewKind::Dashboard, session);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Insignias Obtenidas"), "missing metric in {html}");
    assert!(html.contains("1/4"), "missing badge count in {html}");
    assert!(
        html.contains("Progreso General: 1/4 Lecciones"),
        "missing progress label in {html}"
    );
    assert!(html.contains("🌞 Energía Solar"), "missing solar card in {html}");
    assert!(html.contains("Puntaje: 10"), "missing solar score in {html}");
    assert!(html.contains("🎮 Mini Juegos"), "missing games tile in {html}");
}

#[test]
fn dashboard_smoke_locks_unauthored_topics() {
    let flow = builtin_flow();
    let session = flow.new_session();

    let mut harness = setup_view_harness(ViewKind::Dashboard, session);
    harness.rebuild();
    let html = harness.render();

    // Three locked buttons: Eólica, Hidráulica, and the games tile.
    let disabled = html.matches("disabled").count();
    assert_eq!(disabled, 3, "expected 3 locked buttons in {html}");
    assert!(html.contains("💨 Energía Eólica"), "missing eolica card in {html}");
    assert!(html.contains("card--green"), "missing completed accent in {html}");
    assert!(html.contains("card--blue"), "missing eolica accent in {html}");
}

#[test]
fn lesson_smoke_renders_content_and_quiz() {
    let flow = builtin_flow();
    let mut session = flow.new_session();
    flow.select_lesson(&mut session, Topic::Solar);

    let mut harness = setup_view_harness(ViewKind::Lesson(Topic::Solar), session);
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains("🌞 Energía Solar: Aprovechando la Luz"),
        "missing title in {html}"
    );
    assert!(
        html.contains("Características Principales"),
        "missing section in {html}"
    );
    assert!(
        html.contains("<strong>Fuente Inagotable:</strong>"),
        "markdown body not rendered in {html}"
    );
    assert!(
        html.contains("¿Qué tipo de energía solar genera electricidad directamente?"),
        "missing question 1 in {html}"
    );
    assert!(html.contains("Solar Fotovoltaica"), "missing choice in {html}");
    assert!(html.contains("Enviar Respuestas"), "missing submit in {html}");
    assert!(
        html.contains("⬅️ Volver al Dashboard"),
        "missing back button in {html}"
    );
    assert!(
        html.contains("Paneles Solares Fotovoltaicos"),
        "missing image caption in {html}"
    );
}

#[test]
fn progress_update_smoke_renders_score_and_feedback() {
    let flow = builtin_flow();
    let mut session = flow.new_session();
    flow.select_lesson(&mut session, Topic::Solar);
    flow.submit_quiz(
        &mut session,
        &[
            Some("Solar Fotovoltaica".to_string()),
            Some("Funciona solo de noche".to_string()),
        ],
    )
    .expect("submit quiz");

    let mut harness = setup_view_harness(ViewKind::ProgressUpdate, session);
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains("¡Cuestionario completado!"),
        "missing success line in {html}"
    );
    assert!(html.contains("<strong>5</strong>"), "missing score in {html}");
    assert!(
        html.contains("✅ Pregunta 1: ¡Correcto!"),
        "missing feedback in {html}"
    );
    assert!(
        html.contains("❌ Pregunta 2: Incorrecto."),
        "missing feedback in {html}"
    );
    assert!(
        html.contains("Continuar al Dashboard"),
        "missing continue button in {html}"
    );
}
