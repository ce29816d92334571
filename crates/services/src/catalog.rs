//! Built-in lesson content.
//!
//! Content ships with the binary; there is no authoring surface. Topics
//! without an authored lesson stay locked on the dashboard.

use std::collections::BTreeMap;

use eco_core::model::{Lesson, LessonSection, MediaRef, Question, Quiz, Topic};

use crate::error::CatalogError;

/// Points awarded per correctly answered quiz question.
const POINTS_PER_QUESTION: u32 = 5;

/// Read-only set of authored lessons.
#[derive(Debug, Clone)]
pub struct LessonCatalog {
    lessons: BTreeMap<Topic, Lesson>,
}

impl LessonCatalog {
    /// Catalog with the content that ships with the app — currently the
    /// solar lesson only.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if built-in content fails validation. That is
    /// a programming error in the authored content, surfaced at startup.
    pub fn builtin() -> Result<Self, CatalogError> {
        let mut lessons = BTreeMap::new();
        lessons.insert(Topic::Solar, solar_lesson()?);
        Ok(Self { lessons })
    }

    #[must_use]
    pub fn lesson(&self, topic: Topic) -> Option<&Lesson> {
        self.lessons.get(&topic)
    }

    /// A topic is unlocked when it has an authored lesson.
    #[must_use]
    pub fn is_unlocked(&self, topic: Topic) -> bool {
        self.lessons.contains_key(&topic)
    }
}

fn solar_lesson() -> Result<Lesson, CatalogError> {
    let quiz = Quiz::new(
        "¡Responde para ganar 10 Puntos Ecológicos!",
        POINTS_PER_QUESTION,
        vec![
            Question::new(
                "¿Qué tipo de energía solar genera electricidad directamente?",
                vec![
                    "Solar Térmica".to_string(),
                    "Solar Fotovoltaica".to_string(),
                    "Solar Geotérmica".to_string(),
                ],
                1,
                "La fotovoltaica convierte luz en electricidad.",
            )?,
            Question::new(
                "¿Cuál es uno de los principales beneficios ambientales?",
                vec![
                    "Genera pocos residuos".to_string(),
                    "Reduce las emisiones de CO2".to_string(),
                    "Funciona solo de noche".to_string(),
                ],
                1,
                "El principal beneficio es la reducción de CO2.",
            )?,
        ],
    );

    let lesson = Lesson::new(
        Topic::Solar,
        "🌞 Energía Solar: Aprovechando la Luz",
        "💡 **Definición:** La energía solar aprovecha la radiación del sol \
         para generar electricidad o calor.",
        quiz,
    )
    .with_section(LessonSection::new(
        "Características Principales",
        "* **Fuente Inagotable:** Es un recurso que se renueva continuamente.\n\
         * **Bajo Impacto Ambiental:** No produce emisiones de CO2 en su generación.\n\
         * **Aplicación:** Se usa en paneles fotovoltaicos (electricidad) y \
         calentadores solares (calor).",
    ))
    .with_section(LessonSection::new(
        "Beneficios para Chihuahua",
        "Chihuahua, con su alto índice de días soleados, tiene un **potencial \
         solar enorme**. Grandes proyectos como parques solares aprovechan esta \
         ventaja para la generación a gran escala.",
    ))
    .with_image(MediaRef::new(
        "https://images.unsplash.com/photo-1509391007205-d143c7b80b2a",
        "Paneles Solares Fotovoltaicos",
    )?)
    .with_video(MediaRef::new(
        "https://youtu.be/J-p4j11H7y8",
        "Video explicativo simple",
    )?);

    Ok(lesson)
}
