use crate::model::media::MediaRef;
use crate::model::quiz::Quiz;
use crate::model::topic::Topic;

/// Heading plus markdown body. The UI decides how to render the markdown;
/// the model stores it as authored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonSection {
    heading: String,
    body_markdown: String,
}

impl LessonSection {
    #[must_use]
    pub fn new(heading: impl Into<String>, body_markdown: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            body_markdown: body_markdown.into(),
        }
    }

    #[must_use]
    pub fn heading(&self) -> &str {
        &self.heading
    }

    #[must_use]
    pub fn body_markdown(&self) -> &str {
        &self.body_markdown
    }
}

/// Full detail-page content for one topic: explanatory text, optional
/// media, and the lesson's quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    topic: Topic,
    title: String,
    definition: String,
    sections: Vec<LessonSection>,
    image: Option<MediaRef>,
    video: Option<MediaRef>,
    quiz: Quiz,
}

impl Lesson {
    #[must_use]
    pub fn new(
        topic: Topic,
        title: impl Into<String>,
        definition: impl Into<String>,
        quiz: Quiz,
    ) -> Self {
        Self {
            topic,
            title: title.into(),
            definition: definition.into(),
            sections: Vec::new(),
            image: None,
            video: None,
            quiz,
        }
    }

    #[must_use]
    pub fn with_section(mut self, section: LessonSection) -> Self {
        self.sections.push(section);
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: MediaRef) -> Self {
        self.image = Some(image);
        self
    }

    #[must_use]
    pub fn with_video(mut self, video: MediaRef) -> Self {
        self.video = Some(video);
        self
    }

    #[must_use]
    pub fn topic(&self) -> Topic {
        self.topic
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Definition callout shown above the lesson body, markdown allowed.
    #[must_use]
    pub fn definition(&self) -> &str {
        &self.definition
    }

    #[must_use]
    pub fn sections(&self) -> &[LessonSection] {
        &self.sections
    }

    #[must_use]
    pub fn image(&self) -> Option<&MediaRef> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn video(&self) -> Option<&MediaRef> {
        self.video.as_ref()
    }

    #[must_use]
    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }
}
