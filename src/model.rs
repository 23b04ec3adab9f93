use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub image: String, // nombre del póster, no se carga
    pub text: String,
    pub correct_answer: bool,
}

impl Question {
    pub fn new(image: impl Into<String>, text: impl Into<String>, correct_answer: bool) -> Self {
        Self {
            image: image.into(),
            text: text.into(),
            correct_answer,
        }
    }

    pub fn is_correct(&self, given: bool) -> bool {
        self.correct_answer == given
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum QuizPhase {
    #[default]
    AwaitingAnswer,
    ShowingFeedback, // respuestas bloqueadas hasta que llegue la transición
    ShowingResults,
}
