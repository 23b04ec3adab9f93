// src/data.rs

use crate::error::QuizError;
use crate::model::Question;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_FEEDBACK_DELAY_SECS: f64 = 1.0;
/// Tope del retardo de feedback, en segundos.
pub const MAX_FEEDBACK_DELAY_SECS: f64 = 60.0;

fn default_feedback_delay_secs() -> f64 {
    DEFAULT_FEEDBACK_DELAY_SECS
}

/// Banco de preguntas más el retardo entre la respuesta y la siguiente pregunta.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct QuizBank {
    #[serde(default = "default_feedback_delay_secs")]
    pub feedback_delay_secs: f64,
    pub questions: Vec<Question>,
}

impl QuizBank {
    pub fn feedback_delay(&self) -> Result<Duration, QuizError> {
        let secs = self.feedback_delay_secs;
        if secs > MAX_FEEDBACK_DELAY_SECS {
            return Err(QuizError::InvalidDelay(secs));
        }
        Duration::try_from_secs_f64(secs).map_err(|_| QuizError::InvalidDelay(secs))
    }
}

/// Carga el banco de preguntas desde el YAML embebido
pub fn read_bank_embedded() -> Result<QuizBank, QuizError> {
    parse_bank(include_str!("data/movie_questions.yaml"))
}

pub fn parse_bank(yaml: &str) -> Result<QuizBank, QuizError> {
    let bank: QuizBank = serde_yaml::from_str(yaml)?;
    validate_questions(&bank.questions)?;
    bank.feedback_delay()?;
    log::debug!(
        "banco cargado: {} preguntas, retardo {}s",
        bank.questions.len(),
        bank.feedback_delay_secs
    );
    Ok(bank)
}

/// Rechaza listas vacías y preguntas sin póster o sin enunciado.
pub fn validate_questions(questions: &[Question]) -> Result<(), QuizError> {
    if questions.is_empty() {
        return Err(QuizError::EmptyQuestionList);
    }
    for (index, q) in questions.iter().enumerate() {
        if q.image.trim().is_empty() {
            return Err(QuizError::MalformedQuestion {
                index,
                reason: "image reference is blank".into(),
            });
        }
        if q.text.trim().is_empty() {
            return Err(QuizError::MalformedQuestion {
                index,
                reason: "question text is blank".into(),
            });
        }
    }
    Ok(())
}
