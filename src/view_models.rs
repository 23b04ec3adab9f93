// src/view_models.rs

use crate::model::Question;

pub const RESULTS_TITLE: &str = "¡Ronda terminada!";
pub const RESTART_LABEL: &str = "Jugar otra vez";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepView {
    pub image: String,
    pub question: String,
    pub question_number: String, // "n/total"
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultView {
    pub title: String,
    pub text: String,
    pub button_text: String,
    pub correct_count: usize,
    pub total: usize,
}

impl StepView {
    pub fn from_question(question: &Question, index: usize, total: usize) -> Self {
        Self {
            image: question.image.clone(),
            question: question.text.clone(),
            question_number: format!("{}/{}", index + 1, total),
        }
    }
}

impl ResultView {
    pub fn new(correct_count: usize, total: usize) -> Self {
        Self {
            title: RESULTS_TITLE.to_string(),
            text: format!("Has acertado {correct_count} de {total} preguntas."),
            button_text: RESTART_LABEL.to_string(),
            correct_count,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_numbers_are_one_based() {
        let q = Question::new("Old", "¿Mayor que 6?", false);
        let step = StepView::from_question(&q, 6, 10);
        assert_eq!(step.question_number, "7/10");
        assert_eq!(step.image, "Old");
    }

    #[test]
    fn result_text_mentions_score_and_total() {
        let view = ResultView::new(7, 10);
        assert_eq!(view.text, "Has acertado 7 de 10 preguntas.");
        assert_eq!(view.title, RESULTS_TITLE);
        assert_eq!(view.button_text, RESTART_LABEL);
    }
}
