// src/presenter.rs

use crate::view_models::{ResultView, StepView};

/// Lo que el controlador le cuenta a la vista. No se lee nada de vuelta.
pub trait Presenter {
    fn on_step(&mut self, step: &StepView);
    fn on_feedback(&mut self, correct: bool);
    fn on_results(&mut self, results: &ResultView);
}

/// Estado de pantalla que pinta la UI de egui.
#[derive(Clone, Debug, Default)]
pub struct ScreenState {
    pub step: Option<StepView>,
    pub feedback: Option<bool>, // borde verde/rojo sobre el póster
    pub results: Option<ResultView>,
}

impl Presenter for ScreenState {
    fn on_step(&mut self, step: &StepView) {
        self.step = Some(step.clone());
        self.feedback = None;
        self.results = None;
    }

    fn on_feedback(&mut self, correct: bool) {
        self.feedback = Some(correct);
    }

    fn on_results(&mut self, results: &ResultView) {
        self.feedback = None;
        self.results = Some(results.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_step_clears_feedback_and_results() {
        let mut screen = ScreenState::default();
        screen.on_feedback(true);
        screen.on_results(&ResultView::new(1, 2));
        assert_eq!(screen.feedback, None);

        screen.on_feedback(false);
        screen.on_step(&StepView {
            image: "Tesla".into(),
            question: "q".into(),
            question_number: "1/2".into(),
        });
        assert_eq!(screen.feedback, None);
        assert!(screen.results.is_none());
        assert_eq!(screen.step.as_ref().map(|s| s.image.as_str()), Some("Tesla"));
    }
}
