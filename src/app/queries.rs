use super::*;
use crate::view_models::StepView;

impl<P: Presenter, S: Scheduler> QuizController<P, S> {
    /// Proyección de la pregunta actual; válida en cualquier estado.
    pub fn current_step(&self) -> StepView {
        StepView::from_question(
            &self.questions[self.state.current_index],
            self.state.current_index,
            self.questions.len(),
        )
    }

    pub fn phase(&self) -> QuizPhase {
        self.state.phase
    }

    /// Los botones de respuesta sólo se habilitan cuando esto es `false`.
    pub fn answers_locked(&self) -> bool {
        self.state.phase != QuizPhase::AwaitingAnswer
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn correct_count(&self) -> usize {
        self.state.correct_count
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn result_presented(&self) -> bool {
        self.state.result_presented
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}
