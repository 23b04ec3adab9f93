use super::*;
use crate::view_models::{ResultView, StepView};

impl<P: Presenter, S: Scheduler> QuizController<P, S> {
    /// Respuesta "sí" (`true`) o "no" (`false`) a la pregunta actual.
    /// Fuera de `AwaitingAnswer` se ignora.
    pub fn submit_answer(&mut self, given: bool) {
        if self.state.phase != QuizPhase::AwaitingAnswer {
            log::debug!(
                "respuesta ignorada en {:?} (pregunta {})",
                self.state.phase,
                self.state.current_index + 1
            );
            return;
        }

        let correct = self.questions[self.state.current_index].is_correct(given);
        if correct {
            self.state.correct_count += 1;
        }
        self.state.phase = QuizPhase::ShowingFeedback;
        log::info!(
            "pregunta {}/{}: {}",
            self.state.current_index + 1,
            self.questions.len(),
            if correct { "correcta" } else { "incorrecta" }
        );

        self.presenter.on_feedback(correct);
        self.schedule_advance();
    }

    /// Siguiente pregunta, o el resultado si era la última.
    pub(super) fn advance(&mut self, round: u64) {
        if round != self.state.round {
            log::debug!("transición de la partida {round} descartada");
            return;
        }
        if self.state.phase == QuizPhase::AwaitingAnswer {
            log::debug!("transición sin respuesta pendiente, ignorada");
            return;
        }

        if self.state.current_index == self.questions.len() - 1 {
            self.state.phase = QuizPhase::ShowingResults;
            if self.state.result_presented {
                return;
            }
            self.state.result_presented = true;
            log::info!(
                "ronda terminada: {}/{}",
                self.state.correct_count,
                self.questions.len()
            );
            let results = ResultView::new(self.state.correct_count, self.questions.len());
            self.presenter.on_results(&results);
        } else {
            self.state.current_index += 1;
            self.state.phase = QuizPhase::AwaitingAnswer;
            let step: StepView = self.current_step();
            self.presenter.on_step(&step);
        }
    }
}
