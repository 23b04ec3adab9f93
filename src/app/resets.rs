use super::*;

impl<P: Presenter, S: Scheduler> QuizController<P, S> {
    /// Vuelve a la primera pregunta con la puntuación a cero. Se puede llamar
    /// en cualquier estado; una transición pendiente de la partida anterior
    /// queda descartada.
    pub fn restart(&mut self) {
        let round = self.state.round.wrapping_add(1);
        self.state = QuizState {
            round,
            ..QuizState::default()
        };
        log::info!("nueva partida ({round})");
        self.show_current();
    }

    /// Pinta la pregunta actual (pantalla inicial).
    pub fn show_current(&mut self) {
        let step = self.current_step();
        self.presenter.on_step(&step);
    }
}
