use crate::data::{QuizBank, validate_questions};
use crate::error::QuizError;
use crate::model::{Question, QuizPhase};
use crate::presenter::Presenter;
use crate::scheduler::{Deferred, Scheduler};
use std::time::Duration;

// Submódulos
pub mod actions;
pub mod queries;
pub mod resets;

/// Estado mutable de una partida. Sólo lo toca `QuizController`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuizState {
    pub current_index: usize,
    pub correct_count: usize,
    pub phase: QuizPhase,
    pub result_presented: bool,
    // Partida en curso; cambia con cada reinicio
    pub round: u64,
}

/// Máquina de estados del quiz: pregunta → feedback → siguiente pregunta o resultado.
pub struct QuizController<P: Presenter, S: Scheduler> {
    questions: Vec<Question>,
    state: QuizState,
    feedback_delay: Duration,
    presenter: P,
    scheduler: S,
}

impl<P: Presenter, S: Scheduler> QuizController<P, S> {
    /// Valida la lista antes de nada; si falla no se emite nada al presenter.
    pub fn new(
        questions: Vec<Question>,
        feedback_delay: Duration,
        presenter: P,
        scheduler: S,
    ) -> Result<Self, QuizError> {
        validate_questions(&questions)?;
        log::info!(
            "quiz listo: {} preguntas, feedback {:?}",
            questions.len(),
            feedback_delay
        );
        Ok(Self {
            questions,
            state: QuizState::default(),
            feedback_delay,
            presenter,
            scheduler,
        })
    }

    pub fn from_bank(bank: QuizBank, presenter: P, scheduler: S) -> Result<Self, QuizError> {
        let delay = bank.feedback_delay()?;
        Self::new(bank.questions, delay, presenter, scheduler)
    }

    /// Ejecuta una tarea diferida que el scheduler ha soltado.
    pub fn run(&mut self, task: Deferred) {
        match task {
            Deferred::Advance { round } => self.advance(round),
        }
    }

    fn schedule_advance(&mut self) {
        let task = Deferred::Advance {
            round: self.state.round,
        };
        self.scheduler.schedule_once(self.feedback_delay, task);
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::view_models::{ResultView, StepView};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Presenter que escribe en un registro compartido, para poder mirarlo
    /// aunque `new` se quede con él y lo suelte.
    struct SharedLogPresenter(Rc<RefCell<Vec<Shown>>>);

    impl Presenter for SharedLogPresenter {
        fn on_step(&mut self, step: &StepView) {
            self.0.borrow_mut().push(Shown::Step(step.clone()));
        }
        fn on_feedback(&mut self, correct: bool) {
            self.0.borrow_mut().push(Shown::Feedback(correct));
        }
        fn on_results(&mut self, results: &ResultView) {
            self.0.borrow_mut().push(Shown::Results(results.clone()));
        }
    }

    #[test]
    fn empty_list_fails_without_emitting() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let result = QuizController::new(
            Vec::new(),
            Duration::from_secs(1),
            SharedLogPresenter(Rc::clone(&log)),
            ManualScheduler::default(),
        );
        let err = result.err().unwrap();
        assert!(matches!(err, QuizError::EmptyQuestionList));
        assert!(err.is_configuration());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn malformed_list_fails_without_emitting() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let result = QuizController::new(
            vec![Question::new("Old", "", false)],
            Duration::from_secs(1),
            SharedLogPresenter(Rc::clone(&log)),
            ManualScheduler::default(),
        );
        assert!(matches!(
            result.err(),
            Some(QuizError::MalformedQuestion { index: 0, .. })
        ));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn construction_does_not_talk_to_the_presenter() {
        let ctrl = controller(&[true, false]);
        assert!(ctrl.presenter().shown.is_empty());
        assert_eq!(ctrl.phase(), QuizPhase::AwaitingAnswer);
        assert_eq!(ctrl.current_index(), 0);
    }

    #[test]
    fn from_bank_uses_the_configured_delay() {
        let bank = QuizBank {
            feedback_delay_secs: 0.25,
            questions: vec![Question::new("A", "t", true)],
        };
        let mut ctrl: TestController = QuizController::from_bank(
            bank,
            RecordingPresenter::default(),
            ManualScheduler::default(),
        )
        .unwrap();
        ctrl.submit_answer(true);
        assert_eq!(ctrl.scheduler_mut().pending[0].0, Duration::from_millis(250));
    }

    #[test]
    fn from_bank_rejects_nan_delay() {
        let bank = QuizBank {
            feedback_delay_secs: f64::NAN,
            questions: vec![Question::new("A", "t", true)],
        };
        let result: Result<TestController, _> = QuizController::from_bank(
            bank,
            RecordingPresenter::default(),
            ManualScheduler::default(),
        );
        assert!(matches!(result, Err(QuizError::InvalidDelay(_))));
    }
}
