mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizController;
use crate::data::QuizBank;
use crate::error::QuizError;
use crate::presenter::ScreenState;
use crate::scheduler::FrameScheduler;
use eframe::{App, Frame};
use egui::Context;
use layout::bottom_panel;
use std::time::{Duration, Instant};

pub type ScreenController = QuizController<ScreenState, FrameScheduler>;

pub struct MovieQuizApp {
    pub controller: ScreenController,
}

impl MovieQuizApp {
    pub fn new(bank: QuizBank) -> Result<Self, QuizError> {
        let mut controller =
            QuizController::from_bank(bank, ScreenState::default(), FrameScheduler::new())?;
        controller.show_current();
        Ok(Self { controller })
    }

    /// Ejecuta las transiciones vencidas. Devuelve cuánto falta para la próxima.
    pub fn pump(&mut self, now: Instant) -> Option<Duration> {
        let due = self.controller.scheduler_mut().take_due(now);
        for task in due {
            self.controller.run(task);
        }
        self.controller.scheduler_mut().next_due_in(now)
    }

    pub fn screen(&self) -> &ScreenState {
        self.controller.presenter()
    }
}

impl App for MovieQuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Sin repintado programado la transición esperaría a un evento de entrada
        if let Some(wait) = self.pump(Instant::now()) {
            ctx.request_repaint_after(wait);
        }

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        views::quiz::ui_quiz(self, ctx);

        if self.screen().results.is_some() {
            views::results::ui_results(self, ctx);
        }
    }
}
