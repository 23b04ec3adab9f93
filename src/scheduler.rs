// src/scheduler.rs

use std::time::{Duration, Instant};

/// Trabajo diferido que el controlador recibe de vuelta vía `QuizController::run`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Deferred {
    /// Pasar a la siguiente pregunta (o al resultado). `round` identifica la
    /// partida en la que se programó.
    Advance { round: u64 },
}

pub trait Scheduler {
    fn schedule_once(&mut self, delay: Duration, task: Deferred);
}

/// Cola que se vacía en cada frame de egui.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    pending: Vec<(Instant, Deferred)>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule_at(&mut self, due: Instant, task: Deferred) {
        self.pending.push((due, task));
    }

    /// Saca las tareas vencidas en orden de vencimiento.
    pub fn take_due(&mut self, now: Instant) -> Vec<Deferred> {
        let mut due: Vec<(Instant, Deferred)> = Vec::new();
        self.pending.retain(|(at, task)| {
            if *at <= now {
                due.push((*at, *task));
                false
            } else {
                true
            }
        });
        due.sort_by_key(|(at, _)| *at);
        due.into_iter().map(|(_, task)| task).collect()
    }

    /// Cuánto falta para la próxima tarea, para pedir el repintado justo.
    pub fn next_due_in(&self, now: Instant) -> Option<Duration> {
        self.pending
            .iter()
            .map(|(at, _)| at.saturating_duration_since(now))
            .min()
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Scheduler for FrameScheduler {
    fn schedule_once(&mut self, delay: Duration, task: Deferred) {
        let now = Instant::now();
        let due = now.checked_add(delay).unwrap_or_else(|| {
            log::warn!("retardo {delay:?} fuera de rango, la tarea vence ya");
            now
        });
        self.schedule_at(due, task);
    }
}
