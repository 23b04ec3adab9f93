use crate::ui::MovieQuizApp;
use crate::ui::helpers::answer_button_row;
use crate::ui::layout::poster_frame;
use egui::{Align, CentralPanel, Context, Layout, RichText};

pub fn ui_quiz(app: &mut MovieQuizApp, ctx: &Context) {
    let Some(step) = app.screen().step.clone() else {
        return;
    };
    let feedback = app.screen().feedback;
    let enabled = !app.controller.answers_locked();

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 420.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        ui.vertical_centered(|ui| {
            ui.set_max_width(panel_width);

            ui.horizontal(|ui| {
                ui.label("Pregunta:");
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(RichText::new(&step.question_number).strong());
                });
            });
            ui.add_space(10.0);

            poster_frame(ui, &step.image, feedback, panel_width, panel_width * 1.5);

            ui.add_space(16.0);
            ui.label(RichText::new(&step.question).size(22.0).strong());
            ui.add_space(16.0);

            let (no, si) = answer_button_row(ui, panel_width, "No", "Sí", enabled);
            if no {
                app.controller.submit_answer(false);
            }
            if si {
                app.controller.submit_answer(true);
            }
        });
    });
}
