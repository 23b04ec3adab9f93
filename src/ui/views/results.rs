use crate::ui::MovieQuizApp;
use egui::{Align2, Button, Context};

pub fn ui_results(app: &mut MovieQuizApp, ctx: &Context) {
    let Some(results) = app.screen().results.clone() else {
        return;
    };

    let mut restart = false;
    egui::Window::new(results.title.as_str())
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(results.text.as_str());
                ui.add_space(10.0);
                if ui
                    .add_sized([200.0, 36.0], Button::new(results.button_text.as_str()))
                    .clicked()
                {
                    restart = true;
                }
            });
        });

    if restart {
        app.controller.restart();
    }
}
