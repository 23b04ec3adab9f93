use egui::{Color32, Context, CornerRadius, Frame, RichText, Stroke, Ui, Visuals};

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(
            egui::Layout::right_to_left(egui::Align::Center),
            |ui| {
                if ui.button("🌙 Modo oscuro").clicked() {
                    ctx.set_visuals(Visuals::dark());
                }
                if ui.button("☀Modo claro").clicked() {
                    ctx.set_visuals(Visuals::light());
                }
            }
        );
    });
}

/// Marco del póster; con feedback lleva borde verde (acierto) o rojo (fallo).
pub fn poster_frame(ui: &mut Ui, title: &str, feedback: Option<bool>, width: f32, height: f32) {
    let stroke = match feedback {
        Some(true) => Stroke::new(8.0, Color32::GREEN),
        Some(false) => Stroke::new(8.0, Color32::RED),
        None => Stroke::NONE,
    };
    Frame::default()
        .fill(ui.visuals().extreme_bg_color)
        .corner_radius(CornerRadius::same(20))
        .stroke(stroke)
        .show(ui, |ui| {
            ui.set_min_size(egui::vec2(width, height));
            ui.centered_and_justified(|ui| {
                // No hay assets: se muestra el título de la película
                ui.label(RichText::new(title).heading());
            });
        });
}
