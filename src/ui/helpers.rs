// src/ui/helpers.rs
use egui::{Button, Ui, Vec2};

/// Dos botones del mismo tamaño en una fila, centrados en el ancho dado.
/// Devuelve (clic izquierdo, clic derecho).
pub fn answer_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left_label: &str,
    right_label: &str,
    enabled: bool,
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        ui.add_space(((ui.available_width() - panel_width) / 2.0).max(0.0));
        clicked_left = ui
            .add_enabled(enabled, Button::new(left_label).min_size(Vec2::new(btn_w, 48.0)))
            .clicked();
        clicked_right = ui
            .add_enabled(enabled, Button::new(right_label).min_size(Vec2::new(btn_w, 48.0)))
            .clicked();
    });
    (clicked_left, clicked_right)
}
