use egui::{Button, CentralPanel, Context, Frame, ScrollArea, Ui, Vec2, Visuals};

use crate::QuizApp;
use crate::view_models::answered_status;

pub fn top_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            ui.label(&app.title);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("🔄 Restart Quiz").clicked() {
                    app.request_restart();
                    ctx.request_repaint();
                }
            });
        });
    });
}

/// Barra inferior: cuántas preguntas llevas contestadas y el tema.
pub fn bottom_panel(app: &QuizApp, ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(answered_status(&app.session));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let dark = ui.visuals().dark_mode;
                let (label, visuals) = if dark {
                    ("☀ Light mode", Visuals::light())
                } else {
                    ("🌙 Dark mode", Visuals::dark())
                };
                if ui.button(label).clicked() {
                    ctx.set_visuals(visuals);
                }
            });
        });
    });
}

/// Tamaño de cada pantalla: la de pregunta necesita sitio para opciones y
/// explicación, el resumen es más estrecho.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Question { options: usize },
    Summary,
}

impl Screen {
    pub fn max_width(&self) -> f32 {
        match self {
            Screen::Question { .. } => 650.0,
            Screen::Summary => 480.0,
        }
    }

    /// Alto estimado para centrar en vertical.
    pub fn est_height(&self) -> f32 {
        match self {
            Screen::Question { options } => 360.0 + 28.0 * *options as f32,
            Screen::Summary => 320.0,
        }
    }
}

pub fn screen_panel(ctx: &Context, screen: Screen, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        let extra = ((ui.available_height() - screen.est_height()) / 2.0).max(0.0);
        ScrollArea::vertical().show(ui, |ui| {
            ui.add_space(extra);
            ui.vertical_centered(|ui| {
                Frame::group(ui.style())
                    .inner_margin(egui::Margin::symmetric(16, 16))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width().min(screen.max_width()));
                        inner(ui);
                    });
            });
        });
    });
}

/// Dibuja dos botones del mismo tamaño en una fila, cada uno con su estado
/// de habilitado. Devuelve (clic izquierdo, clic derecho).
pub fn nav_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left: (&str, bool),
    right: (&str, bool),
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let size = Vec2::new(btn_w, 36.0);
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        clicked_left = ui
            .add_enabled(left.1, Button::new(left.0).min_size(size))
            .clicked();
        clicked_right = ui
            .add_enabled(right.1, Button::new(right.0).min_size(size))
            .clicked();
    });
    (clicked_left, clicked_right)
}
