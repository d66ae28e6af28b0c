mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::AppState;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // BOTÓN SUPERIOR DE REINICIAR
        top_panel(self, ctx);

        // PANEL INFERIOR: PROGRESO Y TEMA
        bottom_panel(self, ctx);

        // Cada frame se vuelve a leer la sesión
        match self.state() {
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
            AppState::Summary => views::summary::ui_summary_view(self, ctx),
        }

        if self.confirm_restart {
            self.confirm_restart(ctx);
        }
    }
}
