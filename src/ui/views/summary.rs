use egui::{Context, RichText};

use crate::QuizApp;
use crate::ui::helpers::{big_button, performance_text, progress_strip};
use crate::ui::layout::{Screen, screen_panel};
use crate::view_models::{completion_summary, progress_markers};

pub fn ui_summary_view(app: &mut QuizApp, ctx: &Context) {
    // Sin sesión terminada no hay resumen que enseñar
    let Some(summary) = completion_summary(&app.session) else {
        return;
    };
    let markers = progress_markers(&app.session);

    screen_panel(ctx, Screen::Summary, |ui| {
        let panel_width = ui.available_width();

        ui.heading("🎉 Quiz Completed!");
        ui.add_space(10.0);
        ui.label(RichText::new(summary.score_line()).heading());
        ui.label(RichText::new(summary.percentage_line()).heading());
        ui.add_space(10.0);
        ui.label(performance_text(summary.performance));
        ui.add_space(10.0);

        progress_strip(ui, &markers);
        ui.add_space(10.0);

        if big_button(ui, "🔄 Restart Quiz", panel_width / 2.0, 36.0, true) {
            app.restart();
        }
    });
}
