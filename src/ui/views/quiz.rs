use egui::{Checkbox, Context, ProgressBar, RadioButton, RichText, ScrollArea};

use crate::QuizApp;
use crate::ui::helpers::{big_button, feedback_color, progress_strip};
use crate::ui::layout::{Screen, nav_button_row, screen_panel};
use crate::view_models::{answer_feedback, progress_markers, question_header};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    // Copia de lo que se dibuja; la sesión solo se toca a través de las acciones
    let Ok(question) = app.session.current().cloned() else {
        return;
    };
    let header = question_header(&app.session).unwrap_or_default();
    let feedback = answer_feedback(&app.session);
    let markers = progress_markers(&app.session);
    let revealed = app.session.is_revealed();
    let progress = app.session.progress_fraction();
    let title = app.title.clone();

    let screen = Screen::Question {
        options: question.options.len(),
    };

    screen_panel(ctx, screen, |ui| {
        let panel_width = ui.available_width();

        ui.heading(&title);
        ui.add(ProgressBar::new(progress).desired_width(panel_width));
        ui.add_space(10.0);

        ui.label(RichText::new(header).strong());
        // Prompt con scroll fijo
        ScrollArea::vertical()
            .id_salt("prompt")
            .max_height(150.0)
            .show(ui, |ui| {
                ui.label(RichText::new(&question.prompt).heading());
            });
        ui.separator();

        if question.multi {
            ui.label("Select all that apply:");
            for opt in &question.options {
                let mut checked = app.is_pending(&opt.label);
                let text = format!("{}. {}", opt.label, opt.text);
                if ui
                    .add_enabled(!revealed, Checkbox::new(&mut checked, text))
                    .changed()
                {
                    app.toggle_option(&opt.label);
                }
            }
        } else {
            ui.label("Choose an option:");
            for opt in &question.options {
                let text = format!("{}. {}", opt.label, opt.text);
                if ui
                    .add_enabled(!revealed, RadioButton::new(app.is_pending(&opt.label), text))
                    .clicked()
                {
                    app.select_single(&opt.label);
                }
            }
        }

        ui.add_space(8.0);
        if !revealed && big_button(ui, "Show Answer", panel_width, 36.0, app.can_show_answer()) {
            app.show_answer();
        }

        // Respuesta y explicación
        if let Some(feedback) = &feedback {
            ui.label(
                RichText::new(feedback.headline())
                    .color(feedback_color(feedback.correct))
                    .strong(),
            );
            if !feedback.explanation.is_empty() {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(panel_width);
                    ui.label(format!("ℹ {}", feedback.explanation));
                });
            }
        }

        ui.add_space(8.0);
        let (previous, next) = nav_button_row(
            ui,
            panel_width,
            ("← Previous", app.can_go_back()),
            (app.next_label(), app.can_go_next()),
        );
        if previous {
            app.previous();
        }
        if next {
            app.next();
        }

        ui.separator();
        ui.label(RichText::new("Progress").strong());
        progress_strip(ui, &markers);

        if !app.message.is_empty() {
            ui.add_space(8.0);
            ui.label(&app.message);
        }
    });
}
