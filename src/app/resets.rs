use super::*;

impl QuizApp {
    /// Empieza otro intento con las mismas preguntas.
    pub fn restart(&mut self) {
        self.session = self.session.reset();
        self.confirm_restart = false;
        self.after_navigation();
    }

    /// Durante el quiz se pide confirmación; en el resumen no hace falta.
    pub fn request_restart(&mut self) {
        if self.session.is_completed() || self.session.answered_count() == 0 {
            self.restart();
        } else {
            self.confirm_restart = true;
        }
    }

    pub fn cancel_restart(&mut self) {
        self.confirm_restart = false;
    }

    pub fn confirm_restart(&mut self, ctx: &egui::Context) {
        egui::Window::new("Restart quiz")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Your answers for this attempt will be discarded. Restart?");
                ui.horizontal(|ui| {
                    if ui.button("Yes, restart").clicked() {
                        self.restart();
                    }
                    if ui.button("No").clicked() {
                        self.cancel_restart();
                    }
                });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::app;
    use crate::model::AppState;

    #[test]
    fn restart_from_summary_starts_over() {
        let mut app = app();
        app.select_single("A");
        app.show_answer();
        app.next();
        app.toggle_option("B");
        app.show_answer();
        app.next();
        assert_eq!(app.state(), AppState::Summary);

        app.request_restart();
        assert_eq!(app.state(), AppState::Quiz);
        assert_eq!(app.session.current_index(), 0);
        assert_eq!(app.session.answered_count(), 0);
        assert!(!app.confirm_restart);
    }

    #[test]
    fn restart_mid_quiz_asks_for_confirmation() {
        let mut app = app();
        app.select_single("B");
        app.show_answer();

        app.request_restart();
        assert!(app.confirm_restart);
        assert_eq!(app.session.answered_count(), 1);

        app.cancel_restart();
        assert!(!app.confirm_restart);
        assert!(app.session.is_revealed());

        app.request_restart();
        app.restart();
        assert_eq!(app.session.answered_count(), 0);
        assert!(app.pending.is_empty());
        assert!(!app.confirm_restart);
    }
}
