use super::*;

impl QuizApp {
    /// Casilla de selección múltiple: marca o desmarca la etiqueta.
    pub fn toggle_option(&mut self, label: &str) {
        if self.session.is_revealed() {
            return;
        }
        if !self.pending.remove(label) {
            self.pending.insert(label.to_owned());
        }
    }

    /// Botón de radio: sustituye la selección.
    pub fn select_single(&mut self, label: &str) {
        if self.session.is_revealed() {
            return;
        }
        self.pending.clear();
        self.pending.insert(label.to_owned());
    }

    pub fn is_pending(&self, label: &str) -> bool {
        self.pending.contains(label)
    }

    /// Envía la selección pendiente y revela la respuesta.
    pub fn show_answer(&mut self) {
        let selection = self.pending.clone();
        match self.session.submit_answer(selection) {
            Ok(record) => {
                info!(
                    "answer revealed for question {}",
                    record.question_index + 1
                );
                self.message.clear();
            }
            Err(e) => self.reject("show answer", e),
        }
    }
}
