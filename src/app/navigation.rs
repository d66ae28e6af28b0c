use super::*;

impl QuizApp {
    /// "Next →" / "Finish Quiz"
    pub fn next(&mut self) {
        match self.session.advance() {
            Ok(()) => self.after_navigation(),
            Err(e) => self.reject("next", e),
        }
    }

    /// "← Previous"
    pub fn previous(&mut self) {
        match self.session.retreat() {
            Ok(()) => self.after_navigation(),
            Err(e) => self.reject("previous", e),
        }
    }
}
