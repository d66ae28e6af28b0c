use crate::config::QuizConfig;
use crate::error::ConfigError;
use crate::model::{AppState, Question};
use crate::session::QuizSession;
use eframe::egui;
use log::{info, warn};
use std::collections::BTreeSet;

// Submódulos
pub mod actions;
pub mod navigation;
pub mod resets;

/// Controlador del lado de la interfaz: una `QuizSession` por app (1:1).
///
/// La UI vuelve a leer la sesión después de cada acción; aquí solo se guarda
/// lo que todavía no se ha enviado al núcleo.
pub struct QuizApp {
    pub session: QuizSession,
    pub title: String,
    pub pending: BTreeSet<String>, // selección sin enviar
    pub message: String,
    pub confirm_restart: bool,
}

impl QuizApp {
    pub fn new(title: impl Into<String>, questions: Vec<Question>) -> Result<Self, ConfigError> {
        let session = QuizSession::new(questions)?;
        Ok(Self::with_session(title, session))
    }

    pub fn from_config(config: &QuizConfig) -> Result<Self, ConfigError> {
        let questions = config.load_questions()?;
        Self::new(config.title.clone(), questions)
    }

    pub fn with_session(title: impl Into<String>, session: QuizSession) -> Self {
        Self {
            session,
            title: title.into(),
            pending: BTreeSet::new(),
            message: String::new(),
            confirm_restart: false,
        }
    }

    pub fn state(&self) -> AppState {
        if self.session.is_completed() {
            AppState::Summary
        } else {
            AppState::Quiz
        }
    }

    /// "Show Answer" solo se habilita con algo seleccionado y sin revelar.
    pub fn can_show_answer(&self) -> bool {
        !self.session.is_completed() && !self.session.is_revealed() && !self.pending.is_empty()
    }

    pub fn can_go_back(&self) -> bool {
        !self.session.is_completed() && self.session.current_index() > 0
    }

    pub fn can_go_next(&self) -> bool {
        !self.session.is_completed() && self.session.is_revealed()
    }

    pub fn next_label(&self) -> &'static str {
        if self.session.is_last() {
            "Finish Quiz"
        } else {
            "Next →"
        }
    }

    fn reject(&mut self, intent: &str, err: impl std::fmt::Display) {
        warn!("{intent} rejected: {err}");
        self.message = format!("⚠ {err}");
    }

    /// Al volver a una pregunta ya contestada se precarga su selección.
    fn after_navigation(&mut self) {
        self.pending = self
            .session
            .answer(self.session.current_index())
            .filter(|_| !self.session.is_completed())
            .map(|r| r.selected.clone())
            .unwrap_or_default();
        self.message.clear();
        if let Ok(q) = self.session.current() {
            info!("showing question {}", q.id);
        }
    }
}
