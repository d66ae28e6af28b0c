use std::collections::{BTreeSet, HashSet};

use serde::Deserialize;

use crate::error::ConfigError;

/// Opción de una pregunta: etiqueta de una letra ("A", "B"...) y su texto.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuizOption {
    pub label: String,
    pub text: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: u32,
    pub prompt: String,
    pub options: Vec<QuizOption>,
    pub correct: BTreeSet<String>, // Etiquetas correctas
    #[serde(default)]
    pub multi: bool, // true = selección múltiple
    #[serde(default)]
    pub explanation: String,
}

impl Question {
    pub fn has_label(&self, label: &str) -> bool {
        self.options.iter().any(|o| o.label == label)
    }

    /// Etiquetas correctas unidas con ", " (orden alfabético).
    pub fn correct_joined(&self) -> String {
        join_labels(&self.correct)
    }

    /// Comprueba que la pregunta se pueda contestar y puntuar.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.options.is_empty() {
            return Err(ConfigError::NoOptions { id: self.id });
        }

        let mut seen = HashSet::new();
        for opt in &self.options {
            if !is_valid_label(&opt.label) {
                return Err(ConfigError::InvalidLabel {
                    id: self.id,
                    label: opt.label.clone(),
                });
            }
            if !seen.insert(opt.label.as_str()) {
                return Err(ConfigError::DuplicateLabel {
                    id: self.id,
                    label: opt.label.clone(),
                });
            }
        }

        if self.correct.is_empty() {
            return Err(ConfigError::NoCorrectAnswer { id: self.id });
        }
        if let Some(label) = self.correct.iter().find(|l| !self.has_label(l)) {
            return Err(ConfigError::UnknownCorrectLabel {
                id: self.id,
                label: label.clone(),
            });
        }
        if !self.multi && self.correct.len() != 1 {
            return Err(ConfigError::SingleSelectCorrectCount {
                id: self.id,
                count: self.correct.len(),
            });
        }
        Ok(())
    }
}

/// Una sola letra mayúscula ASCII.
fn is_valid_label(label: &str) -> bool {
    let mut chars = label.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_uppercase())
}

pub fn join_labels(labels: &BTreeSet<String>) -> String {
    labels.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

/// Respuesta registrada al pulsar "Show Answer".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub question_index: usize,
    pub selected: BTreeSet<String>,
    pub correct: BTreeSet<String>,
}

impl AnswerRecord {
    pub fn is_correct(&self) -> bool {
        self.selected == self.correct
    }
}

/// Pantalla que toca dibujar según la fase de la sesión.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Quiz,
    Summary,
}
