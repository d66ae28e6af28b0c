// src/data.rs

use std::path::Path;

use log::debug;

use crate::error::ConfigError;
use crate::model::Question;

const EMBEDDED_BANK: &str = include_str!("data/quiz_questions.yaml");

/// Carga el banco de preguntas desde el YAML embebido
pub fn read_questions_embedded() -> Result<Vec<Question>, ConfigError> {
    parse_questions(EMBEDDED_BANK)
}

/// Carga un banco de preguntas desde un fichero YAML
pub fn read_questions_from_file(path: &Path) -> Result<Vec<Question>, ConfigError> {
    debug!("reading question bank from {}", path.display());
    let content = std::fs::read_to_string(path)?;
    parse_questions(&content)
}

pub fn parse_questions(yaml: &str) -> Result<Vec<Question>, ConfigError> {
    let questions: Vec<Question> = serde_yaml::from_str(yaml)?;
    debug!("parsed {} questions", questions.len());
    Ok(questions)
}
