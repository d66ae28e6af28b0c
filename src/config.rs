use std::path::PathBuf;

use log::info;

use crate::data::{read_questions_embedded, read_questions_from_file};
use crate::error::ConfigError;
use crate::model::Question;

pub const DEFAULT_TITLE: &str = "Snowflake Certification Quiz";

/// Variables de entorno:
/// - `QUIZ_QUESTIONS`: ruta a un banco YAML que sustituye al embebido
/// - `QUIZ_TITLE`: título de la ventana y de la cabecera
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    pub title: String,
    pub questions_path: Option<PathBuf>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            questions_path: None,
        }
    }
}

impl QuizConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            title: non_empty("QUIZ_TITLE").unwrap_or_else(|| DEFAULT_TITLE.to_owned()),
            questions_path: non_empty("QUIZ_QUESTIONS").map(PathBuf::from),
        }
    }

    pub fn load_questions(&self) -> Result<Vec<Question>, ConfigError> {
        match &self.questions_path {
            Some(path) => {
                info!("loading question bank from {}", path.display());
                read_questions_from_file(path)
            }
            None => {
                info!("loading embedded question bank");
                read_questions_embedded()
            }
        }
    }
}
