//! Tipos de error del quiz.

use thiserror::Error;

/// Banco de preguntas mal formado. Se detecta una sola vez, al arrancar.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("the question bank is empty")]
    Empty,
    #[error("duplicate question id {id}")]
    DuplicateId { id: u32 },
    #[error("question {id} has no options")]
    NoOptions { id: u32 },
    #[error("question {id} has an invalid option label {label:?}")]
    InvalidLabel { id: u32, label: String },
    #[error("question {id} repeats option label {label:?}")]
    DuplicateLabel { id: u32, label: String },
    #[error("question {id} has no correct answer")]
    NoCorrectAnswer { id: u32 },
    #[error("question {id} lists correct label {label:?} which is not an option")]
    UnknownCorrectLabel { id: u32, label: String },
    #[error("single-select question {id} must have exactly one correct answer, found {count}")]
    SingleSelectCorrectCount { id: u32, count: usize },
    #[error("could not parse the question bank: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("could not read the question bank: {0}")]
    Io(#[from] std::io::Error),
}

/// Operación no permitida en el estado actual de la sesión.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StateError {
    #[error("the quiz is already completed")]
    Completed,
    #[error("the answer is already shown; navigate away before answering again")]
    AlreadyRevealed,
    #[error("show the answer before moving on")]
    NotRevealed,
    #[error("already at the first question")]
    AtFirstQuestion,
}

/// Selección que no respeta las reglas de la pregunta.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("select at least one option")]
    EmptySelection,
    #[error("{label:?} is not an option of question {id}")]
    UnknownLabel { id: u32, label: String },
    #[error("question {id} accepts a single option, got {count}")]
    TooManySelections { id: u32, count: usize },
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    State(#[from] StateError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
