pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod session;
pub mod ui;
pub mod view_models;

pub use app::QuizApp;
pub use error::{ConfigError, QuizError, StateError, ValidationError};
pub use model::{AnswerRecord, Question, QuizOption};
pub use session::{QuizSession, Score, SessionPhase};
