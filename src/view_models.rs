// src/view_models.rs

use crate::model::join_labels;
use crate::session::{QuizSession, Score};

/// Estado de cada pregunta en la tira de progreso.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProgressMarker {
    Current,
    Correct,
    Incorrect,
    Unanswered,
}

impl ProgressMarker {
    pub fn symbol(&self) -> &'static str {
        match self {
            ProgressMarker::Current => "🔵",
            ProgressMarker::Correct => "🟢",
            ProgressMarker::Incorrect => "🔴",
            ProgressMarker::Unanswered => "⚪",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub correct: bool,
    pub correct_labels: String, // "B, D"
    pub explanation: String,
}

impl AnswerFeedback {
    pub fn headline(&self) -> String {
        if self.correct {
            format!("✓ Correct! Correct Answer: {}", self.correct_labels)
        } else {
            format!("✗ Incorrect! Correct Answer: {}", self.correct_labels)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Performance {
    Excellent,
    Good,
    KeepStudying,
}

impl Performance {
    pub fn from_percentage(percentage: u32) -> Self {
        if percentage >= 80 {
            Performance::Excellent
        } else if percentage >= 60 {
            Performance::Good
        } else {
            Performance::KeepStudying
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Performance::Excellent => "Excellent work! 🎉",
            Performance::Good => "Good job! Keep practicing! 👍",
            Performance::KeepStudying => "Keep studying! You've got this! 💪",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompletionSummary {
    pub score: Score,
    pub performance: Performance,
}

impl CompletionSummary {
    pub fn score_line(&self) -> String {
        format!("Score: {} / {}", self.score.correct, self.score.total)
    }

    pub fn percentage_line(&self) -> String {
        format!("Percentage: {}%", self.score.percentage)
    }
}

pub fn progress_markers(session: &QuizSession) -> Vec<ProgressMarker> {
    (0..session.len())
        .map(|i| {
            if !session.is_completed() && i == session.current_index() {
                ProgressMarker::Current
            } else if session.answer(i).is_none() {
                ProgressMarker::Unanswered
            } else if session.is_correct(i) {
                ProgressMarker::Correct
            } else {
                ProgressMarker::Incorrect
            }
        })
        .collect()
}

/// Solo hay feedback mientras la respuesta de la pregunta actual está revelada.
pub fn answer_feedback(session: &QuizSession) -> Option<AnswerFeedback> {
    let record = session.current_answer()?;
    let question = session.questions().get(record.question_index)?;
    Some(AnswerFeedback {
        correct: record.is_correct(),
        correct_labels: join_labels(&record.correct),
        explanation: question.explanation.clone(),
    })
}

pub fn completion_summary(session: &QuizSession) -> Option<CompletionSummary> {
    if !session.is_completed() {
        return None;
    }
    let score = session.score();
    Some(CompletionSummary {
        score,
        performance: Performance::from_percentage(score.percentage),
    })
}

/// "Question 2 of 5"
pub fn question_header(session: &QuizSession) -> Option<String> {
    if session.is_completed() {
        return None;
    }
    Some(format!(
        "Question {} of {}",
        session.current_index() + 1,
        session.len()
    ))
}

/// "Answered 2 of 5", para la barra inferior.
pub fn answered_status(session: &QuizSession) -> String {
    format!("Answered {} of {}", session.answered_count(), session.len())
}
