use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use log::{debug, info};

use crate::error::{ConfigError, QuizError, StateError, ValidationError};
use crate::model::{AnswerRecord, Question};

/// Resultado final: aciertos, total y porcentaje redondeado.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
    pub percentage: u32,
}

impl Score {
    /// Redondeo al entero más cercano, empates hacia arriba.
    pub fn new(correct: usize, total: usize) -> Self {
        let percentage = if total == 0 {
            0
        } else {
            (correct * 200 + total) / (2 * total)
        };
        Self {
            correct,
            total,
            percentage: u32::try_from(percentage).unwrap_or(u32::MAX),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    InProgress { index: usize, revealed: bool },
    Completed,
}

/// Un intento completo del quiz, de la primera pregunta hasta el final.
///
/// `Completed` es terminal: para volver a empezar se construye otra sesión
/// con [`QuizSession::reset`].
#[derive(Clone)]
pub struct QuizSession {
    questions: Arc<[Question]>,
    current: usize,
    answers: HashMap<usize, AnswerRecord>,
    revealed: bool,
    completed: bool,
}

impl QuizSession {
    /// Valida el banco de preguntas y arranca en la primera.
    pub fn new(questions: Vec<Question>) -> Result<Self, ConfigError> {
        if questions.is_empty() {
            return Err(ConfigError::Empty);
        }

        let mut ids = HashSet::new();
        for q in &questions {
            if !ids.insert(q.id) {
                return Err(ConfigError::DuplicateId { id: q.id });
            }
            q.validate()?;
        }

        info!("quiz session started with {} questions", questions.len());
        Ok(Self::fresh(questions.into()))
    }

    fn fresh(questions: Arc<[Question]>) -> Self {
        Self {
            questions,
            current: 0,
            answers: HashMap::new(),
            revealed: false,
            completed: false,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    // Nunca vacía: `new` rechaza bancos sin preguntas
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// true si la pregunta actual es la última (el botón pasa a "Finish Quiz").
    pub fn is_last(&self) -> bool {
        self.current + 1 == self.questions.len()
    }

    pub fn phase(&self) -> SessionPhase {
        if self.completed {
            SessionPhase::Completed
        } else {
            SessionPhase::InProgress {
                index: self.current,
                revealed: self.revealed,
            }
        }
    }

    pub fn current(&self) -> Result<&Question, StateError> {
        if self.completed {
            return Err(StateError::Completed);
        }
        Ok(&self.questions[self.current])
    }

    pub fn answer(&self, index: usize) -> Option<&AnswerRecord> {
        self.answers.get(&index)
    }

    /// Registro visible mientras la respuesta está revelada.
    pub fn current_answer(&self) -> Option<&AnswerRecord> {
        if self.revealed && !self.completed {
            self.answers.get(&self.current)
        } else {
            None
        }
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Fracción para la barra de progreso: (índice + 1) / total.
    pub fn progress_fraction(&self) -> f32 {
        if self.completed {
            return 1.0;
        }
        (self.current + 1) as f32 / self.questions.len() as f32
    }

    /// Registra la selección de la pregunta actual y revela la respuesta.
    ///
    /// Si algo falla la sesión queda igual que antes.
    pub fn submit_answer<I, S>(&mut self, selected: I) -> Result<&AnswerRecord, QuizError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.completed {
            return Err(StateError::Completed.into());
        }
        if self.revealed {
            return Err(StateError::AlreadyRevealed.into());
        }

        let selected: BTreeSet<String> = selected.into_iter().map(Into::into).collect();
        let question = &self.questions[self.current];

        if selected.is_empty() {
            return Err(ValidationError::EmptySelection.into());
        }
        if let Some(label) = selected.iter().find(|l| !question.has_label(l)) {
            return Err(ValidationError::UnknownLabel {
                id: question.id,
                label: label.clone(),
            }
            .into());
        }
        if !question.multi && selected.len() != 1 {
            return Err(ValidationError::TooManySelections {
                id: question.id,
                count: selected.len(),
            }
            .into());
        }

        let record = AnswerRecord {
            question_index: self.current,
            selected,
            correct: question.correct.clone(),
        };
        info!(
            "question {} answered ({})",
            question.id,
            if record.is_correct() { "correct" } else { "incorrect" }
        );

        self.revealed = true;
        Ok(self.answers.entry(self.current).insert_entry(record).into_mut())
    }

    pub fn advance(&mut self) -> Result<(), StateError> {
        if self.completed {
            return Err(StateError::Completed);
        }
        if !self.revealed {
            return Err(StateError::NotRevealed);
        }

        if self.is_last() {
            self.completed = true;
            let score = self.score();
            info!(
                "quiz completed: {}/{} ({}%)",
                score.correct, score.total, score.percentage
            );
        } else {
            self.current += 1;
            self.revealed = false;
            debug!("moved to question {}", self.current + 1);
        }
        Ok(())
    }

    /// Vuelve a la pregunta anterior. Las respuestas guardadas se conservan.
    pub fn retreat(&mut self) -> Result<(), StateError> {
        if self.completed {
            return Err(StateError::Completed);
        }
        if self.current == 0 {
            return Err(StateError::AtFirstQuestion);
        }
        self.current -= 1;
        self.revealed = false;
        debug!("moved back to question {}", self.current + 1);
        Ok(())
    }

    pub fn is_correct(&self, index: usize) -> bool {
        self.answers
            .get(&index)
            .is_some_and(AnswerRecord::is_correct)
    }

    pub fn score(&self) -> Score {
        let correct = self.answers.values().filter(|a| a.is_correct()).count();
        Score::new(correct, self.questions.len())
    }

    /// Sesión nueva con las mismas preguntas.
    pub fn reset(&self) -> QuizSession {
        info!("quiz session reset");
        Self::fresh(Arc::clone(&self.questions))
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("answers_len", &self.answers.len())
            .field("revealed", &self.revealed)
            .field("completed", &self.completed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::{labels, question};

    fn bank() -> Vec<Question> {
        vec![
            question(1, &["A", "B", "C", "D"], &["B"], false),
            question(2, &["A", "B", "C", "D"], &["B", "D"], true),
            question(3, &["A", "B"], &["B"], false),
        ]
    }

    fn session() -> QuizSession {
        QuizSession::new(bank()).unwrap()
    }

    #[test]
    fn new_session_starts_at_first_question() {
        let s = session();
        assert_eq!(s.current_index(), 0);
        assert!(!s.is_completed());
        assert!(!s.is_revealed());
        assert_eq!(s.answered_count(), 0);
        assert_eq!(s.current().unwrap().id, 1);
        assert_eq!(
            s.phase(),
            SessionPhase::InProgress {
                index: 0,
                revealed: false
            }
        );
    }

    #[test]
    fn empty_bank_is_rejected() {
        let err = QuizSession::new(Vec::new()).unwrap_err();
        assert!(matches!(err, ConfigError::Empty));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut questions = bank();
        questions[2].id = 1;
        let err = QuizSession::new(questions).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateId { id: 1 }));
    }

    #[test]
    fn malformed_question_is_rejected() {
        let mut questions = bank();
        questions[0].correct = labels(&["A", "B"]);
        let err = QuizSession::new(questions).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::SingleSelectCorrectCount { id: 1, count: 2 }
        ));

        let mut questions = bank();
        questions[1].correct.clear();
        let err = QuizSession::new(questions).unwrap_err();
        assert!(matches!(err, ConfigError::NoCorrectAnswer { id: 2 }));
    }

    #[test]
    fn submit_reveals_and_records() {
        let mut s = session();
        let record = s.submit_answer(["B"]).unwrap();
        assert_eq!(record.question_index, 0);
        assert_eq!(record.selected, labels(&["B"]));
        assert_eq!(record.correct, labels(&["B"]));
        assert!(s.is_revealed());
        assert!(s.is_correct(0));
        assert_eq!(s.current_answer().map(|a| a.question_index), Some(0));
    }

    #[test]
    fn multi_select_correctness_ignores_order_and_duplicates() {
        let mut s = session();
        s.submit_answer(["B"]).unwrap();
        s.advance().unwrap();

        s.submit_answer(["D", "B", "D"]).unwrap();
        assert!(s.is_correct(1));
    }

    #[test]
    fn partial_multi_select_is_incorrect() {
        let mut s = session();
        s.submit_answer(["A"]).unwrap();
        s.advance().unwrap();
        s.submit_answer(["B"]).unwrap();
        assert!(!s.is_correct(0));
        assert!(!s.is_correct(1));
    }

    #[test]
    fn empty_selection_fails_for_any_question_type() {
        let mut s = session();
        let err = s.submit_answer(Vec::<String>::new()).unwrap_err();
        assert!(matches!(
            err,
            QuizError::Validation(ValidationError::EmptySelection)
        ));
        assert!(!s.is_revealed());

        s.submit_answer(["B"]).unwrap();
        s.advance().unwrap();
        let err = s.submit_answer(Vec::<&str>::new()).unwrap_err();
        assert!(matches!(
            err,
            QuizError::Validation(ValidationError::EmptySelection)
        ));
    }

    #[test]
    fn two_labels_on_single_select_fail() {
        let mut s = session();
        let err = s.submit_answer(["A", "B"]).unwrap_err();
        assert!(matches!(
            err,
            QuizError::Validation(ValidationError::TooManySelections { id: 1, count: 2 })
        ));
        assert!(s.answer(0).is_none());
        assert!(!s.is_revealed());
    }

    #[test]
    fn unknown_label_fails() {
        let mut s = session();
        let err = s.submit_answer(["Z"]).unwrap_err();
        assert!(matches!(
            err,
            QuizError::Validation(ValidationError::UnknownLabel { .. })
        ));
        assert!(!s.is_revealed());
        assert!(s.answer(0).is_none());
    }

    #[test]
    fn unknown_label_next_to_valid_one_fails_on_multi_select() {
        let mut s = session();
        s.submit_answer(["B"]).unwrap();
        s.advance().unwrap();

        let err = s.submit_answer(["B", "Z"]).unwrap_err();
        assert!(matches!(
            err,
            QuizError::Validation(ValidationError::UnknownLabel { id: 2, ref label }) if label == "Z"
        ));
        assert!(!s.is_revealed());
        assert!(s.answer(1).is_none());
        assert_eq!(s.answered_count(), 1);
    }

    #[test]
    fn second_submit_while_revealed_fails() {
        let mut s = session();
        s.submit_answer(["A"]).unwrap();
        let err = s.submit_answer(["B"]).unwrap_err();
        assert!(matches!(err, QuizError::State(StateError::AlreadyRevealed)));
        assert_eq!(s.answer(0).unwrap().selected, labels(&["A"]));
    }

    #[test]
    fn advance_before_reveal_fails_and_keeps_state() {
        let mut s = session();
        assert_eq!(s.advance(), Err(StateError::NotRevealed));
        assert_eq!(s.current_index(), 0);
        assert!(!s.is_revealed());
        assert!(!s.is_completed());
    }

    #[test]
    fn retreat_at_first_question_fails() {
        let mut s = session();
        assert_eq!(s.retreat(), Err(StateError::AtFirstQuestion));
        assert_eq!(s.current_index(), 0);
    }

    #[test]
    fn retreat_clears_reveal_but_keeps_answers() {
        let mut s = session();
        s.submit_answer(["B"]).unwrap();
        s.advance().unwrap();
        s.submit_answer(["A"]).unwrap();

        s.retreat().unwrap();
        assert_eq!(s.current_index(), 0);
        assert!(!s.is_revealed());
        assert!(s.current_answer().is_none());
        assert!(s.is_correct(0));
        assert!(s.answer(1).is_some());
    }

    #[test]
    fn resubmitting_after_revisit_overwrites_record() {
        let mut s = session();
        s.submit_answer(["A"]).unwrap();
        s.advance().unwrap();
        s.retreat().unwrap();

        s.submit_answer(["B"]).unwrap();
        assert!(s.is_correct(0));
        assert_eq!(s.answered_count(), 1);
    }

    #[test]
    fn advancing_past_last_question_completes() {
        let mut s = session();
        for selection in [vec!["B"], vec!["B", "D"], vec!["A"]] {
            assert!(!s.is_completed());
            s.submit_answer(selection).unwrap();
            s.advance().unwrap();
        }

        assert!(s.is_completed());
        assert_eq!(s.phase(), SessionPhase::Completed);
        assert_eq!(s.current(), Err(StateError::Completed));
        assert_eq!(s.advance(), Err(StateError::Completed));
        assert_eq!(s.retreat(), Err(StateError::Completed));
        assert!(matches!(
            s.submit_answer(["A"]),
            Err(QuizError::State(StateError::Completed))
        ));
        assert_eq!(s.progress_fraction(), 1.0);
    }

    #[test]
    fn score_counts_correct_answers() {
        let mut s = session();
        s.submit_answer(["B"]).unwrap();
        s.advance().unwrap();
        s.submit_answer(["B", "D"]).unwrap();
        s.advance().unwrap();
        s.submit_answer(["A"]).unwrap();
        s.advance().unwrap();

        assert_eq!(
            s.score(),
            Score {
                correct: 2,
                total: 3,
                percentage: 67
            }
        );
    }

    #[test]
    fn percentage_rounds_half_up() {
        assert_eq!(Score::new(1, 8).percentage, 13);
        assert_eq!(Score::new(1, 3).percentage, 33);
        assert_eq!(Score::new(1, 200).percentage, 1);
        assert_eq!(Score::new(0, 5).percentage, 0);
        assert_eq!(Score::new(5, 5).percentage, 100);
    }

    #[test]
    fn is_correct_without_record_is_false() {
        let s = session();
        assert!(!s.is_correct(0));
        assert!(!s.is_correct(42));
    }

    #[test]
    fn reset_behaves_like_a_fresh_session() {
        let mut s = session();
        s.submit_answer(["B"]).unwrap();
        s.advance().unwrap();
        s.submit_answer(["B", "D"]).unwrap();

        let fresh = s.reset();
        assert_eq!(fresh.current_index(), 0);
        assert!(!fresh.is_revealed());
        assert!(!fresh.is_completed());
        assert_eq!(fresh.answered_count(), 0);
        assert_eq!(fresh.questions(), s.questions());
        assert_eq!(fresh.score().correct, 0);

        // la sesión original no cambia
        assert_eq!(s.current_index(), 1);
        assert!(s.is_revealed());
    }

    #[test]
    fn is_last_and_progress_fraction_follow_the_index() {
        let mut s = session();
        assert!(!s.is_last());
        assert!((s.progress_fraction() - 1.0 / 3.0).abs() < f32::EPSILON);

        for selection in [vec!["B"], vec!["B", "D"]] {
            s.submit_answer(selection).unwrap();
            s.advance().unwrap();
        }
        assert!(s.is_last());
        assert_eq!(s.progress_fraction(), 1.0);
    }
}
