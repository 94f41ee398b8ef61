//! Memory training: short recall quizzes about the user's own life.

mod bank;
pub mod router;
mod session;

pub use bank::{standard_bank, MemoryQuestion, TrainingCategory};
pub use router::training_router;
pub use session::{TrainingError, TrainingScore, TrainingSession, Verdict};

use rand::Rng;

/// Question bank plus the session size used when drawing practice rounds.
#[derive(Debug, Clone)]
pub struct MemoryTraining {
    bank: Vec<MemoryQuestion>,
    session_size: usize,
}

impl MemoryTraining {
    pub fn new(bank: Vec<MemoryQuestion>, session_size: usize) -> Result<Self, TrainingError> {
        if bank.is_empty() || session_size == 0 {
            return Err(TrainingError::EmptyBank);
        }
        Ok(Self { bank, session_size })
    }

    pub fn standard(session_size: usize) -> Result<Self, TrainingError> {
        Self::new(standard_bank(), session_size)
    }

    pub fn bank(&self) -> &[MemoryQuestion] {
        &self.bank
    }

    pub fn session_size(&self) -> usize {
        self.session_size
    }

    pub fn start_session<R>(&self, rng: &mut R) -> Result<TrainingSession, TrainingError>
    where
        R: Rng + ?Sized,
    {
        TrainingSession::draw(&self.bank, self.session_size, rng)
    }

    /// Stateless check used by clients that keep the session themselves.
    pub fn check(&self, question_id: u32, reply: &str) -> Result<Verdict, TrainingError> {
        if reply.trim().is_empty() {
            return Err(TrainingError::BlankReply);
        }
        let question = self
            .bank
            .iter()
            .find(|question| question.id == question_id)
            .ok_or(TrainingError::UnknownQuestion(question_id))?;
        Ok(Verdict::for_reply(question, reply))
    }
}
