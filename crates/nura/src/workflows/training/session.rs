use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::bank::MemoryQuestion;

/// Result of checking one reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub question_id: u32,
    pub correct: bool,
    pub expected: String,
    pub hint: String,
}

impl Verdict {
    pub fn for_reply(question: &MemoryQuestion, reply: &str) -> Self {
        Self {
            question_id: question.id,
            correct: question.accepts(reply),
            expected: question.answer.clone(),
            hint: question.hint.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingScore {
    pub correct: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrainingError {
    #[error("the question bank is empty")]
    EmptyBank,
    #[error("question {0} is not in the bank")]
    UnknownQuestion(u32),
    #[error("a reply is required")]
    BlankReply,
    #[error("the current question has already been answered")]
    AlreadyAnswered,
    #[error("answer the current question before moving on")]
    NotAnswered,
    #[error("the session is complete")]
    Finished,
}

/// One practice round over a shuffled draw from the bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingSession {
    questions: Vec<MemoryQuestion>,
    index: usize,
    score: TrainingScore,
    hint_shown: bool,
    last_verdict: Option<Verdict>,
    complete: bool,
}

impl TrainingSession {
    /// Shuffles the bank and keeps the first `size` questions.
    pub fn draw<R>(bank: &[MemoryQuestion], size: usize, rng: &mut R) -> Result<Self, TrainingError>
    where
        R: Rng + ?Sized,
    {
        if bank.is_empty() || size == 0 {
            return Err(TrainingError::EmptyBank);
        }

        let mut questions = bank.to_vec();
        questions.shuffle(rng);
        questions.truncate(size);

        Ok(Self {
            questions,
            index: 0,
            score: TrainingScore::default(),
            hint_shown: false,
            last_verdict: None,
            complete: false,
        })
    }

    pub fn questions(&self) -> &[MemoryQuestion] {
        &self.questions
    }

    pub fn current(&self) -> Option<&MemoryQuestion> {
        if self.complete {
            None
        } else {
            self.questions.get(self.index)
        }
    }

    pub fn score(&self) -> TrainingScore {
        self.score
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn hint_shown(&self) -> bool {
        self.hint_shown
    }

    pub fn last_verdict(&self) -> Option<&Verdict> {
        self.last_verdict.as_ref()
    }

    /// Fraction of the session reached, counting the current question.
    pub fn progress(&self) -> f32 {
        if self.complete {
            return 1.0;
        }
        (self.index + 1) as f32 / self.questions.len() as f32
    }

    pub fn reveal_hint(&mut self) -> Option<&str> {
        let question = self.questions.get(self.index).filter(|_| !self.complete)?;
        self.hint_shown = true;
        Some(question.hint.as_str())
    }

    /// Checks a reply to the current question and tallies it.
    pub fn answer(&mut self, reply: &str) -> Result<Verdict, TrainingError> {
        let question = self.current().ok_or(TrainingError::Finished)?;
        if self.last_verdict.is_some() {
            return Err(TrainingError::AlreadyAnswered);
        }
        if reply.trim().is_empty() {
            return Err(TrainingError::BlankReply);
        }

        let verdict = Verdict::for_reply(question, reply);
        self.score.total += 1;
        if verdict.correct {
            self.score.correct += 1;
        }
        self.last_verdict = Some(verdict.clone());
        Ok(verdict)
    }

    /// Moves past an answered question; completes after the last one.
    pub fn advance(&mut self) -> Result<(), TrainingError> {
        if self.complete {
            return Err(TrainingError::Finished);
        }
        if self.last_verdict.is_none() {
            return Err(TrainingError::NotAnswered);
        }

        self.last_verdict = None;
        self.hint_shown = false;
        if self.index + 1 < self.questions.len() {
            self.index += 1;
        } else {
            self.complete = true;
        }
        Ok(())
    }

    /// Fresh draw of the same size with the tally reset.
    pub fn restart<R>(&self, bank: &[MemoryQuestion], rng: &mut R) -> Result<Self, TrainingError>
    where
        R: Rng + ?Sized,
    {
        Self::draw(bank, self.questions.len(), rng)
    }
}
