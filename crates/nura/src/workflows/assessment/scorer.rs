use serde::{Deserialize, Serialize};

use super::domain::AssessmentAnswer;

/// Points for a long, detailed answer; also the per-question maximum.
pub const MAX_POINTS_PER_ANSWER: u32 = 15;

/// Score bracket driving the summary and recommendation text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Excellent,
    Good,
    Moderate,
    Concerning,
}

impl Tier {
    pub const fn from_score(score: u8) -> Self {
        match score {
            85.. => Self::Excellent,
            70..=84 => Self::Good,
            50..=69 => Self::Moderate,
            _ => Self::Concerning,
        }
    }

    pub const fn summary(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent cognitive performance! Your responses show strong orientation, memory, and attention.",
            Self::Good => "Good cognitive performance. Your responses indicate normal cognitive function with minor variations.",
            Self::Moderate => "Moderate cognitive performance. Some responses suggest areas that may benefit from attention.",
            Self::Concerning => "Your responses suggest potential cognitive concerns that warrant professional evaluation.",
        }
    }

    pub const fn recommendation(self) -> &'static str {
        match self {
            Self::Excellent => "Continue with your daily cognitive exercises and maintain your healthy lifestyle.",
            Self::Good => "Keep up with regular mental activities and consider daily memory exercises.",
            Self::Moderate => "Consider consulting with your healthcare provider and increase cognitive stimulation activities.",
            Self::Concerning => "We recommend scheduling an appointment with a healthcare professional for a comprehensive assessment.",
        }
    }
}

/// Per-category labels, each thresholded independently on the overall score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breakdown {
    pub orientation: &'static str,
    pub memory: &'static str,
    pub attention: &'static str,
}

impl Breakdown {
    pub const ORIENTATION_THRESHOLD: u8 = 70;
    pub const MEMORY_THRESHOLD: u8 = 60;
    pub const ATTENTION_THRESHOLD: u8 = 65;

    pub fn from_score(score: u8) -> Self {
        Self {
            orientation: if score >= Self::ORIENTATION_THRESHOLD {
                "Good"
            } else {
                "Needs attention"
            },
            memory: if score >= Self::MEMORY_THRESHOLD {
                "Normal"
            } else {
                "Requires follow-up"
            },
            attention: if score >= Self::ATTENTION_THRESHOLD {
                "Adequate"
            } else {
                "May need support"
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    pub score: u8,
    pub tier: Tier,
    pub summary: &'static str,
    pub recommendation: &'static str,
    pub breakdown: Breakdown,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    #[error("invalid configuration: an assessment needs at least one question")]
    InvalidConfiguration,
}

/// Points awarded for one answer, bracketed on its trimmed character count.
pub fn answer_points(text: &str) -> u32 {
    let length = text.trim().chars().count();
    match length {
        0 => 0,
        51.. => 15,
        21..=50 => 12,
        6..=20 => 10,
        _ => 5,
    }
}

/// Scores a set of answers against an assessment of `total_questions`.
///
/// The raw sum is normalised against `total_questions * 15` and capped at 100,
/// so extra or repeated answers can never push the score out of range.
pub fn score(
    answers: &[AssessmentAnswer],
    total_questions: usize,
) -> Result<ScoreResult, ScoringError> {
    if total_questions == 0 {
        return Err(ScoringError::InvalidConfiguration);
    }

    let raw: u64 = answers
        .iter()
        .map(|answer| u64::from(answer_points(&answer.text)))
        .sum();
    let maximum = total_questions as f64 * f64::from(MAX_POINTS_PER_ANSWER);
    let normalized = (raw as f64 / maximum * 100.0).round().min(100.0) as u8;

    let tier = Tier::from_score(normalized);
    Ok(ScoreResult {
        score: normalized,
        tier,
        summary: tier.summary(),
        recommendation: tier.recommendation(),
        breakdown: Breakdown::from_score(normalized),
    })
}
