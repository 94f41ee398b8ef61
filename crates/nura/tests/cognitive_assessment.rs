//! Scoring behaviour observed through the public assessment facade.

use nura::workflows::assessment::{
    score, standard_questions, AssessmentAnswer, AssessmentProgress, CognitiveAssessment,
    ProgressError, ScoringError, Tier,
};

#[test]
fn no_answers_scores_zero_and_flags_every_category() {
    let result = score(&[], 8).expect("scored");
    assert_eq!(result.score, 0);
    assert_eq!(result.tier, Tier::Concerning);
    assert_eq!(result.breakdown.orientation, "Needs attention");
    assert_eq!(result.breakdown.memory, "Requires follow-up");
    assert_eq!(result.breakdown.attention, "May need support");
}

#[test]
fn one_long_answer_out_of_one_is_excellent() {
    let answers = [AssessmentAnswer::new("q1", "a".repeat(60))];
    let result = score(&answers, 1).expect("scored");
    assert_eq!(result.score, 100);
    assert_eq!(result.tier, Tier::Excellent);
    assert_eq!(result.summary, Tier::Excellent.summary());
}

#[test]
fn fifty_characters_stay_in_the_middle_bracket() {
    let answers = [AssessmentAnswer::new("q1", "b".repeat(50))];
    // 12 of 15 points.
    assert_eq!(score(&answers, 1).expect("scored").score, 80);
}

#[test]
fn zero_questions_is_a_configuration_error() {
    assert_eq!(score(&[], 0), Err(ScoringError::InvalidConfiguration));
    assert!(matches!(
        CognitiveAssessment::new(Vec::new()),
        Err(ScoringError::InvalidConfiguration)
    ));
}

#[test]
fn scoring_is_repeatable() {
    let assessment = CognitiveAssessment::standard();
    let answers = [
        AssessmentAnswer::new("q1", "Saturday, October 18, 2026"),
        AssessmentAnswer::new("q6", "Sarah and Michael"),
    ];
    assert_eq!(
        assessment.submit(&answers).expect("scored"),
        assessment.submit(&answers).expect("scored")
    );
}

#[test]
fn progress_walks_the_table_and_rejects_blank_replies() {
    let questions = standard_questions();
    let mut progress = AssessmentProgress::new();

    progress = match progress.record(&questions, "   ") {
        Err((unchanged, ProgressError::BlankAnswer)) => unchanged,
        other => panic!("expected blank answer rejection, got {other:?}"),
    };
    assert!(progress.answers().is_empty());

    for _ in 0..questions.len() {
        progress = progress
            .record(&questions, &"x".repeat(60))
            .expect("answer recorded");
    }
    assert!(progress.is_complete(&questions));
    assert!(matches!(
        progress.clone().record(&questions, "late"),
        Err((_, ProgressError::AlreadyComplete))
    ));

    let result = progress.finish(&questions).expect("scored");
    assert_eq!(result.score, 100);
}
