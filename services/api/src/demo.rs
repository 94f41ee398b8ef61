use crate::infra::CompanionServices;
use chrono::Local;
use clap::Args;
use nura::config::CompanionConfig;
use nura::error::AppError;
use nura::workflows::assessment::{
    AssessmentAnswer, AssessmentProgress, AssessmentQuestion, CognitiveAssessment, ScoreResult,
};
use nura::workflows::assistant::{Conversation, KeywordMatcher, SUGGESTED_QUESTIONS};
use nura::workflows::profile::UserProfile;
use nura::workflows::timeline::TimelineCursor;
use tracing::warn;

#[derive(Args, Debug)]
pub(crate) struct AskArgs {
    /// Question to ask, e.g. "who is my husband"
    #[arg(required = true, num_args = 1..)]
    pub(crate) words: Vec<String>,
    /// Print the response as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

impl AskArgs {
    pub(crate) fn question(&self) -> String {
        self.words.join(" ")
    }
}

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Answer for the next question, in order (repeat for each question)
    #[arg(long = "answer")]
    pub(crate) answers: Vec<String>,
    /// Print the score as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_ask(args: AskArgs) -> Result<(), AppError> {
    let matcher = KeywordMatcher::standard(UserProfile::sample());
    let response = matcher.match_question(&args.question());

    if args.json {
        println!("{}", to_json(&response));
    } else {
        println!("[{}] {}", response.category.label(), response.answer);
    }
    Ok(())
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let assessment = CognitiveAssessment::standard();
    let questions = assessment.questions();
    let (answers, ignored) = pair_answers(questions, &args.answers);
    if ignored > 0 {
        warn!(ignored, "ignoring answers beyond the question table");
    }
    let result = assessment.submit(&answers)?;

    if args.json {
        println!("{}", to_json(&result));
    } else {
        render_score(&result);
        if ignored > 0 {
            println!("{}", ignored_notice(ignored, questions.len()));
        }
    }
    Ok(())
}

/// Pairs answers with questions in table order. The count is the number of
/// answers left over once every question has one.
pub(crate) fn pair_answers(
    questions: &[AssessmentQuestion],
    answers: &[String],
) -> (Vec<AssessmentAnswer>, usize) {
    let paired = questions
        .iter()
        .zip(answers)
        .map(|(question, text)| AssessmentAnswer::new(question.id.as_str(), text.as_str()))
        .collect();
    (paired, answers.len().saturating_sub(questions.len()))
}

fn ignored_notice(ignored: usize, questions: usize) -> String {
    let noun = if ignored == 1 { "answer" } else { "answers" };
    format!("Ignored {ignored} extra {noun}: there are only {questions} questions.")
}

pub(crate) fn run_demo(config: &CompanionConfig) -> Result<(), AppError> {
    let services = CompanionServices::standard(config)?;

    println!("Nura companion demo ({})", Local::now().date_naive());

    println!("\nAssistant");
    let mut conversation = Conversation::new();
    println!("Nura: {}", Conversation::GREETING);
    for question in SUGGESTED_QUESTIONS {
        let (next, response) = conversation.ask(&services.matcher, question);
        conversation = next;
        if let Some(response) = response {
            println!("You: {question}");
            println!("Nura [{}]: {}", response.category.label(), response.answer);
        }
    }
    println!("({} messages in transcript)", conversation.messages().len());

    println!("\nCognitive assessment");
    let questions = services.assessment.questions();
    let mut progress = AssessmentProgress::new();
    for reply in DEMO_REPLIES {
        let Some(question) = progress.current(questions) else {
            break;
        };
        println!("- {} -> {reply}", question.prompt);
        progress = match progress.record(questions, reply) {
            Ok(next) => next,
            Err((unchanged, err)) => {
                println!("  skipped: {err}");
                unchanged
            }
        };
    }
    let result = progress.finish(questions)?;
    render_score(&result);

    println!("\nMemory training");
    let mut session = services.training.start_session(&mut rand::thread_rng())?;
    let mut turn = 0;
    while let Some(question) = session.current().cloned() {
        let reply = if turn % 2 == 0 {
            question.answer.clone()
        } else {
            "I'm not sure".to_string()
        };
        let verdict = session.answer(&reply)?;
        if verdict.correct {
            println!("- {} {} (correct)", question.question, reply);
        } else {
            println!(
                "- {} {} (answer: {}, hint: {})",
                question.question, reply, verdict.expected, verdict.hint
            );
        }
        session.advance()?;
        turn += 1;
    }
    let score = session.score();
    println!("Score: {}/{}", score.correct, score.total);

    println!("\nTimeline");
    let mut cursor = TimelineCursor::default();
    while let Some(entry) = cursor.current(&services.timeline) {
        println!("- {}: {}", entry.year, entry.title);
        if !cursor.has_next(&services.timeline) {
            break;
        }
        cursor = cursor.next(&services.timeline);
    }

    println!("\nFacts");
    services.facts.remember("Emma's piano recital is on Friday at 6pm")?;
    for fact in services.facts.recent(3)? {
        println!(
            "- #{} {} ({})",
            fact.id,
            fact.content,
            fact.created_date.format("%Y-%m-%d")
        );
    }

    Ok(())
}

const DEMO_REPLIES: [&str; 8] = [
    "October 18, 2026",
    "42 Maple Street, Cambridge, Massachusetts",
    "I am in the living room. There is a blue armchair by the window. Family photos hang above the fireplace.",
    "A kettle, a toaster, and the apple pie dish",
    "Oatmeal with blueberries and a cup of tea with honey",
    "Sarah and Michael",
    "20, 19, 18, 17, 16, 15, 14, 13, 12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1",
    "Autumn",
];

fn render_score(result: &ScoreResult) {
    println!("Score: {}/100", result.score);
    println!("{}", result.summary);
    println!("Recommendation: {}", result.recommendation);
    println!(
        "Orientation: {} | Memory: {} | Attention: {}",
        result.breakdown.orientation, result.breakdown.memory, result.breakdown.attention
    );
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|err| format!("{{\"error\":\"{err}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replies(count: usize) -> Vec<String> {
        (1..=count).map(|n| format!("reply {n}")).collect()
    }

    #[test]
    fn answers_beyond_the_table_are_counted() {
        let assessment = CognitiveAssessment::standard();
        let (answers, ignored) = pair_answers(assessment.questions(), &replies(10));
        assert_eq!(answers.len(), 8);
        assert_eq!(ignored, 2);
        assert_eq!(answers[7].question_id.as_str(), "q8");
        assert_eq!(answers[7].text, "reply 8");
    }

    #[test]
    fn short_answer_lists_ignore_nothing() {
        let assessment = CognitiveAssessment::standard();
        let (answers, ignored) = pair_answers(assessment.questions(), &replies(3));
        assert_eq!(answers.len(), 3);
        assert_eq!(ignored, 0);
    }

    #[test]
    fn ignored_notice_names_the_count() {
        assert_eq!(
            ignored_notice(1, 8),
            "Ignored 1 extra answer: there are only 8 questions."
        );
        assert_eq!(
            ignored_notice(3, 8),
            "Ignored 3 extra answers: there are only 8 questions."
        );
    }

    #[test]
    fn assess_with_extra_answers_still_scores() {
        let args = AssessArgs {
            answers: replies(9),
            json: true,
        };
        assert!(run_assess(args).is_ok());
    }
}
