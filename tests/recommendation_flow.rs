//! End-to-end checks of the prompt/parse contract through the public API.

use cinematic::parse::{parse_recommendation, FALLBACK_TITLE};
use cinematic::prompt;
use cinematic::questions::{AnswerSet, QuestionId, QUESTIONS};

fn complete_answers() -> AnswerSet {
    let mut answers = AnswerSet::default();
    answers.record(QuestionId::Mood, "chill");
    answers.record(QuestionId::Genre, "comedy");
    answers.record(QuestionId::Era, "any");
    answers.record(QuestionId::Pace, "moderate");
    answers.record(QuestionId::Ending, "happy");
    answers
}

#[test]
fn prompt_for_any_valid_answer_set_mentions_every_choice() {
    // One prompt per column of the catalog, cycling where questions have
    // fewer choices than others.
    let max_choices = QUESTIONS.iter().map(|q| q.choices.len()).max().unwrap();
    for i in 0..max_choices {
        let mut answers = AnswerSet::default();
        for q in QUESTIONS {
            answers.record(q.id, q.choices[i % q.choices.len()].value);
        }
        let text = prompt::build(&answers, None, &[]);
        assert!(text.contains("User preferences:"));
        assert!(text.contains("recommend ONE perfect movie"));
    }
}

#[test]
fn watched_list_round_trips_through_prompt_and_exclusion_clause() {
    let watched = vec![
        "Groundhog Day (1993)".to_string(),
        "The Grand Budapest Hotel (2014)".to_string(),
    ];
    let text = prompt::build(&complete_answers(), None, &watched);
    for title in &watched {
        assert!(text.contains(title.as_str()));
    }

    let empty = prompt::build(&complete_answers(), None, &[]);
    assert!(!empty.contains("already watched"));
    assert!(!empty.contains("DO NOT RECOMMEND"));
}

#[test]
fn prompted_format_is_what_the_parser_expects() {
    // A reply in exactly the format the prompt requests parses cleanly.
    let reply = "MOVIE: The Nice Guys (2016)\nREASON: Breezy buddy comedy with real laughs.\nVIBE: Sun-soaked 70s LA.\nRUNTIME: 116 min";
    let rec = parse_recommendation(reply);
    assert_eq!(rec.title, "The Nice Guys (2016)");
    assert_eq!(rec.reason, "Breezy buddy comedy with real laughs.");
    assert_eq!(rec.vibe, "Sun-soaked 70s LA.");
    assert_eq!(rec.runtime, "116 min");
}

#[test]
fn chatty_reply_with_preamble_still_yields_fields() {
    let reply = "Sure! Here's my pick:\n\nMOVIE: Chef (2014)\nREASON: Comfort food on wheels.\nVIBE: Warm and appetizing.\nRUNTIME: 114 min\n\nEnjoy!";
    let rec = parse_recommendation(reply);
    assert_eq!(rec.title, "Chef (2014)");
    assert_eq!(rec.runtime, "114 min\n\nEnjoy!");
}

#[test]
fn reply_without_markers_keeps_full_text_as_reason() {
    let reply = "Watch something short and sweet tonight.";
    let rec = parse_recommendation(reply);
    assert_eq!(rec.title, FALLBACK_TITLE);
    assert_eq!(rec.reason, reply);
}
