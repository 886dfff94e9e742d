//! The fixed five-question catalog and the per-session answer set.

/// Identifier for one of the five questions. Order here is screen order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionId {
    Mood,
    Genre,
    Era,
    Pace,
    Ending,
}

/// One selectable answer: canonical token, display label, one-line blurb.
#[derive(Debug, Clone, Copy)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
    pub blurb: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: &'static str,
    pub choices: &'static [Choice],
}

const fn choice(value: &'static str, label: &'static str, blurb: &'static str) -> Choice {
    Choice { value, label, blurb }
}

pub const QUESTIONS: &[Question] = &[
    Question {
        id: QuestionId::Mood,
        prompt: "What's your current vibe?",
        choices: &[
            choice("uplifting", "Uplifting", "Feel-good energy"),
            choice("intense", "Intense", "High stakes"),
            choice("thoughtful", "Thoughtful", "Mind-bending"),
            choice("chill", "Chill", "Laid back"),
            choice("dark", "Dark", "Gritty vibes"),
        ],
    },
    Question {
        id: QuestionId::Genre,
        prompt: "Pick your genre",
        choices: &[
            choice("action", "Action", "Adrenaline rush"),
            choice("scifi", "Sci-Fi", "Future worlds"),
            choice("drama", "Drama", "Raw emotion"),
            choice("comedy", "Comedy", "Pure laughs"),
            choice("thriller", "Thriller", "Suspenseful"),
            choice("horror", "Horror", "Terrifying"),
        ],
    },
    Question {
        id: QuestionId::Era,
        prompt: "Choose your era",
        choices: &[
            choice("recent", "2020s", "Fresh releases"),
            choice("modern", "2010s", "Modern classics"),
            choice("classic", "2000s", "Nostalgic"),
            choice("vintage", "Pre-2000", "Timeless"),
            choice("any", "Any Era", "Surprise me"),
        ],
    },
    Question {
        id: QuestionId::Pace,
        prompt: "Select pacing",
        choices: &[
            choice("fast", "Fast", "Non-stop"),
            choice("moderate", "Balanced", "Just right"),
            choice("slow", "Slow-burn", "Builds up"),
            choice("varied", "No Preference", "Whatever works"),
        ],
    },
    Question {
        id: QuestionId::Ending,
        prompt: "How should it end?",
        choices: &[
            choice("happy", "Happy", "Feel-good"),
            choice("bittersweet", "Bittersweet", "Complex"),
            choice("twist", "Plot Twist", "Unexpected"),
            choice("open", "Open-ended", "Ambiguous"),
            choice("any", "Surprise Me", "Anything"),
        ],
    },
];

pub const QUESTION_COUNT: usize = QUESTIONS.len();

/// The user's recorded selections, at most one per question.
/// Owned by the session; cleared wholesale on reset.
#[derive(Debug, Clone, Default)]
pub struct AnswerSet {
    values: [Option<&'static str>; QUESTION_COUNT],
}

impl AnswerSet {
    /// Record the selection for a question, replacing any earlier one.
    pub fn record(&mut self, id: QuestionId, value: &'static str) {
        self.values[id as usize] = Some(value);
    }

    pub fn value(&self, id: QuestionId) -> Option<&'static str> {
        self.values[id as usize]
    }

    pub fn len(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_complete(&self) -> bool {
        self.values.iter().all(Option::is_some)
    }

    pub fn clear(&mut self) {
        self.values = [None; QUESTION_COUNT];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_five_questions_in_screen_order() {
        assert_eq!(QUESTION_COUNT, 5);
        let ids: Vec<QuestionId> = QUESTIONS.iter().map(|q| q.id).collect();
        assert_eq!(
            ids,
            vec![
                QuestionId::Mood,
                QuestionId::Genre,
                QuestionId::Era,
                QuestionId::Pace,
                QuestionId::Ending
            ]
        );
    }

    #[test]
    fn choice_values_are_unique_within_each_question() {
        for q in QUESTIONS {
            for (i, c) in q.choices.iter().enumerate() {
                for other in &q.choices[i + 1..] {
                    assert_ne!(c.value, other.value, "duplicate value in {:?}", q.id);
                }
            }
        }
    }

    #[test]
    fn answer_set_records_one_value_per_question() {
        let mut answers = AnswerSet::default();
        assert!(answers.is_empty());
        answers.record(QuestionId::Mood, "chill");
        answers.record(QuestionId::Mood, "dark");
        assert_eq!(answers.len(), 1);
        assert_eq!(answers.value(QuestionId::Mood), Some("dark"));
        assert!(!answers.is_complete());
    }

    #[test]
    fn answer_set_completes_and_clears() {
        let mut answers = AnswerSet::default();
        for q in QUESTIONS {
            answers.record(q.id, q.choices[0].value);
        }
        assert!(answers.is_complete());
        assert_eq!(answers.len(), QUESTION_COUNT);
        answers.clear();
        assert!(answers.is_empty());
    }
}
