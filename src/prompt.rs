//! Builds the natural-language instruction sent to the model.
//!
//! The reply format is pinned to four labeled lines so the parser can scrape
//! it without a structured-output contract; see `parse.rs` for the other half.

use crate::location::LocationInfo;
use crate::questions::{AnswerSet, QuestionId};

// Every value in the question catalog must have a phrase here; a miss is a
// programming error, hence the panic.

fn mood_phrase(value: &str) -> &'static str {
    match value {
        "uplifting" => "uplifting and feel-good",
        "intense" => "intense and thrilling",
        "thoughtful" => "deep and thought-provoking",
        "chill" => "chill and relaxing",
        "dark" => "dark and mysterious",
        _ => panic!("no mood phrase for answer value {value:?}"),
    }
}

fn genre_phrase(value: &str) -> &'static str {
    match value {
        "action" => "Action/Adventure",
        "scifi" => "Sci-Fi/Fantasy",
        "drama" => "Drama",
        "comedy" => "Comedy",
        "thriller" => "Thriller/Mystery",
        "horror" => "Horror",
        _ => panic!("no genre phrase for answer value {value:?}"),
    }
}

fn era_phrase(value: &str) -> &'static str {
    match value {
        "recent" => "from 2020-2025",
        "modern" => "from 2010-2019",
        "classic" => "from 2000-2009",
        "vintage" => "from before 2000",
        "any" => "from any era",
        _ => panic!("no era phrase for answer value {value:?}"),
    }
}

fn pace_phrase(value: &str) -> &'static str {
    match value {
        "fast" => "fast-paced",
        "moderate" => "moderately paced",
        "slow" => "slow-burn",
        "varied" => "with any pacing",
        _ => panic!("no pace phrase for answer value {value:?}"),
    }
}

fn ending_phrase(value: &str) -> &'static str {
    match value {
        "happy" => "a happy ending",
        "bittersweet" => "a bittersweet ending",
        "twist" => "a plot twist ending",
        "open" => "an open-ended conclusion",
        "any" => "any type of ending",
        _ => panic!("no ending phrase for answer value {value:?}"),
    }
}

fn answer(answers: &AnswerSet, id: QuestionId) -> &'static str {
    answers
        .value(id)
        .unwrap_or_else(|| panic!("prompt built with no answer for {id:?}"))
}

/// Build the instruction string for one recommendation request.
///
/// The state machine only calls this with a complete `AnswerSet`; the watched
/// titles are excluded verbatim and the location block is included only when
/// a lookup has landed by now.
pub fn build(answers: &AnswerSet, location: Option<&LocationInfo>, watched: &[String]) -> String {
    let location_context = location.map_or_else(String::new, |loc| {
        format!(
            "\n- User location: {}, {}. Consider regional cinema, local favorites, or culturally relevant films from this region when appropriate.",
            loc.city, loc.country
        )
    });

    let watched_context = if watched.is_empty() {
        String::new()
    } else {
        format!(
            "\n- Movies already watched (DO NOT RECOMMEND THESE): {}",
            watched.join(", ")
        )
    };

    let important = if watched.is_empty() {
        "Recommend a movie that fits all preferences."
    } else {
        "Do NOT recommend any of the movies listed as already watched. Choose a DIFFERENT movie."
    };

    format!(
        "You are a movie recommendation expert. Based on the user's preferences, recommend ONE perfect movie.\n\
         \n\
         User preferences:\n\
         - Mood: {mood}\n\
         - Genre: {genre}\n\
         - Era: A movie {era}\n\
         - Pace: {pace}\n\
         - Ending: {ending}{location_context}{watched_context}\n\
         \n\
         IMPORTANT: {important}\n\
         \n\
         Respond in this EXACT format:\n\
         MOVIE: [Movie Title] (Year)\n\
         REASON: [2-3 sentences why this fits their preferences]\n\
         VIBE: [One sentence describing the atmosphere]\n\
         RUNTIME: [Runtime]\n\
         \n\
         Make sure it's a real movie matching their preferences.",
        mood = mood_phrase(answer(answers, QuestionId::Mood)),
        genre = genre_phrase(answer(answers, QuestionId::Genre)),
        era = era_phrase(answer(answers, QuestionId::Era)),
        pace = pace_phrase(answer(answers, QuestionId::Pace)),
        ending = ending_phrase(answer(answers, QuestionId::Ending)),
    )
}
