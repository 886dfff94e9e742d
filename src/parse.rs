//! Scrapes the model's free-text reply into a `Recommendation`.
//!
//! The reply contract is the four labeled markers requested by the prompt.
//! Parsing never fails: each field degrades to its own fallback, so every
//! reply (even garbage) yields something the result screen can show.

/// Shown as the title when no `MOVIE:` marker was found.
pub const FALLBACK_TITLE: &str = "Movie Recommendation";

/// Title of the degraded recommendation produced when the request itself
/// failed. Never appended to the watched list.
pub const ERROR_TITLE: &str = "Error";

pub const ERROR_REASON: &str = "Sorry, there was an error getting your recommendation.";

/// One parsed recommendation. Created fresh on every attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub title: String,
    pub reason: String,
    pub vibe: String,
    pub runtime: String,
}

impl Recommendation {
    /// The fixed placeholder used when the external call fails outright.
    pub fn failure() -> Self {
        Self {
            title: ERROR_TITLE.to_string(),
            reason: ERROR_REASON.to_string(),
            vibe: String::new(),
            runtime: String::new(),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.title == ERROR_TITLE
    }
}

const MARKERS: [&str; 4] = ["MOVIE:", "REASON:", "VIBE:", "RUNTIME:"];

/// If the line starts with one of the markers (any case, leading whitespace
/// allowed), returns the marker index and the text after it.
fn match_marker(line: &str) -> Option<(usize, &str)> {
    let trimmed = line.trim_start();
    MARKERS.iter().enumerate().find_map(|(i, marker)| {
        let head = trimmed.get(..marker.len())?;
        head.eq_ignore_ascii_case(marker)
            .then(|| (i, &trimmed[marker.len()..]))
    })
}

/// Extract the four labeled fields from the raw reply.
///
/// A field's value runs from just after its marker to the next recognized
/// marker or end of input, trimmed; `REASON` and `VIBE` values routinely span
/// multiple lines. Missing fields fall back per field: the title to
/// [`FALLBACK_TITLE`], the reason to the entire raw input, the rest to empty.
pub fn parse_recommendation(text: &str) -> Recommendation {
    let mut fields: [Option<String>; 4] = [const { None }; 4];
    let mut current: Option<usize> = None;

    for line in text.lines() {
        if let Some((i, rest)) = match_marker(line) {
            fields[i] = Some(rest.to_string());
            current = Some(i);
        } else if let Some(buf) = current.and_then(|i| fields[i].as_mut()) {
            buf.push('\n');
            buf.push_str(line);
        }
    }

    let field = |i: usize| fields[i].as_deref().map(str::trim);
    Recommendation {
        title: field(0).unwrap_or(FALLBACK_TITLE).to_string(),
        reason: field(1).map_or_else(|| text.to_string(), str::to_string),
        vibe: field(2).unwrap_or("").to_string(),
        runtime: field(3).unwrap_or("").to_string(),
    }
}
