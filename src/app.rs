//! Session state and the screen state machine.
//!
//! `App` is the sole owner of all mutable session data: the current view,
//! the question cursor, the answers, the watched list, the detected location
//! and the latest recommendation. Network results arrive over oneshot
//! channels polled once per event-loop tick, so exactly one user-triggered
//! transition is processed at a time and at most one recommendation request
//! is ever in flight (the `Loading` view has no triggering keys).

use crossterm::event::KeyCode;
use ratatui::Frame;
use tokio::runtime::Runtime;
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;

use crate::api::GeminiClient;
use crate::error::{CinematicError, Result};
use crate::location::{self, LocationInfo};
use crate::parse::{parse_recommendation, Recommendation};
use crate::prompt;
use crate::questions::{AnswerSet, Question, QUESTIONS, QUESTION_COUNT};
use crate::tui::{draw_intro, draw_key_entry, draw_loading, draw_question, draw_result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    KeyEntry,
    Intro,
    Question,
    Loading,
    Result,
}

pub struct App {
    pub view: View,

    /// API key as typed; rendered masked. Validated once per submission.
    pub api_key: String,
    /// Inline error under the key input; empty when none.
    pub key_message: String,
    /// Re-entrancy guard: a validation request in flight suppresses new ones.
    pub validating: bool,

    /// Zero-based question cursor, always within `[0, QUESTION_COUNT)`.
    pub cursor: usize,
    /// Highlighted choice on the current question.
    pub choice_cursor: usize,
    pub answers: AnswerSet,

    pub recommendation: Option<Recommendation>,
    /// Titles marked "already watched" this session; excluded from prompts.
    pub watched: Vec<String>,
    /// Best-effort detected place; `None` is normal and silent.
    pub location: Option<LocationInfo>,

    pending_validation: Option<oneshot::Receiver<Result<()>>>,
    pending_recommendation: Option<oneshot::Receiver<Result<String>>>,
    pending_location: Option<oneshot::Receiver<Option<LocationInfo>>>,

    runtime: Runtime,
}

impl App {
    pub fn new() -> Result<Self> {
        let runtime = Runtime::new()?;

        // Fire-and-forget: the lookup races the main flow and is merged in
        // poll_pending; it runs at most once per session.
        let (tx, rx) = oneshot::channel();
        runtime.spawn(async move {
            let _ = tx.send(location::detect().await);
        });

        Ok(Self {
            view: View::KeyEntry,
            api_key: String::new(),
            key_message: String::new(),
            validating: false,
            cursor: 0,
            choice_cursor: 0,
            answers: AnswerSet::default(),
            recommendation: None,
            watched: Vec::new(),
            location: None,
            pending_validation: None,
            pending_recommendation: None,
            pending_location: Some(rx),
            runtime,
        })
    }

    pub fn current_question(&self) -> &'static Question {
        &QUESTIONS[self.cursor]
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        match self.view {
            View::KeyEntry => draw_key_entry(
                frame,
                self.api_key.chars().count(),
                &self.key_message,
                self.validating,
                self.location.as_ref(),
            ),
            View::Intro => draw_intro(frame),
            View::Question => draw_question(
                frame,
                self.current_question(),
                self.cursor,
                self.choice_cursor,
                self.answers.value(self.current_question().id),
            ),
            View::Loading => draw_loading(frame),
            View::Result => {
                if let Some(ref rec) = self.recommendation {
                    draw_result(frame, rec, self.watched.len());
                }
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyCode) -> Result<bool> {
        let mut quit = false;
        match self.view {
            View::KeyEntry => match key {
                // Input is disabled while a validation request is in flight.
                _ if self.validating => {}
                KeyCode::Enter => self.start_validation(),
                KeyCode::Char(c) => {
                    self.api_key.push(c);
                    self.key_message.clear();
                }
                KeyCode::Backspace => {
                    self.api_key.pop();
                    self.key_message.clear();
                }
                _ => {}
            },
            View::Intro => match key {
                KeyCode::Char('q') => quit = true,
                KeyCode::Enter | KeyCode::Char('s') => {
                    self.cursor = 0;
                    self.sync_choice_cursor();
                    self.view = View::Question;
                }
                _ => {}
            },
            View::Question => match key {
                KeyCode::Char('q') => quit = true,
                KeyCode::Up | KeyCode::Char('k') => {
                    if self.choice_cursor > 0 {
                        self.choice_cursor -= 1;
                    }
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    if self.choice_cursor + 1 < self.current_question().choices.len() {
                        self.choice_cursor += 1;
                    }
                }
                KeyCode::Enter => self.select_choice(),
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    let idx = (c as usize).wrapping_sub('1' as usize);
                    if idx < self.current_question().choices.len() {
                        self.choice_cursor = idx;
                        self.select_choice();
                    }
                }
                KeyCode::Left | KeyCode::Backspace | KeyCode::Char('b') => self.back(),
                _ => {}
            },
            // A request is in flight; no transition can be triggered here.
            View::Loading => {}
            View::Result => match key {
                KeyCode::Char('q') => quit = true,
                KeyCode::Char('w') => self.mark_watched(),
                KeyCode::Char('r') => self.reset(),
                _ => {}
            },
        }
        Ok(quit)
    }

    /// Called each tick; merges completed background work into the session.
    pub fn poll_pending(&mut self) {
        if let Some(rx) = self.pending_location.as_mut() {
            match rx.try_recv() {
                Ok(found) => {
                    if self.location.is_none() {
                        self.location = found;
                    }
                    self.pending_location = None;
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Closed) => self.pending_location = None,
            }
        }

        if let Some(rx) = self.pending_validation.as_mut() {
            let outcome = match rx.try_recv() {
                Ok(result) => Some(result),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Closed) => {
                    Some(Err(CinematicError::Api("Failed to validate API key".into())))
                }
            };
            if let Some(result) = outcome {
                self.pending_validation = None;
                self.validating = false;
                match result {
                    Ok(()) => {
                        self.key_message.clear();
                        self.view = View::Intro;
                    }
                    Err(e) => self.key_message = e.to_string(),
                }
            }
        }

        if let Some(rx) = self.pending_recommendation.as_mut() {
            let outcome = match rx.try_recv() {
                Ok(result) => Some(result),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Closed) => Some(Err(CinematicError::MalformedResponse)),
            };
            if let Some(result) = outcome {
                self.pending_recommendation = None;
                // Never stuck in Loading: failure becomes the placeholder.
                self.recommendation = Some(match result {
                    Ok(text) => parse_recommendation(&text),
                    Err(_) => Recommendation::failure(),
                });
                self.view = View::Result;
            }
        }
    }

    fn start_validation(&mut self) {
        let key = self.api_key.trim().to_string();
        if key.is_empty() {
            self.key_message = "Enter your Gemini API key first.".to_string();
            return;
        }
        self.validating = true;
        self.key_message.clear();
        let (tx, rx) = oneshot::channel();
        self.runtime.spawn(async move {
            let result = match GeminiClient::new(&key) {
                Ok(client) => client.validate_key().await,
                Err(e) => Err(e),
            };
            let _ = tx.send(result);
        });
        self.pending_validation = Some(rx);
    }

    /// Record the highlighted choice, then advance or kick off the request.
    fn select_choice(&mut self) {
        let question = self.current_question();
        let choice = question.choices[self.choice_cursor];
        self.answers.record(question.id, choice.value);
        if self.cursor + 1 < QUESTION_COUNT {
            self.cursor += 1;
            self.sync_choice_cursor();
        } else {
            self.start_recommendation();
        }
    }

    fn back(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.sync_choice_cursor();
        }
    }

    /// Highlight the answer already recorded for the current question, if any.
    fn sync_choice_cursor(&mut self) {
        let question = self.current_question();
        self.choice_cursor = self
            .answers
            .value(question.id)
            .and_then(|v| question.choices.iter().position(|c| c.value == v))
            .unwrap_or(0);
    }

    /// Build the prompt now (location is read at this instant) and spawn the
    /// single in-flight generate request.
    fn start_recommendation(&mut self) {
        let prompt = prompt::build(&self.answers, self.location.as_ref(), &self.watched);
        let key = self.api_key.trim().to_string();
        let (tx, rx) = oneshot::channel();
        self.runtime.spawn(async move {
            let result = match GeminiClient::new(&key) {
                Ok(client) => client.generate(&prompt).await,
                Err(e) => Err(e),
            };
            let _ = tx.send(result);
        });
        self.pending_recommendation = Some(rx);
        self.recommendation = None;
        self.view = View::Loading;
    }

    /// Append the current title to the watched list (the error placeholder is
    /// never appended) and request a fresh pick with the same answers.
    fn mark_watched(&mut self) {
        if let Some(ref rec) = self.recommendation {
            if !rec.is_failure() {
                self.watched.push(rec.title.clone());
            }
        }
        self.start_recommendation();
    }

    /// Back to the intro. The watched list survives a reset: it scopes to the
    /// session, not the recommendation cycle.
    fn reset(&mut self) {
        self.answers.clear();
        self.cursor = 0;
        self.choice_cursor = 0;
        self.recommendation = None;
        self.view = View::Intro;
    }
}
