//! TUI view rendering, one draw function per screen.

use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::location::LocationInfo;
use crate::parse::Recommendation;
use crate::questions::{Question, QUESTION_COUNT};

pub const APP_TITLE: &str = "CINEMATIC — AI-Powered Movie Recommendations";

/// Progress string for the question header, e.g. "2 / 5".
pub fn progress_label(cursor: usize) -> String {
    format!("{} / {}", cursor + 1, QUESTION_COUNT)
}

/// Credential entry screen. The key is rendered masked; `key_len` is the
/// number of typed characters.
pub fn draw_key_entry(
    frame: &mut Frame,
    key_len: usize,
    message: &str,
    validating: bool,
    location: Option<&LocationInfo>,
) {
    let area = frame.area();
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(3),
    ])
    .split(area);

    let title = Paragraph::new(APP_TITLE).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(title, chunks[0]);

    let masked = "•".repeat(key_len);
    let mut lines = vec![
        Line::from("Enter your Gemini API key, then press Enter."),
        Line::from(""),
        Line::from(Span::styled(
            "Key: ".to_string() + &masked + "▌",
            Style::default().fg(Color::Green),
        )),
        Line::from(""),
    ];
    if validating {
        lines.push(Line::from(Span::styled(
            "Validating…",
            Style::default().fg(Color::Yellow),
        )));
    } else if !message.is_empty() {
        lines.push(Line::from(Span::styled(
            message,
            Style::default().fg(Color::Red),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Get your key at aistudio.google.com",
        Style::default().fg(Color::DarkGray),
    )));
    if let Some(loc) = location {
        lines.push(Line::from(Span::styled(
            format!("Detected: {}, {}", loc.city, loc.country),
            Style::default().fg(Color::DarkGray),
        )));
    }
    let block = Block::default().borders(Borders::ALL).title(" API key ");
    let para = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    frame.render_widget(para, chunks[1]);

    let help = Line::from(Span::styled("Ctrl+Q: quit", Style::default().dim()));
    frame.render_widget(Paragraph::new(help), chunks[2]);
}

pub fn draw_intro(frame: &mut Frame) {
    let area = frame.area();
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(1),
    ])
    .split(area);

    let title = Paragraph::new(APP_TITLE).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(title, chunks[0]);

    let lines = vec![
        Line::from(Span::styled(
            "Find Your Film",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("5 questions. 1 perfect movie."),
        Line::from(""),
        Line::from("Press Enter to start."),
    ];
    let para = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    frame.render_widget(para, chunks[1]);

    let help = Line::from(Span::styled("Enter: start  q: quit", Style::default().dim()));
    frame.render_widget(Paragraph::new(help), chunks[2]);
}

/// One question screen with its selectable choices.
pub fn draw_question(
    frame: &mut Frame,
    question: &Question,
    cursor: usize,
    choice_cursor: usize,
    recorded: Option<&str>,
) {
    let area = frame.area();
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(1),
    ])
    .split(area);

    let header = Paragraph::new(format!("{}  ·  {}", progress_label(cursor), question.prompt))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    frame.render_widget(header, chunks[0]);

    let mut lines: Vec<Line> = Vec::with_capacity(question.choices.len());
    for (i, choice) in question.choices.iter().enumerate() {
        let marker = if recorded == Some(choice.value) {
            "●"
        } else {
            "○"
        };
        let style = if i == choice_cursor {
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {} {}. {} ", marker, i + 1, choice.label), style),
            Span::styled(
                format!("— {}", choice.blurb),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }
    let para = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    frame.render_widget(para, chunks[1]);

    let back_hint = if cursor > 0 { "←: back  " } else { "" };
    let help = Line::from(Span::styled(
        format!(" ↑/↓: choose  Enter: select  {}q: quit ", back_hint),
        Style::default().dim(),
    ));
    frame.render_widget(Paragraph::new(help), chunks[2]);
}

pub fn draw_loading(frame: &mut Frame) {
    let area = frame.area();
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Analyzing…",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Finding your perfect match",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let para = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    frame.render_widget(para, area);
}

/// Result screen; also renders the degraded error recommendation.
pub fn draw_result(frame: &mut Frame, rec: &Recommendation, watched_count: usize) {
    let area = frame.area();
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(1),
    ])
    .split(area);

    let title = Paragraph::new(" Your Perfect Movie ").block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(title, chunks[0]);

    let mut lines = vec![Line::from(Span::styled(
        rec.title.as_str(),
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    ))];
    if !rec.runtime.is_empty() {
        lines.push(Line::from(Span::styled(
            rec.runtime.as_str(),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::from(""));
    if !rec.vibe.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("\"{}\"", rec.vibe),
            Style::default().add_modifier(Modifier::ITALIC),
        )));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "Why this film?",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for reason_line in rec.reason.lines() {
        lines.push(Line::from(reason_line.to_string()));
    }
    if watched_count > 0 {
        lines.push(Line::from(""));
        let plural = if watched_count > 1 { "s" } else { "" };
        lines.push(Line::from(Span::styled(
            format!("Excluded {watched_count} movie{plural} you've already watched"),
            Style::default().fg(Color::DarkGray),
        )));
    }
    let para = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    frame.render_widget(para, chunks[1]);

    let help = Line::from(Span::styled(
        " w: already watched  r: start over  q: quit ",
        Style::default().dim(),
    ));
    frame.render_widget(Paragraph::new(help), chunks[2]);
}
