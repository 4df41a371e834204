use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::app::App;
use crate::models::{Question, QuestionKind, Selection};

use super::option_label;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(question) = app.current_question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], app, question);
    render_question_text(frame, chunks[1], &question.text);
    render_kind_hint(frame, chunks[2], question.kind);
    render_options(
        frame,
        chunks[3],
        question,
        app.current_selection(),
        app.selected_option(),
    );
    render_controls(frame, chunks[4]);
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App, question: &Question) {
    let progress = format!(
        "Question {}  ·  {}/{}  ·  {} answered",
        question.id,
        app.current_question_number(),
        app.total_questions(),
        app.answered_count()
    );
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_kind_hint(frame: &mut Frame, area: Rect, kind: QuestionKind) {
    let hint = match kind {
        QuestionKind::Single => "Choose one answer",
        QuestionKind::Multiple => "Choose every correct answer",
    };
    frame.render_widget(Paragraph::new(hint).fg(Color::DarkGray).italic(), area);
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    question: &Question,
    selection: Option<&Selection>,
    highlighted: usize,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(question.options.len() * 2);

    for (index, option) in question.options.iter().enumerate() {
        let is_highlighted = index == highlighted;
        let is_chosen = selection.is_some_and(|s| s.contains(index));

        let style = if is_highlighted {
            Style::default().fg(Color::Cyan).bold()
        } else if is_chosen {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Gray)
        };
        let cursor = if is_highlighted { ">" } else { " " };
        let mark = match (question.kind, is_chosen) {
            (QuestionKind::Single, true) => "(•)",
            (QuestionKind::Single, false) => "( )",
            (QuestionKind::Multiple, true) => "[x]",
            (QuestionKind::Multiple, false) => "[ ]",
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} {} ", cursor, mark), style),
            Span::styled(format!("{}. ", option_label(index)), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new(
        "j/k option  ·  n/p question  ·  space pick  ·  backspace clear  ·  s submit  ·  q quit",
    )
    .alignment(Alignment::Center)
    .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
