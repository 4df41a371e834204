use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::{GradeResult, OptionFeedback, ScoreDetail};
use crate::report;

use super::option_label;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(result) = app.last_result() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(6),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[1], result);
    render_question_breakdown(frame, chunks[2], result, app.result_scroll());
    render_controls(frame, chunks[3]);
}

fn grade_color(percentage: f64) -> Color {
    match percentage as u32 {
        90.. => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

fn feedback_color(feedback: OptionFeedback) -> Color {
    match feedback {
        OptionFeedback::Hit => Color::Green,
        OptionFeedback::Missed => Color::Cyan,
        OptionFeedback::WrongPick => Color::Red,
        OptionFeedback::Neutral => Color::Gray,
    }
}

fn render_score_summary(frame: &mut Frame, area: Rect, result: &GradeResult) {
    let percentage = result.percentage();
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "RESULTS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{:.2} / {}  ({:.1}%)",
                result.total, result.max_score, percentage
            ),
            Style::default().fg(grade_color(percentage)).bold(),
        )),
        Line::from(report::legend().fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn detail_lines(detail: &ScoreDetail) -> Vec<Line<'_>> {
    let score_color = if detail.is_full_marks() {
        Color::Green
    } else if detail.score > 0.0 {
        Color::Yellow
    } else {
        Color::Red
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("Question {}", detail.id),
                Style::default().fg(Color::White).bold(),
            ),
            Span::styled(
                format!("  score {:.2}", detail.score),
                Style::default().fg(score_color),
            ),
        ]),
        Line::from(detail.text.as_str().fg(Color::Gray)),
    ];

    if let Some(anomaly) = &detail.anomaly {
        lines.push(Line::from(format!("  ! {}", anomaly).fg(Color::Yellow)));
    }

    for (index, option, feedback, explanation) in detail.annotated_options() {
        let style = Style::default().fg(feedback_color(feedback));
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", feedback.marker()), style),
            Span::styled(format!("{}. ", option_label(index)), style),
            Span::styled(option, style),
            Span::styled(format!(" {}", feedback.note()), style.italic()),
        ]));
        if let Some(explanation) = explanation {
            lines.push(Line::from(format!("        {}", explanation).fg(Color::DarkGray)));
        }
    }

    lines.push(Line::from(""));
    lines
}

fn render_question_breakdown(frame: &mut Frame, area: Rect, result: &GradeResult, scroll: usize) {
    let lines: Vec<Line> = result.details.iter().flat_map(detail_lines).collect();

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((scroll.min(u16::MAX as usize) as u16, 0));
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  e edit answers  ·  r reload  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
