use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(11),
        Constraint::Fill(1),
    ])
    .split(area);

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "QUIZ",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
    ];

    if let Some(error) = app.load_error() {
        content.push(Line::from("Could not load the question bank".fg(Color::Red).bold()));
        content.push(Line::from(error.fg(Color::Red)));
        content.push(Line::from(""));
        content.push(Line::from("fix the file, then press r to reload".fg(Color::DarkGray)));
    } else if app.can_start() {
        content.push(Line::from(
            format!("{} questions loaded", app.total_questions()).fg(Color::DarkGray),
        ));
        content.push(Line::from(""));
        content.push(Line::from(""));
        content.push(Line::from(Span::styled(
            "ENTER",
            Style::default().fg(Color::Green).bold(),
        )));
        content.push(Line::from("to start".fg(Color::DarkGray)));
    } else {
        content.push(Line::from("The question bank is empty".fg(Color::Yellow)));
        content.push(Line::from(""));
        content.push(Line::from("add questions, then press r to reload".fg(Color::DarkGray)));
    }

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray),
        );

    frame.render_widget(widget, chunks[1]);

    let controls = Paragraph::new("enter start  ·  r reload  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    let controls_area = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)])
        .margin(1)
        .split(chunks[2]);
    frame.render_widget(controls, controls_area[1]);
}
