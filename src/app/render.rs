use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::state::App;
use crate::backend::QueryAnswer;
use crate::form::BadgeTone;
use crate::input::input_render;
use crate::widgets::spinner;

/// Widest the form grows on large terminals
const MAX_FORM_WIDTH: u16 = 96;
const BUTTON_WIDTH: u16 = 11;

pub const TITLE: &str = "Astro Archive";
pub const SUBTITLE: &str = "Autonomous AI Quartermaster";
pub const LABEL: &str = "Enter your query about mission inventory:";
pub const BUTTON_LABEL: &str = "Query";

/// Where each part of the screen goes
pub struct ScreenLayout {
    pub header: Rect,
    pub label: Rect,
    pub input: Rect,
    pub button: Rect,
    pub outcome: Rect,
}

impl ScreenLayout {
    pub fn new(frame_area: Rect) -> Self {
        let area = centered_column(frame_area, MAX_FORM_WIDTH);

        let [header, label, form, _, outcome] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        let [input, button] =
            Layout::horizontal([Constraint::Min(10), Constraint::Length(BUTTON_WIDTH)])
                .areas(form);

        Self {
            header,
            label,
            input,
            button,
            outcome,
        }
    }

    /// Text area of the outcome panel, inside its borders
    pub fn outcome_inner(&self) -> Rect {
        Block::default().borders(Borders::ALL).inner(self.outcome)
    }
}

impl App {
    /// Render the UI
    ///
    /// Output depends only on state; `frame_count` selects the spinner glyph.
    pub fn render(&self, frame: &mut Frame) {
        let layout = ScreenLayout::new(frame.area());

        render_header(frame, layout.header);
        frame.render_widget(
            Paragraph::new(LABEL).style(Style::default().fg(Color::Gray)),
            layout.label,
        );

        input_render::render_field(self, frame, layout.input);
        self.render_submit_button(frame, layout.button);

        if let Some(answer) = self.form.result() {
            let panel = answer_paragraph(answer)
                .scroll((self.answer_scroll.offset, 0))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::DarkGray)),
                );
            frame.render_widget(panel, layout.outcome);
        } else if !self.form.error_message().is_empty() {
            render_error(frame, layout.outcome, self.form.error_message());
        }
    }

    /// Render the submit control; a spinner replaces the label while loading
    fn render_submit_button(&self, frame: &mut Frame, area: Rect) {
        let loading = self.form.is_loading();
        let enabled = self.can_submit();

        let label = if loading {
            spinner::frame(self.frame_count)
        } else {
            BUTTON_LABEL
        };

        let color = if enabled { Color::Cyan } else { Color::DarkGray };
        let mut text_style = Style::default().fg(color);
        if enabled || loading {
            text_style = text_style.add_modifier(Modifier::BOLD);
        }

        let button = Paragraph::new(label)
            .alignment(Alignment::Center)
            .style(text_style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            );

        frame.render_widget(button, area);
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            TITLE,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(SUBTITLE, Style::default().fg(Color::Gray))),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(header, area);
}

/// Mode badge followed by the answer, line breaks kept
///
/// Built without a block so its wrapped height can be measured.
pub fn answer_paragraph(answer: &QueryAnswer) -> Paragraph<'static> {
    let tone = BadgeTone::for_mode(&answer.mode);

    let mut lines = vec![
        Line::from(Span::styled(
            format!(" {} ", answer.mode.to_uppercase()),
            Style::default()
                .fg(tone.color())
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];
    lines.extend(
        answer
            .ai_response
            .lines()
            .map(|line| Line::from(line.to_string())),
    );

    Paragraph::new(lines)
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: false })
}

fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let panel = Paragraph::new(message)
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(
                    " Error: ",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ))
                .border_style(Style::default().fg(Color::Red)),
        );

    frame.render_widget(panel, area);
}

/// Horizontally centred column at most `max_width` wide
fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}
