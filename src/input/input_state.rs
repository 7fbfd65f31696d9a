use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};
use tui_textarea::TextArea;

pub const PLACEHOLDER: &str = "e.g., How many medkits do we have?";

/// Single-line query editor
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl InputState {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();

        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text(PLACEHOLDER);
        textarea.set_placeholder_style(Style::default().fg(Color::DarkGray));

        Self { textarea }
    }

    /// Current query text, untrimmed
    pub fn query(&self) -> &str {
        self.textarea.lines().first().map(String::as_str).unwrap_or("")
    }

    /// Forward an editing key to the textarea
    ///
    /// Keys that would start a second line are refused. Returns true if the
    /// text changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if inserts_newline(key) {
            return false;
        }
        self.textarea.input(key)
    }

    /// Restyle for the enabled or disabled state
    pub fn apply_enabled_style(&mut self, enabled: bool) {
        let (border, cursor) = if enabled {
            (
                Style::default().fg(Color::Cyan),
                Style::default().add_modifier(Modifier::REVERSED),
            )
        } else {
            (Style::default().fg(Color::DarkGray), Style::default())
        };

        self.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border),
        );
        self.textarea.set_cursor_style(cursor);
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

fn inserts_newline(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => true,
        KeyCode::Char('m') | KeyCode::Char('j') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

#[cfg(test)]
#[path = "input_state_tests.rs"]
mod input_state_tests;
