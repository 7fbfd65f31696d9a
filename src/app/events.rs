use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::state::App;

impl App {
    /// Wait up to `tick` for input, then pick up worker responses
    pub fn handle_events(&mut self, tick: Duration) -> io::Result<()> {
        if event::poll(tick)? {
            match event::read()? {
                // Check that it's a key press event to avoid duplicates
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Paste(text) => self.handle_paste_event(text),
                _ => {}
            }
        }

        self.poll_response();
        self.tick();
        Ok(())
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        if self.handle_scroll_keys(key) {
            return;
        }

        // The editor is disabled while a request is in flight
        if self.form.is_loading() {
            return;
        }

        self.input.handle_key(key);
    }

    /// Insert pasted text as one line
    ///
    /// Line breaks become spaces so a multi-line paste never submits.
    pub fn handle_paste_event(&mut self, text: String) {
        if self.form.is_loading() {
            return;
        }

        let flattened = text.replace("\r\n", " ").replace(['\r', '\n'], " ");
        self.input.textarea.insert_str(flattened);
    }

    /// Handle keys that work in every state
    /// Returns true if key was handled, false otherwise
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                true
            }
            KeyCode::Esc => {
                self.should_quit = true;
                true
            }
            KeyCode::Enter => {
                self.submit();
                true
            }
            _ => false,
        }
    }

    /// Scroll the answer panel; the query editor has a single line
    fn handle_scroll_keys(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up => self.answer_scroll.scroll_up(1),
            KeyCode::Down => self.answer_scroll.scroll_down(1),
            KeyCode::PageUp => self.answer_scroll.page_up(),
            KeyCode::PageDown => self.answer_scroll.page_down(),
            _ => return false,
        }
        true
    }
}
