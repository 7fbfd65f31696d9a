#[cfg(test)]
pub mod test_helpers {
    use std::sync::mpsc::{self, Receiver, Sender};

    use crate::app::App;
    use crate::backend::{BackendRequest, BackendResponse, QueryAnswer};
    use ratatui::layout::Rect;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    /// App wired to channels the test plays the worker on
    pub struct Harness {
        pub app: App,
        pub requests: Receiver<BackendRequest>,
        pub responses: Sender<BackendResponse>,
    }

    impl Harness {
        /// Next request the app sent, if any
        pub fn next_request(&self) -> Option<BackendRequest> {
            self.requests.try_recv().ok()
        }

        /// Play the worker: answer `request_id` and let the app poll
        pub fn respond(&mut self, response: BackendResponse) {
            self.responses.send(response).unwrap();
            self.app.poll_response();
        }
    }

    pub fn test_app() -> Harness {
        let (request_tx, requests) = mpsc::channel();
        let (responses, response_rx) = mpsc::channel();
        let app = App::with_channels(request_tx, response_rx);
        Harness {
            app,
            requests,
            responses,
        }
    }

    pub fn app_with_query(query: &str) -> Harness {
        let mut harness = test_app();
        harness.app.input.textarea.insert_str(query);
        harness
    }

    pub fn answer(mode: &str, text: &str) -> QueryAnswer {
        QueryAnswer {
            mode: mode.to_string(),
            ai_response: text.to_string(),
        }
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn render_terminal(app: &mut App, width: u16, height: u16) -> Terminal<TestBackend> {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        app.set_viewport(Rect::new(0, 0, width, height));
        terminal.draw(|f| app.render(f)).unwrap();
        terminal
    }

    pub fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
        render_terminal(app, width, height).backend().to_string()
    }
}
