//! Input field rendering
//!
//! Draws the query editor. Its styling follows the loading state and is
//! applied by the app whenever that state changes.

use ratatui::{Frame, layout::Rect};

use crate::app::App;

pub fn render_field(app: &App, frame: &mut Frame, area: Rect) {
    frame.render_widget(&app.input.textarea, area);
}
