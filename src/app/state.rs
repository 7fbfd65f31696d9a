use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use ratatui::layout::Rect;

use super::render::{ScreenLayout, answer_paragraph};
use crate::backend::{BackendRequest, BackendResponse, InventoryClient, spawn_worker};
use crate::config::Config;
use crate::form::FormState;
use crate::input::InputState;
use crate::scroll::ScrollState;

/// Application state
pub struct App {
    pub input: InputState,
    pub form: FormState,
    pub answer_scroll: ScrollState,
    pub should_quit: bool,
    /// Advances once per tick; drives the spinner
    pub frame_count: u64,
    /// Terminal area the next frame is drawn into
    viewport: Rect,
    request_tx: Option<Sender<BackendRequest>>,
    response_rx: Option<Receiver<BackendResponse>>,
}

impl App {
    /// Create the app and start its backend worker
    pub fn new(config: &Config) -> Self {
        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();

        spawn_worker(
            InventoryClient::new(config.backend.endpoint.clone()),
            request_rx,
            response_tx,
        );

        Self::with_channels(request_tx, response_rx)
    }

    /// Create the app talking to an already running worker
    pub fn with_channels(
        request_tx: Sender<BackendRequest>,
        response_rx: Receiver<BackendResponse>,
    ) -> Self {
        let mut input = InputState::new();
        input.apply_enabled_style(true);

        Self {
            input,
            form: FormState::new(),
            answer_scroll: ScrollState::new(),
            should_quit: false,
            frame_count: 0,
            viewport: Rect::default(),
            request_tx: Some(request_tx),
            response_rx: Some(response_rx),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Get the current query text
    pub fn query(&self) -> &str {
        self.input.query()
    }

    pub fn can_submit(&self) -> bool {
        self.form.can_submit(self.query())
    }

    /// Submit the current query
    ///
    /// Blank queries and submits during an in-flight request do nothing.
    /// Returns true if a submission started.
    pub fn submit(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }

        let query = self.query().to_string();
        let (request_id, cancel_token) = self.form.begin_submission();
        self.answer_scroll.reset();

        let sent = self.request_tx.as_ref().is_some_and(|tx| {
            tx.send(BackendRequest {
                query,
                request_id,
                cancel_token,
            })
            .is_ok()
        });

        if !sent {
            self.request_tx = None;
            self.form.fail_submission("backend worker is not running");
        }
        self.on_form_changed();
        true
    }

    /// Apply every response the worker has sent so far
    ///
    /// Never blocks. Returns true if the form changed.
    pub fn poll_response(&mut self) -> bool {
        let mut changed = false;

        loop {
            let Some(rx) = &self.response_rx else {
                break;
            };

            match rx.try_recv() {
                Ok(response) => changed |= self.form.apply_response(response),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    log::warn!("Backend worker disconnected");
                    self.response_rx = None;
                    if self.form.is_loading() {
                        self.form.fail_submission("backend worker disconnected");
                        changed = true;
                    }
                }
            }
        }

        if changed {
            self.on_form_changed();
        }
        changed
    }

    /// Give up on the in-flight request, if any
    pub fn abandon_in_flight(&mut self) -> bool {
        let abandoned = self.form.abandon();
        if abandoned {
            self.on_form_changed();
        }
        abandoned
    }

    /// Record the terminal area the next frame is drawn into
    pub fn set_viewport(&mut self, area: Rect) {
        self.viewport = area;
        self.update_answer_bounds();
    }

    /// Recompute how far the answer panel can scroll
    fn update_answer_bounds(&mut self) {
        let inner = ScreenLayout::new(self.viewport).outcome_inner();
        let content_lines = self
            .form
            .result()
            .map(|answer| answer_paragraph(answer).line_count(inner.width))
            .unwrap_or(0);
        self.answer_scroll.update_bounds(content_lines, inner.height);
    }

    fn on_form_changed(&mut self) {
        self.input.apply_enabled_style(!self.form.is_loading());
        self.update_answer_bounds();
    }

    pub fn tick(&mut self) {
        self.frame_count = self.frame_count.wrapping_add(1);
    }
}
