//! TUI application model (Elm architecture).

use std::io;
use std::time::{Duration, Instant};

use crossbeam_channel::Receiver;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;
use tracing::debug;

use calcroi_core::api::query_params;
use calcroi_core::{
    render, Action, Endpoint, FormState, RequestFailure, RequestPhase, RequestTicket, Resolution,
    ResultSet,
};

use crate::bridge::RequestSink;
use crate::footer::render_footer;
use crate::form::{render_form, Focus};
use crate::header::render_header;
use crate::keymap::{map_key, KeyAction};
use crate::logs::{render_logs, ActivityLog};
use crate::messages::TuiMessage;
use crate::results::render_results;

const PAGE: usize = 10;

/// Screen regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub header: Rect,
    pub form: Rect,
    pub results: Rect,
    pub logs: Option<Rect>,
    pub footer: Rect,
}

/// TUI application state (Elm Model).
pub struct TuiApp {
    pub should_quit: bool,
    /// Inputs, results and request phase.
    pub form: FormState,
    pub focus: Focus,
    pub activity: ActivityLog,
    pub show_logs: bool,
    api_url: String,
    rx: Receiver<TuiMessage>,
    requests: Box<dyn RequestSink>,
    pending_since: Option<Instant>,
}

impl TuiApp {
    #[must_use]
    pub fn new(
        rx: Receiver<TuiMessage>,
        requests: Box<dyn RequestSink>,
        form: FormState,
        api_url: impl Into<String>,
    ) -> Self {
        Self {
            should_quit: false,
            form,
            focus: Focus::default(),
            activity: ActivityLog::new(),
            show_logs: true,
            api_url: api_url.into(),
            rx,
            requests,
            pending_since: None,
        }
    }

    /// Drain pending messages (Elm Update).
    pub fn update(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            self.handle_message(msg);
        }
    }

    /// Handle a single message.
    pub fn handle_message(&mut self, msg: TuiMessage) {
        match msg {
            TuiMessage::Resolved {
                seq,
                action,
                outcome,
            } => self.on_resolved(seq, action, outcome),
            TuiMessage::KeyPress(action) => self.handle_key_action(action),
        }
    }

    /// Handle a keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit | KeyAction::Cancel => self.should_quit = true,
            KeyAction::FocusNext => self.focus = self.focus.next(),
            KeyAction::FocusPrev => self.focus = self.focus.prev(),
            KeyAction::Left => self.step(false),
            KeyAction::Right => self.step(true),
            KeyAction::Input(c) => self.edit(|value| value.push(c)),
            KeyAction::Backspace => self.edit(|value| {
                value.pop();
            }),
            KeyAction::Submit => match self.focus.button_action() {
                Some(action) => self.submit(action),
                None => self.focus = self.focus.next(),
            },
            KeyAction::ComputeReturn => self.submit(Action::ComputeReturn),
            KeyAction::LookupRates => self.submit(Action::LookupRates),
            KeyAction::ToggleLogs => self.show_logs = !self.show_logs,
            KeyAction::PageUp => self.activity.scroll.page_up(PAGE),
            KeyAction::PageDown => {
                let total = self.activity.len();
                self.activity.scroll.page_down(PAGE, total);
            }
            KeyAction::Home => self.activity.scroll.home(),
            KeyAction::End => {
                let total = self.activity.len();
                self.activity.scroll.end(total);
            }
            KeyAction::None => {}
        }
    }

    /// Left/Right cycle the bank selector, or move between the buttons.
    fn step(&mut self, forward: bool) {
        match self.focus {
            Focus::Bank => {
                let bank = self.form.bank();
                self.form.set_bank(if forward { bank.next() } else { bank.prev() });
            }
            Focus::ComputeButton if forward => self.focus = Focus::RatesButton,
            Focus::RatesButton if !forward => self.focus = Focus::ComputeButton,
            _ => {}
        }
    }

    fn edit(&mut self, change: impl FnOnce(&mut String)) {
        match self.focus {
            Focus::Amount => {
                let mut value = self.form.amount().to_string();
                change(&mut value);
                self.form.set_amount(value);
            }
            Focus::Term => {
                let mut value = self.form.term_days().to_string();
                change(&mut value);
                self.form.set_term_days(value);
            }
            _ => {}
        }
    }

    /// Issue a request with the current inputs. Earlier in-flight requests
    /// keep running; their replies are discarded on arrival.
    pub fn submit(&mut self, action: Action) {
        let ticket = self.form.begin(action);
        self.activity.push(format!("#{} GET {}", ticket.seq, describe(&ticket)));
        self.pending_since = Some(Instant::now());
        self.requests.submit(ticket);
    }

    fn on_resolved(&mut self, seq: u64, action: Action, outcome: Result<ResultSet, RequestFailure>) {
        let summary = summarize(&outcome);
        match self.form.resolve(seq, outcome) {
            Resolution::Applied => {
                self.pending_since = None;
                self.activity.push(format!("{summary} #{seq} {}", action.label()));
            }
            Resolution::Superseded { latest } => {
                debug!(seq, latest, "discarding superseded reply");
                self.activity
                    .push(format!("[WARN] #{seq} descartada, reemplazada por #{latest}"));
            }
        }
    }

    /// Time the latest request has been pending.
    #[must_use]
    pub fn pending(&self) -> Option<(Action, Duration)> {
        match self.form.phase() {
            RequestPhase::Pending { action, .. } => {
                Some((action, self.pending_since.map_or(Duration::ZERO, |t| t.elapsed())))
            }
            RequestPhase::Idle => None,
        }
    }

    /// Split the screen into header, form, results, optional activity panel
    /// and footer.
    #[must_use]
    pub fn compute_layout(area: Rect, show_logs: bool) -> AppLayout {
        let logs_height = if show_logs { 8 } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Min(4),
                Constraint::Length(logs_height),
                Constraint::Length(2),
            ])
            .split(area);

        AppLayout {
            header: chunks[0],
            form: chunks[1],
            results: chunks[2],
            logs: show_logs.then_some(chunks[3]),
            footer: chunks[4],
        }
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let layout = Self::compute_layout(frame.area(), self.show_logs);

        render_header(frame, layout.header, &self.api_url, self.pending());
        render_form(frame, layout.form, &self.form, self.focus);
        render_results(frame, layout.results, &render(&self.form));
        if let Some(area) = layout.logs {
            render_logs(frame, area, &self.activity);
        }
        render_footer(frame, layout.footer);
    }

    /// Set up the terminal for TUI mode.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the TUI event loop until the user quits.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        Self::teardown_terminal(&mut terminal)?;
        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
        let tick_rate = Duration::from_millis(100);

        loop {
            terminal.draw(|frame| self.render(frame))?;

            if self.should_quit {
                return Ok(());
            }

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_message(TuiMessage::KeyPress(map_key(key)));
                    }
                    _ => {}
                }
            }

            self.update();
        }
    }
}

fn describe(ticket: &RequestTicket) -> String {
    let endpoint = Endpoint::route(ticket.action, ticket.input.bank);
    let query: Vec<String> = query_params(&ticket.input)
        .into_iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect();
    format!("{endpoint}?{}", query.join("&"))
}

fn summarize(outcome: &Result<ResultSet, RequestFailure>) -> String {
    match outcome {
        Ok(results) => match results.rows() {
            Some(rows) => format!("[OK] {} bancos", rows.len()),
            None => "[OK] 1 banco".to_string(),
        },
        Err(failure) => {
            let message = failure.message();
            let first = message.lines().next().unwrap_or_default();
            format!("[ERROR] {first}")
        }
    }
}
