//! Activity panel: a bounded record of issued requests and their outcomes.

use std::collections::VecDeque;

use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Entries kept before the oldest is evicted.
pub const ACTIVITY_CAPACITY: usize = 500;

/// Scroll position of the activity panel.
#[derive(Debug, Clone)]
pub struct LogScrollState {
    /// First visible entry.
    pub offset: usize,
    /// Follow the newest entry.
    pub follow: bool,
}

impl LogScrollState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            offset: 0,
            follow: true,
        }
    }

    fn last(total: usize) -> usize {
        total.saturating_sub(1)
    }

    pub fn page_up(&mut self, page: usize) {
        self.follow = false;
        self.offset = self.offset.saturating_sub(page);
    }

    pub fn page_down(&mut self, page: usize, total: usize) {
        self.offset = (self.offset + page).min(Self::last(total));
        self.follow = self.offset == Self::last(total);
    }

    pub fn home(&mut self) {
        self.follow = false;
        self.offset = 0;
    }

    pub fn end(&mut self, total: usize) {
        self.follow = true;
        self.offset = Self::last(total);
    }
}

impl Default for LogScrollState {
    fn default() -> Self {
        Self::new()
    }
}

/// Bounded activity record with its scroll state.
#[derive(Debug, Clone, Default)]
pub struct ActivityLog {
    entries: VecDeque<String>,
    pub scroll: LogScrollState,
}

impl ActivityLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, evicting the oldest past [`ACTIVITY_CAPACITY`].
    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push_back(entry.into());
        if self.entries.len() > ACTIVITY_CAPACITY {
            self.entries.pop_front();
            self.scroll.offset = self.scroll.offset.saturating_sub(1);
        }
        if self.scroll.follow {
            self.scroll.offset = self.entries.len().saturating_sub(1);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

/// Render the activity panel. When following, the newest entries fill the
/// bottom of the panel.
pub fn render_logs(frame: &mut Frame, area: Rect, log: &ActivityLog) {
    let theme = ColorTheme::default();
    let visible = usize::from(area.height.saturating_sub(2));
    let first = if log.scroll.follow {
        log.len().saturating_sub(visible)
    } else {
        log.scroll.offset
    };

    let items: Vec<ListItem> = log
        .entries()
        .skip(first)
        .take(visible)
        .map(|entry| {
            let style = if entry.starts_with("[ERROR]") {
                theme.error_style()
            } else if entry.starts_with("[WARN]") {
                theme.warning_style()
            } else {
                theme.text_style()
            };
            ListItem::new(Line::raw(entry)).style(style)
        })
        .collect();

    let title = if log.len() > visible && !log.scroll.follow {
        format!(" Actividad ({}/{}) ", first + 1, log.len())
    } else {
        " Actividad ".to_string()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(theme.muted_style()),
    );
    frame.render_widget(list, area);
}
