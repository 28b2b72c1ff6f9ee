//! UI rendering helpers for the terminal user interface.
//!
//! This module renders the player screen using `ratatui` and reports where
//! the clickable parts ended up so mouse input can be mapped back to them.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph, Wrap},
};
use std::{collections::BTreeMap, sync::LazyLock};

use crate::app::{App, match_span};
use crate::catalog::Track;
use crate::config::{TrackDisplayField, UiSettings};
use crate::player::{PlaybackSnapshot, PlaybackStatus};

const BUTTON_WIDTH: u16 = 7;

static CONTROLS_MAP: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = BTreeMap::new();
    map.insert("j/k", "up/down");
    map.insert("enter", "play selected");
    map.insert("space/p", "play/pause");
    map.insert("h/l", "prev/next song");
    map.insert("/", "filter");
    map.insert("esc", "clear filter");
    map.insert("q", "quit");
    map
});

/// Render the controls help text.
fn controls_text() -> String {
    // Keep the rendered order stable and human-friendly.
    let order = ["j/k", "enter", "space/p", "h/l", "/", "esc", "q"];
    order
        .iter()
        .filter_map(|k| CONTROLS_MAP.get(k).map(|v| format!("[{}] {}", k, v)))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Screen regions that react to mouse clicks, as laid out by the last `draw`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub filter: Rect,
    /// Inner area of the track list (one row per line).
    pub list: Rect,
    /// Display position of the first rendered row.
    pub list_start: usize,
    /// Number of rendered rows.
    pub list_len: usize,
    pub prev: Rect,
    pub toggle: Rect,
    pub next: Rect,
}

/// Build the now-playing track text according to `ui` settings.
pub fn now_playing_track_text(track: &Track, ui: &UiSettings) -> String {
    let parts: Vec<&str> = ui
        .now_playing_track_fields
        .iter()
        .map(|f| match f {
            TrackDisplayField::Title => track.title.trim(),
            TrackDisplayField::Artist => track.artist.trim(),
        })
        .filter(|s| !s.is_empty())
        .collect();

    if parts.is_empty() {
        track.title.clone()
    } else {
        parts.join(&ui.now_playing_track_separator)
    }
}

/// The label shown in the now-playing box.
pub fn now_playing_label(app: &App, playback: &PlaybackSnapshot, ui: &UiSettings) -> String {
    let track = playback.track.and_then(|i| app.catalog.get(i));
    let mut label = match (playback.status, track) {
        (PlaybackStatus::Playing, Some(t)) => now_playing_track_text(t, ui),
        (PlaybackStatus::Paused, Some(t)) => format!("{} (paused)", now_playing_track_text(t, ui)),
        (PlaybackStatus::Stopped, Some(t)) => format!("{} (stopped)", now_playing_track_text(t, ui)),
        _ => "Nothing playing".to_string(),
    };
    if let Some(msg) = &app.status {
        label.push_str(" • ");
        label.push_str(msg);
    }
    label
}

/// Split `text` into spans, emphasising the part matching `query`.
fn highlighted<'a>(text: &'a str, query: &str, base: Style) -> Vec<Span<'a>> {
    match match_span(text, query) {
        Some(r) => vec![
            Span::styled(&text[..r.start], base),
            Span::styled(
                &text[r.start..r.end],
                base.add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ),
            Span::styled(&text[r.end..], base),
        ],
        None => vec![Span::styled(text, base)],
    }
}

fn track_row<'a>(track: &'a Track, query: &str) -> ListItem<'a> {
    let mut spans = highlighted(&track.title, query, Style::default());
    if !track.artist.is_empty() {
        spans.push(Span::raw("  "));
        spans.extend(highlighted(
            &track.artist,
            query,
            Style::default().add_modifier(Modifier::DIM),
        ));
    }
    ListItem::new(Line::from(spans))
}

/// Window of rows to render so the selection stays centered when possible.
/// Returns `(start, end, selected_pos_in_visible)`.
fn visible_window(total: usize, height: usize, sel_pos: usize) -> (usize, usize, usize) {
    if total <= height || height == 0 {
        return (0, total, sel_pos);
    }
    let half = height / 2;
    let mut start = sel_pos.saturating_sub(half);
    if start + height > total {
        start = total - height;
    }
    (start, start + height, sel_pos - start)
}

fn button(label: &str, active: bool) -> Paragraph<'_> {
    let mut p = Paragraph::new(label)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    if active {
        p = p.bold();
    }
    p
}

/// Render the entire UI into `frame` and return the clickable regions.
pub fn draw(
    frame: &mut Frame,
    app: &App,
    playback: &PlaybackSnapshot,
    ui_settings: &UiSettings,
) -> ScreenAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(frame.area());
    let mut areas = ScreenAreas::default();

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" minitune ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Filter field
    let filter_line = if app.filter_mode {
        Line::from(vec![Span::raw(app.filter_query.as_str()), Span::raw("_").slow_blink()])
    } else if app.filter_query.is_empty() {
        Line::from("press / to filter").dim()
    } else {
        Line::from(app.filter_query.as_str())
    };
    let filter_title = if app.filter_mode { " filter (typing) " } else { " filter " };
    let filter = Paragraph::new(filter_line).block(
        Block::bordered()
            .padding(Padding::horizontal(1))
            .title(filter_title),
    );
    frame.render_widget(filter, chunks[1]);
    areas.filter = chunks[1];

    // Track list
    {
        let display = app.display_indices();
        let title = if app.has_tracks() { " tracks " } else { " tracks (none) " };
        let block = Block::default().borders(Borders::ALL).title(title);
        let inner = block.inner(chunks[2]);

        let total = display.len();
        let sel_pos = app.selected_position().unwrap_or(0);
        let (start, end, selected_pos_in_visible) =
            visible_window(total, inner.height as usize, sel_pos);

        // Only build ListItems for the visible window.
        let items: Vec<ListItem> = display[start..end]
            .iter()
            .filter_map(|&i| app.catalog.get(i))
            .map(|t| track_row(t, &app.filter_query))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut state = ListState::default();
        if total > 0 {
            state.select(Some(selected_pos_in_visible));
        }
        frame.render_stateful_widget(list, chunks[2], &mut state);

        areas.list = inner;
        areas.list_start = start;
        areas.list_len = end - start;
    }

    // Now playing
    let now_playing = Paragraph::new(now_playing_label(app, playback, ui_settings))
        .block(
            Block::bordered()
                .padding(Padding::horizontal(1))
                .title(" now playing "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(now_playing, chunks[3]);

    // Transport buttons, centered.
    let transport = Layout::default()
        .direction(Direction::Horizontal)
        .flex(ratatui::layout::Flex::Center)
        .constraints([
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Length(BUTTON_WIDTH),
        ])
        .split(chunks[4]);
    let playing = playback.status == PlaybackStatus::Playing;
    frame.render_widget(button("⏮", false), transport[0]);
    frame.render_widget(button(playback.icon.glyph(), playing), transport[1]);
    frame.render_widget(button("⏭", false), transport[2]);
    areas.prev = transport[0];
    areas.toggle = transport[1];
    areas.next = transport[2];

    let footer = Paragraph::new(controls_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding::horizontal(1)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[5]);

    areas
}
