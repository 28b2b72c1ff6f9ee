//! Translate terminal key and mouse events into player actions.

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

use crate::ui::ScreenAreas;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    EnterFilter,
    FilterInput(char),
    FilterBackspace,
    /// Drop the query and show the whole catalog again.
    ClearFilter,
    /// Leave filter mode and play the selected match.
    CommitFilter,
    SelectNext,
    SelectPrev,
    PlaySelected,
    /// Play the row at this position of the visible list.
    PlayRow(usize),
    TogglePlayPause,
    NextTrack,
    PrevTrack,
}

pub fn action_for_key(key: KeyEvent, filter_mode: bool) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    if filter_mode {
        return match key.code {
            KeyCode::Esc => Some(Action::ClearFilter),
            KeyCode::Backspace => Some(Action::FilterBackspace),
            KeyCode::Enter => Some(Action::CommitFilter),
            KeyCode::Down => Some(Action::SelectNext),
            KeyCode::Up => Some(Action::SelectPrev),
            KeyCode::Char('j' | 'n') if ctrl => Some(Action::SelectNext),
            KeyCode::Char('k' | 'p') if ctrl => Some(Action::SelectPrev),
            KeyCode::Char(c) if !ctrl && !c.is_control() => Some(Action::FilterInput(c)),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('/') => Some(Action::EnterFilter),
        KeyCode::Esc => Some(Action::ClearFilter),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::SelectNext),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::SelectPrev),
        KeyCode::Enter => Some(Action::PlaySelected),
        KeyCode::Char(' ') | KeyCode::Char('p') => Some(Action::TogglePlayPause),
        KeyCode::Char('l') | KeyCode::Right => Some(Action::NextTrack),
        KeyCode::Char('h') | KeyCode::Left => Some(Action::PrevTrack),
        _ => None,
    }
}

pub fn action_for_mouse(ev: MouseEvent, areas: &ScreenAreas) -> Option<Action> {
    let pos = Position::new(ev.column, ev.row);
    match ev.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if areas.toggle.contains(pos) {
                Some(Action::TogglePlayPause)
            } else if areas.prev.contains(pos) {
                Some(Action::PrevTrack)
            } else if areas.next.contains(pos) {
                Some(Action::NextTrack)
            } else if areas.filter.contains(pos) {
                Some(Action::EnterFilter)
            } else if areas.list.contains(pos) {
                let offset = (ev.row - areas.list.y) as usize;
                (offset < areas.list_len).then(|| Action::PlayRow(areas.list_start + offset))
            } else {
                None
            }
        }
        MouseEventKind::ScrollDown => Some(Action::SelectNext),
        MouseEventKind::ScrollUp => Some(Action::SelectPrev),
        _ => None,
    }
}
