//! Application model: the `App` list presenter.
//!
//! `App` owns the catalog view shown in the track list: the filter query, the
//! rows it leaves visible and the selected row.

use crate::catalog::{Catalog, Track};

use super::filter::filter_indices;

/// The main application model.
pub struct App {
    pub catalog: Catalog,
    /// Catalog index of the highlighted row.
    pub selected: usize,
    pub filter_mode: bool,
    pub filter_query: String,
    /// Transient message shown in the now-playing box (e.g. a load failure).
    pub status: Option<String>,

    view: Vec<usize>,
}

impl App {
    /// Create a new `App` showing the whole `catalog`.
    pub fn new(catalog: Catalog) -> Self {
        let view = (0..catalog.len()).collect();
        Self {
            catalog,
            selected: 0,
            filter_mode: false,
            filter_query: String::new(),
            status: None,
            view,
        }
    }

    /// Catalog indices of the visible rows, in display order.
    pub fn display_indices(&self) -> &[usize] {
        &self.view
    }

    /// Return true if the catalog contains any tracks.
    pub fn has_tracks(&self) -> bool {
        !self.catalog.is_empty()
    }

    /// The highlighted track, if any row is visible.
    pub fn selected_track(&self) -> Option<&Track> {
        if self.view.contains(&self.selected) {
            self.catalog.get(self.selected)
        } else {
            None
        }
    }

    /// Position of the selected row within the visible rows.
    pub fn selected_position(&self) -> Option<usize> {
        self.view.iter().position(|&i| i == self.selected)
    }

    /// Select the row at `position` in the visible list and return its catalog index.
    pub fn select_row(&mut self, position: usize) -> Option<usize> {
        let idx = *self.view.get(position)?;
        self.selected = idx;
        Some(idx)
    }

    /// Move the selection onto `idx` if that row is currently visible.
    pub fn follow(&mut self, idx: usize) {
        if self.view.contains(&idx) {
            self.selected = idx;
        }
    }

    /// Move selection to the next visible track, wrapping to the first.
    pub fn next(&mut self) {
        if self.view.is_empty() {
            return;
        }
        self.selected = match self.selected_position() {
            Some(p) => self.view[(p + 1) % self.view.len()],
            None => self.view[0],
        };
    }

    /// Move selection to the previous visible track, wrapping to the last.
    pub fn prev(&mut self) {
        if self.view.is_empty() {
            return;
        }
        let last = self.view.len() - 1;
        self.selected = match self.selected_position() {
            Some(0) | None => self.view[last],
            Some(p) => self.view[p - 1],
        };
    }

    /// Enter filter mode: keystrokes now edit the query.
    pub fn enter_filter_mode(&mut self) {
        self.filter_mode = true;
    }
    /// Leave filter mode, keeping the current query applied.
    pub fn exit_filter_mode(&mut self) {
        self.filter_mode = false;
    }
    /// Clear the active filter and restore the full list.
    pub fn clear_filter(&mut self) {
        self.filter_query.clear();
        self.filter_mode = false;
        self.refresh_view();
    }
    /// Append a character to the filter query and refresh view.
    pub fn push_filter_char(&mut self, c: char) {
        self.filter_query.push(c);
        self.refresh_view();
    }
    /// Remove the last character from the filter query and refresh view.
    pub fn pop_filter_char(&mut self) {
        self.filter_query.pop();
        self.refresh_view();
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status = Some(msg.into());
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    fn refresh_view(&mut self) {
        self.view = filter_indices(self.catalog.tracks(), &self.filter_query);
        self.ensure_selected_visible();
    }

    /// Ensure that `selected` is part of the current filtered view,
    /// otherwise move selection to the first visible track.
    fn ensure_selected_visible(&mut self) {
        match self.view.first() {
            None => self.selected = 0,
            Some(&first) if !self.view.contains(&self.selected) => self.selected = first,
            Some(_) => {}
        }
    }
}
