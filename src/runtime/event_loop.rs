use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::config;
use crate::player::{PlaybackBackend, PlaybackController, PlayerError};
use crate::runtime::input::{Action, action_for_key, action_for_mouse};
use crate::ui::{self, ScreenAreas};

/// State tracked by the runtime event loop across iterations.
#[derive(Debug, Default)]
pub struct EventLoopState {
    /// Clickable regions from the last drawn frame.
    pub areas: ScreenAreas,
}

/// Main terminal event loop: checks for track completion, draws, and handles
/// one input event per turn. Returns `Ok(())` when quit is requested.
pub fn run<P: PlaybackBackend>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    controller: &mut PlaybackController<P>,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        // Completion is delivered here, on the UI thread; the next draw
        // picks up the new icon and label.
        if controller.poll_completion() {
            if let Some(track) = controller.current_track() {
                tracing::debug!(title = %track.title, "finished; waiting for input");
            }
        }

        let snapshot = controller.snapshot();
        terminal.draw(|f| state.areas = ui::draw(f, app, &snapshot, &settings.ui))?;

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        let action = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                action_for_key(key, app.filter_mode)
            }
            Event::Mouse(mouse) => action_for_mouse(mouse, &state.areas),
            _ => None,
        };
        if let Some(action) = action {
            if dispatch(action, app, controller) {
                return Ok(());
            }
        }
    }
}

/// Apply `action` to the list and the player. Returns true when the user
/// asked to quit.
pub fn dispatch<P: PlaybackBackend>(
    action: Action,
    app: &mut App,
    controller: &mut PlaybackController<P>,
) -> bool {
    match action {
        Action::Quit => return true,
        Action::EnterFilter => app.enter_filter_mode(),
        Action::FilterInput(c) => app.push_filter_char(c),
        Action::FilterBackspace => app.pop_filter_char(),
        Action::ClearFilter => app.clear_filter(),
        Action::SelectNext => app.next(),
        Action::SelectPrev => app.prev(),
        Action::CommitFilter => {
            if app.display_indices().is_empty() {
                return false;
            }
            app.exit_filter_mode();
            play_selected(app, controller);
        }
        Action::PlaySelected => play_selected(app, controller),
        Action::PlayRow(position) => {
            if let Some(idx) = app.select_row(position) {
                report(app, controller.play(idx));
            }
        }
        Action::TogglePlayPause => report(app, controller.toggle_play_pause()),
        Action::NextTrack => {
            let result = controller.next();
            app.follow(controller.cursor());
            report(app, result);
        }
        Action::PrevTrack => {
            let result = controller.previous();
            app.follow(controller.cursor());
            report(app, result);
        }
    }
    false
}

fn play_selected<P: PlaybackBackend>(app: &mut App, controller: &mut PlaybackController<P>) {
    if app.selected_track().is_some() {
        let idx = app.selected;
        report(app, controller.play(idx));
    }
}

/// Player errors are not fatal: log them and show them next to the label.
fn report(app: &mut App, result: Result<(), PlayerError>) {
    match result {
        Ok(()) => app.clear_status(),
        Err(e) => {
            tracing::warn!(error = %e, "playback action failed");
            app.set_status(e.to_string());
        }
    }
}
