use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::catalog::Catalog;
use crate::config;
use crate::player::{PlaybackController, RodioBackend};

mod event_loop;
mod input;
mod logging;
mod settings;


pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut settings = settings::load_settings();

    // An explicit assets directory on the command line wins over the config.
    if let Some(dir) = env::args_os().nth(1) {
        settings.catalog.assets_dir = PathBuf::from(dir);
    }

    match logging::init(&settings.log) {
        Ok(Some(path)) => tracing::info!(log = %path.display(), "minitune starting"),
        Ok(None) => {}
        Err(e) => eprintln!("minitune: logging disabled: {e}"),
    }
    tracing::debug!(config = ?config::resolve_config_path(), "settings loaded");

    let catalog = Catalog::load(&settings.catalog)?;
    let backend = RodioBackend::open_default(&settings.audio)?;
    let mut controller = PlaybackController::new(backend, catalog.clone(), settings.audio.volume);
    let mut app = App::new(catalog);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if settings.ui.mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut state = event_loop::EventLoopState::default();
    let run_result =
        event_loop::run(&mut terminal, &settings, &mut app, &mut controller, &mut state);

    controller.shutdown(Duration::from_millis(settings.audio.quit_fade_out_ms));

    disable_raw_mode()?;
    if settings.ui.mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("minitune exiting");
    run_result
}
