//! Terminal shell and entry point.
//!
//! This module provides the thin integration layer between the eventdeck
//! library and the terminal: it parses the CLI, sets the terminal up (raw
//! mode, alternate screen), spawns the operations worker thread, translates
//! key presses into application events, and executes the actions the
//! handler returns.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────┐
//! │   Main Thread               │
//! │  ┌──────────────────────┐   │
//! │  │  AppState (library)  │   │  ← UI state, event handling
//! │  └──────────────────────┘   │
//! │          │ mpsc              │
//! │          ▼                   │
//! │  ┌──────────────────────┐   │
//! │  │  OpsWorker (thread)  │   │  ← Blocking HTTP calls
//! │  └──────────────────────┘   │
//! └─────────────────────────────┘
//! ```
//!
//! # Event Mapping
//!
//! Key presses are translated per screen:
//!
//! - List, normal mode: `j`/`k`/arrows navigate, `Enter` views, `n` creates,
//!   `e` edits, `d` deletes (with y/n confirmation), `/` searches,
//!   `r` refreshes, `q` quits
//! - List, search mode: typing filters, `Esc` exits search, `Enter` views,
//!   `Ctrl+n`/`Ctrl+p` navigate
//! - Detail: `e` edits, `r` refreshes, `Esc` goes back
//! - Form: typing edits the focused field, `Tab`/`↓` and `Shift+Tab`/`↑`
//!   move focus, `Space`/`←`/`→` cycle the status, `Enter` saves, `Esc`
//!   cancels
//!
//! The render loop polls the terminal with a 50 ms timeout and drains
//! worker responses between polls, so a slow API never blocks input.

use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, execute};

use eventdeck::api::HttpEventsClient;
use eventdeck::app::{
    handle_event, Action, AppState, Event, FormField, FormLoad, InputMode, Route, SearchFocus,
};
use eventdeck::worker::{OpsRequest, OpsResponse, OpsWorker};
use eventdeck::{observability, Config};

#[derive(Parser)]
#[command(name = "eventdeck")]
#[command(about = "Terminal client for browsing and managing events", long_about = None)]
struct Cli {
    /// Base URL of the events API (overrides EVENTDECK_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Built-in theme name: deck-dark or deck-light
    #[arg(long)]
    theme: Option<String>,

    /// Path to a custom TOML theme file
    #[arg(long)]
    theme_file: Option<String>,

    /// Log filter directive (RUST_LOG takes precedence)
    #[arg(long)]
    log_level: Option<String>,

    /// Starting route: "/", "/events/new", "/events/:id", "/events/:id/edit"
    route: Option<String>,
}

/// Merges CLI flags over environment configuration.
fn resolve_config(cli: &Cli) -> Config {
    let mut config = Config::from_env();
    if let Some(api_url) = &cli.api_url {
        config.api_url.clone_from(api_url);
    }
    if cli.theme.is_some() {
        config.theme_name.clone_from(&cli.theme);
    }
    if cli.theme_file.is_some() {
        config.theme_file.clone_from(&cli.theme_file);
    }
    if cli.log_level.is_some() {
        config.log_level.clone_from(&cli.log_level);
    }
    config
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli);
    observability::init_tracing(&config);

    let start_route = cli.route.as_deref().map_or(Route::List, |path| {
        Route::parse(path).unwrap_or_else(|| {
            tracing::warn!(path, "unknown route, falling back to the event list");
            Route::List
        })
    });

    tracing::info!(api_url = %config.api_url, route = %start_route.path(), "eventdeck starting");

    // The worker thread owns the HTTP client; the UI only sees channels.
    let (requests_tx, requests_rx) = mpsc::channel::<OpsRequest>();
    let (responses_tx, responses_rx) = mpsc::channel::<OpsResponse>();
    let gateway = HttpEventsClient::new(config.api_url.clone());
    let worker = OpsWorker::new(Box::new(gateway), responses_tx);
    let worker_handle = thread::spawn(move || worker.run(&requests_rx));

    let mut app = eventdeck::initialize(&config);

    enable_raw_mode().context("failed to enable raw mode")?;
    execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)
        .context("failed to enter alternate screen")?;

    let result = run_loop(&mut app, start_route, &requests_tx, &responses_rx);

    // Restore the terminal before reporting any error.
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);

    // Closing the request channel lets the worker exit.
    drop(requests_tx);
    let _ = worker_handle.join();

    tracing::info!("eventdeck stopped");
    result
}

/// Runs the render/input loop until the user quits.
fn run_loop(
    app: &mut AppState,
    start_route: Route,
    requests: &mpsc::Sender<OpsRequest>,
    responses: &mpsc::Receiver<OpsResponse>,
) -> anyhow::Result<()> {
    let mut should_quit = false;
    let mut dirty = true;

    dispatch(app, &Event::Navigate(start_route), requests, &mut should_quit)?;

    loop {
        if dirty {
            let (cols, rows) = terminal::size().context("failed to read terminal size")?;
            eventdeck::ui::render(app, rows as usize, cols as usize);
            dirty = false;
        }

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                TermEvent::Key(key)
                    if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                {
                    if let Some(app_event) = map_key_event(app, &key) {
                        dirty |= dispatch(app, &app_event, requests, &mut should_quit)?;
                    }
                }
                TermEvent::Resize(_, _) => dirty = true,
                _ => {}
            }
        }

        while let Ok(response) = responses.try_recv() {
            dirty |= dispatch(app, &Event::WorkerResponse(response), requests, &mut should_quit)?;
        }

        if should_quit {
            break;
        }
    }

    Ok(())
}

/// Handles one application event and executes the resulting actions.
///
/// Returns whether the UI should re-render.
fn dispatch(
    app: &mut AppState,
    app_event: &Event,
    requests: &mpsc::Sender<OpsRequest>,
    should_quit: &mut bool,
) -> anyhow::Result<bool> {
    let (should_render, actions) = handle_event(app, app_event)?;
    for action in actions {
        match action {
            Action::Quit => *should_quit = true,
            Action::PostToWorker(request) => {
                tracing::debug!(operation = request.operation(), "posting request to worker");
                if requests.send(request).is_err() {
                    anyhow::bail!("operations worker stopped unexpectedly");
                }
            }
        }
    }
    Ok(should_render)
}

/// Maps a key press to an application event for the current screen.
fn map_key_event(app: &AppState, key: &KeyEvent) -> Option<Event> {
    // Ctrl bindings work regardless of screen or mode.
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('n') => Some(Event::KeyDown),
            KeyCode::Char('p') => Some(Event::KeyUp),
            KeyCode::Char('c') => Some(Event::Quit),
            _ => None,
        };
    }

    match app.route {
        Route::List => map_list_key(app, key),
        Route::Detail(_) => map_detail_key(key),
        Route::New | Route::Edit(_) => map_form_key(app, key),
    }
}

/// Key mapping for the table screen, by input mode.
fn map_list_key(app: &AppState, key: &KeyEvent) -> Option<Event> {
    match app.input_mode {
        InputMode::ConfirmDelete { .. } => match key.code {
            KeyCode::Char('y') => Some(Event::ConfirmDelete),
            KeyCode::Char('n') | KeyCode::Esc => Some(Event::CancelDelete),
            _ => None,
        },
        InputMode::Search(focus) => match key.code {
            KeyCode::Esc => Some(Event::ExitSearch),
            KeyCode::Enter => Some(Event::Select),
            KeyCode::Down => Some(Event::KeyDown),
            KeyCode::Up => Some(Event::KeyUp),
            KeyCode::Backspace => Some(Event::Backspace),
            KeyCode::Tab => Some(Event::FocusResults),
            KeyCode::Char('/') => Some(Event::FocusSearchBar),
            KeyCode::Char(c) => match focus {
                SearchFocus::Typing => Some(Event::Char(c)),
                SearchFocus::Navigating => match c {
                    'j' => Some(Event::KeyDown),
                    'k' => Some(Event::KeyUp),
                    _ => None,
                },
            },
            _ => None,
        },
        InputMode::Normal => match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Event::KeyDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Event::KeyUp),
            KeyCode::Enter | KeyCode::Char('v') => Some(Event::Select),
            KeyCode::Char('n') => Some(Event::NewEvent),
            KeyCode::Char('e') => Some(Event::EditEvent),
            KeyCode::Char('d') => Some(Event::DeleteEvent),
            KeyCode::Char('/') => Some(Event::SearchMode),
            KeyCode::Char('r') => Some(Event::Refresh),
            KeyCode::Char('q') => Some(Event::Quit),
            KeyCode::Esc => Some(Event::Back),
            _ => None,
        },
    }
}

/// Key mapping for the detail screen.
fn map_detail_key(key: &KeyEvent) -> Option<Event> {
    match key.code {
        KeyCode::Char('e') => Some(Event::EditEvent),
        KeyCode::Char('r') => Some(Event::Refresh),
        KeyCode::Esc | KeyCode::Char('b') => Some(Event::Back),
        KeyCode::Char('q') => Some(Event::Quit),
        _ => None,
    }
}

/// Key mapping for the form screens.
///
/// Printable characters (including 'q') edit the focused field, so the only
/// ways out are Esc (cancel) and Enter (save).
fn map_form_key(app: &AppState, key: &KeyEvent) -> Option<Event> {
    let status_focused =
        matches!(&app.form, FormLoad::Ready(form) if form.focus == FormField::Status);

    match key.code {
        KeyCode::Esc => Some(Event::Back),
        KeyCode::Enter => Some(Event::Submit),
        KeyCode::Tab | KeyCode::Down => Some(Event::NextField),
        KeyCode::BackTab | KeyCode::Up => Some(Event::PrevField),
        KeyCode::Backspace => Some(Event::Backspace),
        KeyCode::Left if status_focused => Some(Event::StatusPrev),
        KeyCode::Right if status_focused => Some(Event::StatusNext),
        KeyCode::Char(' ') if status_focused => Some(Event::StatusNext),
        KeyCode::Char(c) => Some(Event::Char(c)),
        _ => None,
    }
}
