use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tracing::info;

use filmstrip_core::FilmstripConfig;
use filmstrip_tui::{
    event::{AppEvent, EventHandler},
    input::{handle_key_event, handle_mouse_event},
    scroll::ScrollConfigExt,
    widgets::{FilmstripWidget, StatusBarWidget},
    App, Theme,
};

pub fn run(config: FilmstripConfig, labels: Vec<String>) -> Result<()> {
    info!(items = labels.len(), "Starting filmstrip");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange,
        SetTitle("Filmstrip")
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = main_loop(&mut terminal, config, labels);

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;

    result
}

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: FilmstripConfig,
    labels: Vec<String>,
) -> Result<()> {
    let event_handler = EventHandler::new(
        Duration::from_millis(config.ui.tick_rate_ms.max(1)),
        config.ui.scroll.animation_tick_duration(),
    );
    let mut app = App::new(labels, config, Theme::default(), Instant::now());

    // Checked at the end of each iteration to pick the next poll timeout
    let mut needs_fast_update = false;

    loop {
        app.tick(Instant::now());

        terminal.draw(|frame| {
            let size = frame.area();

            // Strip + status bar
            let main_layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(3), Constraint::Length(1)])
                .split(size);

            app.set_strip_area(main_layout[0]);
            FilmstripWidget::render(frame, main_layout[0], &app);
            StatusBarWidget::render(frame, main_layout[1], &app);
        })?;

        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    app.status_message = None;
                    app.handle_action(handle_key_event(key));
                }
                AppEvent::Mouse(mouse) => {
                    let action = handle_mouse_event(mouse, &app);
                    app.handle_action(action);
                }
                AppEvent::FocusLost => app.focus_lost(),
                // The next draw picks up the new strip area
                AppEvent::Resize(_, _) | AppEvent::FocusGained | AppEvent::Tick => {}
            }
        }

        needs_fast_update = app.needs_fast_update();

        if app.should_quit {
            break;
        }
    }

    app.teardown();
    info!("Filmstrip closed");
    Ok(())
}
