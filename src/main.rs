mod app;
mod cli;
mod config;
mod datasources;
mod error;
mod logic;
mod models;
mod ui;

use app::{App, Screen};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use error::{MazaoError, Result};
use logic::WeatherService;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use ui::screens::{AdvisoriesScreen, DashboardScreen, ForecastScreen};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match cli.command {
        Some(Commands::Init) => {
            Config::setup_interactive()?;
            return Ok(());
        }
        Some(Commands::Check) => return check(cli.config).await,
        None => {}
    }

    // Load configuration, running first-time setup when nothing is found.
    // The reload after setup applies ${VAR} substitution and validation.
    let config = if Config::exists(cli.config.as_ref()) {
        Config::load(cli.config)?
    } else {
        let (_, path) = Config::setup_interactive()?;
        Config::load(Some(path))?
    };

    let mut app = App::new();
    let service = WeatherService::new(config);

    // Initial fetch; failures become a status line, never a crash
    match service.refresh().await {
        Ok(snapshot) => app.update_weather(snapshot),
        Err(e) => {
            tracing::warn!("Initial weather fetch failed: {}", e);
            app.set_status(&format!("Weather fetch failed: {}", e));
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the main loop
    let result = run_app(&mut terminal, &mut app, &service).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn check(config_override: Option<PathBuf>) -> Result<()> {
    let config = Config::load(config_override)?;
    println!("Configuration: OK");

    let service = WeatherService::new(config);
    match service.check_connection().await {
        Ok(true) => println!("OpenWeatherMap: OK"),
        Ok(false) => println!("OpenWeatherMap: FAILED (non-success status)"),
        Err(e) => println!("OpenWeatherMap: FAILED ({})", e),
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    service: &WeatherService,
) -> Result<()>
where
    MazaoError: From<<B as ratatui::backend::Backend>::Error>,
{
    loop {
        // Draw UI
        terminal.draw(|f| {
            let area = f.area();

            match app.screen {
                Screen::Dashboard => {
                    let screen = DashboardScreen::new(app.snapshot.as_ref(), &app.advisories)
                        .with_status(app.status_message.as_deref());
                    f.render_widget(screen, area);
                }
                Screen::Forecast => {
                    f.render_widget(ForecastScreen::new(app.snapshot.as_ref()), area);
                }
                Screen::Advisories => {
                    let screen = AdvisoriesScreen::new(&app.advisories)
                        .with_selection(app.advisories_state.selected_index);
                    f.render_widget(screen, area);
                }
            }
        })?;

        // Handle input with timeout for async operations
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') => app.quit(),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.quit();
                    }
                    KeyCode::Esc => app.switch_screen(Screen::Dashboard),
                    KeyCode::Char('r') => app.request_refresh(),
                    KeyCode::Char(c) => {
                        if let Some(screen) = Screen::from_key(c) {
                            app.switch_screen(screen);
                        }
                    }
                    KeyCode::Up if app.screen == Screen::Advisories => {
                        app.advisories_state.prev();
                    }
                    KeyCode::Down if app.screen == Screen::Advisories => {
                        app.advisories_state.next(app.advisories.len());
                    }
                    _ => {}
                }
            }
        }

        // Handle refresh request
        if app.needs_refresh {
            app.needs_refresh = false;
            app.refreshing = true;
            match service.refresh().await {
                Ok(snapshot) => {
                    let used_fallback = snapshot.used_fallback;
                    app.update_weather(snapshot);
                    if !used_fallback {
                        app.set_status("Weather refreshed");
                    }
                }
                Err(e) => {
                    app.set_status(&format!("Refresh failed: {}", e));
                }
            }
            app.refreshing = false;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
