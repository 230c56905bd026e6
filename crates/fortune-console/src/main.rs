// crates/fortune-console/src/main.rs

mod app;
mod components;
mod tree;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use fortune_api::ApiClient;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{io, time::Duration};
use tokio::sync::mpsc::{self, UnboundedReceiver};

use crate::app::{ApiEvent, App, DashboardTab, InputMode, View};

#[derive(Parser)]
#[clap(name = "fortune-console")]
#[clap(about = "Terminal dashboard for the Fortune AI trading backend")]
struct Cli {
    /// Backend base URL
    #[clap(short, long, default_value = fortune_api::DEFAULT_API_URL)]
    api_url: String,

    /// Enable debug logging
    #[clap(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    if cli.debug {
        tracing_subscriber::fmt::init();
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let (events_tx, events_rx) = mpsc::unbounded_channel::<ApiEvent>();
    let app = App::new(ApiClient::new(&cli.api_url), events_tx);
    let res = run_app(&mut terminal, app, events_rx).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    mut events_rx: UnboundedReceiver<ApiEvent>,
) -> Result<()> {
    loop {
        // Draw UI
        terminal.draw(|f| ui::draw(f, &app))?;

        // Handle events with timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match app.input_mode {
                    InputMode::Normal => match key.code {
                        // Global hotkeys
                        KeyCode::Char('q') | KeyCode::Char('Q') => {
                            app.should_quit = true;
                        }
                        KeyCode::Tab => {
                            app.next_view();
                        }
                        KeyCode::BackTab => {
                            app.prev_view();
                        }
                        KeyCode::F(1) | KeyCode::Char('?') => {
                            app.toggle_help();
                        }
                        KeyCode::Esc => {
                            app.close_help();
                        }
                        KeyCode::Char('g') | KeyCode::Char('G') => {
                            app.toggle_ai();
                        }

                        // View-local hotkeys
                        code => match app.view {
                            View::Scaffolder => match code {
                                KeyCode::Char('e') | KeyCode::Char('E') => {
                                    app.start_editing();
                                }
                                KeyCode::Enter => {
                                    app.submit_scaffold();
                                }
                                KeyCode::Char('c') | KeyCode::Char('C') => {
                                    app.copy_prompt();
                                }
                                KeyCode::Up | KeyCode::Char('k') => {
                                    app.scaffolder.select_prev();
                                }
                                KeyCode::Down | KeyCode::Char('j') => {
                                    app.scaffolder.select_next();
                                }
                                KeyCode::Char(' ') => {
                                    app.scaffolder.toggle_fold();
                                }
                                _ => {}
                            },
                            View::Strategy => match code {
                                KeyCode::Char('e') | KeyCode::Char('E') => {
                                    app.start_editing();
                                }
                                KeyCode::Enter => {
                                    app.submit_strategy();
                                }
                                KeyCode::Up | KeyCode::Char('k') => {
                                    app.strategy.scroll_up();
                                }
                                KeyCode::Down | KeyCode::Char('j') => {
                                    app.strategy.scroll_down();
                                }
                                _ => {}
                            },
                            View::Backtest => match code {
                                KeyCode::Char('s') | KeyCode::Char('S') => {
                                    app.backtest.next_symbol();
                                }
                                KeyCode::Char('t') | KeyCode::Char('T') => {
                                    app.backtest.next_strategy();
                                }
                                KeyCode::Enter => {
                                    app.submit_backtest();
                                }
                                KeyCode::Up | KeyCode::Char('k') => {
                                    app.backtest.select_prev_trade();
                                }
                                KeyCode::Down | KeyCode::Char('j') => {
                                    app.backtest.select_next_trade();
                                }
                                _ => {}
                            },
                            View::Dashboard => match code {
                                KeyCode::Left | KeyCode::Char('o') | KeyCode::Char('O') => {
                                    app.dashboard.tab = DashboardTab::Overview;
                                }
                                KeyCode::Right | KeyCode::Char('a') | KeyCode::Char('A') => {
                                    app.dashboard.tab = DashboardTab::Alerts;
                                }
                                KeyCode::Char('f') | KeyCode::Char('F') => {
                                    app.sync_broker();
                                }
                                KeyCode::Char('r') | KeyCode::Char('R') => {
                                    app.reload_dashboard();
                                }
                                _ => {}
                            },
                        },
                    },

                    InputMode::Editing => match key.code {
                        KeyCode::Enter => {
                            app.submit_input();
                        }
                        KeyCode::Esc => {
                            app.cancel_input();
                        }
                        KeyCode::Backspace => {
                            app.delete_char();
                        }
                        KeyCode::Char(c) => {
                            app.enter_char(c);
                        }
                        _ => {}
                    },
                }
            }
        }

        // Apply finished backend replies
        while let Ok(reply) = events_rx.try_recv() {
            app.handle_api_event(reply);
        }

        app.on_tick();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
