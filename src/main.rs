mod config;
mod error;
mod logging;
mod models;
mod ui;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing::{info, warn};

use crate::config::load_config;
use crate::error::AppError;
use crate::ui::{App, render};

#[derive(Parser, Debug)]
#[command(name = "menuboard", version, about = "Restaurant menu manager for the terminal")]
struct Cli {
    /// Config file (default: ~/.config/menuboard/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Reject prices that are not numbers instead of storing NaN
    #[arg(long)]
    strict_prices: bool,

    /// Print the effective configuration and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref())?;
    if cli.strict_prices {
        config.menu.strict_prices = true;
    }

    if cli.print_config {
        print!("{}", config::render_config(&config)?);
        return Ok(());
    }

    let log_path = logging::init(&config.log);
    info!(log = ?log_path, strict_prices = config.menu.strict_prices, "session started");

    // 创建应用状态
    let mut app = App::new(config);

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    match &result {
        Ok(()) => info!(items = app.store.count(), "session ended"),
        Err(err) => warn!(error = %err, "session ended with error"),
    }

    result.map_err(AppError::from)
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
            if key.kind == crossterm::event::KeyEventKind::Press {
                if ui::handle_key_event(app, key.code)? {
                    break;
                }
            }
        }
    }
    Ok(())
}
