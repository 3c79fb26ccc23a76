//! 视图层模块
//!
//! 包含主渲染入口，按当前路由选择页面

pub mod add_item;
pub mod components;
pub mod home;
pub mod layouts;
pub mod welcome;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::navigation::Route;
use super::state::App;
use add_item::render_add_item;
use components::{BROWN, PEACH};
use home::render_home;
use welcome::render_welcome;

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &App) {
    let route = app.route();
    let header_height = if route.shows_header() { 3 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height), // 标题栏
            Constraint::Min(5),                // 页面
            Constraint::Length(3),             // 帮助
        ])
        .split(frame.area());

    if route.shows_header() {
        render_header(frame, app, chunks[0]);
    }

    match route {
        Route::Welcome => render_welcome(frame, app, chunks[1]),
        Route::Home => render_home(frame, app, chunks[1]),
        Route::AddItem => render_add_item(frame, app, chunks[1]),
    }

    render_help(frame, app, chunks[2]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let trail: Vec<&str> = app.navigator.stack().iter().map(|route| route.name()).collect();
    let header = Paragraph::new(trail.join(" > "))
        .style(Style::default().fg(PEACH).bg(BROWN).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.route() {
        Route::Welcome => "[Enter] Get started  [q] Quit",
        Route::Home => "[a] Add item  [j/k] Navigate  [Esc] Back  [q] Quit",
        Route::AddItem => "[Tab] Next field  [←/→] Course  [Enter] Add  [Esc] Cancel",
    };

    let message = app.message.as_deref().unwrap_or("");
    let text = if message.is_empty() {
        help_text.to_string()
    } else {
        format!("{}  |  {}", help_text, message)
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}
