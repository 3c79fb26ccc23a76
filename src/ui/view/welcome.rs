use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Paragraph, Wrap},
};

use super::components::{BROWN, PEACH, render_button};
use super::layouts::centered_rect;
use crate::ui::state::App;

/// 欢迎页：标题、标语和开始按钮
pub fn render_welcome(frame: &mut Frame, app: &App, area: Rect) {
    frame.render_widget(Block::default().style(Style::default().bg(PEACH)), area);

    let welcome = &app.config.welcome;
    let inner = centered_rect(80, 60, area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // 标题
            Constraint::Length(3), // 标语
            Constraint::Length(3), // 按钮
            Constraint::Min(0),
        ])
        .split(inner);

    let title = Paragraph::new(welcome.title.as_str())
        .alignment(Alignment::Center)
        .style(Style::default().fg(BROWN).bg(PEACH).add_modifier(Modifier::BOLD));
    frame.render_widget(title, chunks[0]);

    let tagline = Paragraph::new(welcome.tagline.as_str())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(BROWN).bg(PEACH));
    frame.render_widget(tagline, chunks[1]);

    let button_area = centered_rect(50, 100, chunks[2]);
    render_button(frame, button_area, &welcome.button, true);
}
