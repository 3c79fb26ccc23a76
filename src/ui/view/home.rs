use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use super::components::{ACCENT, BROWN, PEACH, render_button};
use crate::models::Course;
use crate::ui::state::App;

/// 菜单列表页
pub fn render_home(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // 列表
            Constraint::Length(4), // 详情
            Constraint::Length(3), // 添加按钮
            Constraint::Length(3), // 统计
        ])
        .split(area);

    render_menu_list(frame, app, chunks[0]);
    render_details(frame, app, chunks[1]);
    render_button(frame, chunks[2], "Add Item", false);
    render_summary(frame, app, chunks[3]);
}

fn render_menu_list(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title("Menu")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BROWN));

    if app.store.is_empty() {
        let empty = Paragraph::new("No menu items yet, press 'a' to add the first dish")
            .style(Style::default().fg(Color::Gray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .store
        .items()
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let style = if i == app.selected_index {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(PEACH)
            };
            ListItem::new(Line::from(vec![Span::styled(app.item_line(item), style)]))
        })
        .collect();

    let list = List::new(items).block(block);

    let mut state = ListState::default();
    state.select(Some(app.selected_index));

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_details(frame: &mut Frame, app: &App, area: Rect) {
    let content = match app.selected_item() {
        Some(item) => format!(
            "#{}  {}\nCourse: {}  Added: {}",
            item.id,
            item.name,
            item.course,
            item.added_at.format("%H:%M:%S"),
        ),
        None => String::new(),
    };

    let details = Paragraph::new(content)
        .block(Block::default().title("Details").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    frame.render_widget(details, area);
}

fn render_summary(frame: &mut Frame, app: &App, area: Rect) {
    let per_course: Vec<String> = Course::ALL
        .iter()
        .map(|course| format!("{}: {}", course, app.store.count_by_course(*course)))
        .collect();

    let text = format!(
        "Total Menu Items: {}  |  {}",
        app.store.count(),
        per_course.join("  ")
    );

    let summary = Paragraph::new(text)
        .style(Style::default().fg(Color::White).bg(ACCENT))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(summary, area);
}
